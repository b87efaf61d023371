use clap::Parser;

use ministopwatch::{Config, Theme};

#[derive(Parser, Debug)]
#[command(name = "ministopwatch", version, about = "A mini terminal stopwatch")]
pub struct Args {
    /// Colour theme to start with
    #[arg(long, default_value_t = Theme::Dark)]
    pub theme: Theme,

    /// Wait a full second before the first tick after starting or unpausing
    #[arg(long)]
    pub no_immediate: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            theme: self.theme,
            immediate: !self.no_immediate,
            ..Config::default()
        }
    }
}
