use std::time::Duration;

use crate::{stopwatch::TICK_MS, widget::Theme};

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    /// Tick once as soon as the stopwatch starts running, instead of one
    /// full interval later.
    pub immediate: bool,
    /// Wall-clock spacing between ticks while running.
    pub tick: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            immediate: true,
            tick: Duration::from_millis(TICK_MS),
        }
    }
}
