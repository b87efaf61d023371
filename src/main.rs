mod cli;

use std::{io, thread};

use anyhow::Context;
use async_channel::Sender;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::filter::EnvFilter;

use ministopwatch::{Action, App};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    init_logging(args.verbose);

    let mut app = App::new(&args.config()).context("invalid configuration")?;

    let (tx, rx) = async_channel::unbounded();
    // Blocking stdin reads live on a plain thread so they never hold up
    // runtime shutdown.
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || read_actions(tx))
        .context("failed to spawn stdin reader")?;

    let mut stdout = io::stdout().lock();
    app.run(rx, &mut stdout)
        .await
        .context("failed to draw the stopwatch")?;

    Ok(())
}

fn read_actions(tx: Sender<Action>) {
    for line in io::stdin().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("stdin read failed: {e}");
                break;
            }
        };

        match Action::parse(&line) {
            Some(action) => {
                if tx.send_blocking(action).is_err() {
                    break;
                }
            }
            None => warn!(input = %line.trim(), "ignoring unknown command"),
        }
    }
    debug!("stdin closed");
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
