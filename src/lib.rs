//! A mini stopwatch: a start/pause/reset state machine advanced by a periodic
//! tick source on tokio, plus the widget model that presents it.

pub mod app;
pub mod config;
pub mod error;
pub mod stopwatch;
pub mod ticker;
pub mod widget;

pub use app::App;
pub use config::Config;
pub use error::StopwatchError;
pub use stopwatch::{Phase, TimerState, format_elapsed};
pub use ticker::{Period, TickSource, TickSourceBuilder};
pub use widget::{Action, Theme, View};
