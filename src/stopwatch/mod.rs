pub mod format;
pub mod state;

pub use format::format_elapsed;
pub use state::{Phase, TICK_MS, TimerState};
