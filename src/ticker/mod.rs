mod clock;
pub mod period;
pub mod source;

pub use period::Period;
pub use source::{TickCallback, TickSource, TickSourceBuilder};
