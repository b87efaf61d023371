pub mod action;
pub mod theme;
pub mod view;

pub use action::Action;
pub use theme::Theme;
pub use view::{Button, View};
