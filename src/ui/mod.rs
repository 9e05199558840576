//! Terminal output: theme, status icons, and section rendering.

mod status;
mod theme;

pub use status::CheckStatus;
pub use theme::{should_use_colors, Theme};
