//! Application state modules.

mod status;
mod ui;

pub use status::StatusState;
pub use ui::UiState;
