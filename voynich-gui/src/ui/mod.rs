//! UI rendering modules.
//!
//! - `frequency_panel`: Right sidebar with the text and the letter table
//! - `main_view`: Central panel with the folio image
//! - `chart_window`: Expected vs. found bar chart
//! - `status_bar`: Bottom bar with file actions and messages

mod chart_window;
mod frequency_panel;
mod main_view;
mod status_bar;
pub mod theme;
