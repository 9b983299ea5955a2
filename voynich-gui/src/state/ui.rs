//! UI state for panel visibility and view options.

/// UI panel visibility and toggle state.
pub struct UiState {
    /// Whether the folio is scaled down to fit the central panel.
    pub fit_to_window: bool,
    /// Whether the expected vs. found chart window is visible.
    pub show_chart: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            fit_to_window: true,
            show_chart: false,
        }
    }
}
