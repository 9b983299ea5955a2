//! Status bar state.

/// User-facing status message.
pub struct StatusState {
    /// Message text.
    pub text: String,
    /// Whether the message reports a failure.
    pub is_error: bool,
}

impl StatusState {
    pub fn info(&mut self, text: String) {
        self.text = text;
        self.is_error = false;
    }

    pub fn error(&mut self, text: String) {
        self.text = text;
        self.is_error = true;
    }
}

impl Default for StatusState {
    fn default() -> Self {
        Self {
            text: "Ready".to_string(),
            is_error: false,
        }
    }
}
