//! Minimal interface for showing a folio image.
//!
//! The analyzer never talks to a GUI toolkit directly. A viewer front-end
//! implements [`ImageDisplay`] and receives a [`DisplayRequest`].

use std::path::PathBuf;

/// Window title used when none is given.
pub const DEFAULT_TITLE: &str = "Voynich Manuscript - Folio 93v";

/// What to show and how to label it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRequest {
    /// Image file to render.
    pub image_path: PathBuf,
    /// Window title.
    pub title: String,
}

impl DisplayRequest {
    /// Creates a request with the default title.
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Replaces the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Something that can put an image on screen.
pub trait ImageDisplay {
    /// Error raised when the image cannot be shown.
    type Error: std::error::Error;

    /// Shows the requested image, returning once the display is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be decoded or the display fails.
    fn show(&mut self, request: &DisplayRequest) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("nothing to show")]
    struct Blank;

    #[derive(Default)]
    struct Recorder {
        shown: Vec<DisplayRequest>,
    }

    impl ImageDisplay for Recorder {
        type Error = Blank;

        fn show(&mut self, request: &DisplayRequest) -> Result<(), Blank> {
            if request.image_path.as_os_str().is_empty() {
                return Err(Blank);
            }
            self.shown.push(request.clone());
            Ok(())
        }
    }

    #[test]
    fn test_display_request_defaults() {
        let request = DisplayRequest::new("folio93v.jpg");
        assert_eq!(request.title, DEFAULT_TITLE);
        let request = request.with_title("Folio 1r");
        assert_eq!(request.title, "Folio 1r");
    }

    #[test]
    fn test_display_through_trait() {
        let mut display = Recorder::default();
        display.show(&DisplayRequest::new("a.png")).unwrap();
        assert!(display.show(&DisplayRequest::new("")).is_err());
        assert_eq!(display.shown.len(), 1);
    }
}
