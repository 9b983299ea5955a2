//! Folio image decoding.

use std::path::Path;

use crate::{Error, Result};

/// A decoded image as tightly packed RGBA8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA bytes, `width * height * 4` long.
    pub rgba: Vec<u8>,
}

impl LoadedImage {
    /// Image size as `[width, height]` in `usize`.
    #[must_use]
    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }

    /// Returns true if the image has no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Decodes the image at `path`.
///
/// The file handle is closed before this returns.
///
/// # Errors
///
/// Returns [`Error::ImageNotFound`] if the path does not exist and
/// [`Error::Image`] if the format is unknown or the data is corrupt.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<LoadedImage> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::ImageNotFound(path.to_path_buf()));
    }

    let rgba = image::open(path)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(LoadedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_png() {
        let file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        let mut source = image::RgbaImage::new(3, 2);
        source.put_pixel(1, 0, image::Rgba([200, 100, 50, 255]));
        source.save(file.path()).unwrap();

        let loaded = load_image(file.path()).unwrap();
        assert_eq!(loaded.size(), [3, 2]);
        assert_eq!(loaded.rgba.len(), 3 * 2 * 4);
        assert_eq!(&loaded.rgba[4..8], &[200, 100, 50, 255]);
        assert!(!loaded.is_empty());
    }

    #[test]
    fn test_missing_image() {
        let err = load_image("/nonexistent/folio93v.jpg").unwrap_err();
        assert!(matches!(err, Error::ImageNotFound(_)));
    }

    #[test]
    fn test_corrupt_image() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"definitely not a png").unwrap();
        file.flush().unwrap();

        let err = load_image(file.path()).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }
}
