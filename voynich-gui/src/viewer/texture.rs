//! Conversion of decoded folios into egui images.

use egui::ColorImage;
use voynich_io::LoadedImage;

/// Convert a decoded RGBA folio into an egui color image.
#[must_use]
pub fn folio_to_color_image(folio: &LoadedImage) -> ColorImage {
    if folio.is_empty() {
        return ColorImage::new([1, 1], egui::Color32::BLACK);
    }
    ColorImage::from_rgba_unmultiplied(folio.size(), &folio.rgba)
}
