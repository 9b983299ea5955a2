//! Folio image presentation.

mod texture;

pub use texture::folio_to_color_image;
