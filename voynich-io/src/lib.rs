//! voynich-io: Input and output for the voynich frequency analyzer.
//!
//! This crate reads the text to analyze from strings, files or stdin,
//! decodes folio images for the viewer, loads custom reference
//! distributions and writes reports as text, JSON or CSV.
//!

mod error;
mod folio;
mod reference;
mod text;
mod writer;

pub use error::{Error, Result};
pub use folio::{load_image, LoadedImage};
pub use reference::{load_reference, parse_reference};
pub use text::TextSource;
pub use writer::{AnalysisExport, ExportFormat, ReportWriter, Sections};
