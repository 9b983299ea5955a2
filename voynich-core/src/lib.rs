//! voynich-core: Letter-frequency tabulation for manuscript text.
//!
//! This crate provides the frequency analyzer, the reference Latin letter
//! distribution, the side-by-side comparator and the text report renderers.
//! It has no GUI dependency; viewers plug in through [`ImageDisplay`].
//!

pub mod comparison;
pub mod display;
pub mod error;
pub mod frequency;
pub mod reference;
pub mod report;

pub use comparison::{compare, Comparison, LetterComparison};
pub use display::{DisplayRequest, ImageDisplay, DEFAULT_TITLE};
pub use error::{Error, Result};
pub use frequency::{index_letter, letter_index, FrequencyTable, LetterFrequency, ALPHABET_LEN};
pub use reference::{ReferenceDistribution, LATIN_FREQUENCIES};
pub use report::{ComparisonReport, FrequencyReport, ReportConfig};
