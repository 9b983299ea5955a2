//! Plain-text renderings of the two analysis reports.

use std::fmt;

use crate::comparison::Comparison;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

/// Formatting options shared by both reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Decimal places for percentages.
    pub precision: usize,
}

impl ReportConfig {
    /// Largest accepted precision.
    pub const MAX_PRECISION: usize = 10;

    /// Creates a configuration with the given precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrecision`] above [`Self::MAX_PRECISION`].
    pub fn new(precision: usize) -> Result<Self> {
        if precision > Self::MAX_PRECISION {
            return Err(Error::InvalidPrecision {
                precision,
                max: Self::MAX_PRECISION,
            });
        }
        Ok(Self { precision })
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

/// Per-letter counts and percentages.
///
/// ```text
/// Frequency Analysis of Latin Letters in the text:
/// a: 2 occurrences (50.00%)
/// ```
pub struct FrequencyReport<'a> {
    table: &'a FrequencyTable,
    config: ReportConfig,
}

impl<'a> FrequencyReport<'a> {
    #[must_use]
    pub fn new(table: &'a FrequencyTable, config: ReportConfig) -> Self {
        Self { table, config }
    }
}

impl fmt::Display for FrequencyReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.config.precision;
        writeln!(f, "Frequency Analysis of Latin Letters in the text:")?;
        for row in self.table.letters() {
            writeln!(
                f,
                "{}: {} occurrences ({:.precision$}%)",
                row.letter, row.count, row.percentage
            )?;
        }
        Ok(())
    }
}

/// Expected versus found percentage per letter.
///
/// ```text
/// Comparison with standard Latin letter frequencies:
/// a: Expected 8.17%, Found 50.00%
/// ```
pub struct ComparisonReport<'a> {
    comparison: &'a Comparison,
    config: ReportConfig,
}

impl<'a> ComparisonReport<'a> {
    #[must_use]
    pub fn new(comparison: &'a Comparison, config: ReportConfig) -> Self {
        Self { comparison, config }
    }
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.config.precision;
        if self.comparison.is_latin() {
            writeln!(f, "Comparison with standard Latin letter frequencies:")?;
        } else {
            writeln!(
                f,
                "Comparison with {} letter frequencies:",
                self.comparison.reference_name()
            )?;
        }
        for row in self.comparison.rows() {
            writeln!(
                f,
                "{}: Expected {:.precision$}%, Found {:.precision$}%",
                row.letter, row.expected, row.observed
            )?;
        }
        Ok(())
    }
}
