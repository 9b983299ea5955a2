//! Side-by-side comparison of observed and expected letter percentages.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::frequency::{letter_index, FrequencyTable};
use crate::reference::ReferenceDistribution;

/// Expected and observed percentage for one letter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterComparison {
    /// Lowercase letter.
    pub letter: char,
    /// Percentage from the reference distribution.
    pub expected: f64,
    /// Percentage found in the analyzed text.
    pub observed: f64,
}

/// Comparison rows for `a` through `z`.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    reference_name: String,
    latin: bool,
    rows: Vec<LetterComparison>,
}

impl Comparison {
    /// All 26 rows in alphabetical order.
    #[must_use]
    pub fn rows(&self) -> &[LetterComparison] {
        &self.rows
    }

    /// Row for `letter` (case-insensitive).
    #[must_use]
    pub fn row(&self, letter: char) -> Option<&LetterComparison> {
        letter_index(letter).and_then(|i| self.rows.get(i))
    }

    /// Name of the reference distribution used.
    #[must_use]
    pub fn reference_name(&self) -> &str {
        &self.reference_name
    }

    /// Returns true if the built-in Latin table was used.
    #[must_use]
    pub fn is_latin(&self) -> bool {
        self.latin
    }
}

/// Pairs each letter's observed percentage with the reference one.
///
/// No distance or ranking is computed; the result is a plain juxtaposition.
#[must_use]
pub fn compare(table: &FrequencyTable, reference: &ReferenceDistribution) -> Comparison {
    let rows = table
        .letters()
        .enumerate()
        .map(|(index, row)| LetterComparison {
            letter: row.letter,
            expected: reference.expected_at(index),
            observed: row.percentage,
        })
        .collect();

    Comparison {
        reference_name: reference.name().to_string(),
        latin: reference.is_latin(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compare_aabb() {
        let table = FrequencyTable::from_text("aabb");
        let comparison = compare(&table, &ReferenceDistribution::LATIN);
        assert_eq!(comparison.rows().len(), 26);
        assert!(comparison.is_latin());

        let a = comparison.row('a').unwrap();
        assert_relative_eq!(a.expected, 8.17);
        assert_relative_eq!(a.observed, 50.0);

        let z = comparison.row('z').unwrap();
        assert_relative_eq!(z.expected, 0.07);
        assert_relative_eq!(z.observed, 0.0);
    }

    #[test]
    fn test_compare_empty_text() {
        let comparison = compare(&FrequencyTable::default(), &ReferenceDistribution::LATIN);
        for (row, expected) in comparison.rows().iter().zip(crate::LATIN_FREQUENCIES) {
            assert_relative_eq!(row.observed, 0.0);
            assert_relative_eq!(row.expected, expected);
        }
    }
}
