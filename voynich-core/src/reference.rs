//! Reference letter distributions.

use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::frequency::{index_letter, letter_index, ALPHABET_LEN};

/// Standard Latin letter frequencies in percent, `a` through `z`.
pub const LATIN_FREQUENCIES: [f64; ALPHABET_LEN] = [
    8.17, 1.49, 2.78, 4.25, 12.70, 2.23, 2.02, 6.09, 6.97, 0.15, 0.77, 4.03, 2.41, 6.75, 7.51, 1.93,
    0.10, 5.99, 6.33, 9.06, 2.76, 0.98, 2.36, 0.15, 1.97, 0.07,
];

/// Expected percentage of each letter in some language.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ReferenceRecord"))]
pub struct ReferenceDistribution {
    name: Cow<'static, str>,
    percentages: [f64; ALPHABET_LEN],
}

impl ReferenceDistribution {
    /// Built-in Latin distribution.
    pub const LATIN: Self = Self {
        name: Cow::Borrowed("Latin"),
        percentages: LATIN_FREQUENCIES,
    };

    /// Creates a distribution from one percentage per letter, `a` first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReferenceLength`] unless exactly 26 values are given,
    /// and [`Error::InvalidReferenceValue`] for negative or non-finite values.
    pub fn from_slice(name: impl Into<String>, values: &[f64]) -> Result<Self> {
        let percentages: [f64; ALPHABET_LEN] = values
            .try_into()
            .map_err(|_| Error::ReferenceLength(values.len()))?;
        for (index, &value) in percentages.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidReferenceValue {
                    letter: index_letter(index).unwrap_or('?'),
                    value,
                });
            }
        }
        Ok(Self {
            name: Cow::Owned(name.into()),
            percentages,
        })
    }

    /// Language or corpus this distribution describes.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true for the built-in Latin table.
    #[must_use]
    pub fn is_latin(&self) -> bool {
        *self == Self::LATIN
    }

    /// All 26 percentages, `a` first.
    #[must_use]
    pub fn percentages(&self) -> &[f64; ALPHABET_LEN] {
        &self.percentages
    }

    /// Expected percentage for `letter` (case-insensitive).
    #[must_use]
    pub fn expected(&self, letter: char) -> Option<f64> {
        letter_index(letter).map(|i| self.percentages[i])
    }

    /// Expected percentage for the letter at `index`, 0 past `z`.
    #[must_use]
    pub fn expected_at(&self, index: usize) -> f64 {
        self.percentages.get(index).copied().unwrap_or(0.0)
    }
}

impl Default for ReferenceDistribution {
    fn default() -> Self {
        Self::LATIN
    }
}

/// Unvalidated wire form, checked by [`ReferenceDistribution::from_slice`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ReferenceRecord {
    name: String,
    percentages: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<ReferenceRecord> for ReferenceDistribution {
    type Error = Error;

    fn try_from(record: ReferenceRecord) -> Result<Self> {
        Self::from_slice(record.name, &record.percentages)
    }
}
