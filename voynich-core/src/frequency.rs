//! Per-letter frequency tabulation.
//!
//! A [`FrequencyTable`] holds one counter per letter `a`..=`z`, indexed by the
//! letter's offset from `a`. Only those letters enter the denominator used
//! for percentages; anything else in the text is skipped.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of letters in the Latin alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Returns the offset of `letter` from `a`, ignoring case.
///
/// Returns `None` for anything outside `a`..=`z` / `A`..=`Z`.
#[inline]
#[must_use]
pub fn letter_index(letter: char) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some(lower as usize - 'a' as usize)
    } else {
        None
    }
}

/// Returns the lowercase letter at `index`, or `None` past `z`.
#[inline]
#[must_use]
pub fn index_letter(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|&i| usize::from(i) < ALPHABET_LEN)
        .map(|i| char::from(b'a' + i))
}

/// `count` as a percentage of `total`, or 0 when `total` is zero.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn percentage_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// One row of a frequency table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterFrequency {
    /// Lowercase letter.
    pub letter: char,
    /// Number of occurrences in the text.
    pub count: u64,
    /// Share of all counted letters, in percent.
    pub percentage: f64,
}

/// Occurrence counts of the letters `a`..=`z` in a text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "TableRecord"))]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_LEN],
    total: u64,
    unmapped_letters: u64,
}

impl FrequencyTable {
    /// Tabulates letter occurrences in `text`.
    ///
    /// Matching is case-insensitive. Digits, punctuation and whitespace are
    /// skipped. Alphabetic characters outside `a`..=`z` after lowercasing
    /// are tallied in [`unmapped_letters`](Self::unmapped_letters) and do not
    /// count towards [`total`](Self::total).
    ///
    /// For non-ASCII input this differs from a denominator of every
    /// alphabetic character: `"aé"` yields a total of 1 and `a` at 100%,
    /// not 2 and 50%. The 26 percentages therefore always sum to 100 when
    /// the total is non-zero.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::default();
        for c in text.chars().flat_map(char::to_lowercase) {
            if let Some(index) = letter_index(c) {
                table.counts[index] += 1;
                table.total += 1;
            } else if c.is_alphabetic() {
                table.unmapped_letters += 1;
            }
        }
        table
    }

    /// Builds a table directly from per-letter counts.
    #[must_use]
    pub fn from_counts(counts: [u64; ALPHABET_LEN]) -> Self {
        Self {
            counts,
            total: counts.iter().sum(),
            unmapped_letters: 0,
        }
    }

    /// Occurrences of `letter` (case-insensitive), `None` if it is not `a`..=`z`.
    #[must_use]
    pub fn count(&self, letter: char) -> Option<u64> {
        letter_index(letter).map(|i| self.counts[i])
    }

    /// Occurrences of the letter at `index`, 0 past `z`.
    #[inline]
    #[must_use]
    pub fn count_at(&self, index: usize) -> u64 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    /// All 26 counters, `a` first.
    #[must_use]
    pub fn counts(&self) -> &[u64; ALPHABET_LEN] {
        &self.counts
    }

    /// Total number of `a`..=`z` letters counted.
    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Alphabetic characters that were skipped because they are not `a`..=`z`.
    #[must_use]
    pub fn unmapped_letters(&self) -> u64 {
        self.unmapped_letters
    }

    /// Returns true if no letters were counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Percentage of `letter` among all counted letters.
    ///
    /// Returns `Some(0.0)` for every letter when the table is empty.
    #[must_use]
    pub fn percentage(&self, letter: char) -> Option<f64> {
        letter_index(letter).map(|i| self.percentage_at(i))
    }

    /// Percentage of the letter at `index`.
    #[must_use]
    pub fn percentage_at(&self, index: usize) -> f64 {
        percentage_of(self.count_at(index), self.total)
    }

    /// Iterates over all 26 rows in alphabetical order.
    pub fn letters(&self) -> impl Iterator<Item = LetterFrequency> + '_ {
        self.counts
            .iter()
            .zip('a'..='z')
            .map(move |(&count, letter)| LetterFrequency {
                letter,
                count,
                percentage: percentage_of(count, self.total),
            })
    }
}

/// Wire form of a [`FrequencyTable`]. A serialized `total` is ignored and
/// recomputed from the counts.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct TableRecord {
    counts: [u64; ALPHABET_LEN],
    #[serde(default)]
    unmapped_letters: u64,
}

#[cfg(feature = "serde")]
impl From<TableRecord> for FrequencyTable {
    fn from(record: TableRecord) -> Self {
        Self {
            unmapped_letters: record.unmapped_letters,
            ..Self::from_counts(record.counts)
        }
    }
}

impl From<&str> for FrequencyTable {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_letter_index_bounds() {
        assert_eq!(letter_index('a'), Some(0));
        assert_eq!(letter_index('Z'), Some(25));
        assert_eq!(letter_index('1'), None);
        assert_eq!(letter_index('é'), None);
        assert_eq!(index_letter(0), Some('a'));
        assert_eq!(index_letter(25), Some('z'));
        assert_eq!(index_letter(26), None);
        assert_eq!(index_letter(300), None);
    }

    #[test]
    fn test_aabb() {
        let table = FrequencyTable::from_text("aabb");
        assert_eq!(table.total(), 4);
        assert_eq!(table.count('a'), Some(2));
        assert_eq!(table.count('b'), Some(2));
        assert_eq!(table.count('c'), Some(0));
        assert_relative_eq!(table.percentage('a').unwrap(), 50.0);
        assert_relative_eq!(table.percentage('b').unwrap(), 50.0);
        assert_relative_eq!(table.percentage('q').unwrap(), 0.0);
    }

    #[test]
    fn test_empty_text() {
        let table = FrequencyTable::from_text("");
        assert!(table.is_empty());
        assert!(table.letters().all(|row| row.count == 0 && row.percentage == 0.0));
    }

    #[test]
    fn test_only_non_letters() {
        let table = FrequencyTable::from_text("1234 ,.;!? \t\n");
        assert!(table.is_empty());
        assert_eq!(table.unmapped_letters(), 0);
        assert!(table.letters().all(|row| row.percentage == 0.0));
    }

    #[test]
    fn test_unmapped_letters_excluded_from_total() {
        let table = FrequencyTable::from_text("aé ß b");
        assert_eq!(table.total(), 2);
        assert_eq!(table.unmapped_letters(), 2);
        assert_relative_eq!(table.percentage('a').unwrap(), 50.0);

        let table = FrequencyTable::from_text("aé");
        assert_eq!(table.total(), 1);
        assert_relative_eq!(table.percentage('a').unwrap(), 100.0);
    }

    #[test]
    fn test_from_counts() {
        let mut counts = [0u64; ALPHABET_LEN];
        counts[4] = 3;
        counts[25] = 1;
        let table = FrequencyTable::from_counts(counts);
        assert_eq!(table.total(), 4);
        assert_relative_eq!(table.percentage_at(4), 75.0);
        assert_eq!(table.count_at(99), 0);
    }

    #[test]
    fn test_letters_in_order() {
        let table = FrequencyTable::from("zyx");
        let letters: String = table.letters().map(|row| row.letter).collect();
        assert_eq!(letters, "abcdefghijklmnopqrstuvwxyz");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_recomputes_total() {
        let mut counts = [0u64; ALPHABET_LEN];
        counts[0] = 5;
        let json = serde_json::json!({ "counts": counts, "total": 1, "unmapped_letters": 2 });
        let table: FrequencyTable = serde_json::from_value(json).unwrap();
        assert_eq!(table.total(), 5);
        assert_eq!(table.unmapped_letters(), 2);
        assert_relative_eq!(table.percentage('a').unwrap(), 100.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let table = FrequencyTable::from_text("Voynich ß");
        let json = serde_json::to_string(&table).unwrap();
        let back: FrequencyTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
