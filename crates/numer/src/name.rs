//! Name cleaning and letter-value mapping.
//!
//! Every name is normalized before mapping: non-ASCII-letters are dropped
//! and the remainder uppercased. An empty result is valid and simply means
//! "no letters".

use crate::core::alphabet::Alphabet;
use crate::core::reduce::{reduce, MasterPolicy};
use crate::error::Result;

/// Strips every character that is not an ASCII letter and uppercases the rest.
///
/// ```
/// use numer::name::clean;
///
/// assert_eq!(clean(" Jo3hn_Doe "), "JOHNDOE");
/// assert_eq!(clean("123 !"), "");
/// ```
#[must_use]
pub fn clean(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// A cleaned name and its letter values under one alphabet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NameValues {
    /// The cleaned, uppercase name.
    pub clean: String,
    /// One value per letter of `clean`.
    pub values: Vec<u32>,
    /// The alphabet the values were taken from.
    pub alphabet: Alphabet,
}

impl NameValues {
    /// Returns true if the name had no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates `(letter, value)` pairs.
    pub fn letters(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.clean.chars().zip(self.values.iter().copied())
    }

    /// Plain sum of the letter values.
    #[must_use]
    pub fn total(&self) -> u32 {
        total(&self.values)
    }

    /// Total and its reduction under `policy`.
    #[must_use]
    pub fn number(&self, policy: MasterPolicy) -> NameNumber {
        name_number(&self.values, policy)
    }
}

/// Cleans `text` then maps each letter through `alphabet`.
///
/// # Errors
///
/// Returns [`crate::Error::UnsupportedCharacter`] if a cleaned letter has no
/// table entry, which cannot happen for A-Z.
///
/// # Example
///
/// ```
/// use numer::Alphabet;
/// use numer::name::map_name;
///
/// let n = map_name("Amma", Alphabet::Chaldean).unwrap();
/// assert_eq!(n.clean, "AMMA");
/// assert_eq!(n.values, vec![1, 4, 4, 1]);
/// assert_eq!(n.total(), 10);
/// ```
pub fn map_name(text: &str, alphabet: Alphabet) -> Result<NameValues> {
    let clean = clean(text);
    let values = clean
        .chars()
        .map(|c| alphabet.value_of(c))
        .collect::<Result<Vec<_>>>()?;
    Ok(NameValues {
        clean,
        values,
        alphabet,
    })
}

/// Plain sum.
#[inline]
#[must_use]
pub fn total(values: &[u32]) -> u32 {
    values.iter().sum()
}

/// A name total and its reduced form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NameNumber {
    /// Sum of the letter values.
    pub total: u32,
    /// `total` after reduction.
    pub reduced: u32,
}

/// Sums `values` and reduces the total under `policy`.
///
/// ```
/// use numer::MasterPolicy;
/// use numer::name::name_number;
///
/// let n = name_number(&[5, 6], MasterPolicy::Keep);
/// assert_eq!((n.total, n.reduced), (11, 11));
/// ```
#[must_use]
pub fn name_number(values: &[u32], policy: MasterPolicy) -> NameNumber {
    let total = total(values);
    NameNumber {
        total,
        reduced: reduce(total, policy),
    }
}

/// Chaldean number of a single word: map, sum, reduce.
///
/// # Errors
///
/// Propagates [`map_name`] errors.
pub fn word_number(word: &str, policy: MasterPolicy) -> Result<u32> {
    let values = map_name(word, Alphabet::Chaldean)?;
    Ok(values.number(policy).reduced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_and_uppercases() {
        assert_eq!(clean("  mary-jane o'neil "), "MARYJANEONEIL");
        assert_eq!(clean("Ünïcode"), "NCODE");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_map_empty() {
        let n = map_name("42 !!", Alphabet::Pythagorean).unwrap();
        assert!(n.is_empty());
        assert_eq!(n.clean, "");
        assert_eq!(n.total(), 0);
        assert_eq!(n.number(MasterPolicy::Keep).reduced, 0);
    }

    #[test]
    fn test_alphabet_recorded() {
        let c = map_name("John", Alphabet::Chaldean).unwrap();
        let p = map_name("John", Alphabet::Pythagorean).unwrap();
        assert_eq!(c.alphabet, Alphabet::Chaldean);
        assert_eq!(p.alphabet, Alphabet::Pythagorean);
        // J O H N: Chaldean 1 7 5 5, Pythagorean 1 6 8 5
        assert_eq!(c.values, vec![1, 7, 5, 5]);
        assert_eq!(p.values, vec![1, 6, 8, 5]);
    }

    #[test]
    fn test_letters_pairs() {
        let n = map_name("ab", Alphabet::Chaldean).unwrap();
        let pairs: Vec<_> = n.letters().collect();
        assert_eq!(pairs, vec![('A', 1), ('B', 2)]);
    }

    #[test]
    fn test_name_number_policy() {
        // 9 + 9 + 4 = 22
        assert_eq!(name_number(&[9, 9, 4], MasterPolicy::Keep).reduced, 22);
        assert_eq!(name_number(&[9, 9, 4], MasterPolicy::Collapse).reduced, 4);
    }

    #[test]
    fn test_word_number_months() {
        // J A N U A R Y = 1+1+5+6+1+2+1 = 17 → 8
        assert_eq!(word_number("January", MasterPolicy::Keep).unwrap(), 8);
        // J U L Y = 1+6+3+1 = 11
        assert_eq!(word_number("July", MasterPolicy::Keep).unwrap(), 11);
        assert_eq!(word_number("July", MasterPolicy::Collapse).unwrap(), 2);
    }
}
