//! Letter-to-number alphabets.
//!
//! Two independent numbering systems map A-Z onto digits. Both are stored as
//! 26-entry lookup tables indexed by `letter - 'A'`, so every lookup is a
//! single array access.
//!
//! | Alphabet | Buckets | Used for |
//! |----------|---------|----------|
//! | Chaldean | 1-8 | name number, pyramid, month names |
//! | Pythagorean | 1-9 | name chart, name-year mapping |

use crate::error::{Error, Result};
use core::fmt;

/// Chaldean letter table (A-Z), values 1-8.
///
/// ```text
/// 1: A I J Q Y    5: E H N X
/// 2: B K R        6: U V W
/// 3: C G L S      7: O Z
/// 4: D M T        8: F P
/// ```
pub static CHALDEAN: [u8; 26] = [
    1, 2, 3, 4, 5, 8, 3, 5, 1, // A B C D E F G H I
    1, 2, 3, 4, 5, 7, 8, 1, 2, // J K L M N O P Q R
    3, 4, 6, 6, 6, 5, 1, 7, // S T U V W X Y Z
];

/// Pythagorean letter table (A-Z), values 1-9.
///
/// `PYTHAGOREAN[i]` = `(i % 9) + 1`: A-I count 1-9, J-R count 1-9 again,
/// S-Z count 1-8.
pub static PYTHAGOREAN: [u8; 26] = {
    let mut table = [0u8; 26];
    let mut i = 0usize;
    while i < 26 {
        table[i] = (i % 9) as u8 + 1;
        i += 1;
    }
    table
};

/// A letter-numbering system.
///
/// Values produced under one alphabet must never be combined with values
/// from the other; [`crate::name::NameValues`] carries its alphabet so
/// mixed sequences are detectable.
///
/// # Example
///
/// ```
/// use numer::Alphabet;
///
/// assert_eq!(Alphabet::Chaldean.value_of('f').unwrap(), 8);
/// assert_eq!(Alphabet::Pythagorean.value_of('F').unwrap(), 6);
/// assert_eq!(Alphabet::Chaldean.max_value(), 8);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Alphabet {
    /// Chaldean system, 8 buckets (1-8).
    Chaldean,

    /// Pythagorean system, 9 buckets (1-9).
    Pythagorean,
}

impl Alphabet {
    /// All alphabets.
    pub const ALL: [Self; 2] = [Self::Chaldean, Self::Pythagorean];

    /// Returns the 26-entry lookup table for this alphabet.
    #[inline]
    #[must_use]
    pub const fn table(self) -> &'static [u8; 26] {
        match self {
            Self::Chaldean => &CHALDEAN,
            Self::Pythagorean => &PYTHAGOREAN,
        }
    }

    /// Returns the largest value any letter carries.
    #[inline]
    #[must_use]
    pub const fn max_value(self) -> u32 {
        match self {
            Self::Chaldean => 8,
            Self::Pythagorean => 9,
        }
    }

    /// Returns the display name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaldean => "Chaldean",
            Self::Pythagorean => "Pythagorean",
        }
    }

    /// Looks up a letter. Lowercase input is uppercased first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedCharacter`] for anything outside A-Z.
    #[inline]
    pub fn value_of(self, letter: char) -> Result<u32> {
        let upper = letter.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(Error::UnsupportedCharacter(letter));
        }
        Ok(u32::from(self.table()[(upper as u8 - b'A') as usize]))
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up `letter` in `alphabet`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedCharacter`] for anything outside A-Z.
///
/// # Example
///
/// ```
/// use numer::{value_of, Alphabet, Error};
///
/// assert_eq!(value_of('M', Alphabet::Pythagorean).unwrap(), 4);
/// assert!(matches!(value_of('3', Alphabet::Chaldean), Err(Error::UnsupportedCharacter('3'))));
/// ```
#[inline]
pub fn value_of(letter: char, alphabet: Alphabet) -> Result<u32> {
    alphabet.value_of(letter)
}
