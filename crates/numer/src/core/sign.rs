//! The twelve zodiac signs.
//!
//! Signs form a cycle indexed 0-11 starting at Aries. The name chart walks
//! this cycle forward, so every rotation is taken modulo [`SIGN_COUNT`].

use super::constants::SIGN_COUNT;
use core::fmt;

/// One of the twelve zodiac signs.
///
/// # Example
///
/// ```
/// use numer::Sign;
///
/// assert_eq!(Sign::from_index(3), Sign::Cancer);
/// assert_eq!(Sign::Pisces.rotate(1), Sign::Aries);
/// assert_eq!(Sign::Libra.abbr(), "Li");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Sign {
    /// Aries (index 0).
    #[default]
    Aries = 0,
    /// Taurus (index 1).
    Taurus = 1,
    /// Gemini (index 2).
    Gemini = 2,
    /// Cancer (index 3).
    Cancer = 3,
    /// Leo (index 4).
    Leo = 4,
    /// Virgo (index 5).
    Virgo = 5,
    /// Libra (index 6).
    Libra = 6,
    /// Scorpio (index 7).
    Scorpio = 7,
    /// Sagittarius (index 8).
    Sagittarius = 8,
    /// Capricorn (index 9).
    Capricorn = 9,
    /// Aquarius (index 10).
    Aquarius = 10,
    /// Pisces (index 11).
    Pisces = 11,
}

impl Sign {
    /// All signs in cycle order.
    pub const ALL: [Self; SIGN_COUNT] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// Creates a sign from its cycle index. Indices >= 12 wrap.
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % SIGN_COUNT]
    }

    /// Returns the cycle index (0-11).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Moves `steps` signs forward around the cycle.
    #[inline]
    #[must_use]
    pub const fn rotate(self, steps: u32) -> Self {
        Self::from_index(self.index() + (steps as usize % SIGN_COUNT))
    }

    /// Returns the full English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Returns the two-letter chart abbreviation.
    #[must_use]
    pub const fn abbr(self) -> &'static str {
        match self {
            Self::Aries => "Ar",
            Self::Taurus => "Ta",
            Self::Gemini => "Ge",
            Self::Cancer => "Cn",
            Self::Leo => "Le",
            Self::Virgo => "Vi",
            Self::Libra => "Li",
            Self::Scorpio => "Sc",
            Self::Sagittarius => "Sg",
            Self::Capricorn => "Cp",
            Self::Aquarius => "Aq",
            Self::Pisces => "Pi",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
