//! Zodiac name chart.
//!
//! Letters of a cleaned name are walked through the twelve-sign cycle using
//! their Pythagorean values:
//!
//! ```text
//! first letter:  sign = Aries rotated by (v - 1)
//! later letters: sign = previous letter's sign rotated by (v - 1)
//! ```
//!
//! Each rotation starts from the sign the previous letter landed on and
//! moves by that letter's own value, never by the name total. "AMMA"
//! (A=1, M=4) therefore lands on Aries, Cancer, Libra, Libra, and "MAMA" on
//! Cancer, Cancer, Libra, Libra.
//!
//! # South Indian Layout
//!
//! The chart is drawn on a fixed 4×4 board with an empty 2×2 center:
//!
//! ```text
//! Pi Ar Ta Ge
//! Aq .. .. Cn
//! Cp .. .. Le
//! Sg Sc Li Vi
//! ```

use crate::core::alphabet::Alphabet;
use crate::core::constants::SIGN_COUNT;
use crate::core::sign::Sign;
use crate::error::Result;
use crate::grid::Grid;
use crate::name::clean;

/// South Indian fixed-sign board; `None` cells form the empty center.
pub const SOUTH_INDIAN_LAYOUT: Grid<Option<Sign>, 4> = [
    [
        Some(Sign::Pisces),
        Some(Sign::Aries),
        Some(Sign::Taurus),
        Some(Sign::Gemini),
    ],
    [Some(Sign::Aquarius), None, None, Some(Sign::Cancer)],
    [Some(Sign::Capricorn), None, None, Some(Sign::Leo)],
    [
        Some(Sign::Sagittarius),
        Some(Sign::Scorpio),
        Some(Sign::Libra),
        Some(Sign::Virgo),
    ],
];

/// One placed letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TraceStep {
    /// Uppercase letter.
    pub letter: char,
    /// Pythagorean value of `letter`.
    pub value: u32,
    /// Sign the letter landed on.
    pub sign: Sign,
}

/// Letter-by-letter placement of a name. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NameTrace {
    clean: String,
    steps: Vec<TraceStep>,
}

impl NameTrace {
    /// The cleaned name the trace was built from.
    #[must_use]
    pub fn clean(&self) -> &str {
        &self.clean
    }

    /// Placement steps in letter order.
    #[must_use]
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Returns true if the name had no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Groups placed letters by sign.
    #[must_use]
    pub fn placement(&self) -> ChartPlacement {
        aggregate(self)
    }
}

/// Traces `name` through the sign cycle.
///
/// # Errors
///
/// Returns [`crate::Error::UnsupportedCharacter`] only if a cleaned letter
/// is missing from the Pythagorean table.
///
/// # Example
///
/// ```
/// use numer::Sign;
/// use numer::chart::trace;
///
/// let t = trace("Mama").unwrap();
/// let signs: Vec<Sign> = t.steps().iter().map(|s| s.sign).collect();
/// assert_eq!(signs, [Sign::Cancer, Sign::Cancer, Sign::Libra, Sign::Libra]);
/// ```
pub fn trace(name: &str) -> Result<NameTrace> {
    let clean = clean(name);
    let mut steps = Vec::with_capacity(clean.len());

    // The first letter rotates from Aries; every later one from its predecessor.
    let mut sign = Sign::Aries;
    for letter in clean.chars() {
        let value = Alphabet::Pythagorean.value_of(letter)?;
        sign = sign.rotate(value - 1);
        steps.push(TraceStep {
            letter,
            value,
            sign,
        });
    }

    Ok(NameTrace { clean, steps })
}

/// Letters grouped by the sign they landed on, in trace order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartPlacement {
    letters: [String; SIGN_COUNT],
}

impl ChartPlacement {
    /// Letters placed on `sign`; empty if none.
    #[must_use]
    pub fn letters(&self, sign: Sign) -> &str {
        &self.letters[sign.index()]
    }

    /// Iterates every sign with its letters, Aries first.
    pub fn iter(&self) -> impl Iterator<Item = (Sign, &str)> {
        Sign::ALL
            .into_iter()
            .zip(self.letters.iter().map(String::as_str))
    }

    /// Signs that received at least one letter.
    pub fn occupied(&self) -> impl Iterator<Item = Sign> + '_ {
        self.iter()
            .filter(|(_, letters)| !letters.is_empty())
            .map(|(sign, _)| sign)
    }
}

/// Concatenates the letters landing on each sign.
#[must_use]
pub fn aggregate(trace: &NameTrace) -> ChartPlacement {
    let mut placement = ChartPlacement::default();
    for step in &trace.steps {
        placement.letters[step.sign.index()].push(step.letter);
    }
    placement
}

/// One occupied cell of the South Indian board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartCell {
    /// Fixed sign of the cell.
    pub sign: Sign,
    /// Letters placed on that sign.
    pub letters: String,
}

/// Lays `placement` onto the South Indian board.
#[must_use]
pub fn south_indian_grid(placement: &ChartPlacement) -> Grid<Option<ChartCell>, 4> {
    SOUTH_INDIAN_LAYOUT.map(|row| {
        row.map(|cell| {
            cell.map(|sign| ChartCell {
                sign,
                letters: placement.letters(sign).to_owned(),
            })
        })
    })
}
