//! Name-year date mapping.
//!
//! Anchors a cleaned name at the date of birth and walks forward through
//! birthdays, consuming the name's letters cyclically:
//!
//! ```text
//! step 1:  first letter, the date of birth itself
//! step k:  letter (k-1) mod len, year = previous year + Pythagorean value
//! ```
//!
//! The sequence stops at the first birthday past the cutoff. Every step adds
//! at least one year, so a finite cutoff always terminates the walk.

use chrono::{Datelike, NaiveDate};
use core::fmt;

use crate::core::alphabet::Alphabet;
use crate::date::safe_anniversary;
use crate::error::Result;
use crate::name::clean;

/// One anniversary in the mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DateMappingRow {
    /// 1-based position in the sequence.
    pub step: usize,
    /// Letter consumed at this step.
    pub letter: char,
    /// Pythagorean value of `letter`.
    pub value: u32,
    /// Anchor year of this step.
    pub year: i32,
    /// The birthday in `year`.
    pub date: NaiveDate,
}

impl DateMappingRow {
    /// Returns `date` as `DD/MM/YYYY`.
    #[must_use]
    pub fn display_date(&self) -> DisplayDate {
        DisplayDate(self.date)
    }
}

/// `DD/MM/YYYY` formatting of a date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayDate(pub NaiveDate);

impl fmt::Display for DisplayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:04}",
            self.0.day(),
            self.0.month(),
            self.0.year()
        )
    }
}

/// An anchored anniversary sequence. Append-only while being built, then
/// immutable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DateMapping {
    clean: String,
    birth: NaiveDate,
    end_date: NaiveDate,
    rows: Vec<DateMappingRow>,
}

impl DateMapping {
    /// The cleaned name.
    #[must_use]
    pub fn clean(&self) -> &str {
        &self.clean
    }

    /// The anchor date of birth.
    #[must_use]
    pub fn birth(&self) -> NaiveDate {
        self.birth
    }

    /// The effective cutoff (never before the date of birth).
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Rows in chronological order.
    #[must_use]
    pub fn rows(&self) -> &[DateMappingRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the name had no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds the anniversary sequence for `name` from `dob` up to `end_date`
/// inclusive. A cutoff before `dob` is clamped to `dob`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidDate`] if a birthday cannot be placed in a
/// computed year, which only happens at the edge of the supported calendar.
///
/// # Example
///
/// ```
/// use numer::date::calendar_date;
/// use numer::mapping::build_mapping;
///
/// let dob = calendar_date(1993, 7, 17).unwrap();
/// let end = calendar_date(2010, 1, 1).unwrap();
/// let m = build_mapping("Amma", dob, end).unwrap();
///
/// // A(1) 1993, M(4) 1997, M(4) 2001, A(1) 2002, A(1) 2003, M(4) 2007
/// let years: Vec<i32> = m.rows().iter().map(|r| r.year).collect();
/// assert_eq!(years, [1993, 1997, 2001, 2002, 2003, 2007]);
/// ```
pub fn build_mapping(name: &str, dob: NaiveDate, end_date: NaiveDate) -> Result<DateMapping> {
    let end_date = end_date.max(dob);
    let clean = clean(name);
    let letters: Vec<char> = clean.chars().collect();
    let mut rows = Vec::new();

    if let Some(&first) = letters.first() {
        rows.push(DateMappingRow {
            step: 1,
            letter: first,
            value: Alphabet::Pythagorean.value_of(first)?,
            year: dob.year(),
            date: dob,
        });

        let mut year = dob.year();
        for i in 1.. {
            let letter = letters[i % letters.len()];
            let value = Alphabet::Pythagorean.value_of(letter)?;
            // Letter values are 1-9, far below i32::MAX.
            let next_year = year + value as i32;
            let date = safe_anniversary(next_year, dob.month(), dob.day())?;
            if date > end_date {
                break;
            }
            year = next_year;
            rows.push(DateMappingRow {
                step: rows.len() + 1,
                letter,
                value,
                year,
                date,
            });
        }
    }

    tracing::debug!(
        name = %clean,
        rows = rows.len(),
        %end_date,
        "built name-year mapping"
    );

    Ok(DateMapping {
        clean,
        birth: dob,
        end_date,
        rows,
    })
}
