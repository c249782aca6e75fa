//! Date parsing and date-derived numbers.
//!
//! | Number | Derivation |
//! |--------|------------|
//! | Destiny | all eight digits of `YYYYMMDD`, summed and reduced |
//! | Ruling | day of month, reduced |
//! | Chaldean month | Chaldean value of the English month name, reduced |
//! | Chaldean destiny | day digits + Chaldean month + year digits, reduced |

use chrono::{Datelike, NaiveDate};

use crate::core::constants::MONTH_NAMES;
use crate::core::reduce::{digit_sum, reduce, MasterPolicy};
use crate::error::{Error, Result};
use crate::name::word_number;

/// Builds a calendar date in years 1 and later.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if the year is below 1 or the month or day
/// is out of range.
pub fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    let invalid = Error::InvalidDate { year, month, day };
    if year < 1 {
        return Err(invalid);
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(invalid)
}

/// Parses a date of birth in `YYYY-MM-DD`, `DD-MM-YYYY` or `DD/MM/YYYY` form.
///
/// A four-character first field means year-first; anything else is read
/// day-first.
///
/// # Errors
///
/// Returns [`Error::InvalidDateFormat`] unless the text splits into exactly
/// three numeric fields, and [`Error::InvalidDate`] if those fields are not
/// a calendar date.
///
/// # Example
///
/// ```
/// use numer::date::parse_dob;
///
/// let a = parse_dob("1993-07-17").unwrap();
/// assert_eq!(a, parse_dob("17-07-1993").unwrap());
/// assert_eq!(a, parse_dob("17/07/1993").unwrap());
/// assert!(parse_dob("1993.07.17").is_err());
/// ```
pub fn parse_dob(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    let malformed = || Error::InvalidDateFormat(trimmed.to_owned());

    let fields: Vec<&str> = trimmed.split(['-', '/']).collect();
    let &[first, second, third] = fields.as_slice() else {
        return Err(malformed());
    };
    let number = |field: &str| field.trim().parse::<u32>().map_err(|_| malformed());

    let (year, month, day) = if first.len() == 4 {
        (number(first)?, number(second)?, number(third)?)
    } else {
        (number(third)?, number(second)?, number(first)?)
    };
    let year = i32::try_from(year).map_err(|_| malformed())?;

    tracing::trace!(year, month, day, "parsed date of birth");
    calendar_date(year, month, day)
}

/// The birthday of `month`/`day` in `year`, with February 29 falling back
/// to February 28 in common years.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] for any other impossible combination.
///
/// # Example
///
/// ```
/// use numer::date::{calendar_date, safe_anniversary};
///
/// assert_eq!(safe_anniversary(2021, 2, 29).unwrap(), calendar_date(2021, 2, 28).unwrap());
/// assert_eq!(safe_anniversary(2020, 2, 29).unwrap(), calendar_date(2020, 2, 29).unwrap());
/// ```
pub fn safe_anniversary(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    match calendar_date(year, month, day) {
        Err(_) if month == 2 && day == 29 => calendar_date(year, 2, 28),
        other => other,
    }
}

/// Destiny (life path) number with its working.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Destiny {
    /// The eight digits of `YYYYMMDD`.
    pub digits: Vec<u32>,
    /// Sum of `digits`.
    pub total: u32,
    /// `total` after reduction.
    pub value: u32,
}

/// Destiny number with its digits and total.
#[must_use]
pub fn destiny(dob: NaiveDate, policy: MasterPolicy) -> Destiny {
    let digits: Vec<u32> = dob
        .format("%Y%m%d")
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();
    let total = digits.iter().sum();
    Destiny {
        digits,
        total,
        value: reduce(total, policy),
    }
}

/// Sums every digit of `YYYYMMDD` and reduces.
///
/// ```
/// use numer::MasterPolicy;
/// use numer::date::{calendar_date, destiny_number};
///
/// // 1+9+9+3+0+7+1+7 = 37 → 10 → 1
/// let dob = calendar_date(1993, 7, 17).unwrap();
/// assert_eq!(destiny_number(dob, MasterPolicy::Keep), 1);
/// ```
#[must_use]
pub fn destiny_number(dob: NaiveDate, policy: MasterPolicy) -> u32 {
    destiny(dob, policy).value
}

/// Reduces the day of month only.
#[must_use]
pub fn ruling_number(dob: NaiveDate, policy: MasterPolicy) -> u32 {
    reduce(dob.day(), policy)
}

/// Chaldean number of the month's English name.
///
/// # Errors
///
/// Returns [`Error::InvalidMonth`] unless `month` is 1-12.
///
/// # Example
///
/// ```
/// use numer::MasterPolicy;
/// use numer::date::chaldean_month_number;
///
/// assert_eq!(chaldean_month_number(7, MasterPolicy::Keep).unwrap(), 11); // JULY = 1+6+3+1
/// assert!(chaldean_month_number(13, MasterPolicy::Keep).is_err());
/// ```
pub fn chaldean_month_number(month: u32, policy: MasterPolicy) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidMonth(month));
    }
    word_number(MONTH_NAMES[(month - 1) as usize], policy)
}

/// Chaldean destiny: day digit sum + Chaldean month number + year digit sum,
/// reduced.
///
/// # Errors
///
/// Propagates [`chaldean_month_number`] errors, which cannot occur for a
/// valid date.
pub fn chaldean_destiny_number(dob: NaiveDate, policy: MasterPolicy) -> Result<u32> {
    let day_sum = digit_sum(dob.day());
    let month = chaldean_month_number(dob.month(), policy)?;
    let year_sum = digit_sum(dob.year().unsigned_abs());
    Ok(reduce(day_sum + month + year_sum, policy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        calendar_date(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_formats_agree() {
        let expected = ymd(1993, 7, 17);
        for text in ["1993-07-17", "17-07-1993", "17/07/1993", " 17/7/1993 ", "1993/7/17"] {
            assert_eq!(parse_dob(text).unwrap(), expected, "{text}");
        }
    }

    #[test]
    fn test_parse_bad_format() {
        for text in ["", "1993-07", "1993-07-17-01", "17.07.1993", "aa-bb-cccc", "17--1993"] {
            assert!(
                matches!(parse_dob(text), Err(Error::InvalidDateFormat(_))),
                "{text}"
            );
        }
    }

    #[test]
    fn test_parse_calendar_error() {
        assert_eq!(
            parse_dob("31/04/2021"),
            Err(Error::InvalidDate {
                year: 2021,
                month: 4,
                day: 31
            })
        );
        assert!(matches!(
            parse_dob("2021-13-01"),
            Err(Error::InvalidDate { month: 13, .. })
        ));
        assert!(matches!(
            parse_dob("29-02-2021"),
            Err(Error::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_year_zero_rejected() {
        let year_zero = Err(Error::InvalidDate {
            year: 0,
            month: 1,
            day: 1,
        });
        assert_eq!(parse_dob("0000-01-01"), year_zero);
        assert_eq!(parse_dob("01-01-0"), year_zero);
        assert_eq!(calendar_date(0, 1, 1), year_zero);
        assert_eq!(parse_dob("01-01-1").unwrap(), ymd(1, 1, 1));
    }

    #[test]
    fn test_safe_anniversary() {
        assert_eq!(safe_anniversary(2021, 2, 29).unwrap(), ymd(2021, 2, 28));
        assert_eq!(safe_anniversary(2020, 2, 29).unwrap(), ymd(2020, 2, 29));
        assert_eq!(safe_anniversary(1900, 2, 29).unwrap(), ymd(1900, 2, 28));
        assert!(safe_anniversary(2021, 4, 31).is_err());
    }

    #[test]
    fn test_destiny_breakdown() {
        let d = destiny(ymd(1993, 7, 17), MasterPolicy::Keep);
        assert_eq!(d.digits, vec![1, 9, 9, 3, 0, 7, 1, 7]);
        assert_eq!(d.total, 37);
        assert_eq!(d.value, 1);
    }

    #[test]
    fn test_destiny_master() {
        // 1+9+9+9+0+9+2+9 = 48 → 12 → 3
        assert_eq!(destiny_number(ymd(1999, 9, 29), MasterPolicy::Keep), 3);
        // 1+9+8+0+0+9+2+9 = 38 → 11
        assert_eq!(destiny_number(ymd(1980, 9, 29), MasterPolicy::Keep), 11);
        assert_eq!(destiny_number(ymd(1980, 9, 29), MasterPolicy::Collapse), 2);
    }

    #[test]
    fn test_ruling() {
        assert_eq!(ruling_number(ymd(1993, 7, 17), MasterPolicy::Keep), 8);
        assert_eq!(ruling_number(ymd(1993, 7, 29), MasterPolicy::Keep), 11);
        assert_eq!(ruling_number(ymd(1993, 7, 29), MasterPolicy::Collapse), 2);
        assert_eq!(ruling_number(ymd(1993, 7, 22), MasterPolicy::Keep), 22);
    }

    #[test]
    fn test_chaldean_months() {
        let expected = [8, 9, 6, 6, 6, 8, 11, 5, 11, 3, 9, 3];
        for (month, want) in (1..=12).zip(expected) {
            assert_eq!(
                chaldean_month_number(month, MasterPolicy::Keep).unwrap(),
                want,
                "{}",
                MONTH_NAMES[(month - 1) as usize]
            );
        }
        assert_eq!(chaldean_month_number(0, MasterPolicy::Keep), Err(Error::InvalidMonth(0)));
    }

    #[test]
    fn test_chaldean_destiny() {
        // 1+7 + JULY(11) + 1+9+9+3 = 41 → 5
        assert_eq!(
            chaldean_destiny_number(ymd(1993, 7, 17), MasterPolicy::Keep).unwrap(),
            5
        );
        // 8 + 2 + 22 = 32 → 5
        assert_eq!(
            chaldean_destiny_number(ymd(1993, 7, 17), MasterPolicy::Collapse).unwrap(),
            5
        );
    }
}
