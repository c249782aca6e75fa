//! End-to-end checks against hand-worked charts.

use chrono::{Datelike, NaiveDate};
use numer::prelude::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================================
// Alphabets and reduction
// =============================================================================

#[test]
fn letter_values_in_range() {
    for c in 'A'..='Z' {
        assert!((1..=8).contains(&value_of(c, Alphabet::Chaldean).unwrap()));
        assert!((1..=9).contains(&value_of(c, Alphabet::Pythagorean).unwrap()));
    }
}

#[test]
fn masters_survive_only_when_kept() {
    assert_eq!(reduce(11, MasterPolicy::Keep), 11);
    assert_eq!(reduce(22, MasterPolicy::Keep), 22);
    assert_eq!(reduce(29, MasterPolicy::Keep), 11);
    assert_eq!(reduce(29, MasterPolicy::Collapse), 2);
}

// =============================================================================
// Name chart
// =============================================================================

#[test]
fn amma_chart() {
    let t = trace("AMMA").unwrap();
    let placed: Vec<(char, Sign)> = t.steps().iter().map(|s| (s.letter, s.sign)).collect();
    assert_eq!(
        placed,
        [
            ('A', Sign::Aries),
            ('M', Sign::Cancer),
            ('M', Sign::Libra),
            ('A', Sign::Libra)
        ]
    );
    let p = t.placement();
    assert_eq!(p.letters(Sign::Aries), "A");
    assert_eq!(p.letters(Sign::Cancer), "M");
    assert_eq!(p.letters(Sign::Libra), "MA");
    for sign in Sign::ALL {
        if ![Sign::Aries, Sign::Cancer, Sign::Libra].contains(&sign) {
            assert_eq!(p.letters(sign), "");
        }
    }
}

#[test]
fn mama_chart() {
    let p = trace("mama").unwrap().placement();
    assert_eq!(p.letters(Sign::Cancer), "MA");
    assert_eq!(p.letters(Sign::Libra), "MA");
}

// =============================================================================
// Dates
// =============================================================================

#[test]
fn dob_formats_agree() {
    let a = parse_dob("1993-07-17").unwrap();
    assert_eq!(a, parse_dob("17-07-1993").unwrap());
    assert_eq!(a, parse_dob("17/07/1993").unwrap());
    assert_eq!(a, ymd(1993, 7, 17));
}

#[test]
fn dob_errors() {
    assert!(matches!(parse_dob("17 07 1993"), Err(Error::InvalidDateFormat(_))));
    assert!(matches!(parse_dob("31-02-1993"), Err(Error::InvalidDate { .. })));
}

#[test]
fn leap_day_fallback() {
    assert_eq!(safe_anniversary(2021, 2, 29).unwrap(), ymd(2021, 2, 28));
    assert_eq!(safe_anniversary(2020, 2, 29).unwrap(), ymd(2020, 2, 29));
}

#[test]
fn derived_numbers_1993_07_17() {
    let dob = ymd(1993, 7, 17);
    assert_eq!(destiny_number(dob, MasterPolicy::Keep), 1);
    assert_eq!(ruling_number(dob, MasterPolicy::Keep), 8);
    assert_eq!(chaldean_month_number(7, MasterPolicy::Keep).unwrap(), 11);
    assert_eq!(chaldean_destiny_number(dob, MasterPolicy::Keep).unwrap(), 5);
    assert_eq!(
        chaldean_month_number(13, MasterPolicy::Keep),
        Err(Error::InvalidMonth(13))
    );
}

// =============================================================================
// Date mapping
// =============================================================================

#[test]
fn mapping_1993_07_17() {
    let dob = ymd(1993, 7, 17);
    let end = ymd(2026, 10, 18);
    let m = build_mapping("John Doe", dob, end).unwrap();
    assert_eq!(m.clean(), "JOHNDOE");

    let rows = m.rows();
    assert_eq!(rows[0].date, dob);
    for pair in rows.windows(2) {
        assert_eq!(
            pair[1].year,
            pair[0].year + value_of(pair[1].letter, Alphabet::Pythagorean).unwrap() as i32
        );
    }
    let last = rows.last().unwrap();
    assert!(last.date <= end);

    // The row that would follow the last one lies past the cutoff.
    let letters: Vec<char> = m.clean().chars().collect();
    let next_letter = letters[rows.len() % letters.len()];
    let next_year = last.year + value_of(next_letter, Alphabet::Pythagorean).unwrap() as i32;
    let next = safe_anniversary(next_year, dob.month(), dob.day()).unwrap();
    assert!(next > end);
}

// =============================================================================
// Grids
// =============================================================================

#[test]
fn lo_shu_1993_07_17() {
    let lo_shu = LoShu::from_dob(ymd(1993, 7, 17));
    assert_eq!(lo_shu.present(), vec![(1, 2), (3, 1), (7, 2), (9, 2)]);
    assert_eq!(lo_shu.missing(), vec![2, 4, 5, 6, 8]);
}

#[test]
fn chakra_shifts() {
    let base = shiva_maya_chakra(1).unwrap();
    assert_eq!(base, numer::constants::SHIVA_MAYA_BASE);
    assert_eq!(shiva_maya_start_number(3).unwrap(), 5);
    let shifted = shiva_maya_chakra(3).unwrap();
    for (row, base_row) in shifted.iter().zip(base.iter()) {
        for (v, b) in row.iter().zip(base_row) {
            assert_eq!(*v, b + 4);
        }
    }
    assert_eq!(shiva_maya_chakra(10), Err(Error::InvalidRulingNumber(10)));
}

// =============================================================================
// Pyramid
// =============================================================================

#[test]
fn pyramid_of_one() {
    let p = build_pyramid(&[6], MasterPolicy::Keep);
    assert_eq!(p.rows(), &[vec![6]]);
}
