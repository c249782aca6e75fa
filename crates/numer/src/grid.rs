//! Fixed 3×3 grids: Lo Shu digit frequencies and the Shiva Maya Chakra.
//!
//! Both grids index into constant layouts; only the cell contents vary.

use chrono::NaiveDate;

use crate::core::constants::{LOSHU_LAYOUT, SHIVA_MAYA_BASE, SHIVA_MAYA_START_BY_RULING};
use crate::error::{Error, Result};

/// A square grid of `N`×`N` cells, row-major.
pub type Grid<T, const N: usize> = [[T; N]; N];

/// Digit counts (1-9) over the eight digits of a `DDMMYYYY` birth date.
///
/// Zeros are ignored.
///
/// # Example
///
/// ```
/// use numer::date::calendar_date;
/// use numer::grid::LoShu;
///
/// let lo_shu = LoShu::from_dob(calendar_date(1993, 7, 17).unwrap());
/// assert_eq!(lo_shu.count(7), 2);
/// assert_eq!(lo_shu.missing(), vec![2, 4, 5, 6, 8]);
/// assert_eq!(lo_shu.grid()[1], ["3".to_string(), String::new(), "77".to_string()]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LoShu {
    counts: [u32; 9],
}

impl LoShu {
    /// Counts the non-zero digits of `dob` formatted `DDMMYYYY`.
    #[must_use]
    pub fn from_dob(dob: NaiveDate) -> Self {
        let mut counts = [0u32; 9];
        let digits = dob.format("%d%m%Y").to_string();
        for d in digits.chars().filter_map(|c| c.to_digit(10)) {
            if d != 0 {
                counts[(d - 1) as usize] += 1;
            }
        }
        Self { counts }
    }

    /// Occurrences of `digit`; 0 for anything outside 1-9.
    #[must_use]
    pub fn count(&self, digit: u32) -> u32 {
        match digit {
            1..=9 => self.counts[(digit - 1) as usize],
            _ => 0,
        }
    }

    /// `(digit, count)` for every digit that occurs, ascending.
    #[must_use]
    pub fn present(&self) -> Vec<(u32, u32)> {
        (1..=9)
            .map(|d| (d, self.count(d)))
            .filter(|&(_, c)| c > 0)
            .collect()
    }

    /// Digits 1-9 that never occur, ascending.
    #[must_use]
    pub fn missing(&self) -> Vec<u32> {
        (1..=9).filter(|&d| self.count(d) == 0).collect()
    }

    /// Counts laid out on the Lo Shu square.
    #[must_use]
    pub fn counts_grid(&self) -> Grid<u32, 3> {
        LOSHU_LAYOUT.map(|row| row.map(|d| self.count(d)))
    }

    /// Display grid: each cell holds its digit repeated `count` times, or is
    /// empty.
    #[must_use]
    pub fn grid(&self) -> Grid<String, 3> {
        LOSHU_LAYOUT.map(|row| row.map(|d| d.to_string().repeat(self.count(d) as usize)))
    }
}

/// Shiva Maya start number for a ruling number.
///
/// # Errors
///
/// Returns [`Error::InvalidRulingNumber`] unless `ruling` is 1-9.
pub fn shiva_maya_start_number(ruling: u32) -> Result<u32> {
    match ruling {
        1..=9 => Ok(SHIVA_MAYA_START_BY_RULING[(ruling - 1) as usize]),
        _ => Err(Error::InvalidRulingNumber(ruling)),
    }
}

/// Shiva Maya Chakra: the base grid with every cell shifted by
/// `start - 1`.
///
/// # Errors
///
/// Returns [`Error::InvalidRulingNumber`] unless `ruling` is 1-9.
///
/// # Example
///
/// ```
/// use numer::grid::shiva_maya_chakra;
///
/// assert_eq!(shiva_maya_chakra(1).unwrap(), [[6, 7, 2], [1, 5, 9], [8, 3, 4]]);
/// assert_eq!(shiva_maya_chakra(3).unwrap(), [[10, 11, 6], [5, 9, 13], [12, 7, 8]]);
/// ```
pub fn shiva_maya_chakra(ruling: u32) -> Result<Grid<u32, 3>> {
    let shift = shiva_maya_start_number(ruling)? - 1;
    Ok(SHIVA_MAYA_BASE.map(|row| row.map(|v| v + shift)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::calendar_date;

    #[test]
    fn test_loshu_counts() {
        // 1 7 0 7 1 9 9 3
        let lo_shu = LoShu::from_dob(calendar_date(1993, 7, 17).unwrap());
        assert_eq!(lo_shu.present(), vec![(1, 2), (3, 1), (7, 2), (9, 2)]);
        assert_eq!(lo_shu.missing(), vec![2, 4, 5, 6, 8]);
        assert_eq!(lo_shu.count(0), 0);
        assert_eq!(lo_shu.count(10), 0);
    }

    #[test]
    fn test_loshu_grid_layout() {
        let lo_shu = LoShu::from_dob(calendar_date(1993, 7, 17).unwrap());
        let grid = lo_shu.grid();
        assert_eq!(grid[0], ["", "99", ""]);
        assert_eq!(grid[1], ["3", "", "77"]);
        assert_eq!(grid[2], ["", "11", ""]);
        assert_eq!(lo_shu.counts_grid(), [[0, 2, 0], [1, 0, 2], [0, 2, 0]]);
    }

    #[test]
    fn test_loshu_ignores_zeros() {
        // 0 1 0 1 2 0 0 0
        let lo_shu = LoShu::from_dob(calendar_date(2000, 1, 1).unwrap());
        assert_eq!(lo_shu.present(), vec![(1, 2), (2, 1)]);
        let total: u32 = (1..=9).map(|d| lo_shu.count(d)).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_start_numbers() {
        let starts: Vec<u32> = (1..=9).map(|r| shiva_maya_start_number(r).unwrap()).collect();
        assert_eq!(starts, [1, 2, 5, 8, 4, 6, 9, 7, 3]);
    }

    #[test]
    fn test_chakra_shift() {
        for ruling in 1..=9 {
            let shift = shiva_maya_start_number(ruling).unwrap() - 1;
            let chakra = shiva_maya_chakra(ruling).unwrap();
            for (row, base) in chakra.iter().zip(SHIVA_MAYA_BASE) {
                for (v, b) in row.iter().zip(base) {
                    assert_eq!(*v, b + shift);
                }
            }
        }
    }

    #[test]
    fn test_chakra_invalid() {
        assert_eq!(shiva_maya_chakra(0), Err(Error::InvalidRulingNumber(0)));
        assert_eq!(shiva_maya_chakra(11), Err(Error::InvalidRulingNumber(11)));
    }
}
