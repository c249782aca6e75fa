//! Pairwise-sum pyramid.
//!
//! Row 0 is the input verbatim. Each following row is one shorter, with
//! element `i` = `reduce(prev[i] + prev[i + 1])`. The pyramid ends at the
//! first row of length 1, whose single value is the apex.

use crate::core::reduce::{reduce, MasterPolicy};

/// A reduction pyramid.
///
/// # Example
///
/// ```
/// use numer::MasterPolicy;
/// use numer::pyramid::build_pyramid;
///
/// let p = build_pyramid(&[1, 4, 4, 1], MasterPolicy::Collapse);
/// assert_eq!(p.rows(), &[vec![1, 4, 4, 1], vec![5, 8, 5], vec![4, 4], vec![8]]);
/// assert_eq!(p.apex(), Some(8));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Pyramid {
    rows: Vec<Vec<u32>>,
}

impl Pyramid {
    /// Returns every row, widest first.
    #[must_use]
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.rows.len()
    }

    /// Returns the single value of the last row, if any.
    #[must_use]
    pub fn apex(&self) -> Option<u32> {
        match self.rows.last() {
            Some(row) if row.len() == 1 => Some(row[0]),
            _ => None,
        }
    }

    /// Consumes the pyramid, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<u32>> {
        self.rows
    }
}

/// Builds the pyramid for `values`.
///
/// A single value yields one row. An empty input yields an empty pyramid
/// with no apex.
#[must_use]
pub fn build_pyramid(values: &[u32], policy: MasterPolicy) -> Pyramid {
    if values.is_empty() {
        return Pyramid::default();
    }

    let mut rows = Vec::with_capacity(values.len());
    rows.push(values.to_vec());
    while let Some(prev) = rows.last().filter(|r| r.len() > 1) {
        let next: Vec<u32> = prev
            .windows(2)
            .map(|pair| reduce(pair[0] + pair[1], policy))
            .collect();
        rows.push(next);
    }
    Pyramid { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        let p = build_pyramid(&[7], MasterPolicy::Keep);
        assert_eq!(p.rows(), &[vec![7]]);
        assert_eq!(p.apex(), Some(7));
    }

    #[test]
    fn test_empty() {
        let p = build_pyramid(&[], MasterPolicy::Keep);
        assert_eq!(p.depth(), 0);
        assert_eq!(p.apex(), None);
    }

    #[test]
    fn test_row_lengths_decrease() {
        let values = [3, 1, 4, 1, 5, 9, 2, 6];
        let p = build_pyramid(&values, MasterPolicy::Collapse);
        assert_eq!(p.depth(), values.len());
        for (i, row) in p.rows().iter().enumerate() {
            assert_eq!(row.len(), values.len() - i);
        }
    }

    #[test]
    fn test_masters_in_rows() {
        // 5 + 6 = 11, 9 + 2 = 11
        let keep = build_pyramid(&[5, 6], MasterPolicy::Keep);
        assert_eq!(keep.apex(), Some(11));
        let collapse = build_pyramid(&[5, 6], MasterPolicy::Collapse);
        assert_eq!(collapse.apex(), Some(2));
    }

    #[test]
    fn test_first_row_verbatim() {
        let values = vec![8, 8, 8];
        let p = build_pyramid(&values, MasterPolicy::Collapse);
        assert_eq!(p.rows()[0], values);
        assert_eq!(p.into_rows(), vec![vec![8, 8, 8], vec![7, 7], vec![5]]);
    }
}
