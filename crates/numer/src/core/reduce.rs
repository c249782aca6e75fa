//! Digit-sum reduction.
//!
//! Repeatedly replaces a number with the sum of its base-10 digits until a
//! single digit remains. The digit sum of any multi-digit number is strictly
//! smaller than the number, so reduction always terminates.

use super::constants::MASTER_NUMBERS;

/// Whether the master numbers 11 and 22 survive reduction.
///
/// Passed explicitly to every reducing call.
///
/// # Example
///
/// ```
/// use numer::{reduce, MasterPolicy};
///
/// assert_eq!(reduce(38, MasterPolicy::Keep), 11);     // 3+8
/// assert_eq!(reduce(38, MasterPolicy::Collapse), 2);  // 3+8 → 1+1
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MasterPolicy {
    /// Stop at 11 or 22.
    Keep,

    /// Always reduce to 1-9 (0 stays 0).
    Collapse,
}

impl MasterPolicy {
    /// Returns true if master numbers are preserved.
    #[inline]
    #[must_use]
    pub const fn keeps_masters(self) -> bool {
        matches!(self, Self::Keep)
    }
}

impl From<bool> for MasterPolicy {
    fn from(keep_masters: bool) -> Self {
        if keep_masters {
            Self::Keep
        } else {
            Self::Collapse
        }
    }
}

/// Returns true if `n` is a master number.
#[inline]
#[must_use]
pub const fn is_master(n: u32) -> bool {
    n == MASTER_NUMBERS[0] || n == MASTER_NUMBERS[1]
}

/// Sum of the base-10 digits of `n`.
///
/// ```
/// use numer::digit_sum;
///
/// assert_eq!(digit_sum(1993), 22);
/// assert_eq!(digit_sum(0), 0);
/// ```
#[inline]
#[must_use]
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduces `n` to a single digit, or to a master number under
/// [`MasterPolicy::Keep`].
///
/// ```
/// use numer::{reduce, MasterPolicy};
///
/// assert_eq!(reduce(7, MasterPolicy::Keep), 7);
/// assert_eq!(reduce(22, MasterPolicy::Keep), 22);
/// assert_eq!(reduce(22, MasterPolicy::Collapse), 4);
/// assert_eq!(reduce(9999, MasterPolicy::Collapse), 9);
/// ```
#[inline]
#[must_use]
pub const fn reduce(mut n: u32, policy: MasterPolicy) -> u32 {
    while n >= 10 {
        if policy.keeps_masters() && is_master(n) {
            return n;
        }
        n = digit_sum(n);
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digits_fixed() {
        for n in 0..10 {
            assert_eq!(reduce(n, MasterPolicy::Keep), n);
            assert_eq!(reduce(n, MasterPolicy::Collapse), n);
        }
    }

    #[test]
    fn test_masters() {
        assert_eq!(reduce(11, MasterPolicy::Keep), 11);
        assert_eq!(reduce(22, MasterPolicy::Keep), 22);
        assert_eq!(reduce(11, MasterPolicy::Collapse), 2);
        assert_eq!(reduce(22, MasterPolicy::Collapse), 4);
    }

    #[test]
    fn test_master_reached_midway() {
        // 29 → 11, 499 → 22 → stop
        assert_eq!(reduce(29, MasterPolicy::Keep), 11);
        assert_eq!(reduce(499, MasterPolicy::Keep), 22);
        assert_eq!(reduce(499, MasterPolicy::Collapse), 4);
    }

    #[test]
    fn test_positive_range() {
        for n in 1..5000 {
            let r = reduce(n, MasterPolicy::Collapse);
            assert!((1..=9).contains(&r), "{n} -> {r}");
            // Digital root identity
            assert_eq!(r, 1 + (n - 1) % 9);
        }
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(MasterPolicy::from(true), MasterPolicy::Keep);
        assert_eq!(MasterPolicy::from(false), MasterPolicy::Collapse);
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(17), 8);
        assert_eq!(digit_sum(19930717), 37);
        assert_eq!(digit_sum(u32::MAX), 4 + 2 + 9 + 4 + 9 + 6 + 7 + 2 + 9 + 5);
    }
}
