//! Fixed tables shared across calculators.
//!
//! Every layout here is a literal constant. Nothing in the crate computes or
//! mutates a layout; calculators only index into them.

/// Number of zodiac signs in the name-chart cycle.
pub const SIGN_COUNT: usize = 12;

/// Two-digit values preserved by [`crate::MasterPolicy::Keep`].
pub const MASTER_NUMBERS: [u32; 2] = [11, 22];

/// English month names, January first.
///
/// The Chaldean month number is the reduced Chaldean value of these names.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Lo Shu magic square.
///
/// ```text
/// 4 9 2
/// 3 5 7
/// 8 1 6
/// ```
pub const LOSHU_LAYOUT: [[u32; 3]; 3] = [[4, 9, 2], [3, 5, 7], [8, 1, 6]];

/// Shiva Maya Chakra base grid (ruling number 1, shift 0).
pub const SHIVA_MAYA_BASE: [[u32; 3]; 3] = [[6, 7, 2], [1, 5, 9], [8, 3, 4]];

/// Shiva Maya start number indexed by `ruling - 1`.
///
/// 1→1, 2→2, 3→5, 4→8, 5→4, 6→6, 7→9, 8→7, 9→3
pub const SHIVA_MAYA_START_BY_RULING: [u32; 9] = [1, 2, 5, 8, 4, 6, 9, 7, 3];
