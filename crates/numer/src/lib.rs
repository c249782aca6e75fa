//! Numer - numerology calculators over names and birth dates.
//!
//! Every calculator in this crate is a pure function of its explicit inputs.
//! The only shared state is a set of immutable lookup tables (alphabet maps,
//! grid layouts, month names) built at compile time.
//!
//! # Calculators
//!
//! | Calculator | Input | Output |
//! |------------|-------|--------|
//! | [`reduce`] | integer | single digit, or master 11/22 |
//! | [`name::map_name`] | text + [`Alphabet`] | cleaned letters and values |
//! | [`pyramid::build_pyramid`] | letter values | pairwise-sum triangle |
//! | [`chart::trace`] | name | letter-by-letter [`Sign`] placement |
//! | [`date::destiny_number`] | date of birth | reduced digit sum |
//! | [`mapping::build_mapping`] | name + DOB + cutoff | anniversary sequence |
//! | [`grid::LoShu`] | date of birth | 3×3 digit-frequency grid |
//! | [`grid::shiva_maya_chakra`] | ruling number | shifted 3×3 grid |
//!
//! # Alphabets
//!
//! Two independent letter maps exist and are never mixed:
//!
//! | Alphabet | Range | Used by |
//! |----------|-------|---------|
//! | [`Alphabet::Chaldean`] | 1-8 | name number, pyramid, month names |
//! | [`Alphabet::Pythagorean`] | 1-9 | name chart, date mapping |
//!
//! # Master Numbers
//!
//! Whether 11 and 22 survive reduction is a per-call [`MasterPolicy`],
//! never a global mode.
//!
//! # Example
//!
//! ```
//! use numer::{reduce, MasterPolicy, Sign};
//! use numer::chart::trace;
//!
//! assert_eq!(reduce(29, MasterPolicy::Keep), 11);
//! assert_eq!(reduce(29, MasterPolicy::Collapse), 2);
//!
//! let t = trace("Amma").unwrap();
//! let placement = t.placement();
//! assert_eq!(placement.letters(Sign::Aries), "A");
//! assert_eq!(placement.letters(Sign::Cancer), "M");
//! assert_eq!(placement.letters(Sign::Libra), "MA");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

// Core data types (alphabet maps, reduction, signs, constants)
mod core;

// Error type shared by every calculator
mod error;

// Name cleaning and letter-value mapping
pub mod name;

// Pairwise-sum pyramid
pub mod pyramid;

// Zodiac name chart
pub mod chart;

// Date parsing and date-derived numbers
pub mod date;

// Name-year anniversary mapping
pub mod mapping;

// Lo Shu and Shiva Maya grids
pub mod grid;

// Per-number compatibility attributes
pub mod attributes;

// Aggregated report over every calculator
pub mod report;

// Re-export submodules for external access
pub use crate::core::alphabet;
pub use crate::core::constants;
pub use crate::core::reduce as reduction;
pub use crate::core::sign;

// Re-export core types at crate root
pub use crate::core::alphabet::{value_of, Alphabet};
pub use crate::core::constants::{MASTER_NUMBERS, MONTH_NAMES, SIGN_COUNT};
pub use crate::core::reduce::{digit_sum, reduce, MasterPolicy};
pub use crate::core::sign::Sign;
pub use error::{Error, Result};

pub use report::{BirthReport, NameReport, Report};

/// Prelude module for convenient imports.
///
/// ```
/// use numer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::alphabet::{value_of, Alphabet};
    pub use crate::core::reduce::{digit_sum, reduce, MasterPolicy};
    pub use crate::core::sign::Sign;
    pub use crate::error::{Error, Result};

    pub use crate::chart::{trace, ChartPlacement, NameTrace, TraceStep};
    pub use crate::date::{
        chaldean_destiny_number, chaldean_month_number, destiny_number, parse_dob,
        ruling_number, safe_anniversary,
    };
    pub use crate::grid::{shiva_maya_chakra, shiva_maya_start_number, Grid, LoShu};
    pub use crate::mapping::{build_mapping, DateMapping, DateMappingRow};
    pub use crate::name::{clean, map_name, name_number, NameNumber, NameValues};
    pub use crate::pyramid::{build_pyramid, Pyramid};
    pub use crate::report::{BirthReport, NameReport, Report};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabets_never_share_a_table() {
        let differing = ('A'..='Z')
            .filter(|&c| {
                value_of(c, Alphabet::Chaldean).ok() != value_of(c, Alphabet::Pythagorean).ok()
            })
            .count();
        assert!(differing > 0);
    }

    #[test]
    fn test_master_examples() {
        assert_eq!(reduce(11, MasterPolicy::Keep), 11);
        assert_eq!(reduce(22, MasterPolicy::Keep), 22);
        assert_eq!(reduce(29, MasterPolicy::Keep), 11);
        assert_eq!(reduce(29, MasterPolicy::Collapse), 2);
    }

    #[test]
    fn test_amma_chart() {
        let t = chart::trace("AMMA").unwrap();
        let signs: Vec<Sign> = t.steps().iter().map(|s| s.sign).collect();
        assert_eq!(signs, [Sign::Aries, Sign::Cancer, Sign::Libra, Sign::Libra]);
    }

    #[test]
    fn test_clean_example() {
        assert_eq!(name::clean(" Jo3hn_Doe "), "JOHNDOE");
    }

    // Resolves to `true` only when `T: Default`, via autoref method lookup.
    struct Implicit<T>(std::marker::PhantomData<T>);

    trait HasDefault {
        fn has_default(&self) -> bool {
            true
        }
    }
    impl<T: Default> HasDefault for &Implicit<T> {}

    trait NoDefault {
        fn has_default(&self) -> bool {
            false
        }
    }
    impl<T> NoDefault for Implicit<T> {}

    #[test]
    fn test_policy_and_alphabet_must_be_chosen() {
        assert!(!(&&Implicit::<MasterPolicy>(std::marker::PhantomData)).has_default());
        assert!(!(&&Implicit::<Alphabet>(std::marker::PhantomData)).has_default());
        assert!((&&Implicit::<Sign>(std::marker::PhantomData)).has_default());
    }
}
