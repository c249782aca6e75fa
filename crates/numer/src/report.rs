//! Aggregated report over every calculator.
//!
//! The report runs each calculator with the master-number policy its section
//! uses:
//!
//! | Section | Alphabet | Policy |
//! |---------|----------|--------|
//! | Name number | Chaldean | Keep |
//! | Pyramid | Chaldean | Collapse |
//! | Name chart | Pythagorean | - |
//! | Destiny / ruling / Chaldean | - | Keep |
//! | Shiva Maya ruling | - | Collapse |
//! | Name-year mapping | Pythagorean | - |

use chrono::{Datelike, NaiveDate};

use crate::attributes::{attribute_rows, AttributeRow};
use crate::chart::{trace, ChartPlacement, NameTrace};
use crate::core::alphabet::Alphabet;
use crate::core::reduce::{reduce, MasterPolicy};
use crate::date::{
    chaldean_destiny_number, chaldean_month_number, destiny, ruling_number, Destiny,
};
use crate::error::Result;
use crate::grid::{shiva_maya_chakra, shiva_maya_start_number, Grid, LoShu};
use crate::mapping::{build_mapping, DateMapping};
use crate::name::{map_name, NameNumber, NameValues};
use crate::pyramid::{build_pyramid, Pyramid};

/// Name-only sections.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NameReport {
    /// Chaldean letter values.
    pub chaldean: NameValues,
    /// Chaldean total and reduced name number.
    pub number: NameNumber,
    /// Pythagorean sign trace.
    pub trace: NameTrace,
    /// Letters per sign.
    pub placement: ChartPlacement,
    /// Pyramid over the Chaldean values.
    pub pyramid: Pyramid,
}

impl NameReport {
    /// Runs the name calculators.
    ///
    /// # Errors
    ///
    /// Propagates alphabet lookup errors.
    pub fn compute(name: &str) -> Result<Self> {
        let chaldean = map_name(name, Alphabet::Chaldean)?;
        let number = chaldean.number(MasterPolicy::Keep);
        let trace = trace(name)?;
        let placement = trace.placement();
        let pyramid = build_pyramid(&chaldean.values, MasterPolicy::Collapse);
        Ok(Self {
            chaldean,
            number,
            trace,
            placement,
            pyramid,
        })
    }
}

/// Date-of-birth sections.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BirthReport {
    /// The date of birth.
    pub dob: NaiveDate,
    /// Destiny number with its digits.
    pub destiny: Destiny,
    /// Ruling number (masters kept).
    pub ruling: u32,
    /// Ruling number collapsed to 1-9, used for the chakra.
    pub ruling_single: u32,
    /// Shiva Maya start number.
    pub start_number: u32,
    /// Shiva Maya Chakra.
    pub chakra: Grid<u32, 3>,
    /// Chaldean month number.
    pub chaldean_month: u32,
    /// Chaldean destiny number.
    pub chaldean_destiny: u32,
    /// Lo Shu digit counts.
    pub lo_shu: LoShu,
    /// Name-year mapping.
    pub mapping: DateMapping,
    /// Attributes of the headline numbers.
    pub attributes: Vec<AttributeRow>,
}

impl BirthReport {
    /// Runs the date calculators for `name` born on `dob`, mapping years up
    /// to `end_date`.
    ///
    /// # Errors
    ///
    /// Propagates calendar and lookup errors.
    pub fn compute(
        name: &NameReport,
        raw_name: &str,
        dob: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self> {
        let destiny = destiny(dob, MasterPolicy::Keep);
        let ruling = ruling_number(dob, MasterPolicy::Keep);
        let ruling_single = reduce(dob.day(), MasterPolicy::Collapse);
        let start_number = shiva_maya_start_number(ruling_single)?;
        let chakra = shiva_maya_chakra(ruling_single)?;
        let chaldean_month = chaldean_month_number(dob.month(), MasterPolicy::Keep)?;
        let chaldean_destiny = chaldean_destiny_number(dob, MasterPolicy::Keep)?;
        let lo_shu = LoShu::from_dob(dob);
        let mapping = build_mapping(raw_name, dob, end_date)?;
        let attributes = attribute_rows(
            name.number.reduced,
            name.pyramid.apex(),
            destiny.value,
            ruling,
        );
        Ok(Self {
            dob,
            destiny,
            ruling,
            ruling_single,
            start_number,
            chakra,
            chaldean_month,
            chaldean_destiny,
            lo_shu,
            mapping,
            attributes,
        })
    }
}

/// Every calculator's output for one name and optional date of birth.
///
/// # Example
///
/// ```
/// use numer::Report;
/// use numer::date::calendar_date;
///
/// let dob = calendar_date(1993, 7, 17).unwrap();
/// let end = calendar_date(2024, 1, 1).unwrap();
/// let report = Report::compute("Amma", Some(dob), end).unwrap();
///
/// assert_eq!(report.name.number.total, 10);
/// let birth = report.birth.unwrap();
/// assert_eq!(birth.destiny.value, 1);
/// assert_eq!(birth.ruling, 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    /// Name sections.
    pub name: NameReport,
    /// Date sections, when a date of birth was given.
    pub birth: Option<BirthReport>,
}

impl Report {
    /// Runs every calculator.
    ///
    /// # Errors
    ///
    /// Propagates any calculator error; no partial report is returned.
    pub fn compute(name: &str, dob: Option<NaiveDate>, end_date: NaiveDate) -> Result<Self> {
        let name_report = NameReport::compute(name)?;
        let birth = dob
            .map(|dob| BirthReport::compute(&name_report, name, dob, end_date))
            .transpose()?;

        tracing::debug!(
            name = %name_report.chaldean.clean,
            has_dob = birth.is_some(),
            "computed report"
        );

        Ok(Self {
            name: name_report,
            birth,
        })
    }
}
