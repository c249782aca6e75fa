//! JSON shape of the aggregated report.

#![cfg(feature = "serde")]

use chrono::NaiveDate;
use numer::Report;

#[test]
fn report_serializes() {
    let dob = NaiveDate::from_ymd_opt(1993, 7, 17).unwrap();
    let end = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let report = Report::compute("Amma", Some(dob), end).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["name"]["chaldean"]["clean"], "AMMA");
    assert_eq!(json["name"]["chaldean"]["alphabet"], "Chaldean");
    assert_eq!(json["name"]["number"]["total"], 10);
    assert_eq!(json["birth"]["dob"], "1993-07-17");
    assert_eq!(json["birth"]["mapping"]["rows"][1]["year"], 1997);
    assert_eq!(json["name"]["trace"]["steps"][1]["sign"], "Cancer");
}
