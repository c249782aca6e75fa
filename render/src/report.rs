//! Full text report, section by section.

use core::fmt::Display;

use chrono::Datelike;
use numer::attributes::AttributeRow;
use numer::mapping::DisplayDate;
use numer::{BirthReport, NameReport, Report, MONTH_NAMES};

use crate::chart::{format_south_indian_chart, format_trace};
use crate::table::{
    format_box_grid, format_mapping_table, format_number_list, format_pyramid, join, kv, section,
    WIDTH,
};

/// Indent of the pyramid's first row.
pub const PYRAMID_INDENT: usize = 6;

/// Renders every section of `report` in display order.
///
/// ```
/// use numer::Report;
/// use numer::date::calendar_date;
/// use numer_render::render_report;
///
/// let end = calendar_date(2024, 1, 1).unwrap();
/// let report = Report::compute("Amma", None, end).unwrap();
/// let text = render_report(&report);
/// assert!(text.contains("CHALDEAN NAME"));
/// assert!(!text.contains("DOB NUMBERS"));
/// ```
#[must_use]
pub fn render_report(report: &Report) -> String {
    let mut out = render_name(&report.name);
    if let Some(birth) = &report.birth {
        out.push('\n');
        out.push_str(&render_birth(birth));
    }
    out
}

/// Chaldean name, name chart and pyramid sections.
#[must_use]
pub fn render_name(name: &NameReport) -> String {
    let mut lines = vec![
        section("CHALDEAN NAME", WIDTH),
        kv("Name (clean)", &name.chaldean.clean),
        kv("Letter numbers", format_number_list(&name.chaldean.values)),
        kv("Name total", name.number.total),
        kv("Name number (reduced)", name.number.reduced),
        section("NAME CHART (PYTHAGOREAN)", WIDTH),
    ];

    if name.trace.is_empty() {
        lines.push("(No letters to chart)".to_owned());
    } else {
        lines.push("Step trace: letter(value) -> sign".to_owned());
        lines.push(format_trace(&name.trace));
        lines.push("\nSouth Indian chart (fixed signs):".to_owned());
        lines.push(format_south_indian_chart(&name.placement));
    }

    lines.push(section("PYRAMID", WIDTH));
    if !name.pyramid.rows().is_empty() {
        lines.push(format_pyramid(name.pyramid.rows(), PYRAMID_INDENT));
    }
    lines.push(kv("Pyramid apex", or_dash(name.pyramid.apex())));

    lines.join("\n")
}

/// Date-of-birth sections: numbers, chakra, Lo Shu, name-year mapping and
/// attributes.
#[must_use]
pub fn render_birth(birth: &BirthReport) -> String {
    let month_label = MONTH_NAMES
        .get(birth.dob.month0() as usize)
        .copied()
        .unwrap_or_default();

    let mut lines = vec![
        section("DOB NUMBERS", WIDTH),
        kv("DOB parsed", birth.dob),
        kv(
            "Destiny digits",
            format!("{} = {}", join(&birth.destiny.digits, "+"), birth.destiny.total),
        ),
        kv("Destiny (Life Path)", birth.destiny.value),
        kv("Ruling (day only)", birth.ruling),
        section("SHIVA MAYA CHAKRA", WIDTH),
        kv("Ruling (single)", birth.ruling_single),
        kv("Start number", birth.start_number),
        "\nShiva Maya 3x3 for your ruling number:".to_owned(),
        format_box_grid(&birth.chakra, 4, ""),
        kv(&format!("Chaldean month ({month_label})"), birth.chaldean_month),
        kv("Chaldean destiny", birth.chaldean_destiny),
        section("LO SHU GRID", WIDTH),
        "Digits taken from DOB (DDMMYYYY); 0 is ignored.".to_owned(),
        crate::format_loshu_grid(&birth.lo_shu.grid()),
        kv("Present counts", present_counts(&birth.lo_shu.present())),
        kv("Missing numbers", format!("[{}]", join(&birth.lo_shu.missing(), ", "))),
    ];

    let mapping = &birth.mapping;
    lines.extend([
        section("NAME YEAR MAPPING (PYTHAGOREAN)", WIDTH),
        kv("Birth date", DisplayDate(mapping.birth())),
        kv("End date", DisplayDate(mapping.end_date())),
        kv("Name (clean)", mapping.clean()),
        format!("\n{}", format_mapping_table(mapping.rows())),
    ]);

    lines.push(section("NUMBER ATTRIBUTES", WIDTH));
    for row in &birth.attributes {
        lines.push(format_attribute_row(row));
    }

    lines.join("\n")
}

/// The section shown in place of the date sections when the date of birth
/// cannot be used.
#[must_use]
pub fn render_dob_error(error: &impl Display) -> String {
    format!("{}\n{error}", section("DOB ERROR", WIDTH))
}

/// One attribute block: headline value, then planet, gem, colours and
/// compatible numbers.
#[must_use]
pub fn format_attribute_row(row: &AttributeRow) -> String {
    let label = row.kind.label();
    let Some(attrs) = row.attributes else {
        return kv(label, "-");
    };

    let value = if row.value == row.lookup {
        row.value.to_string()
    } else {
        format!("{} ({})", row.value, row.lookup)
    };
    let gem = match attrs.gem_alternative {
        Some(alt) => format!("{}, alt. {alt}", attrs.gem),
        None => attrs.gem.to_owned(),
    };
    let list = |nums: &[u32]| {
        if nums.is_empty() {
            "-".to_owned()
        } else {
            join(nums, ", ")
        }
    };

    [
        kv(label, value),
        kv("  Planet", attrs.planet),
        kv("  Gem", gem),
        kv("  Colours", attrs.colors),
        kv("  Excellent", list(attrs.excellent)),
        kv("  Good", list(attrs.good)),
        kv("  Neutral", list(attrs.neutral)),
        kv("  Bad", list(attrs.bad)),
    ]
    .join("\n")
}

fn present_counts(present: &[(u32, u32)]) -> String {
    let pairs: Vec<String> = present.iter().map(|(d, c)| format!("{d}: {c}")).collect();
    format!("{{{}}}", pairs.join(", "))
}

fn or_dash(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| v.to_string())
}
