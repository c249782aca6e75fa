//! Generic text layout: rules, section headers, key/value lines, boxed
//! grids, pyramids and the name-year table.

use core::fmt::Display;

use numer::mapping::DateMappingRow;

/// Default report width.
pub const WIDTH: usize = 56;

/// Default key column width for [`kv`].
pub const LABEL_WIDTH: usize = 26;

/// A horizontal rule of `width` copies of `ch`.
#[must_use]
pub fn hr(ch: char, width: usize) -> String {
    core::iter::repeat(ch).take(width).collect()
}

/// A section header: blank line, double rule, centered title, double rule.
#[must_use]
pub fn section(title: &str, width: usize) -> String {
    let rule = hr('═', width);
    format!("\n{rule}\n{title:^width$}\n{rule}")
}

/// `label : value` with the label left-aligned in [`LABEL_WIDTH`] columns.
#[must_use]
pub fn kv(label: &str, value: impl Display) -> String {
    format!("{label:<LABEL_WIDTH$} : {value}")
}

/// Space-separated numbers.
#[must_use]
pub fn format_number_list(nums: &[u32]) -> String {
    join(nums, " ")
}

/// Numbers joined by `sep`.
#[must_use]
pub fn join(nums: &[u32], sep: &str) -> String {
    nums.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Draws `grid` in a single-line box, each cell centered in `col_w`
/// columns. Empty cells show `empty`.
///
/// ```
/// use numer_render::format_box_grid;
///
/// let out = format_box_grid(&[[1, 2], [3, 4]], 3, ".");
/// assert_eq!(out, "┌───┬───┐\n│ 1 │ 2 │\n├───┼───┤\n│ 3 │ 4 │\n└───┴───┘");
/// ```
#[must_use]
pub fn format_box_grid<T: Display, const C: usize>(
    grid: &[[T; C]],
    col_w: usize,
    empty: &str,
) -> String {
    let (top, mid, bot) = borders(C, col_w);
    let mut lines = vec![top];
    for (i, row) in grid.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| {
                let text = cell.to_string();
                let shown = if text.is_empty() { empty } else { &text };
                format!("{shown:^col_w$}")
            })
            .collect();
        lines.push(format!("│{}│", cells.join("│")));
        if i + 1 < grid.len() {
            lines.push(mid.clone());
        }
    }
    lines.push(bot);
    lines.join("\n")
}

/// Top, middle and bottom borders for `cols` columns of `col_w`.
pub(crate) fn borders(cols: usize, col_w: usize) -> (String, String, String) {
    let seg = hr('─', col_w);
    let span = |left: &str, join: &str, right: &str| {
        format!("{left}{}{right}", vec![seg.as_str(); cols].join(join))
    };
    (span("┌", "┬", "┐"), span("├", "┼", "┤"), span("└", "┴", "┘"))
}

/// Pyramid rows, each indented one column further than the last.
///
/// ```
/// use numer_render::format_pyramid;
///
/// let rows = vec![vec![1, 4, 4, 1], vec![5, 8, 5], vec![4, 4], vec![8]];
/// assert_eq!(format_pyramid(&rows, 2), "  1441\n   585\n    44\n     8");
/// ```
#[must_use]
pub fn format_pyramid(rows: &[Vec<u32>], indent: usize) -> String {
    rows.iter()
        .enumerate()
        .map(|(i, row)| format!("{}{}", " ".repeat(indent + i), join(row, "")))
        .collect::<Vec<_>>()
        .join("\n")
}

const W_STEP: usize = 6;
const W_LETTER: usize = 6;
const W_VAL: usize = 6;
const W_DATE: usize = 12;

/// Aligned Step / Letter / Val / Date table; `(no rows)` when empty.
#[must_use]
pub fn format_mapping_table(rows: &[DateMappingRow]) -> String {
    if rows.is_empty() {
        return "(no rows)".to_owned();
    }

    let header = format!(
        "{:<W_STEP$} {:<W_LETTER$} {:<W_VAL$} {:<W_DATE$}",
        "Step", "Letter", "Val", "Date"
    );
    let rule = hr('-', header.chars().count());
    let mut lines = vec![header, rule];
    for r in rows {
        lines.push(format!(
            "{:<W_STEP$} {:<W_LETTER$} {:<W_VAL$} {:<W_DATE$}",
            r.step,
            r.letter,
            r.value,
            r.display_date().to_string()
        ));
    }
    lines.join("\n")
}
