//! Name chart renderers: the step trace and the South Indian board.

use numer::chart::{south_indian_grid, ChartPlacement, NameTrace};

use crate::table::borders;

/// Column width of a South Indian board cell.
pub const CHART_COL_WIDTH: usize = 8;

/// One `  X(v) -> Sign` line per traced letter.
#[must_use]
pub fn format_trace(trace: &NameTrace) -> String {
    trace
        .steps()
        .iter()
        .map(|s| format!("  {}({}) -> {}", s.letter, s.value, s.sign))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Draws `placement` on the fixed-sign 4×4 board.
///
/// Each cell spans two lines: the sign abbreviation, then the letters
/// placed on it. The four centre cells stay blank.
#[must_use]
pub fn format_south_indian_chart(placement: &ChartPlacement) -> String {
    let w = CHART_COL_WIDTH;
    let grid = south_indian_grid(placement);
    let (top, mid, bot) = borders(4, w);

    let mut lines = vec![top];
    for (i, row) in grid.iter().enumerate() {
        let mut signs = Vec::with_capacity(row.len());
        let mut letters = Vec::with_capacity(row.len());
        for cell in row {
            let (abbr, placed) = match cell {
                Some(c) => (c.sign.abbr(), c.letters.as_str()),
                None => ("", ""),
            };
            signs.push(format!("{abbr:^w$}"));
            letters.push(format!("{placed:^w$}"));
        }
        lines.push(format!("│{}│", signs.join("│")));
        lines.push(format!("│{}│", letters.join("│")));
        if i + 1 < grid.len() {
            lines.push(mid.clone());
        }
    }
    lines.push(bot);
    lines.join("\n")
}
