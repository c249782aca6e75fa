//! Plain-text renderers for numer results.
//!
//! Every function returns a `String`; nothing here prints. Grids are drawn
//! with single-line box characters and sections are framed by double rules
//! 56 columns wide.
//!
//! ```text
//! ════════════════════════════════════════════════════════
//!                       LO SHU GRID
//! ════════════════════════════════════════════════════════
//! ┌─────┬─────┬─────┐
//! │  .  │ 99  │  .  │
//! ├─────┼─────┼─────┤
//! │  3  │  .  │ 77  │
//! ├─────┼─────┼─────┤
//! │  .  │ 11  │  .  │
//! └─────┴─────┴─────┘
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod chart;
pub mod report;
pub mod table;

pub use chart::{format_south_indian_chart, format_trace};
pub use report::{render_birth, render_dob_error, render_name, render_report};
pub use table::{
    format_box_grid, format_mapping_table, format_number_list, format_pyramid, hr, kv, section,
};

use numer::grid::Grid;

/// Lo Shu display grid, `.` marking digits that never occur.
#[must_use]
pub fn format_loshu_grid(grid: &Grid<String, 3>) -> String {
    format_box_grid(grid, 5, ".")
}
