//! Run summary reporting.

use std::path::PathBuf;
use std::time::Duration;

use citeboard_core::fmt_num;
use comfy_table::{Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};

/// Counters for one dashboard build.
///
/// Returned by `run` after the artifact has been written.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Roster rows processed, after the optional row limit
    pub roster_rows: usize,
    /// Author records in the written artifact
    pub records_written: usize,
    /// Roster rows skipped because the search returned no match
    pub unresolved: usize,
    /// Records written with a null h-index after a works-fetch failure
    pub h_index_failures: usize,
    /// Works pages requested across all authors
    pub works_pages: usize,
    pub output_path: PathBuf,
    pub elapsed: Duration,
}

impl RunSummary {
    /// Format summary table as a string.
    pub fn format_table(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_header(vec![
                Cell::new("Dashboard Build")
                    .fg(Color::Cyan)
                    .add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Value").fg(Color::Cyan),
                Cell::new("%").fg(Color::Cyan),
            ]);

        table.add_row(vec![
            Cell::new("Roster rows"),
            Cell::new(fmt_num(self.roster_rows)),
            Cell::new(""),
        ]);
        table.add_row(vec![
            Cell::new("Records written").fg(Color::Green),
            Cell::new(fmt_num(self.records_written)).fg(Color::Green),
            Cell::new(format!(
                "{:.1}",
                pct(self.records_written, self.roster_rows)
            ))
            .fg(Color::Green),
        ]);
        table.add_row(vec![
            Cell::new("Unresolved"),
            Cell::new(fmt_num(self.unresolved)),
            Cell::new(format!("{:.1}", pct(self.unresolved, self.roster_rows))),
        ]);
        table.add_row(vec![
            Cell::new("H-index failures"),
            Cell::new(fmt_num(self.h_index_failures)),
            Cell::new(format!(
                "{:.1}",
                pct(self.h_index_failures, self.records_written)
            )),
        ]);
        table.add_row(vec![
            Cell::new("Works pages"),
            Cell::new(fmt_num(self.works_pages)),
            Cell::new(""),
        ]);
        table.add_row(vec![
            Cell::new("Output"),
            Cell::new(self.output_path.display().to_string()),
            Cell::new(""),
        ]);
        table.add_row(vec![
            Cell::new("Elapsed"),
            Cell::new(format!("{:.1}s", self.elapsed.as_secs_f64())),
            Cell::new(""),
        ]);

        format!("\n{table}")
    }

    /// Print the table to stderr (TTY mode).
    pub fn print(&self) {
        eprintln!("{}", self.format_table());
    }

    /// Log minimal summary (non-TTY mode).
    pub fn log(&self) {
        log::info!(
            "Build complete: {} records, {} unresolved, {} h-index failures [{:.1}s]",
            fmt_num(self.records_written),
            fmt_num(self.unresolved),
            fmt_num(self.h_index_failures),
            self.elapsed.as_secs_f64()
        );
    }
}

/// Calculate percentage safely.
fn pct(part: usize, total: usize) -> f64 {
    if total > 0 {
        part as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}
