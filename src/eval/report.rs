//! Tabular result rendering.

use crate::eval::harness::CaseReport;
use std::fmt::Write as _;

/// Render the report rows as a fixed-width console table.
///
/// One row per case: name, precision, recall. Failed cases get a
/// trailing marker so a 0.00/0.00 row is distinguishable from a model
/// that genuinely extracted nothing useful.
#[must_use]
pub fn render_table(reports: &[CaseReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<30} | {:<10} | {:<10}", "TEST CASE", "PRECISION", "RECALL");
    let _ = writeln!(out, "{}", "-".repeat(60));
    for report in reports {
        let marker = if report.failure.is_some() { "  [failed]" } else { "" };
        let _ = writeln!(
            out,
            "{:<30} | {:<10.2} | {:<10.2}{marker}",
            report.name, report.metrics.precision, report.metrics.recall
        );
    }
    out
}
