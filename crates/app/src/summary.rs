//! Console summary of a run.

use std::fmt::{self, Write};

use cadwatch_domain::{CaseStatus, RunReport};

/// Renders one line per non-passing case followed by the totals.
#[must_use]
pub fn render_summary(report: &RunReport) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    if write_summary(&mut out, report).is_err() {
        out.clear();
    }
    out
}

#[allow(clippy::cast_precision_loss)]
fn write_summary(out: &mut impl Write, report: &RunReport) -> fmt::Result {
    for outcome in report
        .outcomes
        .iter()
        .filter(|o| o.status != CaseStatus::Passed)
    {
        writeln!(
            out,
            "{:<7} {} - {}",
            outcome.status.label(),
            outcome.qualified_name(),
            outcome.message.as_deref().unwrap_or("")
        )?;
    }
    writeln!(
        out,
        "{} passed, {} failed, {} skipped, {} errors in {:.2}s ({:.1}% pass rate)",
        report.passed,
        report.failed,
        report.skipped,
        report.errored,
        report.duration_ms as f64 / 1000.0,
        report.pass_rate()
    )
}
