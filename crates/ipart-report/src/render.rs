use std::fmt;

use crate::report::PartitionReport;

/// Renders the full report the way the interactive shell prints it.
pub fn render_text(report: &PartitionReport) -> String {
    TextReport(report).to_string()
}

struct TextReport<'a>(&'a PartitionReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(
            f,
            "All partitions of {} into natural addends (order ignored):",
            report.target
        )?;
        for partition in &report.partitions {
            writeln!(f, "{partition}")?;
        }
        writeln!(f, "Total: {}", report.total)?;
        writeln!(f)?;

        writeln!(
            f,
            "Partitions of {} into EXACTLY {} natural addends:",
            report.target, report.addend_count
        )?;
        if report.filtered_is_empty() {
            writeln!(f, "None.")?;
        } else {
            for partition in &report.filtered {
                writeln!(f, "{partition}")?;
            }
        }
        writeln!(
            f,
            "Total (k={}): {}",
            report.addend_count, report.filtered_total
        )
    }
}
