//! Report files: a human-readable summary and a CSV table.

use std::io::Write;

use crate::common::config::FILE_REPORT_BANNER;
use crate::common::Result;
use crate::report::Report;
use crate::trace::TraceSummary;

/// Write the summary report: trace statistics, per-page reference frequency
/// and a fixed-width performance table.
pub fn write_file_report<W: Write>(
    report: &Report,
    summary: &TraceSummary,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{FILE_REPORT_BANNER}")?;
    writeln!(out)?;
    writeln!(out, "Total References: {}", summary.total_references)?;
    writeln!(out, "Unique Pages: {}", summary.unique_pages())?;
    writeln!(out, "Frames Allocated: {}", report.frame_count())?;
    writeln!(out)?;

    writeln!(out, "Page Reference Frequency:")?;
    for (page, count) in &summary.frequency {
        writeln!(out, "  Page {page} -> {count} times")?;
    }
    writeln!(out)?;

    writeln!(out, "--- Performance Summary ---")?;
    let header = format!(
        "{:<10}{:<15}{:<10}{:<10}",
        "Algorithm", "Page Faults", "Hits", "Hit Ratio"
    );
    writeln!(out, "{}", header.trim_end())?;
    writeln!(out, "{}", "-".repeat(45))?;
    for result in report.results() {
        let row = format!(
            "{:<10}{:<15}{:<10}{:<10}",
            result.algorithm.name(),
            result.faults(),
            result.hits(),
            result.stats.hit_ratio_text()
        );
        writeln!(out, "{}", row.trim_end())?;
    }
    out.flush()?;
    Ok(())
}

/// Write one CSV row per algorithm under an
/// `Algorithm,PageFaults,Hits,HitRatio` header.
pub fn write_csv<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    writeln!(out, "Algorithm,PageFaults,Hits,HitRatio")?;
    for result in report.results() {
        writeln!(
            out,
            "{},{},{},{}",
            result.algorithm.name(),
            result.faults(),
            result.hits(),
            result.stats.hit_ratio_text()
        )?;
    }
    out.flush()?;
    Ok(())
}
