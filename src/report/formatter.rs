//! Report Formatter - the stdout report.

use std::io::{BufRead, Write};

use crate::common::config::{REPORT_BANNER, SUMMARY_NAME_WIDTH};
use crate::common::{PageId, Result};
use crate::report::Report;
use crate::simulation::{AccessEvent, Outcome, RunResult};

/// Whether detail lines are followed by the frame contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StepMode {
    /// Detail lines only.
    #[default]
    Off,
    /// Print `Frames: [ .. ]` after every detail line.
    Show,
    /// Like `Show`, then wait for a line on the input before continuing.
    Pause,
}

/// Renders a [`Report`] in the fixed line-oriented layout.
///
/// Output depends only on the report, so identical runs produce identical
/// bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter {
    step: StepMode,
}

impl ReportFormatter {
    pub fn new(step: StepMode) -> Self {
        Self { step }
    }

    /// Write the full report to `out`.
    ///
    /// `StepMode::Pause` behaves like `StepMode::Show` here since there is
    /// no input to wait on; use [`write_interactive`](Self::write_interactive).
    pub fn write<W: Write>(&self, report: &Report, out: &mut W) -> Result<()> {
        self.write_inner(report, out, None)
    }

    /// Write the full report, pausing on `input` after each step when in
    /// `StepMode::Pause`.
    pub fn write_interactive<W: Write, R: BufRead>(
        &self,
        report: &Report,
        out: &mut W,
        input: &mut R,
    ) -> Result<()> {
        self.write_inner(report, out, Some(input as &mut dyn BufRead))
    }

    fn write_inner(
        &self,
        report: &Report,
        out: &mut dyn Write,
        mut input: Option<&mut dyn BufRead>,
    ) -> Result<()> {
        writeln!(out, "{REPORT_BANNER}")?;
        writeln!(out, "Frames: {}", report.frame_count())?;
        writeln!(out, "Total References: {}", report.total_references())?;

        for result in report.results() {
            writeln!(out)?;
            writeln!(out, "--- {} Page Replacement ---", result.algorithm)?;

            for event in &result.events {
                writeln!(out, "{}", detail_line(event))?;
                if self.step == StepMode::Off {
                    continue;
                }
                if let Some(frames) = &event.frames {
                    writeln!(out, "{}", frames_line(frames))?;
                }
                if let (StepMode::Pause, Some(input)) = (self.step, input.as_mut()) {
                    write!(out, "Press Enter to continue...")?;
                    out.flush()?;
                    let mut line = String::new();
                    input.read_line(&mut line)?;
                }
            }
        }

        writeln!(out)?;
        writeln!(out, "Algorithm | Page Faults | Hits | Hit Ratio")?;
        writeln!(out, "{}", "-".repeat(44))?;
        for result in report.results() {
            writeln!(out, "{}", summary_line(result))?;
        }
        out.flush()?;
        Ok(())
    }
}

/// `Page 4 -> FAULT (Replaced 1)` style line for one reference.
fn detail_line(event: &AccessEvent) -> String {
    match &event.outcome {
        Outcome::Hit => format!("Page {} -> HIT", event.page),
        Outcome::Fault { evicted: None } => format!("Page {} -> FAULT", event.page),
        Outcome::Fault {
            evicted: Some(victim),
        } => format!("Page {} -> FAULT (Replaced {})", event.page, victim),
    }
}

/// Resident pages in frame order; empty frames are skipped.
fn frames_line(frames: &[Option<PageId>]) -> String {
    let mut line = String::from("Frames: [ ");
    for page in frames.iter().flatten() {
        line.push_str(&page.to_string());
        line.push(' ');
    }
    line.push(']');
    line
}

/// The summary line of one run: `FIFO      | 9 | 3 | 0.2500`.
pub fn summary_line(result: &RunResult) -> String {
    format!(
        "{:<width$}| {} | {} | {}",
        result.algorithm.name(),
        result.faults(),
        result.hits(),
        result.stats.hit_ratio_text(),
        width = SUMMARY_NAME_WIDTH
    )
}
