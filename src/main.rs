//! vmm - page-replacement simulator command line.
//!
//! `vmm <TRACE_FILE> <FRAMES>` prints the report on stdout. Any failure exits
//! non-zero with a message on stderr and no report.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::info;

use vmsim::common::config::{DEFAULT_CSV_FILE, DEFAULT_REPORT_FILE};
use vmsim::report::{write_csv, write_file_report};
use vmsim::{FrameCount, Report, ReportFormatter, SimulationConfig, Simulator, StepMode, TraceLoader};

/// Simulate FIFO, LRU and Optimal page replacement over a reference trace
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text file of whitespace-separated page numbers
    trace_file: PathBuf,

    /// Number of frames (positive integer)
    #[arg(allow_hyphen_values = true)]
    frames: String,

    /// Print the frame contents after every reference
    #[arg(long)]
    step: bool,

    /// With --step, wait for Enter after every reference
    #[arg(long, requires = "step")]
    pause: bool,

    /// Also write a summary report (file, or directory for report.txt)
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Also write the results as CSV (file, or directory for results.csv)
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Reject a trace with no page references
    #[arg(long)]
    require_references: bool,

    /// Run the algorithms one after another instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Configuration is validated before the trace is touched.
    let frame_count = FrameCount::parse(&args.frames).context("Invalid frame count")?;

    let trace = TraceLoader::new()
        .allow_empty(!args.require_references)
        .load(&args.trace_file)
        .with_context(|| format!("Failed to load trace {}", args.trace_file.display()))?;

    let summary = trace.summary();
    if summary.unique_pages() <= frame_count.get() {
        info!(
            "{} distinct pages fit in {} frames; no evictions will occur",
            summary.unique_pages(),
            frame_count
        );
    }

    let config = SimulationConfig::new(frame_count)
        .with_record_frames(args.step)
        .with_parallel(!args.sequential);
    let results = Simulator::new(&trace, config)
        .run_all()
        .context("Simulation failed")?;
    let report = Report::new(frame_count, trace.len(), results)?;

    let step = match (args.step, args.pause) {
        (true, true) => StepMode::Pause,
        (true, false) => StepMode::Show,
        _ => StepMode::Off,
    };
    let formatter = ReportFormatter::new(step);

    // Report files go first: if one cannot be written, stdout stays empty.
    let mut saved = Vec::new();
    if let Some(path) = &args.report {
        let path = resolve(path, DEFAULT_REPORT_FILE);
        save(&path, |w| write_file_report(&report, &summary, w))?;
        saved.push(path);
    }
    if let Some(path) = &args.csv {
        let path = resolve(path, DEFAULT_CSV_FILE);
        save(&path, |w| write_csv(&report, w))?;
        saved.push(path);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if step == StepMode::Pause {
        formatter.write_interactive(&report, &mut out, &mut io::stdin().lock())?;
    } else {
        // Render fully before printing so a failure leaves stdout empty.
        let mut buffer = Vec::new();
        formatter.write(&report, &mut buffer)?;
        out.write_all(&buffer).context("Failed to write report")?;
    }

    if !saved.is_empty() {
        let names: Vec<String> = saved.iter().map(|p| p.display().to_string()).collect();
        writeln!(out)?;
        writeln!(out, "Report saved to {}", names.join(" and "))?;
    }
    out.flush()?;

    Ok(())
}

/// A directory argument means "the default file inside it".
fn resolve(path: &Path, default_name: &str) -> PathBuf {
    if path.is_dir() {
        path.join(default_name)
    } else {
        path.to_path_buf()
    }
}

fn save<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> vmsim::Result<()>,
{
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
