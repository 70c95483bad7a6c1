//! Output Rendering
//!
//! Run reports go to stdout, either as text or as a JSON document. Logs
//! never go here.

use std::io::{self, Write};

use crate::application::DeployReport;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Render a finished run to `out`
pub fn render_report<W: Write>(
    out: &mut W,
    report: &DeployReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(out, report),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)
        }
    }
}

fn render_text<W: Write>(out: &mut W, report: &DeployReport) -> io::Result<()> {
    if report.dry_run {
        writeln!(out, "Dry run ({} topology), planned engine runs:", report.topology)?;
        for (index, command) in report.commands.iter().enumerate() {
            writeln!(out, "  {}. {}", index + 1, command)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", summary_line(report))?;
    for path in &report.written {
        writeln!(out, "  -> {}", path.display())?;
    }
    Ok(())
}

/// One-line summary of a successful run
pub fn summary_line(report: &DeployReport) -> String {
    let verb = if report.dry_run { "Planned" } else { "Deployed" };
    let uploaded = report
        .transfer
        .as_ref()
        .map(|transfer| transfer.uploaded.len())
        .unwrap_or(0);
    format!(
        "{} {} stack: {} files generated, {} packages uploaded, {} engine runs",
        verb,
        report.topology,
        report.written.len(),
        uploaded,
        if report.dry_run {
            report.commands.len()
        } else {
            report.engine_runs.len()
        }
    )
}
