pub mod formatters;
mod utils;
mod writer;

use std::io::Write;

use anhinga_domain::{OutputFormat, Report};
use anhinga_shared_kernel::Result;
use formatters::{output_csv, output_json, output_table};

pub use writer::OutputWriter;

/// Render `report` in `format` to `out`.
///
/// Stops at the first write the sink rejects and returns it as a write error.
pub fn render(report: &Report, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    tracing::debug!(%format, volumes = report.len(), "rendering report");
    match format {
        OutputFormat::Table => output_table(report, out)?,
        OutputFormat::Csv => output_csv(report, out)?,
        OutputFormat::Json => output_json(report, out)?,
    }
    out.flush()?;
    Ok(())
}

/// Like [`render`], for a format given by name.
///
/// An unknown name fails before anything is written to `out`.
pub fn render_named(report: &Report, format: &str, out: &mut impl Write) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    render(report, format, out)
}
