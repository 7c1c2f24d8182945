// src/app.rs
use std::io::Write;

use anhinga_domain::{PricingModel, Report};
use anhinga_infra::{DocumentVolumeSource, OutputWriter, load_pricing, render};
use anhinga_shared_kernel::Result;
use anhinga_usecase::GenerateReport;

use crate::config::Config;

/// Acquire, price and render according to `config`.
///
/// # Errors
///
/// Any acquisition, validation, pricing-file or write failure. The report is
/// fully built before the output is opened, so a failed acquisition never
/// truncates an existing `--output` file.
pub fn run(config: &Config) -> Result<()> {
    let report = build_report(config)?;
    let mut out = OutputWriter::create(config.output.as_deref())?;
    emit(&report, config, &mut out)
}

pub fn build_report(config: &Config) -> Result<Report> {
    let pricing = match &config.pricing {
        Some(path) => load_pricing(path)?,
        None => PricingModel::default(),
    };
    if config.region.is_empty() {
        tracing::warn!("no region given; pricing with the non-baseline multiplier");
    }
    let source = DocumentVolumeSource::new(config.input.clone());
    GenerateReport::new(&source, &pricing).run(&config.region)
}

pub fn emit(report: &Report, config: &Config, out: &mut impl Write) -> Result<()> {
    render(report, config.format, out)?;
    tracing::info!(format = %config.format, volumes = report.len(), total = %report.total(), "report written");
    Ok(())
}
