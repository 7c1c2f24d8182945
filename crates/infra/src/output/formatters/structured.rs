use std::io::Write;

use anhinga_domain::{Report, ReportRow};
use anhinga_shared_kernel::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonVolume<'a> {
    volume_id: &'a str,
    volume_type: &'a str,
    size: u64,
    state: &'a str,
    cost: f64,
}

impl<'a> From<ReportRow<'a>> for JsonVolume<'a> {
    fn from(row: ReportRow<'a>) -> Self {
        Self {
            volume_id: row.volume_id,
            volume_type: row.volume_type,
            size: row.size.value(),
            state: row.state,
            cost: row.cost.rounded(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    volumes: Vec<JsonVolume<'a>>,
    total_cost: f64,
}

/// Pretty-printed `{"volumes": [...], "totalCost": ..}`; costs are rounded
/// to cents, the total is rounded from the exact sum.
pub fn output_json(report: &Report, out: &mut impl Write) -> Result<()> {
    let doc = JsonReport {
        volumes: report.rows().map(JsonVolume::from).collect(),
        total_cost: report.total().rounded(),
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)?;
    Ok(())
}
