use std::io::Write;

use anhinga_domain::{COLUMNS, Report};
use anhinga_shared_kernel::Result;

use crate::output::utils::escape_field;

/// Header, one record per volume, then `Total,,,,<total>`.
pub fn output_csv(report: &Report, out: &mut impl Write) -> Result<()> {
    write_record(COLUMNS, out)?;
    for row in report.rows() {
        write_record(row.cells(), out)?;
    }
    write_record(report.total_cells(), out)?;
    Ok(())
}

fn write_record<S: AsRef<str>>(fields: [S; 5], out: &mut impl Write) -> Result<()> {
    let line = fields.iter().map(|f| escape_field(f.as_ref())).collect::<Vec<_>>().join(",");
    writeln!(out, "{line}")?;
    Ok(())
}
