use std::io::Write;

use anhinga_domain::{COLUMNS, Report};
use anhinga_shared_kernel::Result;

use crate::output::utils::{Align, display_width, pad, single_line};

const ALIGN: [Align; 5] = [Align::Left, Align::Left, Align::Right, Align::Left, Align::Right];

/// Bordered table. The total sits in its own footer section below an `=`
/// rule, so it cannot be mistaken for a volume row.
pub fn output_table(report: &Report, out: &mut impl Write) -> Result<()> {
    let body: Vec<[String; 5]> =
        report.rows().map(|row| row.cells().map(|cell| single_line(&cell).into_owned())).collect();
    let footer = report.total_cells();
    let widths = column_widths(body.iter().chain([&footer]));

    write_rule(&widths, '-', out)?;
    write_row(&COLUMNS, &widths, out)?;
    write_rule(&widths, '-', out)?;
    for cells in &body {
        write_row(cells, &widths, out)?;
    }
    write_rule(&widths, '=', out)?;
    write_row(&footer, &widths, out)?;
    write_rule(&widths, '-', out)?;
    Ok(())
}

fn column_widths<'a>(rows: impl Iterator<Item = &'a [String; 5]>) -> [usize; 5] {
    let mut widths = COLUMNS.map(display_width);
    for cells in rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(display_width(cell));
        }
    }
    widths
}

fn write_rule(widths: &[usize; 5], fill: char, out: &mut impl Write) -> Result<()> {
    let mut line = String::from("+");
    for width in widths {
        line.extend(std::iter::repeat_n(fill, width + 2));
        line.push('+');
    }
    writeln!(out, "{line}")?;
    Ok(())
}

fn write_row<S: AsRef<str>>(cells: &[S; 5], widths: &[usize; 5], out: &mut impl Write) -> Result<()> {
    let mut line = String::from("|");
    for ((cell, width), align) in cells.iter().zip(widths).zip(ALIGN) {
        line.push(' ');
        line.push_str(&pad(cell.as_ref(), *width, align));
        line.push_str(" |");
    }
    writeln!(out, "{line}")?;
    Ok(())
}
