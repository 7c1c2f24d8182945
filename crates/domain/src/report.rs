use std::borrow::Cow;

use anhinga_shared_kernel::value_objects::{MonthlyCost, SizeGiB};

use crate::{model::PricedVolume, pricing::total_cost};

/// Column titles shared by every output format, in display order.
pub const COLUMNS: [&str; 5] = ["Volume ID", "Type", "Size (GB)", "State", "Monthly Cost ($)"];

/// Label carried by the total row of row-oriented formats.
pub const TOTAL_LABEL: &str = "Total";

/// Priced volumes in input order plus their exact total.
///
/// The total is computed once, here, from unrounded costs; renderers only
/// ever read it.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    volumes: Vec<PricedVolume>,
    total: MonthlyCost,
}

impl Report {
    pub fn new(volumes: Vec<PricedVolume>) -> Self {
        let total = total_cost(&volumes);
        Self { volumes, total }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn volumes(&self) -> &[PricedVolume] {
        &self.volumes
    }

    pub fn total(&self) -> MonthlyCost {
        self.total
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// One display row per volume, in input order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = ReportRow<'_>> {
        self.volumes.iter().map(ReportRow::from)
    }

    /// Cells of the total row: label first, total last, empty in between.
    pub fn total_cells(&self) -> [String; 5] {
        [TOTAL_LABEL.to_string(), String::new(), String::new(), String::new(), self.total.display()]
    }
}

impl FromIterator<PricedVolume> for Report {
    fn from_iter<I: IntoIterator<Item = PricedVolume>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Borrowed view of one volume as the renderers see it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRow<'a> {
    pub volume_id: &'a str,
    pub volume_type: &'a str,
    pub size: SizeGiB,
    pub state: &'a str,
    pub cost: MonthlyCost,
}

impl<'a> ReportRow<'a> {
    /// Display text of each column, matching [`COLUMNS`].
    pub fn cells(&self) -> [Cow<'a, str>; 5] {
        [
            Cow::Borrowed(self.volume_id),
            Cow::Borrowed(self.volume_type),
            Cow::Owned(self.size.to_string()),
            Cow::Borrowed(self.state),
            Cow::Owned(self.cost.display()),
        ]
    }
}

impl<'a> From<&'a PricedVolume> for ReportRow<'a> {
    fn from(volume: &'a PricedVolume) -> Self {
        Self {
            volume_id: volume.id().as_str(),
            volume_type: volume.kind().as_str(),
            size: volume.size(),
            state: volume.state(),
            cost: volume.monthly_cost,
        }
    }
}
