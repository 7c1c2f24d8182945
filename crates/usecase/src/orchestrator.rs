use anhinga_domain::{PricingModel, Report, VolumeRecord, model::ensure_unique_ids};
use anhinga_ports::{VolumeDto, VolumeSource};
use anhinga_shared_kernel::{DomainResult, ErrorContext, Result};

/// Acquires volumes from a source and turns them into a priced [`Report`].
pub struct GenerateReport<'a> {
    source: &'a dyn VolumeSource,
    pricing: &'a PricingModel,
}

impl<'a> GenerateReport<'a> {
    pub fn new(source: &'a dyn VolumeSource, pricing: &'a PricingModel) -> Self {
        Self { source, pricing }
    }

    /// # Errors
    /// Propagates source failures and rejects records that fail validation
    /// (blank or duplicate id, negative size).
    pub fn run(&self, region: &str) -> Result<Report> {
        let dtos = self.source.fetch().context("failed to acquire volumes")?;
        let records = to_domain_records(dtos)?;
        tracing::info!(volumes = records.len(), region, "pricing volumes");

        let priced = self.pricing.price_all(records, region);
        for volume in &priced {
            tracing::debug!(volume = %volume.id(), kind = %volume.kind(), cost = volume.monthly_cost.value(), "priced");
        }
        Ok(Report::new(priced))
    }
}

fn to_domain_records(dtos: Vec<VolumeDto>) -> DomainResult<Vec<VolumeRecord>> {
    let records = dtos.into_iter().map(dto_to_domain_record).collect::<DomainResult<Vec<_>>>()?;
    ensure_unique_ids(&records)?;
    Ok(records)
}

fn dto_to_domain_record(dto: VolumeDto) -> DomainResult<VolumeRecord> {
    VolumeRecord::try_from_raw(&dto.volume_id, &dto.volume_type, dto.size, &dto.state)
}
