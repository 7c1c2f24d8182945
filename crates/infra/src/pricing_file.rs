use std::path::Path;

use anhinga_domain::PricingModel;
use anhinga_shared_kernel::{ErrorContext, Result};

use crate::{
    document::{self, Syntax},
    persistence::FileReader,
};

/// Load and validate a pricing model from a JSON or YAML file.
///
/// # Errors
/// Fails when the file cannot be read or parsed, or when a rate or
/// multiplier in it is unusable.
pub fn load_pricing(path: &Path) -> Result<PricingModel> {
    let text = FileReader::read_to_string(path)?;
    let model: PricingModel = document::parse(&text, Syntax::for_path(path))?;
    model.validate().with_context(|| format!("pricing file '{}'", path.display()))?;
    tracing::info!(
        path = %path.display(),
        kinds = model.kinds.rates.len(),
        baseline = %model.regions.baseline,
        "loaded pricing table"
    );
    Ok(model)
}
