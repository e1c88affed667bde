//! Read the model artifact JSON.
//!
//! The artifact is produced by the external training pipeline; this crate
//! only loads and validates it. The schema is defined by `model::PriceModel`.

use std::fs::File;
use std::path::Path;

use crate::error::AppError;
use crate::model::PriceModel;

/// Read and validate a model artifact JSON file.
pub fn read_model_json(path: &Path) -> Result<PriceModel, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::input(format!(
            "Failed to open model artifact '{}': {e}",
            path.display()
        ))
    })?;
    let model: PriceModel = serde_json::from_reader(file)
        .map_err(|e| AppError::input(format!("Invalid model artifact JSON: {e}")))?;
    model.validate()?;
    Ok(model)
}
