//! The pre-trained price model artifact.
//!
//! The artifact is the portable representation of an externally trained
//! regression pipeline: an intercept, standardized numeric terms, encoded
//! categorical level effects, and a target transform. This crate never fits
//! anything; it loads the artifact once and exposes exactly one capability —
//! `predict` a single record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::InputRecord;
use crate::error::AppError;

/// A standardized linear term over one numeric column:
/// contributes `weight * (x - mean) / scale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericTerm {
    pub column: String,
    pub mean: f64,
    pub scale: f64,
    pub weight: f64,
}

/// An encoded categorical column: per-level effects plus a fallback for
/// levels unseen during training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalTerm {
    pub column: String,
    pub levels: HashMap<String, f64>,
    pub fallback: f64,
}

/// How the training pipeline transformed the target before regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetTransform {
    #[default]
    Identity,
    /// The linear score is the log of the price; invert with `exp`.
    Log,
}

/// The loaded model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceModel {
    /// Producer tag written by the training pipeline.
    pub tool: String,
    pub intercept: f64,
    pub numeric: Vec<NumericTerm>,
    pub categorical: Vec<CategoricalTerm>,
    #[serde(default)]
    pub target: TargetTransform,
}

impl PriceModel {
    /// Sanity-check the artifact at load time so evaluation errors surface
    /// at startup rather than on the first trigger press.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.intercept.is_finite() {
            return Err(AppError::input("Model artifact has a non-finite intercept."));
        }
        for term in &self.numeric {
            if !(term.mean.is_finite() && term.scale.is_finite() && term.weight.is_finite()) {
                return Err(AppError::input(format!(
                    "Model artifact has non-finite parameters for numeric column `{}`.",
                    term.column
                )));
            }
            if term.scale <= 0.0 {
                return Err(AppError::input(format!(
                    "Model artifact has non-positive scale for numeric column `{}`.",
                    term.column
                )));
            }
        }
        for term in &self.categorical {
            if !term.fallback.is_finite() || term.levels.values().any(|v| !v.is_finite()) {
                return Err(AppError::input(format!(
                    "Model artifact has non-finite effects for categorical column `{}`.",
                    term.column
                )));
            }
        }
        Ok(())
    }

    /// Predict the sale price for one record.
    ///
    /// A column name the input schema cannot resolve is a schema mismatch,
    /// and non-finite outputs are rejected before display.
    pub fn predict(&self, record: &InputRecord) -> Result<f64, AppError> {
        let mut score = self.intercept;

        for term in &self.numeric {
            let x = record.numeric_value(&term.column).ok_or_else(|| {
                AppError::runtime(format!(
                    "Model references unknown numeric column `{}` (schema mismatch).",
                    term.column
                ))
            })?;
            score += term.weight * (x - term.mean) / term.scale;
        }

        for term in &self.categorical {
            let level = record.text_value(&term.column).ok_or_else(|| {
                AppError::runtime(format!(
                    "Model references unknown categorical column `{}` (schema mismatch).",
                    term.column
                ))
            })?;
            score += term.levels.get(level).copied().unwrap_or(term.fallback);
        }

        let price = match self.target {
            TargetTransform::Identity => score,
            TargetTransform::Log => score.exp(),
        };

        if !price.is_finite() {
            return Err(AppError::runtime("Non-finite model prediction."));
        }
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> InputRecord {
        InputRecord {
            suburb: "Abbotsford".to_string(),
            rooms: 3,
            property_type: "h".to_string(),
            method: "S".to_string(),
            seller: "Biggin".to_string(),
            distance: 2.5,
            bedrooms: 2,
            bathrooms: 1,
            car_spots: 1,
            land_size: 200.0,
            year_built: 1970,
            council_area: "Yarra".to_string(),
            region_name: "Northern Metropolitan".to_string(),
            sale_year: 2017,
            sale_month: 3,
            sale_day: 4,
            season: "Autumn".to_string(),
        }
    }

    fn flat_model(intercept: f64) -> PriceModel {
        PriceModel {
            tool: "test".to_string(),
            intercept,
            numeric: Vec::new(),
            categorical: Vec::new(),
            target: TargetTransform::Identity,
        }
    }

    #[test]
    fn predict_sums_intercept_and_terms() {
        let mut model = flat_model(1_000_000.0);
        model.numeric.push(NumericTerm {
            column: "rooms".to_string(),
            mean: 2.0,
            scale: 1.0,
            weight: 50_000.0,
        });
        model.categorical.push(CategoricalTerm {
            column: "type".to_string(),
            levels: HashMap::from([("h".to_string(), 100_000.0)]),
            fallback: 0.0,
        });

        // rooms=3 → +50k; type=h → +100k.
        let price = model.predict(&sample_record()).unwrap();
        assert!((price - 1_150_000.0).abs() < 1e-6);
    }

    #[test]
    fn predict_uses_fallback_for_unseen_level() {
        let mut model = flat_model(500_000.0);
        model.categorical.push(CategoricalTerm {
            column: "suburb".to_string(),
            levels: HashMap::from([("Richmond".to_string(), 80_000.0)]),
            fallback: -10_000.0,
        });

        let price = model.predict(&sample_record()).unwrap();
        assert!((price - 490_000.0).abs() < 1e-6);
    }

    #[test]
    fn predict_applies_log_target_transform() {
        let mut model = flat_model(14.0);
        model.target = TargetTransform::Log;
        let price = model.predict(&sample_record()).unwrap();
        assert!((price - 14.0_f64.exp()).abs() < 1e-6);
    }

    #[test]
    fn predict_rejects_schema_mismatch() {
        let mut model = flat_model(0.0);
        model.numeric.push(NumericTerm {
            column: "garden_size".to_string(),
            mean: 0.0,
            scale: 1.0,
            weight: 1.0,
        });
        let err = model.predict(&sample_record()).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("garden_size"));
    }

    #[test]
    fn predict_rejects_non_finite_output() {
        let mut model = flat_model(1e308);
        model.target = TargetTransform::Log;
        assert!(model.predict(&sample_record()).is_err());
    }

    #[test]
    fn validate_rejects_bad_scale() {
        let mut model = flat_model(0.0);
        model.numeric.push(NumericTerm {
            column: "rooms".to_string(),
            mean: 0.0,
            scale: 0.0,
            weight: 1.0,
        });
        assert_eq!(model.validate().unwrap_err().exit_code(), 2);
    }
}
