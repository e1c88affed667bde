//! The predict step shared by the TUI and tests.
//!
//! Keeping this in one place pins down the trigger contract: the record is
//! assembled from control state and the model is invoked exactly once per
//! press. No retries, caching, or batching.

use crate::domain::InputRecord;
use crate::error::AppError;
use crate::model::PriceModel;

/// Result of a single trigger press.
#[derive(Debug, Clone)]
pub struct PredictOutput {
    /// The record the model actually saw.
    pub record: InputRecord,
    pub price: f64,
    /// The price formatted for display (`$1,234,567.80`).
    pub display: String,
}

/// Invoke the model once on the given record and format the result.
pub fn run_predict(model: &PriceModel, record: InputRecord) -> Result<PredictOutput, AppError> {
    let price = model.predict(&record)?;
    let display = crate::report::format_currency(price);
    Ok(PredictOutput {
        record,
        price,
        display,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PriceModel, TargetTransform};

    fn record() -> InputRecord {
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

    #[test]
    fn predict_output_carries_record_price_and_display() {
        let model = PriceModel {
            tool: "test".to_string(),
            intercept: 1234567.8,
            numeric: Vec::new(),
            categorical: Vec::new(),
            target: TargetTransform::Identity,
        };

        let out = run_predict(&model, record()).unwrap();
        assert!((out.price - 1234567.8).abs() < 1e-9);
        assert_eq!(out.display, "$1,234,567.80");
        assert_eq!(out.record, record());
    }

    #[test]
    fn predict_failures_propagate() {
        let model = PriceModel {
            tool: "test".to_string(),
            intercept: 1e308,
            numeric: Vec::new(),
            categorical: Vec::new(),
            target: TargetTransform::Log,
        };
        assert!(run_predict(&model, record()).is_err());
    }
}
