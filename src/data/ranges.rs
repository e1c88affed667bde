//! Derive per-field control constraints from the ingested rows.
//!
//! Ordering follows the training data conventions:
//! - suburb, type, method, seller, and council keep first-appearance order
//! - region, sale year/month/day, and season are sorted

use std::collections::HashSet;

use crate::domain::SaleRow;
use crate::error::AppError;

/// A non-empty distinct-value set backing one selection control.
#[derive(Debug, Clone)]
pub struct Choices<T> {
    values: Vec<T>,
}

impl<T> Choices<T> {
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, idx: usize) -> &T {
        &self.values[idx]
    }

    /// Step a selection index by `delta` with wrap-around, so every reachable
    /// index stays inside the choice set by construction.
    pub fn cycle(&self, idx: usize, delta: i64) -> usize {
        let len = self.values.len() as i64;
        (idx as i64 + delta).rem_euclid(len) as usize
    }
}

/// Inclusive bounds for an integer stepper control.
#[derive(Debug, Clone, Copy)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
    /// Integer-truncated column mean (the default for the rooms control).
    pub mean: i64,
}

impl IntRange {
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }
}

/// Inclusive bounds for a float stepper control.
#[derive(Debug, Clone, Copy)]
pub struct FloatRange {
    pub min: f64,
    pub max: f64,
}

impl FloatRange {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Every control constraint derived from the reference dataset.
#[derive(Debug, Clone)]
pub struct FieldRanges {
    pub suburbs: Choices<String>,
    pub property_types: Choices<String>,
    pub methods: Choices<String>,
    pub sellers: Choices<String>,
    pub council_areas: Choices<String>,
    pub regions: Choices<String>,
    pub seasons: Choices<String>,
    pub sale_years: Choices<i64>,
    pub sale_months: Choices<i64>,
    pub sale_days: Choices<i64>,
    pub rooms: IntRange,
    pub bedrooms: IntRange,
    pub bathrooms: IntRange,
    pub car_spots: IntRange,
    pub year_built: IntRange,
    pub distance: FloatRange,
    pub land_size: FloatRange,
}

/// Derive all control constraints from the validated rows.
pub fn derive_ranges(rows: &[SaleRow]) -> Result<FieldRanges, AppError> {
    if rows.is_empty() {
        return Err(AppError::empty_data(
            "Cannot derive input ranges from an empty dataset.",
        ));
    }

    Ok(FieldRanges {
        suburbs: distinct_first_seen(rows, |r| r.suburb.as_str()),
        property_types: distinct_first_seen(rows, |r| r.property_type.as_str()),
        methods: distinct_first_seen(rows, |r| r.method.as_str()),
        sellers: distinct_first_seen(rows, |r| r.seller.as_str()),
        council_areas: distinct_first_seen(rows, |r| r.council_area.as_str()),
        regions: distinct_sorted_text(rows, |r| r.region_name.as_str()),
        seasons: distinct_sorted_text(rows, |r| r.season.as_str()),
        sale_years: distinct_sorted_int(rows, |r| r.sale_year),
        sale_months: distinct_sorted_int(rows, |r| r.sale_month),
        sale_days: distinct_sorted_int(rows, |r| r.sale_day),
        rooms: int_range(rows, |r| r.rooms),
        bedrooms: int_range(rows, |r| r.bedrooms),
        bathrooms: int_range(rows, |r| r.bathrooms),
        car_spots: int_range(rows, |r| r.car_spots),
        year_built: int_range(rows, |r| r.year_built),
        distance: float_range(rows, |r| r.distance),
        land_size: float_range(rows, |r| r.land_size),
    })
}

fn distinct_first_seen(rows: &[SaleRow], get: impl Fn(&SaleRow) -> &str) -> Choices<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for row in rows {
        let v = get(row);
        if seen.insert(v.to_string()) {
            values.push(v.to_string());
        }
    }
    Choices { values }
}

fn distinct_sorted_text(rows: &[SaleRow], get: impl Fn(&SaleRow) -> &str) -> Choices<String> {
    let mut values: Vec<String> = rows.iter().map(|r| get(r).to_string()).collect();
    values.sort();
    values.dedup();
    Choices { values }
}

fn distinct_sorted_int(rows: &[SaleRow], get: impl Fn(&SaleRow) -> i64) -> Choices<i64> {
    let mut values: Vec<i64> = rows.iter().map(&get).collect();
    values.sort_unstable();
    values.dedup();
    Choices { values }
}

fn int_range(rows: &[SaleRow], get: impl Fn(&SaleRow) -> i64) -> IntRange {
    let mut min = i64::MAX;
    let mut max = i64::MIN;
    let mut sum = 0.0;
    for row in rows {
        let v = get(row);
        min = min.min(v);
        max = max.max(v);
        sum += v as f64;
    }
    let mean = (sum / rows.len() as f64).trunc() as i64;
    IntRange { min, max, mean }
}

fn float_range(rows: &[SaleRow], get: impl Fn(&SaleRow) -> f64) -> FloatRange {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in rows {
        let v = get(row);
        min = min.min(v);
        max = max.max(v);
    }
    FloatRange { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(suburb: &str, rooms: i64, region: &str, year: i64, season: &str) -> SaleRow {
        SaleRow {
            suburb: suburb.to_string(),
            rooms,
            property_type: "h".to_string(),
            method: "S".to_string(),
            seller: "Biggin".to_string(),
            distance: 2.5,
            bedrooms: rooms,
            bathrooms: 1,
            car_spots: 1,
            land_size: 150.0 + rooms as f64,
            year_built: 1970,
            council_area: "Yarra".to_string(),
            region_name: region.to_string(),
            sale_year: year,
            sale_month: 6,
            sale_day: 4,
            season: season.to_string(),
        }
    }

    fn rows() -> Vec<SaleRow> {
        vec![
            row("Richmond", 1, "Western Metropolitan", 2017, "Winter"),
            row("Abbotsford", 2, "Northern Metropolitan", 2016, "Summer"),
            row("Richmond", 3, "Northern Metropolitan", 2017, "Autumn"),
            row("Carlton", 4, "Eastern Metropolitan", 2016, "Winter"),
            row("Abbotsford", 5, "Western Metropolitan", 2018, "Spring"),
        ]
    }

    #[test]
    fn suburbs_keep_first_appearance_order() {
        let ranges = derive_ranges(&rows()).unwrap();
        assert_eq!(ranges.suburbs.values(), ["Richmond", "Abbotsford", "Carlton"]);
    }

    #[test]
    fn regions_seasons_and_years_are_sorted() {
        let ranges = derive_ranges(&rows()).unwrap();
        assert_eq!(
            ranges.regions.values(),
            [
                "Eastern Metropolitan",
                "Northern Metropolitan",
                "Western Metropolitan"
            ]
        );
        assert_eq!(ranges.seasons.values(), ["Autumn", "Spring", "Summer", "Winter"]);
        assert_eq!(ranges.sale_years.values(), [2016, 2017, 2018]);
    }

    #[test]
    fn rooms_range_uses_truncated_mean() {
        // rooms {1,2,3,4,5}: bounds 1/5, mean 3.
        let ranges = derive_ranges(&rows()).unwrap();
        assert_eq!(ranges.rooms.min, 1);
        assert_eq!(ranges.rooms.max, 5);
        assert_eq!(ranges.rooms.mean, 3);
    }

    #[test]
    fn truncated_mean_rounds_toward_zero() {
        let rows = vec![
            row("A", 1, "R", 2016, "Winter"),
            row("B", 2, "R", 2016, "Winter"),
            row("C", 2, "R", 2016, "Winter"),
        ];
        // mean 5/3 ≈ 1.67 truncates to 1
        assert_eq!(derive_ranges(&rows).unwrap().rooms.mean, 1);
    }

    #[test]
    fn float_range_covers_observed_bounds() {
        let ranges = derive_ranges(&rows()).unwrap();
        assert!((ranges.land_size.min - 151.0).abs() < 1e-12);
        assert!((ranges.land_size.max - 155.0).abs() < 1e-12);
        assert!((ranges.land_size.clamp(1e9) - 155.0).abs() < 1e-12);
        assert!((ranges.land_size.clamp(-5.0) - 151.0).abs() < 1e-12);
    }

    #[test]
    fn cycle_wraps_in_both_directions() {
        let ranges = derive_ranges(&rows()).unwrap();
        let suburbs = &ranges.suburbs;
        assert_eq!(suburbs.cycle(0, 1), 1);
        assert_eq!(suburbs.cycle(2, 1), 0);
        assert_eq!(suburbs.cycle(0, -1), 2);
    }

    #[test]
    fn empty_rows_are_rejected() {
        assert_eq!(derive_ranges(&[]).unwrap_err().exit_code(), 3);
    }
}
