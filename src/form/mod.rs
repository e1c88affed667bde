//! Pure form state for the 17 input controls.
//!
//! Keeping this out of the TUI means the behavior that matters (defaults,
//! clamped adjustment, wrap-around selection, fixed-order record assembly)
//! is testable without a terminal. The TUI is rendering and key dispatch
//! only.
//!
//! Out-of-range entry is prevented by construction: numeric steppers clamp
//! to the observed dataset bounds and selections cycle inside the derived
//! choice sets, so no post-hoc validation exists anywhere.

use crate::data::FieldRanges;
use crate::domain::{Field, InputRecord};

/// Step sizes for the float steppers (the integer steppers step by 1).
const DISTANCE_STEP: f64 = 0.1;
const LAND_SIZE_STEP: f64 = 10.0;

/// Current value of every control.
///
/// Selection controls store an index into the corresponding choice set;
/// numeric controls store the value itself.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub suburb: usize,
    pub rooms: i64,
    pub property_type: usize,
    pub method: usize,
    pub seller: usize,
    pub distance: f64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub car_spots: i64,
    pub land_size: f64,
    pub year_built: i64,
    pub council_area: usize,
    pub region_name: usize,
    pub sale_year: usize,
    pub sale_month: usize,
    pub sale_day: usize,
    pub season: usize,
}

impl FormState {
    /// Control defaults: first choice for selections, the truncated column
    /// mean for rooms, and the observed minimum for every other numeric
    /// stepper.
    pub fn defaults(ranges: &FieldRanges) -> Self {
        Self {
            suburb: 0,
            rooms: ranges.rooms.clamp(ranges.rooms.mean),
            property_type: 0,
            method: 0,
            seller: 0,
            distance: ranges.distance.min,
            bedrooms: ranges.bedrooms.min,
            bathrooms: ranges.bathrooms.min,
            car_spots: ranges.car_spots.min,
            land_size: ranges.land_size.min,
            year_built: ranges.year_built.min,
            council_area: 0,
            region_name: 0,
            sale_year: 0,
            sale_month: 0,
            sale_day: 0,
            season: 0,
        }
    }

    /// Step one control by `delta` (±1 from the arrow keys).
    pub fn adjust(&mut self, ranges: &FieldRanges, field: Field, delta: i64) {
        match field {
            Field::Suburb => self.suburb = ranges.suburbs.cycle(self.suburb, delta),
            Field::Rooms => self.rooms = ranges.rooms.clamp(self.rooms + delta),
            Field::PropertyType => {
                self.property_type = ranges.property_types.cycle(self.property_type, delta)
            }
            Field::Method => self.method = ranges.methods.cycle(self.method, delta),
            Field::Seller => self.seller = ranges.sellers.cycle(self.seller, delta),
            Field::Distance => {
                self.distance = ranges
                    .distance
                    .clamp(self.distance + delta as f64 * DISTANCE_STEP)
            }
            Field::Bedrooms => self.bedrooms = ranges.bedrooms.clamp(self.bedrooms + delta),
            Field::Bathrooms => self.bathrooms = ranges.bathrooms.clamp(self.bathrooms + delta),
            Field::CarSpots => self.car_spots = ranges.car_spots.clamp(self.car_spots + delta),
            Field::LandSize => {
                self.land_size = ranges
                    .land_size
                    .clamp(self.land_size + delta as f64 * LAND_SIZE_STEP)
            }
            Field::YearBuilt => self.year_built = ranges.year_built.clamp(self.year_built + delta),
            Field::CouncilArea => {
                self.council_area = ranges.council_areas.cycle(self.council_area, delta)
            }
            Field::RegionName => self.region_name = ranges.regions.cycle(self.region_name, delta),
            Field::SaleYear => self.sale_year = ranges.sale_years.cycle(self.sale_year, delta),
            Field::SaleMonth => self.sale_month = ranges.sale_months.cycle(self.sale_month, delta),
            Field::SaleDay => self.sale_day = ranges.sale_days.cycle(self.sale_day, delta),
            Field::Season => self.season = ranges.seasons.cycle(self.season, delta),
        }
    }

    /// Display string for one control's current value.
    pub fn value_label(&self, ranges: &FieldRanges, field: Field) -> String {
        match field {
            Field::Suburb => ranges.suburbs.get(self.suburb).clone(),
            Field::Rooms => self.rooms.to_string(),
            Field::PropertyType => ranges.property_types.get(self.property_type).clone(),
            Field::Method => ranges.methods.get(self.method).clone(),
            Field::Seller => ranges.sellers.get(self.seller).clone(),
            Field::Distance => format!("{:.1}", self.distance),
            Field::Bedrooms => self.bedrooms.to_string(),
            Field::Bathrooms => self.bathrooms.to_string(),
            Field::CarSpots => self.car_spots.to_string(),
            Field::LandSize => format!("{:.1}", self.land_size),
            Field::YearBuilt => self.year_built.to_string(),
            Field::CouncilArea => ranges.council_areas.get(self.council_area).clone(),
            Field::RegionName => ranges.regions.get(self.region_name).clone(),
            Field::SaleYear => ranges.sale_years.get(self.sale_year).to_string(),
            Field::SaleMonth => ranges.sale_months.get(self.sale_month).to_string(),
            Field::SaleDay => ranges.sale_days.get(self.sale_day).to_string(),
            Field::Season => ranges.seasons.get(self.season).clone(),
        }
    }

    /// Assemble the fixed-schema record from current control values.
    pub fn assemble(&self, ranges: &FieldRanges) -> InputRecord {
        InputRecord {
            suburb: ranges.suburbs.get(self.suburb).clone(),
            rooms: self.rooms,
            property_type: ranges.property_types.get(self.property_type).clone(),
            method: ranges.methods.get(self.method).clone(),
            seller: ranges.sellers.get(self.seller).clone(),
            distance: self.distance,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            car_spots: self.car_spots,
            land_size: self.land_size,
            year_built: self.year_built,
            council_area: ranges.council_areas.get(self.council_area).clone(),
            region_name: ranges.regions.get(self.region_name).clone(),
            sale_year: *ranges.sale_years.get(self.sale_year),
            sale_month: *ranges.sale_months.get(self.sale_month),
            sale_day: *ranges.sale_days.get(self.sale_day),
            season: ranges.seasons.get(self.season).clone(),
        }
    }
}
