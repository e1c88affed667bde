//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - parsed straight out of the reference CSV
//! - assembled into a single prediction record
//! - rendered in the TUI without conversion layers

/// One of the 17 input fields, in the model's training column order.
///
/// The declaration order here is load-bearing: `Field::ALL` drives both the
/// on-screen control order and the column order of assembled records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Suburb,
    Rooms,
    PropertyType,
    Method,
    Seller,
    Distance,
    Bedrooms,
    Bathrooms,
    CarSpots,
    LandSize,
    YearBuilt,
    CouncilArea,
    RegionName,
    SaleYear,
    SaleMonth,
    SaleDay,
    Season,
}

impl Field {
    /// All fields in training column order.
    pub const ALL: [Field; 17] = [
        Field::Suburb,
        Field::Rooms,
        Field::PropertyType,
        Field::Method,
        Field::Seller,
        Field::Distance,
        Field::Bedrooms,
        Field::Bathrooms,
        Field::CarSpots,
        Field::LandSize,
        Field::YearBuilt,
        Field::CouncilArea,
        Field::RegionName,
        Field::SaleYear,
        Field::SaleMonth,
        Field::SaleDay,
        Field::Season,
    ];

    /// CSV header / model column name.
    pub fn column(self) -> &'static str {
        match self {
            Field::Suburb => "suburb",
            Field::Rooms => "rooms",
            Field::PropertyType => "type",
            Field::Method => "method",
            Field::Seller => "sellerg",
            Field::Distance => "distance",
            Field::Bedrooms => "bedroom2",
            Field::Bathrooms => "bathroom",
            Field::CarSpots => "car",
            Field::LandSize => "landsize",
            Field::YearBuilt => "yearbuilt",
            Field::CouncilArea => "councilarea",
            Field::RegionName => "regionname",
            Field::SaleYear => "year",
            Field::SaleMonth => "month",
            Field::SaleDay => "day",
            Field::Season => "season",
        }
    }

    /// Human-readable label for the form control.
    pub fn label(self) -> &'static str {
        match self {
            Field::Suburb => "Suburb",
            Field::Rooms => "Rooms",
            Field::PropertyType => "Property type",
            Field::Method => "Sale method",
            Field::Seller => "Seller (agent)",
            Field::Distance => "Distance from CBD (km)",
            Field::Bedrooms => "Bedrooms",
            Field::Bathrooms => "Bathrooms",
            Field::CarSpots => "Car spots",
            Field::LandSize => "Land size (m²)",
            Field::YearBuilt => "Year built",
            Field::CouncilArea => "Council area",
            Field::RegionName => "Region",
            Field::SaleYear => "Sale year",
            Field::SaleMonth => "Sale month",
            Field::SaleDay => "Sale day",
            Field::Season => "Season",
        }
    }
}

/// A typed control value as it appears in an assembled record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
        }
    }
}

/// A validated row of the reference dataset.
///
/// Row-level validation happens in `io::ingest`; by the time a `SaleRow`
/// exists, every field parsed cleanly.
#[derive(Debug, Clone)]
pub struct SaleRow {
    pub suburb: String,
    pub rooms: i64,
    pub property_type: String,
    pub method: String,
    pub seller: String,
    pub distance: f64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub car_spots: i64,
    pub land_size: f64,
    pub year_built: i64,
    pub council_area: String,
    pub region_name: String,
    pub sale_year: i64,
    pub sale_month: i64,
    pub sale_day: i64,
    pub season: String,
}

/// The fixed-schema record assembled from current control values for one
/// prediction request. Built fresh per trigger press; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRecord {
    pub suburb: String,
    pub rooms: i64,
    pub property_type: String,
    pub method: String,
    pub seller: String,
    pub distance: f64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub car_spots: i64,
    pub land_size: f64,
    pub year_built: i64,
    pub council_area: String,
    pub region_name: String,
    pub sale_year: i64,
    pub sale_month: i64,
    pub sale_day: i64,
    pub season: String,
}

impl InputRecord {
    /// Column-ordered `(name, value)` pairs matching the training schema.
    pub fn columns(&self) -> [(&'static str, FieldValue); 17] {
        [
            ("suburb", FieldValue::Text(self.suburb.clone())),
            ("rooms", FieldValue::Int(self.rooms)),
            ("type", FieldValue::Text(self.property_type.clone())),
            ("method", FieldValue::Text(self.method.clone())),
            ("sellerg", FieldValue::Text(self.seller.clone())),
            ("distance", FieldValue::Float(self.distance)),
            ("bedroom2", FieldValue::Int(self.bedrooms)),
            ("bathroom", FieldValue::Int(self.bathrooms)),
            ("car", FieldValue::Int(self.car_spots)),
            ("landsize", FieldValue::Float(self.land_size)),
            ("yearbuilt", FieldValue::Int(self.year_built)),
            ("councilarea", FieldValue::Text(self.council_area.clone())),
            ("regionname", FieldValue::Text(self.region_name.clone())),
            ("year", FieldValue::Int(self.sale_year)),
            ("month", FieldValue::Int(self.sale_month)),
            ("day", FieldValue::Int(self.sale_day)),
            ("season", FieldValue::Text(self.season.clone())),
        ]
    }

    /// Numeric view of a column (integers widen to f64). `None` for text
    /// columns and unknown names.
    pub fn numeric_value(&self, column: &str) -> Option<f64> {
        match column {
            "rooms" => Some(self.rooms as f64),
            "distance" => Some(self.distance),
            "bedroom2" => Some(self.bedrooms as f64),
            "bathroom" => Some(self.bathrooms as f64),
            "car" => Some(self.car_spots as f64),
            "landsize" => Some(self.land_size),
            "yearbuilt" => Some(self.year_built as f64),
            "year" => Some(self.sale_year as f64),
            "month" => Some(self.sale_month as f64),
            "day" => Some(self.sale_day as f64),
            _ => None,
        }
    }

    /// Text view of a column. `None` for numeric columns and unknown names.
    pub fn text_value(&self, column: &str) -> Option<&str> {
        match column {
            "suburb" => Some(&self.suburb),
            "type" => Some(&self.property_type),
            "method" => Some(&self.method),
            "sellerg" => Some(&self.seller),
            "councilarea" => Some(&self.council_area),
            "regionname" => Some(&self.region_name),
            "season" => Some(&self.season),
            _ => None,
        }
    }
}
