//! CSV ingest and normalization for the reference dataset.
//!
//! This module turns the historical-sales CSV into validated `SaleRow`s that
//! are safe to derive control ranges from.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + exit code 2)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Deterministic behavior** (the dataset is read once and never mutated)
//! - **Separation of concerns**: no range derivation here

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{Field, SaleRow};
use crate::error::AppError;

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: validated rows + row errors + counters.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub rows: Vec<SaleRow>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}

/// Load and validate the reference dataset CSV.
pub fn load_sale_rows(path: &Path) -> Result<IngestedData, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::input(format!("Failed to open dataset CSV '{}': {e}", path.display()))
    })?;
    ingest_reader(file)
}

/// Ingest from any reader (used directly by tests).
pub fn ingest_reader<R: std::io::Read>(reader: R) -> Result<IngestedData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(&header_map)?;

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, &header_map) {
            Ok(row) => rows.push(row),
            Err(e) => row_errors.push(RowError { line, message: e }),
        }
    }

    let rows_used = rows.len();
    if rows_used == 0 {
        return Err(AppError::empty_data(
            "No valid rows remain after validation; cannot derive input ranges.",
        ));
    }

    Ok(IngestedData {
        rows,
        row_errors,
        rows_read,
        rows_used,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header (e.g. "﻿suburb"). If we don't strip it, schema validation
    // will incorrectly report missing columns.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>) -> Result<(), AppError> {
    for field in Field::ALL {
        let column = field.column();
        if !header_map.contains_key(column) {
            return Err(AppError::input(format!(
                "Missing required column: `{column}`"
            )));
        }
    }
    Ok(())
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<SaleRow, String> {
    Ok(SaleRow {
        suburb: get_required(record, header_map, "suburb")?.to_string(),
        rooms: parse_int_like(get_required(record, header_map, "rooms")?, "rooms")?,
        property_type: get_required(record, header_map, "type")?.to_string(),
        method: get_required(record, header_map, "method")?.to_string(),
        seller: get_required(record, header_map, "sellerg")?.to_string(),
        distance: parse_f64(get_required(record, header_map, "distance")?, "distance")?,
        bedrooms: parse_int_like(get_required(record, header_map, "bedroom2")?, "bedroom2")?,
        bathrooms: parse_int_like(get_required(record, header_map, "bathroom")?, "bathroom")?,
        car_spots: parse_int_like(get_required(record, header_map, "car")?, "car")?,
        land_size: parse_f64(get_required(record, header_map, "landsize")?, "landsize")?,
        year_built: parse_int_like(get_required(record, header_map, "yearbuilt")?, "yearbuilt")?,
        council_area: get_required(record, header_map, "councilarea")?.to_string(),
        region_name: get_required(record, header_map, "regionname")?.to_string(),
        sale_year: parse_int_like(get_required(record, header_map, "year")?, "year")?,
        sale_month: parse_int_like(get_required(record, header_map, "month")?, "month")?,
        sale_day: parse_int_like(get_required(record, header_map, "day")?, "day")?,
        season: get_required(record, header_map, "season")?.to_string(),
    })
}

fn get_required<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<&'a str, String> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| format!("Missing required column: `{name}`"))?;
    record
        .get(*idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{name}`"))
}

fn parse_f64(s: &str, name: &str) -> Result<f64, String> {
    let v = s
        .parse::<f64>()
        .map_err(|_| format!("Invalid `{name}` value '{s}' (expected a number)."))?;
    if !v.is_finite() {
        return Err(format!("Non-finite `{name}` value '{s}'."));
    }
    Ok(v)
}

/// Parse an integer-valued column.
///
/// Cleaned exports store discrete counts as floats (`"2.0"`); those are
/// accepted when exactly integral and rejected otherwise.
fn parse_int_like(s: &str, name: &str) -> Result<i64, String> {
    if let Ok(v) = s.parse::<i64>() {
        return Ok(v);
    }
    let v = parse_f64(s, name)?;
    if v.fract() != 0.0 {
        return Err(format!(
            "Invalid `{name}` value '{s}' (expected a whole number)."
        ));
    }
    if v < i64::MIN as f64 || v > i64::MAX as f64 {
        return Err(format!("`{name}` value '{s}' is out of range."));
    }
    Ok(v as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "suburb,rooms,type,method,sellerg,distance,bedroom2,bathroom,car,landsize,yearbuilt,councilarea,regionname,year,month,day,season";

    fn row(values: &str) -> String {
        format!("{HEADER}\n{values}\n")
    }

    const GOOD_ROW: &str =
        "Abbotsford,2,h,S,Biggin,2.5,2.0,1.0,1.0,202.0,1970.0,Yarra,Northern Metropolitan,2016,12,3,Summer";

    #[test]
    fn ingest_parses_a_valid_row() {
        let data = ingest_reader(row(GOOD_ROW).as_bytes()).unwrap();
        assert_eq!(data.rows_read, 1);
        assert_eq!(data.rows_used, 1);
        assert!(data.row_errors.is_empty());

        let r = &data.rows[0];
        assert_eq!(r.suburb, "Abbotsford");
        assert_eq!(r.rooms, 2);
        assert_eq!(r.bedrooms, 2);
        assert!((r.distance - 2.5).abs() < 1e-12);
        assert_eq!(r.year_built, 1970);
        assert_eq!(r.sale_month, 12);
        assert_eq!(r.season, "Summer");
    }

    #[test]
    fn ingest_strips_bom_from_first_header() {
        let csv = format!("\u{feff}{HEADER}\n{GOOD_ROW}\n");
        let data = ingest_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.rows_used, 1);
    }

    #[test]
    fn ingest_ignores_extra_columns() {
        let csv = format!("{HEADER},price\n{GOOD_ROW},1035000.0\n");
        let data = ingest_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.rows_used, 1);
    }

    #[test]
    fn ingest_rejects_missing_column() {
        let csv = "suburb,rooms\nAbbotsford,2\n";
        let err = ingest_reader(csv.as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("type"));
    }

    #[test]
    fn ingest_collects_row_errors_without_failing() {
        let bad =
            "Abbotsford,two,h,S,Biggin,2.5,2,1,1,202.0,1970,Yarra,Northern Metropolitan,2016,12,3,Summer";
        let csv = format!("{HEADER}\n{GOOD_ROW}\n{bad}\n");
        let data = ingest_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.rows_read, 2);
        assert_eq!(data.rows_used, 1);
        assert_eq!(data.row_errors.len(), 1);
        assert_eq!(data.row_errors[0].line, 3);
        assert!(data.row_errors[0].message.contains("rooms"));
    }

    #[test]
    fn ingest_fails_when_no_rows_survive() {
        let err = ingest_reader(format!("{HEADER}\n").as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn int_like_accepts_integral_floats_only() {
        assert_eq!(parse_int_like("3", "rooms").unwrap(), 3);
        assert_eq!(parse_int_like("3.0", "rooms").unwrap(), 3);
        assert!(parse_int_like("3.5", "rooms").is_err());
        assert!(parse_int_like("three", "rooms").is_err());
    }
}
