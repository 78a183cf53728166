//! CSV row parsing into canonical [`FlightRecord`]s.

use csv::StringRecord;
use log::debug;

use super::schema::ColumnMap;
use super::IngestError;
use crate::models::FlightRecord;

/// Parse one CSV document into canonical records, applying the retention
/// filters.
///
/// Rows failing the cargo-only or ghost-route filters are dropped silently;
/// rows with unparseable numerics abort ingestion with the offending column
/// and row number.
pub fn read_records(content: &str) -> Result<Vec<FlightRecord>, IngestError> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers = reader.headers()?.clone();
    let map = ColumnMap::resolve(headers.iter())?;

    let mut records = Vec::new();
    let mut dropped_cargo = 0usize;
    let mut dropped_ghost = 0usize;

    for (i, result) in reader.records().enumerate() {
        let row = result?;
        // Header is line 1; first data row is line 2.
        let line = i + 2;

        let seats = parse_number(&row, map.seats, "SEATS", line)?;
        if seats <= 0.0 {
            dropped_cargo += 1;
            continue;
        }

        let departures_performed = match map.departures_performed {
            Some(idx) => {
                let departures = parse_number(&row, idx, "DEPARTURES_PERFORMED", line)?;
                if departures <= 0.0 {
                    dropped_ghost += 1;
                    continue;
                }
                departures
            }
            None => 0.0,
        };

        let year = parse_number(&row, map.year, "YEAR", line)? as i32;
        let month_raw = parse_number(&row, map.month, "MONTH", line)? as i64;
        if !(1..=12).contains(&month_raw) {
            return Err(IngestError::MonthOutOfRange {
                row: line,
                value: month_raw,
            });
        }

        let origin_code = field(&row, map.origin).to_string();
        let dest_code = field(&row, map.dest).to_string();

        records.push(FlightRecord {
            year,
            month: month_raw as u32,
            origin_label: resolve_label(&row, map.origin_city, &origin_code),
            dest_label: resolve_label(&row, map.dest_city, &dest_code),
            airline_label: resolve_label(&row, map.airline, "Unknown"),
            region: resolve_label(&row, map.region, "Global"),
            origin_code,
            dest_code,
            seats,
            departures_performed,
            passengers: parse_number(&row, map.passengers, "PASSENGERS", line)?,
            distance: parse_number(&row, map.distance, "DISTANCE", line)?,
        });
    }

    debug!(
        "ingested {} records ({} cargo-only rows dropped, {} ghost routes dropped)",
        records.len(),
        dropped_cargo,
        dropped_ghost
    );

    Ok(records)
}

fn field<'a>(row: &'a StringRecord, idx: usize) -> &'a str {
    row.get(idx).unwrap_or("").trim()
}

/// Fallback-chain tail: a resolved column with an empty cell, or no column at
/// all, yields the chain's final default.
fn resolve_label(row: &StringRecord, idx: Option<usize>, default: &str) -> String {
    match idx {
        Some(idx) => {
            let value = field(row, idx);
            if value.is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        }
        None => default.to_string(),
    }
}

fn parse_number(
    row: &StringRecord,
    idx: usize,
    column: &str,
    line: usize,
) -> Result<f64, IngestError> {
    let raw = field(row, idx);
    raw.parse::<f64>().map_err(|_| IngestError::InvalidValue {
        column: column.to_string(),
        row: line,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
YEAR,MONTH,ORIGIN,DEST,PASSENGERS,SEATS,DISTANCE,DEPARTURES_PERFORMED,CARRIER_NAME,DEST_CITY_NAME,DEST_COUNTRY_NAME
2023,1,JFK,LHR,1200,1500,3451,10,British Airways,London,United Kingdom
2023,1,JFK,LHR,0,0,3451,4,Cargo Air,London,United Kingdom
2023,2,JFK,CDG,900,1100,3635,0,Air France,Paris,France
2023,2,JFK,CDG,950,1100,3635,8,Air France,Paris,France
";

    #[test]
    fn test_filters_cargo_and_ghost_rows() {
        let records = read_records(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.seats > 0.0));
        assert!(records.iter().all(|r| r.departures_performed > 0.0));
    }

    #[test]
    fn test_canonical_fields_populated() {
        let records = read_records(SAMPLE).unwrap();
        let first = &records[0];
        assert_eq!(first.year, 2023);
        assert_eq!(first.month, 1);
        assert_eq!(first.origin_code, "JFK");
        assert_eq!(first.dest_label, "London");
        assert_eq!(first.airline_label, "British Airways");
        assert_eq!(first.region, "United Kingdom");
        assert_eq!(first.distance, 3451.0);
    }

    #[test]
    fn test_minimal_header_uses_fallback_defaults() {
        let csv = "\
YEAR,MONTH,ORIGIN,DEST,PASSENGERS,SEATS,DISTANCE
2022,6,ATL,MIA,300,400,594
";
        let records = read_records(csv).unwrap();
        let rec = &records[0];
        assert_eq!(rec.airline_label, "Unknown");
        assert_eq!(rec.dest_label, "MIA");
        assert_eq!(rec.origin_label, "ATL");
        assert_eq!(rec.region, "Global");
        // No departures column: ghost-route filter does not apply.
        assert_eq!(rec.departures_performed, 0.0);
    }

    #[test]
    fn test_empty_label_cell_falls_back() {
        let csv = "\
YEAR,MONTH,ORIGIN,DEST,PASSENGERS,SEATS,DISTANCE,CARRIER_NAME
2022,6,ATL,MIA,300,400,594,
";
        let records = read_records(csv).unwrap();
        assert_eq!(records[0].airline_label, "Unknown");
    }

    #[test]
    fn test_invalid_numeric_names_column_and_row() {
        let csv = "\
YEAR,MONTH,ORIGIN,DEST,PASSENGERS,SEATS,DISTANCE
2022,6,ATL,MIA,lots,400,594
";
        let err = read_records(csv).unwrap_err();
        match err {
            IngestError::InvalidValue { column, row, value } => {
                assert_eq!(column, "PASSENGERS");
                assert_eq!(row, 2);
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_month_out_of_range() {
        let csv = "\
YEAR,MONTH,ORIGIN,DEST,PASSENGERS,SEATS,DISTANCE
2022,13,ATL,MIA,300,400,594
";
        assert!(matches!(
            read_records(csv).unwrap_err(),
            IngestError::MonthOutOfRange { row: 2, value: 13 }
        ));
    }
}
