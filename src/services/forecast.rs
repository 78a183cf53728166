//! Route demand forecast engine.

use std::collections::BTreeMap;

use log::debug;

use crate::algorithms::SeasonalTrendModel;
use crate::models::{FlightRecord, ForecastOutcome, ForecastPoint, MonthlyTraffic, SeriesKind};

/// Calendar years excluded from model training. The demand collapse and
/// rebound of these years would dominate any fit; they still appear in the
/// historical display series.
pub const EXCLUDED_TRAINING_YEARS: [i32; 2] = [2020, 2021];

/// Minimum usable monthly points required before a fit is attempted.
pub const MIN_TRAINING_POINTS: usize = 12;

/// Forecast monthly passengers for one route a year past its last
/// observation.
///
/// `dest` is matched against the destination city label first; datasets that
/// only carry airport codes are handled by retrying against the raw code.
/// Expected no-data conditions come back as [`ForecastOutcome`] variants, not
/// errors.
pub fn get_forecast(records: &[FlightRecord], origin_code: &str, dest: &str) -> ForecastOutcome {
    let mut route: Vec<&FlightRecord> = records
        .iter()
        .filter(|r| r.origin_code == origin_code && r.dest_label == dest)
        .collect();
    if route.is_empty() {
        route = records
            .iter()
            .filter(|r| r.origin_code == origin_code && r.dest_code == dest)
            .collect();
    }
    if route.is_empty() {
        return ForecastOutcome::NoData;
    }

    // Monthly passenger totals, chronological by construction.
    let mut monthly: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for record in &route {
        *monthly.entry((record.year, record.month)).or_insert(0.0) += record.passengers;
    }
    let series: Vec<MonthlyTraffic> = monthly
        .into_iter()
        .map(|((year, month), passengers)| MonthlyTraffic {
            year,
            month,
            passengers,
        })
        .collect();

    let training: Vec<MonthlyTraffic> = series
        .iter()
        .filter(|p| !EXCLUDED_TRAINING_YEARS.contains(&p.year))
        .copied()
        .collect();
    if training.len() < MIN_TRAINING_POINTS {
        return ForecastOutcome::NotEnoughData;
    }

    let mut model = SeasonalTrendModel::new();
    if model.fit(&training).is_err() {
        return ForecastOutcome::NotEnoughData;
    }
    debug!(
        "forecast {}->{}: fitted on {} points, r²={:.3}",
        origin_code,
        dest,
        model.n_observations(),
        model.r_squared()
    );

    // The projection year follows the last observed year of the full series,
    // excluded years included.
    let last_year = series.iter().map(|p| p.year).max().unwrap_or_default();
    let forecast_year = last_year + 1;

    let mut points: Vec<ForecastPoint> = series
        .iter()
        .map(|p| ForecastPoint {
            year: p.year,
            month: p.month,
            passengers: p.passengers,
            kind: SeriesKind::Historical,
        })
        .collect();
    for month in 1..=12 {
        let predicted = model.predict(forecast_year, month).unwrap_or(0.0);
        points.push(ForecastPoint {
            year: forecast_year,
            month,
            passengers: predicted,
            kind: SeriesKind::Forecast,
        });
    }

    ForecastOutcome::Success(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, month: u32, dest_code: &str, dest_label: &str, passengers: f64) -> FlightRecord {
        FlightRecord {
            year,
            month,
            origin_code: "JFK".to_string(),
            dest_code: dest_code.to_string(),
            origin_label: "New York".to_string(),
            dest_label: dest_label.to_string(),
            airline_label: "AA".to_string(),
            region: "Global".to_string(),
            seats: passengers * 1.2 + 1.0,
            departures_performed: 10.0,
            passengers,
            distance: 3000.0,
        }
    }

    /// Full monthly coverage for the given years.
    fn route_records(years: &[i32]) -> Vec<FlightRecord> {
        years
            .iter()
            .flat_map(|&year| {
                (1..=12).map(move |month| {
                    record(year, month, "LHR", "London", 900.0 + f64::from(month) * 10.0)
                })
            })
            .collect()
    }

    #[test]
    fn test_no_matching_route() {
        let records = route_records(&[2022, 2023]);
        assert!(matches!(
            get_forecast(&records, "JFK", "Tokyo"),
            ForecastOutcome::NoData
        ));
        assert!(matches!(
            get_forecast(&records, "ORD", "London"),
            ForecastOutcome::NoData
        ));
    }

    #[test]
    fn test_code_fallback_matching() {
        let records = route_records(&[2022, 2023]);
        // "LHR" matches no dest_label, then hits the dest_code retry.
        let outcome = get_forecast(&records, "JFK", "LHR");
        assert!(outcome.is_success());
    }

    #[test]
    fn test_eleven_training_months_not_enough() {
        // 11 months of 2023 and full 2020 coverage: the excluded year
        // contributes nothing to training.
        let mut records: Vec<FlightRecord> = (1..=11)
            .map(|m| record(2023, m, "LHR", "London", 1000.0))
            .collect();
        records.extend((1..=12).map(|m| record(2020, m, "LHR", "London", 100.0)));

        assert!(matches!(
            get_forecast(&records, "JFK", "London"),
            ForecastOutcome::NotEnoughData
        ));
    }

    #[test]
    fn test_twelve_training_months_succeed() {
        let records: Vec<FlightRecord> = (1..=12)
            .map(|m| record(2023, m, "LHR", "London", 1000.0 + f64::from(m)))
            .collect();
        assert!(get_forecast(&records, "JFK", "London").is_success());
    }

    #[test]
    fn test_excluded_years_shown_but_not_trained() {
        let records = route_records(&[2018, 2019, 2020, 2021, 2022]);
        let ForecastOutcome::Success(points) = get_forecast(&records, "JFK", "London") else {
            panic!("expected success");
        };

        // Historical series keeps the excluded years.
        assert!(points
            .iter()
            .any(|p| p.year == 2020 && p.kind == SeriesKind::Historical));
        assert!(points
            .iter()
            .any(|p| p.year == 2021 && p.kind == SeriesKind::Historical));

        // 5 years of history plus 12 projected months.
        assert_eq!(points.len(), 5 * 12 + 12);
        let forecast: Vec<&ForecastPoint> = points
            .iter()
            .filter(|p| p.kind == SeriesKind::Forecast)
            .collect();
        assert_eq!(forecast.len(), 12);
        assert!(forecast.iter().all(|p| p.year == 2023));
    }

    #[test]
    fn test_forecast_year_follows_last_observed_year() {
        // Latest observed year is excluded from training but still anchors
        // the projection year.
        let records = route_records(&[2017, 2018, 2019, 2020]);
        let ForecastOutcome::Success(points) = get_forecast(&records, "JFK", "London") else {
            panic!("expected success");
        };
        let forecast_years: Vec<i32> = points
            .iter()
            .filter(|p| p.kind == SeriesKind::Forecast)
            .map(|p| p.year)
            .collect();
        assert!(forecast_years.iter().all(|&y| y == 2021));
    }

    #[test]
    fn test_series_is_chronological() {
        let records = route_records(&[2019, 2022, 2023]);
        let ForecastOutcome::Success(points) = get_forecast(&records, "JFK", "London") else {
            panic!("expected success");
        };
        let dates: Vec<(i32, u32)> = points.iter().map(|p| (p.year, p.month)).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_forecast_months_cover_full_year() {
        let records = route_records(&[2022, 2023]);
        let ForecastOutcome::Success(points) = get_forecast(&records, "JFK", "London") else {
            panic!("expected success");
        };
        let months: Vec<u32> = points
            .iter()
            .filter(|p| p.kind == SeriesKind::Forecast)
            .map(|p| p.month)
            .collect();
        assert_eq!(months, (1..=12).collect::<Vec<u32>>());
    }

    #[test]
    fn test_monthly_totals_summed_across_airlines() {
        let mut records = route_records(&[2022, 2023]);
        // A second airline on the same route doubles each monthly total.
        let mut other: Vec<FlightRecord> = route_records(&[2022, 2023]);
        for r in &mut other {
            r.airline_label = "BA".to_string();
        }
        records.extend(other);

        let ForecastOutcome::Success(points) = get_forecast(&records, "JFK", "London") else {
            panic!("expected success");
        };
        let january_2022 = points
            .iter()
            .find(|p| p.year == 2022 && p.month == 1 && p.kind == SeriesKind::Historical)
            .unwrap();
        assert_eq!(january_2022.passengers, 2.0 * 910.0);
    }

    #[test]
    fn test_predictions_non_negative() {
        let records = route_records(&[2022, 2023]);
        let ForecastOutcome::Success(points) = get_forecast(&records, "JFK", "London") else {
            panic!("expected success");
        };
        assert!(points.iter().all(|p| p.passengers >= 0.0));
    }
}
