//! Hub audit engine: route profitability and market position.

use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::models::{FlightRecord, HubSummary, RouteAggregate, RouteStatus};

/// Yield curve: per-passenger-mile revenue decays with distance.
const YIELD_BASE: f64 = 0.6;
const YIELD_DISTANCE_EXPONENT: f64 = -0.15;

/// Fixed hourly operating rate: 5500 base plus fuel burn at 850 gal/h.
const HOURLY_OPERATING_RATE: f64 = 5500.0 + 850.0 * 2.80;

/// Block-hour estimate for one flight of a given distance.
fn flight_hours(distance: f64) -> f64 {
    distance / 450.0 + 0.5
}

#[derive(Debug, Default)]
struct GroupAccumulator {
    passengers: f64,
    seats: f64,
    departures_performed: f64,
    distance_sum: f64,
    rows: usize,
}

/// Audit a hub's outbound network for the latest year in the dataset.
///
/// The latest year is taken over **all** records, not just the hub's, so
/// every hub is audited against the same reference year. Returns one
/// aggregate per (region, destination, airline) group, ordered by that key;
/// an empty result means "no data for this hub" and is the caller's to
/// surface.
pub fn run_audit(records: &[FlightRecord], hub_code: &str) -> Vec<RouteAggregate> {
    let Some(max_year) = records.iter().map(|r| r.year).max() else {
        return Vec::new();
    };

    let mut groups: BTreeMap<(String, String, String), GroupAccumulator> = BTreeMap::new();
    for record in records
        .iter()
        .filter(|r| r.year == max_year && r.origin_code == hub_code)
    {
        let key = (
            record.region.clone(),
            record.dest_label.clone(),
            record.airline_label.clone(),
        );
        let acc = groups.entry(key).or_default();
        acc.passengers += record.passengers;
        acc.seats += record.seats;
        acc.departures_performed += record.departures_performed;
        acc.distance_sum += record.distance;
        acc.rows += 1;
    }

    if groups.is_empty() {
        debug!("no records for hub '{}' in year {}", hub_code, max_year);
        return Vec::new();
    }

    // City totals partition each destination's passengers across airlines.
    let mut city_totals: HashMap<String, f64> = HashMap::new();
    for ((_, dest_label, _), acc) in &groups {
        *city_totals.entry(dest_label.clone()).or_insert(0.0) += acc.passengers;
    }

    let aggregates: Vec<RouteAggregate> = groups
        .into_iter()
        .map(|((region, dest_label, airline_label), acc)| {
            let distance = acc.distance_sum / acc.rows as f64;
            let yield_rate = YIELD_BASE * distance.powf(YIELD_DISTANCE_EXPONENT);
            let revenue = acc.passengers * distance * yield_rate;
            let cost = flight_hours(distance) * acc.departures_performed * HOURLY_OPERATING_RATE;
            let profit = revenue - cost;
            // Margin is defined as 0 on zero revenue rather than NaN.
            let margin_pct = if revenue > 0.0 {
                profit / revenue * 100.0
            } else {
                0.0
            };

            let city_total_passengers = city_totals[&dest_label];
            let market_share_pct = if city_total_passengers > 0.0 {
                acc.passengers / city_total_passengers * 100.0
            } else {
                0.0
            };

            RouteAggregate {
                region,
                dest_label,
                airline_label,
                passengers: acc.passengers,
                seats: acc.seats,
                departures_performed: acc.departures_performed,
                distance,
                yield_rate,
                revenue,
                cost,
                profit,
                margin_pct,
                city_total_passengers,
                market_share_pct,
                status: RouteStatus::classify(market_share_pct),
            }
        })
        .collect();

    debug!(
        "audited hub '{}' year {}: {} route groups",
        hub_code,
        max_year,
        aggregates.len()
    );
    aggregates
}

/// KPI roll-up over an audit result: total profit, most profitable
/// destination, and monopoly-route count. `None` on an empty audit.
pub fn hub_summary(aggregates: &[RouteAggregate]) -> Option<HubSummary> {
    let top = aggregates.iter().max_by(|a, b| {
        a.profit
            .partial_cmp(&b.profit)
            .unwrap_or(std::cmp::Ordering::Equal)
    })?;

    Some(HubSummary {
        total_profit: aggregates.iter().map(|a| a.profit).sum(),
        top_destination: top.dest_label.clone(),
        monopoly_routes: aggregates
            .iter()
            .filter(|a| a.status == RouteStatus::Monopoly)
            .count(),
    })
}
