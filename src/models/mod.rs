//! Canonical data model shared by ingestion, the analytics engines, and the
//! HTTP API.
//!
//! All types here are plain serde-serializable value objects. Aggregates are
//! recomputed from scratch on every engine invocation and never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One airline-route-year-month observation from the canonical table.
///
/// Every retained record satisfies `seats > 0`; when the source data carries
/// a departures column, `departures_performed > 0` as well. Label and region
/// fields are never empty after ingestion (fallback chains guarantee a value).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Calendar year of the observation
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    /// Origin airport code (e.g. "JFK")
    pub origin_code: String,
    /// Destination airport code
    pub dest_code: String,
    /// Human-readable origin label (city name, or the code when absent)
    pub origin_label: String,
    /// Human-readable destination label (city name, or the code when absent)
    pub dest_label: String,
    /// Carrier name, raw carrier code, or "Unknown"
    pub airline_label: String,
    /// Destination country, state/region code, or "Global"
    pub region: String,
    /// Total seats offered
    pub seats: f64,
    /// Completed flights; 0.0 when the source has no departures column
    pub departures_performed: f64,
    /// Passengers carried
    pub passengers: f64,
    /// Average route distance in miles
    pub distance: f64,
}

/// Market-position classification of an airline on a route.
///
/// Buckets partition market share `[0, 100]` with exclusive upper boundaries:
/// share > 50 is a monopoly, 20 < share <= 50 is competitive, share <= 20 is
/// a minor player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteStatus {
    Monopoly,
    Competitive,
    MinorPlayer,
}

impl RouteStatus {
    /// Classify a market-share percentage into its position bucket.
    pub fn classify(market_share_pct: f64) -> Self {
        if market_share_pct > 50.0 {
            Self::Monopoly
        } else if market_share_pct > 20.0 {
            Self::Competitive
        } else {
            Self::MinorPlayer
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monopoly => "Monopoly",
            Self::Competitive => "Competitive",
            Self::MinorPlayer => "Minor Player",
        }
    }
}

impl std::fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-route profitability and market position for the audited hub.
///
/// One aggregate per (region, destination, airline) group over the latest
/// year present in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteAggregate {
    /// Destination country / state / "Global"
    pub region: String,
    /// Destination label (city name or code)
    pub dest_label: String,
    /// Carrier label
    pub airline_label: String,
    /// Total passengers carried by this airline on this route
    pub passengers: f64,
    /// Total seats offered
    pub seats: f64,
    /// Total completed flights
    pub departures_performed: f64,
    /// Mean route distance in miles
    pub distance: f64,
    /// Per-passenger-mile revenue rate
    pub yield_rate: f64,
    /// Modeled route revenue
    pub revenue: f64,
    /// Modeled route operating cost
    pub cost: f64,
    /// Revenue minus cost
    pub profit: f64,
    /// Profit as a percentage of revenue; 0.0 when revenue is 0
    pub margin_pct: f64,
    /// Passengers across all airlines serving this destination
    pub city_total_passengers: f64,
    /// This airline's share of the destination's passengers, 0-100
    pub market_share_pct: f64,
    /// Market-position classification
    pub status: RouteStatus,
}

/// Hub-level KPI roll-up over an audit result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubSummary {
    /// Sum of route profits across the hub
    pub total_profit: f64,
    /// Destination label of the most profitable route
    pub top_destination: String,
    /// Number of routes where the hub airline holds a monopoly position
    pub monopoly_routes: usize,
}

/// Observed monthly passenger total for one route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTraffic {
    pub year: i32,
    pub month: u32,
    pub passengers: f64,
}

/// Whether a forecast point was observed or model-predicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesKind {
    Historical,
    Forecast,
}

/// One point of the combined historical + projected monthly series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    pub passengers: f64,
    pub kind: SeriesKind,
}

impl ForecastPoint {
    /// Calendar date (first of month) for charting.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

/// Result of a forecast request.
///
/// Expected no-data conditions are values, not errors: the caller chooses the
/// user-facing message from the variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ForecastOutcome {
    /// Combined series: observed months in chronological order, then the 12
    /// projected months of the following year.
    Success(Vec<ForecastPoint>),
    /// No records matched the origin/destination under either matching
    /// strategy.
    NoData,
    /// Fewer than 12 usable monthly points remained after the training
    /// exclusions; no prediction was attempted.
    NotEnoughData,
}

impl ForecastOutcome {
    /// Wire-level status string for API consumers.
    pub fn status_label(&self) -> &'static str {
        match self {
            Self::Success(_) => "Success",
            Self::NoData => "No Data",
            Self::NotEnoughData => "Not Enough Data",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
