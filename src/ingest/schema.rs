//! Canonical column resolution.
//!
//! Maps raw CSV headers onto the canonical schema with ordered fallback
//! chains, resolved once per file.

use super::IngestError;

/// Required canonical columns. Absence of any of these is a structural error.
const YEAR: &str = "YEAR";
const MONTH: &str = "MONTH";
const ORIGIN: &str = "ORIGIN";
const DEST: &str = "DEST";
const PASSENGERS: &str = "PASSENGERS";
const SEATS: &str = "SEATS";
const DISTANCE: &str = "DISTANCE";

/// Optional columns and fallback-chain candidates.
const DEPARTURES_PERFORMED: &str = "DEPARTURES_PERFORMED";
const CARRIER_NAME: &str = "CARRIER_NAME";
const UNIQUE_CARRIER: &str = "UNIQUE_CARRIER";
const ORIGIN_CITY_NAME: &str = "ORIGIN_CITY_NAME";
const DEST_CITY_NAME: &str = "DEST_CITY_NAME";
const DEST_COUNTRY_NAME: &str = "DEST_COUNTRY_NAME";
const DEST_STATE_ABR: &str = "DEST_STATE_ABR";

/// Index of each canonical field within a CSV row.
///
/// Built from the header once; row parsing is pure index lookups with no
/// per-row branching on column presence.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub year: usize,
    pub month: usize,
    pub origin: usize,
    pub dest: usize,
    pub passengers: usize,
    pub seats: usize,
    pub distance: usize,
    /// Absent in some extracts; the ghost-route filter only applies when set.
    pub departures_performed: Option<usize>,
    /// First hit of CARRIER_NAME -> UNIQUE_CARRIER, else "Unknown".
    pub airline: Option<usize>,
    /// ORIGIN_CITY_NAME, else the origin code.
    pub origin_city: Option<usize>,
    /// DEST_CITY_NAME, else the destination code.
    pub dest_city: Option<usize>,
    /// First hit of DEST_COUNTRY_NAME -> DEST_STATE_ABR, else "Global".
    pub region: Option<usize>,
}

impl ColumnMap {
    /// Resolve a CSV header into column indices.
    ///
    /// Header names are matched case-insensitively (suppliers normalize to
    /// uppercase, but raw downloads are mixed-case).
    pub fn resolve<'a, I>(headers: I) -> Result<Self, IngestError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let upper: Vec<String> = headers.into_iter().map(|h| h.trim().to_uppercase()).collect();
        let find = |name: &str| upper.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| IngestError::MissingColumn {
                column: name.to_string(),
            })
        };

        Ok(Self {
            year: require(YEAR)?,
            month: require(MONTH)?,
            origin: require(ORIGIN)?,
            dest: require(DEST)?,
            passengers: require(PASSENGERS)?,
            seats: require(SEATS)?,
            distance: require(DISTANCE)?,
            departures_performed: find(DEPARTURES_PERFORMED),
            airline: find(CARRIER_NAME).or_else(|| find(UNIQUE_CARRIER)),
            origin_city: find(ORIGIN_CITY_NAME),
            dest_city: find(DEST_CITY_NAME),
            region: find(DEST_COUNTRY_NAME).or_else(|| find(DEST_STATE_ABR)),
        })
    }
}
