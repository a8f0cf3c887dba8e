use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Kilometers to statute miles
pub const KM_TO_MILES: f64 = 0.621371;

/// Great-circle distance in both units
///
/// Kilometers is the measured value; miles is always derived from it, so a
/// result read off the wire ignores any `miles` the sender reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "KilometersOnly")]
pub struct DistanceResult {
    pub kilometers: f64,
    pub miles: f64,
}

impl DistanceResult {
    pub fn from_kilometers(kilometers: f64) -> Self {
        Self {
            kilometers,
            miles: kilometers * KM_TO_MILES,
        }
    }
}

#[derive(Deserialize)]
struct KilometersOnly {
    kilometers: f64,
}

impl From<KilometersOnly> for DistanceResult {
    fn from(raw: KilometersOnly) -> Self {
        Self::from_kilometers(raw.kilometers)
    }
}

/// Latitude/longitude pair in degrees, as resolved by the geocoder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lon")]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180]
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A previously answered distance query, owned by the history store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub source: String,
    pub destination: String,
    #[serde(flatten)]
    pub distance: DistanceResult,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Which side of a distance query an address belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressSide {
    Source,
    Destination,
}

impl fmt::Display for AddressSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressSide::Source => write!(f, "source"),
            AddressSide::Destination => write!(f, "destination"),
        }
    }
}

/// Accept RFC 3339 timestamps as well as the offset-less UTC timestamps the
/// history backend writes (e.g. `2024-05-01T12:30:00.123456`).
pub(crate) fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

pub(crate) fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    raw.map(|s| parse_timestamp(&s).map_err(serde::de::Error::custom))
        .transpose()
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("invalid timestamp {:?}: {}", raw, e))
}
