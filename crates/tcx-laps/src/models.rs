use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Summary values of one lap, or of several laps combined.
///
/// A field is `None` when nothing could be derived for it; zero is never
/// used as a stand-in for "unknown".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LapRecord {
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<OffsetDateTime>,
    /// Seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    /// Meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Meters per second
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<f64>,
    /// Beats per minute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_hr: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hr: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_cadence: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cadence: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
    /// Seconds spent above the moving speed threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moving_time: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SportType {
    Run,
    BikeRide,
    IndoorBikeRide,
}

impl SportType {
    pub fn as_str(self) -> &'static str {
        match self {
            SportType::Run => "run",
            SportType::BikeRide => "bike-ride",
            SportType::IndoorBikeRide => "indoor-bike-ride",
        }
    }
}

/// One `Activity` element: its sport, the combined lap values and the laps
/// themselves in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ActivityRecord {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<SportType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub totals: LapRecord,
    pub laps: Vec<LapRecord>,
}
