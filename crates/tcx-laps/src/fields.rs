//! Typed field extractors for lap and trackpoint elements.
//!
//! Each getter resolves a tag path below the element it is given and converts
//! the text it finds. A missing element yields `None`. A present float or
//! timestamp that does not parse is an error, except where noted.

use time::{
    OffsetDateTime, PrimitiveDateTime,
    format_description::well_known::{Iso8601, Rfc3339},
};

use crate::{
    config::AvgSpeedPolicy,
    element::{Element, find_child_path},
    errors::{Result, SummaryError},
};

const AVG_SPEED_PATH: [&str; 3] = ["Extensions", "LX", "AvgSpeed"];

/// Parses a decimal numeral. Surrounding whitespace is ignored.
pub fn parse_float(field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| SummaryError::MalformedNumber {
            field,
            value: value.to_string(),
        })
}

/// Parses the leading integer of `value`, ignoring anything after it.
///
/// `"85bpm"` gives 85. Leading whitespace and a sign are accepted; content
/// without leading digits gives `None`.
pub fn parse_integer(value: &str) -> Option<i32> {
    let value = value.trim_start();
    let (sign, unsigned) = match value.as_bytes().first() {
        Some(b'-') => (-1, &value[1..]),
        Some(b'+') => (1, &value[1..]),
        _ => (1, value),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..end].parse::<i32>().ok().map(|n| sign * n)
}

/// Parses an ISO-8601 timestamp. Values without a UTC offset are taken as UTC.
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<OffsetDateTime> {
    let value = value.trim();
    OffsetDateTime::parse(value, &Rfc3339)
        .or_else(|_| {
            PrimitiveDateTime::parse(value, &Iso8601::DEFAULT).map(PrimitiveDateTime::assume_utc)
        })
        .map_err(|_| SummaryError::MalformedTimestamp {
            field,
            value: value.to_string(),
        })
}

fn float_at<E: Element>(node: E, path: &[&'static str]) -> Result<Option<f64>> {
    let field = path.last().copied().unwrap_or_default();
    find_child_path(node, path)
        .map(|found| parse_float(field, &found.text()))
        .transpose()
}

fn integer_at<E: Element>(node: E, path: &[&str]) -> Option<i32> {
    find_child_path(node, path).and_then(|found| parse_integer(&found.text()))
}

pub fn get_time<E: Element>(lap: E) -> Result<Option<f64>> {
    float_at(lap, &["TotalTimeSeconds"])
}

pub fn get_distance<E: Element>(lap: E) -> Result<Option<f64>> {
    float_at(lap, &["DistanceMeters"])
}

pub fn get_max_speed<E: Element>(lap: E) -> Result<Option<f64>> {
    float_at(lap, &["MaximumSpeed"])
}

/// Average speed from the lap extension block.
///
/// Under [`AvgSpeedPolicy::Strict`] a lap without `Extensions/LX/AvgSpeed`
/// is rejected with [`SummaryError::MissingField`].
pub fn get_avg_speed<E: Element>(lap: E, policy: AvgSpeedPolicy) -> Result<Option<f64>> {
    match float_at(lap, &AVG_SPEED_PATH)? {
        Some(speed) => Ok(Some(speed)),
        None if policy == AvgSpeedPolicy::Strict => {
            Err(SummaryError::MissingField(AVG_SPEED_PATH.join("/")))
        }
        None => Ok(None),
    }
}

pub fn get_avg_hr<E: Element>(lap: E) -> Option<i32> {
    integer_at(lap, &["AverageHeartRateBpm", "Value"])
}

pub fn get_max_hr<E: Element>(lap: E) -> Option<i32> {
    integer_at(lap, &["MaximumHeartRateBpm", "Value"])
}

/// Run cadence from the extension block, else the lap's own `Cadence`.
pub fn get_avg_cadence<E: Element>(lap: E) -> Option<i32> {
    integer_at(lap, &["Extensions", "LX", "AvgRunCadence"])
        .or_else(|| integer_at(lap, &["Cadence"]))
}

pub fn get_max_cadence<E: Element>(lap: E) -> Option<i32> {
    integer_at(lap, &["Extensions", "LX", "MaxRunCadence"])
        .or_else(|| integer_at(lap, &["Extensions", "LX", "MaxBikeCadence"]))
}

pub fn get_calories<E: Element>(lap: E) -> Option<i32> {
    integer_at(lap, &["Calories"])
}

pub fn get_start_time<E: Element>(lap: E) -> Result<Option<OffsetDateTime>> {
    lap.attribute("StartTime")
        .map(|value| parse_timestamp("StartTime", value))
        .transpose()
}
