//! Combines per-lap records into a whole-activity record.
//!
//! Totals are sums, peaks are maxima and averages are weighted by lap
//! duration. A combined value of exactly zero is reported as absent: a lap
//! set with no data and one that genuinely sums to zero look the same.

use crate::models::LapRecord;

/// Reduces `laps` (in document order) to a single record.
pub fn combine_laps(laps: &[LapRecord]) -> LapRecord {
    LapRecord {
        start_time: laps.first().and_then(|lap| lap.start_time),
        time: sum(laps, |lap| lap.time),
        distance: sum(laps, |lap| lap.distance),
        avg_speed: weighted_average(laps, |lap| lap.avg_speed),
        max_speed: max(laps, |lap| lap.max_speed),
        avg_hr: weighted_average(laps, |lap| lap.avg_hr.map(f64::from)).map(round),
        max_hr: max_int(laps, |lap| lap.max_hr),
        avg_cadence: weighted_average(laps, |lap| lap.avg_cadence.map(f64::from)).map(round),
        max_cadence: max_int(laps, |lap| lap.max_cadence),
        calories: sum_int(laps, |lap| lap.calories),
        moving_time: sum(laps, |lap| lap.moving_time),
    }
}

fn non_zero(value: f64) -> Option<f64> {
    (value != 0.0).then_some(value)
}

fn sum(laps: &[LapRecord], field: impl Fn(&LapRecord) -> Option<f64>) -> Option<f64> {
    non_zero(laps.iter().map(|lap| field(lap).unwrap_or(0.0)).sum())
}

/// Integer totals saturate at `i32::MAX` rather than overflow.
fn sum_int(laps: &[LapRecord], field: impl Fn(&LapRecord) -> Option<i32>) -> Option<i32> {
    let total = laps
        .iter()
        .map(|lap| field(lap).unwrap_or(0))
        .fold(0i32, i32::saturating_add);
    (total != 0).then_some(total)
}

fn max(laps: &[LapRecord], field: impl Fn(&LapRecord) -> Option<f64>) -> Option<f64> {
    non_zero(
        laps.iter()
            .map(|lap| field(lap).unwrap_or(0.0))
            .fold(0.0, f64::max),
    )
}

fn max_int(laps: &[LapRecord], field: impl Fn(&LapRecord) -> Option<i32>) -> Option<i32> {
    let peak = laps
        .iter()
        .map(|lap| field(lap).unwrap_or(0))
        .max()
        .unwrap_or(0);
    (peak != 0).then_some(peak)
}

/// Σ(value × time) / Σ(time). Laps missing the value still add their time
/// to the denominator.
fn weighted_average(laps: &[LapRecord], field: impl Fn(&LapRecord) -> Option<f64>) -> Option<f64> {
    let (weighted, total_weight) = laps.iter().fold((0.0, 0.0), |(weighted, total), lap| {
        let weight = lap.time.unwrap_or(0.0);
        (weighted + field(lap).unwrap_or(0.0) * weight, total + weight)
    });

    if weighted == 0.0 || total_weight == 0.0 {
        None
    } else {
        Some(weighted / total_weight)
    }
}

fn round(value: f64) -> i32 {
    value.round() as i32
}
