//! Moving time derived from trackpoint speed samples.

use time::OffsetDateTime;

use crate::{
    element::{Element, find_child, find_child_path, find_children},
    errors::Result,
    fields::{parse_float, parse_timestamp},
};

/// One trackpoint reduced to what the moving time scan needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedSample {
    pub time: Option<OffsetDateTime>,
    pub speed: Option<f64>,
}

impl SpeedSample {
    pub fn from_trackpoint<E: Element>(trackpoint: E) -> Result<Self> {
        let time = find_child("Time", trackpoint)
            .map(|node| parse_timestamp("Time", &node.text()))
            .transpose()?;
        let speed = find_child_path(trackpoint, &["Extensions", "TPX", "Speed"])
            .map(|node| parse_float("Speed", &node.text()))
            .transpose()?;

        Ok(Self { time, speed })
    }
}

/// Seconds spent moving within a lap's `Track`.
///
/// Laps without a track have a moving time of zero.
pub fn lap_moving_time<E: Element>(lap: E, threshold: f64) -> Result<f64> {
    let Some(track) = find_child("Track", lap) else {
        return Ok(0.0);
    };

    let samples = find_children("Trackpoint", track)
        .into_iter()
        .map(SpeedSample::from_trackpoint)
        .collect::<Result<Vec<_>>>()?;

    Ok(moving_time(&samples, threshold))
}

/// Sums the intervals whose closing sample is faster than `threshold`.
///
/// An interval is credited to the sample that ends it, so the first sample
/// never counts. The previous timestamp always advances, even across slow or
/// speedless samples; a sample without a timestamp breaks the chain.
pub fn moving_time(samples: &[SpeedSample], threshold: f64) -> f64 {
    let (_, total) = samples.iter().fold(
        (None::<OffsetDateTime>, 0.0),
        |(previous, total), sample| {
            let credited = match (previous, sample.time, sample.speed) {
                (Some(prev), Some(now), Some(speed)) if speed > threshold => {
                    (now - prev).as_seconds_f64()
                }
                _ => 0.0,
            };
            (sample.time, total + credited)
        },
    );
    total
}
