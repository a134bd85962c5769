//! Activity generation from athlete profiles.
//!
//! Generated laps know their own summary values, which are both written to
//! the TCX lap elements and used by tests as the expected parse results.

use rand::Rng;
use time::{Duration, OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{
    config::{ActivityConfig, Sport},
    profiles::{AthleteProfile, sample_variance},
};

/// Meters per degree of latitude, close enough for generated tracks.
const METERS_PER_DEGREE: f64 = 111_320.0;

/// One timestamped sample.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTrackpoint {
    pub time: OffsetDateTime,
    /// (lat, lon), when the activity records positions.
    pub position: Option<(f64, f64)>,
    /// Cumulative distance in meters since the start of the activity.
    pub distance: f64,
    /// Instantaneous speed in m/s; `None` when the sample was dropped.
    pub speed: Option<f64>,
    pub heart_rate: i32,
    pub cadence: i32,
}

#[derive(Debug, Clone)]
pub struct GeneratedLap {
    pub start_time: OffsetDateTime,
    pub duration_secs: i64,
    /// Meters covered, including samples whose speed was dropped.
    pub distance_meters: f64,
    pub trackpoints: Vec<GeneratedTrackpoint>,
}

impl GeneratedLap {
    pub fn total_time_secs(&self) -> f64 {
        self.duration_secs as f64
    }

    pub fn avg_speed(&self) -> f64 {
        if self.duration_secs > 0 {
            self.distance_meters / self.total_time_secs()
        } else {
            0.0
        }
    }

    pub fn max_speed(&self) -> f64 {
        self.trackpoints
            .iter()
            .filter_map(|p| p.speed)
            .fold(0.0, f64::max)
    }

    pub fn avg_heart_rate(&self) -> i32 {
        mean(self.trackpoints.iter().map(|p| p.heart_rate))
    }

    pub fn max_heart_rate(&self) -> i32 {
        self.trackpoints
            .iter()
            .map(|p| p.heart_rate)
            .max()
            .unwrap_or(0)
    }

    pub fn avg_cadence(&self) -> i32 {
        mean(self.trackpoints.iter().map(|p| p.cadence))
    }

    pub fn max_cadence(&self) -> i32 {
        self.trackpoints
            .iter()
            .map(|p| p.cadence)
            .max()
            .unwrap_or(0)
    }

    /// Rough energy estimate: one kcal per kilogram per kilometer for a 70 kg athlete.
    pub fn calories(&self) -> i32 {
        (self.distance_meters / 1000.0 * 70.0).round() as i32
    }

    /// Seconds between consecutive trackpoints whose closing sample is faster
    /// than `threshold`.
    pub fn moving_time(&self, threshold: f64) -> f64 {
        self.trackpoints
            .windows(2)
            .filter(|pair| pair[1].speed.is_some_and(|speed| speed > threshold))
            .map(|pair| (pair[1].time - pair[0].time).as_seconds_f64())
            .sum()
    }
}

fn mean(values: impl Iterator<Item = i32>) -> i32 {
    let (sum, count) = values.fold((0i64, 0i64), |(sum, count), v| (sum + i64::from(v), count + 1));
    if count == 0 {
        0
    } else {
        (sum as f64 / count as f64).round() as i32
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedActivity {
    /// RFC 3339 start time, used as the TCX `Id`.
    pub id: String,
    pub name: String,
    pub sport: Sport,
    pub laps: Vec<GeneratedLap>,
    /// Whether the laps carry `Extensions/LX`.
    pub with_lap_extensions: bool,
}

impl GeneratedActivity {
    pub fn has_positions(&self) -> bool {
        self.laps
            .iter()
            .flat_map(|lap| &lap.trackpoints)
            .any(|p| p.position.is_some())
    }

    pub fn total_distance(&self) -> f64 {
        self.laps.iter().map(|lap| lap.distance_meters).sum()
    }

    pub fn total_time(&self) -> f64 {
        self.laps.iter().map(GeneratedLap::total_time_secs).sum()
    }

    pub fn moving_time(&self, threshold: f64) -> f64 {
        self.laps.iter().map(|lap| lap.moving_time(threshold)).sum()
    }
}

/// Generates activities from athlete profiles.
pub struct ActivityGenerator {
    running_names: Vec<&'static str>,
    cycling_names: Vec<&'static str>,
}

impl Default for ActivityGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityGenerator {
    /// Creates a new activity generator with default naming.
    pub fn new() -> Self {
        Self {
            running_names: vec!["Morning Run", "Tempo Run", "Long Run", "Track Intervals"],
            cycling_names: vec!["Morning Ride", "Road Ride", "Gravel Ride", "Trainer Session"],
        }
    }

    /// Creates one activity with `config.laps` back-to-back laps.
    pub fn generate(
        &self,
        config: &ActivityConfig,
        profile: &dyn AthleteProfile,
        rng: &mut impl Rng,
    ) -> GeneratedActivity {
        let mut position = config
            .with_positions
            .then(|| config.region.random_point(rng));
        let mut distance = 0.0;
        let lap_duration = Duration::seconds(config.lap_duration_secs);
        let interval = Duration::seconds(config.sample_interval_secs.max(1));

        let laps = (0..config.laps)
            .map(|index| {
                let start_time = config.start + lap_duration * index as i32;
                let lap_start_distance = distance;

                let trackpoints = (0..config.samples_per_lap())
                    .map(|sample| {
                        let moving = rng.r#gen::<f64>() >= config.pause_probability;
                        let speed = if moving {
                            profile.base_speed_mps() * sample_variance(profile, rng)
                        } else {
                            0.0
                        };
                        distance += speed * interval.as_seconds_f64();
                        if let Some((lat, _)) = position.as_mut() {
                            *lat += speed * interval.as_seconds_f64() / METERS_PER_DEGREE;
                        }
                        let recorded = rng.r#gen::<f64>() >= config.speed_dropout;

                        GeneratedTrackpoint {
                            time: start_time + interval * sample as i32,
                            position,
                            distance,
                            speed: recorded.then_some(speed),
                            heart_rate: heart_rate(profile, speed, rng),
                            cadence: if moving {
                                profile.cadence() + rng.gen_range(-4..=4)
                            } else {
                                0
                            },
                        }
                    })
                    .collect();

                GeneratedLap {
                    start_time,
                    duration_secs: config.lap_duration_secs,
                    distance_meters: distance - lap_start_distance,
                    trackpoints,
                }
            })
            .collect::<Vec<_>>();

        let id = config.start.format(&Rfc3339).unwrap_or_default();
        tracing::debug!("Generated {:?} activity {} with {} laps", config.sport, id, laps.len());

        GeneratedActivity {
            id,
            name: self.generate_name(config.sport, rng),
            sport: config.sport,
            laps,
            with_lap_extensions: config.with_lap_extensions,
        }
    }

    fn generate_name(&self, sport: Sport, rng: &mut impl Rng) -> String {
        let names = match sport {
            Sport::Biking => &self.cycling_names,
            _ => &self.running_names,
        };
        names[rng.gen_range(0..names.len())].to_string()
    }
}

/// Heart rate scales between resting and working with relative speed.
fn heart_rate(profile: &dyn AthleteProfile, speed: f64, rng: &mut impl Rng) -> i32 {
    let effort = (speed / profile.base_speed_mps()).clamp(0.0, 1.5);
    let span = f64::from(profile.working_heart_rate() - profile.resting_heart_rate());
    profile.resting_heart_rate() + (span * effort).round() as i32 + rng.gen_range(-3..=3)
}
