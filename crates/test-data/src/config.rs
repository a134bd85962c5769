//! Configuration types for test data generation.

use time::{OffsetDateTime, macros::datetime};

/// Geographic bounding box defined by southwest and northeast corners.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    /// Minimum latitude (south)
    pub min_lat: f64,
    /// Minimum longitude (west)
    pub min_lon: f64,
    /// Maximum latitude (north)
    pub max_lat: f64,
    /// Maximum longitude (east)
    pub max_lon: f64,
}

impl BoundingBox {
    pub const fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }

    /// Returns a random point within the bounding box.
    pub fn random_point(&self, rng: &mut impl rand::Rng) -> (f64, f64) {
        let lat = rng.gen_range(self.min_lat..self.max_lat);
        let lon = rng.gen_range(self.min_lon..self.max_lon);
        (lat, lon)
    }
}

/// Pre-defined geographic regions for generated positions.
#[derive(Debug, Clone, Copy)]
pub struct Region;

impl Region {
    /// Boulder, CO area.
    pub const BOULDER: BoundingBox = BoundingBox::new(39.9, -105.5, 40.1, -105.2);
}

/// Sport written to the `Sport` attribute of a generated activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sport {
    Running,
    Biking,
    /// Anything else; written as `Other`.
    Other,
}

impl Sport {
    pub fn as_tcx_str(self) -> &'static str {
        match self {
            Sport::Running => "Running",
            Sport::Biking => "Biking",
            Sport::Other => "Other",
        }
    }
}

/// Shape of one generated activity.
#[derive(Debug, Clone)]
pub struct ActivityConfig {
    pub sport: Sport,
    pub laps: usize,
    /// Seconds covered by each lap.
    pub lap_duration_secs: i64,
    /// Seconds between consecutive trackpoints.
    pub sample_interval_secs: i64,
    /// Chance (0.0-1.0) that a trackpoint is stationary.
    pub pause_probability: f64,
    /// Chance (0.0-1.0) that a trackpoint carries no speed sample.
    pub speed_dropout: f64,
    /// Whether trackpoints carry a `Position`. Rides without positions are indoor rides.
    pub with_positions: bool,
    /// Whether laps carry the `LX` extension block (average speed, cadence peaks).
    pub with_lap_extensions: bool,
    pub region: BoundingBox,
    pub start: OffsetDateTime,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            sport: Sport::Running,
            laps: 3,
            lap_duration_secs: 300,
            sample_interval_secs: 5,
            pause_probability: 0.1,
            speed_dropout: 0.0,
            with_positions: true,
            with_lap_extensions: true,
            region: Region::BOULDER,
            start: datetime!(2024-03-01 07:00:00 UTC),
        }
    }
}

impl ActivityConfig {
    pub fn running() -> Self {
        Self::default()
    }

    pub fn biking() -> Self {
        Self {
            sport: Sport::Biking,
            lap_duration_secs: 600,
            ..Self::default()
        }
    }

    /// A trainer ride: biking without any positions.
    pub fn indoor_biking() -> Self {
        Self {
            with_positions: false,
            ..Self::biking()
        }
    }

    pub fn laps(mut self, laps: usize) -> Self {
        self.laps = laps;
        self
    }

    pub fn pause_probability(mut self, probability: f64) -> Self {
        self.pause_probability = probability;
        self
    }

    pub fn speed_dropout(mut self, probability: f64) -> Self {
        self.speed_dropout = probability;
        self
    }

    pub fn without_lap_extensions(mut self) -> Self {
        self.with_lap_extensions = false;
        self
    }

    pub fn starting_at(mut self, start: OffsetDateTime) -> Self {
        self.start = start;
        self
    }

    /// Trackpoints per lap.
    pub fn samples_per_lap(&self) -> usize {
        (self.lap_duration_secs / self.sample_interval_secs.max(1)).max(1) as usize
    }
}
