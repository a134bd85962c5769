//! Runner athletic profile.

use super::AthleteProfile;

/// Athletic profile for running activities.
///
/// Based on typical recreational runner performance:
/// - Base pace: ~5:00/km (3.5 m/s)
/// - Cadence: ~170 steps per minute
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Base speed in m/s.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
    resting_hr: i32,
    working_hr: i32,
    cadence: i32,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            base_speed: 3.5, // ~5:00/km
            variance: 0.08,
            resting_hr: 95,
            working_hr: 150,
            cadence: 170,
        }
    }
}

impl RunnerProfile {
    /// Creates a new runner profile with specified base pace.
    ///
    /// # Arguments
    /// * `pace_min_per_km` - Base pace in minutes per kilometer (e.g., 5.0 for 5:00/km)
    pub fn with_pace(pace_min_per_km: f64) -> Self {
        let base_speed = 1000.0 / (pace_min_per_km * 60.0);
        Self {
            base_speed,
            ..Default::default()
        }
    }

    /// Creates an elite runner profile (~3:30/km base pace).
    pub fn elite() -> Self {
        Self {
            cadence: 185,
            ..Self::with_pace(3.5)
        }
    }

    /// Creates a recreational runner profile (~6:00/km base pace).
    pub fn recreational() -> Self {
        Self::with_pace(6.0)
    }
}

impl AthleteProfile for RunnerProfile {
    fn base_speed_mps(&self) -> f64 {
        self.base_speed
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn resting_heart_rate(&self) -> i32 {
        self.resting_hr
    }

    fn working_heart_rate(&self) -> i32 {
        self.working_hr
    }

    fn cadence(&self) -> i32 {
        self.cadence
    }
}
