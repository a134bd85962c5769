//! Cyclist athletic profile.

use super::AthleteProfile;

/// Athletic profile for cycling activities.
///
/// Based on typical recreational to competitive cyclist performance:
/// - Base speed: ~28 km/h (8.0 m/s)
/// - Cadence: ~88 rpm
#[derive(Debug, Clone)]
pub struct CyclistProfile {
    /// Base speed in m/s.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
    resting_hr: i32,
    working_hr: i32,
    cadence: i32,
}

impl Default for CyclistProfile {
    fn default() -> Self {
        Self {
            base_speed: 8.0, // ~28 km/h
            variance: 0.10,
            resting_hr: 90,
            working_hr: 138,
            cadence: 88,
        }
    }
}

impl CyclistProfile {
    /// Creates a new cyclist profile with specified base speed.
    ///
    /// # Arguments
    /// * `speed_kmh` - Base speed in km/h
    pub fn with_speed(speed_kmh: f64) -> Self {
        let base_speed = speed_kmh / 3.6;
        Self {
            base_speed,
            ..Default::default()
        }
    }

    /// Creates an elite cyclist profile (~35 km/h base).
    pub fn elite() -> Self {
        Self {
            cadence: 95,
            ..Self::with_speed(35.0)
        }
    }

    /// Creates a recreational cyclist profile (~22 km/h base).
    pub fn recreational() -> Self {
        Self::with_speed(22.0)
    }

    /// Creates a mountain biker profile (~18 km/h base, more variance).
    pub fn mountain_biker() -> Self {
        Self {
            base_speed: 5.0, // ~18 km/h
            variance: 0.15,  // More technical terrain = more variance
            cadence: 75,
            ..Default::default()
        }
    }
}

impl AthleteProfile for CyclistProfile {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = CyclistProfile::default();
        assert!((profile.base_speed_mps() - 8.0).abs() < 0.01);
    }

    #[test]
    fn test_mountain_biker_is_slower_and_noisier() {
        let mtb = CyclistProfile::mountain_biker();
        let road = CyclistProfile::default();
        assert!(mtb.base_speed_mps() < road.base_speed_mps());
        assert!(mtb.variance() > road.variance());
    }
}
