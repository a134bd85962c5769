//! Athletic performance profiles.
//!
//! Profiles define realistic speed, heart rate and cadence for an activity
//! type. Generators sample around these values to fill trackpoints.

mod cyclist;
mod runner;

pub use cyclist::CyclistProfile;
pub use runner::RunnerProfile;

/// Trait for athletic performance profiles.
pub trait AthleteProfile: Send + Sync {
    /// Base moving speed in meters per second.
    fn base_speed_mps(&self) -> f64;

    /// Day-to-day and sample-to-sample variance as a coefficient of variation (0.0 - 1.0).
    fn variance(&self) -> f64;

    /// Heart rate while stopped, in bpm.
    fn resting_heart_rate(&self) -> i32;

    /// Heart rate at base speed, in bpm.
    fn working_heart_rate(&self) -> i32;

    /// Steps or pedal revolutions per minute at base speed.
    fn cadence(&self) -> i32;
}

/// Samples a variance factor from normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut impl rand::Rng) -> f64 {
    use rand_distr::{Distribution, Normal};

    let std_dev = profile.variance();
    match Normal::new(1.0, std_dev) {
        Ok(normal) if std_dev > 0.0 => {
            let sample: f64 = normal.sample(rng);
            sample.clamp(0.7, 1.4)
        }
        _ => 1.0,
    }
}
