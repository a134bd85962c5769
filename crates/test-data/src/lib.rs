//! Test data generation for tcx-laps.
//!
//! This crate generates synthetic runs and rides (laps of timestamped
//! trackpoints with speed, heart rate, cadence and optional positions) and
//! writes them out as TCX documents, so parser tests can run against
//! realistic input with known expected values.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rand::{SeedableRng, rngs::StdRng};
//! use test_data::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(12345);
//! let config = ActivityConfig::running().laps(4).pause_probability(0.2);
//! let activity = ActivityGenerator::new().generate(&config, &RunnerProfile::default(), &mut rng);
//! let xml = generate_tcx(&[activity]);
//! ```

pub mod config;
pub mod generators;
pub mod profiles;
pub mod tcx;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ActivityConfig, BoundingBox, Region, Sport};
    pub use crate::generators::{
        ActivityGenerator, GeneratedActivity, GeneratedLap, GeneratedTrackpoint,
    };
    pub use crate::profiles::{AthleteProfile, CyclistProfile, RunnerProfile, sample_variance};
    pub use crate::tcx::generate_tcx;
}
