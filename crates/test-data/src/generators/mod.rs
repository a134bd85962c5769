//! Entity generators for test data.
//!
//! - [`ActivityGenerator`]: laps of trackpoints for one activity, sampled from
//!   an [`AthleteProfile`](crate::profiles::AthleteProfile)

pub mod activity;

pub use activity::{ActivityGenerator, GeneratedActivity, GeneratedLap, GeneratedTrackpoint};
