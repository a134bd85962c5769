//! Lap and activity summaries from Garmin Training Center XML (TCX) files.
//!
//! Every `Activity` in a TCX document becomes an [`ActivityRecord`]: the
//! activity's sport, totals combined from its laps, and the per-lap records
//! in document order. Moving time is derived from trackpoint speed samples.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tcx_laps::prelude::*;
//!
//! let parser = ActivityParser::new(ParserConfig::from_env()?);
//! for activity in parser.parse_input("morning_run.tcx").await? {
//!     println!("{:?}: {:?} m", activity.sport, activity.totals.distance);
//! }
//! ```

pub mod aggregate;
pub mod config;
pub mod element;
pub mod errors;
pub mod fields;
pub mod models;
pub mod moving_time;
pub mod parser;
pub mod report;
pub mod source;
pub mod sport;

pub use errors::{Result, SummaryError};
pub use models::{ActivityRecord, LapRecord, SportType};
pub use parser::ActivityParser;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::aggregate::combine_laps;
    pub use crate::config::{AvgSpeedPolicy, DEFAULT_MOVING_SPEED_THRESHOLD, ParserConfig};
    pub use crate::element::{Element, find_child, find_child_path, find_child_value, find_children};
    pub use crate::errors::{Result, SummaryError};
    pub use crate::models::{ActivityRecord, LapRecord, SportType};
    pub use crate::parser::ActivityParser;
    pub use crate::source::InputSource;
}
