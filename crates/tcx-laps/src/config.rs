//! Parser configuration.

use std::str::FromStr;

use crate::errors::{Result, SummaryError};

/// Speed (m/s) a trackpoint must exceed for its incoming interval to count as moving.
pub const DEFAULT_MOVING_SPEED_THRESHOLD: f64 = 1.0;

pub const THRESHOLD_ENV: &str = "TCX_MOVING_SPEED_THRESHOLD";
pub const AVG_SPEED_POLICY_ENV: &str = "TCX_AVG_SPEED_POLICY";

/// How a lap without an `Extensions/LX/AvgSpeed` value is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvgSpeedPolicy {
    /// The lap, and with it the whole document, is rejected.
    #[default]
    Strict,
    /// The lap simply has no average speed.
    Lenient,
}

impl AvgSpeedPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            AvgSpeedPolicy::Strict => "strict",
            AvgSpeedPolicy::Lenient => "lenient",
        }
    }
}

impl FromStr for AvgSpeedPolicy {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(AvgSpeedPolicy::Strict),
            "lenient" => Ok(AvgSpeedPolicy::Lenient),
            other => Err(SummaryError::Config(format!(
                "unknown average speed policy: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParserConfig {
    pub moving_speed_threshold: f64,
    pub avg_speed_policy: AvgSpeedPolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            moving_speed_threshold: DEFAULT_MOVING_SPEED_THRESHOLD,
            avg_speed_policy: AvgSpeedPolicy::default(),
        }
    }
}

impl ParserConfig {
    /// Builds a config from `TCX_MOVING_SPEED_THRESHOLD` and `TCX_AVG_SPEED_POLICY`.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Same as [`ParserConfig::from_env`] with a caller-supplied lookup, so
    /// tests don't have to touch the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = get(THRESHOLD_ENV) {
            let threshold = raw.trim().parse::<f64>().map_err(|_| {
                SummaryError::Config(format!("{THRESHOLD_ENV} is not a number: {raw:?}"))
            })?;
            config = config.with_threshold(threshold)?;
        }
        if let Some(raw) = get(AVG_SPEED_POLICY_ENV) {
            config.avg_speed_policy = raw.parse()?;
        }

        Ok(config)
    }

    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(SummaryError::Config(format!(
                "moving speed threshold must be a non-negative number, got {threshold}"
            )));
        }
        self.moving_speed_threshold = threshold;
        Ok(self)
    }

    pub fn with_avg_speed_policy(mut self, policy: AvgSpeedPolicy) -> Self {
        self.avg_speed_policy = policy;
        self
    }
}
