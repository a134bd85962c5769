//! Activity parsing: from a TCX document tree to [`ActivityRecord`]s.

use roxmltree::Document;
use tracing::debug;

use crate::{
    aggregate::combine_laps,
    config::ParserConfig,
    element::{Element, find_child_path, find_child_value, find_children},
    errors::Result,
    fields::{
        get_avg_cadence, get_avg_hr, get_avg_speed, get_calories, get_distance, get_max_cadence,
        get_max_hr, get_max_speed, get_start_time, get_time,
    },
    models::{ActivityRecord, LapRecord},
    moving_time::lap_moving_time,
    source::InputSource,
    sport::classify,
};

#[derive(Debug, Clone, Default)]
pub struct ActivityParser {
    config: ParserConfig,
}

impl ActivityParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses TCX text. Malformed XML is reported before any activity is read.
    pub fn parse_str(&self, text: &str) -> Result<Vec<ActivityRecord>> {
        let doc = Document::parse(text)?;
        self.parse_document(&doc)
    }

    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<ActivityRecord>> {
        self.parse_str(std::str::from_utf8(bytes)?)
    }

    pub async fn parse_source(&self, source: &InputSource) -> Result<Vec<ActivityRecord>> {
        let bytes = source.read().await?;
        self.parse_bytes(&bytes)
    }

    /// Parses a file path or an `http(s)://` URL.
    pub async fn parse_input(&self, input: &str) -> Result<Vec<ActivityRecord>> {
        self.parse_source(&InputSource::from_input(input)).await
    }

    /// Returns one record per `Activity`, in document order.
    ///
    /// A document without `TrainingCenterDatabase/Activities` has no
    /// activities. Any field error aborts the whole document.
    pub fn parse_document(&self, doc: &Document) -> Result<Vec<ActivityRecord>> {
        let Some(activities) =
            find_child_path(doc.root(), &["TrainingCenterDatabase", "Activities"])
        else {
            debug!("No Activities element found");
            return Ok(Vec::new());
        };

        find_children("Activity", activities)
            .into_iter()
            .map(|activity| self.parse_activity(activity))
            .collect()
    }

    pub fn parse_activity<E: Element>(&self, activity: E) -> Result<ActivityRecord> {
        let laps = find_children("Lap", activity)
            .into_iter()
            .map(|lap| self.parse_lap(lap))
            .collect::<Result<Vec<_>>>()?;

        let record = ActivityRecord {
            sport: classify(activity),
            id: find_child_value("Id", activity).map(|id| id.trim().to_string()),
            totals: combine_laps(&laps),
            laps,
        };

        debug!(
            "Parsed activity {:?} ({:?}) with {} laps",
            record.id,
            record.sport,
            record.laps.len()
        );

        Ok(record)
    }

    pub fn parse_lap<E: Element>(&self, lap: E) -> Result<LapRecord> {
        Ok(LapRecord {
            start_time: get_start_time(lap)?,
            time: get_time(lap)?,
            distance: get_distance(lap)?,
            avg_speed: get_avg_speed(lap, self.config.avg_speed_policy)?,
            max_speed: get_max_speed(lap)?,
            avg_hr: get_avg_hr(lap),
            max_hr: get_max_hr(lap),
            avg_cadence: get_avg_cadence(lap),
            max_cadence: get_max_cadence(lap),
            calories: get_calories(lap),
            moving_time: Some(lap_moving_time(lap, self.config.moving_speed_threshold)?),
        })
    }
}
