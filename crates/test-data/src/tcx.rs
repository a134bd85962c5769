//! TCX file generation from generated activities.
//!
//! Generates Training Center XML v2 with the Garmin activity extension
//! namespace, in the shape devices export it.

use std::fmt::Write as _;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{
    config::Sport,
    generators::{GeneratedActivity, GeneratedLap, GeneratedTrackpoint},
};

/// Generates a TCX XML document containing `activities` in order.
///
/// Each lap carries its summary values (time, distance, max speed, calories,
/// heart rate) and, when enabled, an `LX` extension block with average speed
/// and cadence. Running laps report cadence through `AvgRunCadence` /
/// `MaxRunCadence`; biking laps through a bare `Cadence` and `MaxBikeCadence`.
pub fn generate_tcx(activities: &[GeneratedActivity]) -> Vec<u8> {
    let mut tcx = String::new();

    tcx.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    tcx.push('\n');
    tcx.push_str(r#"<TrainingCenterDatabase"#);
    tcx.push_str(r#" xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2""#);
    tcx.push_str(r#" xmlns:ns3="http://www.garmin.com/xmlschemas/ActivityExtension/v2""#);
    tcx.push_str(r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
    tcx.push('\n');
    tcx.push_str("  <Activities>\n");

    for activity in activities {
        write_activity(&mut tcx, activity);
    }

    tcx.push_str("  </Activities>\n");
    tcx.push_str("</TrainingCenterDatabase>\n");

    tcx.into_bytes()
}

fn write_activity(tcx: &mut String, activity: &GeneratedActivity) {
    let _ = writeln!(
        tcx,
        r#"    <Activity Sport="{}">"#,
        activity.sport.as_tcx_str()
    );
    let _ = writeln!(tcx, "      <Id>{}</Id>", activity.id);

    for lap in &activity.laps {
        write_lap(tcx, lap, activity.sport, activity.with_lap_extensions);
    }

    let _ = writeln!(tcx, "      <Notes>{}</Notes>", escape_xml(&activity.name));
    tcx.push_str("    </Activity>\n");
}

fn write_lap(tcx: &mut String, lap: &GeneratedLap, sport: Sport, with_extensions: bool) {
    let _ = writeln!(tcx, r#"      <Lap StartTime="{}">"#, format_time(lap.start_time));
    let _ = writeln!(tcx, "        <TotalTimeSeconds>{}</TotalTimeSeconds>", lap.total_time_secs());
    let _ = writeln!(tcx, "        <DistanceMeters>{}</DistanceMeters>", lap.distance_meters);
    let _ = writeln!(tcx, "        <MaximumSpeed>{}</MaximumSpeed>", lap.max_speed());
    let _ = writeln!(tcx, "        <Calories>{}</Calories>", lap.calories());
    let _ = writeln!(
        tcx,
        "        <AverageHeartRateBpm><Value>{}</Value></AverageHeartRateBpm>",
        lap.avg_heart_rate()
    );
    let _ = writeln!(
        tcx,
        "        <MaximumHeartRateBpm><Value>{}</Value></MaximumHeartRateBpm>",
        lap.max_heart_rate()
    );
    tcx.push_str("        <Intensity>Active</Intensity>\n");
    if sport == Sport::Biking {
        let _ = writeln!(tcx, "        <Cadence>{}</Cadence>", lap.avg_cadence());
    }
    tcx.push_str("        <TriggerMethod>Manual</TriggerMethod>\n");

    tcx.push_str("        <Track>\n");
    for point in &lap.trackpoints {
        write_trackpoint(tcx, point);
    }
    tcx.push_str("        </Track>\n");

    if with_extensions {
        tcx.push_str("        <Extensions>\n          <ns3:LX>\n");
        let _ = writeln!(tcx, "            <ns3:AvgSpeed>{}</ns3:AvgSpeed>", lap.avg_speed());
        if sport == Sport::Biking {
            let _ = writeln!(
                tcx,
                "            <ns3:MaxBikeCadence>{}</ns3:MaxBikeCadence>",
                lap.max_cadence()
            );
        } else {
            let _ = writeln!(
                tcx,
                "            <ns3:AvgRunCadence>{}</ns3:AvgRunCadence>",
                lap.avg_cadence()
            );
            let _ = writeln!(
                tcx,
                "            <ns3:MaxRunCadence>{}</ns3:MaxRunCadence>",
                lap.max_cadence()
            );
        }
        tcx.push_str("          </ns3:LX>\n        </Extensions>\n");
    }

    tcx.push_str("      </Lap>\n");
}

fn write_trackpoint(tcx: &mut String, point: &GeneratedTrackpoint) {
    tcx.push_str("          <Trackpoint>\n");
    let _ = writeln!(tcx, "            <Time>{}</Time>", format_time(point.time));

    if let Some((lat, lon)) = point.position {
        let _ = writeln!(
            tcx,
            "            <Position><LatitudeDegrees>{lat:.7}</LatitudeDegrees><LongitudeDegrees>{lon:.7}</LongitudeDegrees></Position>"
        );
    }

    let _ = writeln!(tcx, "            <DistanceMeters>{:.2}</DistanceMeters>", point.distance);
    let _ = writeln!(
        tcx,
        "            <HeartRateBpm><Value>{}</Value></HeartRateBpm>",
        point.heart_rate
    );
    let _ = writeln!(tcx, "            <Cadence>{}</Cadence>", point.cadence);

    if let Some(speed) = point.speed {
        let _ = writeln!(
            tcx,
            "            <Extensions><ns3:TPX><ns3:Speed>{speed}</ns3:Speed></ns3:TPX></Extensions>"
        );
    }

    tcx.push_str("          </Trackpoint>\n");
}

fn format_time(time: OffsetDateTime) -> String {
    time.format(&Rfc3339).unwrap_or_default()
}

/// Escapes XML special characters in a string.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
