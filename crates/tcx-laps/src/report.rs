//! Plain-text rendering of activity records, one line per activity and an
//! indented line per lap. Values are printed in the units they were read in.

use std::fmt::Write as _;

use time::format_description::well_known::Rfc3339;

use crate::models::{ActivityRecord, LapRecord};

pub fn format_text(activities: &[ActivityRecord]) -> String {
    let mut out = String::new();

    for (index, activity) in activities.iter().enumerate() {
        let sport = activity.sport.map_or("unknown", |s| s.as_str());
        let _ = writeln!(
            out,
            "Activity {} [{sport}]{}",
            index + 1,
            format_fields(&activity.totals)
        );
        for (lap_index, lap) in activity.laps.iter().enumerate() {
            let _ = writeln!(out, "  Lap {}{}", lap_index + 1, format_fields(lap));
        }
    }

    out
}

fn format_fields(record: &LapRecord) -> String {
    let mut fields = Vec::new();

    if let Some(start) = record.start_time.and_then(|t| t.format(&Rfc3339).ok()) {
        fields.push(format!("start={start}"));
    }
    if let Some(time) = record.time {
        fields.push(format!("time={time:.1}s"));
    }
    if let Some(moving) = record.moving_time {
        fields.push(format!("moving={moving:.1}s"));
    }
    if let Some(distance) = record.distance {
        fields.push(format!("distance={distance:.1}m"));
    }
    if let Some(speed) = record.avg_speed {
        fields.push(format!("avg_speed={speed:.2}m/s"));
    }
    if let Some(speed) = record.max_speed {
        fields.push(format!("max_speed={speed:.2}m/s"));
    }
    if let Some(hr) = record.avg_hr {
        fields.push(format!("avg_hr={hr}bpm"));
    }
    if let Some(hr) = record.max_hr {
        fields.push(format!("max_hr={hr}bpm"));
    }
    if let Some(cadence) = record.avg_cadence {
        fields.push(format!("avg_cadence={cadence}"));
    }
    if let Some(cadence) = record.max_cadence {
        fields.push(format!("max_cadence={cadence}"));
    }
    if let Some(calories) = record.calories {
        fields.push(format!("calories={calories}"));
    }

    if fields.is_empty() {
        String::new()
    } else {
        format!(" {}", fields.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SportType;
    use time::macros::datetime;

    #[test]
    fn test_format_text() {
        let lap = LapRecord {
            start_time: Some(datetime!(2024-03-01 07:00:00 UTC)),
            time: Some(300.0),
            distance: Some(1000.0),
            avg_hr: Some(142),
            ..Default::default()
        };
        let activities = vec![
            ActivityRecord {
                sport: Some(SportType::IndoorBikeRide),
                id: None,
                totals: lap.clone(),
                laps: vec![lap],
            },
            ActivityRecord::default(),
        ];

        let text = format_text(&activities);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Activity 1 [indoor-bike-ride] start=2024-03-01T07:00:00Z time=300.0s distance=1000.0m avg_hr=142bpm",
                "  Lap 1 start=2024-03-01T07:00:00Z time=300.0s distance=1000.0m avg_hr=142bpm",
                "Activity 2 [unknown]",
            ]
        );
    }
}
