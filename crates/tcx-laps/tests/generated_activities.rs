//! End-to-end parsing of generated TCX documents.
//!
//! Activities come from the `test-data` generators, which know the summary
//! values they wrote; the parsed records are checked against those.

use rand::{SeedableRng, rngs::StdRng};
use tcx_laps::prelude::*;
use test_data::prelude::*;

fn generate(config: &ActivityConfig, profile: &dyn AthleteProfile, seed: u64) -> GeneratedActivity {
    let mut rng = StdRng::seed_from_u64(seed);
    ActivityGenerator::new().generate(config, profile, &mut rng)
}

fn parse(activities: &[GeneratedActivity], config: ParserConfig) -> Vec<ActivityRecord> {
    let xml = generate_tcx(activities);
    ActivityParser::new(config)
        .parse_bytes(&xml)
        .expect("generated TCX should parse")
}

#[test]
fn running_laps_match_generated_values() {
    let config = ActivityConfig::running().laps(4).pause_probability(0.2);
    let generated = generate(&config, &RunnerProfile::default(), 12345);
    let records = parse(std::slice::from_ref(&generated), ParserConfig::default());

    assert_eq!(records.len(), 1);
    let run = &records[0];
    assert_eq!(run.sport, Some(SportType::Run));
    assert_eq!(run.id.as_deref(), Some(generated.id.as_str()));
    assert_eq!(run.laps.len(), 4);

    for (parsed, expected) in run.laps.iter().zip(&generated.laps) {
        assert_eq!(parsed.start_time, Some(expected.start_time));
        assert_eq!(parsed.time, Some(expected.total_time_secs()));
        assert_eq!(parsed.distance, Some(expected.distance_meters));
        assert_eq!(parsed.avg_speed, Some(expected.avg_speed()));
        assert_eq!(parsed.max_speed, Some(expected.max_speed()));
        assert_eq!(parsed.avg_hr, Some(expected.avg_heart_rate()));
        assert_eq!(parsed.max_hr, Some(expected.max_heart_rate()));
        assert_eq!(parsed.avg_cadence, Some(expected.avg_cadence()));
        assert_eq!(parsed.max_cadence, Some(expected.max_cadence()));
        assert_eq!(parsed.calories, Some(expected.calories()));
        assert_eq!(parsed.moving_time, Some(expected.moving_time(1.0)));
    }
}

#[test]
fn running_totals_combine_laps() {
    let config = ActivityConfig::running().laps(3).pause_probability(0.15);
    let generated = generate(&config, &RunnerProfile::recreational(), 2024);
    let run = parse(std::slice::from_ref(&generated), ParserConfig::default()).remove(0);

    assert_eq!(run.totals.start_time, Some(generated.laps[0].start_time));
    assert_eq!(run.totals.distance, Some(generated.total_distance()));
    assert_eq!(run.totals.time, Some(generated.total_time()));
    assert_eq!(run.totals.moving_time, Some(generated.moving_time(1.0)));

    let max_hr = generated.laps.iter().map(|lap| lap.max_heart_rate()).max();
    assert_eq!(run.totals.max_hr, max_hr);

    let weighted: f64 = generated
        .laps
        .iter()
        .map(|lap| lap.avg_speed() * lap.total_time_secs())
        .sum();
    let avg_speed = run.totals.avg_speed.expect("combined average speed");
    assert!((avg_speed - weighted / generated.total_time()).abs() < 1e-9);

    let avg_hr = run.totals.avg_hr.expect("combined average heart rate");
    let laps_min = run.laps.iter().filter_map(|lap| lap.avg_hr).min().unwrap();
    let laps_max = run.laps.iter().filter_map(|lap| lap.avg_hr).max().unwrap();
    assert!((laps_min..=laps_max).contains(&avg_hr));
}

#[test]
fn rides_are_classified_by_positions() {
    let outdoor = generate(&ActivityConfig::biking(), &CyclistProfile::default(), 7);
    let indoor = generate(&ActivityConfig::indoor_biking(), &CyclistProfile::default(), 8);
    let records = parse(&[outdoor, indoor.clone()], ParserConfig::default());

    assert_eq!(records[0].sport, Some(SportType::BikeRide));
    assert_eq!(records[1].sport, Some(SportType::IndoorBikeRide));

    // Bike cadence comes from the lap's bare Cadence and MaxBikeCadence.
    for (parsed, expected) in records[1].laps.iter().zip(&indoor.laps) {
        assert_eq!(parsed.avg_cadence, Some(expected.avg_cadence()));
        assert_eq!(parsed.max_cadence, Some(expected.max_cadence()));
    }
}

#[test]
fn activities_keep_document_order() {
    let first = generate(&ActivityConfig::running().laps(1), &RunnerProfile::default(), 1);
    let second = generate(
        &ActivityConfig::biking()
            .laps(2)
            .starting_at(first.laps[0].start_time + time::Duration::hours(3)),
        &CyclistProfile::recreational(),
        2,
    );
    let mut other = generate(&ActivityConfig::running().laps(1), &RunnerProfile::elite(), 3);
    other.sport = Sport::Other;

    let records = parse(&[first.clone(), second.clone(), other], ParserConfig::default());

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id.as_deref(), Some(first.id.as_str()));
    assert_eq!(records[1].id.as_deref(), Some(second.id.as_str()));
    assert_eq!(records[1].laps.len(), 2);
    assert_eq!(records[2].sport, None);
    assert_eq!(records[2].laps.len(), 1);
}

#[test]
fn missing_avg_speed_extension_depends_on_policy() {
    let config = ActivityConfig::running().without_lap_extensions();
    let generated = generate(&config, &RunnerProfile::default(), 42);
    let xml = generate_tcx(std::slice::from_ref(&generated));

    let err = ActivityParser::default().parse_bytes(&xml).unwrap_err();
    assert!(matches!(err, SummaryError::MissingField(ref path) if path == "Extensions/LX/AvgSpeed"));

    let lenient = ParserConfig::default().with_avg_speed_policy(AvgSpeedPolicy::Lenient);
    let run = ActivityParser::new(lenient).parse_bytes(&xml).unwrap().remove(0);
    assert_eq!(run.totals.avg_speed, None);
    // Running laps carry cadence only in the extension block.
    assert_eq!(run.totals.avg_cadence, None);
    assert_eq!(run.totals.max_cadence, None);
    assert_eq!(run.totals.distance, Some(generated.total_distance()));
}

#[test]
fn moving_time_follows_threshold() {
    let generated = generate(&ActivityConfig::running(), &RunnerProfile::default(), 11);

    let stationary = ParserConfig::default().with_threshold(100.0).unwrap();
    let run = parse(std::slice::from_ref(&generated), stationary).remove(0);
    assert_eq!(run.totals.moving_time, None);
    assert!(run.laps.iter().all(|lap| lap.moving_time == Some(0.0)));

    let everything = ParserConfig::default().with_threshold(0.0).unwrap();
    let run = parse(std::slice::from_ref(&generated), everything).remove(0);
    assert_eq!(run.totals.moving_time, Some(generated.moving_time(0.0)));
}

#[test]
fn dropped_speed_samples_do_not_count() {
    let config = ActivityConfig::running().pause_probability(0.0).speed_dropout(0.25);
    let generated = generate(&config, &RunnerProfile::default(), 77);
    let run = parse(std::slice::from_ref(&generated), ParserConfig::default()).remove(0);

    for (parsed, expected) in run.laps.iter().zip(&generated.laps) {
        let moving = parsed.moving_time.unwrap();
        assert_eq!(moving, expected.moving_time(1.0));
        assert!(moving < expected.total_time_secs() - 5.0);
    }
}

#[test]
fn records_serialize_with_kebab_case_keys() {
    let generated = generate(&ActivityConfig::indoor_biking().laps(1), &CyclistProfile::default(), 5);
    let records = parse(&[generated], ParserConfig::default());

    let json = serde_json::to_value(&records).unwrap();
    let activity = &json[0];
    assert_eq!(activity["type"], "indoor-bike-ride");
    assert_eq!(activity["start-time"], "2024-03-01T07:00:00Z");
    assert!(activity["avg-speed"].is_number());
    assert!(activity["max-hr"].is_number());
    assert_eq!(activity["laps"].as_array().map(Vec::len), Some(1));
    assert!(activity.get("avg_speed").is_none());

    let round_trip: Vec<ActivityRecord> = serde_json::from_value(json).unwrap();
    assert_eq!(round_trip, records);
}
