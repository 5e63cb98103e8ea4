//! Tests for scripted games.

use simon_core::{Outcome, Timing, ViewEvent, messages};
use simon_says::{SimulationOptions, SimulationReport, simulate};

fn notices(report: &SimulationReport) -> Vec<&str> {
    report
        .transcript()
        .iter()
        .filter_map(|entry| match &entry.event {
            ViewEvent::Notify(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

fn headings(report: &SimulationReport) -> Vec<&str> {
    report
        .transcript()
        .iter()
        .filter_map(|entry| match &entry.event {
            ViewEvent::Heading(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_perfect_player_wins_level_one() {
    let report = simulate(Timing::default(), &SimulationOptions::new(None, 3)).expect("simulate");

    assert_eq!(*report.outcome(), Outcome::Won);
    assert_eq!(*report.max_rounds(), 8);
    assert_eq!(*report.rounds_completed(), 8);
    assert_eq!(report.longest_sequence().len(), 8);
    assert_eq!(notices(&report), vec![messages::SUCCESS]);

    let rounds: Vec<&str> = headings(&report)
        .into_iter()
        .filter(|h| h.starts_with("Round"))
        .collect();
    assert_eq!(rounds.len(), 8);
    assert_eq!(rounds.first(), Some(&"Round 1 of 8"));
    assert_eq!(rounds.last(), Some(&"Round 8 of 8"));
}

#[test]
fn test_mistake_loses_on_requested_round() {
    let options = SimulationOptions::new(Some(2), 11).with_mistake_at(Some(4));
    let report = simulate(Timing::default(), &options).expect("simulate");

    assert_eq!(*report.outcome(), Outcome::Lost);
    assert_eq!(*report.max_rounds(), 14);
    assert_eq!(*report.rounds_completed(), 3);
    assert_eq!(report.longest_sequence().len(), 4);
    assert_eq!(notices(&report), vec![messages::FAILURE]);
    assert_eq!(headings(&report).last(), Some(&messages::IDLE_TITLE));
}

#[test]
fn test_mistake_past_last_round_is_never_made() {
    let options = SimulationOptions::new(Some(1), 5).with_mistake_at(Some(9));
    let report = simulate(Timing::default(), &options).expect("simulate");
    assert_eq!(*report.outcome(), Outcome::Won);
}

#[test]
fn test_transcript_times_are_monotonic() {
    let report = simulate(Timing::default(), &SimulationOptions::new(Some(1), 8)).expect("simulate");
    let times: Vec<u64> = report.transcript().iter().map(|entry| entry.at_ms).collect();
    assert!(times.windows(2).all(|pair| pair[0] <= pair[1]));

    // The first pad lights one step after the start.
    let first_light = report
        .transcript()
        .iter()
        .find(|entry| matches!(entry.event, ViewEvent::Activate(_)))
        .expect("a pad lights");
    assert_eq!(first_light.at_ms, 600);
    assert_eq!(*report.elapsed_ms(), times.last().copied().unwrap_or_default());
}

#[test]
fn test_same_seed_same_game() {
    let options = SimulationOptions::new(Some(1), 21);
    let first = simulate(Timing::default(), &options).expect("simulate");
    let second = simulate(Timing::default(), &options).expect("simulate");
    assert_eq!(first, second);
}

#[test]
fn test_report_serializes_to_json() {
    let options = SimulationOptions::new(Some(1), 2).with_mistake_at(Some(1));
    let report = simulate(Timing::default(), &options).expect("simulate");
    let json = serde_json::to_value(&report).expect("serialize");

    assert_eq!(json["outcome"], "Lost");
    assert_eq!(json["rounds_completed"], 0);
    let first = &json["transcript"][0];
    assert_eq!(first["at_ms"], 0);
    assert!(first["event"]["event"].is_string());
}
