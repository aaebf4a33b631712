use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

use fixture_reminder::fixture::models::RawFixtureRecord;
use fixture_reminder::fixture::{format_message, select_next};

fn venue_tz() -> FixedOffset {
    FixedOffset::east_opt(10 * 3600).unwrap()
}

fn record(date_label: &str, home: &str, away: &str) -> RawFixtureRecord {
    RawFixtureRecord {
        date_label: date_label.to_string(),
        time_label: "6:10 PM".to_string(),
        home_team: Some(home.to_string()),
        away_team: Some(away.to_string()),
        venue: Some("Field 1".to_string()),
        ..Default::default()
    }
}

/// End-to-end selection and formatting: a past record followed by the
/// tracked team's next game, with a machine-readable kickoff instant.
#[test]
fn test_select_and_format_next_game() {
    let records = vec![
        record("THURSDAY 7TH AUGUST", "A", "B"),
        RawFixtureRecord {
            date_label: "THURSDAY 15TH AUGUST\nRound 6".to_string(),
            time_label: "7:50 PM".to_string(),
            kickoff_utc: Some(Utc.with_ymd_and_hms(2025, 8, 15, 9, 50, 0).unwrap()),
            home_team: Some("UQ Alphas".to_string()),
            away_team: Some("C".to_string()),
            venue: Some("Field 2".to_string()),
        },
    ];

    let now = venue_tz().with_ymd_and_hms(2025, 8, 10, 0, 0, 0).unwrap();
    let fixture = select_next(&records, now).expect("a future fixture exists");

    assert_eq!(
        fixture.game_date.date,
        NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
    );
    assert_eq!(fixture.home_team, "UQ Alphas");
    assert_eq!(fixture.away_team, "C");

    let message = format_message(&fixture, "UQ Alphas", venue_tz(), 50);
    assert!(message.contains("📅 *THURSDAY 15TH AUGUST* (Round 6)"));
    // 09:50 UTC is 7:50pm at the venue; warm-up is 50 minutes earlier
    assert!(message.contains("🕖 Kickoff: *7:50pm*"));
    assert!(message.contains("⏱️ Warm-up: *7:00pm*"));
    assert!(message.contains("🏉 *UQ Alphas* vs *C*"));
    assert!(message.contains("📍 Venue: *Field 2*"));
}

/// Malformed records never abort the scan; a trailing valid record is still
/// selected.
#[test]
fn test_noise_before_a_valid_record() {
    let records = vec![
        RawFixtureRecord::default(),
        record("FIXTURE POSTPONED", "A", "B"),
        record("THURSDAY 32ND AUGUST", "C", "D"),
        RawFixtureRecord {
            home_team: None,
            ..record("THURSDAY 21ST AUGUST", "", "F")
        },
        record("THURSDAY 28TH AUGUST", "UQ Alphas", "Wildcats"),
    ];

    let now = venue_tz().with_ymd_and_hms(2025, 8, 10, 0, 0, 0).unwrap();
    let fixture = select_next(&records, now).expect("the trailing record qualifies");
    assert_eq!(fixture.away_team, "Wildcats");
}

#[test]
fn test_no_qualifying_record_is_none() {
    let now = venue_tz().with_ymd_and_hms(2025, 8, 20, 0, 0, 0).unwrap();

    assert!(select_next(&[], now).is_none());

    let all_past = vec![
        record("THURSDAY 7TH AUGUST", "A", "B"),
        record("THURSDAY 14TH AUGUST", "C", "D"),
    ];
    assert!(select_next(&all_past, now).is_none());
}

/// Formatting is byte-identical across calls for the same fixture.
#[test]
fn test_formatting_is_deterministic() {
    let records = vec![record("THURSDAY 28TH AUGUST", "UQ Alphas", "Wildcats")];
    let now = venue_tz().with_ymd_and_hms(2025, 8, 10, 0, 0, 0).unwrap();
    let fixture = select_next(&records, now).unwrap();

    let first = format_message(&fixture, "UQ Alphas", venue_tz(), 50);
    let second = format_message(&fixture, "UQ Alphas", venue_tz(), 50);
    assert_eq!(first, second);
}

/// Without a machine-readable instant the page's own label passes through,
/// and the warm-up is still derived from it when it parses.
#[test]
fn test_raw_time_label_flow() {
    let records = vec![record("THURSDAY 28TH AUGUST", "UQ Alphas", "Wildcats")];
    let now = venue_tz().with_ymd_and_hms(2025, 8, 10, 0, 0, 0).unwrap();
    let fixture = select_next(&records, now).unwrap();

    let message = format_message(&fixture, "UQ Alphas", venue_tz(), 50);
    assert!(message.contains("🕖 Kickoff: *6:10 PM*"));
    assert!(message.contains("⏱️ Warm-up: *5:20pm*"));
}
