//! Reminder message formatting.

use chrono::FixedOffset;

use crate::fixture::kickoff::{compute_warmup, localize_kickoff};
use crate::fixture::models::SelectedFixture;

/// Renders the reminder for a selected fixture.
///
/// Fixed multi-line template using WhatsApp `*bold*` markers: date plus
/// round header, warm-up line, kickoff line, teams line, venue line. When
/// the tracked team name appears in either team slot (case-insensitive),
/// that slot renders as the configured label, preserving which side the team
/// was actually on. Pure and deterministic.
pub fn format_message(
    fixture: &SelectedFixture,
    tracked_team: &str,
    tz: FixedOffset,
    warmup_offset_minutes: i64,
) -> String {
    let kickoff = localize_kickoff(fixture.kickoff_utc, &fixture.time_label, tz);
    let warmup = compute_warmup(&kickoff.to_string(), warmup_offset_minutes);

    let header = match &fixture.round {
        Some(round) => format!("📅 *{}* ({round})", fixture.date_line),
        None => format!("📅 *{}*", fixture.date_line),
    };

    let home = normalize_slot(&fixture.home_team, tracked_team);
    let away = normalize_slot(&fixture.away_team, tracked_team);
    let venue = fixture.venue.as_deref().unwrap_or("Unknown");

    format!(
        "{header}\n\
         ⏱️ Warm-up: *{warmup}*\n\
         🕖 Kickoff: *{kickoff}*\n\
         🏉 *{home}* vs *{away}*\n\
         📍 Venue: *{venue}*"
    )
}

/// Replaces a team slot with the tracked label when the tracked name appears
/// in it; other names pass through as given.
fn normalize_slot<'a>(name: &'a str, tracked_team: &'a str) -> &'a str {
    if !tracked_team.is_empty()
        && name
            .to_lowercase()
            .contains(&tracked_team.to_lowercase())
    {
        tracked_team
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    use crate::fixture::models::{MonthResolution, NormalizedDate};

    fn venue_tz() -> FixedOffset {
        FixedOffset::east_opt(10 * 3600).unwrap()
    }

    fn fixture() -> SelectedFixture {
        SelectedFixture {
            date_line: "THURSDAY 15TH AUGUST".to_string(),
            round: Some("Round 6".to_string()),
            game_date: NormalizedDate {
                date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
                month: MonthResolution::Recognized,
            },
            home_team: "UQ Alphas".to_string(),
            away_team: "Wests Wolves".to_string(),
            time_label: "7:50 PM".to_string(),
            kickoff_utc: Some(Utc.with_ymd_and_hms(2025, 8, 15, 9, 50, 0).unwrap()),
            venue: Some("Field 2".to_string()),
        }
    }

    #[test]
    fn test_full_template() {
        let message = format_message(&fixture(), "UQ Alphas", venue_tz(), 50);
        assert_eq!(
            message,
            "📅 *THURSDAY 15TH AUGUST* (Round 6)\n\
             ⏱️ Warm-up: *7:00pm*\n\
             🕖 Kickoff: *7:50pm*\n\
             🏉 *UQ Alphas* vs *Wests Wolves*\n\
             📍 Venue: *Field 2*"
        );
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let a = format_message(&fixture(), "UQ Alphas", venue_tz(), 50);
        let b = format_message(&fixture(), "UQ Alphas", venue_tz(), 50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_tracked_team_normalized_on_either_side() {
        let mut away_side = fixture();
        away_side.home_team = "Wests Wolves".to_string();
        away_side.away_team = "UQ ALPHAS (W)".to_string();
        let message = format_message(&away_side, "UQ Alphas", venue_tz(), 50);
        assert!(message.contains("🏉 *Wests Wolves* vs *UQ Alphas*"));

        let mut home_side = fixture();
        home_side.home_team = "uq alphas".to_string();
        let message = format_message(&home_side, "UQ Alphas", venue_tz(), 50);
        assert!(message.contains("🏉 *UQ Alphas* vs *Wests Wolves*"));
    }

    #[test]
    fn test_untracked_names_pass_through_as_given() {
        let mut other = fixture();
        other.home_team = "Souths".to_string();
        other.away_team = "Norths".to_string();
        let message = format_message(&other, "UQ Alphas", venue_tz(), 50);
        assert!(message.contains("🏉 *Souths* vs *Norths*"));
    }

    #[test]
    fn test_no_round_annotation_omits_parenthetical() {
        let mut plain = fixture();
        plain.round = None;
        let message = format_message(&plain, "UQ Alphas", venue_tz(), 50);
        assert!(message.starts_with("📅 *THURSDAY 15TH AUGUST*\n"));
    }

    #[test]
    fn test_missing_instant_and_venue_degrade() {
        let mut degraded = fixture();
        degraded.kickoff_utc = None;
        degraded.time_label = "TBC".to_string();
        degraded.venue = None;
        let message = format_message(&degraded, "UQ Alphas", venue_tz(), 50);
        // Raw label passes through and cannot be parsed, so warm-up is TBD
        assert!(message.contains("⏱️ Warm-up: *TBD*"));
        assert!(message.contains("🕖 Kickoff: *TBC*"));
        assert!(message.contains("📍 Venue: *Unknown*"));
    }

    #[test]
    fn test_raw_parseable_label_still_gets_warmup() {
        let mut raw = fixture();
        raw.kickoff_utc = None;
        raw.time_label = "6:10pm".to_string();
        let message = format_message(&raw, "UQ Alphas", venue_tz(), 50);
        assert!(message.contains("⏱️ Warm-up: *5:20pm*"));
        assert!(message.contains("🕖 Kickoff: *6:10pm*"));
    }
}
