//! Selection of the next upcoming fixture from the page's card list.

use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::fixture::date_label::parse_date_label;
use crate::fixture::models::{RawFixtureRecord, SelectedFixture};

/// Returns the first record in page order whose normalized date (taken as
/// local midnight in the venue timezone of `now`) is strictly after `now`.
///
/// The page is assumed to list fixtures chronologically; no sort is applied,
/// so the first qualifying record is the earliest upcoming fixture by list
/// order. Records with unparsable dates are skipped as data-quality noise,
/// and a qualifying record with fewer than two resolvable team names is
/// skipped as malformed. Returns `None` when nothing qualifies.
pub fn select_next(
    records: &[RawFixtureRecord],
    now: DateTime<FixedOffset>,
) -> Option<SelectedFixture> {
    let tz = *now.offset();

    for (index, record) in records.iter().enumerate() {
        let parsed = match parse_date_label(&record.date_label, now) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(index, label = %record.date_label, error = %e, "skipping record with unparsable date");
                continue;
            }
        };

        if parsed.date.local_midnight(tz) <= now {
            continue;
        }

        let (Some(home), Some(away)) = (
            non_empty(record.home_team.as_deref()),
            non_empty(record.away_team.as_deref()),
        ) else {
            debug!(index, label = %record.date_label, "skipping qualifying record with missing team names");
            continue;
        };

        return Some(SelectedFixture {
            date_line: record
                .date_label
                .lines()
                .next()
                .unwrap_or_default()
                .trim()
                .to_string(),
            round: parsed.round,
            game_date: parsed.date,
            home_team: home.to_string(),
            away_team: away.to_string(),
            time_label: record.time_label.clone(),
            kickoff_utc: record.kickoff_utc,
            venue: record.venue.clone(),
        });
    }

    None
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
