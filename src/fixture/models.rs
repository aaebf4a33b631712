use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, TimeZone, Utc};

/// One fixture card as extracted from the competition page, in page order.
///
/// Read-only to the core and alive for a single run. Team names and venue
/// are optional because the page does not always render them; the selector
/// treats a qualifying record with missing teams as malformed and skips it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFixtureRecord {
    /// Human-oriented date header, e.g. "THURSDAY 31ST JULY" with an
    /// optional round annotation on a following line.
    pub date_label: String,
    /// Kickoff display text as rendered on the page.
    pub time_label: String,
    /// Machine-readable kickoff instant from the `<time datetime="...">`
    /// attribute, when the page provides one.
    pub kickoff_utc: Option<DateTime<Utc>>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub venue: Option<String>,
}

/// How the month name in a date label was resolved.
///
/// An unrecognized month name falls back to January rather than failing.
/// The fallback is deliberate legacy behavior; carrying it as a variant lets
/// callers and tests distinguish it from a genuine January.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthResolution {
    Recognized,
    DefaultedToJanuary { raw: String },
}

/// A calendar date resolved from a date label, bound to the fixed venue
/// timezone. The year never appears in source text; it is inferred from the
/// reference instant at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDate {
    pub date: NaiveDate,
    pub month: MonthResolution,
}

impl NormalizedDate {
    /// The date treated as local midnight in the venue timezone, which is
    /// what the selector compares against "now".
    pub fn local_midnight(&self, tz: FixedOffset) -> DateTime<FixedOffset> {
        let midnight = self
            .date
            .and_hms_opt(0, 0, 0)
            .expect("midnight exists for every date");
        match tz.from_local_datetime(&midnight) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(earliest, _) => earliest,
            // Fixed offsets have no gaps; kept for totality.
            LocalResult::None => tz.from_utc_datetime(&midnight),
        }
    }
}

/// Result of parsing a date label: the normalized date plus any trailing
/// round/competition annotation found after the first line break.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDateLabel {
    pub date: NormalizedDate,
    pub round: Option<String>,
}

/// The fixture chosen by the selector, ready for formatting.
///
/// Invariant: `game_date` was strictly after "now" at selection time and
/// both team names were resolvable. Created once per run and consumed
/// immediately by the formatter; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFixture {
    /// First line of the raw date label, as displayed in the reminder.
    pub date_line: String,
    pub round: Option<String>,
    pub game_date: NormalizedDate,
    pub home_team: String,
    pub away_team: String,
    pub time_label: String,
    pub kickoff_utc: Option<DateTime<Utc>>,
    pub venue: Option<String>,
}
