//! Kickoff localization and warm-up time arithmetic.
//!
//! Both operations are best-effort by contract: a reminder without a
//! localized kickoff or a warm-up time is still worth sending, so failures
//! degrade to explicit fallback variants instead of errors.

use std::fmt;

use chrono::{DateTime, FixedOffset, Timelike, Utc};

/// Kickoff display time: either localized into the venue timezone or the
/// page's own label passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KickoffTime {
    Localized(String),
    Raw(String),
}

impl KickoffTime {
    pub fn is_localized(&self) -> bool {
        matches!(self, KickoffTime::Localized(_))
    }
}

impl fmt::Display for KickoffTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KickoffTime::Localized(s) | KickoffTime::Raw(s) => f.write_str(s),
        }
    }
}

/// Warm-up display time, or the placeholder when the kickoff label could not
/// be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarmupTime {
    Computed(String),
    Unknown,
}

impl fmt::Display for WarmupTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarmupTime::Computed(s) => f.write_str(s),
            WarmupTime::Unknown => f.write_str("TBD"),
        }
    }
}

/// Converts a kickoff instant into the venue timezone, rendered as
/// `H:MMam|pm` with no leading zero and hour 0 shown as 12.
///
/// When the page supplied no machine-readable instant (or it failed to parse
/// upstream and arrived as `None`), the raw display label is passed through
/// unchanged. This never fails.
pub fn localize_kickoff(
    kickoff_utc: Option<DateTime<Utc>>,
    raw_label: &str,
    tz: FixedOffset,
) -> KickoffTime {
    match kickoff_utc {
        Some(instant) => {
            let local = instant.with_timezone(&tz);
            KickoffTime::Localized(format_12h(local.hour(), local.minute()))
        }
        None => KickoffTime::Raw(raw_label.to_string()),
    }
}

/// Computes the warm-up time a fixed number of minutes before kickoff.
///
/// Accepts a 12-hour label (`7:50pm`, am/pm required) or, failing that, a
/// 24-hour label (`19:50`). Subtraction borrows explicitly across the
/// minute, hour and day boundaries, so `12:30am` minus 50 minutes lands on
/// `11:40pm`. Any label that cannot be understood yields
/// [`WarmupTime::Unknown`], which displays as `TBD`.
pub fn compute_warmup(kickoff_label: &str, offset_minutes: i64) -> WarmupTime {
    let Some((hour24, minute)) = parse_clock_label(kickoff_label) else {
        return WarmupTime::Unknown;
    };

    let mut hour = i64::from(hour24);
    let mut minute = i64::from(minute) - offset_minutes;
    while minute < 0 {
        minute += 60;
        hour -= 1;
    }
    while minute >= 60 {
        minute -= 60;
        hour += 1;
    }
    hour = hour.rem_euclid(24);

    WarmupTime::Computed(format_12h(hour as u32, minute as u32))
}

/// Parses `H:MM` with an optional trailing am/pm marker into a 24-hour
/// (hour, minute) pair. Returns `None` for anything out of range.
fn parse_clock_label(label: &str) -> Option<(u32, u32)> {
    let lower = label.trim().to_ascii_lowercase();

    let (clock, meridiem) = if let Some(stripped) = lower.strip_suffix("am") {
        (stripped.trim_end(), Some(false))
    } else if let Some(stripped) = lower.strip_suffix("pm") {
        (stripped.trim_end(), Some(true))
    } else {
        (lower.as_str(), None)
    };

    let (hour_part, minute_part) = clock.split_once(':')?;
    let hour: u32 = hour_part.trim().parse().ok()?;
    let minute: u32 = minute_part.trim().parse().ok()?;
    if minute > 59 {
        return None;
    }

    match meridiem {
        Some(is_pm) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            let hour24 = match (is_pm, hour) {
                (true, 12) => 12,
                (true, h) => h + 12,
                (false, 12) => 0,
                (false, h) => h,
            };
            Some((hour24, minute))
        }
        None => (hour <= 23).then_some((hour, minute)),
    }
}

/// Renders a 24-hour (hour, minute) pair in the 12-hour display convention:
/// no leading zero on the hour, hour 0 shown as 12.
fn format_12h(hour24: u32, minute: u32) -> String {
    let meridiem = if hour24 >= 12 { "pm" } else { "am" };
    let display_hour = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minute:02}{meridiem}")
}
