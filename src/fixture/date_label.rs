//! Parsing of human-oriented fixture date headers.
//!
//! The competition page renders dates like `THURSDAY 31ST JULY`, sometimes
//! with a round annotation on the next line and never with a year. Parsing
//! recovers the (day, month) pair and infers the year from a reference
//! instant in the venue timezone.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};

use crate::error::DateParseError;
use crate::fixture::models::{MonthResolution, NormalizedDate, ParsedDateLabel};

/// Fixed month-name table. Lookup is case-insensitive.
const MONTHS: [(&str, u32); 12] = [
    ("JANUARY", 1),
    ("FEBRUARY", 2),
    ("MARCH", 3),
    ("APRIL", 4),
    ("MAY", 5),
    ("JUNE", 6),
    ("JULY", 7),
    ("AUGUST", 8),
    ("SEPTEMBER", 9),
    ("OCTOBER", 10),
    ("NOVEMBER", 11),
    ("DECEMBER", 12),
];

/// Parses a fixture date header into a [`NormalizedDate`] plus any trailing
/// round annotation.
///
/// The label is split on its first line break: the first line must tokenize
/// into at least `{weekday} {ordinal day} {month name}`, and any remaining
/// text becomes the round annotation. The weekday token is accepted without
/// cross-checking it against the computed date.
///
/// Year inference: the year of `reference_now` (already in the venue
/// timezone), plus one when the parsed month is numerically earlier than the
/// current month. This handles the December-to-January rollover of a
/// forward-looking fixture list; far from a year boundary it can pick the
/// wrong year, which is accepted legacy behavior.
///
/// An unrecognized month name resolves to January and is reported via
/// [`MonthResolution::DefaultedToJanuary`] rather than as an error.
///
/// # Arguments
/// * `label` - Raw date header text from the fixture card
/// * `reference_now` - Current instant in the venue timezone
///
/// # Returns
/// * `Ok(ParsedDateLabel)` - Normalized date and optional round text
/// * `Err(DateParseError)` - Malformed day token, too few tokens, or an
///   impossible calendar date
pub fn parse_date_label(
    label: &str,
    reference_now: DateTime<FixedOffset>,
) -> Result<ParsedDateLabel, DateParseError> {
    let (date_line, round) = split_round_annotation(label);

    if date_line.is_empty() {
        return Err(DateParseError::EmptyLabel);
    }

    let tokens: Vec<&str> = date_line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(DateParseError::TooFewTokens {
            found: tokens.len(),
        });
    }

    // tokens[0] is the weekday name; parsed but not validated.
    let day_token = strip_ordinal_suffix(tokens[1]);
    let day: u32 = day_token
        .parse()
        .map_err(|_| DateParseError::DayNotNumeric(tokens[1].to_string()))?;
    if !(1..=31).contains(&day) {
        return Err(DateParseError::DayOutOfRange(day));
    }

    let (month_num, month_resolution) = match month_number(tokens[2]) {
        Some(n) => (n, MonthResolution::Recognized),
        None => (
            1,
            MonthResolution::DefaultedToJanuary {
                raw: tokens[2].to_string(),
            },
        ),
    };

    let mut year = reference_now.year();
    if month_num < reference_now.month() {
        year += 1;
    }

    let date = NaiveDate::from_ymd_opt(year, month_num, day).ok_or(
        DateParseError::ImpossibleDate {
            year,
            month: month_num,
            day,
        },
    )?;

    Ok(ParsedDateLabel {
        date: NormalizedDate {
            date,
            month: month_resolution,
        },
        round,
    })
}

/// Splits a label into its date line and any round annotation text found
/// after the first line break. Multi-line annotations collapse to one line.
fn split_round_annotation(label: &str) -> (&str, Option<String>) {
    match label.split_once('\n') {
        Some((first, rest)) => {
            let round: String = rest
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            (first.trim(), (!round.is_empty()).then_some(round))
        }
        None => (label.trim(), None),
    }
}

/// Strips one trailing ordinal suffix (ST/ND/RD/TH, any case) from a day
/// token, leaving other tokens untouched.
fn strip_ordinal_suffix(token: &str) -> &str {
    if token.len() >= 2 && token.is_char_boundary(token.len() - 2) {
        let (head, tail) = token.split_at(token.len() - 2);
        if matches!(
            tail.to_ascii_uppercase().as_str(),
            "ST" | "ND" | "RD" | "TH"
        ) {
            return head;
        }
    }
    token
}

/// Case-insensitive month-name lookup in the fixed table.
fn month_number(name: &str) -> Option<u32> {
    let upper = name.to_ascii_uppercase();
    MONTHS.iter().find(|(m, _)| *m == upper).map(|&(_, n)| n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn venue_tz() -> FixedOffset {
        FixedOffset::east_opt(10 * 3600).unwrap()
    }

    fn reference(year: i32, month: u32, day: u32) -> DateTime<FixedOffset> {
        venue_tz()
            .with_ymd_and_hms(year, month, day, 9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parses_plain_label() {
        let parsed = parse_date_label("THURSDAY 31ST JULY", reference(2025, 7, 15)).unwrap();
        assert_eq!(
            parsed.date.date,
            NaiveDate::from_ymd_opt(2025, 7, 31).unwrap()
        );
        assert_eq!(parsed.date.month, MonthResolution::Recognized);
        assert_eq!(parsed.round, None);
    }

    #[test]
    fn test_ordinal_suffixes_and_case_are_irrelevant() {
        let now = reference(2025, 6, 1);
        for (label, day) in [
            ("MONDAY 1ST JUNE", 1),
            ("monday 2nd june", 2),
            ("Monday 3rd June", 3),
            ("MONDAY 4th JUNE", 4),
            ("MONDAY 21ST JUNE", 21),
            ("MONDAY 22ND JUNE", 22),
            ("MONDAY 23RD JUNE", 23),
            ("MONDAY 30TH JUNE", 30),
        ] {
            let parsed = parse_date_label(label, now).unwrap();
            assert_eq!(
                parsed.date.date,
                NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
                "label: {label}"
            );
        }
    }

    #[test]
    fn test_round_annotation_is_split_off() {
        let parsed =
            parse_date_label("THURSDAY 31ST JULY\nRound 5", reference(2025, 7, 15)).unwrap();
        assert_eq!(parsed.round.as_deref(), Some("Round 5"));
        assert_eq!(
            parsed.date.date,
            NaiveDate::from_ymd_opt(2025, 7, 31).unwrap()
        );

        // Multi-line annotations collapse to one line
        let parsed = parse_date_label(
            "THURSDAY 31ST JULY\nRound 5\nFinals",
            reference(2025, 7, 15),
        )
        .unwrap();
        assert_eq!(parsed.round.as_deref(), Some("Round 5 Finals"));
    }

    #[test]
    fn test_year_inference_rolls_forward_for_earlier_months() {
        // Reference in August: an earlier month means next year
        let now = reference(2025, 8, 7);
        let jan = parse_date_label("FRIDAY 2ND JANUARY", now).unwrap();
        assert_eq!(jan.date.date, NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());

        // Same month stays in the current year
        let aug = parse_date_label("FRIDAY 15TH AUGUST", now).unwrap();
        assert_eq!(aug.date.date, NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());

        // A later month stays in the current year
        let dec = parse_date_label("FRIDAY 5TH DECEMBER", now).unwrap();
        assert_eq!(dec.date.date, NaiveDate::from_ymd_opt(2025, 12, 5).unwrap());
    }

    #[test]
    fn test_unknown_month_defaults_to_january() {
        let parsed = parse_date_label("THURSDAY 13TH SMARCH", reference(2025, 8, 7)).unwrap();
        assert_eq!(
            parsed.date.month,
            MonthResolution::DefaultedToJanuary {
                raw: "SMARCH".to_string()
            }
        );
        // January is earlier than August, so the inferred year rolls forward
        assert_eq!(
            parsed.date.date,
            NaiveDate::from_ymd_opt(2026, 1, 13).unwrap()
        );
    }

    #[test]
    fn test_weekday_is_not_cross_checked() {
        // 2025-08-15 is a Friday; the wrong weekday still parses
        let parsed = parse_date_label("WEDNESDAY 15TH AUGUST", reference(2025, 8, 1)).unwrap();
        assert_eq!(
            parsed.date.date,
            NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
        );
    }

    #[test]
    fn test_too_few_tokens() {
        let err = parse_date_label("THURSDAY 31ST", reference(2025, 7, 15)).unwrap_err();
        assert_eq!(err, DateParseError::TooFewTokens { found: 2 });

        let err = parse_date_label("", reference(2025, 7, 15)).unwrap_err();
        assert_eq!(err, DateParseError::EmptyLabel);
    }

    #[test]
    fn test_non_numeric_day() {
        let err = parse_date_label("THURSDAY XXTH JULY", reference(2025, 7, 15)).unwrap_err();
        assert_eq!(err, DateParseError::DayNotNumeric("XXTH".to_string()));
    }

    #[test]
    fn test_day_out_of_range() {
        let err = parse_date_label("THURSDAY 32ND JULY", reference(2025, 7, 15)).unwrap_err();
        assert_eq!(err, DateParseError::DayOutOfRange(32));

        let err = parse_date_label("THURSDAY 0TH JULY", reference(2025, 7, 15)).unwrap_err();
        assert_eq!(err, DateParseError::DayOutOfRange(0));
    }

    #[test]
    fn test_impossible_calendar_date() {
        let err = parse_date_label("SATURDAY 31ST FEBRUARY", reference(2025, 1, 10)).unwrap_err();
        assert_eq!(
            err,
            DateParseError::ImpossibleDate {
                year: 2025,
                month: 2,
                day: 31
            }
        );
    }
}
