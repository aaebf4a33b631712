//! One-shot run flow: fetch the page, pick the next fixture, format the
//! reminder and hand it to the delivery collaborator.

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, TimeZone, Utc};
use tracing::{error, info, warn};

use crate::cli::Args;
use crate::config::Config;
use crate::delivery::{SendOutcome, UltramsgClient};
use crate::error::AppError;
use crate::fixture::date_label::parse_date_label;
use crate::fixture::message::format_message;
use crate::fixture::models::RawFixtureRecord;
use crate::fixture::selector::select_next;
use crate::scrape::{FixtureScraper, WebHtmlFetcher};

/// Runs the full flow once. Delivery failures are reported to the operator
/// and logged but never abort the process; only acquisition and setup
/// failures propagate.
pub async fn run(args: &Args, config: &Config) -> Result<(), AppError> {
    let tz = config.venue_timezone();
    let now = resolve_now(args.as_of.as_deref(), tz)?;

    let fetcher = WebHtmlFetcher::new(config.http_timeout_seconds)?;
    let scraper = FixtureScraper::new(fetcher);
    let records = scraper.fetch_fixtures(&config.competition_url).await?;

    if args.preview {
        print!("{}", build_preview(&records, now));
        return Ok(());
    }

    let Some(fixture) = select_next(&records, now) else {
        println!("⚠️ No upcoming game found.");
        return Ok(());
    };
    info!(
        date = %fixture.game_date.date,
        home = %fixture.home_team,
        away = %fixture.away_team,
        "selected next fixture"
    );

    let message = format_message(
        &fixture,
        &config.tracked_team,
        tz,
        config.warmup_offset_minutes,
    );
    println!("{message}");

    if args.dry_run {
        info!("dry run; nothing sent");
        return Ok(());
    }

    deliver(args, config, &message).await;
    Ok(())
}

/// "Now" in the venue timezone, or local midnight of the `--as-of` date.
fn resolve_now(
    as_of: Option<&str>,
    tz: FixedOffset,
) -> Result<DateTime<FixedOffset>, AppError> {
    match as_of {
        Some(raw) => {
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
                AppError::datetime_parse_error(format!("invalid --as-of date '{raw}': {e}"))
            })?;
            let midnight = date
                .and_hms_opt(0, 0, 0)
                .expect("midnight exists for every date");
            match tz.from_local_datetime(&midnight) {
                LocalResult::Single(dt) => Ok(dt),
                LocalResult::Ambiguous(earliest, _) => Ok(earliest),
                LocalResult::None => Ok(tz.from_utc_datetime(&midnight)),
            }
        }
        None => Ok(Utc::now().with_timezone(&tz)),
    }
}

/// The `--preview` walkthrough: every card with its parsed date and
/// FUTURE/PAST status, marking the record the selector would pick.
fn build_preview(records: &[RawFixtureRecord], now: DateTime<FixedOffset>) -> String {
    let tz = *now.offset();
    let mut out = String::new();
    let mut selected_marked = false;

    out.push_str(&format!(
        "🔍 Evaluating fixtures as of {}\n",
        now.format("%Y-%m-%d")
    ));
    out.push_str(&"=".repeat(60));
    out.push('\n');

    for (index, record) in records.iter().enumerate() {
        let number = index + 1;
        let date_line = record.date_label.lines().next().unwrap_or_default().trim();
        match parse_date_label(&record.date_label, now) {
            Ok(parsed) => {
                let is_future = parsed.date.local_midnight(tz) > now;
                let status = if is_future { "🟢 FUTURE" } else { "🔴 PAST" };
                out.push_str(&format!("Game {number}: {date_line}\n"));
                out.push_str(&format!("  Parsed date: {}\n", parsed.date.date));
                out.push_str(&format!("  Status: {status}\n"));
                match (&record.home_team, &record.away_team) {
                    (Some(home), Some(away)) => {
                        out.push_str(&format!("  Teams: {home} vs {away}\n"));
                        if is_future && !selected_marked {
                            out.push_str("  🎯 SELECTED AS NEXT GAME!\n");
                            selected_marked = true;
                        }
                    }
                    _ => out.push_str("  Teams: incomplete (would be skipped)\n"),
                }
                out.push_str(&format!("  Time: {}\n", record.time_label));
                out.push_str(&format!(
                    "  Venue: {}\n",
                    record.venue.as_deref().unwrap_or("Not found")
                ));
            }
            Err(e) => {
                out.push_str(&format!("Game {number}: {date_line}\n"));
                out.push_str(&format!("  Unparsable date ({e}); skipped\n"));
            }
        }
        out.push_str(&"-".repeat(40));
        out.push('\n');
    }

    if !selected_marked {
        out.push_str("❌ No future games found\n");
    }
    out
}

/// Sends the reminder to the chosen recipients, reporting each outcome.
/// An explicit `--to` recipient replaces the configured group and skips the
/// secondary group.
async fn deliver(args: &Args, config: &Config, message: &str) {
    let client = match UltramsgClient::new(config.credential(), config.http_timeout_seconds) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "could not construct gateway client");
            println!("❌ Error sending WhatsApp message: {e}");
            return;
        }
    };

    if config.has_placeholder_credentials() {
        warn!("gateway credentials are placeholders; the gateway will reject this send");
    }

    let recipients: Vec<&str> = match &args.recipient {
        Some(explicit) => vec![explicit.as_str()],
        None => {
            let mut list = vec![config.default_group_id.as_str()];
            if let Some(secondary) = &config.secondary_group_id {
                list.push(secondary.as_str());
            }
            list
        }
    };

    for recipient in recipients {
        info!(recipient, "sending reminder");
        match client.send_chat(recipient, message).await {
            Ok(SendOutcome::Sent) => {
                println!("✅ Message sent successfully to {recipient}");
            }
            Ok(SendOutcome::Rejected { error }) => {
                error!(recipient, error, "gateway rejected the message");
                println!("❌ Failed to send message: {error}");
            }
            Err(e) => {
                error!(recipient, error = %e, "message delivery failed");
                println!("❌ Error sending WhatsApp message: {e}");
            }
        }
    }
}
