//! Next-Fixture WhatsApp Reminder Library
//!
//! This library finds the tracked team's next upcoming fixture on a
//! competition webpage, normalizes its loosely-formatted date and time into
//! the venue timezone, derives a warm-up time before kickoff, and formats a
//! reminder message for delivery to a WhatsApp group.
//!
//! # Examples
//!
//! ```rust
//! use chrono::{FixedOffset, TimeZone};
//! use fixture_reminder::fixture::{RawFixtureRecord, format_message, select_next};
//!
//! let records = vec![RawFixtureRecord {
//!     date_label: "THURSDAY 15TH AUGUST\nRound 6".to_string(),
//!     time_label: "7:50 PM".to_string(),
//!     home_team: Some("UQ Alphas".to_string()),
//!     away_team: Some("Wests Wolves".to_string()),
//!     venue: Some("Field 2".to_string()),
//!     ..Default::default()
//! }];
//!
//! let venue_tz = FixedOffset::east_opt(10 * 3600).unwrap();
//! let now = venue_tz.with_ymd_and_hms(2025, 8, 10, 9, 0, 0).unwrap();
//!
//! if let Some(fixture) = select_next(&records, now) {
//!     let message = format_message(&fixture, "UQ Alphas", venue_tz, 50);
//!     assert!(message.contains("UQ Alphas"));
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod delivery;
pub mod error;
pub mod fixture;
pub mod logging;
pub mod scrape;

// Re-export commonly used types for convenience
pub use config::Config;
pub use delivery::{MessagingCredential, SendOutcome, UltramsgClient};
pub use error::{AppError, DateParseError};
pub use fixture::{RawFixtureRecord, SelectedFixture, format_message, select_next};
pub use scrape::{FixtureScraper, HtmlFetcher, WebHtmlFetcher};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
