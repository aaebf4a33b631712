//! Core fixture logic: date/time normalization, next-fixture selection and
//! message formatting.
//!
//! Everything in this module tree is pure and I/O-free. The acquisition
//! layer ([`crate::scrape`]) produces [`RawFixtureRecord`]s and the delivery
//! layer ([`crate::delivery`]) consumes the formatted message.

pub mod date_label;
pub mod kickoff;
pub mod message;
pub mod models;
pub mod selector;

pub use date_label::parse_date_label;
pub use kickoff::{KickoffTime, WarmupTime, compute_warmup, localize_kickoff};
pub use message::format_message;
pub use models::{
    MonthResolution, NormalizedDate, ParsedDateLabel, RawFixtureRecord, SelectedFixture,
};
pub use selector::select_next;
