//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers, placeholder defaults and selector
//! candidates so the rest of the codebase stays free of inline literals.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Minutes before kickoff that players are expected for warm-up
pub const DEFAULT_WARMUP_OFFSET_MINUTES: i64 = 50;

/// Fixed venue-local timezone offset in whole hours east of UTC.
/// Brisbane (AEST) does not observe daylight saving.
pub const DEFAULT_TIMEZONE_OFFSET_HOURS: i32 = 10;

/// User agent sent with page and gateway requests
pub const USER_AGENT: &str = concat!("fixture_reminder/", env!("CARGO_PKG_VERSION"));

/// Placeholder and fallback values used when configuration is absent.
/// Placeholders keep startup from aborting; the gateway rejects them.
pub mod defaults {
    /// Ultramsg API token placeholder
    pub const API_TOKEN: &str = "your_token_here";

    /// Ultramsg instance id placeholder
    pub const INSTANCE_ID: &str = "your_instance_id_here";

    /// Individual recipient placeholder (E.164)
    pub const PHONE_NUMBER: &str = "+61400000000";

    /// WhatsApp group recipient placeholder
    pub const GROUP_ID: &str = "your_group_id@g.us";

    /// Competition page listing the tracked team's fixtures
    pub const COMPETITION_URL: &str =
        "https://touchfootball.com.au/Competitions/Competition/s2-2025-thursday-girls-u15d-63174269?team=63354766";

    /// Team name highlighted in formatted messages
    pub const TRACKED_TEAM: &str = "UQ Alphas";

    /// Ultramsg API base URL
    pub const ULTRAMSG_API_BASE: &str = "https://api.ultramsg.com";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the Ultramsg API token
    pub const API_TOKEN: &str = "REMINDER_API_TOKEN";

    /// Environment variable for the Ultramsg instance id
    pub const INSTANCE_ID: &str = "REMINDER_INSTANCE_ID";

    /// Environment variable for the default individual recipient
    pub const PHONE_NUMBER: &str = "REMINDER_PHONE_NUMBER";

    /// Environment variable for the default group recipient
    pub const GROUP_ID: &str = "REMINDER_GROUP_ID";

    /// Environment variable for the secondary notification group
    pub const SECONDARY_GROUP_ID: &str = "REMINDER_SECONDARY_GROUP_ID";

    /// Environment variable for the competition page URL
    pub const COMPETITION_URL: &str = "REMINDER_COMPETITION_URL";

    /// Environment variable for the tracked team name
    pub const TRACKED_TEAM: &str = "REMINDER_TRACKED_TEAM";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "REMINDER_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "REMINDER_HTTP_TIMEOUT";
}

/// CSS selector candidates for fixture card extraction.
///
/// Each list is tried in order and the first selector yielding a non-empty
/// result wins. The competition site has shuffled its class names between
/// seasons, hence the fallbacks.
pub mod selectors {
    /// One fixture card per rendered list item
    pub const FIXTURE_CARD: &str = "ul.l-grid > li";

    /// Date header candidates, most specific first
    pub const DATE_CANDIDATES: &[&str] = &[".match-header__title", "[class*='header']"];

    /// Team name candidates, most specific first
    pub const TEAM_CANDIDATES: &[&str] = &[".match-team__name", ".team-name", "[class*='team']"];

    /// Kickoff time element; its text is the display label and its
    /// `datetime` attribute, when present, is a machine-readable UTC instant
    pub const KICKOFF_TIME: &str = "time";

    /// Venue link candidates
    pub const VENUE_CANDIDATES: &[&str] = &[".match-cta__link"];
}
