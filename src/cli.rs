use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Next-Fixture WhatsApp Reminder
///
/// Finds the tracked team's next upcoming game on the competition page and
/// sends a formatted reminder (date, warm-up time, kickoff, opponent, venue)
/// to the configured WhatsApp group via the Ultramsg gateway.
///
/// Runs once and exits; schedule it with cron or a timer for weekly
/// reminders. Without flags it selects, formats and sends in one pass.
#[derive(Parser, Debug)]
#[command(author = "Fixture Reminder Team", about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Print the selected fixture and message without sending anything.
    #[arg(long = "dry-run", help_heading = "Selection")]
    pub dry_run: bool,

    /// Walk every fixture card with its parsed date and FUTURE/PAST status,
    /// marking which record would be selected. Nothing is sent.
    #[arg(long = "preview", help_heading = "Selection")]
    pub preview: bool,

    /// Evaluate selection as if "now" were local midnight of this date
    /// (YYYY-MM-DD). Useful for checking what next week's run would pick.
    #[arg(long = "as-of", value_name = "DATE", help_heading = "Selection")]
    pub as_of: Option<String>,

    /// Send to this recipient (phone number or group id) instead of the
    /// configured default group.
    #[arg(long = "to", value_name = "RECIPIENT", help_heading = "Selection")]
    pub recipient: Option<String>,

    /// List the WhatsApp groups visible to the gateway instance, with ids.
    #[arg(long = "list-groups", help_heading = "Diagnostics")]
    pub list_groups: bool,

    /// Send a canned test message to a group. Uses the configured default
    /// group when no id is given.
    #[arg(
        long = "test-message",
        help_heading = "Diagnostics",
        value_name = "GROUP_ID",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub test_group: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Specify a custom log file path for this run only.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,

    /// Enable debug logging (skip-by-skip selector decisions end up in the log).
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,
}
