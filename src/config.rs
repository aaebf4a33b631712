use std::path::Path;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::constants;
use crate::delivery::MessagingCredential;
use crate::error::AppError;

/// Configuration structure for the application.
///
/// Loaded once at process start and passed by reference into the
/// collaborators that need it - never read as ambient global state. Every
/// field has a default, so a missing config file or a missing credential
/// degrades to documented placeholders with a warning instead of aborting;
/// the gateway will reject placeholder credentials at send time.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Ultramsg API token.
    #[serde(default = "default_api_token")]
    pub api_token: String,
    /// Ultramsg instance identifier.
    #[serde(default = "default_instance_id")]
    pub instance_id: String,
    /// Default individual recipient (E.164 phone number).
    #[serde(default = "default_phone_number")]
    pub default_phone_number: String,
    /// Default group recipient for reminders.
    #[serde(default = "default_group_id")]
    pub default_group_id: String,
    /// Optional secondary notification group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_group_id: Option<String>,
    /// Competition page listing the tracked team's fixtures.
    #[serde(default = "default_competition_url")]
    pub competition_url: String,
    /// Team name highlighted in formatted messages.
    #[serde(default = "default_tracked_team")]
    pub tracked_team: String,
    /// Venue-local timezone as whole hours east of UTC.
    #[serde(default = "default_timezone_offset_hours")]
    pub timezone_offset_hours: i32,
    /// Minutes before kickoff that warm-up starts.
    #[serde(default = "default_warmup_offset_minutes")]
    pub warmup_offset_minutes: i64,
    /// HTTP timeout in seconds for page and gateway requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs go to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_api_token() -> String {
    constants::defaults::API_TOKEN.to_string()
}

fn default_instance_id() -> String {
    constants::defaults::INSTANCE_ID.to_string()
}

fn default_phone_number() -> String {
    constants::defaults::PHONE_NUMBER.to_string()
}

fn default_group_id() -> String {
    constants::defaults::GROUP_ID.to_string()
}

fn default_competition_url() -> String {
    constants::defaults::COMPETITION_URL.to_string()
}

fn default_tracked_team() -> String {
    constants::defaults::TRACKED_TEAM.to_string()
}

fn default_timezone_offset_hours() -> i32 {
    constants::DEFAULT_TIMEZONE_OFFSET_HOURS
}

fn default_warmup_offset_minutes() -> i64 {
    constants::DEFAULT_WARMUP_OFFSET_MINUTES
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_token: default_api_token(),
            instance_id: default_instance_id(),
            default_phone_number: default_phone_number(),
            default_group_id: default_group_id(),
            secondary_group_id: None,
            competition_url: default_competition_url(),
            tracked_team: default_tracked_team(),
            timezone_offset_hours: default_timezone_offset_hours(),
            warmup_offset_minutes: default_warmup_offset_minutes(),
            http_timeout_seconds: default_http_timeout(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location, falling
    /// back to built-in placeholder defaults when no file exists.
    /// Environment variables override file values.
    ///
    /// # Environment Variables
    /// - `REMINDER_API_TOKEN`, `REMINDER_INSTANCE_ID` - gateway credential
    /// - `REMINDER_PHONE_NUMBER`, `REMINDER_GROUP_ID`,
    ///   `REMINDER_SECONDARY_GROUP_ID` - recipients
    /// - `REMINDER_COMPETITION_URL`, `REMINDER_TRACKED_TEAM` - competition
    /// - `REMINDER_LOG_FILE` - log file path
    /// - `REMINDER_HTTP_TIMEOUT` - HTTP timeout in seconds
    ///
    /// # Returns
    /// * `Ok(Config)` - Loaded (or defaulted) configuration
    /// * `Err(AppError)` - A config file exists but cannot be read or parsed
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            warn!(
                path = %config_path,
                "no config file found; using placeholder defaults"
            );
            Config::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Applies environment variable overrides on top of file values.
    /// Empty variables are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(token) = env_override(constants::env_vars::API_TOKEN) {
            self.api_token = token;
        }
        if let Some(instance_id) = env_override(constants::env_vars::INSTANCE_ID) {
            self.instance_id = instance_id;
        }
        if let Some(phone) = env_override(constants::env_vars::PHONE_NUMBER) {
            self.default_phone_number = phone;
        }
        if let Some(group) = env_override(constants::env_vars::GROUP_ID) {
            self.default_group_id = group;
        }
        if let Some(group) = env_override(constants::env_vars::SECONDARY_GROUP_ID) {
            self.secondary_group_id = Some(group);
        }
        if let Some(url) = env_override(constants::env_vars::COMPETITION_URL) {
            self.competition_url = url;
        }
        if let Some(team) = env_override(constants::env_vars::TRACKED_TEAM) {
            self.tracked_team = team;
        }
        if let Some(log_file) = env_override(constants::env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file);
        }
        if let Some(timeout) = env_override(constants::env_vars::HTTP_TIMEOUT)
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// The gateway credential pair carried as an explicit value.
    pub fn credential(&self) -> MessagingCredential {
        MessagingCredential {
            token: self.api_token.clone(),
            instance_id: self.instance_id.clone(),
        }
    }

    /// True when the credential is still the built-in placeholder. Used to
    /// warn the operator before an attempt the gateway will reject.
    pub fn has_placeholder_credentials(&self) -> bool {
        self.api_token == constants::defaults::API_TOKEN
            || self.instance_id == constants::defaults::INSTANCE_ID
    }

    /// Venue timezone as a fixed offset. An out-of-range configured offset
    /// falls back to the default with a warning.
    pub fn venue_timezone(&self) -> FixedOffset {
        FixedOffset::east_opt(self.timezone_offset_hours * 3600).unwrap_or_else(|| {
            warn!(
                offset_hours = self.timezone_offset_hours,
                "configured timezone offset out of range; using default"
            );
            FixedOffset::east_opt(constants::DEFAULT_TIMEZONE_OFFSET_HOURS * 3600)
                .expect("default offset is valid")
        })
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    ///
    /// # Notes
    /// - Uses platform-specific config directory (e.g., ~/.config on Linux)
    /// - Falls back to current directory if config directory is unavailable
    pub fn get_config_path() -> String {
        get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        get_log_dir_path()
    }

    /// Displays current configuration settings to stdout. The API token is
    /// masked.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(file not found; showing defaults)");
        }
        println!("────────────────────────────────────");
        println!("Gateway:");
        println!(
            "instance {} / token {}",
            config.instance_id,
            mask_token(&config.api_token)
        );
        println!("────────────────────────────────────");
        println!("Recipients:");
        println!("individual: {}", config.default_phone_number);
        println!("group:      {}", config.default_group_id);
        if let Some(secondary) = &config.secondary_group_id {
            println!("secondary:  {secondary}");
        }
        println!("────────────────────────────────────");
        println!("Competition:");
        println!("{}", config.competition_url);
        println!("tracked team: {}", config.tracked_team);
        println!("────────────────────────────────────");
        println!(
            "Timezone offset: UTC{:+03}:00, warm-up {} minutes before kickoff",
            config.timezone_offset_hours, config.warmup_offset_minutes
        );
        println!("HTTP timeout: {} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/fixture_reminder.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating parent
    /// directories as needed.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path (for testing).
    #[allow(dead_code)] // Used in tests
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn env_override(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.is_empty())
}

fn mask_token(token: &str) -> String {
    if token == constants::defaults::API_TOKEN {
        "(placeholder)".to_string()
    } else {
        format!("(set, {} chars)", token.len())
    }
}

/// Platform-specific config file path, falling back to the current
/// directory when no config directory is available.
fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("fixture_reminder")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Platform-specific log directory path.
fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("fixture_reminder")
        .join("logs")
        .to_string_lossy()
        .to_string()
}
