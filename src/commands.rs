//! Handlers for the secondary command-line operations.

use crate::cli::Args;
use crate::config::Config;
use crate::delivery::{SendOutcome, UltramsgClient};
use crate::error::AppError;

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Handles the --list-groups command: prints every WhatsApp group visible to
/// the gateway instance so the operator can find the right group id.
pub async fn handle_list_groups_command(config: &Config) -> Result<(), AppError> {
    let client = UltramsgClient::new(config.credential(), config.http_timeout_seconds)?;

    println!("🔍 Finding WhatsApp groups...");
    println!("{}", "=".repeat(50));

    let groups = client.list_groups().await?;
    if groups.is_empty() {
        println!("No groups visible to this instance.");
        return Ok(());
    }

    for group in groups {
        println!("📱 Group Name: {}", group.name);
        println!("🆔 Group ID: {}", group.id);
        println!("👥 Participants: {}", group.participants_count);
        println!("{}", "-".repeat(30));
    }
    Ok(())
}

/// Handles the --test-message command: sends a canned message to the given
/// group, or to the configured default group when none was given.
pub async fn handle_test_message_command(config: &Config, group_arg: &str) -> Result<(), AppError> {
    let group_id = if group_arg.is_empty() {
        config.default_group_id.as_str()
    } else {
        group_arg
    };

    let client = UltramsgClient::new(config.credential(), config.http_timeout_seconds)?;

    println!("🧪 Testing group: {group_id}");
    match client
        .send_chat(group_id, "🧪 Test message from the fixture reminder!")
        .await?
    {
        SendOutcome::Sent => println!("✅ Test message sent successfully to group!"),
        SendOutcome::Rejected { error } => println!("❌ Failed to send message: {error}"),
    }
    Ok(())
}
