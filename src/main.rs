// src/main.rs
use clap::Parser;

use fixture_reminder::cli::Args;
use fixture_reminder::config::Config;
use fixture_reminder::error::AppError;
use fixture_reminder::{app, commands, logging};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Configuration operations run before anything touches the network
    if args.list_config {
        return commands::handle_list_config_command().await;
    }
    if args.new_log_file_path.is_some() || args.clear_log_file_path {
        return commands::handle_config_update_command(&args).await;
    }

    // Load config once; collaborators receive it by reference
    let config = Config::load().await?;

    if args.list_groups {
        return commands::handle_list_groups_command(&config).await;
    }
    if let Some(group) = args.test_group.as_deref() {
        return commands::handle_test_message_command(&config, group).await;
    }

    app::run(&args, &config).await
}
