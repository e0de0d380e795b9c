use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use std::path::PathBuf;

mod app;
mod clipboard;
mod commands;
mod config;
mod constants;
mod feedback;
mod links;
mod logging;
mod profile;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::{
    app::App,
    clipboard::SystemClipboard,
    config::AppConfig,
    feedback::{CopyFeedbackController, CopyOutcome},
};

// linkcard version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r#"
 _ _       _                       _
| (_)_ __ | | _____ __ _ _ __ __| |
| | | '_ \| |/ / __/ _` | '__/ _` |
| | | | | |   < (_| (_| | | | (_| |
|_|_|_| |_|_|\_\___\__,_|_|  \__,_|
"#;

/// linkcard - a personal link-in-bio card for the terminal
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Profile JSON to show instead of the configured or built-in profile
    #[arg(short, long, global = true, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the card as plain text and exit
    Print,
    /// Copy one platform's handle to the clipboard and exit
    Copy {
        /// Platform name, e.g. "GitHub" (case-insensitive)
        platform: String,
    },
    /// Print the configuration file path
    Config {
        /// Write a default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
    /// Display version with ASCII art
    Version,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = AppConfig::load();
    let _log_guard = logging::init(&config);

    let profile = config.resolve_profile(cli.profile.as_deref())?;
    let clipboard = SystemClipboard::from_preference(config.prefer_external_clipboard);

    if let Some(command) = &cli.command {
        return handle_cli_command(command, &profile, clipboard).await;
    }

    let mut terminal = tui::init(&profile)?;
    let mut app = App::new(profile, clipboard);
    let result = app.run(&mut terminal).await;

    tui::restore()?;
    result
}

/// Runs a non-interactive subcommand.
async fn handle_cli_command(
    command: &Commands,
    profile: &profile::ProfileData,
    clipboard: SystemClipboard,
) -> Result<()> {
    match command {
        Commands::Print => {
            print!("{}", profile.to_plain_text());
        }
        Commands::Copy { platform } => {
            let entry = profile
                .find(platform)
                .ok_or_else(|| eyre!("No platform named '{platform}' on this card"))?;

            let mut controller = CopyFeedbackController::new(clipboard);
            match controller.request_copy(&entry.handle, entry.key()).await {
                CopyOutcome::Copied => {
                    println!("Copied {} handle: {}", entry.platform, entry.handle);
                }
                CopyOutcome::Failed(e) => return Err(eyre!("Failed to copy: {e}")),
                CopyOutcome::Discarded => {}
            }
            controller.teardown();
        }
        Commands::Config { init } => {
            let path = AppConfig::config_path()?;
            if *init && !path.exists() {
                AppConfig::default().save()?;
                println!("Wrote default configuration to {}", path.display());
            } else {
                println!("{}", path.display());
            }
        }
        Commands::Version => {
            println!("{LOGO}");
            println!("linkcard v{VERSION}");
            println!("A personal link-in-bio card for the terminal");
        }
    }
    Ok(())
}
