use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod cli;
mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "voxfile")]
#[command(about = "Voice-driven file manager - spoken commands for everyday filesystem tasks")]
#[command(version)]
struct Cli {
    /// Working directory (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to .voxfile/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Determine the working directory
    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Some(Commands::Run {
            utterance,
            yes,
            speak,
        }) => {
            cli::run::run_command(&utterance.join(" "), yes, speak)?;
        }
        Some(Commands::Aliases) => {
            cli::aliases::aliases_command()?;
        }
        Some(Commands::Check) => {
            cli::check::check_command(&work_dir, cli.config.as_deref())?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&work_dir, force)?;
        }
        Some(Commands::Gui) | None => {
            // Default: run the GUI
            voxfile::gui::run_gui(work_dir, cli.config)?;
        }
    }

    Ok(())
}
