//! CLI command definitions for voxfile.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the GUI (listening controls, command log, confirmation dialogs)
    Gui,

    /// Dispatch a single typed command phrase without the GUI
    Run {
        /// The command phrase, e.g. "search for report.pdf"
        utterance: Vec<String>,

        /// Answer yes to delete confirmations instead of prompting
        #[arg(long)]
        yes: bool,

        /// Speak the outcome aloud
        #[arg(long)]
        speak: bool,
    },

    /// Print the known directory aliases
    Aliases,

    /// Check voice dependencies (recorder, transcriber, model file)
    Check,

    /// Initialize a new .voxfile/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}
