//! Command dispatch: classify, extract arguments, execute, report.
//!
//! One `dispatch` call is one command cycle. Handlers convert every
//! filesystem failure into a failed [`CommandOutcome`]; nothing panics or
//! propagates out of the dispatcher, so a bad command can never take down
//! the listening loop.

mod extract;
mod gate;
mod opener;

pub use extract::{delete_filename, filename_after_anchor, search_filename};
pub use gate::{
    AutoApprove, AutoDeny, ChannelConfirm, ConfirmRequest, ConfirmationGate, StdinConfirm,
};
pub use opener::{Opener, SystemOpener};

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::AliasTable;
use crate::domain::{CommandOutcome, Intent, classify};
use crate::search::FileLocator;

/// Number of search hits shown for a search command
const SEARCH_DISPLAY_LIMIT: usize = 5;

/// Number of entries shown for a list command
const LIST_DISPLAY_LIMIT: usize = 10;

/// Static command reference, shared by the help intent and the GUI help window
pub const HELP_TEXT: &str = "\
Available commands:
  open <alias> folder      e.g. \"open downloads folder\"
  search for <name>        e.g. \"search for report.pdf\"
  find <name>              e.g. \"find presentation\"
  delete <name>            e.g. \"delete test.txt\" (asks for confirmation)
  list files in <alias>    e.g. \"list files in documents\"
  show files               lists the current directory
  help                     this reference

Known folders: downloads, documents, desktop, pictures, music, videos, home";

/// Orchestrates one command cycle: classifier, extractor, action handler.
///
/// The confirmation gate and the system opener are injected so the GUI, the
/// CLI and the tests can supply their own.
pub struct Dispatcher {
    aliases: AliasTable,
    locator: FileLocator,
    opener: Box<dyn Opener>,
    gate: Box<dyn ConfirmationGate>,
}

impl Dispatcher {
    pub fn new(
        aliases: AliasTable,
        locator: FileLocator,
        opener: Box<dyn Opener>,
        gate: Box<dyn ConfirmationGate>,
    ) -> Self {
        Self {
            aliases,
            locator,
            opener,
            gate,
        }
    }

    /// The alias table this dispatcher resolves folder names against
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Process one lowercase utterance and produce the outcome to notify
    pub fn dispatch(&self, utterance: &str) -> CommandOutcome {
        let intent = classify(utterance);
        debug!(%intent, utterance, "classified utterance");

        match intent {
            Intent::OpenFolder => self.open_folder(utterance),
            Intent::Search => self.search(utterance),
            Intent::Delete => self.delete(utterance),
            Intent::ListFiles => self.list_files(utterance),
            Intent::Help => CommandOutcome::help(HELP_TEXT).with_spoken(
                "Available commands are: open folder, search file, list files, and delete file",
            ),
            Intent::Unrecognized => CommandOutcome::unrecognized(
                "Command not recognized. Say 'help' for available commands.",
            )
            .with_spoken("Command not recognized"),
        }
    }

    fn open_folder(&self, utterance: &str) -> CommandOutcome {
        let Some(alias) = self.aliases.match_utterance(utterance) else {
            return CommandOutcome::ambiguous(
                "Please specify a folder name (downloads, documents, desktop, ...)",
            )
            .with_spoken("Please specify a valid folder name");
        };

        if alias.path.exists() {
            // Opener failures are logged, not fatal
            if let Err(e) = self.opener.open(&alias.path) {
                warn!(path = %alias.path.display(), "failed to open folder: {e:#}");
            }
            CommandOutcome::success(format!("Opened {} folder", alias.name))
                .with_spoken(format!("Opened {} folder", alias.name))
        } else {
            CommandOutcome::not_found(format!("{} folder not found", alias.name))
                .with_spoken(format!("{} folder not found", alias.name))
        }
    }

    fn search(&self, utterance: &str) -> CommandOutcome {
        let Some(filename) = search_filename(utterance) else {
            return CommandOutcome::ambiguous("Please specify a filename to search for")
                .with_spoken("Please specify a filename to search for");
        };

        let results = self.locator.search(&filename);
        if results.is_empty() {
            return CommandOutcome::not_found(format!("No files found matching '{filename}'"))
                .with_spoken(format!("No files found matching {filename}"));
        }

        let mut message = format!("Found {} file(s) matching '{}':", results.len(), filename);
        for path in results.iter().take(SEARCH_DISPLAY_LIMIT) {
            message.push_str(&format!("\n  {}", path.display()));
        }
        CommandOutcome::success(message)
            .with_spoken(format!("Found {} files matching {}", results.len(), filename))
    }

    fn delete(&self, utterance: &str) -> CommandOutcome {
        let Some(filename) = delete_filename(utterance) else {
            return CommandOutcome::ambiguous("Please specify a filename to delete")
                .with_spoken("Please specify a filename to delete");
        };

        let results = self.locator.search(&filename);
        let Some(target) = results.first() else {
            return CommandOutcome::not_found(format!("File '{filename}' not found"))
                .with_spoken(format!("File {filename} not found"));
        };

        let prompt = format!("Delete '{}'? This action cannot be undone.", target.display());
        if !self.gate.confirm(&prompt) {
            return CommandOutcome::cancelled("Deletion cancelled").with_spoken("Deletion cancelled");
        }

        match std::fs::remove_file(target) {
            Ok(()) => CommandOutcome::success(format!("Deleted '{filename}'"))
                .with_spoken(format!("Deleted {filename}")),
            Err(e) => CommandOutcome::io_failure(format!("Failed to delete '{filename}': {e}"))
                .with_spoken("Failed to delete file"),
        }
    }

    fn list_files(&self, utterance: &str) -> CommandOutcome {
        let (label, dir): (String, PathBuf) = match self.aliases.match_utterance(utterance) {
            Some(alias) => (alias.name.clone(), alias.path.clone()),
            None => match std::env::current_dir() {
                Ok(cwd) => ("current".to_string(), cwd),
                Err(e) => {
                    return CommandOutcome::io_failure(format!("Failed to list files: {e}"))
                        .with_spoken("Failed to list files");
                }
            },
        };

        match read_dir_names(&dir) {
            Ok(names) => {
                let mut message = format!("Files in {} folder ({} items):", label, names.len());
                for name in names.iter().take(LIST_DISPLAY_LIMIT) {
                    message.push_str(&format!("\n  {name}"));
                }
                if names.len() > LIST_DISPLAY_LIMIT {
                    message.push_str(&format!(
                        "\n  ... and {} more items",
                        names.len() - LIST_DISPLAY_LIMIT
                    ));
                }
                CommandOutcome::success(message)
                    .with_spoken(format!("Listed files in {label} folder"))
            }
            Err(e) => CommandOutcome::io_failure(format!("Failed to list files: {e}"))
                .with_spoken("Failed to list files"),
        }
    }
}

/// Non-recursive entry names (files and subdirectories), sorted for a stable
/// display order
fn read_dir_names(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names: Vec<String> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    Ok(names)
}
