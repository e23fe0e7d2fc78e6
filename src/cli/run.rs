//! One-shot command dispatch without the GUI.
//!
//! Typed phrases go through the same classifier, extractor and handlers as
//! spoken ones; only the confirmation gate differs (stdin prompt, or
//! auto-approve with --yes).

use anyhow::{Context, Result};
use tracing::warn;

use voxfile::config::AliasTable;
use voxfile::dispatch::{AutoApprove, ConfirmationGate, Dispatcher, StdinConfirm, SystemOpener};
use voxfile::search::FileLocator;
use voxfile::speech::render_speech;

pub fn run_command(utterance: &str, yes: bool, speak: bool) -> Result<()> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let aliases = AliasTable::for_home(&home);
    let locator = FileLocator::with_default_roots(&home);

    let gate: Box<dyn ConfirmationGate> = if yes {
        Box::new(AutoApprove)
    } else {
        Box::new(StdinConfirm)
    };

    let dispatcher = Dispatcher::new(aliases, locator, Box::new(SystemOpener), gate);
    let outcome = dispatcher.dispatch(&utterance.to_lowercase());

    println!("{}", outcome.message);

    if speak {
        if let Some(text) = &outcome.spoken {
            // One-shot dispatch blocks on rendering; the process would exit
            // before a fire-and-forget worker got to speak.
            if let Err(e) = render_speech(text) {
                warn!("speech output failed: {e}");
            }
        }
    }

    if !outcome.succeeded {
        std::process::exit(1);
    }
    Ok(())
}
