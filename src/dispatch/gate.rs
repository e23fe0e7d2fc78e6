//! Confirmation gate for destructive actions.
//!
//! Deletion never proceeds without an explicit affirmative answer. The gate
//! is a synchronous capability injected into the dispatcher; the GUI, the
//! CLI and the tests each provide their own implementation of the same
//! contract.

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};

/// Synchronous yes/no checkpoint required before any destructive action
pub trait ConfirmationGate: Send + Sync {
    /// Present the prompt and block until the user answers
    fn confirm(&self, prompt: &str) -> bool;
}

/// Approves every prompt. For `run --yes` and tests.
#[derive(Debug, Default)]
pub struct AutoApprove;

impl ConfirmationGate for AutoApprove {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Denies every prompt
#[derive(Debug, Default)]
pub struct AutoDeny;

impl ConfirmationGate for AutoDeny {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

/// Interactive y/n prompt on stdin, for one-shot CLI dispatch
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl ConfirmationGate for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// A confirmation prompt in flight between the dispatch thread and the GUI
#[derive(Debug)]
pub struct ConfirmRequest {
    /// The question to present
    pub prompt: String,
    /// Channel for the user's answer
    pub reply: Sender<bool>,
}

impl ConfirmRequest {
    /// Answer the prompt. Send failures mean the asking thread is gone.
    pub fn answer(self, approved: bool) {
        let _ = self.reply.send(approved);
    }
}

/// Gate that forwards prompts to another thread (the GUI) and blocks the
/// dispatching cycle until that thread answers. A closed channel counts as
/// a refusal.
pub struct ChannelConfirm {
    tx: Sender<ConfirmRequest>,
}

impl ChannelConfirm {
    /// Create a gate paired with the receiver its prompts arrive on
    pub fn channel() -> (Self, Receiver<ConfirmRequest>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    /// Create a gate over an existing request channel
    pub fn new(tx: Sender<ConfirmRequest>) -> Self {
        Self { tx }
    }
}

impl ConfirmationGate for ChannelConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let (reply_tx, reply_rx) = mpsc::channel();
        let request = ConfirmRequest {
            prompt: prompt.to_string(),
            reply: reply_tx,
        };
        if self.tx.send(request).is_err() {
            return false;
        }
        reply_rx.recv().unwrap_or(false)
    }
}
