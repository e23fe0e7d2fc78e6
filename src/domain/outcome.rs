//! Command outcome types.

use serde::{Deserialize, Serialize};

/// Classification of a command outcome.
///
/// Everything except `Success` and `Help` is a recovered failure: handlers
/// turn missing arguments, missing targets and filesystem errors into an
/// outcome instead of propagating them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The action completed
    Success,
    /// A required argument was missing or unusable
    AmbiguousInput,
    /// The target path or file does not exist
    NotFound,
    /// A filesystem operation failed
    IoFailure,
    /// The user declined the confirmation gate
    Cancelled,
    /// No intent matched the utterance
    Unrecognized,
    /// Command reference, no filesystem access
    Help,
}

/// The structured result of executing one command cycle.
///
/// Consumed uniformly by the notifier: `message` becomes one log line,
/// `spoken` (when present) becomes one spoken phrase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutcome {
    /// Outcome classification
    pub kind: OutcomeKind,

    /// Whether the command achieved its purpose
    pub succeeded: bool,

    /// Human-readable log text (may span multiple lines)
    pub message: String,

    /// Short spoken confirmation, if any
    pub spoken: Option<String>,
}

impl CommandOutcome {
    fn new(kind: OutcomeKind, succeeded: bool, message: impl Into<String>) -> Self {
        Self {
            kind,
            succeeded,
            message: message.into(),
            spoken: None,
        }
    }

    /// Create a success outcome
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::Success, true, message)
    }

    /// Create an ambiguous-input outcome (missing/unusable argument)
    pub fn ambiguous(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::AmbiguousInput, false, message)
    }

    /// Create a not-found outcome
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::NotFound, false, message)
    }

    /// Create an I/O failure outcome
    pub fn io_failure(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::IoFailure, false, message)
    }

    /// Create a cancelled outcome (confirmation gate declined)
    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::Cancelled, false, message)
    }

    /// Create an unrecognized-command outcome
    pub fn unrecognized(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::Unrecognized, false, message)
    }

    /// Create a help outcome
    pub fn help(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::Help, true, message)
    }

    /// Attach a spoken confirmation
    pub fn with_spoken(mut self, text: impl Into<String>) -> Self {
        self.spoken = Some(text.into());
        self
    }
}
