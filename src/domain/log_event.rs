use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::outcome::{CommandOutcome, OutcomeKind};

/// The kind of entry in the command log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogEventKind {
    /// A transcribed utterance
    Heard,
    /// Informational output (help text, greetings)
    Info,
    /// A command completed successfully
    Success,
    /// A command failed or was rejected
    Error,
    /// Lifecycle message (listening started/stopped, log cleared)
    System,
}

impl std::fmt::Display for LogEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogEventKind::Heard => write!(f, "heard"),
            LogEventKind::Info => write!(f, "info"),
            LogEventKind::Success => write!(f, "success"),
            LogEventKind::Error => write!(f, "error"),
            LogEventKind::System => write!(f, "system"),
        }
    }
}

/// One timestamped entry in the append-only command log.
///
/// The timestamp is captured at creation; rendering (local-time formatting)
/// is the notifier's job, never the dispatcher's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    /// When this event occurred
    pub timestamp: DateTime<Utc>,

    /// The kind of event
    pub kind: LogEventKind,

    /// The message text
    pub message: String,
}

impl LogEvent {
    /// Create a new log event stamped now
    pub fn new(kind: LogEventKind, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            message: message.into(),
        }
    }

    /// Create a heard-utterance event
    pub fn heard(message: impl Into<String>) -> Self {
        Self::new(LogEventKind::Heard, message)
    }

    /// Create an info event
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogEventKind::Info, message)
    }

    /// Create a success event
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(LogEventKind::Success, message)
    }

    /// Create an error event
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogEventKind::Error, message)
    }

    /// Create a system event
    pub fn system(message: impl Into<String>) -> Self {
        Self::new(LogEventKind::System, message)
    }

    /// Build the log entry for a command outcome
    pub fn from_outcome(outcome: &CommandOutcome) -> Self {
        let kind = match outcome.kind {
            OutcomeKind::Help => LogEventKind::Info,
            _ if outcome.succeeded => LogEventKind::Success,
            _ => LogEventKind::Error,
        };
        Self::new(kind, outcome.message.clone())
    }

    /// Local wall-clock time for display, e.g. "14:03:59"
    pub fn formatted_time(&self) -> String {
        self.timestamp
            .with_timezone(&chrono::Local)
            .format("%H:%M:%S")
            .to_string()
    }
}
