//! Listening session events.

use crate::domain::CommandOutcome;

/// Events emitted by the listening session worker.
///
/// The GUI drains these each frame and renders them as log lines and spoken
/// feedback; the worker never renders anything itself.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The listening loop started
    Started,
    /// A capture attempt produced a transcription
    Heard { utterance: String },
    /// A command cycle completed
    Outcome(CommandOutcome),
    /// The speech service failed; the session has stopped itself.
    /// Distinct from a merely unrecognized command: the operator must
    /// restart listening deliberately.
    ServiceError { message: String },
    /// The listening loop exited
    Stopped,
}
