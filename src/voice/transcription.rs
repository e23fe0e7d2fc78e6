//! Whisper transcription and the speech-service error taxonomy.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Failure classes of one capture/transcription attempt.
///
/// `NoSpeech` and `Unintelligible` skip the current cycle; `Service` is the
/// one fatal class and stops the listening loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscribeError {
    #[error("no speech captured")]
    NoSpeech,

    #[error("could not understand audio")]
    Unintelligible,

    #[error("speech service error: {0}")]
    Service(String),
}

/// Run whisper-cli over a recorded phrase. The transcription comes back
/// lowercased, ready for classification.
pub fn transcribe(
    audio_path: &Path,
    model_path: &Path,
    language: &str,
) -> Result<String, TranscribeError> {
    if !audio_path.exists() {
        return Err(TranscribeError::NoSpeech);
    }

    let output = Command::new("whisper-cli")
        .args([
            "-m",
            model_path.to_str().unwrap_or("model.bin"),
            "-f",
            audio_path.to_str().unwrap_or("audio.wav"),
            "--no-timestamps",
            // Always pass the language flag - whisper defaults to English
            // when it is omitted; "auto" requests detection.
            "-l",
            language,
        ])
        .output()
        .map_err(|e| TranscribeError::Service(format!("Failed to run whisper: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TranscribeError::Service(format!("Whisper failed: {stderr}")));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let text = clean_transcript(&stdout);
    if text.is_empty() {
        return Err(TranscribeError::Unintelligible);
    }

    Ok(text)
}

/// Join non-empty lines, dropping whisper's bracketed annotations such as
/// "[BLANK_AUDIO]" or "[inaudible]", and lowercase the result.
fn clean_transcript(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !(line.starts_with('[') && line.ends_with(']')))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
