//! Microphone capture via sox.

use std::path::Path;
use std::process::{Child, Command, Stdio};

/// Start a bounded recording process writing 16 kHz mono 16-bit WAV
/// (whisper's input format). The recorder exits on its own after
/// `max_seconds`.
pub fn start_recording_process(recording_path: &Path, max_seconds: f32) -> Result<Child, String> {
    Command::new("rec")
        .args([
            "-r",
            "16000",
            "-c",
            "1",
            "-b",
            "16",
            recording_path.to_str().unwrap_or("recording.wav"),
            "trim",
            "0",
            &format!("{max_seconds}"),
        ])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("Failed to start recording: {e}"))
}

/// Record one bounded phrase to `recording_path`, blocking until the
/// recorder exits. Each capture attempt is time-boxed; a quiet attempt just
/// yields a silent file for the transcriber to reject.
pub fn record_phrase(recording_path: &Path, max_seconds: f32) -> Result<(), String> {
    let mut child = start_recording_process(recording_path, max_seconds)?;
    match child.wait() {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(format!("Recorder exited with {status}")),
        Err(e) => Err(format!("Failed to wait for recorder: {e}")),
    }
}
