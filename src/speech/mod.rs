//! Spoken feedback rendering.
//!
//! Speech is a one-way task queue: the dispatcher and the GUI hand text to
//! the audio worker and never wait for rendering to finish. The worker
//! shells out to the platform TTS command.

use std::process::Command;
use std::sync::mpsc::{self, Sender};
use std::thread;

use tracing::warn;

/// Handle for queueing text-to-speech output.
///
/// Cloneable; all clones feed the same worker. The worker exits when the
/// last handle is dropped.
#[derive(Clone)]
pub struct Speaker {
    tx: Sender<String>,
}

impl Speaker {
    /// Spawn the audio worker and return a handle to it
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel::<String>();

        thread::spawn(move || {
            for text in rx {
                if let Err(e) = render_speech(&text) {
                    warn!("speech output failed: {e}");
                }
            }
        });

        Self { tx }
    }

    /// Queue a phrase. Never blocks on audio rendering.
    pub fn say(&self, text: impl Into<String>) {
        let _ = self.tx.send(text.into());
    }
}

/// Render one phrase with the platform TTS command, blocking until the
/// audio finishes. Only the worker thread calls this.
#[cfg(target_os = "macos")]
pub fn render_speech(text: &str) -> Result<(), String> {
    let status = Command::new("say")
        .arg(text)
        .status()
        .map_err(|e| format!("Failed to run say: {e}"))?;
    if !status.success() {
        return Err(format!("say exited with {status}"));
    }
    Ok(())
}

/// Render one phrase with espeak, falling back to spd-say
#[cfg(target_os = "linux")]
pub fn render_speech(text: &str) -> Result<(), String> {
    let espeak_result = Command::new("espeak").arg(text).status();
    match espeak_result {
        Ok(status) if status.success() => Ok(()),
        _ => {
            let spd_result = Command::new("spd-say").args(["--wait", text]).status();
            match spd_result {
                Ok(status) if status.success() => Ok(()),
                _ => Err("Speech output requires espeak or speech-dispatcher".to_string()),
            }
        }
    }
}

/// Render one phrase with the Windows speech API via PowerShell
#[cfg(target_os = "windows")]
pub fn render_speech(text: &str) -> Result<(), String> {
    let script = format!(
        "Add-Type -AssemblyName System.Speech; \
         (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak('{}')",
        text.replace('\'', "''")
    );
    let status = Command::new("powershell")
        .args(["-NoProfile", "-Command", &script])
        .status()
        .map_err(|e| format!("Failed to run powershell: {e}"))?;
    if !status.success() {
        return Err(format!("powershell exited with {status}"));
    }
    Ok(())
}

/// Fallback for other platforms
#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
pub fn render_speech(_text: &str) -> Result<(), String> {
    Err("Speech output not supported on this platform".to_string())
}
