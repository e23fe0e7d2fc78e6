//! Voice dependency checks.

use std::path::Path;
use std::process::Command;

/// Check that the recorder, the transcriber and the model file are usable.
/// Returns the availability flag plus a human-readable status line.
pub fn check_availability(model_path: &Path) -> (bool, String) {
    // Check for sox/rec
    let sox_check = Command::new("which").arg("rec").output();
    if sox_check.is_err() || !sox_check.unwrap().status.success() {
        return (
            false,
            "sox not found. Install it with your package manager (brew install sox / apt install sox).".to_string(),
        );
    }

    // Check for whisper (whisper-cli is the binary shipped by whisper-cpp)
    let whisper_check = Command::new("which").arg("whisper-cli").output();
    if whisper_check.is_err() || !whisper_check.unwrap().status.success() {
        return (
            false,
            "whisper-cli not found. Install whisper-cpp (brew install whisper-cpp).".to_string(),
        );
    }

    // Check for the whisper model
    if !model_path.exists() {
        return (
            false,
            format!("Whisper model not found at {}", model_path.display()),
        );
    }

    (true, "Voice input ready".to_string())
}
