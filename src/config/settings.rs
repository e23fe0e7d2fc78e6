//! Settings configuration types

use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Voice capture and transcription settings
    #[serde(default)]
    pub voice: VoiceSettings,

    /// GUI settings
    #[serde(default)]
    pub gui: GuiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            voice: VoiceSettings::default(),
            gui: GuiSettings::default(),
        }
    }
}

/// Voice capture and transcription settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Whisper model for transcription (tiny, base, small, medium, large)
    #[serde(default = "default_whisper_model")]
    pub whisper_model: String,

    /// Language for transcription (auto, en, de, fr, etc.)
    #[serde(default = "default_language")]
    pub language: String,

    /// Length of one capture attempt in seconds. Each attempt is bounded;
    /// a quiet attempt just starts the next one.
    #[serde(default = "default_phrase_seconds")]
    pub phrase_seconds: f32,

    /// Speak outcome confirmations aloud
    #[serde(default = "default_spoken_feedback")]
    pub spoken_feedback: bool,

    /// Global hotkey to toggle listening from any application
    /// Format: "modifier+key" e.g., "cmd+shift+l", "ctrl+shift+l"
    #[serde(default = "default_listen_hotkey")]
    pub listen_hotkey: String,
}

fn default_whisper_model() -> String {
    "base".to_string()
}

fn default_language() -> String {
    "auto".to_string()
}

fn default_phrase_seconds() -> f32 {
    5.0 // matches the capture bound of the listening loop
}

fn default_spoken_feedback() -> bool {
    true
}

fn default_listen_hotkey() -> String {
    #[cfg(target_os = "macos")]
    return "cmd+shift+l".to_string();
    #[cfg(not(target_os = "macos"))]
    return "ctrl+shift+l".to_string();
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            whisper_model: default_whisper_model(),
            language: default_language(),
            phrase_seconds: default_phrase_seconds(),
            spoken_feedback: default_spoken_feedback(),
            listen_hotkey: default_listen_hotkey(),
        }
    }
}

/// GUI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuiSettings {
    /// Maximum number of log lines kept in memory
    #[serde(default = "default_log_limit")]
    pub log_limit: usize,
}

fn default_log_limit() -> usize {
    1000
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            log_limit: default_log_limit(),
        }
    }
}
