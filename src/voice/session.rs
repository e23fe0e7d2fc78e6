//! Listening session controller.
//!
//! The session owns the listening flag and the capture worker. Command
//! cycles never overlap: the worker captures, transcribes and dispatches one
//! utterance before the next capture attempt begins. Stopping only prevents
//! the next capture attempt; an in-flight cycle completes.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, info};

use crate::config::VoiceSettings;
use crate::dispatch::Dispatcher;

use super::recording::record_phrase;
use super::transcription::{TranscribeError, transcribe};
use super::types::SessionEvent;

/// Path of the whisper model file under the working directory
pub fn model_path(work_dir: &Path, model: &str) -> PathBuf {
    work_dir
        .join(".voxfile")
        .join("whisper-models")
        .join(format!("ggml-{model}.bin"))
}

/// Controls the background capture/dispatch loop.
///
/// Dropping the session flips the flag; the worker finishes its in-flight
/// cycle and exits on its own.
pub struct ListenSession {
    listening: Arc<AtomicBool>,
    event_rx: Receiver<SessionEvent>,
}

impl ListenSession {
    /// Start listening. The dispatcher moves onto the worker thread and
    /// handles every transcribed utterance sequentially.
    pub fn start(dispatcher: Dispatcher, settings: VoiceSettings, work_dir: PathBuf) -> Self {
        let listening = Arc::new(AtomicBool::new(true));
        let (event_tx, event_rx) = mpsc::channel();

        let flag = Arc::clone(&listening);
        thread::spawn(move || listen_loop(dispatcher, settings, work_dir, flag, event_tx));

        Self {
            listening,
            event_rx,
        }
    }

    /// Whether the loop will attempt another capture
    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::Relaxed)
    }

    /// Prevent the next capture attempt. The in-flight cycle, if any,
    /// completes first.
    pub fn stop(&self) {
        self.listening.store(false, Ordering::Relaxed);
    }

    /// Drain pending session events (call each frame)
    pub fn poll_events(&self) -> Vec<SessionEvent> {
        self.event_rx.try_iter().collect()
    }
}

impl Drop for ListenSession {
    fn drop(&mut self) {
        self.stop();
    }
}

fn listen_loop(
    dispatcher: Dispatcher,
    settings: VoiceSettings,
    work_dir: PathBuf,
    listening: Arc<AtomicBool>,
    event_tx: Sender<SessionEvent>,
) {
    let recording_dir = work_dir.join(".voxfile");
    let recording_path = recording_dir.join("phrase.wav");
    let model = model_path(&work_dir, &settings.whisper_model);

    let _ = event_tx.send(SessionEvent::Started);
    info!("listening session started");

    while listening.load(Ordering::Relaxed) {
        if let Err(e) = fs::create_dir_all(&recording_dir) {
            fail(&listening, &event_tx, format!("Failed to prepare recording directory: {e}"));
            break;
        }

        if let Err(message) = record_phrase(&recording_path, settings.phrase_seconds) {
            fail(&listening, &event_tx, message);
            break;
        }

        let result = transcribe(&recording_path, &model, &settings.language);
        let _ = fs::remove_file(&recording_path);

        match result {
            Ok(utterance) => {
                let _ = event_tx.send(SessionEvent::Heard {
                    utterance: utterance.clone(),
                });
                let outcome = dispatcher.dispatch(&utterance);
                let _ = event_tx.send(SessionEvent::Outcome(outcome));
            }
            Err(TranscribeError::NoSpeech) | Err(TranscribeError::Unintelligible) => {
                // Quiet capture windows are normal; keep listening.
                debug!("quiet capture cycle");
            }
            Err(TranscribeError::Service(message)) => {
                fail(&listening, &event_tx, message);
                break;
            }
        }
    }

    let _ = event_tx.send(SessionEvent::Stopped);
    info!("listening session stopped");
}

/// Stop the loop and surface a fatal service error
fn fail(listening: &AtomicBool, event_tx: &Sender<SessionEvent>, message: String) {
    listening.store(false, Ordering::Relaxed);
    let _ = event_tx.send(SessionEvent::ServiceError { message });
}
