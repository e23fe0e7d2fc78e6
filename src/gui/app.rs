//! Main application state for the voxfile GUI.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Context, Result};
use global_hotkey::{
    GlobalHotKeyManager,
    hotkey::{Code, HotKey, Modifiers},
};
use tracing::{info, warn};

use crate::config::{AliasTable, Config};
use crate::dispatch::{ChannelConfirm, ConfirmRequest, Dispatcher, SystemOpener};
use crate::domain::LogEvent;
use crate::search::FileLocator;
use crate::speech::Speaker;
use crate::voice::{ListenSession, SessionEvent, check_availability, model_path};

use super::hotkey::parse_hotkey_string;

pub struct VoxfileApp {
    pub(crate) work_dir: PathBuf,
    pub(crate) config: Config,
    pub(crate) home: PathBuf,
    pub(crate) aliases: AliasTable,

    /// Append-only command log rendered by the log panel
    pub(crate) logs: Vec<LogEvent>,
    /// Utterances heard this session, in order
    pub(crate) history: Vec<String>,

    pub(crate) speaker: Speaker,
    pub(crate) session: Option<ListenSession>,

    /// Confirmation prompts travel from the dispatch worker to the GUI over
    /// this channel; the worker blocks until the modal answers.
    pub(crate) confirm_tx: Sender<ConfirmRequest>,
    pub(crate) confirm_rx: Receiver<ConfirmRequest>,
    pub(crate) pending_confirm: Option<ConfirmRequest>,

    pub(crate) show_help: bool,
    pub(crate) hotkey_manager: Option<GlobalHotKeyManager>,
}

impl VoxfileApp {
    pub fn new(work_dir: PathBuf, config: Config) -> Result<Self> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        let aliases = AliasTable::for_home(&home);
        let (confirm_tx, confirm_rx) = mpsc::channel();
        let hotkey_manager = Self::init_hotkey_manager(&config.settings.voice.listen_hotkey);

        let mut app = Self {
            work_dir,
            config,
            home,
            aliases,
            logs: Vec::new(),
            history: Vec::new(),
            speaker: Speaker::spawn(),
            session: None,
            confirm_tx,
            confirm_rx,
            pending_confirm: None,
            show_help: false,
            hotkey_manager,
        };
        app.push_greeting();
        Ok(app)
    }

    fn push_greeting(&mut self) {
        self.push_log(LogEvent::system("Voice file manager initialized"));
        self.push_log(LogEvent::info("Say commands like:"));
        self.push_log(LogEvent::info("   'open downloads folder'"));
        self.push_log(LogEvent::info("   'search for report.pdf'"));
        self.push_log(LogEvent::info("   'delete test.txt'"));
        self.push_log(LogEvent::info("   'list files in documents'"));

        let model = model_path(&self.work_dir, &self.config.settings.voice.whisper_model);
        let (_, status) = check_availability(&model);
        self.push_log(LogEvent::system(status));
        self.push_log(LogEvent::system("Click 'Start listening' to begin"));
    }

    /// Append to the log, trimming the oldest entries past the limit
    pub(crate) fn push_log(&mut self, event: LogEvent) {
        self.logs.push(event);
        let limit = self.config.settings.gui.log_limit;
        if self.logs.len() > limit {
            let excess = self.logs.len() - limit;
            self.logs.drain(..excess);
        }
    }

    pub(crate) fn is_listening(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_listening())
    }

    pub(crate) fn toggle_listening(&mut self) {
        if self.is_listening() {
            self.stop_listening();
        } else {
            self.start_listening();
        }
    }

    pub(crate) fn start_listening(&mut self) {
        if self.session.is_some() {
            // Previous worker is still draining; wait for its Stopped event.
            return;
        }

        let locator = FileLocator::with_default_roots(&self.home);
        let gate = ChannelConfirm::new(self.confirm_tx.clone());
        let dispatcher = Dispatcher::new(
            self.aliases.clone(),
            locator,
            Box::new(SystemOpener),
            Box::new(gate),
        );
        self.session = Some(ListenSession::start(
            dispatcher,
            self.config.settings.voice.clone(),
            self.work_dir.clone(),
        ));
    }

    pub(crate) fn stop_listening(&mut self) {
        if let Some(session) = &self.session {
            session.stop();
            self.push_log(LogEvent::system("Stopping after the current capture..."));
        }
    }

    /// Drain session events into the log and the speaker
    pub(crate) fn handle_session_events(&mut self) {
        let events = match &self.session {
            Some(session) => session.poll_events(),
            None => return,
        };

        for event in events {
            match event {
                SessionEvent::Started => {
                    self.push_log(LogEvent::system("Listening for commands..."));
                }
                SessionEvent::Heard { utterance } => {
                    self.history.push(utterance.clone());
                    self.push_log(LogEvent::heard(format!("Heard: '{utterance}'")));
                }
                SessionEvent::Outcome(outcome) => {
                    self.push_log(LogEvent::from_outcome(&outcome));
                    if self.config.settings.voice.spoken_feedback {
                        if let Some(text) = &outcome.spoken {
                            self.speaker.say(text.clone());
                        }
                    }
                }
                SessionEvent::ServiceError { message } => {
                    self.push_log(LogEvent::error(format!(
                        "Speech recognition error: {message}"
                    )));
                }
                SessionEvent::Stopped => {
                    self.push_log(LogEvent::system("Ready to listen"));
                    self.session = None;
                }
            }
        }
    }

    /// Pick up a pending confirmation prompt from the dispatch worker.
    /// At most one can be in flight: the worker blocks on the answer.
    pub(crate) fn handle_confirm_requests(&mut self) {
        if self.pending_confirm.is_none() {
            if let Ok(request) = self.confirm_rx.try_recv() {
                self.pending_confirm = Some(request);
            }
        }
    }

    pub(crate) fn clear_log(&mut self) {
        self.logs.clear();
        self.push_log(LogEvent::system("Log cleared"));
    }

    /// Initialize the global hotkey manager and register the listen toggle
    fn init_hotkey_manager(hotkey_str: &str) -> Option<GlobalHotKeyManager> {
        let manager = match GlobalHotKeyManager::new() {
            Ok(manager) => manager,
            Err(e) => {
                warn!("Failed to create global hotkey manager: {e}");
                return None;
            }
        };

        let (modifiers, code) = match parse_hotkey_string(hotkey_str) {
            Some((m, c)) => (m, c),
            None => {
                warn!("Invalid hotkey string '{hotkey_str}', using default");
                #[cfg(target_os = "macos")]
                let default_mods = Modifiers::SUPER | Modifiers::SHIFT;
                #[cfg(not(target_os = "macos"))]
                let default_mods = Modifiers::CONTROL | Modifiers::SHIFT;
                (default_mods, Code::KeyL)
            }
        };

        let hotkey = HotKey::new(Some(modifiers), code);
        if let Err(e) = manager.register(hotkey) {
            warn!("Failed to register global listen hotkey: {e}");
            return Some(manager);
        }

        info!("Global listen hotkey registered: {hotkey_str}");
        Some(manager)
    }
}
