//! Voxfile - a voice-driven file manager.
//!
//! Voxfile listens for spoken commands, transcribes them locally, and maps
//! them to everyday filesystem operations: open a known folder, search for a
//! file by name, delete a file (with confirmation), list directory contents.
//!
//! ## Command flow
//!
//! Each transcribed utterance runs through one command cycle:
//! classification (ordered keyword rules), argument extraction, action
//! handler, outcome. The outcome is rendered as a timestamped log line and,
//! optionally, a spoken confirmation. Destructive actions pass through a
//! synchronous confirmation gate before touching the filesystem.

pub mod config;
pub mod dispatch;
pub mod domain;
pub mod gui;
pub mod search;
pub mod speech;
pub mod voice;

pub use domain::*;
