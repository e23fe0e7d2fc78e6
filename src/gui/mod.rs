//! GUI module for the main voxfile application
//!
//! A single window with the listening controls, the timestamped command log
//! and the delete-confirmation dialog. The GUI thread polls the listening
//! session and the confirmation channel each frame; all capture and
//! dispatching happens on the session worker.

pub mod app;
pub mod app_eframe;
pub mod confirm;
pub mod hotkey;
pub mod log_panel;
pub mod runner;

pub use app::VoxfileApp;
pub use runner::run_gui;
