//! eframe::App implementation for VoxfileApp
//!
//! Contains the main update loop that runs every frame.

use eframe::egui;
use global_hotkey::GlobalHotKeyEvent;

use super::app::VoxfileApp;

impl eframe::App for VoxfileApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain worker events before rendering so the log is current
        self.handle_session_events();
        self.handle_confirm_requests();

        // Global listen hotkey toggles listening from any application
        if self.hotkey_manager.is_some() {
            if let Ok(event) = GlobalHotKeyEvent::receiver().try_recv() {
                if event.state == global_hotkey::HotKeyState::Pressed {
                    self.toggle_listening();
                }
            }
        }

        self.render_top_panel(ctx);
        self.render_log_panel(ctx);
        self.render_help_window(ctx);
        self.render_confirm_modal(ctx);

        // Keep polling the session while idle in the event loop
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
