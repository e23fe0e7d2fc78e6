//! Top controls and the command log panel.

use eframe::egui::{self, Color32, RichText};

use crate::domain::LogEventKind;

use super::app::VoxfileApp;

impl VoxfileApp {
    /// Title, status line and the control buttons
    pub(crate) fn render_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("Voxfile");

            let (status, color) = if self.is_listening() {
                ("Listening for commands...", Color32::from_rgb(220, 80, 80))
            } else {
                ("Ready to listen", Color32::from_rgb(80, 180, 110))
            };
            ui.label(RichText::new(status).color(color).strong());
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let listen_label = if self.is_listening() {
                    "Stop listening"
                } else {
                    "Start listening"
                };
                if ui.button(listen_label).clicked() {
                    self.toggle_listening();
                }
                if ui.button("Help").clicked() {
                    self.show_help = true;
                }
                if ui.button("Clear log").clicked() {
                    self.clear_log();
                }
                ui.label(
                    RichText::new(format!("{} commands this session", self.history.len())).weak(),
                );
            });
            ui.add_space(6.0);
        });
    }

    /// Scrollable, timestamped command log
    pub(crate) fn render_log_panel(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(RichText::new("Command log").strong());
            ui.add_space(4.0);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for event in &self.logs {
                        let color = match event.kind {
                            LogEventKind::Heard => Color32::from_rgb(120, 170, 240),
                            LogEventKind::Success => Color32::from_rgb(110, 200, 130),
                            LogEventKind::Error => Color32::from_rgb(230, 110, 110),
                            LogEventKind::Info => Color32::from_gray(200),
                            LogEventKind::System => Color32::from_gray(150),
                        };
                        ui.label(
                            RichText::new(format!(
                                "[{}] {}",
                                event.formatted_time(),
                                event.message
                            ))
                            .monospace()
                            .color(color),
                        );
                    }
                });
        });
    }
}
