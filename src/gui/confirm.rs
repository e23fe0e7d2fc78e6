//! Modal dialogs: delete confirmation and the help window.

use eframe::egui::{self, Color32, RichText};

use crate::dispatch::HELP_TEXT;

use super::app::VoxfileApp;

impl VoxfileApp {
    /// Delete confirmation modal. The dispatch worker is blocked on the
    /// answer, so exactly one prompt can be pending at a time.
    pub(crate) fn render_confirm_modal(&mut self, ctx: &egui::Context) {
        let Some(request) = &self.pending_confirm else {
            return;
        };
        let prompt = request.prompt.clone();

        let mut answer: Option<bool> = None;
        egui::Window::new("Confirm deletion")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(&prompt);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui
                        .button(RichText::new("Delete").color(Color32::from_rgb(230, 110, 110)))
                        .clicked()
                    {
                        answer = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        answer = Some(false);
                    }
                });
            });

        if let Some(approved) = answer {
            if let Some(request) = self.pending_confirm.take() {
                request.answer(approved);
            }
        }
    }

    /// Help window with the command reference
    pub(crate) fn render_help_window(&mut self, ctx: &egui::Context) {
        if !self.show_help {
            return;
        }

        let mut open = true;
        egui::Window::new("Help")
            .open(&mut open)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.monospace(HELP_TEXT);
            });
        self.show_help = open;
    }
}
