//! Main view (central panel) rendering.

use eframe::egui;

use crate::app::ViewerApp;

impl ViewerApp {
    /// Render the central panel with the folio image.
    pub(crate) fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(tex) = &self.texture else {
                ui.centered_and_justified(|ui| {
                    ui.label(egui::RichText::new("No Image").weak())
                });
                return;
            };

            let sized = egui::load::SizedTexture::from_handle(tex);
            if self.ui_state.fit_to_window {
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Image::new(sized).shrink_to_fit());
                });
            } else {
                egui::ScrollArea::both().show(ui, |ui| {
                    ui.add(egui::Image::new(sized).fit_to_original_size(1.0));
                });
            }
        });
    }
}
