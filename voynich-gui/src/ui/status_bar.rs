//! Bottom bar with file actions and status text.

use eframe::egui;
use rfd::FileDialog;

use super::theme::accent;
use crate::app::ViewerApp;

impl ViewerApp {
    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let muted = ui.visuals().weak_text_color();
            ui.horizontal(|ui| {
                if ui.button("Open image…").clicked() {
                    if let Some(path) = FileDialog::new()
                        .add_filter("Images", &["jpg", "jpeg", "png", "tif", "tiff", "bmp"])
                        .pick_file()
                    {
                        self.open_image(ctx, path);
                    }
                }
                ui.checkbox(&mut self.ui_state.fit_to_window, "Fit");
                ui.checkbox(&mut self.ui_state.show_chart, "Chart");
                ui.separator();

                let color = if self.status.is_error {
                    accent::RED
                } else {
                    muted
                };
                ui.label(egui::RichText::new(&self.status.text).color(color));
            });
        });
    }
}
