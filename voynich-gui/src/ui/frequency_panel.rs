//! Frequency side panel: editable text, totals and the per-letter table.

use eframe::egui;

use super::theme::{section_header, stat_label, stat_value, stat_value_highlight};
use crate::app::ViewerApp;
use crate::util::format_number;

impl ViewerApp {
    /// Render a single stat row with label on left and value on right.
    fn stat_row(ui: &mut egui::Ui, label: &str, value: &str) {
        ui.horizontal(|ui| {
            ui.label(stat_label(label));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(stat_value(value));
            });
        });
    }

    pub(crate) fn render_frequency_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("frequency_panel")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(section_header("Transcription"));
                let edited = ui
                    .add(
                        egui::TextEdit::multiline(&mut self.text)
                            .hint_text("Enter transcribed text")
                            .desired_rows(6)
                            .desired_width(f32::INFINITY),
                    )
                    .changed();
                if edited {
                    self.reanalyze();
                }

                ui.add_space(8.0);
                Self::stat_row(ui, "Letters", &format_number(self.table.total()));
                if self.table.unmapped_letters() > 0 {
                    Self::stat_row(
                        ui,
                        "Skipped (not a-z)",
                        &format_number(self.table.unmapped_letters()),
                    );
                }
                Self::stat_row(ui, "Reference", self.comparison.reference_name());

                ui.add_space(8.0);
                ui.label(section_header("Frequencies"));
                egui::ScrollArea::vertical().show(ui, |ui| self.render_letter_grid(ui));
            });
    }

    fn render_letter_grid(&self, ui: &mut egui::Ui) {
        egui::Grid::new("letter_grid")
            .num_columns(4)
            .striped(true)
            .show(ui, |ui| {
                ui.label(stat_label("Letter"));
                ui.label(stat_label("Count"));
                ui.label(stat_label("Found"));
                ui.label(stat_label("Expected"));
                ui.end_row();

                for (row, cmp) in self.table.letters().zip(self.comparison.rows()) {
                    ui.label(stat_value(&row.letter.to_string()));
                    ui.label(stat_value(&format_number(row.count)));
                    let found = format!("{:.2}%", row.percentage);
                    if row.count > 0 {
                        ui.label(stat_value_highlight(&found));
                    } else {
                        ui.label(stat_value(&found));
                    }
                    ui.label(stat_value(&format!("{:.2}%", cmp.expected)));
                    ui.end_row();
                }
            });
    }
}
