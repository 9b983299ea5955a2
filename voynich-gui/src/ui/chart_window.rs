//! Expected vs. found bar chart window.

use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use super::theme::accent;
use crate::app::ViewerApp;
use crate::util::usize_to_f64;

const BAR_WIDTH: f64 = 0.4;

impl ViewerApp {
    /// Render the comparison chart window (if visible).
    pub(crate) fn render_chart_window(&mut self, ctx: &egui::Context) {
        if !self.ui_state.show_chart {
            return;
        }

        let rows = self.comparison.rows();
        let expected: Vec<Bar> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                Bar::new(usize_to_f64(i) - BAR_WIDTH / 2.0, row.expected)
                    .width(BAR_WIDTH)
                    .name(row.letter.to_string())
            })
            .collect();
        let found: Vec<Bar> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                Bar::new(usize_to_f64(i) + BAR_WIDTH / 2.0, row.observed)
                    .width(BAR_WIDTH)
                    .name(row.letter.to_string())
            })
            .collect();
        let reference_name = self.comparison.reference_name().to_string();

        egui::Window::new("Letter Frequencies")
            .open(&mut self.ui_state.show_chart)
            .default_size([640.0, 320.0])
            .show(ctx, |ui| {
                Plot::new("frequency_chart")
                    .legend(Legend::default())
                    .x_axis_label("Letter (a = 0)")
                    .y_axis_label("Percent")
                    .include_y(0.0)
                    .show(ui, |plot_ui| {
                        plot_ui.bar_chart(
                            BarChart::new(expected)
                                .color(accent::BLUE)
                                .name(format!("Expected ({reference_name})")),
                        );
                        plot_ui.bar_chart(BarChart::new(found).color(accent::GREEN).name("Found"));
                    });
            });
    }
}
