//! Main application state and logic.
//!
//! Contains the `ViewerApp` struct which holds the folio texture, the text
//! being analyzed and the analysis derived from it.

use std::path::PathBuf;

use eframe::egui;
use voynich_core::{compare, Comparison, FrequencyTable, ReferenceDistribution};

use crate::state::{StatusState, UiState};
use crate::viewer::folio_to_color_image;

/// Main application state.
pub struct ViewerApp {
    /// Path of the folio currently shown.
    pub(crate) image_path: Option<PathBuf>,
    /// Uploaded folio texture.
    pub(crate) texture: Option<egui::TextureHandle>,

    /// Transcription being analyzed, editable in the side panel.
    pub(crate) text: String,
    /// Reference distribution to compare against.
    pub(crate) reference: ReferenceDistribution,
    /// Letter counts for `text`.
    pub(crate) table: FrequencyTable,
    /// Expected vs. observed rows for `text`.
    pub(crate) comparison: Comparison,

    /// UI display state.
    pub(crate) ui_state: UiState,
    /// Status bar message.
    pub(crate) status: StatusState,
}

impl ViewerApp {
    pub fn new(text: String, reference: ReferenceDistribution) -> Self {
        let table = FrequencyTable::from_text(&text);
        let comparison = compare(&table, &reference);
        Self {
            image_path: None,
            texture: None,
            text,
            reference,
            table,
            comparison,
            ui_state: UiState::default(),
            status: StatusState::default(),
        }
    }

    /// Replace the displayed folio with an already decoded image.
    pub fn set_folio(&mut self, ctx: &egui::Context, path: PathBuf, image: egui::ColorImage) {
        let [w, h] = image.size;
        self.texture = Some(ctx.load_texture("folio", image, egui::TextureOptions::LINEAR));
        self.status.info(format!("{} ({w}x{h})", path.display()));
        self.image_path = Some(path);
    }

    /// Decode and show another image, keeping the current one on failure.
    pub fn open_image(&mut self, ctx: &egui::Context, path: PathBuf) {
        match voynich_io::load_image(&path) {
            Ok(folio) => {
                log::info!("Loaded {}", path.display());
                self.set_folio(ctx, path, folio_to_color_image(&folio));
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status.error(format!("Error: {e}"));
            }
        }
    }

    /// Recompute the analysis after the text changed.
    pub fn reanalyze(&mut self) {
        self.table = FrequencyTable::from_text(&self.text);
        self.comparison = compare(&self.table, &self.reference);
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_status_bar(ctx);
        self.render_frequency_panel(ctx);
        self.render_chart_window(ctx);
        self.render_central_panel(ctx);
    }
}
