//! eframe implementation of the image display interface.

use eframe::egui;
use voynich_core::{DisplayRequest, ImageDisplay, ReferenceDistribution};

use crate::app::ViewerApp;
use crate::error::ViewerError;
use crate::ui::theme;
use crate::viewer::folio_to_color_image;

/// Opens a native window with the folio and the frequency panel.
pub struct EguiDisplay {
    text: String,
    reference: ReferenceDistribution,
}

impl EguiDisplay {
    pub fn new(text: String, reference: ReferenceDistribution) -> Self {
        Self { text, reference }
    }
}

impl ImageDisplay for EguiDisplay {
    type Error = ViewerError;

    fn show(&mut self, request: &DisplayRequest) -> Result<(), ViewerError> {
        // Decode up front so a bad path never opens a blank window.
        let folio = voynich_io::load_image(&request.image_path)?;
        log::info!(
            "Loaded {} ({}x{})",
            request.image_path.display(),
            folio.width,
            folio.height
        );

        let image = folio_to_color_image(&folio);
        let path = request.image_path.clone();
        let text = std::mem::take(&mut self.text);
        let reference = self.reference.clone();

        let opts = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(request.title.clone())
                .with_inner_size([1200.0, 800.0]),
            ..Default::default()
        };
        eframe::run_native(
            &request.title,
            opts,
            Box::new(move |cc| {
                theme::configure_style(&cc.egui_ctx);
                let mut app = ViewerApp::new(text, reference);
                app.set_folio(&cc.egui_ctx, path, image);
                Ok(Box::new(app))
            }),
        )
        .map_err(|e| ViewerError::Window(e.to_string()))
    }
}
