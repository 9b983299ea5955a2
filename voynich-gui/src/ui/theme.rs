//! Viewer styling: parchment-toned light and dark palettes, monospace text.
//!
//! Both styles are registered once at startup; egui switches between them
//! when the system theme changes.

use eframe::egui::{self, Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Theme, Visuals};

/// Colors shared by both palettes.
pub mod accent {
    use eframe::egui::Color32;

    pub const BLUE: Color32 = Color32::from_rgb(0x4a, 0x9e, 0xff);
    pub const GREEN: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
    pub const RED: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
}

/// Surface, border and text colors of one theme.
#[derive(Debug, Clone, Copy)]
struct Palette {
    panel: Color32,
    input: Color32,
    border: Color32,
    text: Color32,
    text_muted: Color32,
    hover: Color32,
}

const DARK: Palette = Palette {
    panel: Color32::from_rgb(0x1e, 0x1c, 0x19),
    input: Color32::from_rgb(0x2a, 0x27, 0x23),
    border: Color32::from_rgb(0x3d, 0x39, 0x33),
    text: Color32::from_rgb(0xe6, 0xdf, 0xd2),
    text_muted: Color32::from_rgb(0x8c, 0x84, 0x78),
    hover: Color32::from_rgb(0x38, 0x34, 0x2e),
};

const LIGHT: Palette = Palette {
    panel: Color32::from_rgb(0xf7, 0xf1, 0xe3),
    input: Color32::from_rgb(0xee, 0xe6, 0xd3),
    border: Color32::from_rgb(0xcf, 0xc4, 0xac),
    text: Color32::from_rgb(0x2b, 0x24, 0x1a),
    text_muted: Color32::from_rgb(0x6e, 0x63, 0x52),
    hover: Color32::from_rgb(0xe3, 0xd8, 0xc0),
};

/// Registers the dark and light viewer styles with `ctx`.
pub fn configure_style(ctx: &egui::Context) {
    for theme in [Theme::Dark, Theme::Light] {
        ctx.set_style_of(theme, build_style(theme));
    }
}

fn build_style(theme: Theme) -> Style {
    let (palette, visuals) = match theme {
        Theme::Dark => (DARK, Visuals::dark()),
        Theme::Light => (LIGHT, Visuals::light()),
    };
    let mut style = Style {
        visuals,
        ..Style::default()
    };

    let visuals = &mut style.visuals;
    visuals.window_fill = palette.panel;
    visuals.panel_fill = palette.panel;
    visuals.faint_bg_color = palette.input;
    visuals.extreme_bg_color = palette.input;
    visuals.selection.bg_fill = accent::BLUE.gamma_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent::BLUE);

    let widgets = &mut visuals.widgets;
    widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_muted);
    widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.border);
    for w in [&mut widgets.inactive, &mut widgets.open] {
        w.bg_fill = palette.input;
        w.fg_stroke = Stroke::new(1.0, palette.text);
        w.bg_stroke = Stroke::new(1.0, palette.border);
    }
    widgets.hovered.bg_fill = palette.hover;
    widgets.hovered.fg_stroke = Stroke::new(1.0, palette.text);
    widgets.hovered.bg_stroke = Stroke::new(1.0, accent::BLUE);
    widgets.active.bg_fill = accent::BLUE;
    widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    widgets.active.bg_stroke = Stroke::new(1.0, accent::BLUE);
    for w in [
        &mut widgets.noninteractive,
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
        &mut widgets.open,
    ] {
        w.rounding = Rounding::same(3.0);
    }

    // Transcriptions read best with fixed-width glyphs.
    style.text_styles = [
        (TextStyle::Small, FontId::new(10.0, FontFamily::Monospace)),
        (TextStyle::Body, FontId::new(12.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(12.0, FontFamily::Monospace)),
        (TextStyle::Heading, FontId::new(14.0, FontFamily::Monospace)),
        (TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace)),
    ]
    .into();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);

    style
}

/// Uppercase heading above a side-panel section.
pub fn section_header(text: &str) -> egui::RichText {
    egui::RichText::new(text.to_uppercase()).size(11.0).strong()
}

pub fn stat_label(text: &str) -> egui::RichText {
    egui::RichText::new(text).size(11.0).weak()
}

pub fn stat_value(text: &str) -> egui::RichText {
    egui::RichText::new(text).size(11.0)
}

/// Value for a letter that occurs in the text.
pub fn stat_value_highlight(text: &str) -> egui::RichText {
    egui::RichText::new(text)
        .size(11.0)
        .color(accent::GREEN)
        .strong()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_follow_theme() {
        let dark = build_style(Theme::Dark);
        assert!(dark.visuals.dark_mode);
        assert_eq!(dark.visuals.panel_fill, DARK.panel);

        let light = build_style(Theme::Light);
        assert!(!light.visuals.dark_mode);
        assert_eq!(light.visuals.panel_fill, LIGHT.panel);
        assert_eq!(light.visuals.widgets.active.bg_fill, accent::BLUE);
    }

    #[test]
    fn test_monospace_body() {
        let style = build_style(Theme::Dark);
        let body = &style.text_styles[&TextStyle::Body];
        assert_eq!(body.family, FontFamily::Monospace);
    }
}
