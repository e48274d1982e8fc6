//! Light theme for the app: soft rose accent over warm neutrals.

use eframe::egui::{self, Color32, CornerRadius, Margin, Stroke};

pub const BG: Color32 = Color32::from_rgb(253, 247, 249);
pub const SURFACE: Color32 = Color32::from_rgb(255, 255, 255);

pub const ACCENT: Color32 = Color32::from_rgb(214, 85, 126);
pub const ACCENT_DIM: Color32 = Color32::from_rgb(186, 62, 102);
/// Washed-out accent for pills and selections
pub const ACCENT_SOFT: Color32 = Color32::from_rgb(248, 228, 235);

pub const OUTLINE: Color32 = Color32::from_rgb(226, 208, 214);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(61, 45, 51);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(110, 90, 98);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(158, 138, 145);
pub const TEXT_ON_ACCENT: Color32 = Color32::from_rgb(255, 255, 255);

const TOAST_BG: Color32 = Color32::from_rgba_premultiplied(42, 31, 35, 235);

/// Install fonts (phosphor icons) and the light visuals.
pub fn apply_theme(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = BG;
    visuals.window_fill = SURFACE;
    visuals.extreme_bg_color = SURFACE;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT_SOFT;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT_DIM);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, OUTLINE);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
    });
}

/// Rounded pill behind the onboarding "Skip" action.
pub fn skip_pill_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(ACCENT_SOFT)
        .corner_radius(CornerRadius::same(20))
        .inner_margin(Margin::symmetric(14, 6))
}

/// Dark transient toast, e.g. the exit-confirmation hint.
pub fn toast_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(TOAST_BG)
        .corner_radius(CornerRadius::same(18))
        .inner_margin(Margin::symmetric(16, 9))
}
