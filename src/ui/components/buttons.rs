//! Shared button and link widgets for the onboarding/auth screens

use eframe::egui::{self, Color32, CornerRadius, Response, RichText, Stroke, Ui};
use egui_phosphor::regular as icons;

use crate::ui::theme;

const BUTTON_HEIGHT: f32 = 44.0;

/// Filled full-width action button ("Next", "Sign in", ...)
pub fn primary_button(ui: &mut Ui, text: &str) -> Response {
    ui.add_sized(
        [ui.available_width(), BUTTON_HEIGHT],
        egui::Button::new(
            RichText::new(text)
                .size(15.0)
                .strong()
                .color(theme::TEXT_ON_ACCENT),
        )
        .fill(theme::ACCENT)
        .corner_radius(CornerRadius::same(12)),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Outlined full-width companion button ("Previous")
pub fn secondary_button(ui: &mut Ui, text: &str) -> Response {
    ui.add_sized(
        [ui.available_width(), BUTTON_HEIGHT],
        egui::Button::new(RichText::new(text).size(15.0).color(theme::ACCENT))
            .fill(Color32::TRANSPARENT)
            .stroke(Stroke::new(1.0, theme::ACCENT))
            .corner_radius(CornerRadius::same(12)),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Accent-colored inline link ("Forgot Password?", footer links)
pub fn link_label(ui: &mut Ui, text: &str) -> Response {
    ui.add(
        egui::Label::new(RichText::new(text).size(13.0).color(theme::ACCENT))
            .sense(egui::Sense::click()),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// "Continue with Google" social button. Sign-in itself is not wired up.
pub fn google_button(ui: &mut Ui) -> Response {
    ui.add_sized(
        [ui.available_width(), BUTTON_HEIGHT],
        egui::Button::new(
            RichText::new(format!("{}  Continue with Google", icons::GOOGLE_LOGO))
                .size(15.0)
                .color(theme::TEXT_PRIMARY),
        )
        .fill(theme::SURFACE)
        .stroke(Stroke::new(1.0, theme::OUTLINE))
        .corner_radius(CornerRadius::same(12)),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}
