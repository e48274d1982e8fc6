//! Labeled form fields for the auth screens

use eframe::egui::{self, Margin, Response, RichText, Ui};
use egui_phosphor::regular as icons;

use crate::ui::theme;

fn field_label(ui: &mut Ui, label: &str) {
    ui.label(
        RichText::new(label)
            .size(13.0)
            .color(theme::TEXT_SECONDARY),
    );
    ui.add_space(2.0);
}

/// Single-line labeled text input
pub fn labeled_text_field(
    ui: &mut Ui,
    label: &str,
    value: &mut String,
    placeholder: &str,
) -> Response {
    field_label(ui, label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(placeholder)
            .margin(Margin::symmetric(10, 10))
            .desired_width(f32::INFINITY),
    )
}

/// Password input with a visibility toggle on the trailing edge
pub fn labeled_password_field(
    ui: &mut Ui,
    label: &str,
    value: &mut String,
    visible: &mut bool,
    placeholder: &str,
) -> Response {
    field_label(ui, label);
    let response = ui
        .horizontal(|ui| {
            let toggle_width = 30.0;
            let edit = ui.add(
                egui::TextEdit::singleline(value)
                    .hint_text(placeholder)
                    .password(!*visible)
                    .margin(Margin::symmetric(10, 10))
                    .desired_width(ui.available_width() - toggle_width),
            );
            let eye = if *visible { icons::EYE_SLASH } else { icons::EYE };
            let toggle = ui
                .add(
                    egui::Button::new(RichText::new(eye).size(16.0).color(theme::TEXT_MUTED))
                        .frame(false),
                )
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if toggle.clicked() {
                *visible = !*visible;
            }
            edit
        })
        .inner;
    response
}
