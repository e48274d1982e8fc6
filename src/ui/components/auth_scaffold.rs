//! Shared chrome for the auth screens
//!
//! Renders the optional back chevron, the title/subtitle block, and a
//! centered column capped to form width; the screen supplies its fields
//! and actions as a closure.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

use crate::ui::responsive;
use crate::ui::theme;

/// Response from rendering the scaffold
pub struct AuthScaffoldResponse {
    /// User clicked the back chevron
    pub back_clicked: bool,
}

pub fn auth_scaffold(
    ui: &mut Ui,
    title: &str,
    subtitle: &str,
    show_back: bool,
    add_contents: impl FnOnce(&mut Ui),
) -> AuthScaffoldResponse {
    let mut response = AuthScaffoldResponse {
        back_clicked: false,
    };

    if show_back {
        ui.horizontal(|ui| {
            let back = ui
                .add(
                    egui::Button::new(
                        RichText::new(icons::CARET_LEFT)
                            .size(20.0)
                            .color(theme::TEXT_PRIMARY),
                    )
                    .frame(false),
                )
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if back.clicked() {
                response.back_clicked = true;
            }
        });
    }

    ui.vertical_centered(|ui| {
        ui.set_max_width(responsive::content_width(ui));
        ui.add_space(20.0);
        ui.label(
            RichText::new(title)
                .size(24.0)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(6.0);
        ui.label(
            RichText::new(subtitle)
                .size(14.0)
                .color(theme::TEXT_SECONDARY),
        );
        ui.add_space(28.0);

        // Fields and actions lay out left-to-right inside the capped column.
        ui.with_layout(egui::Layout::top_down(egui::Align::Min), add_contents);
    });

    response
}
