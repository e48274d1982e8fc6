//! Tappable page-indicator bars for the onboarding carousel

use eframe::egui::{self, Sense, Ui, vec2};

use crate::ui::theme;

const BAR_HEIGHT: f32 = 8.0;
const BAR_WIDTH: f32 = 14.0;
const BAR_WIDTH_SELECTED: f32 = 28.0;

/// Response from rendering the indicator
pub struct PageIndicatorResponse {
    /// User tapped a bar; jump to this page
    pub selected: Option<usize>,
}

/// Render one rounded bar per page; the current page's bar is wider and
/// accent-colored. Bars are clickable and report the tapped index.
pub fn page_indicator(ui: &mut Ui, page_count: usize, current: usize) -> PageIndicatorResponse {
    let mut response = PageIndicatorResponse { selected: None };

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        for index in 0..page_count {
            let is_current = index == current;
            let width = if is_current {
                BAR_WIDTH_SELECTED
            } else {
                BAR_WIDTH
            };
            let (rect, bar) = ui.allocate_exact_size(vec2(width, BAR_HEIGHT), Sense::click());
            if ui.is_rect_visible(rect) {
                let color = if is_current {
                    theme::ACCENT
                } else {
                    theme::OUTLINE
                };
                ui.painter().rect_filled(rect, BAR_HEIGHT / 2.0, color);
            }
            if bar.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                response.selected = Some(index);
            }
        }
    });

    response
}
