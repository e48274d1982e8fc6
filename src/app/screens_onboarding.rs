//! Onboarding carousel screen

use eframe::egui::{self, RichText, Sense, Ui};

use super::app::MoodtrackApp;
use crate::onboarding::{Advance, OnboardingFlow};
use crate::ui::components::buttons::{primary_button, secondary_button};
use crate::ui::components::page_indicator::page_indicator;
use crate::ui::theme;
use crate::ui::LayoutMode;

/// Horizontal drag distance after which a released swipe settles on the
/// neighboring page.
const SWIPE_THRESHOLD: f32 = 60.0;

const HELPER_TEXT: &str = "Let's set up what matters most to you. You can switch \
                           between Period, Pregnancy, and Medicine reminders anytime.";

#[derive(Default)]
struct ActionsResponse {
    previous_clicked: bool,
    next_clicked: bool,
}

impl MoodtrackApp {
    pub(super) fn display_screen_onboarding(&mut self, ui: &mut Ui) {
        // Take the flow out so screen closures can borrow the app freely;
        // it is restored below unless the flow finished.
        let Some(mut flow) = self.onboarding.take() else {
            return;
        };
        let mut finished = false;

        // Top bar: Skip pill on the right, hidden on the last page.
        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if !flow.is_last_page() {
                    let skip = theme::skip_pill_frame()
                        .show(ui, |ui| {
                            ui.add(
                                egui::Label::new(
                                    RichText::new("Skip").size(13.0).color(theme::ACCENT),
                                )
                                .sense(Sense::click()),
                            )
                        })
                        .inner
                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                    if skip.clicked() {
                        finished = matches!(flow.skip(), Advance::Finished);
                    }
                }
            });
        });
        ui.add_space(12.0);

        let mut actions = ActionsResponse::default();
        if LayoutMode::from_ui(ui).is_wide() {
            ui.columns(2, |cols| {
                self.display_pager(&mut cols[0], &mut flow);
                actions = display_actions(&mut cols[1], &flow);
            });
        } else {
            self.display_pager(ui, &mut flow);
            ui.add_space(20.0);
            actions = display_actions(ui, &flow);
        }

        if actions.previous_clicked {
            flow.go_previous();
        }
        if actions.next_clicked {
            finished |= matches!(flow.go_next(), Advance::Finished);
        }

        if finished {
            println!("[moodtrack] onboarding finished");
            // Flow state dies with the screen.
            self.swipe_dx = 0.0;
            self.nav.onboarding_finished();
        } else {
            self.onboarding = Some(flow);
        }
    }

    /// Current page content plus the indicator; a horizontal drag across
    /// the content settles into a jump to the neighboring page.
    fn display_pager(&mut self, ui: &mut Ui, flow: &mut OnboardingFlow) {
        let page = *flow.current_page();

        let content = ui.scope(|ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(page.title)
                        .size(22.0)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                ui.add_space(16.0);
                ui.add(
                    egui::Image::new(illustration(page.image_ref))
                        .max_height(220.0)
                        .corner_radius(12.0),
                );
                ui.add_space(16.0);
                ui.label(
                    RichText::new(page.description)
                        .size(14.0)
                        .color(theme::TEXT_SECONDARY),
                );
            });
        });

        let drag = ui.interact(
            content.response.rect,
            egui::Id::new("onboarding_pager"),
            Sense::drag(),
        );
        if drag.dragged() {
            self.swipe_dx += drag.drag_delta().x;
        }
        if drag.drag_stopped() {
            let index = flow.current_index();
            if self.swipe_dx <= -SWIPE_THRESHOLD {
                flow.jump_to(index + 1);
            } else if self.swipe_dx >= SWIPE_THRESHOLD {
                flow.jump_to(index.saturating_sub(1));
            }
            self.swipe_dx = 0.0;
        }

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            let dots = page_indicator(ui, flow.page_count(), flow.current_index());
            if let Some(target) = dots.selected {
                flow.jump_to(target);
            }
        });
    }
}

fn display_actions(ui: &mut Ui, flow: &OnboardingFlow) -> ActionsResponse {
    let mut response = ActionsResponse::default();

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(HELPER_TEXT)
                .size(13.0)
                .color(theme::TEXT_SECONDARY),
        );
    });
    ui.add_space(16.0);

    let show_previous = flow.current_index() > 0;
    let next_label = if flow.is_last_page() {
        "Get started"
    } else {
        "Next"
    };

    if show_previous {
        ui.columns(2, |cols| {
            if secondary_button(&mut cols[0], "Previous").clicked() {
                response.previous_clicked = true;
            }
            if primary_button(&mut cols[1], next_label).clicked() {
                response.next_clicked = true;
            }
        });
    } else if primary_button(ui, next_label).clicked() {
        response.next_clicked = true;
    }

    response
}

/// Resolve a page's opaque image id to the bundled illustration.
fn illustration(image_ref: &str) -> egui::ImageSource<'static> {
    match image_ref {
        "onboarding_pregnancy" => egui::include_image!("../../assets/onboarding_pregnancy.png"),
        "onboarding_medicine" => egui::include_image!("../../assets/onboarding_medicine.png"),
        "onboarding_private" => egui::include_image!("../../assets/onboarding_private.png"),
        _ => egui::include_image!("../../assets/onboarding_cycle.png"),
    }
}
