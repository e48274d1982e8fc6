//! Forgot-password screen

use eframe::egui::Ui;

use super::app::MoodtrackApp;
use crate::ui::components::auth_field::labeled_text_field;
use crate::ui::components::auth_scaffold::auth_scaffold;
use crate::ui::components::buttons::{link_label, primary_button};

#[derive(Default)]
pub(super) struct ForgotPasswordForm {
    pub email: String,
}

impl MoodtrackApp {
    pub(super) fn display_screen_forgot_password(&mut self, ui: &mut Ui) {
        let mut back_to_login = false;

        let scaffold = auth_scaffold(
            ui,
            "Forgot Password?",
            "Enter your email and we'll send a reset code instantly.",
            true,
            |ui| {
                labeled_text_field(
                    ui,
                    "Email address",
                    &mut self.forgot.email,
                    "example@gmail.com",
                );

                ui.add_space(20.0);
                if primary_button(ui, "Send Code").clicked() {
                    // TODO hook up the reset-code mailer once the backend exists
                    println!("[moodtrack] auth: reset code requested (stub)");
                }

                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    if link_label(ui, "Already have an account? Sign in").clicked() {
                        back_to_login = true;
                    }
                });
            },
        );

        if scaffold.back_clicked {
            self.nav.pop_back_stack();
        }
        if back_to_login {
            self.nav.return_to_login();
        }
    }
}
