//! Signup screen

use eframe::egui::{RichText, Ui};

use super::app::MoodtrackApp;
use crate::ui::components::auth_field::{labeled_password_field, labeled_text_field};
use crate::ui::components::auth_scaffold::auth_scaffold;
use crate::ui::components::buttons::{google_button, link_label, primary_button};
use crate::ui::theme;

#[derive(Default)]
pub(super) struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub password_visible: bool,
}

impl MoodtrackApp {
    pub(super) fn display_screen_signup(&mut self, ui: &mut Ui) {
        let mut back_to_login = false;

        let scaffold = auth_scaffold(
            ui,
            "Create Your Account",
            "Create your account to explore period, pregnancy and medicine insights.",
            true,
            |ui| {
                labeled_text_field(ui, "Full name", &mut self.signup.full_name, "Alex Smith");
                ui.add_space(12.0);
                labeled_text_field(
                    ui,
                    "Email address",
                    &mut self.signup.email,
                    "example@gmail.com",
                );
                ui.add_space(12.0);
                labeled_password_field(
                    ui,
                    "Password",
                    &mut self.signup.password,
                    &mut self.signup.password_visible,
                    "@Sn123hsn#",
                );

                ui.add_space(20.0);
                if primary_button(ui, "Register").clicked() {
                    // TODO hook up real account creation once the backend exists
                    println!("[moodtrack] auth: signup submitted (stub)");
                }

                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Or continue with")
                            .size(13.0)
                            .color(theme::TEXT_MUTED),
                    );
                });
                ui.add_space(8.0);
                if google_button(ui).clicked() {
                    println!("[moodtrack] auth: google sign-in not implemented");
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
            // Collapses the stack back to Login rather than popping once.
            self.nav.return_to_login();
        }
    }
}
