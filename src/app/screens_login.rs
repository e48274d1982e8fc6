//! Login screen

use eframe::egui::{self, RichText, Ui};

use super::app::MoodtrackApp;
use crate::ui::components::auth_field::{labeled_password_field, labeled_text_field};
use crate::ui::components::auth_scaffold::auth_scaffold;
use crate::ui::components::buttons::{google_button, link_label, primary_button};
use crate::ui::theme;

#[derive(Default)]
pub(super) struct LoginForm {
    pub email: String,
    pub password: String,
    pub password_visible: bool,
    pub remember_me: bool,
}

impl MoodtrackApp {
    pub(super) fn display_screen_login(&mut self, ui: &mut Ui) {
        let mut open_signup = false;
        let mut open_forgot = false;

        // Login is the back-stack root: no back chevron here.
        auth_scaffold(
            ui,
            "Welcome Back!",
            "Sign in to access your unified women's health companion.",
            false,
            |ui| {
                labeled_text_field(
                    ui,
                    "Email address",
                    &mut self.login.email,
                    "example@gmail.com",
                );
                ui.add_space(12.0);
                labeled_password_field(
                    ui,
                    "Password",
                    &mut self.login.password,
                    &mut self.login.password_visible,
                    "@Sn123hsn#",
                );

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.checkbox(
                        &mut self.login.remember_me,
                        RichText::new("Remember me")
                            .size(13.0)
                            .color(theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            if link_label(ui, "Forgot Password?").clicked() {
                                open_forgot = true;
                            }
                        },
                    );
                });

                ui.add_space(20.0);
                if primary_button(ui, "Sign in").clicked() {
                    // TODO hook up real sign-in once the backend exists
                    println!("[moodtrack] auth: sign-in submitted (stub)");
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
                    if link_label(ui, "Don't have an account? Sign up").clicked() {
                        open_signup = true;
                    }
                });
            },
        );

        if open_signup {
            self.nav.open_signup();
        }
        if open_forgot {
            self.nav.open_forgot_password();
        }
    }
}
