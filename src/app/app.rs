// Core app structure and main update loop

use std::time::{Duration, Instant};

use eframe::egui;

use super::screens_forgot_password::ForgotPasswordForm;
use super::screens_login::LoginForm;
use super::screens_signup::SignupForm;
use crate::nav::{AppScreen, NavGraph};
use crate::onboarding::{onboarding_pages, BackPress, ExitGate, OnboardingFlow, PageSequence};
use crate::ui::theme;

/// How long the splash screen holds before onboarding replaces it.
pub const BOOT_DELAY: Duration = Duration::from_millis(1800);

/// How long the "press back again" toast stays visible.
const EXIT_HINT_DURATION: Duration = Duration::from_millis(1500);

pub struct MoodtrackApp {
    pub(super) nav: NavGraph,
    pages: PageSequence,

    /// Flow state for the Onboarding screen; Some only while it is current.
    pub(super) onboarding: Option<OnboardingFlow>,

    /// When the splash screen was first shown. Dropped the moment Splash
    /// stops being current, so a pending boot transition cannot fire after
    /// the screen is gone.
    splash_started: Option<Instant>,

    /// Double-back exit gate for the Login screen (the back-stack root).
    root_exit_gate: ExitGate,
    exit_hint_shown: Option<Instant>,

    /// Accumulated horizontal drag on the onboarding pager.
    pub(super) swipe_dx: f32,

    pub(super) login: LoginForm,
    pub(super) signup: SignupForm,
    pub(super) forgot: ForgotPasswordForm,
}

impl MoodtrackApp {
    pub fn new() -> Self {
        Self {
            nav: NavGraph::new(),
            pages: onboarding_pages(),
            onboarding: None,
            splash_started: None,
            root_exit_gate: ExitGate::new(),
            exit_hint_shown: None,
            swipe_dx: 0.0,
            login: LoginForm::default(),
            signup: SignupForm::default(),
            forgot: ForgotPasswordForm::default(),
        }
    }

    /// Check the splash deadline against the frame clock. Only runs while
    /// Splash is current; leaving the screen clears the start instant.
    fn tick_splash(&mut self, ctx: &egui::Context) {
        if self.nav.current() != AppScreen::Splash {
            self.splash_started = None;
            return;
        }
        let started = *self.splash_started.get_or_insert_with(Instant::now);
        if started.elapsed() >= BOOT_DELAY {
            self.splash_started = None;
            self.nav.splash_finished();
            self.onboarding = Some(OnboardingFlow::new(self.pages));
        } else {
            ctx.request_repaint_after(Duration::from_millis(33));
        }
    }

    pub(super) fn splash_elapsed(&self) -> Duration {
        self.splash_started
            .map(|started| started.elapsed())
            .unwrap_or_default()
    }

    /// Escape plays the role of the system back button.
    fn handle_back_key(&mut self, ctx: &egui::Context) {
        if !ctx.input(|input| input.key_pressed(egui::Key::Escape)) {
            return;
        }
        let now = Instant::now();
        let outcome = match self.nav.current() {
            // Nothing behind the splash screen; back is ignored there.
            AppScreen::Splash => return,
            AppScreen::Onboarding => match self.onboarding.as_mut() {
                Some(flow) => flow.handle_back_press(now),
                None => return,
            },
            AppScreen::Login => self.root_exit_gate.press(now),
            AppScreen::Signup | AppScreen::ForgotPassword => {
                self.nav.pop_back_stack();
                BackPress::Consumed
            }
        };
        match outcome {
            BackPress::Consumed => {}
            BackPress::ExitConfirmationPending => {
                self.exit_hint_shown = Some(now);
            }
            BackPress::ExitRequested => {
                println!("[moodtrack] exit confirmed by double back press");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    /// Arrow keys act like swipes on the onboarding pager.
    fn handle_arrow_keys(&mut self, ctx: &egui::Context) {
        if self.nav.current() != AppScreen::Onboarding {
            return;
        }
        let Some(flow) = self.onboarding.as_mut() else {
            return;
        };
        let (left, right) = ctx.input(|input| {
            (
                input.key_pressed(egui::Key::ArrowLeft),
                input.key_pressed(egui::Key::ArrowRight),
            )
        });
        if left {
            flow.jump_to(flow.current_index().saturating_sub(1));
        }
        if right {
            // A swipe can never finish the flow; the jump clamps at the
            // last page.
            flow.jump_to(flow.current_index() + 1);
        }
    }

    fn display_exit_hint(&mut self, ctx: &egui::Context) {
        let Some(shown) = self.exit_hint_shown else {
            return;
        };
        if shown.elapsed() >= EXIT_HINT_DURATION {
            self.exit_hint_shown = None;
            return;
        }
        egui::Area::new("exit_hint".into())
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -32.0))
            .interactable(false)
            .show(ctx, |ui| {
                theme::toast_frame().show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("Press back again to exit")
                            .color(theme::TEXT_ON_ACCENT),
                    );
                });
            });
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

impl eframe::App for MoodtrackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick_splash(ctx);
        self.handle_back_key(ctx);
        self.handle_arrow_keys(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(theme::BG)
                    .inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| match self.nav.current() {
                AppScreen::Splash => self.display_screen_splash(ui),
                AppScreen::Onboarding => self.display_screen_onboarding(ui),
                AppScreen::Login => self.display_screen_login(ui),
                AppScreen::Signup => self.display_screen_signup(ui),
                AppScreen::ForgotPassword => self.display_screen_forgot_password(ui),
            });

        self.display_exit_hint(ctx);
    }
}
