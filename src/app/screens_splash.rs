//! Splash screen shown while the app boots

use eframe::egui::{self, RichText, Ui};

use super::app::MoodtrackApp;
use crate::ui::theme;

impl MoodtrackApp {
    pub(super) fn display_screen_splash(&mut self, ui: &mut Ui) {
        let progress = splash_progress(self.splash_elapsed().as_millis() as u64);

        ui.add_space(ui.available_height() * 0.35);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Unified Women's Health")
                    .size(24.0)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new("Tracking cycles, pregnancy, and medicines in one gentle place.")
                    .size(14.0)
                    .color(theme::TEXT_SECONDARY),
            );
            ui.add_space(20.0);
            ui.add(
                egui::ProgressBar::new(progress)
                    .desired_width(200.0)
                    .fill(theme::ACCENT),
            );
        });
    }
}

/// Bouncing boot progress: 15% to 95% and back on a 900 ms triangle wave.
/// Purely decorative; the actual transition fires on the boot deadline.
fn splash_progress(elapsed_ms: u64) -> f32 {
    let phase = (elapsed_ms % 1800) as f32 / 900.0;
    if phase <= 1.0 {
        0.15 + 0.80 * phase
    } else {
        0.95 - 0.80 * (phase - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_stays_in_band() {
        for ms in (0..5400).step_by(50) {
            let p = splash_progress(ms);
            assert!((0.149..=0.951).contains(&p), "progress {p} at {ms}ms");
        }
    }

    #[test]
    fn test_progress_bounces() {
        assert_eq!(splash_progress(0), 0.15);
        assert!((splash_progress(900) - 0.95).abs() < 1e-5);
        assert!(splash_progress(1350) < 0.95);
        assert_eq!(splash_progress(1800), 0.15);
    }
}
