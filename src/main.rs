mod app;
mod nav;
mod onboarding;
mod ui;

use crate::app::MoodtrackApp;

fn main() -> eframe::Result {
    if std::env::args().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    let fullscreen = std::env::args().any(|arg| arg == "--fullscreen");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([360.0, 640.0])
            .with_fullscreen(fullscreen)
            .with_icon(
                eframe::icon_data::from_png_bytes(&include_bytes!("../res/icon.png")[..])
                    .expect("Failed to load icon"),
            ),
        ..Default::default()
    };

    println!("[moodtrack] Starting eframe app...");

    eframe::run_native(
        "Moodtrack",
        options,
        Box::new(|cc| {
            // This gives us image support:
            egui_extras::install_image_loaders(&cc.egui_ctx);

            // Apply custom theme
            crate::ui::theme::apply_theme(&cc.egui_ctx);

            Ok(Box::new(MoodtrackApp::new()))
        }),
    )
}

static USAGE_TEXT: &str = r#"
Usage: moodtrack [OPTIONS]

Options:
    --fullscreen          Start the app in fullscreen mode
    --help                Show this help text
"#;
