//! Whispi desktop: splash, topic onboarding, and a swipeable stack of
//! fact cards.

mod controller;
mod ui;

use clap::Parser;
use eframe::egui;

use crate::ui::{DesktopGuiApp, PersistedAppSettings, SETTINGS_STORAGE_KEY};

#[derive(Debug, Parser)]
#[command(name = "whispi", about = "Whispi desktop fact browser")]
struct Args {
    /// Forget the saved topic selection and start from the splash screen.
    #[arg(long)]
    reset_onboarding: bool,

    /// Initial window width, in points.
    #[arg(long, default_value_t = 420.0)]
    window_width: f32,

    /// Initial window height, in points.
    #[arg(long, default_value_t = 840.0)]
    window_height: f32,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Whispi")
            .with_inner_size([args.window_width, args.window_height])
            .with_min_inner_size([320.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Whispi",
        options,
        Box::new(move |cc| {
            let persisted = if args.reset_onboarding {
                None
            } else {
                cc.storage.and_then(|storage| {
                    storage
                        .get_string(SETTINGS_STORAGE_KEY)
                        .and_then(|text| serde_json::from_str::<PersistedAppSettings>(&text).ok())
                })
            };
            Ok(Box::new(DesktopGuiApp::new(persisted)))
        }),
    )
}
