//! Calculator - a desktop calculator for the Slow Computer
//!
//! Add, subtract, multiply and divide, one operation at a time.

mod app;
mod fit;
mod theme;

use app::CalculatorApp;
use calccore::config::{config_path, Config};
use eframe::NativeOptions;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load_or_default(&config_path("calculator"));

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([220.0, 320.0])
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| {
            theme::CalcTheme::default().apply(&cc.egui_ctx);
            Box::new(CalculatorApp::new(cc, config))
        }),
    )
}
