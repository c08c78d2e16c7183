//! Four-in-a-row GUI
//!
//! Play against the computer or another player on a 6x6 board.

use std::path::PathBuf;

use anyhow::Context;
use four_row::config::AppConfig;
use four_row::ui::FourRowApp;
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "four_row.toml";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(CONFIG_PATH), PathBuf::from);
    let config = AppConfig::load_or_default(&path)
        .with_context(|| format!("loading {}", path.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 700.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("Four in a Row"),
        ..Default::default()
    };

    eframe::run_native(
        "Four in a Row",
        options,
        Box::new(move |cc| Ok(Box::new(FourRowApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}
