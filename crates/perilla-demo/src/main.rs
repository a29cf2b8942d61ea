//! Perilla demo - a standalone editor window full of filmstrip knobs.
//!
//! Exercises the whole kit end to end: a parameter tree, bound knobs with
//! remap and reset configuration, JSON preset save/recall, and display-scale
//! handling — everything a plugin editor does, minus the plugin host.

mod app;

use clap::Parser;
use eframe::egui;

use crate::app::PerillaApp;

/// Perilla filmstrip knob demo.
#[derive(Parser, Debug)]
#[command(name = "perilla-demo")]
#[command(about = "Filmstrip knob widget kit demo")]
#[command(version)]
struct Args {
    /// Preset file to save to / load from.
    #[arg(long, default_value = "perilla-preset.json")]
    preset: std::path::PathBuf,
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge legacy log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();
    tracing::info!("Starting perilla demo");
    tracing::info!(preset = %args.preset.display(), "preset path");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 220.0])
            .with_min_inner_size([360.0, 180.0])
            .with_title("Perilla"),
        ..Default::default()
    };

    eframe::run_native(
        "Perilla",
        options,
        Box::new(move |cc| Ok(Box::new(PerillaApp::new(cc, args.preset)))),
    )
}
