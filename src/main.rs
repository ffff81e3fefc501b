mod app;
mod cli;
mod color;
mod compose;
mod config;
mod data;
mod error;
mod pipeline;
mod render;
mod state;
mod ui;
mod units;

use std::process::ExitCode;

use anyhow::{Context, Result};
use app::ExclusionPlotApp;
use clap::Parser;
use cli::Cli;
use config::PlotConfig;
use data::model::PlotLayerSet;
use eframe::egui;
use state::AppState;

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => PlotConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlotConfig::default(),
    };
    cli.apply(&mut config);
    config.validate()?;

    if let Some(csv) = &cli.inspect {
        return inspect(csv, &config);
    }

    let set = pipeline::load(&config).context("building exclusion regions")?;
    if config.persist_to_disk {
        pipeline::save(&set, &config)?;
    }
    if cli.headless {
        return Ok(());
    }
    run_viewer(config, set)
}

/// Single-file preview written next to the regular figures.
fn inspect(csv: &std::path::Path, config: &PlotConfig) -> Result<()> {
    let region = data::loader::load_region(csv, config.ceiling)?;
    let stem = csv
        .file_stem()
        .and_then(|s| s.to_str())
        .context("data file has no usable name")?;
    let label = data::catalog::label_for_stem(stem);
    let out = config.output_dir.join(format!("region_{stem}.png"));
    render::save_region_preview(&region, &label, &out, config.figure)?;
    Ok(())
}

fn run_viewer(config: PlotConfig, set: PlotLayerSet) -> Result<()> {
    log::info!("Opening viewer with {} curves", set.len());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Exclusion Plot",
        options,
        Box::new(move |_cc| Ok(Box::new(ExclusionPlotApp::new(AppState::new(config, Some(set)))))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
