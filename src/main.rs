mod analysis;
mod app;
mod color;
mod data;
mod state;
mod ui;

use analysis::{Analysis, AnalysisConfig};
use anyhow::{Context, Result};
use app::RegressionApp;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let analysis = run_analysis().inspect_err(|e| log::error!("Analysis aborted: {e:#}"))?;

    for line in analysis.metrics.summary_lines() {
        println!("{line}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Regression Panda – Variance Decomposition",
        options,
        Box::new(|_cc| Ok(Box::new(RegressionApp::new(analysis)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}

/// Load the built-in table and run the whole pipeline.
fn run_analysis() -> Result<Analysis> {
    let dataset = data::loader::load_builtin()?;
    log::info!("Loaded {} vehicles", dataset.len());

    let config = AnalysisConfig::default();
    Analysis::run(&dataset, &config)
        .with_context(|| format!("regressing {} on {}", config.response, config.predictor))
}
