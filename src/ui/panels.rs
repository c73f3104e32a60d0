use eframe::egui::{self, Grid, RichText, ScrollArea, Ui};

use crate::state::{AppState, Chart};

// ---------------------------------------------------------------------------
// Left side panel – fit summary and legend
// ---------------------------------------------------------------------------

/// Render the left summary panel.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    let analysis = &state.analysis;
    let metrics = &analysis.metrics;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Model");
            ui.separator();
            ui.label(format!(
                "{} ~ {}",
                analysis.config.response, analysis.config.predictor
            ));
            Grid::new("coefficients")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    ui.label("Intercept");
                    ui.monospace(format!("{:.4}", analysis.fit.intercept));
                    ui.end_row();
                    ui.label("Slope");
                    ui.monospace(format!("{:.4}", analysis.fit.slope));
                    ui.end_row();
                    ui.label("n");
                    ui.monospace(metrics.n.to_string());
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.heading("Metrics");
            ui.separator();
            Grid::new("metrics")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    let rows = [
                        ("SST", metrics.sst),
                        ("SSR", metrics.ssr),
                        ("SSE", metrics.sse),
                        ("MSE", metrics.mse),
                        ("R²", metrics.r_squared),
                        ("MAD", metrics.mad),
                    ];
                    for (name, value) in rows {
                        ui.label(name);
                        ui.monospace(format!("{value:.4}"));
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.heading("Labels");
            ui.separator();
            for (segment, count) in &state.label_counts {
                let color = state.colors.color_for(*segment);
                ui.label(RichText::new(format!("● {segment}  ({count})")).color(color));
            }

            ui.add_space(8.0);
            egui::CollapsingHeader::new(RichText::new("Observations").strong())
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    Grid::new("observations")
                        .num_columns(3)
                        .striped(true)
                        .show(ui, |ui: &mut Ui| {
                            for ((name, residual), segment) in analysis
                                .names
                                .iter()
                                .zip(&analysis.residuals)
                                .zip(&analysis.labels)
                            {
                                let color = state.colors.color_for(*segment);
                                ui.label(name.as_str());
                                ui.monospace(format!("{residual:+.3}"));
                                ui.label(RichText::new(segment.to_string()).color(color));
                                ui.end_row();
                            }
                        });
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the chart selector.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        for chart in Chart::ALL {
            if ui
                .selectable_label(state.active_chart == chart, chart.title())
                .clicked()
            {
                state.select_chart(chart);
            }
        }

        ui.separator();

        ui.label(format!(
            "{} observations, R² = {:.4}",
            state.analysis.metrics.n, state.analysis.metrics.r_squared
        ));
    });
}
