use eframe::egui::{Color32, Ui};
use egui_plot::{
    Bar, BarChart, HLine, Legend, Line, LineStyle, Plot, PlotPoints, PlotUi, Points, VLine,
};

use crate::analysis::Analysis;
use crate::analysis::segment::Segment;
use crate::state::{AppState, Chart};
use crate::ui::stacked;

const POINT_RADIUS: f32 = 3.5;
const SEGMENT_WIDTH: f32 = 1.5;

// ---------------------------------------------------------------------------
// Central panel dispatch
// ---------------------------------------------------------------------------

/// Render the active chart in the central panel.
pub fn chart_view(ui: &mut Ui, state: &AppState) {
    match state.active_chart {
        Chart::Decomposition => decomposition_plot(ui, state),
        Chart::SegmentPanels => stacked::segment_panels(ui, state),
        Chart::Residuals => residual_plot(ui, state, false),
        Chart::ResidualsMad => residual_plot(ui, state, true),
        Chart::SquaredErrors => squared_error_plot(ui, state),
    }
}

/// A plot with every interaction switched off.
pub fn static_plot<'a>(id: &str) -> Plot<'a> {
    Plot::new(id)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_double_click_reset(false)
}

// ---------------------------------------------------------------------------
// Shared layers
// ---------------------------------------------------------------------------

/// Vertical line for one observation's share of `segment`.
/// Returns `None` for `Other`, which has no sum of its own.
pub fn segment_line(analysis: &Analysis, i: usize, segment: Segment) -> Option<[[f64; 2]; 2]> {
    let x = analysis.predictor[i];
    let observed = analysis.response[i];
    let fitted = analysis.fit.fitted[i];
    let mean = analysis.metrics.mean;
    match segment {
        Segment::Sst => Some([[x, observed], [x, mean]]),
        Segment::Ssr => Some([[x, fitted], [x, mean]]),
        Segment::Sse => Some([[x, observed], [x, fitted]]),
        Segment::Other => None,
    }
}

/// `segment` lines of the observations labelled `segment`, with their row index.
pub fn labelled_segments(analysis: &Analysis, segment: Segment) -> Vec<(usize, [[f64; 2]; 2])> {
    analysis
        .indices_of(segment)
        .into_iter()
        .filter_map(|i| segment_line(analysis, i, segment).map(|ends| (i, ends)))
        .collect()
}

/// Draw the lines of the rows labelled `segment`, one legend entry.
pub fn draw_segments(plot_ui: &mut PlotUi, analysis: &Analysis, segment: Segment, color: Color32) {
    for (_, ends) in labelled_segments(analysis, segment) {
        let points: PlotPoints = ends.into_iter().collect();
        plot_ui.line(
            Line::new(points)
                .name(segment.to_string())
                .color(color)
                .width(SEGMENT_WIDTH),
        );
    }
}

pub fn draw_fit_line(plot_ui: &mut PlotUi, analysis: &Analysis) {
    let (min, max) = analysis.predictor_range();
    let points: PlotPoints = [min, max]
        .iter()
        .map(|&x| [x, analysis.fit.predict(x)])
        .collect();
    let label = format!(
        "fit: y = {:.2} {:+.2}x",
        analysis.fit.intercept, analysis.fit.slope
    );
    plot_ui.line(Line::new(points).name(label).color(Color32::WHITE).width(2.0));
}

pub fn draw_mean_line(plot_ui: &mut PlotUi, analysis: &Analysis) {
    plot_ui.hline(
        HLine::new(analysis.metrics.mean)
            .name(format!("mean = {:.2}", analysis.metrics.mean))
            .color(Color32::LIGHT_GRAY)
            .style(LineStyle::dashed_loose()),
    );
}

/// Observed points, one series per label.
pub fn draw_observations(plot_ui: &mut PlotUi, state: &AppState) {
    let analysis = &state.analysis;
    for segment in Segment::ALL {
        let points: PlotPoints = analysis
            .indices_of(segment)
            .into_iter()
            .map(|i| [analysis.predictor[i], analysis.response[i]])
            .collect();
        plot_ui.points(
            Points::new(points)
                .name(format!("{segment} label"))
                .color(state.colors.color_for(segment))
                .radius(POINT_RADIUS),
        );
    }
}

// ---------------------------------------------------------------------------
// 1. Decomposition overlay
// ---------------------------------------------------------------------------

fn decomposition_plot(ui: &mut Ui, state: &AppState) {
    let analysis = &state.analysis;

    static_plot("decomposition_plot")
        .legend(Legend::default())
        .x_axis_label(analysis.config.predictor.label())
        .y_axis_label(analysis.config.response.label())
        .show(ui, |plot_ui| {
            // Each row shows the segment of its own label.
            for segment in Segment::SUMS {
                let color = state.colors.color_for(segment);
                draw_segments(plot_ui, analysis, segment, color);
            }
            draw_mean_line(plot_ui, analysis);
            draw_fit_line(plot_ui, analysis);
            draw_observations(plot_ui, state);
        });
}

// ---------------------------------------------------------------------------
// 3./4. Residual vs fitted
// ---------------------------------------------------------------------------

/// Residual vs fitted points, one entry per observation.
pub fn residual_points(analysis: &Analysis) -> Vec<[f64; 2]> {
    analysis
        .fit
        .fitted
        .iter()
        .zip(&analysis.residuals)
        .map(|(&fitted, &residual)| [fitted, residual])
        .collect()
}

fn residual_plot(ui: &mut Ui, state: &AppState, with_mad: bool) {
    let analysis = &state.analysis;
    let id = if with_mad {
        "residual_mad_plot"
    } else {
        "residual_plot"
    };

    static_plot(id)
        .legend(Legend::default())
        .x_axis_label(format!("Fitted {}", analysis.config.response.label()))
        .y_axis_label("Residual")
        .show(ui, |plot_ui| {
            plot_ui.hline(HLine::new(0.0).name("zero").color(Color32::LIGHT_GRAY));
            if with_mad {
                plot_ui.hline(
                    HLine::new(analysis.metrics.mad)
                        .name(format!("MAD = {:.3}", analysis.metrics.mad))
                        .color(Color32::GOLD)
                        .style(LineStyle::dashed_loose()),
                );
            }
            let points: PlotPoints = residual_points(analysis).into_iter().collect();
            plot_ui.points(
                Points::new(points)
                    .name("residuals")
                    .color(Color32::LIGHT_BLUE)
                    .radius(POINT_RADIUS),
            );
        });
}

// ---------------------------------------------------------------------------
// 5. Squared error histogram
// ---------------------------------------------------------------------------

fn squared_error_plot(ui: &mut Ui, state: &AppState) {
    let analysis = &state.analysis;
    let bars: Vec<Bar> = analysis
        .squared_error_bins
        .iter()
        .map(|bin| Bar::new(bin.center(), bin.count as f64).width(bin.width()))
        .collect();

    static_plot("squared_error_plot")
        .legend(Legend::default())
        .x_axis_label("Squared residual")
        .y_axis_label("Count")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name("squared residuals")
                    .color(Color32::LIGHT_BLUE),
            );
            plot_ui.vline(
                VLine::new(analysis.metrics.mse)
                    .name(format!("MSE = {:.3}", analysis.metrics.mse))
                    .color(Color32::GOLD)
                    .style(LineStyle::dashed_loose()),
            );
        });
}
