use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_plot::Legend;

use crate::analysis::segment::Segment;
use crate::state::AppState;
use crate::ui::plot::{draw_fit_line, draw_mean_line, draw_segments, static_plot};

const TITLE_HEIGHT: f32 = 22.0;
const PANEL_GAP: f32 = 4.0;

// ---------------------------------------------------------------------------
// 2. One panel per segment type, shared axes
// ---------------------------------------------------------------------------

/// Three stacked panels (SST, SSR, SSE) over a linked x range, with one
/// y title on top and one x title below the stack. Panel k only draws the
/// rows labelled k.
pub fn segment_panels(ui: &mut Ui, state: &AppState) {
    let analysis = &state.analysis;
    let (min, max) = analysis.predictor_range();
    let panels = Segment::SUMS.len();

    ui.label(RichText::new(analysis.config.response.label()).strong());

    let spare = ui.available_height() - TITLE_HEIGHT - PANEL_GAP * panels as f32;
    let panel_height = (spare / panels as f32).max(80.0);

    for (k, segment) in Segment::SUMS.into_iter().enumerate() {
        let last = k + 1 == panels;
        let color = state.colors.color_for(segment);

        static_plot(&format!("segment_panel_{segment}"))
            .height(panel_height)
            .legend(Legend::default())
            .link_axis("segment_panels", [true, false])
            .include_x(min)
            .include_x(max)
            .show_axes([last, true])
            .show(ui, |plot_ui| {
                draw_mean_line(plot_ui, analysis);
                draw_fit_line(plot_ui, analysis);
                draw_segments(plot_ui, analysis, segment, color);
            });
        ui.add_space(PANEL_GAP);
    }

    ui.with_layout(Layout::top_down(Align::Center), |ui: &mut Ui| {
        ui.add(egui::Label::new(
            RichText::new(analysis.config.predictor.label()).strong(),
        ));
    });
}
