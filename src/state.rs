use std::fmt;

use crate::analysis::Analysis;
use crate::analysis::segment::Segment;
use crate::color::SegmentColors;

// ---------------------------------------------------------------------------
// Chart catalog
// ---------------------------------------------------------------------------

/// The fixed set of diagnostic charts, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chart {
    /// Scatter, fit line and all three segment types.
    Decomposition,
    /// One stacked panel per segment type.
    SegmentPanels,
    /// Residual vs fitted with a zero line.
    Residuals,
    /// Residual plot plus the MAD line.
    ResidualsMad,
    /// Histogram of squared residuals with the MSE line.
    SquaredErrors,
}

impl Chart {
    pub const ALL: [Chart; 5] = [
        Chart::Decomposition,
        Chart::SegmentPanels,
        Chart::Residuals,
        Chart::ResidualsMad,
        Chart::SquaredErrors,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Chart::Decomposition => "Decomposition",
            Chart::SegmentPanels => "Segments",
            Chart::Residuals => "Residuals",
            Chart::ResidualsMad => "Residuals + MAD",
            Chart::SquaredErrors => "Squared errors",
        }
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Finished regression run; never mutated by the UI.
    pub analysis: Analysis,

    /// Chart shown in the central panel.
    pub active_chart: Chart,

    /// Colour per segment label.
    pub colors: SegmentColors,

    /// Observation count per label, for the legend.
    pub label_counts: Vec<(Segment, usize)>,
}

impl AppState {
    pub fn new(analysis: Analysis) -> Self {
        let label_counts = Segment::ALL
            .iter()
            .map(|&segment| (segment, analysis.indices_of(segment).len()))
            .collect();

        Self {
            analysis,
            active_chart: Chart::Decomposition,
            colors: SegmentColors::default(),
            label_counts,
        }
    }

    pub fn select_chart(&mut self, chart: Chart) {
        if self.active_chart != chart {
            log::debug!("Showing chart '{chart}'");
            self.active_chart = chart;
        }
    }
}
