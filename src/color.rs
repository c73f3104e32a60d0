use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::analysis::segment::Segment;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Segment colours
// ---------------------------------------------------------------------------

/// Maps each segment label to a colour. The three sums get palette colours,
/// `Other` stays gray.
#[derive(Debug, Clone)]
pub struct SegmentColors {
    mapping: BTreeMap<Segment, Color32>,
    default_color: Color32,
}

impl Default for SegmentColors {
    fn default() -> Self {
        let palette = generate_palette(Segment::SUMS.len());
        let mapping: BTreeMap<Segment, Color32> =
            Segment::SUMS.iter().copied().zip(palette).collect();

        SegmentColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }
}

impl SegmentColors {
    pub fn color_for(&self, segment: Segment) -> Color32 {
        self.mapping
            .get(&segment)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_len_and_distinct() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(3);
        assert_eq!(colors.len(), 3);
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn test_other_is_gray() {
        let colors = SegmentColors::default();
        assert_eq!(colors.color_for(Segment::Other), Color32::GRAY);
        assert_ne!(colors.color_for(Segment::Sst), Color32::GRAY);
        assert_ne!(colors.color_for(Segment::Sst), colors.color_for(Segment::Sse));
    }
}
