use super::error::{AnalysisError, Result, ensure_finite};

/// One equal-width bin. `end` is exclusive except for the last bin.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Split `[min, max]` of `values` into `bins` equal-width bins.
pub fn histogram(values: &[f64], bins: usize) -> Result<Vec<HistogramBin>> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    if bins == 0 {
        return Err(AnalysisError::NoBins);
    }
    for &v in values {
        ensure_finite(v, "histogram value")?;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return Ok(vec![HistogramBin {
            start: min - 0.5,
            end: min + 0.5,
            count: values.len(),
        }]);
    }

    let width = (max - min) / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: min + width * i as f64,
            end: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        out[idx].count += 1;
    }

    Ok(out)
}
