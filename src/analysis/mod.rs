//! Analysis layer: fit, metrics, classification and binning.
//!
//! Architecture:
//! ```text
//!   CarsDataset ──(predictor, response)──▶ fit ──▶ LinearFit
//!                                                   │
//!                         ┌─────────────────────────┼───────────────┐
//!                         ▼                         ▼               ▼
//!                  metrics (SST…MAD)        segment labels    histogram of
//!                                                              residual²
//! ```
//!
//! Everything here is a pure function of the table; `Analysis` just runs
//! the steps once and keeps the results.

pub mod error;
pub mod fit;
pub mod histogram;
pub mod metrics;
pub mod segment;

use crate::data::model::{CarsDataset, Field};
use error::{AnalysisError, Result};
use fit::LinearFit;
use histogram::HistogramBin;
use metrics::SummaryMetrics;
use segment::Segment;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Which columns to regress, how to bin the squared residuals and how far
/// SSR + SSE may drift from SST.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub predictor: Field,
    pub response: Field,
    pub histogram_bins: usize,
    /// Relative to SST.
    pub decomposition_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            predictor: Field::Wt,
            response: Field::Mpg,
            histogram_bins: 10,
            decomposition_tolerance: 1e-9,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if self.predictor == self.response {
            return Err(AnalysisError::SameField(self.predictor.to_string()));
        }
        if self.histogram_bins == 0 {
            return Err(AnalysisError::NoBins);
        }
        let tol = self.decomposition_tolerance;
        if !tol.is_finite() || tol < 0.0 {
            return Err(AnalysisError::InvalidTolerance(tol));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Analysis – the whole pipeline, run once
// ---------------------------------------------------------------------------

/// Results of one regression run over the table.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub config: AnalysisConfig,
    /// Row identifiers, in table order.
    pub names: Vec<String>,
    pub predictor: Vec<f64>,
    pub response: Vec<f64>,
    pub fit: LinearFit,
    pub residuals: Vec<f64>,
    pub metrics: SummaryMetrics,
    pub labels: Vec<Segment>,
    /// Histogram of squared residuals.
    pub squared_error_bins: Vec<HistogramBin>,
}

impl Analysis {
    pub fn run(dataset: &CarsDataset, config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;
        if dataset.is_empty() {
            return Err(AnalysisError::EmptyDataset);
        }

        let predictor = dataset.column(config.predictor);
        let response = dataset.column(config.response);

        let fit = fit::fit_ols(&predictor, &response, config.predictor.column())?;
        log::info!(
            "Fitted {} = {:.4} + {:.4} * {} over {} rows",
            config.response,
            fit.intercept,
            fit.slope,
            config.predictor,
            dataset.len()
        );

        let mean = fit::mean(&response)?;
        let metrics =
            SummaryMetrics::compute(&response, mean, &fit.fitted, config.response.column())?;
        log::debug!("|SST - (SSR + SSE)| = {:e}", metrics.decomposition_gap());
        metrics.check_decomposition(config.decomposition_tolerance)?;

        let residuals = fit.residuals(&response);
        let labels = segment::classify_all(&response, mean, &fit.fitted);
        for seg in Segment::ALL {
            log::debug!("{seg}: {} observations", segment::indices_of(&labels, seg).len());
        }

        let squared: Vec<f64> = residuals.iter().map(|r| r * r).collect();
        let squared_error_bins = histogram::histogram(&squared, config.histogram_bins)?;

        Ok(Analysis {
            config: config.clone(),
            names: dataset.names(),
            predictor,
            response,
            fit,
            residuals,
            metrics,
            labels,
            squared_error_bins,
        })
    }

    /// Observations carrying `segment`.
    pub fn indices_of(&self, segment: Segment) -> Vec<usize> {
        segment::indices_of(&self.labels, segment)
    }

    /// Smallest and largest predictor value.
    pub fn predictor_range(&self) -> (f64, f64) {
        let min = self.predictor.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.predictor.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_builtin;
    use crate::data::model::Car;

    fn car(model: &str, wt: f64, mpg: f64) -> Car {
        Car {
            model: model.to_string(),
            mpg,
            cyl: 6.0,
            disp: 160.0,
            hp: 110.0,
            drat: 3.9,
            wt,
            qsec: 16.5,
            vs: 0.0,
            am: 1.0,
            gear: 4.0,
            carb: 4.0,
        }
    }

    #[test]
    fn test_default_pipeline() {
        let ds = load_builtin().unwrap();
        let analysis = Analysis::run(&ds, &AnalysisConfig::default()).unwrap();

        assert_eq!(analysis.names.len(), 32);
        assert_eq!(analysis.residuals.len(), 32);
        assert_eq!(analysis.labels.len(), 32);
        assert_eq!(analysis.squared_error_bins.len(), 10);
        assert_eq!(
            analysis
                .squared_error_bins
                .iter()
                .map(|b| b.count)
                .sum::<usize>(),
            32
        );
        assert!((analysis.fit.slope + 5.344472).abs() < 1e-5);
        assert!(analysis.metrics.decomposition_gap() <= 1e-9 * analysis.metrics.sst);

        let (min, max) = analysis.predictor_range();
        assert_eq!(min, 1.513);
        assert_eq!(max, 5.424);
    }

    #[test]
    fn test_other_predictor() {
        let ds = load_builtin().unwrap();
        let config = AnalysisConfig {
            predictor: Field::Hp,
            ..AnalysisConfig::default()
        };
        let analysis = Analysis::run(&ds, &config).unwrap();
        assert!(analysis.fit.slope < 0.0);
        assert!((0.0..=1.0).contains(&analysis.metrics.r_squared));
    }

    #[test]
    fn test_same_field_rejected() {
        let ds = load_builtin().unwrap();
        let config = AnalysisConfig {
            predictor: Field::Mpg,
            ..AnalysisConfig::default()
        };
        assert_eq!(
            Analysis::run(&ds, &config).unwrap_err(),
            AnalysisError::SameField("mpg".to_string())
        );
    }

    #[test]
    fn test_zero_bins_rejected() {
        let ds = load_builtin().unwrap();
        let config = AnalysisConfig {
            histogram_bins: 0,
            ..AnalysisConfig::default()
        };
        assert_eq!(Analysis::run(&ds, &config).unwrap_err(), AnalysisError::NoBins);
    }

    #[test]
    fn test_bad_tolerance_rejected() {
        let ds = load_builtin().unwrap();
        for tol in [-1e-9, f64::NAN] {
            let config = AnalysisConfig {
                decomposition_tolerance: tol,
                ..AnalysisConfig::default()
            };
            assert!(matches!(
                Analysis::run(&ds, &config),
                Err(AnalysisError::InvalidTolerance(_))
            ));
        }
    }

    #[test]
    fn test_empty_table_rejected() {
        let ds = CarsDataset::from_cars(Vec::new());
        assert_eq!(
            Analysis::run(&ds, &AnalysisConfig::default()).unwrap_err(),
            AnalysisError::EmptyDataset
        );
    }

    #[test]
    fn test_constant_predictor_aborts() {
        let ds = CarsDataset::from_cars(vec![
            car("a", 3.0, 20.0),
            car("b", 3.0, 25.0),
            car("c", 3.0, 30.0),
        ]);
        assert_eq!(
            Analysis::run(&ds, &AnalysisConfig::default()).unwrap_err(),
            AnalysisError::ZeroVariancePredictor("wt".to_string())
        );
    }

    #[test]
    fn test_constant_response_aborts() {
        let ds = CarsDataset::from_cars(vec![
            car("a", 2.0, 20.0),
            car("b", 3.0, 20.0),
            car("c", 4.0, 20.0),
        ]);
        assert_eq!(
            Analysis::run(&ds, &AnalysisConfig::default()).unwrap_err(),
            AnalysisError::ZeroVarianceResponse("mpg".to_string())
        );
    }
}
