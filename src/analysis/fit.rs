//! Simple linear regression by ordinary least squares.
//!
//! ```text
//! slope     = Σ(xᵢ - x̄)(yᵢ - ȳ) / Σ(xᵢ - x̄)²
//! intercept = ȳ - slope · x̄
//! ```

use super::error::{AnalysisError, Result, ensure_finite};

/// An immutable OLS fit of one response on one predictor.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFit {
    pub intercept: f64,
    pub slope: f64,
    /// Fitted value per observation, in input order.
    pub fitted: Vec<f64>,
}

impl LinearFit {
    /// Evaluate the line at `x`. Used for `fitted`, so results are reproducible.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// observed − fitted, per observation.
    pub fn residuals(&self, observed: &[f64]) -> Vec<f64> {
        observed
            .iter()
            .zip(&self.fitted)
            .map(|(y, y_hat)| y - y_hat)
            .collect()
    }
}

pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    ensure_finite(values.iter().sum::<f64>() / values.len() as f64, "mean")
}

/// Fit `ys` on `xs`. `predictor` names the x column in error messages.
pub fn fit_ols(xs: &[f64], ys: &[f64], predictor: &str) -> Result<LinearFit> {
    if xs.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    if xs.len() != ys.len() {
        return Err(AnalysisError::LengthMismatch {
            expected: xs.len(),
            got: ys.len(),
        });
    }

    let mean_x = mean(xs)?;
    let mean_y = mean(ys)?;

    let ss_xx: f64 = xs.iter().map(|x| (x - mean_x) * (x - mean_x)).sum();
    let ss_xy: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();

    let ss_xx = ensure_finite(ss_xx, "predictor variance")?;
    let ss_xy = ensure_finite(ss_xy, "covariance")?;

    // Identical values can still leave rounding noise in ss_xx.
    let constant = xs.iter().all(|&x| x == xs[0]);
    if constant || ss_xx == 0.0 {
        return Err(AnalysisError::ZeroVariancePredictor(predictor.to_string()));
    }

    let slope = ensure_finite(ss_xy / ss_xx, "slope")?;
    let intercept = ensure_finite(mean_y - slope * mean_x, "intercept")?;

    let mut fit = LinearFit {
        intercept,
        slope,
        fitted: Vec::with_capacity(xs.len()),
    };
    for &x in xs {
        let y_hat = ensure_finite(fit.predict(x), "fitted value")?;
        fit.fitted.push(y_hat);
    }

    Ok(fit)
}
