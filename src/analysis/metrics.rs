use super::error::{AnalysisError, Result, ensure_finite};

// ---------------------------------------------------------------------------
// Sums of squares
// ---------------------------------------------------------------------------

/// Σ(observed − mean)²
pub fn sst(observed: &[f64], mean: f64) -> f64 {
    observed.iter().map(|y| (y - mean) * (y - mean)).sum()
}

/// Σ(fitted − mean)²
pub fn ssr(fitted: &[f64], mean: f64) -> f64 {
    fitted.iter().map(|y_hat| (y_hat - mean) * (y_hat - mean)).sum()
}

/// Reject empty or unequal-length observed/fitted pairs.
fn check_pairs(observed: &[f64], fitted: &[f64]) -> Result<()> {
    if observed.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    if observed.len() != fitted.len() {
        return Err(AnalysisError::LengthMismatch {
            expected: observed.len(),
            got: fitted.len(),
        });
    }
    Ok(())
}

/// Σ(observed − fitted)²
pub fn sse(observed: &[f64], fitted: &[f64]) -> Result<f64> {
    check_pairs(observed, fitted)?;
    Ok(observed
        .iter()
        .zip(fitted)
        .map(|(y, y_hat)| (y - y_hat) * (y - y_hat))
        .sum())
}

/// mean(|observed − fitted|)
pub fn mean_absolute_deviation(observed: &[f64], fitted: &[f64]) -> Result<f64> {
    check_pairs(observed, fitted)?;
    let total: f64 = observed
        .iter()
        .zip(fitted)
        .map(|(y, y_hat)| (y - y_hat).abs())
        .sum();
    Ok(total / observed.len() as f64)
}

// ---------------------------------------------------------------------------
// SummaryMetrics
// ---------------------------------------------------------------------------

/// Scalar summary of a fit. All values derive from the full residual vector.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMetrics {
    pub n: usize,
    pub mean: f64,
    pub sst: f64,
    pub ssr: f64,
    pub sse: f64,
    pub mse: f64,
    pub r_squared: f64,
    pub mad: f64,
}

impl SummaryMetrics {
    /// `response` names the observed column in error messages.
    pub fn compute(
        observed: &[f64],
        mean: f64,
        fitted: &[f64],
        response: &str,
    ) -> Result<Self> {
        check_pairs(observed, fitted)?;
        ensure_finite(mean, "response mean")?;

        let n = observed.len();
        let sst = ensure_finite(sst(observed, mean), "SST")?;
        if sst == 0.0 || observed.iter().all(|&y| y == observed[0]) {
            return Err(AnalysisError::ZeroVarianceResponse(response.to_string()));
        }
        let ssr = ensure_finite(ssr(fitted, mean), "SSR")?;
        let sse = ensure_finite(sse(observed, fitted)?, "SSE")?;
        let mse = ensure_finite(sse / n as f64, "MSE")?;
        let r_squared = ensure_finite(ssr / sst, "R-squared")?;
        let mad = ensure_finite(mean_absolute_deviation(observed, fitted)?, "MAD")?;

        Ok(SummaryMetrics {
            n,
            mean,
            sst,
            ssr,
            sse,
            mse,
            r_squared,
            mad,
        })
    }

    /// |SST − (SSR + SSE)|
    pub fn decomposition_gap(&self) -> f64 {
        (self.sst - (self.ssr + self.sse)).abs()
    }

    /// Fail unless |SST − (SSR + SSE)| ≤ `tolerance` · SST.
    pub fn check_decomposition(&self, tolerance: f64) -> Result<()> {
        if self.decomposition_gap() > tolerance * self.sst {
            return Err(AnalysisError::DecompositionMismatch {
                sst: self.sst,
                explained: self.ssr + self.sse,
                tolerance,
            });
        }
        Ok(())
    }

    /// The console summary, one labeled scalar per line.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("SST: {:.4}", self.sst),
            format!("SSR: {:.4}", self.ssr),
            format!("SSE: {:.4}", self.sse),
            format!("MSE: {:.4}", self.mse),
            format!("R-squared: {:.4}", self.r_squared),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fit::{fit_ols, mean};
    use crate::data::loader::load_builtin;
    use crate::data::model::Field;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() < tol, "{a} is not within {tol} of {b}");
    }

    fn metrics_for(xs: &[f64], ys: &[f64]) -> SummaryMetrics {
        let fit = fit_ols(xs, ys, "x").unwrap();
        SummaryMetrics::compute(ys, mean(ys).unwrap(), &fit.fitted, "y").unwrap()
    }

    fn builtin_metrics() -> SummaryMetrics {
        let ds = load_builtin().unwrap();
        metrics_for(&ds.column(Field::Wt), &ds.column(Field::Mpg))
    }

    #[test]
    fn test_weight_vs_mpg_values() {
        let m = builtin_metrics();
        assert_eq!(m.n, 32);
        assert_close(m.sst, 1126.0472, 1e-3);
        assert_close(m.ssr, 847.7252, 1e-3);
        assert_close(m.sse, 278.3219, 1e-3);
        assert_close(m.mse, 8.697561, 1e-5);
        assert_close(m.r_squared, 0.752833, 1e-5);
        assert_close(m.mad, 2.340642, 1e-5);
    }

    #[test]
    fn test_decomposition_identity() {
        let cases: [(&[f64], &[f64]); 3] = [
            (&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.1, 3.9, 6.2, 7.8, 10.1]),
            (&[-3.0, 0.5, 2.0, 8.0], &[10.0, -2.0, 4.0, 1.0]),
            (&[100.0, 101.0, 103.0, 110.0], &[0.001, 0.004, 0.002, 0.009]),
        ];
        for (xs, ys) in cases {
            let m = metrics_for(xs, ys);
            assert!(
                m.decomposition_gap() <= 1e-9 * m.sst,
                "gap {} too large for SST {}",
                m.decomposition_gap(),
                m.sst
            );
        }

        let m = builtin_metrics();
        assert!(m.decomposition_gap() <= 1e-9 * m.sst);
    }

    #[test]
    fn test_r_squared_in_unit_interval() {
        let noisy = metrics_for(&[1.0, 2.0, 3.0, 4.0], &[4.0, 1.0, 3.0, 2.0]);
        assert!((0.0..=1.0).contains(&noisy.r_squared));

        let exact = metrics_for(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        assert_close(exact.r_squared, 1.0, 1e-12);

        let m = builtin_metrics();
        assert!((0.0..=1.0).contains(&m.r_squared));
    }

    #[test]
    fn test_mse_is_sse_over_n() {
        let m = builtin_metrics();
        assert_eq!(m.mse, m.sse / m.n as f64);
    }

    #[test]
    fn test_mad_zero_only_for_perfect_fit() {
        let exact = metrics_for(&[0.0, 1.0, 2.0], &[1.0, 1.5, 2.0]);
        assert_eq!(exact.mad, 0.0);

        let m = builtin_metrics();
        assert!(m.mad > 0.0);
    }

    #[test]
    fn test_zero_variance_response_rejected() {
        let ys = [4.2; 5];
        let fitted = [4.2; 5];
        assert_eq!(
            SummaryMetrics::compute(&ys, 4.2, &fitted, "mpg"),
            Err(AnalysisError::ZeroVarianceResponse("mpg".to_string()))
        );
    }

    #[test]
    fn test_nan_fitted_rejected() {
        let ys = [1.0, 2.0, 3.0];
        let fitted = [1.0, f64::NAN, 3.0];
        assert!(matches!(
            SummaryMetrics::compute(&ys, 2.0, &fitted, "mpg"),
            Err(AnalysisError::NonFinite(_))
        ));
    }

    #[test]
    fn test_broken_identity_rejected() {
        // Not an OLS fit: SST = 2, SSR = 12, SSE = 14.
        let ys = [1.0, 2.0, 3.0];
        let fitted = [0.0, 0.0, 0.0];
        let m = SummaryMetrics::compute(&ys, 2.0, &fitted, "mpg").unwrap();
        assert_eq!(m.decomposition_gap(), 24.0);
        assert_eq!(
            m.check_decomposition(1e-9),
            Err(AnalysisError::DecompositionMismatch {
                sst: 2.0,
                explained: 26.0,
                tolerance: 1e-9
            })
        );

        assert_eq!(builtin_metrics().check_decomposition(1e-9), Ok(()));
    }

    #[test]
    fn test_pair_helpers_reject_bad_shapes() {
        assert_eq!(sse(&[], &[]), Err(AnalysisError::EmptyDataset));
        assert_eq!(
            mean_absolute_deviation(&[], &[]),
            Err(AnalysisError::EmptyDataset)
        );
        let mismatch = AnalysisError::LengthMismatch {
            expected: 3,
            got: 2,
        };
        assert_eq!(sse(&[1.0, 2.0, 3.0], &[1.0, 2.0]), Err(mismatch.clone()));
        assert_eq!(
            mean_absolute_deviation(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
            Err(mismatch)
        );
        assert_eq!(sse(&[1.0, 3.0], &[2.0, 1.0]), Ok(5.0));
        assert_eq!(mean_absolute_deviation(&[1.0, 3.0], &[2.0, 1.0]), Ok(1.5));
    }

    #[test]
    fn test_summary_lines() {
        let lines = builtin_metrics().summary_lines();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "SST: 1126.0472");
        assert_eq!(lines[1], "SSR: 847.7252");
        assert_eq!(lines[2], "SSE: 278.3219");
        assert_eq!(lines[3], "MSE: 8.6976");
        assert_eq!(lines[4], "R-squared: 0.7528");
    }
}
