use thiserror::Error;

/// Preconditions of the regression pipeline. Every variant is fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("dataset is empty")]
    EmptyDataset,
    #[error("length mismatch: {expected} values expected, got {got}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("predictor '{0}' has zero variance, slope is undefined")]
    ZeroVariancePredictor(String),
    #[error("response '{0}' has zero variance (SST = 0), R-squared is undefined")]
    ZeroVarianceResponse(String),
    #[error("{0} is not finite")]
    NonFinite(&'static str),
    #[error("predictor and response are the same field '{0}'")]
    SameField(String),
    #[error("histogram needs at least one bin")]
    NoBins,
    #[error("SST = {sst} but SSR + SSE = {explained} (relative tolerance {tolerance:e})")]
    DecompositionMismatch {
        sst: f64,
        explained: f64,
        tolerance: f64,
    },
    #[error("decomposition tolerance {0} must be finite and non-negative")]
    InvalidTolerance(f64),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Reject NaN and infinities before they reach a chart.
pub(crate) fn ensure_finite(value: f64, what: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalysisError::NonFinite(what))
    }
}
