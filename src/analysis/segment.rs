use std::fmt;

// ---------------------------------------------------------------------------
// Segment – where an observation sits relative to the mean and the fit
// ---------------------------------------------------------------------------

/// Per-observation label used to colour the variance decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    /// Above the mean and above the fit line.
    Sst,
    /// Above the mean, on or below the fit line.
    Ssr,
    /// On or below the mean, on or below the fit line.
    Sse,
    /// On or below the mean but above the fit line.
    Other,
}

impl Segment {
    pub const ALL: [Segment; 4] = [Segment::Sst, Segment::Ssr, Segment::Sse, Segment::Other];

    /// The three labels that name a sum of squares.
    pub const SUMS: [Segment; 3] = [Segment::Sst, Segment::Ssr, Segment::Sse];
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Segment::Sst => "SST",
            Segment::Ssr => "SSR",
            Segment::Sse => "SSE",
            Segment::Other => "Other",
        };
        f.write_str(name)
    }
}

/// Label one observation from its response, the response mean and its fitted value.
pub fn classify(observed: f64, mean: f64, fitted: f64) -> Segment {
    match (observed > mean, observed > fitted) {
        (true, true) => Segment::Sst,
        (true, false) => Segment::Ssr,
        (false, false) => Segment::Sse,
        (false, true) => Segment::Other,
    }
}

/// Label every observation, in input order.
pub fn classify_all(observed: &[f64], mean: f64, fitted: &[f64]) -> Vec<Segment> {
    observed
        .iter()
        .zip(fitted)
        .map(|(&y, &y_hat)| classify(y, mean, y_hat))
        .collect()
}

/// Indices of the observations carrying `segment`.
pub fn indices_of(labels: &[Segment], segment: Segment) -> Vec<usize> {
    labels
        .iter()
        .enumerate()
        .filter(|(_, label)| **label == segment)
        .map(|(i, _)| i)
        .collect()
}
