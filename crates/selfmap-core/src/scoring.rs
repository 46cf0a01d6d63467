use crate::error::{Result, SelfmapError};

/// Weighted mean of `responses`. Weights are used as given: a zero weight
/// removes its response from both the numerator and the divisor, and a
/// non-positive total weight yields 0.0.
pub fn weighted_score(responses: &[f64], weights: &[f64]) -> Result<f64> {
    if responses.len() != weights.len() {
        return Err(SelfmapError::MismatchedLengths {
            responses: responses.len(),
            weights: weights.len(),
        });
    }
    let total: f64 = responses.iter().zip(weights).map(|(r, w)| r * w).sum();
    let total_weight: f64 = weights.iter().sum();
    if total_weight > 0.0 {
        Ok(total / total_weight)
    } else {
        Ok(0.0)
    }
}

/// Maps scores onto 0..100 against the observed range, anchored so the
/// range always spans at least [0, 1]. All-equal inputs land on a flat
/// line instead of dividing by zero.
pub fn normalize_scores(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(1.0_f64, f64::max);
    let min = scores.iter().copied().fold(0.0_f64, f64::min);
    let range = max - min;
    scores.iter().map(|s| (s - min) / range * 100.0).collect()
}
