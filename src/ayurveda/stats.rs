//! Scoring helpers for the diagnosis flow

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use crate::error::{AvkgError, Result};

/// Added to every score before taking its logarithm so zero scores stay finite
pub const SCORE_SMOOTHING: f64 = 0.1;

/// Numerically stable softmax. Empty input yields empty output.
pub fn softmax(xs: &[f64]) -> Vec<f64> {
    let Some(x_max) = xs.iter().copied().reduce(f64::max) else {
        return Vec::new();
    };

    let exps: Vec<f64> = xs.iter().map(|x| (x - x_max).exp()).collect();
    let denom: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / denom).collect()
}

/// Items whose share of the total score is unusually high.
///
/// Each item gets `p = softmax(ln(score + 0.1))`, which is its smoothed
/// share of the total. Items with `p > threshold` are returned with `p`.
pub fn anomalies<K>(scores: &BTreeMap<K, f64>, threshold: f64) -> Result<BTreeMap<K, f64>>
where
    K: Ord + Clone + Display,
{
    let mut log_scores = Vec::with_capacity(scores.len());
    for (item, &score) in scores {
        if !score.is_finite() || score < 0.0 {
            return Err(AvkgError::InvalidScore {
                item: item.to_string(),
                score,
            });
        }
        log_scores.push((score + SCORE_SMOOTHING).ln());
    }

    let probs = softmax(&log_scores);
    Ok(scores
        .keys()
        .zip(probs)
        .filter(|(_, p)| *p > threshold)
        .map(|(item, p)| (item.clone(), p))
        .collect())
}

/// Intersection of all `sets`; no sets at all yields the empty set
pub fn intersect<T, I>(sets: I) -> BTreeSet<T>
where
    T: Ord + Clone,
    I: IntoIterator<Item = BTreeSet<T>>,
{
    sets.into_iter()
        .reduce(|acc, set| acc.intersection(&set).cloned().collect())
        .unwrap_or_default()
}
