//! Confidence scoring and path selection.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::price_graph::PriceGraphEdge;
use super::pricing_model::{PricePath, PricingConfig};
use crate::prices::PriceHistory;

/// Confidence contribution of a single observation at `hop_index`
/// (zero-based) within a path.
///
/// `exp(-age_hours / time_decay_hours) * confidence_decay ^ hop_index`
/// - both staleness and depth discount the observation.
pub fn edge_confidence(
    observation: &PriceHistory,
    hop_index: usize,
    now: DateTime<Utc>,
    config: &PricingConfig,
) -> f64 {
    // Observations time-stamped after `now` (provider clock skew) count
    // as fresh, never fresher than fresh: confidence must stay <= 1.
    let age_hours = ((now - observation.timestamp).num_seconds() as f64 / 3600.0).max(0.0);
    let time_decay = (-age_hours / config.time_decay_hours as f64).exp();
    let hop_decay = config.confidence_decay.powi(hop_index as i32);
    time_decay * hop_decay
}

/// Total confidence of a path: the product of its per-edge
/// contributions, so staleness and path length compound. A long chain
/// of fresh data can still lose to a short chain of slightly stale
/// data, and vice versa.
pub fn path_confidence(
    edges: &[Arc<PriceGraphEdge>],
    now: DateTime<Utc>,
    config: &PricingConfig,
) -> f64 {
    edges
        .iter()
        .enumerate()
        .map(|(hop_index, edge)| edge_confidence(&edge.observation, hop_index, now, config))
        .product()
}

/// Picks the winning path: highest confidence first, with confidences
/// closer than `epsilon` treated as tied and broken by fewer hops.
/// `None` only for an empty candidate set.
///
/// The epsilon tie-break is a separate pass over the candidates within
/// `epsilon` of the maximum, not part of a sort comparator: folding it
/// into one makes the comparison intransitive on chains of near-ties.
pub fn select_best_path(paths: Vec<PricePath>, epsilon: f64) -> Option<PricePath> {
    let best_confidence = paths
        .iter()
        .map(|p| p.confidence)
        .max_by(f64::total_cmp)?;

    paths
        .into_iter()
        .filter(|p| best_confidence - p.confidence < epsilon)
        .min_by(|a, b| {
            a.hops
                .cmp(&b.hops)
                .then_with(|| b.confidence.total_cmp(&a.confidence))
        })
}
