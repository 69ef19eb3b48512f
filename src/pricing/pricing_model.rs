//! Pricing engine models and configuration.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::price_graph::PriceGraphEdge;
use crate::constants::{
    DEFAULT_CONFIDENCE_DECAY, DEFAULT_CONFIDENCE_EPSILON, DEFAULT_MAX_HOPS,
    DEFAULT_TIME_DECAY_HOURS,
};

/// Tunable parameters for indirect price derivation.
///
/// The defaults mirror the constants in [`crate::constants`]. They are
/// deliberately configurable rather than derived; no calibration backs
/// the specific values.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Maximum number of trading-pair hops in a candidate path.
    pub max_hops: usize,
    /// Confidence multiplier applied per hop.
    pub confidence_decay: f64,
    /// Freshness window in hours; also the time constant of the
    /// exponential staleness decay.
    pub time_decay_hours: i64,
    /// Confidence difference below which two paths are tied, in which
    /// case the one with fewer hops wins.
    pub confidence_epsilon: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            max_hops: DEFAULT_MAX_HOPS,
            confidence_decay: DEFAULT_CONFIDENCE_DECAY,
            time_decay_hours: DEFAULT_TIME_DECAY_HOURS,
            confidence_epsilon: DEFAULT_CONFIDENCE_EPSILON,
        }
    }
}

/// A candidate conversion chain from a source asset to a target asset.
#[derive(Debug, Clone)]
pub struct PricePath {
    /// Ordered edges connecting the source to the target.
    pub edges: Vec<Arc<PriceGraphEdge>>,
    /// One unit of the source asset equals `multiplier` units of the
    /// target asset. Always strictly positive for a candidate.
    pub multiplier: Decimal,
    /// Freshness/length score in (0, 1].
    pub confidence: f64,
    pub hops: usize,
}
