//! In-memory price graph construction.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::assets::Asset;
use crate::pairs::TradingPair;
use crate::prices::PriceHistory;

/// A trading pair together with its single freshest qualifying observation.
#[derive(Debug, Clone)]
pub struct PriceGraphEdge {
    pub pair: TradingPair,
    pub observation: PriceHistory,
}

/// Undirected adjacency structure over assets.
///
/// Rebuilt from a fresh snapshot for every derivation call and
/// discarded afterwards; read-only once built.
#[derive(Debug, Default)]
pub struct PriceGraph {
    /// Asset id -> edges touching that asset. Each edge appears under
    /// both of its endpoints.
    edges_by_asset: HashMap<i64, Vec<Arc<PriceGraphEdge>>>,
    /// Asset id -> asset record, for directionality checks.
    assets: HashMap<i64, Asset>,
    edge_count: usize,
}

impl PriceGraph {
    /// Builds the graph from active pairs and raw observations.
    ///
    /// Observations before `cutoff` or with non-positive prices never
    /// become edges; for each pair only the single most recent
    /// qualifying observation survives. Pairs without one contribute no
    /// edge. An empty graph is a valid result.
    pub fn build(
        pairs: &[TradingPair],
        observations: Vec<PriceHistory>,
        cutoff: DateTime<Utc>,
    ) -> Self {
        let mut latest: HashMap<i64, PriceHistory> = HashMap::new();
        for observation in observations {
            if observation.timestamp < cutoff {
                continue;
            }
            if observation.price <= Decimal::ZERO {
                log::debug!(
                    "Excluding non-positive price {} for pair {}",
                    observation.price,
                    observation.trading_pair_id
                );
                continue;
            }
            match latest.entry(observation.trading_pair_id) {
                Entry::Occupied(mut entry) => {
                    if observation.timestamp > entry.get().timestamp {
                        entry.insert(observation);
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(observation);
                }
            }
        }

        let mut graph = PriceGraph::default();
        for pair in pairs {
            let Some(observation) = latest.remove(&pair.id) else {
                continue;
            };

            graph
                .assets
                .entry(pair.base_asset.id)
                .or_insert_with(|| pair.base_asset.clone());
            graph
                .assets
                .entry(pair.quote_asset.id)
                .or_insert_with(|| pair.quote_asset.clone());

            let edge = Arc::new(PriceGraphEdge {
                pair: pair.clone(),
                observation,
            });
            graph
                .edges_by_asset
                .entry(pair.base_asset.id)
                .or_default()
                .push(Arc::clone(&edge));
            graph
                .edges_by_asset
                .entry(pair.quote_asset.id)
                .or_default()
                .push(edge);
            graph.edge_count += 1;
        }

        log::debug!(
            "Built price graph: {} assets, {} edges",
            graph.assets.len(),
            graph.edge_count
        );
        graph
    }

    /// Edges touching the given asset.
    pub fn edges_for(&self, asset_id: i64) -> &[Arc<PriceGraphEdge>] {
        self.edges_by_asset
            .get(&asset_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn asset(&self, asset_id: i64) -> Option<&Asset> {
        self.assets.get(&asset_id)
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }
}
