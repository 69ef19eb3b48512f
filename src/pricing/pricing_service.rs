//! Orchestration of indirect price derivation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use super::confidence::select_best_path;
use super::path_finder::find_price_paths;
use super::price_graph::PriceGraph;
use super::pricing_model::PricingConfig;
use super::pricing_traits::PricingServiceTrait;
use crate::errors::Result;
use crate::pairs::{TradingPair, TradingPairRepositoryTrait};
use crate::prices::{PriceHistory, PriceHistoryRepositoryTrait};

/// Derives synthetic prices for trading pairs that lack a direct,
/// fresh observation.
///
/// Each derivation call reads a consistent snapshot from the
/// repositories, computes in memory, and returns an ephemeral result;
/// nothing is cached or persisted across calls, so concurrent
/// derivations need no coordination.
#[derive(Clone)]
pub struct PriceCalculationService {
    pair_repository: Arc<dyn TradingPairRepositoryTrait>,
    price_repository: Arc<dyn PriceHistoryRepositoryTrait>,
    config: PricingConfig,
}

impl PriceCalculationService {
    pub fn new(
        pair_repository: Arc<dyn TradingPairRepositoryTrait>,
        price_repository: Arc<dyn PriceHistoryRepositoryTrait>,
    ) -> Self {
        Self {
            pair_repository,
            price_repository,
            config: PricingConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PricingConfig) -> Self {
        self.config = config;
        self
    }

    /// Fetches the snapshot (the only suspension points of a
    /// derivation) and assembles the in-memory graph.
    async fn build_price_graph(&self, now: DateTime<Utc>) -> Result<PriceGraph> {
        let active_pairs = self.pair_repository.list_active().await?;
        let cutoff = now - Duration::hours(self.config.time_decay_hours);
        let pair_ids: Vec<i64> = active_pairs.iter().map(|p| p.id).collect();
        let observations = self
            .price_repository
            .list_recent_for_pairs(&pair_ids, cutoff)
            .await?;
        Ok(PriceGraph::build(&active_pairs, observations, cutoff))
    }
}

#[async_trait]
impl PricingServiceTrait for PriceCalculationService {
    async fn calculate_indirect_price(
        &self,
        target: &TradingPair,
    ) -> Result<Option<PriceHistory>> {
        log::debug!("Starting indirect price calculation for {}", target.symbol);

        if target.base_asset.id == target.quote_asset.id {
            log::warn!(
                "Refusing to derive {}: base and quote are the same asset",
                target.symbol
            );
            return Ok(None);
        }

        let now = Utc::now();
        let graph = self.build_price_graph(now).await?;
        let paths = find_price_paths(
            &graph,
            &target.base_asset,
            &target.quote_asset,
            now,
            &self.config,
        )?;
        log::debug!(
            "Found {} candidate paths for {}",
            paths.len(),
            target.symbol
        );

        let Some(best) = select_best_path(paths, self.config.confidence_epsilon) else {
            log::warn!("No calculation paths found for {}", target.symbol);
            return Ok(None);
        };

        if best.multiplier <= Decimal::ZERO {
            log::warn!(
                "Best path for {} has non-positive multiplier {}",
                target.symbol,
                best.multiplier
            );
            return Ok(None);
        }

        log::debug!(
            "Selected path for {}: {} hops, confidence {:.4}, price {}",
            target.symbol,
            best.hops,
            best.confidence,
            best.multiplier
        );
        Ok(Some(PriceHistory::calculated(
            target,
            best.multiplier,
            best.confidence,
            now,
        )))
    }

    async fn calculated_price(&self, target: &TradingPair) -> Result<Option<PriceHistory>> {
        // A direct observation, however old, takes precedence; the
        // synthetic price only fills a complete gap.
        if self
            .price_repository
            .get_latest_for_pair(target.id)
            .await?
            .is_some()
        {
            return Ok(None);
        }
        self.calculate_indirect_price(target).await
    }
}
