use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::prices_model::PriceHistory;
use crate::errors::Result;

/// Trait defining the contract for PriceHistory repository operations.
#[async_trait]
pub trait PriceHistoryRepositoryTrait: Send + Sync {
    /// Observations for the given pairs with `timestamp >= since`.
    async fn list_recent_for_pairs(
        &self,
        pair_ids: &[i64],
        since: DateTime<Utc>,
    ) -> Result<Vec<PriceHistory>>;

    /// The most recent observation for a pair, from any provider.
    async fn get_latest_for_pair(&self, trading_pair_id: i64) -> Result<Option<PriceHistory>>;
}
