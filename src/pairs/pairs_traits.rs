use async_trait::async_trait;

use super::pairs_model::TradingPair;
use crate::errors::Result;

/// Trait defining the contract for TradingPair repository operations.
///
/// Implemented by the storage layer. The pricing engine only reads;
/// failures propagate as `Error::Database`.
#[async_trait]
pub trait TradingPairRepositoryTrait: Send + Sync {
    /// All active trading pairs, with base and quote assets populated.
    async fn list_active(&self) -> Result<Vec<TradingPair>>;
}
