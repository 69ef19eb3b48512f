use async_trait::async_trait;

use crate::errors::Result;
use crate::pairs::TradingPair;
use crate::prices::PriceHistory;

/// Trait defining the contract for price calculation service operations.
#[async_trait]
pub trait PricingServiceTrait: Send + Sync {
    /// Derives a synthetic price for `target` by chaining observed
    /// prices across related pairs.
    ///
    /// `Ok(None)` means "no derivable price" and is a normal outcome,
    /// distinct from an error: callers should render it as "price
    /// unavailable".
    async fn calculate_indirect_price(&self, target: &TradingPair)
        -> Result<Option<PriceHistory>>;

    /// Derives a synthetic price only when the pair has no direct
    /// observation at all; `Ok(None)` when a direct price exists.
    async fn calculated_price(&self, target: &TradingPair) -> Result<Option<PriceHistory>>;
}
