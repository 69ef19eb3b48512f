//! Trading pair domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assets::Asset;

/// A trading pair (e.g. BTC/USD, ETH/BTC).
///
/// The symbol is directional: in `BASE/QUOTE` the price is units of
/// quote per one unit of base. The pricing engine still traverses a
/// pair in either direction, inverting the price when walking
/// quote-to-base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingPair {
    pub id: i64,
    pub base_asset: Asset,
    pub quote_asset: Asset,
    /// Directional symbol, unique (e.g. "BTC/USD").
    pub symbol: String,
    /// URL-friendly slug, unique (e.g. "btc-usd").
    pub slug: String,
    pub is_active: bool,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TradingPair {
    pub fn new(id: i64, base_asset: Asset, quote_asset: Asset) -> Self {
        let now = Utc::now();
        let symbol = format!("{}/{}", base_asset.symbol, quote_asset.symbol);
        let slug = format!(
            "{}-{}",
            base_asset.symbol.to_lowercase(),
            quote_asset.symbol.to_lowercase()
        );
        Self {
            id,
            base_asset,
            quote_asset,
            symbol,
            slug,
            is_active: true,
            is_visible: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this pair connects to the given asset.
    pub fn touches(&self, asset_id: i64) -> bool {
        self.base_asset.id == asset_id || self.quote_asset.id == asset_id
    }

    /// The end of the pair that is not `asset_id`, if the pair touches it.
    pub fn other_asset(&self, asset_id: i64) -> Option<&Asset> {
        if self.base_asset.id == asset_id {
            Some(&self.quote_asset)
        } else if self.quote_asset.id == asset_id {
            Some(&self.base_asset)
        } else {
            None
        }
    }
}
