//! Price history domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::CALCULATED_PROVIDER_ID;
use crate::pairs::TradingPair;

/// Metadata attached to synthetic (derived) price entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedMetadata {
    pub confidence: f64,
    pub calculated_at: DateTime<Utc>,
}

/// A price observation for a trading pair from a specific data provider.
///
/// At most one observation exists per (pair, provider, timestamp).
/// Synthetic entries built by the pricing engine carry the reserved
/// Calculated provider id, a `metadata` block, and are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistory {
    pub id: i64,
    pub trading_pair_id: i64,
    pub data_provider_id: i64,
    pub timestamp: DateTime<Utc>,
    /// Exact decimal price; serialized as text to avoid float precision loss.
    pub price: Decimal,
    pub last_updated: Option<DateTime<Utc>>,
    pub metadata: Option<CalculatedMetadata>,
    pub created_at: DateTime<Utc>,
}

impl PriceHistory {
    pub fn new(
        id: i64,
        trading_pair_id: i64,
        data_provider_id: i64,
        timestamp: DateTime<Utc>,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            trading_pair_id,
            data_provider_id,
            timestamp,
            price,
            last_updated: Some(timestamp),
            metadata: None,
            created_at: Utc::now(),
        }
    }

    /// Builds the synthetic entry for a derived price, attributed to the
    /// reserved Calculated provider. Has no persistent identity.
    pub fn calculated(
        pair: &TradingPair,
        price: Decimal,
        confidence: f64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            trading_pair_id: pair.id,
            data_provider_id: CALCULATED_PROVIDER_ID,
            timestamp: now,
            price,
            last_updated: Some(now),
            metadata: Some(CalculatedMetadata {
                confidence,
                calculated_at: now,
            }),
            created_at: now,
        }
    }

    pub fn is_calculated(&self) -> bool {
        self.data_provider_id == CALCULATED_PROVIDER_ID
    }
}
