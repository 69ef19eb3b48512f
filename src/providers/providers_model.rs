//! Data provider domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{CALCULATED_PROVIDER_ID, CALCULATED_PROVIDER_NAME};

/// An external source of market data (e.g. Binance, CoinGecko, CoinMarketCap).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProvider {
    pub id: i64,
    /// Unique display name.
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub is_active: bool,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DataProvider {
    pub fn new(id: i64, name: &str) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.to_string(),
            description: None,
            website: None,
            is_active: true,
            priority: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// The reserved pseudo-provider that synthetic (derived) prices are
    /// attributed to. Never persisted.
    pub fn calculated() -> Self {
        Self::new(CALCULATED_PROVIDER_ID, CALCULATED_PROVIDER_NAME)
    }

    pub fn is_calculated(&self) -> bool {
        self.id == CALCULATED_PROVIDER_ID
    }
}
