//! Asset domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cryptocurrency or fiat asset tracked by the system.
///
/// Assets are owned by the storage layer; the pricing engine treats
/// them as immutable graph nodes identified by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i64,
    /// Ticker symbol, unique and upper-cased (e.g. "BTC").
    pub symbol: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_fiat: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Asset {
    pub fn new(id: i64, symbol: &str, name: &str) -> Self {
        let now = Utc::now();
        Self {
            id,
            symbol: symbol.to_uppercase(),
            name: name.to_string(),
            description: None,
            is_active: true,
            is_fiat: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn fiat(id: i64, symbol: &str, name: &str) -> Self {
        Self {
            is_fiat: true,
            ..Self::new(id, symbol, name)
        }
    }
}
