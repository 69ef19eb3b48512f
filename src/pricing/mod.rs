//! Indirect price derivation.
//!
//! When a trading pair has no direct, fresh observation, a synthetic
//! price is derived by chaining observed prices across related pairs
//! (e.g. ETH/USD from ETH/BTC x BTC/USD):
//!
//! 1. **Graph** (`price_graph`) - active pairs with their freshest
//!    observation become undirected edges keyed by asset id
//! 2. **Search** (`path_finder`) - bounded breadth-first search
//!    enumerates all simple paths between the base and quote assets
//! 3. **Scoring** (`confidence`) - each path gets a directional
//!    multiplier and a freshness/length confidence score
//! 4. **Service** (`pricing_service`) - orchestrates a derivation call
//!    and packages the winner as a synthetic `PriceHistory`
//!
//! Every derivation call works on a fresh, read-only snapshot; nothing
//! is cached or persisted across calls.

mod confidence;
mod path_finder;
mod price_graph;
mod pricing_errors;
mod pricing_model;
mod pricing_service;
mod pricing_traits;


pub use confidence::{edge_confidence, path_confidence, select_best_path};
pub use path_finder::{find_price_paths, total_multiplier};
pub use price_graph::{PriceGraph, PriceGraphEdge};
pub use pricing_errors::PricingError;
pub use pricing_model::{PricePath, PricingConfig};
pub use pricing_service::PriceCalculationService;
pub use pricing_traits::PricingServiceTrait;
