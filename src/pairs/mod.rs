//! Trading pair domain models and repository traits.

mod pairs_model;
mod pairs_traits;

pub use pairs_model::TradingPair;
pub use pairs_traits::TradingPairRepositoryTrait;
