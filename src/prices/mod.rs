//! Price history domain models and repository traits.

mod prices_model;
mod prices_traits;

pub use prices_model::{CalculatedMetadata, PriceHistory};
pub use prices_traits::PriceHistoryRepositoryTrait;
