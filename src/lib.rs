//! Cryptotracker Core - domain entities, services, and traits.
//!
//! This crate contains the core business logic for the crypto price
//! tracker: the asset/pair/price domain models, the repository traits
//! implemented by the surrounding storage layer, and the indirect
//! price derivation engine that synthesizes a price for a trading
//! pair when no direct, fresh observation exists.

pub mod assets;
pub mod constants;
pub mod errors;
pub mod pairs;
pub mod prices;
pub mod pricing;
pub mod providers;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
