use thiserror::Error;

/// Errors raised by the indirect price derivation engine.
///
/// "No derivable price" is not an error and surfaces as `Ok(None)`
/// from the service; only corrupted input is fatal.
#[derive(Error, Debug)]
pub enum PricingError {
    /// An edge in a candidate path does not touch the asset the path
    /// walker is currently at. The graph builder guarantees edge
    /// connectivity, so this indicates corrupted input rather than a
    /// normal "no data" condition.
    #[error("edge {pair_symbol} does not touch asset {asset_symbol}")]
    DisconnectedEdge {
        pair_symbol: String,
        asset_symbol: String,
    },
}
