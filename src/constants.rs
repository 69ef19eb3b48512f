/// Reserved provider id that synthetic (derived) prices are attributed to.
/// Outside the id range of real providers and never persisted.
pub const CALCULATED_PROVIDER_ID: i64 = -1;

/// Display name of the reserved synthetic provider.
pub const CALCULATED_PROVIDER_NAME: &str = "Calculated";

/// Maximum number of trading-pair hops allowed in indirect price calculation paths.
pub const DEFAULT_MAX_HOPS: usize = 3;

/// Confidence multiplier applied for each hop in a path (0.8 = 20% reduction per hop).
pub const DEFAULT_CONFIDENCE_DECAY: f64 = 0.8;

/// Time window in hours for considering price data as recent and valid for calculations.
pub const DEFAULT_TIME_DECAY_HOURS: i64 = 24;

/// Confidence difference below which two candidate paths are considered tied.
pub const DEFAULT_CONFIDENCE_EPSILON: f64 = 0.001;
