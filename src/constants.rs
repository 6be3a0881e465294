//! Numeric constants used throughout the crate.

/// Default deterministic seed for the Monte-Carlo trial.
///
/// Same seed + same request = same trial outcome. The value `0x6775657373`
/// is "guess" encoded in ASCII.
pub const DEFAULT_TRIAL_SEED: u64 = 0x6775657373;

/// Canonical probability target for the T50 summary threshold.
pub const P50_TARGET: f64 = 0.5;

/// Canonical probability target for the T95 summary threshold.
pub const P95_TARGET: f64 = 0.95;

/// Default simulation horizon in seconds (one hour).
pub const DEFAULT_HORIZON_SECS: f64 = 3_600.0;

/// Default number of curve intervals; the sampled curve has one more point.
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

/// Seconds per minute, for converting per-minute rate limits.
pub const SECONDS_PER_MINUTE: f64 = 60.0;
