//! The Monte-Carlo trial: one stochastic "did this run actually succeed"
//! draw per simulation.
//!
//! Deliberately separate from the deterministic curve. The curve answers
//! "what is the probability by time t"; the trial answers "did *this*
//! simulated attacker get in", by drawing a single uniform value and
//! comparing it against the composed probability at the horizon. Seeded
//! RNG keeps it reproducible: same seed + same request = same outcome.
//!
//! One deterministic override: when cumulative guesses reach the keyspace,
//! enumeration is complete and success is certain regardless of the draw.

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use serde::{Deserialize, Serialize};

/// Outcome of the Monte-Carlo trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// Whether this simulated run ended in compromise.
    pub succeeded: bool,
    /// The composed probability the draw was compared against.
    pub probability: f64,
    /// The uniform value drawn from the seeded generator.
    pub sampled: f64,
    /// True when the keyspace was fully enumerated within the horizon,
    /// which forces success independent of the draw.
    pub exhausted: bool,
}

/// Run the trial for a finished simulation.
///
/// `probability` is the composed success probability at the horizon;
/// `horizon_guesses` and `keyspace` feed the exhaustion override.
pub fn run_trial(seed: u64, probability: f64, horizon_guesses: f64, keyspace: f64) -> TrialOutcome {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let sampled: f64 = rng.random();

    let exhausted = keyspace > 0.0 && horizon_guesses >= keyspace;
    TrialOutcome {
        succeeded: exhausted || sampled < probability,
        probability,
        sampled,
        exhausted,
    }
}
