//! Result types for a simulation run.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::format::{format_count, format_seconds};
use crate::threshold::TimeToTarget;
use crate::trial::TrialOutcome;

/// One sample on the probability-vs-time curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationPoint {
    /// Elapsed time in seconds since the attack started.
    pub t: f64,
    /// Cumulative guesses attempted by time `t`.
    pub cumulative_guesses: f64,
    /// Composed success probability by time `t`, in `[0, 1]`.
    pub success_probability: f64,
}

/// Everything one `simulate` call produces. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Keyspace N of the password model.
    pub keyspace: f64,
    /// Mean trials to find the credential enumerating without replacement:
    /// N / 2, the average rank in a uniformly random permutation.
    pub expected_trials_no_replacement: f64,
    /// Expected guesses to reach 50% under the replacement model: N ln 2.
    pub expected_trials_with_replacement: f64,
    /// Time to 50% composed success probability.
    pub t50: TimeToTarget,
    /// Time to 95% composed success probability.
    pub t95: TimeToTarget,
    /// Evenly spaced probability curve over the horizon.
    pub curve: Vec<SimulationPoint>,
    /// Sustained guess rate the attack achieves.
    pub effective_guesses_per_second: f64,
    /// Cumulative guesses attempted by the end of the horizon.
    pub horizon_guesses: f64,
    /// Stochastic single-run outcome; see [`crate::trial`].
    pub trial: TrialOutcome,
    /// Ordered human-readable observations about the configuration.
    pub notes: Vec<String>,
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "keyspace:        {}", format_count(self.keyspace))?;
        writeln!(
            f,
            "effective rate:  {} guesses/s",
            format_count(self.effective_guesses_per_second)
        )?;
        writeln!(
            f,
            "expected trials: {} (no replacement) / {} (replacement)",
            format_count(self.expected_trials_no_replacement),
            format_count(self.expected_trials_with_replacement)
        )?;
        writeln!(f, "t50:             {}", self.t50)?;
        writeln!(f, "t95:             {}", self.t95)?;
        writeln!(
            f,
            "by horizon:      {} guesses, trial {}",
            format_count(self.horizon_guesses),
            if self.trial.succeeded { "succeeded" } else { "failed" }
        )?;
        for note in &self.notes {
            writeln!(f, "note: {}", note)?;
        }
        // Curve length rather than the points themselves; the series is
        // chart fodder, not terminal output.
        write!(f, "curve: {} points over {}", self.curve.len(),
            format_seconds(self.curve.last().map_or(0.0, |p| p.t)))
    }
}
