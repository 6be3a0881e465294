//! Threshold solving: how long until the attack reaches a target probability.
//!
//! Inverts the composed probability model. Removing the MFA factor first,
//! the replacement model solves in closed form:
//! ```text
//! raw = target / mfa_bypass            (when MFA enabled)
//! t   = -ln(1 - raw) * N / rate
//! ```
//! A target the policy makes unattainable (bypass probability too low, a
//! dictionary that doesn't cover enough credentials, a dead rate) is a
//! normal outcome, reported as [`TimeToTarget::Unreachable`] rather than an
//! error, and is always distinguishable from a numeric zero.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::format::format_seconds;
use crate::types::{DefenderPolicy, PasswordModel};

/// Time needed to reach a target success probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TimeToTarget {
    /// The target is reached after this many seconds.
    Reachable(f64),
    /// The target can never be reached under the given model and policy.
    Unreachable,
}

impl TimeToTarget {
    /// Seconds to the target, or `None` when unreachable.
    pub fn seconds(&self) -> Option<f64> {
        match self {
            Self::Reachable(secs) => Some(*secs),
            Self::Unreachable => None,
        }
    }

    /// True when the target can never be reached.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable)
    }
}

impl fmt::Display for TimeToTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reachable(secs) => write!(f, "{}", format_seconds(*secs)),
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Time for the composed success probability to reach `target`.
///
/// `target` is interpreted on the composed scale, the same scale curve
/// points are reported on, after MFA and the model's coverage ceiling.
pub fn time_to_reach(
    target: f64,
    keyspace: f64,
    rate: f64,
    model: &PasswordModel,
    policy: &DefenderPolicy,
) -> TimeToTarget {
    if target.is_nan() || target <= 0.0 || target >= 1.0 {
        return TimeToTarget::Unreachable;
    }
    if keyspace <= 0.0 || rate <= 0.0 {
        return TimeToTarget::Unreachable;
    }

    // Undo the MFA multiplier to recover the raw guessing target.
    let raw = if policy.mfa_enabled {
        if policy.mfa_bypass_probability <= 0.0 {
            return TimeToTarget::Unreachable;
        }
        target / policy.mfa_bypass_probability
    } else {
        target
    };

    // The raw target must stay below both certainty and the model's
    // achievable ceiling (dictionary coverage).
    let ceiling = model.max_achievable_probability();
    if raw >= 1.0 || raw >= ceiling {
        return TimeToTarget::Unreachable;
    }

    let guesses = -(1.0 - raw / ceiling).ln() * keyspace;
    TimeToTarget::Reachable(guesses / rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probability::composed_probability;
    use crate::types::PasswordModel;

    fn no_mfa() -> DefenderPolicy {
        DefenderPolicy {
            mfa_enabled: false,
            ..DefenderPolicy::default()
        }
    }

    fn plain_model() -> PasswordModel {
        PasswordModel::length(62, 8)
    }

    #[test]
    fn t50_is_n_ln2_over_rate() {
        let n = 62f64.powi(8);
        let t = time_to_reach(0.5, n, 1e9, &plain_model(), &no_mfa());
        let secs = t.seconds().expect("reachable");
        assert!((secs - n * std::f64::consts::LN_2 / 1e9).abs() < 1e-6);
    }

    #[test]
    fn zero_rate_or_keyspace_is_unreachable() {
        assert!(time_to_reach(0.5, 0.0, 1e9, &plain_model(), &no_mfa()).is_unreachable());
        assert!(time_to_reach(0.5, 1e14, 0.0, &plain_model(), &no_mfa()).is_unreachable());
        assert!(time_to_reach(0.5, 1e14, -3.0, &plain_model(), &no_mfa()).is_unreachable());
    }

    #[test]
    fn degenerate_targets_are_unreachable() {
        assert!(time_to_reach(0.0, 1e6, 1e3, &plain_model(), &no_mfa()).is_unreachable());
        assert!(time_to_reach(1.0, 1e6, 1e3, &plain_model(), &no_mfa()).is_unreachable());
        assert!(time_to_reach(-0.5, 1e6, 1e3, &plain_model(), &no_mfa()).is_unreachable());
        assert!(time_to_reach(f64::NAN, 1e6, 1e3, &plain_model(), &no_mfa()).is_unreachable());
    }

    #[test]
    fn low_mfa_bypass_makes_target_unreachable() {
        // Bypass 0.01 turns a 0.5 target into a raw target of 50.
        let policy = no_mfa().with_mfa(0.01);
        let t = time_to_reach(0.5, 1e14, 1e9, &plain_model(), &policy);
        assert!(t.is_unreachable());
    }

    #[test]
    fn zero_mfa_bypass_is_unreachable() {
        let policy = no_mfa().with_mfa(0.0);
        assert!(time_to_reach(0.1, 1e14, 1e9, &plain_model(), &policy).is_unreachable());
    }

    #[test]
    fn reachable_mfa_target_round_trips() {
        let n = 1e10;
        let rate = 1e6;
        let policy = no_mfa().with_mfa(0.8);
        let model = plain_model();

        let t = time_to_reach(0.5, n, rate, &model, &policy);
        let secs = t.seconds().expect("0.5 < 0.8 so reachable");
        let p = composed_probability(rate * secs, n, &model, &policy);
        assert!((p - 0.5).abs() < 1e-9, "round trip gave {p}");
    }

    #[test]
    fn coverage_bounds_the_target() {
        let model = PasswordModel::dictionary_with_coverage(1_000_000, 0.6);
        let n = 1e6;
        // 0.5 is below coverage 0.6: reachable, and the round trip holds.
        let t = time_to_reach(0.5, n, 1e3, &model, &no_mfa());
        let secs = t.seconds().expect("below coverage");
        let p = composed_probability(1e3 * secs, n, &model, &no_mfa());
        assert!((p - 0.5).abs() < 1e-9);

        // 0.7 exceeds what the list can ever deliver.
        assert!(time_to_reach(0.7, n, 1e3, &model, &no_mfa()).is_unreachable());
        assert!(time_to_reach(0.6, n, 1e3, &model, &no_mfa()).is_unreachable());
    }

    #[test]
    fn unreachable_displays_as_text() {
        assert_eq!(TimeToTarget::Unreachable.to_string(), "unreachable");
        assert!(TimeToTarget::Reachable(90.0).to_string().contains('m'));
    }
}
