//! Success-probability modeling.
//!
//! Cumulative guessing is modeled as sampling with replacement, giving the
//! coupon/birthday approximation:
//! ```text
//! p(g) = 1 - e^(-g / N)
//! ```
//! Strictly increasing in g, bounded in `[0, 1)`, approaching 1 as g grows.
//! The no-replacement exact model would be `g / N` capped at 1; the
//! exponential form is the standard closed-form stand-in and matches the
//! T50/T95 inversions (`N ln 2`, `N ln 20`).
//!
//! A second factor composes multiplicatively: the attacker must guess the
//! credential *and* independently defeat MFA, so every probability the
//! crate emits is scaled by the bypass probability when MFA is on.

use crate::types::{DefenderPolicy, PasswordModel};

/// Clamp a possibly-drifted probability back into the unit interval.
///
/// NaN (0/0 style degeneracies upstream) maps to 0.
pub(crate) fn clamp_unit(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Probability that `guesses` cumulative attempts crack a keyspace of `N`.
///
/// Zero or negative keyspace or guesses yield 0; the division is guarded,
/// never surfaced as NaN or infinity. An infinite guess count (overflowed
/// rate x time) saturates at 1.
pub fn success_probability(guesses: f64, keyspace: f64) -> f64 {
    if keyspace <= 0.0 || guesses <= 0.0 {
        return 0.0;
    }
    clamp_unit(1.0 - (-guesses / keyspace).exp())
}

/// Scale a success probability by the policy's second factor.
///
/// With MFA enabled the two events are modeled as independent, so the
/// probabilities multiply; with MFA off the probability passes through.
pub fn compose_mfa(p: f64, policy: &DefenderPolicy) -> f64 {
    if policy.mfa_enabled {
        clamp_unit(p * policy.mfa_bypass_probability)
    } else {
        clamp_unit(p)
    }
}

/// Fully composed point probability for a password model.
///
/// Applies the model's achievable-probability ceiling (dictionary
/// coverage) before the MFA factor. This is the single path every curve
/// point, threshold target, and trial probability goes through.
pub fn composed_probability(
    guesses: f64,
    keyspace: f64,
    model: &PasswordModel,
    policy: &DefenderPolicy,
) -> f64 {
    let base = success_probability(guesses, keyspace);
    compose_mfa(model.max_achievable_probability() * base, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PasswordModel;

    fn no_mfa() -> DefenderPolicy {
        DefenderPolicy {
            mfa_enabled: false,
            ..DefenderPolicy::default()
        }
    }

    #[test]
    fn zero_guesses_or_keyspace_is_zero() {
        assert_eq!(success_probability(0.0, 1000.0), 0.0);
        assert_eq!(success_probability(-5.0, 1000.0), 0.0);
        assert_eq!(success_probability(100.0, 0.0), 0.0);
        assert_eq!(success_probability(100.0, -1.0), 0.0);
    }

    #[test]
    fn strictly_increasing_in_guesses() {
        let n = 1e6;
        let mut last = 0.0;
        for g in [1.0, 10.0, 100.0, 1e3, 1e4, 1e5, 1e6, 1e7] {
            let p = success_probability(g, n);
            assert!(p > last, "p({g}) = {p} not above {last}");
            assert!(p < 1.0);
            last = p;
        }
    }

    #[test]
    fn approaches_one_for_huge_guess_counts() {
        let p = success_probability(1e12, 1e3);
        assert!(p > 0.999_999);
        assert_eq!(success_probability(f64::INFINITY, 1e3), 1.0);
    }

    #[test]
    fn half_life_at_n_ln2() {
        let n = 2.1834e14;
        let p = success_probability(n * std::f64::consts::LN_2, n);
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn mfa_disabled_passes_through() {
        let policy = no_mfa();
        assert_eq!(compose_mfa(0.73, &policy), 0.73);
    }

    #[test]
    fn mfa_enabled_multiplies_by_bypass() {
        let policy = no_mfa().with_mfa(0.1);
        assert!((compose_mfa(0.5, &policy) - 0.05).abs() < 1e-15);
        assert_eq!(compose_mfa(0.0, &policy), 0.0);
    }

    #[test]
    fn compose_clamps_drifted_values() {
        let policy = no_mfa();
        assert_eq!(compose_mfa(1.0 + 1e-9, &policy), 1.0);
        assert_eq!(compose_mfa(-1e-9, &policy), 0.0);
        assert_eq!(compose_mfa(f64::NAN, &policy), 0.0);
    }

    #[test]
    fn coverage_caps_the_asymptote() {
        let model = PasswordModel::dictionary_with_coverage(1_000, 0.4);
        let policy = no_mfa();
        // Far past exhaustion the base probability is ~1, but coverage
        // bounds the composed value.
        let p = composed_probability(1e9, 1_000.0, &model, &policy);
        assert!((p - 0.4).abs() < 1e-9);
    }

    #[test]
    fn composed_probability_stacks_coverage_and_mfa() {
        let model = PasswordModel::dictionary_with_coverage(1_000, 0.5);
        let policy = no_mfa().with_mfa(0.2);
        let p = composed_probability(1e9, 1_000.0, &model, &policy);
        assert!((p - 0.1).abs() < 1e-9);
    }
}
