//! Effective guess-rate modeling.
//!
//! Converts hashing cost, attacker resources, and (online) defender
//! throttling into a sustained guesses-per-second figure.
//!
//! Offline, the attacker owns the verifier:
//! ```text
//! rate = baseline_guesses_per_second * parallelism
//! ```
//!
//! Online, the attacker cycles between an unthrottled burst of
//! `lockout_threshold` attempts at the rate ceiling and a forced pause of
//! `lockout_duration_seconds`:
//! ```text
//! cycle = threshold / min(raw_rate, limit/60) + lockout_duration
//! rate  = threshold / cycle
//! ```
//! This is a steady-state average (the attacker always hits the ceiling,
//! locks out, waits, and repeats), not a transient curve.

use crate::constants::SECONDS_PER_MINUTE;
use crate::types::{AttackContext, DefenderPolicy, HashPreset};

/// Sustained guess rate for a request's context.
///
/// Parallelism below 1 is rejected at the request boundary; as a numeric
/// guard it is clamped to 1 here so the model alone can never produce a
/// negative or zero rate from a positive baseline.
pub fn effective_rate(
    context: AttackContext,
    preset: &HashPreset,
    parallelism: u32,
    policy: &DefenderPolicy,
) -> f64 {
    match context {
        AttackContext::Offline => offline_rate(preset, parallelism),
        AttackContext::Online => online_rate(policy),
    }
}

/// Offline rate: baseline verifier throughput scaled by attacker rigs.
pub fn offline_rate(preset: &HashPreset, parallelism: u32) -> f64 {
    let parallelism = parallelism.max(1) as f64;
    (preset.baseline_guesses_per_second * parallelism).max(0.0)
}

/// Online rate under the policy's ceiling and lockout cycling.
///
/// The attacker's own request rate is taken as unbounded; the policy
/// ceiling is the binding constraint.
pub fn online_rate(policy: &DefenderPolicy) -> f64 {
    online_rate_capped(f64::INFINITY, policy)
}

/// Online rate for an attacker whose raw request rate may itself be the
/// bottleneck (a slow botnet against a generous limit).
///
/// Throughput is first capped at `min(raw_rate, rate_limit/60)`, then the
/// lockout cycle is applied on top of the capped rate.
pub fn online_rate_capped(raw_rate: f64, policy: &DefenderPolicy) -> f64 {
    let ceiling = policy.rate_limit_per_minute / SECONDS_PER_MINUTE;
    if ceiling.is_nan() || ceiling <= 0.0 || raw_rate.is_nan() || raw_rate <= 0.0 {
        return 0.0;
    }
    let capped = raw_rate.min(ceiling);

    if policy.lockout_threshold == 0 {
        return capped;
    }

    let threshold = policy.lockout_threshold as f64;
    let burst_seconds = threshold / capped;
    let cycle_seconds = burst_seconds + policy.lockout_duration_seconds.max(0.0);
    threshold / cycle_seconds
}
