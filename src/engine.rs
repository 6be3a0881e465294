//! The simulation engine: one request in, one immutable result out.

use std::f64::consts::LN_2;

use crate::constants::{DEFAULT_TRIAL_SEED, P50_TARGET, P95_TARGET};
use crate::curve::sample_points;
use crate::keyspace::compute_keyspace;
use crate::rate::effective_rate;
use crate::request::SimulationRequest;
use crate::result::SimulationResult;
use crate::threshold::{time_to_reach, TimeToTarget};
use crate::trial::run_trial;
use crate::types::{AttackContext, PasswordModel};

/// Run a full simulation.
///
/// Orchestrates keyspace calculation, rate modeling, curve sampling, the
/// T50/T95 threshold solves, and the Monte-Carlo trial, and attaches
/// descriptive notes. Pure in its inputs: the only randomness is the
/// seeded trial draw, fixed by `request.trial_seed`.
///
/// A degenerate request (zero keyspace) produces an all-zero result with
/// an explanatory note, never a failure.
pub fn simulate(request: &SimulationRequest) -> SimulationResult {
    let keyspace = compute_keyspace(&request.password);
    let seed = request.trial_seed.unwrap_or(DEFAULT_TRIAL_SEED);

    if keyspace <= 0.0 {
        return degenerate_result(seed);
    }

    let rate = effective_rate(
        request.context,
        &request.hash_preset,
        request.attacker_parallelism,
        &request.defender,
    );

    let mut notes = configuration_notes(request, rate);

    let t50 = time_to_reach(P50_TARGET, keyspace, rate, &request.password, &request.defender);
    let t95 = time_to_reach(P95_TARGET, keyspace, rate, &request.password, &request.defender);

    let curve = sample_points(
        request.horizon_seconds,
        request.sample_count,
        keyspace,
        rate,
        &request.password,
        &request.defender,
    );

    let horizon_guesses = (rate * request.horizon_seconds).max(0.0);
    let horizon_probability = curve.last().map_or(0.0, |p| p.success_probability);
    let trial = run_trial(seed, horizon_probability, horizon_guesses, keyspace);

    notes.push(format!(
        "50% success without replacement ~ N/2; with replacement k50 ~ N ln2 \u{2248} {:.3}N; \
         mean geometric trials is N.",
        LN_2
    ));

    SimulationResult {
        keyspace,
        expected_trials_no_replacement: keyspace / 2.0,
        expected_trials_with_replacement: keyspace * LN_2,
        t50,
        t95,
        curve,
        effective_guesses_per_second: rate,
        horizon_guesses,
        trial,
        notes,
    }
}

/// Notes about salting, memory hardness, throttling, and coverage.
///
/// Informational only: none of these change numbers beyond what the rate
/// model and probability composition already applied.
fn configuration_notes(request: &SimulationRequest, rate: f64) -> Vec<String> {
    let mut notes = Vec::new();

    if request.hash_preset.has_salt {
        notes.push("Salted: unique per-user salts defeat precomputed rainbow tables.".to_string());
    } else {
        notes.push(
            "No salt: same hash across users enables rainbow tables (if hash is fast).".to_string(),
        );
    }

    if request.hash_preset.is_memory_hard {
        notes.push("Memory-hard KDF slows parallel GPUs/ASICs.".to_string());
    } else {
        notes.push("Fast hash allows high parallel guess rate.".to_string());
    }

    if request.context == AttackContext::Online {
        let policy = &request.defender;
        if policy.lockout_threshold > 0 {
            notes.push(format!(
                "Online throttling: bursts of {} attempts then {:.0}s lockout, \
                 sustaining ~{:.2} guesses/s.",
                policy.lockout_threshold, policy.lockout_duration_seconds, rate
            ));
        } else {
            notes.push(format!(
                "Online rate limit caps the attacker at {:.2} guesses/s.",
                rate
            ));
        }
    }

    if let PasswordModel::Dictionary { coverage, .. } = request.password {
        if coverage < 1.0 {
            notes.push(format!(
                "Dictionary covers {:.0}% of real-world credentials; success probability \
                 is capped there.",
                coverage * 100.0
            ));
        }
    }

    if rate <= 0.0 {
        notes.push("Effective guess rate is zero; the attack makes no progress.".to_string());
    }

    notes
}

/// All-zero result for a request whose password model has no candidates.
fn degenerate_result(seed: u64) -> SimulationResult {
    SimulationResult {
        keyspace: 0.0,
        expected_trials_no_replacement: 0.0,
        expected_trials_with_replacement: 0.0,
        t50: TimeToTarget::Unreachable,
        t95: TimeToTarget::Unreachable,
        curve: Vec::new(),
        effective_guesses_per_second: 0.0,
        horizon_guesses: 0.0,
        trial: run_trial(seed, 0.0, 0.0, 0.0),
        notes: vec!["Invalid keyspace: the password model describes no candidates.".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PasswordModel;

    #[test]
    fn degenerate_keyspace_yields_empty_result() {
        let mut request = SimulationRequest::short_password_fast_hash();
        request.password = PasswordModel::length(0, 8);

        let result = simulate(&request);
        assert_eq!(result.keyspace, 0.0);
        assert_eq!(result.effective_guesses_per_second, 0.0);
        assert!(result.curve.is_empty());
        assert!(result.t50.is_unreachable());
        assert!(result.t95.is_unreachable());
        assert!(!result.trial.succeeded);
        assert!(result.notes[0].contains("Invalid keyspace"));
    }

    #[test]
    fn notes_describe_salting_both_ways() {
        let fast = simulate(&SimulationRequest::short_password_fast_hash());
        assert!(fast.notes.iter().any(|n| n.starts_with("No salt")));
        assert!(fast.notes.iter().any(|n| n.starts_with("Fast hash")));

        let slow = simulate(&SimulationRequest::passphrase_slow_kdf());
        assert!(slow.notes.iter().any(|n| n.starts_with("Salted")));
        assert!(slow.notes.iter().any(|n| n.starts_with("Memory-hard")));
    }

    #[test]
    fn online_runs_note_the_throttle() {
        let result = simulate(&SimulationRequest::online_defended(false));
        assert!(result.notes.iter().any(|n| n.contains("Online throttling")));
    }

    #[test]
    fn replacement_explainer_is_last_note() {
        let result = simulate(&SimulationRequest::short_password_fast_hash());
        assert!(result.notes.last().unwrap().contains("mean geometric trials is N"));
    }
}
