//! Curve sampling: the probability-vs-time series.

use crate::keyspace::compute_keyspace;
use crate::probability::composed_probability;
use crate::rate::effective_rate;
use crate::request::SimulationRequest;
use crate::result::SimulationPoint;
use crate::types::{DefenderPolicy, PasswordModel};

/// Sample the composed probability curve for a request.
///
/// Computes the keyspace and effective rate itself; [`crate::simulate`]
/// reuses [`sample_points`] instead so those are only computed once per run.
pub fn sample_curve(request: &SimulationRequest) -> Vec<SimulationPoint> {
    let keyspace = compute_keyspace(&request.password);
    let rate = effective_rate(
        request.context,
        &request.hash_preset,
        request.attacker_parallelism,
        &request.defender,
    );
    sample_points(
        request.horizon_seconds,
        request.sample_count,
        keyspace,
        rate,
        &request.password,
        &request.defender,
    )
}

/// Sample `sample_count + 1` evenly spaced points over `[0, horizon]`,
/// both endpoints included.
///
/// For sample index i:
/// ```text
/// t_i = i * horizon / sample_count
/// g_i = rate * t_i
/// p_i = compose(coverage * (1 - e^(-g_i / N)))
/// ```
/// The sequence is monotonically non-decreasing in both guesses and
/// probability. This is a core invariant the tests pin down, not a
/// convenience.
pub fn sample_points(
    horizon_seconds: f64,
    sample_count: usize,
    keyspace: f64,
    rate: f64,
    model: &PasswordModel,
    policy: &DefenderPolicy,
) -> Vec<SimulationPoint> {
    let sample_count = sample_count.max(1);
    let dt = horizon_seconds.max(0.0) / sample_count as f64;

    (0..=sample_count)
        .map(|i| {
            let t = i as f64 * dt;
            let cumulative_guesses = (rate * t).max(0.0);
            SimulationPoint {
                t,
                cumulative_guesses,
                success_probability: composed_probability(
                    cumulative_guesses,
                    keyspace,
                    model,
                    policy,
                ),
            }
        })
        .collect()
}
