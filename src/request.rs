//! Simulation request: the parameter bundle one `simulate` call consumes.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HORIZON_SECS, DEFAULT_SAMPLE_COUNT};
use crate::error::RequestError;
use crate::presets;
use crate::types::{AttackContext, DefenderPolicy, HashPreset, PasswordModel};

/// Everything a single simulation run needs.
///
/// Build one with [`SimulationRequest::new`] and the builder methods, or
/// start from a scenario constructor. Call [`validate`](Self::validate)
/// at the boundary before handing the request to the engine; the engine
/// assumes structural validity and only guards numeric degeneracies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// How the credential under attack was generated.
    pub password: PasswordModel,
    /// Verifier cost profile.
    pub hash_preset: HashPreset,
    /// Mitigations applied by the live service (online context only,
    /// except the second factor).
    pub defender: DefenderPolicy,
    /// Offline or online attack.
    pub context: AttackContext,
    /// Attacker rig multiplier for offline attacks; must be >= 1.
    pub attacker_parallelism: u32,
    /// Simulated wall-clock span in seconds.
    pub horizon_seconds: f64,
    /// Number of curve intervals; the curve has one more point.
    pub sample_count: usize,
    /// Seed for the Monte-Carlo trial. `None` uses the crate default, so
    /// identical requests stay reproducible; the deterministic outputs
    /// never depend on it.
    pub trial_seed: Option<u64>,
}

impl SimulationRequest {
    /// Offline request with default policy, horizon, and sampling.
    pub fn new(password: PasswordModel, hash_preset: HashPreset) -> Self {
        Self {
            password,
            hash_preset,
            defender: DefenderPolicy::default(),
            context: AttackContext::Offline,
            attacker_parallelism: 1,
            horizon_seconds: DEFAULT_HORIZON_SECS,
            sample_count: DEFAULT_SAMPLE_COUNT,
            trial_seed: None,
        }
    }

    // =========================================================================
    // Scenario constructors
    // =========================================================================

    /// Short mixed-character password against fast unsalted hashing.
    ///
    /// The classic cautionary scenario: 8 characters over a 62-symbol
    /// alphabet falls to a GPU rig within the hour.
    pub fn short_password_fast_hash() -> Self {
        Self::new(
            PasswordModel::length(62, 8),
            presets::find("fast-md5").expect("built-in preset").clone(),
        )
    }

    /// Long passphrase against a salted memory-hard KDF.
    ///
    /// The defensive counterpart: five diceware words behind Argon2 stay
    /// out of reach at any realistic horizon.
    pub fn passphrase_slow_kdf() -> Self {
        Self::new(
            PasswordModel::passphrase(7776, 5),
            presets::find("argon2").expect("built-in preset").clone(),
        )
    }

    /// Online guessing against a throttled service, with or without MFA.
    pub fn online_defended(mfa_enabled: bool) -> Self {
        let mut request = Self::new(
            PasswordModel::length(62, 8),
            presets::find("bcrypt-12").expect("built-in preset").clone(),
        );
        request.context = AttackContext::Online;
        request.defender = DefenderPolicy {
            mfa_enabled,
            ..DefenderPolicy::default()
        };
        request
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the attack context.
    pub fn context(mut self, context: AttackContext) -> Self {
        self.context = context;
        self
    }

    /// Set the defender policy.
    pub fn defender(mut self, policy: DefenderPolicy) -> Self {
        self.defender = policy;
        self
    }

    /// Set the attacker parallelism multiplier.
    pub fn parallelism(mut self, parallelism: u32) -> Self {
        assert!(parallelism >= 1, "parallelism must be >= 1");
        self.attacker_parallelism = parallelism;
        self
    }

    /// Set the simulation horizon in seconds.
    pub fn horizon_seconds(mut self, seconds: f64) -> Self {
        assert!(
            seconds.is_finite() && seconds >= 0.0,
            "horizon must be finite and non-negative"
        );
        self.horizon_seconds = seconds;
        self
    }

    /// Set the number of curve intervals.
    pub fn sample_count(mut self, count: usize) -> Self {
        assert!(count >= 1, "sample count must be >= 1");
        self.sample_count = count;
        self
    }

    /// Set a deterministic seed for the Monte-Carlo trial.
    pub fn trial_seed(mut self, seed: u64) -> Self {
        self.trial_seed = Some(seed);
        self
    }

    // =========================================================================
    // Boundary validation
    // =========================================================================

    /// Check structural validity.
    ///
    /// Rejects malformed records before they reach the engine; numeric
    /// degeneracies that remain representable (zero keyspace, zero rate)
    /// are deliberately allowed through and absorbed by the engine.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.attacker_parallelism == 0 {
            return Err(RequestError::InvalidParallelism {
                value: self.attacker_parallelism,
            });
        }
        if self.sample_count == 0 {
            return Err(RequestError::ZeroSampleCount);
        }
        if !self.horizon_seconds.is_finite() || self.horizon_seconds < 0.0 {
            return Err(RequestError::InvalidHorizon {
                value: self.horizon_seconds,
            });
        }
        if self.hash_preset.id.is_empty() {
            return Err(RequestError::EmptyPresetId);
        }
        if !self.hash_preset.baseline_guesses_per_second.is_finite() {
            return Err(RequestError::NonFiniteField {
                field: "baseline_guesses_per_second",
                value: self.hash_preset.baseline_guesses_per_second,
            });
        }

        let policy = &self.defender;
        if !policy.rate_limit_per_minute.is_finite() {
            return Err(RequestError::NonFiniteField {
                field: "rate_limit_per_minute",
                value: policy.rate_limit_per_minute,
            });
        }
        if !policy.lockout_duration_seconds.is_finite() {
            return Err(RequestError::NonFiniteField {
                field: "lockout_duration_seconds",
                value: policy.lockout_duration_seconds,
            });
        }
        if !(0.0..=1.0).contains(&policy.mfa_bypass_probability) {
            return Err(RequestError::InvalidBypassProbability {
                value: policy.mfa_bypass_probability,
            });
        }

        if let PasswordModel::Dictionary { coverage, .. } = self.password {
            if !(0.0..=1.0).contains(&coverage) {
                return Err(RequestError::InvalidCoverage { value: coverage });
            }
        }

        Ok(())
    }
}
