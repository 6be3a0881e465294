//! Core input records: password models, verifier presets, defender policy.

use serde::{Deserialize, Serialize};

/// How the credential under attack was generated.
///
/// The model determines the keyspace N, the number of distinct candidates
/// an attacker must consider. Choose based on what you are teaching: random
/// character strings, diceware-style passphrases, or a finite leaked list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PasswordModel {
    /// Uniformly random string of `length` symbols from an alphabet.
    ///
    /// N = alphabet_size ^ length. An 8-character mixed-case alphanumeric
    /// password is `Length { alphabet_size: 62, length: 8 }`.
    Length {
        /// Number of distinct symbols the generator draws from.
        alphabet_size: u32,
        /// Number of symbols in the credential.
        length: u32,
    },

    /// Passphrase of `word_count` words drawn uniformly from a wordlist.
    ///
    /// N = wordlist_size ^ word_count. A 5-word diceware passphrase over
    /// the standard list is `Passphrase { wordlist_size: 7776, word_count: 5 }`.
    Passphrase {
        /// Number of words in the source list.
        wordlist_size: u32,
        /// Number of words in the passphrase.
        word_count: u32,
    },

    /// Credential drawn from a finite, enumerable candidate list.
    ///
    /// N = size; no exponentiation. `coverage` is the fraction of real-world
    /// credentials the list actually contains: success probability can never
    /// exceed it, no matter how long the attacker runs. Use 1.0 when the
    /// list is assumed exhaustive.
    Dictionary {
        /// Number of entries in the list.
        size: u64,
        /// Fraction of real credentials covered by the list, in `[0, 1]`.
        coverage: f64,
    },
}

impl PasswordModel {
    /// Random-string model over an alphabet.
    pub fn length(alphabet_size: u32, length: u32) -> Self {
        Self::Length { alphabet_size, length }
    }

    /// Wordlist passphrase model.
    pub fn passphrase(wordlist_size: u32, word_count: u32) -> Self {
        Self::Passphrase { wordlist_size, word_count }
    }

    /// Exhaustive dictionary model (coverage 1.0).
    pub fn dictionary(size: u64) -> Self {
        Self::Dictionary { size, coverage: 1.0 }
    }

    /// Dictionary model covering only a fraction of real credentials.
    pub fn dictionary_with_coverage(size: u64, coverage: f64) -> Self {
        Self::Dictionary { size, coverage }
    }

    /// The largest success probability this model can ever reach.
    ///
    /// 1.0 for generative models; the coverage fraction for dictionaries.
    /// Clamped to `[0, 1]` so a malformed coverage can't escape the unit
    /// interval.
    pub fn max_achievable_probability(&self) -> f64 {
        match self {
            Self::Dictionary { coverage, .. } => coverage.clamp(0.0, 1.0),
            _ => 1.0,
        }
    }
}

/// Where the attacker stands relative to the verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttackContext {
    /// Attacker possesses the verifier (stolen hash database) and is
    /// limited only by computational cost. Defender rate limits and
    /// lockouts do not apply.
    #[default]
    Offline,

    /// Attacker must interact with a live service, subject to rate limits,
    /// lockout cycling, and the second factor.
    Online,
}

/// Named verifier cost profile.
///
/// Presets carry illustrative, order-of-magnitude guess rates. They are
/// teaching numbers, not benchmarks, and no real hash function is ever
/// invoked. The engine reads only the numeric rate and the two boolean
/// flags; everything else is display material for the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashPreset {
    /// Stable identifier used for catalog lookup.
    pub id: String,
    /// Human-readable name.
    pub display_name: String,
    /// Baseline offline guesses per second for a single attack rig.
    pub baseline_guesses_per_second: f64,
    /// Whether verification uses per-user salts. Informational: salting
    /// defeats precomputed tables but does not change the per-guess cost
    /// already captured in the baseline rate.
    pub has_salt: bool,
    /// Whether the verifier is a memory-hard KDF. Informational: memory
    /// hardness resists GPU/ASIC parallelism beyond what the baseline rate
    /// reflects.
    pub is_memory_hard: bool,
    /// Optional note on the cost parameters behind the baseline rate.
    pub cost_note: Option<String>,
}

/// Mitigations a live service applies to online guessing.
///
/// Only consulted for [`AttackContext::Online`]; an offline attacker
/// controls the verifier and ignores all of this except the second factor,
/// which gates success probability in both contexts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefenderPolicy {
    /// Maximum verification attempts per minute before throttling.
    pub rate_limit_per_minute: f64,
    /// Failed attempts allowed before a temporary lockout. Zero disables
    /// lockout cycling entirely.
    pub lockout_threshold: u32,
    /// Duration of each lockout in seconds.
    pub lockout_duration_seconds: f64,
    /// Whether a second factor is required after a correct guess.
    pub mfa_enabled: bool,
    /// Probability the attacker also defeats the second factor, in `[0, 1]`.
    pub mfa_bypass_probability: f64,
}

impl Default for DefenderPolicy {
    fn default() -> Self {
        Self {
            rate_limit_per_minute: 600.0,
            lockout_threshold: 10,
            lockout_duration_seconds: 300.0,
            mfa_enabled: false,
            mfa_bypass_probability: 0.01,
        }
    }
}

impl DefenderPolicy {
    /// Policy with no throttling, lockout, or second factor.
    ///
    /// Useful as the online baseline when demonstrating what each control
    /// adds: rate limit high enough not to bind, lockout disabled, MFA off.
    pub fn permissive() -> Self {
        Self {
            rate_limit_per_minute: 6_000_000.0,
            lockout_threshold: 0,
            lockout_duration_seconds: 0.0,
            mfa_enabled: false,
            mfa_bypass_probability: 1.0,
        }
    }

    /// Enable the second factor with the given bypass probability.
    pub fn with_mfa(mut self, bypass_probability: f64) -> Self {
        self.mfa_enabled = true;
        self.mfa_bypass_probability = bypass_probability;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_achievable_defaults_to_one() {
        assert_eq!(PasswordModel::length(62, 8).max_achievable_probability(), 1.0);
        assert_eq!(PasswordModel::passphrase(7776, 5).max_achievable_probability(), 1.0);
        assert_eq!(PasswordModel::dictionary(10_000).max_achievable_probability(), 1.0);
    }

    #[test]
    fn max_achievable_tracks_coverage() {
        let model = PasswordModel::dictionary_with_coverage(10_000, 0.35);
        assert_eq!(model.max_achievable_probability(), 0.35);
    }

    #[test]
    fn max_achievable_clamps_bad_coverage() {
        let high = PasswordModel::dictionary_with_coverage(10, 1.5);
        assert_eq!(high.max_achievable_probability(), 1.0);

        let low = PasswordModel::dictionary_with_coverage(10, -0.2);
        assert_eq!(low.max_achievable_probability(), 0.0);
    }

    #[test]
    fn default_policy_has_mfa_disabled() {
        let policy = DefenderPolicy::default();
        assert!(!policy.mfa_enabled);
        assert!(policy.lockout_threshold > 0);
    }

    #[test]
    fn with_mfa_enables_and_sets_bypass() {
        let policy = DefenderPolicy::default().with_mfa(0.05);
        assert!(policy.mfa_enabled);
        assert_eq!(policy.mfa_bypass_probability, 0.05);
    }
}
