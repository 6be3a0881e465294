//! # guesswork
//!
//! Closed-form modeling of password-guessing attacks.
//!
//! This crate answers one question: given a password-generation model, a
//! verifier cost profile, and a defender's mitigation policy, how does an
//! attacker's cumulative guessing convert into a probability of compromise
//! over time? It outputs:
//! - Keyspace size for the password model
//! - Effective guesses per second under offline or throttled online attack
//! - A probability-vs-time curve and the T50/T95 thresholds
//! - Expected trial counts and human-readable notes on defender controls
//!
//! Everything is a pure function of its inputs: no I/O, no shared state, no
//! real cryptography. Verifier costs are illustrative order-of-magnitude
//! constants, and the probability curves are closed-form approximations of
//! sampling with replacement, not simulated trials. This is a teaching
//! instrument, not an attack tool.
//!
//! ## Quick Start
//!
//! ```ignore
//! use guesswork::{simulate, PasswordModel, SimulationRequest, presets};
//!
//! let request = SimulationRequest::new(
//!     PasswordModel::length(62, 8),
//!     presets::find("fast-md5").unwrap().clone(),
//! );
//! request.validate()?;
//!
//! let result = simulate(&request);
//! match result.t50 {
//!     guesswork::TimeToTarget::Reachable(secs) => println!("T50 in {secs:.0}s"),
//!     guesswork::TimeToTarget::Unreachable => println!("T50 out of reach"),
//! }
//! ```
//!
//! ## Offline vs online
//!
//! An offline attacker holds the verifier and is limited only by hash cost
//! and parallelism. An online attacker must talk to a live service, so rate
//! limits and lockout cycling bound sustained throughput, and an enabled
//! second factor scales every success probability by its bypass probability.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod constants;
mod engine;
mod error;
mod request;
mod result;
mod types;

// Functional modules
pub mod curve;
pub mod format;
pub mod keyspace;
pub mod presets;
pub mod probability;
pub mod rate;
pub mod threshold;
pub mod trial;

// Re-exports for public API
pub use constants::{DEFAULT_HORIZON_SECS, DEFAULT_SAMPLE_COUNT, DEFAULT_TRIAL_SEED, P50_TARGET, P95_TARGET};
pub use curve::sample_curve;
pub use engine::simulate;
pub use error::RequestError;
pub use keyspace::compute_keyspace;
pub use probability::{compose_mfa, success_probability};
pub use rate::effective_rate;
pub use request::SimulationRequest;
pub use result::{SimulationPoint, SimulationResult};
pub use threshold::{time_to_reach, TimeToTarget};
pub use trial::TrialOutcome;
pub use types::{AttackContext, DefenderPolicy, HashPreset, PasswordModel};
