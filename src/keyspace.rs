//! Keyspace calculation.
//!
//! Converts a password-generation model into the number of distinct
//! candidates N an attacker must consider:
//! ```text
//! Length:     N = alphabet_size ^ length
//! Passphrase: N = wordlist_size ^ word_count
//! Dictionary: N = size
//! ```
//! N is carried as an `f64` magnitude. Past ~2^53 the value is an
//! approximation, and truly huge models overflow to infinity; both are
//! acceptable: every downstream consumer guards the degenerate ends
//! rather than treating them as errors.

use crate::types::PasswordModel;

/// Integer exponentiation by repeated squaring over f64.
///
/// `exp == 0` yields 1 even for base 0, matching the convention that an
/// empty credential has exactly one candidate; callers that want "no
/// credential at all" check for zero length themselves.
fn pow_int(base: f64, mut exp: u32) -> f64 {
    let mut result = 1.0;
    let mut factor = base;
    while exp > 0 {
        if exp & 1 == 1 {
            result *= factor;
        }
        factor *= factor;
        exp >>= 1;
    }
    result
}

/// Compute the keyspace N for a password model.
///
/// A zero alphabet, length, wordlist, or word count yields 0: there is
/// nothing to guess, and the engine reports the request as degenerate.
pub fn compute_keyspace(model: &PasswordModel) -> f64 {
    match *model {
        PasswordModel::Length { alphabet_size, length } => {
            if alphabet_size == 0 || length == 0 {
                0.0
            } else {
                pow_int(alphabet_size as f64, length)
            }
        }
        PasswordModel::Passphrase { wordlist_size, word_count } => {
            if wordlist_size == 0 || word_count == 0 {
                0.0
            } else {
                pow_int(wordlist_size as f64, word_count)
            }
        }
        PasswordModel::Dictionary { size, .. } => size as f64,
    }
}
