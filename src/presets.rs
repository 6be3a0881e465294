//! Built-in verifier preset catalog.
//!
//! A fixed, read-only set of named cost profiles covering the usual
//! teaching spectrum: a fast unsalted hash, a tunable CPU-bound KDF, two
//! memory-hard KDFs, and an iterated PBKDF. Rates are order-of-magnitude
//! demo values only. The engine never consults this catalog itself (it is
//! handed a [`HashPreset`] inside the request), so callers are free to
//! supply their own profiles instead.

use std::sync::OnceLock;

use crate::types::HashPreset;

static CATALOG: OnceLock<Vec<HashPreset>> = OnceLock::new();

fn preset(
    id: &str,
    display_name: &str,
    baseline_guesses_per_second: f64,
    has_salt: bool,
    is_memory_hard: bool,
    cost_note: &str,
) -> HashPreset {
    HashPreset {
        id: id.to_string(),
        display_name: display_name.to_string(),
        baseline_guesses_per_second,
        has_salt,
        is_memory_hard,
        cost_note: Some(cost_note.to_string()),
    }
}

/// The full built-in catalog, in display order.
pub fn catalog() -> &'static [HashPreset] {
    CATALOG.get_or_init(|| {
        vec![
            preset(
                "fast-md5",
                "Fast Hash (MD5/SHA1-like)",
                1e9,
                false,
                false,
                "Fast unsalted hashing on capable hardware; demo-only speed.",
            ),
            preset(
                "bcrypt-12",
                "bcrypt (cost 12)",
                5e4,
                true,
                false,
                "Slower, CPU-bound; ballpark demo value.",
            ),
            preset(
                "argon2",
                "Argon2 (mem-hard)",
                2e3,
                true,
                true,
                "Memory-hard KDF; demo value depends on memory/time params.",
            ),
            preset(
                "scrypt",
                "scrypt (mem-hard)",
                1e4,
                true,
                true,
                "Memory-hard KDF; demo value for interactive-login params.",
            ),
            preset(
                "pbkdf2-310k",
                "PBKDF2 ~310k iters",
                2e4,
                true,
                false,
                "Typical PBKDF2 with high iterations; demo-only.",
            ),
        ]
    })
}

/// Look up a preset by id.
pub fn find(id: &str) -> Option<&'static HashPreset> {
    catalog().iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_nonempty_and_ids_unique() {
        let presets = catalog();
        assert!(!presets.is_empty());

        for (i, a) in presets.iter().enumerate() {
            for b in &presets[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate preset id {}", a.id);
            }
        }
    }

    #[test]
    fn find_known_ids() {
        let fast = find("fast-md5").expect("fast-md5 present");
        assert_eq!(fast.baseline_guesses_per_second, 1e9);
        assert!(!fast.has_salt);

        let argon = find("argon2").expect("argon2 present");
        assert!(argon.is_memory_hard);
        assert!(argon.has_salt);
    }

    #[test]
    fn find_unknown_id_is_none() {
        assert!(find("no-such-preset").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn memory_hard_presets_are_slowest_class() {
        // The catalog should preserve the teaching ordering: anything
        // memory-hard is slower than the fast hash by orders of magnitude.
        let fast = find("fast-md5").unwrap().baseline_guesses_per_second;
        for p in catalog().iter().filter(|p| p.is_memory_hard) {
            assert!(p.baseline_guesses_per_second < fast / 1_000.0);
        }
    }
}
