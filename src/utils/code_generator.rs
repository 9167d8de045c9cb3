//! Short code generation.
//!
//! Codes are drawn uniformly from a case-sensitive alphanumeric alphabet using the
//! thread-local CSPRNG from `rand`. Generation is behind the [`AliasGenerator`]
//! trait so the mapping store can be exercised with deterministic codes.

use rand::Rng;

/// Alphabet for generated short codes.
pub const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default length of generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 9;

/// Shortest code length accepted by [`RandomAliasGenerator`].
pub const MIN_CODE_LENGTH: usize = 7;

/// Longest code length accepted by [`RandomAliasGenerator`].
pub const MAX_CODE_LENGTH: usize = 14;

/// Source of candidate short codes.
///
/// Each call is independent; callers must not assume ordering or uniqueness
/// between calls. Uniqueness is enforced by the mapping store.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Uniform random generator over [`CHARSET`].
///
/// With the default 9 characters the code space is 62^9 (about 1.3e16), so
/// collisions stay negligible for any realistic table size.
#[derive(Debug, Clone)]
pub struct RandomAliasGenerator {
    length: usize,
}

impl RandomAliasGenerator {
    /// Creates a generator producing codes of `length` characters.
    ///
    /// The length is clamped to `MIN_CODE_LENGTH..=MAX_CODE_LENGTH`.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(MIN_CODE_LENGTH, MAX_CODE_LENGTH),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomAliasGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}

/// Returns true if `code` could have been produced by [`RandomAliasGenerator`].
///
/// Used to reject obviously foreign path segments before touching storage.
pub fn is_well_formed_code(code: &str) -> bool {
    !code.is_empty() && code.len() <= 64 && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_not_empty() {
        let code = RandomAliasGenerator::default().generate();
        assert!(!code.is_empty());
    }

    #[test]
    fn test_generate_code_has_default_length() {
        let code = RandomAliasGenerator::default().generate();
        assert_eq!(code.len(), DEFAULT_CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        let generator = RandomAliasGenerator::default();
        for _ in 0..100 {
            let code = generator.generate();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let generator = RandomAliasGenerator::default();
        let codes: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_length_is_clamped() {
        assert_eq!(RandomAliasGenerator::new(1).length(), MIN_CODE_LENGTH);
        assert_eq!(RandomAliasGenerator::new(100).length(), MAX_CODE_LENGTH);
        assert_eq!(RandomAliasGenerator::new(12).generate().len(), 12);
    }

    #[test]
    fn test_generated_codes_are_well_formed() {
        let generator = RandomAliasGenerator::new(MAX_CODE_LENGTH);
        assert!(is_well_formed_code(&generator.generate()));
    }

    #[test]
    fn test_is_well_formed_code() {
        assert!(is_well_formed_code("Aa1Bb2"));
        assert!(is_well_formed_code("doesnotexist"));
        assert!(!is_well_formed_code(""));
        assert!(!is_well_formed_code("has-hyphen"));
        assert!(!is_well_formed_code("with space"));
        assert!(!is_well_formed_code(&"a".repeat(65)));
    }
}
