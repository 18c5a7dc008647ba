use crate::Generator;
use quicklink_core::base36::{ALPHABET, CODE_LENGTH};
use quicklink_core::ShortCode;
use rand::Rng;

/// Stateless generator drawing each symbol uniformly from `[0-9a-z]`.
///
/// Repeated calls may return the same code; callers needing distinct codes
/// should use [`SeqGenerator`](crate::SeqGenerator) or check for collisions
/// themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Draws a code from the given random source.
    pub fn generate_with<R: Rng>(rng: &mut R) -> ShortCode {
        let code: String = (0..CODE_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        ShortCode::new_unchecked(code)
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        Self::generate_with(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn codes_are_six_base36_symbols() {
        let generator = RandomGenerator::new();
        for _ in 0..10_000 {
            let code = generator.generate();
            assert_eq!(code.as_str().len(), CODE_LENGTH);
            // round-trips through the validating constructor
            assert!(ShortCode::new(code.as_str()).is_ok(), "{code:?}");
        }
    }

    #[test]
    fn same_seed_same_code() {
        let a = RandomGenerator::generate_with(&mut StdRng::seed_from_u64(7));
        let b = RandomGenerator::generate_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn every_symbol_shows_up() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<char> = (0..2_000)
            .flat_map(|_| {
                RandomGenerator::generate_with(&mut rng)
                    .as_str()
                    .chars()
                    .collect::<Vec<_>>()
            })
            .collect();
        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomGenerator>();
    }
}
