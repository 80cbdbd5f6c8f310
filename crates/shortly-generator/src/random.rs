use crate::Generator;
use rand::Rng;
use shortly_core::{Alias, ALPHABET, TOKEN_LENGTH};

/// Draws every token character uniformly from the base-36 alphabet.
///
/// Two calls may return the same alias; with 36^6 possible tokens this is
/// rare but collisions are neither detected nor resolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for RandomGenerator {
    fn generate(&self) -> Alias {
        let mut rng = rand::rng();
        let token: String = (0..TOKEN_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        tracing::debug!(%token, "generated random alias token");
        Alias::from_token_unchecked(&token)
    }
}
