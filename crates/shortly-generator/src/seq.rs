use crate::Generator;
use shortly_core::{Alias, ALPHABET, TOKEN_LENGTH};
use std::sync::atomic::{AtomicU64, Ordering};

/// Number of distinct tokens, 36^6.
const TOKEN_SPACE: u64 = 36u64.pow(TOKEN_LENGTH as u32);

/// A deterministic alias generator using a sequential counter.
///
/// This generator produces `short.ly/000000`, `short.ly/000001`, ...,
/// `short.ly/00000z`, `short.ly/000010` and so on, wrapping around after
/// `short.ly/zzzzzz`. Useful wherever the next alias must be predictable.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
        }
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SeqGenerator {
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a generator whose first alias encodes `offset`.
    ///
    /// Useful for resuming after a known number of aliases was handed out.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
        }
    }

    /// Moves the counter forward to `offset` if it is behind it.
    ///
    /// The counter never moves backwards, so aliases already handed out by
    /// this generator are not repeated.
    pub fn advance_to(&self, offset: u64) {
        self.counter.fetch_max(offset, Ordering::SeqCst);
    }
}

fn encode_base36(mut value: u64) -> String {
    let mut buf = [b'0'; TOKEN_LENGTH];
    for slot in buf.iter_mut().rev() {
        *slot = ALPHABET[(value % 36) as usize];
        value /= 36;
    }
    buf.iter().map(|&b| b as char).collect()
}

impl Generator for SeqGenerator {
    fn generate(&self) -> Alias {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        let token = encode_base36(count % TOKEN_SPACE);
        Alias::from_token_unchecked(&token)
    }
}
