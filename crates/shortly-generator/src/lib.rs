pub mod random;
pub mod seq;

pub use random::RandomGenerator;
pub use seq::SeqGenerator;

use shortly_core::Alias;

/// Trait for generating aliases.
///
/// Implementations are pure generators that don't interact with storage.
/// They always return a well-formed alias and never fail.
///
/// No implementation is required to be unique against aliases that were
/// handed out earlier; callers that need uniqueness must check for it
/// themselves.
pub trait Generator: Send + Sync + 'static {
    fn generate(&self) -> Alias;
}
