//! Public surface for lottobook's computational core.
//!
//! The service layer depends on this crate alone: it re-exports the engine
//! and binds the generators to a seeded-from-entropy ChaCha RNG. Anything
//! that wants reproducibility (tests, replay tooling) uses the `_core`
//! functions directly with its own RNG.

pub use lottobook_core::{
    DEFAULT_QUALIFY_THRESHOLD, PICK_COUNT, POOL_MAX, POOL_MIN, SYSTEM_BATCH_LEN, error, generate,
    obs, types, verify,
};

use lottobook_core::{
    error::CoverageError,
    generate::{SystemBatch, random_ticket, system_batch},
    types::NumberSet,
};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use lottobook_core::prelude::*;
}

/// A fresh RNG seeded from the thread-local entropy source. Each call
/// owns its generator, so concurrent users never share RNG state.
#[must_use]
pub fn default_rng() -> ChaCha12Rng {
    ChaCha12Rng::from_rng(&mut rand::rng())
}

/// One uniformly random ticket line from a fresh RNG.
#[must_use]
pub fn quick_pick() -> NumberSet {
    random_ticket(&mut default_rng())
}

/// A full-coverage system batch from a fresh RNG.
///
/// A `CoverageError` here means the generator itself is defective; the
/// caller may retry, the library never does.
pub fn system_play() -> Result<SystemBatch, CoverageError> {
    system_batch(&mut default_rng())
}

///
/// TESTS
///
