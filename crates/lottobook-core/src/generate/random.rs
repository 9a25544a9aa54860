use crate::{PICK_COUNT, generate::number_pool, obs, types::NumberSet};
use rand::{Rng, seq::SliceRandom};

/// Draw one uniformly random ticket line.
///
/// Shuffles the 49-number pool (Fisher–Yates) and keeps the first six, so
/// every C(49,6) combination is equally likely. The result is sorted
/// ascending for stable display.
pub fn random_ticket<R: Rng + ?Sized>(rng: &mut R) -> NumberSet {
    let mut pool = number_pool();
    pool.shuffle(rng);

    let mut picked = [0u8; PICK_COUNT];
    picked.copy_from_slice(&pool[..PICK_COUNT]);
    picked.sort_unstable();

    obs::record_random_ticket();

    // Safe: six distinct survivors of a shuffled in-range pool
    match NumberSet::new(&picked) {
        Ok(set) => set,
        Err(_) => unreachable!(),
    }
}

///
/// TESTS
///
