use crate::{POOL_MAX, POOL_MIN, SYSTEM_BATCH_LEN, error::CoverageError, types::NumberSet};

/// One bit set for every playable number.
const FULL_POOL_MASK: u64 = ((1u64 << POOL_MAX) - 1) << 1;

/// Check the system-batch invariant: exactly nine tickets whose union is
/// the whole pool.
///
/// Per-ticket validity (six distinct, in range) is enforced by
/// construction, so the union can only fall short, never overshoot. A
/// shortfall is reported with the exact missing numbers.
pub fn verify_coverage(tickets: &[NumberSet]) -> Result<(), CoverageError> {
    if tickets.len() != SYSTEM_BATCH_LEN {
        return Err(CoverageError::WrongLength {
            found: tickets.len(),
        });
    }

    let mut union = 0u64;
    for ticket in tickets {
        union |= ticket.mask();
    }

    if union == FULL_POOL_MASK {
        return Ok(());
    }

    let missing = (POOL_MIN..=POOL_MAX)
        .filter(|&n| union & (1u64 << n) == 0)
        .collect();

    Err(CoverageError::MissingNumbers { missing })
}

///
/// TESTS
///
