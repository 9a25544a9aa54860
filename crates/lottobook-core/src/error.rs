use crate::{PICK_COUNT, POOL_MAX, POOL_MIN, SYSTEM_BATCH_LEN};
use thiserror::Error as ThisError;

///
/// NumberSetError
///
/// A candidate number set failed validation. Raised by the shared
/// constructor; the request layer pre-filters, the core re-validates, and
/// both go through the same checks.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum NumberSetError {
    #[error("a ticket line holds exactly {PICK_COUNT} numbers, found {found}")]
    WrongCount { found: usize },

    #[error("number {value} is outside the playable pool {POOL_MIN}..={POOL_MAX}")]
    OutOfRange { value: u8 },

    #[error("number {value} appears more than once")]
    Duplicate { value: u8 },

    #[error("'{token}' is not a number")]
    Unparsable { token: String },
}

///
/// CoverageError
///
/// A system batch failed its post-generation check. Indicates an algorithm
/// defect, not bad input; the caller may regenerate, the core never retries.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CoverageError {
    #[error("a system batch holds exactly {SYSTEM_BATCH_LEN} tickets, found {found}")]
    WrongLength { found: usize },

    #[error("system batch never covers numbers {missing:?}")]
    MissingNumbers { missing: Vec<u8> },

    #[error("ticket {index} in system batch is invalid: {source}")]
    InvalidTicket {
        index: usize,
        source: NumberSetError,
    },
}

///
/// TESTS
///
