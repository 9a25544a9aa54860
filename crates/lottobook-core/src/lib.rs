//! Computational core for lottobook: the 6-of-49 number-set value type,
//! uniform and full-coverage ticket generators, and the draw verification
//! engine. Pure and synchronous; storage, HTTP, and CSV framing live in the
//! surrounding service.

pub mod error;
pub mod generate;
pub mod obs;
pub mod types;
pub mod verify;

///
/// CONSTANTS
///

/// Lowest playable number.
pub const POOL_MIN: u8 = 1;

/// Highest playable number.
pub const POOL_MAX: u8 = 49;

/// Count of numbers on a single ticket line.
pub const PICK_COUNT: usize = 6;

/// Tickets in a full-coverage system batch. Nine lines of six numbers give
/// 54 slots over a 49-number pool, so five numbers necessarily repeat.
pub const SYSTEM_BATCH_LEN: usize = 9;

/// Lowest prize tier: a ticket/draw pair needs at least this many shared
/// numbers to qualify for the report.
pub const DEFAULT_QUALIFY_THRESHOLD: u8 = 3;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Errors and counters are imported from their modules where needed.
///

pub mod prelude {
    pub use crate::{
        generate::{SystemBatch, random_ticket, system_batch},
        types::{Date, Draw, DrawId, GameTag, NumberSet, Ticket, TicketId},
        verify::{MatchResult, TicketMatches, VerificationReport, Verifier},
    };
}
