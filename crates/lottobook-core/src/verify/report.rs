use crate::types::{Date, DrawId, NumberSet, TicketId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

///
/// MatchResult
///
/// One qualifying ticket/draw pairing: which draw, when it was held, how
/// many numbers landed, and the landed numbers in ascending order.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MatchResult {
    pub draw: DrawId,
    pub date: Date,
    pub hits: u8,
    pub numbers: Vec<u8>,
}

///
/// TicketMatches
///
/// All qualifying draws for one ticket, in draw input order. The caller
/// controls draw ordering (typically by date), and the engine preserves it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TicketMatches {
    pub ticket: TicketId,
    pub numbers: NumberSet,
    pub matches: Vec<MatchResult>,
}

///
/// VerificationReport
///
/// Outcome of one verification run. Tickets without a single qualifying
/// draw are omitted; the considered counts record the full input size.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct VerificationReport {
    pub entries: Vec<TicketMatches>,
    pub tickets_considered: usize,
    pub draws_considered: usize,
    pub elapsed: Duration,
}

impl VerificationReport {
    /// Number of tickets with at least one qualifying draw.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no ticket qualified.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total qualifying ticket/draw pairings across all entries.
    #[must_use]
    pub fn total_matches(&self) -> usize {
        self.entries.iter().map(|entry| entry.matches.len()).sum()
    }

    /// The entry for one ticket, if it qualified.
    #[must_use]
    pub fn entry(&self, ticket: TicketId) -> Option<&TicketMatches> {
        self.entries.iter().find(|entry| entry.ticket == ticket)
    }
}

///
/// TESTS
///
