//! The verification engine: match every registered ticket against every
//! recorded draw and report the pairings that reach the prize threshold.

mod report;

pub use report::{MatchResult, TicketMatches, VerificationReport};

use crate::{
    DEFAULT_QUALIFY_THRESHOLD, obs,
    types::{Draw, Ticket},
};
use std::time::Instant;

///
/// Verifier
///
/// Compares ticket/draw pairs with an O(1) mask intersection each, so the
/// T x D sweep stays effectively instantaneous at bookkeeping scale. The
/// threshold is the only knob; the matching primitive itself knows nothing
/// about prize tiers.
///

#[derive(Clone, Copy, Debug)]
pub struct Verifier {
    threshold: u8,
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new(DEFAULT_QUALIFY_THRESHOLD)
    }
}

impl Verifier {
    /// A verifier that qualifies pairs with at least `threshold` hits.
    #[must_use]
    pub const fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub const fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Match every ticket against every draw.
    ///
    /// Tickets without a qualifying draw are omitted; per ticket, matches
    /// keep the draw input order. Empty inputs are a normal, empty report.
    #[must_use]
    pub fn verify(&self, tickets: &[Ticket], draws: &[Draw]) -> VerificationReport {
        let started = Instant::now();

        let mut entries = Vec::new();
        for ticket in tickets {
            let mut matches = Vec::new();
            for draw in draws {
                let overlap = ticket.numbers.overlap(&draw.numbers);
                if overlap.hits >= self.threshold {
                    matches.push(MatchResult {
                        draw: draw.id,
                        date: draw.date,
                        hits: overlap.hits,
                        numbers: overlap.numbers,
                    });
                }
            }

            if !matches.is_empty() {
                entries.push(TicketMatches {
                    ticket: ticket.id,
                    numbers: ticket.numbers,
                    matches,
                });
            }
        }

        obs::record_verify(
            (tickets.len() * draws.len()) as u64,
            entries.len() as u64,
        );

        VerificationReport {
            entries,
            tickets_considered: tickets.len(),
            draws_considered: draws.len(),
            elapsed: started.elapsed(),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Date, GameTag, NumberSet};
    use ulid::Ulid;

    fn ticket(n: u128, numbers: [u8; 6]) -> Ticket {
        Ticket::new(Ulid::from_parts(0, n), NumberSet::new(&numbers).unwrap())
    }

    fn draw(n: u128, date: &str, numbers: [u8; 6]) -> Draw {
        Draw::new(
            Ulid::from_parts(0, n),
            Date::parse(date).unwrap(),
            GameTag::from("6aus49"),
            NumberSet::new(&numbers).unwrap(),
        )
    }

    // ---------------------
    // filtering
    // ---------------------

    #[test]
    fn qualifying_ticket_is_reported_and_blank_ticket_is_omitted() {
        let t1 = ticket(1, [1, 2, 3, 4, 5, 6]);
        let t2 = ticket(2, [10, 20, 30, 40, 41, 42]);
        let d = draw(7, "2025-01-10", [1, 2, 3, 7, 8, 9]);

        let report = Verifier::default().verify(&[t1, t2], &[d.clone()]);

        assert_eq!(report.len(), 1);
        assert_eq!(report.tickets_considered, 2);
        assert_eq!(report.draws_considered, 1);

        let entry = report.entry(t1.id).unwrap();
        assert_eq!(entry.numbers, t1.numbers);
        assert_eq!(entry.matches.len(), 1);
        assert_eq!(entry.matches[0].draw, d.id);
        assert_eq!(entry.matches[0].date, d.date);
        assert_eq!(entry.matches[0].hits, 3);
        assert_eq!(entry.matches[0].numbers, vec![1, 2, 3]);

        assert!(report.entry(t2.id).is_none());
    }

    #[test]
    fn empty_inputs_give_empty_reports() {
        let t = ticket(1, [1, 2, 3, 4, 5, 6]);
        let d = draw(2, "2025-01-10", [1, 2, 3, 7, 8, 9]);

        let verifier = Verifier::default();

        let report = verifier.verify(&[], &[d]);
        assert!(report.is_empty());
        assert_eq!(report.tickets_considered, 0);
        assert_eq!(report.draws_considered, 1);

        let report = verifier.verify(&[t], &[]);
        assert!(report.is_empty());
        assert_eq!(report.tickets_considered, 1);
        assert_eq!(report.draws_considered, 0);
    }

    // ---------------------
    // threshold
    // ---------------------

    #[test]
    fn threshold_moves_the_same_pair_in_and_out() {
        // exactly two shared numbers
        let t = ticket(1, [1, 2, 10, 11, 12, 13]);
        let d = draw(2, "2025-01-10", [1, 2, 30, 31, 32, 33]);

        assert!(Verifier::new(3).verify(&[t], &[d.clone()]).is_empty());

        let report = Verifier::new(2).verify(&[t], &[d]);
        assert_eq!(report.len(), 1);
        assert_eq!(report.entries[0].matches[0].hits, 2);
    }

    #[test]
    fn threshold_zero_qualifies_every_pair() {
        let t = ticket(1, [1, 2, 3, 4, 5, 6]);
        let d = draw(2, "2025-01-10", [44, 45, 46, 47, 48, 49]);

        let report = Verifier::new(0).verify(&[t], &[d]);
        assert_eq!(report.total_matches(), 1);
        assert_eq!(report.entries[0].matches[0].hits, 0);
        assert!(report.entries[0].matches[0].numbers.is_empty());
    }

    #[test]
    fn threshold_above_six_qualifies_nothing() {
        let t = ticket(1, [1, 2, 3, 4, 5, 6]);
        let d = draw(2, "2025-01-10", [1, 2, 3, 4, 5, 6]);

        assert!(Verifier::new(7).verify(&[t], &[d]).is_empty());
    }

    // ---------------------
    // ordering
    // ---------------------

    #[test]
    fn matches_keep_draw_input_order() {
        let t = ticket(1, [1, 2, 3, 4, 5, 6]);

        // deliberately out of date order
        let later = draw(2, "2025-03-01", [1, 2, 3, 40, 41, 42]);
        let earlier = draw(3, "2025-01-01", [4, 5, 6, 40, 41, 42]);

        let report = Verifier::default().verify(&[t], &[later.clone(), earlier.clone()]);

        let entry = report.entry(t.id).unwrap();
        assert_eq!(entry.matches.len(), 2);
        assert_eq!(entry.matches[0].draw, later.id);
        assert_eq!(entry.matches[1].draw, earlier.id);
    }

    #[test]
    fn full_hit_is_reported_with_all_numbers() {
        let t = ticket(1, [3, 11, 19, 27, 35, 43]);
        let d = draw(2, "2025-01-10", [43, 35, 27, 19, 11, 3]);

        let report = Verifier::default().verify(&[t], &[d]);
        let entry = &report.entries[0];
        assert_eq!(entry.matches[0].hits, 6);
        assert_eq!(entry.matches[0].numbers, vec![3, 11, 19, 27, 35, 43]);
    }
}
