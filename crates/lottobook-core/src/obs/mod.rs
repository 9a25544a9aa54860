//! Observability: ephemeral, in-memory counters for engine operations.
//!
//! The engine never logs and never pushes telemetry. Counters accumulate
//! per thread and are read and reset on demand by the caller; per-call
//! timing travels inside `VerificationReport` itself.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;

thread_local! {
    static STATE: RefCell<CoreMetrics> = RefCell::new(CoreMetrics::default());
}

///
/// CoreMetrics
///
/// Cumulative operation counters since start or last reset.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CoreMetrics {
    // Verification
    pub verify_calls: u64,
    pub pairs_compared: u64,
    pub tickets_qualified: u64,

    // Generation
    pub random_tickets: u64,
    pub system_batches: u64,
    pub coverage_failures: u64,
}

/// Snapshot the current counters.
#[must_use]
pub fn metrics_report() -> CoreMetrics {
    STATE.with(|state| *state.borrow())
}

/// Zero all counters.
pub fn metrics_reset() {
    STATE.with(|state| *state.borrow_mut() = CoreMetrics::default());
}

pub(crate) fn record_verify(pairs: u64, qualified: u64) {
    STATE.with(|state| {
        let mut m = state.borrow_mut();
        m.verify_calls += 1;
        m.pairs_compared += pairs;
        m.tickets_qualified += qualified;
    });
}

pub(crate) fn record_random_ticket() {
    STATE.with(|state| state.borrow_mut().random_tickets += 1);
}

pub(crate) fn record_system_batch(covered: bool) {
    STATE.with(|state| {
        let mut m = state.borrow_mut();
        m.system_batches += 1;
        if !covered {
            m.coverage_failures += 1;
        }
    });
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_and_reset() {
        metrics_reset();

        record_verify(12, 3);
        record_verify(4, 0);
        record_random_ticket();
        record_system_batch(true);
        record_system_batch(false);

        let report = metrics_report();
        assert_eq!(report.verify_calls, 2);
        assert_eq!(report.pairs_compared, 16);
        assert_eq!(report.tickets_qualified, 3);
        assert_eq!(report.random_tickets, 1);
        assert_eq!(report.system_batches, 2);
        assert_eq!(report.coverage_failures, 1);

        metrics_reset();
        assert_eq!(metrics_report(), CoreMetrics::default());
    }
}
