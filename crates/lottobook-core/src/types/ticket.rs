use crate::types::NumberSet;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Identity of a registered ticket. Assigned by the owning service and
/// echoed back untouched in verification reports.
pub type TicketId = Ulid;

///
/// Ticket
///
/// A registered number selection. Ownership, quotas, and creation metadata
/// live with the caller; the engine reads only the numbers.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Ticket {
    pub id: TicketId,
    pub numbers: NumberSet,
}

impl Ticket {
    #[must_use]
    pub const fn new(id: TicketId, numbers: NumberSet) -> Self {
        Self { id, numbers }
    }
}
