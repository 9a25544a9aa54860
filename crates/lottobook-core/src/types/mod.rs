//! Domain value types. `NumberSet` is the foundation; tickets and draws
//! wrap it with the pass-through identity and calendar metadata the
//! surrounding service owns.

mod date;
mod draw;
mod number_set;
mod ticket;

pub use date::Date;
pub use draw::{Draw, DrawId, GameTag};
pub use number_set::{NumberSet, Overlap};
pub use ticket::{Ticket, TicketId};
