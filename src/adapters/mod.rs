// Adapters layer: concrete implementations of the domain ports (files, console, clock).

pub mod clock;
pub mod roster_store;
pub mod terminal;

pub use clock::{FixedClock, SystemClock};
pub use roster_store::{Candidate, LocalRosterStore};
pub use terminal::StdTerminal;
