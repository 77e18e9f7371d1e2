pub mod engine;
pub mod format;
pub mod parser;
pub mod placement;
pub mod repeats;

pub use crate::domain::model::{
    Assignment, Attribute, LayoutKind, Orientation, Person, PlaceableGrid, Position, Roster, Tier,
};
pub use crate::domain::ports::{Clock, RosterStore, Terminal};
pub use crate::utils::error::Result;
