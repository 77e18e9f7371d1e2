pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalRosterStore, StdTerminal, SystemClock};
pub use config::Settings;
pub use core::{engine::SeatingEngine, parser::parse};
pub use utils::error::{Result, SeatingError};
