use crate::utils::error::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Source of "today" for the plan banner.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Where roster files live.
pub trait RosterStore {
    fn root(&self) -> &Path;
    /// Candidate roster files as `(label, path)` pairs.
    fn list(&self) -> Result<Vec<(String, PathBuf)>>;
    fn read(&self, path: &Path) -> Result<String>;
}

/// Interactive console used by the session loop.
pub trait Terminal {
    fn clear(&mut self) -> Result<()>;
    fn print(&mut self, text: &str) -> Result<()>;
    /// Shows `prompt` and reads one line. `None` means end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>>;
}
