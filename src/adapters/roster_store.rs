use crate::domain::ports::RosterStore;
use crate::utils::error::{Result, SeatingError};
use std::fs;
use std::path::{Path, PathBuf};

const ROSTER_EXTENSION: &str = "txt";

/// A roster file offered in the selection menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub label: String,
    pub path: PathBuf,
}

/// Labels candidates by file stem and sorts them in descending order, so the
/// newest of `2024-9B`, `2025-9B` comes first.
pub fn list_candidates(store: &impl RosterStore) -> Result<Vec<Candidate>> {
    let mut candidates: Vec<Candidate> = store
        .list()?
        .into_iter()
        .map(|(label, path)| Candidate { label, path })
        .collect();
    candidates.sort_by(|a, b| b.label.cmp(&a.label));
    Ok(candidates)
}

/// Parses a 1-based menu choice.
pub fn parse_selection(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| SeatingError::SelectionError {
            input: trimmed.to_string(),
            reason: "not a number".to_string(),
        })
}

pub fn resolve_selection(candidates: &[Candidate], index: usize) -> Result<&Path> {
    if index == 0 || index > candidates.len() {
        return Err(SeatingError::SelectionError {
            input: index.to_string(),
            reason: format!("choose a number from 1 to {}", candidates.len()),
        });
    }
    Ok(&candidates[index - 1].path)
}

/// Menu lines `[1] label`, numbers right-aligned to the widest index.
pub fn menu_lines(candidates: &[Candidate]) -> Vec<String> {
    let width = candidates.len().to_string().len();
    candidates
        .iter()
        .enumerate()
        .map(|(i, c)| format!("[{:>width$}] {}", i + 1, c.label, width = width))
        .collect()
}

/// Roster files kept as `*.txt` in one directory.
#[derive(Debug, Clone)]
pub struct LocalRosterStore {
    base_path: PathBuf,
}

impl LocalRosterStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl RosterStore for LocalRosterStore {
    fn root(&self) -> &Path {
        &self.base_path
    }

    fn list(&self) -> Result<Vec<(String, PathBuf)>> {
        if !self.base_path.is_dir() {
            return Err(SeatingError::NoCandidatesError {
                dir: self.base_path.clone(),
            });
        }

        let mut found = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(ROSTER_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                found.push((stem.to_string(), path.clone()));
            }
        }

        tracing::debug!(
            "Found {} roster files in {}",
            found.len(),
            self.base_path.display()
        );
        Ok(found)
    }

    fn read(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }
}
