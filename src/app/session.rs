use crate::adapters::roster_store::{list_candidates, menu_lines, parse_selection, resolve_selection};
use crate::core::engine::SeatingEngine;
use crate::core::parser::parse;
use crate::domain::model::Roster;
use crate::domain::ports::{Clock, RosterStore, Terminal};
use crate::utils::error::{Result, SeatingError};
use rand::Rng;
use std::path::{Path, PathBuf};

pub const RERUN_PROMPT: &str = "Enter to rerun or Q to quit: ";
pub const SELECTION_PROMPT: &str = "Selection [#]: ";
const QUIT: &str = "Q";

/// Picks a roster file: automatically when there is only one, otherwise from a
/// numbered menu. Bad menu input is reported and asked again.
pub fn choose_file<S: RosterStore, T: Terminal>(store: &S, terminal: &mut T) -> Result<PathBuf> {
    let candidates = list_candidates(store)?;

    match candidates.len() {
        0 => {
            return Err(SeatingError::NoCandidatesError {
                dir: store.root().to_path_buf(),
            })
        }
        1 => {
            tracing::info!("Using the only roster file: {}", candidates[0].label);
            return Ok(candidates[0].path.clone());
        }
        _ => {}
    }

    let mut menu = vec!["Choose names file: ".to_string(), String::new()];
    menu.extend(menu_lines(&candidates));
    menu.push(String::new());
    terminal.print(&menu.join("\n"))?;

    loop {
        let Some(input) = terminal.prompt(SELECTION_PROMPT)? else {
            return Err(SeatingError::SelectionError {
                input: String::new(),
                reason: "input ended before a roster was chosen".to_string(),
            });
        };

        match parse_selection(&input).and_then(|i| resolve_selection(&candidates, i)) {
            Ok(path) => return Ok(path.to_path_buf()),
            Err(e) if e.is_recoverable() => {
                tracing::warn!("{}", e);
                terminal.print(&format!("❌ {}", e.user_friendly_message()))?;
            }
            Err(e) => return Err(e),
        }
    }
}

pub fn load_roster<S: RosterStore>(store: &S, path: &Path) -> Result<Roster> {
    let roster = parse(&store.read(path)?)?;
    tracing::info!(
        "Loaded {} people and {} seats from {}",
        roster.len(),
        roster.grid.seat_count(),
        path.display()
    );
    Ok(roster)
}

/// Prints a fresh plan each cycle until the user types `Q` or input ends.
/// Returns the number of plans shown.
pub fn run<C: Clock, T: Terminal, R: Rng + ?Sized>(
    engine: &SeatingEngine<C>,
    terminal: &mut T,
    rng: &mut R,
) -> Result<usize> {
    let mut cycles = 0;

    loop {
        terminal.clear()?;
        let plan = engine.plan(rng)?;
        terminal.print(&plan)?;
        cycles += 1;
        tracing::debug!("Rendered plan #{}", cycles);

        match terminal.prompt(RERUN_PROMPT)? {
            Some(choice) if choice.trim().to_uppercase() == QUIT => break,
            Some(_) => continue,
            None => break,
        }
    }

    Ok(cycles)
}
