use crate::core::format::{render_grid, render_tiers, FormatConfig};
use crate::core::placement::{check_capacity, place, shuffled, tier};
use crate::domain::model::{LayoutKind, Orientation, Roster};
use crate::domain::ports::Clock;
use crate::utils::error::Result;
use rand::Rng;

/// Produces one freshly randomised, rendered plan per call.
pub struct SeatingEngine<C: Clock> {
    roster: Roster,
    layout: LayoutKind,
    orientation: Orientation,
    format: FormatConfig,
    clock: C,
}

impl<C: Clock> SeatingEngine<C> {
    /// Fails up front if the grid layout cannot seat everyone.
    pub fn new(
        roster: Roster,
        layout: LayoutKind,
        orientation: Orientation,
        format: FormatConfig,
        clock: C,
    ) -> Result<Self> {
        if layout == LayoutKind::Grid {
            check_capacity(roster.len(), &roster.grid)?;
        }

        Ok(Self {
            roster,
            layout,
            orientation,
            format,
            clock,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn plan<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        let today = self.clock.today();

        let text = match self.layout {
            LayoutKind::Grid => {
                let order = shuffled(&self.roster.people, rng);
                let assignment = place(&order, &self.roster.grid, rng)?;
                render_grid(&assignment, &self.roster.people, &self.format, today)
            }
            LayoutKind::Tiers => {
                let tiers = tier(&self.roster.people, rng);
                tracing::debug!("Grouped {} people into {} tiers", self.roster.len(), tiers.len());
                render_tiers(&tiers, self.orientation, &self.format, today)
            }
        };

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::core::parser::parse;
    use crate::utils::error::SeatingError;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 9, 2).unwrap())
    }

    #[test]
    fn test_engine_rejects_overfull_grid_at_construction() {
        let roster = parse("names::\nA\nB\nC\ngrid::\n110\n").unwrap();
        let result = SeatingEngine::new(
            roster,
            LayoutKind::Grid,
            Orientation::FrontFirst,
            FormatConfig::plain(),
            clock(),
        );
        assert!(matches!(
            result,
            Err(SeatingError::CapacityError {
                people: 3,
                seats: 2
            })
        ));
    }

    #[test]
    fn test_tiers_ignore_grid_capacity() {
        let roster = parse("names::\nA\nB\nC\ngrid::\n").unwrap();
        let engine = SeatingEngine::new(
            roster,
            LayoutKind::Tiers,
            Orientation::BackFirst,
            FormatConfig::plain(),
            clock(),
        )
        .unwrap();
        assert_eq!(engine.roster().len(), 3);
        assert_eq!(engine.roster().grid.seat_count(), 0);

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let text = engine.plan(&mut rng).unwrap();
        assert!(text.contains("Monday, September 2, 2024"));
        assert!(text.find("Back").unwrap() < text.find("Front").unwrap());
    }

    #[test]
    fn test_same_seed_same_plan() {
        let roster = parse("names::\nAda\nBea\nCy\nDot\ngrid::\n111\n111\n").unwrap();
        let engine = SeatingEngine::new(
            roster,
            LayoutKind::Grid,
            Orientation::FrontFirst,
            FormatConfig::plain(),
            clock(),
        )
        .unwrap();

        let a = engine.plan(&mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        let b = engine.plan(&mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }
}
