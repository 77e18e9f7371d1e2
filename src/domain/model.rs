use serde::{Deserialize, Serialize};

/// One-character tag attached to a roster line, used to pick a render colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Attribute {
    A,
    B,
    #[default]
    Default,
}

impl Attribute {
    /// Maps a source marker (`M`, `F`, `C`, or nothing) to an attribute.
    pub fn from_marker(marker: &str) -> Option<Self> {
        let marker = marker.trim();
        if marker.is_empty() {
            return Some(Attribute::Default);
        }

        let mut chars = marker.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        match c.to_ascii_uppercase() {
            'M' => Some(Attribute::A),
            'F' => Some(Attribute::B),
            'C' => Some(Attribute::Default),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub attribute: Attribute,
}

impl Person {
    pub fn new(name: impl Into<String>, attribute: Attribute) -> Self {
        Self {
            name: name.into(),
            attribute,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Rectangular matrix of seats that exist in the room.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaceableGrid {
    cells: Vec<Vec<bool>>,
}

impl PlaceableGrid {
    /// Callers guarantee equal row widths; the parser enforces it for file input.
    pub fn new(cells: Vec<Vec<bool>>) -> Self {
        debug_assert!(cells.windows(2).all(|w| w[0].len() == w[1].len()));
        Self { cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or(0)
    }

    pub fn is_placeable(&self, pos: Position) -> bool {
        self.cells
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .unwrap_or(false)
    }

    pub fn seat_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&seat| seat).count())
            .sum()
    }

    /// All placeable positions, row-major.
    pub fn seats(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(_, &seat)| seat)
                    .map(move |(col, _)| Position { row, col })
            })
            .collect()
    }

    pub fn as_rows(&self) -> &[Vec<bool>] {
        &self.cells
    }
}

/// People in file order plus the room they are seated in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    pub people: Vec<Person>,
    pub grid: PlaceableGrid,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// Seat-to-person mapping for a single render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<'a> {
    cells: Vec<Vec<Option<&'a Person>>>,
}

impl<'a> Assignment<'a> {
    /// An all-blank assignment shaped like `grid`.
    pub fn blank(grid: &PlaceableGrid) -> Self {
        Self {
            cells: vec![vec![None; grid.cols()]; grid.rows()],
        }
    }

    pub(crate) fn seat(&mut self, pos: Position, person: &'a Person) {
        self.cells[pos.row][pos.col] = Some(person);
    }

    pub fn get(&self, pos: Position) -> Option<&'a Person> {
        self.cells.get(pos.row)?.get(pos.col).copied().flatten()
    }

    pub fn rows(&self) -> &[Vec<Option<&'a Person>>] {
        &self.cells
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or(0)
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Position, &'a Person)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|p| (Position { row, col }, p)))
        })
    }

    /// Every seated person, row-major.
    pub fn people(&self) -> impl Iterator<Item = &'a Person> + '_ {
        self.occupied().map(|(_, person)| person)
    }
}

/// A desk row in the paired layout: one lone seat or a left/right pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier<'a> {
    Single(&'a Person),
    Pair(&'a Person, &'a Person),
}

impl<'a> Tier<'a> {
    pub fn len(&self) -> usize {
        match self {
            Tier::Single(_) => 1,
            Tier::Pair(..) => 2,
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, Tier::Single(_))
    }

    pub fn members(&self) -> Vec<&'a Person> {
        match *self {
            Tier::Single(p) => vec![p],
            Tier::Pair(left, right) => vec![left, right],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    #[default]
    Grid,
    Tiers,
}

/// Which edge of the room is printed at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    #[default]
    FrontFirst,
    BackFirst,
}

impl Orientation {
    /// Edge labels in print order.
    pub fn labels(self) -> (&'static str, &'static str) {
        match self {
            Orientation::FrontFirst => ("Front", "Back"),
            Orientation::BackFirst => ("Back", "Front"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_markers() {
        assert_eq!(Attribute::from_marker("M"), Some(Attribute::A));
        assert_eq!(Attribute::from_marker("f"), Some(Attribute::B));
        assert_eq!(Attribute::from_marker("C"), Some(Attribute::Default));
        assert_eq!(Attribute::from_marker(""), Some(Attribute::Default));
        assert_eq!(Attribute::from_marker("X"), None);
        assert_eq!(Attribute::from_marker("MF"), None);
    }

    #[test]
    fn test_grid_seats() {
        let grid = PlaceableGrid::new(vec![vec![true, false, true], vec![false, true, false]]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.seat_count(), 3);
        assert_eq!(
            grid.seats(),
            vec![
                Position { row: 0, col: 0 },
                Position { row: 0, col: 2 },
                Position { row: 1, col: 1 },
            ]
        );
        assert!(!grid.is_placeable(Position { row: 5, col: 0 }));
    }

    #[test]
    fn test_empty_grid() {
        let grid = PlaceableGrid::default();
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.cols(), 0);
        assert!(grid.seats().is_empty());
    }
}
