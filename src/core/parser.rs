//! Line-oriented roster format:
//!
//! ```text
//! names::
//! Alice:F
//! Bob
//! grid::
//! 1 1 0
//! 0 1 1
//! ```

use crate::domain::model::{Attribute, Person, PlaceableGrid, Roster};
use crate::utils::error::{Result, SeatingError};

const SECTION_DELIMITER: &str = "::";
const FIELD_SEPARATOR: char = ':';
const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Names,
    Grid,
}

pub fn parse(text: &str) -> Result<Roster> {
    let mut state = Section::Preamble;
    let mut seen_names = false;
    let mut seen_grid = false;
    let mut people = Vec::new();
    let mut rows: Vec<Vec<bool>> = Vec::new();

    // files saved by Notepad start with a BOM, which `trim` keeps
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((key, _)) = line.split_once(SECTION_DELIMITER) {
            state = match key.trim() {
                "names" => {
                    seen_names = true;
                    Section::Names
                }
                "grid" => {
                    seen_grid = true;
                    Section::Grid
                }
                other => {
                    return Err(SeatingError::FormatError {
                        line: line_no,
                        message: format!("unknown section `{}::`", other),
                    })
                }
            };
            continue;
        }

        match state {
            Section::Preamble => {
                tracing::trace!("Ignoring line {} before the first section", line_no);
            }
            Section::Names => people.push(parse_person(line, line_no)?),
            Section::Grid => {
                let row = parse_grid_row(line, line_no)?;
                if let Some(first) = rows.first() {
                    if first.len() != row.len() {
                        return Err(SeatingError::FormatError {
                            line: line_no,
                            message: format!(
                                "grid row has {} cells but the first row has {}",
                                row.len(),
                                first.len()
                            ),
                        });
                    }
                }
                rows.push(row);
            }
        }
    }

    if !seen_names {
        return Err(SeatingError::MissingSectionError { section: "names" });
    }
    if !seen_grid {
        return Err(SeatingError::MissingSectionError { section: "grid" });
    }

    tracing::debug!(
        "Parsed {} people and a {}x{} grid",
        people.len(),
        rows.len(),
        rows.first().map(Vec::len).unwrap_or(0)
    );

    Ok(Roster {
        people,
        grid: PlaceableGrid::new(rows),
    })
}

fn parse_person(line: &str, line_no: usize) -> Result<Person> {
    let mut fields = line.split(FIELD_SEPARATOR);
    let name = fields.next().unwrap_or_default().trim();
    if name.is_empty() {
        return Err(SeatingError::FormatError {
            line: line_no,
            message: "name is empty".to_string(),
        });
    }

    let marker = fields.next().unwrap_or_default();
    let attribute = Attribute::from_marker(marker).ok_or_else(|| SeatingError::FormatError {
        line: line_no,
        message: format!("unrecognised attribute `{}` for {}", marker.trim(), name),
    })?;

    Ok(Person::new(name, attribute))
}

fn parse_grid_row(line: &str, line_no: usize) -> Result<Vec<bool>> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            c.to_digit(10)
                .map(|d| d != 0)
                .ok_or_else(|| SeatingError::FormatError {
                    line: line_no,
                    message: format!("`{}` is not a grid digit", c),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_grid() {
        let roster = parse("names::\nAlice:F\nBob\nCarl:M\ngrid::\n1 0 1\n011\n").unwrap();

        let names: Vec<_> = roster.people.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carl"]);
        assert_eq!(roster.people[0].attribute, Attribute::B);
        assert_eq!(roster.people[1].attribute, Attribute::Default);
        assert_eq!(roster.people[2].attribute, Attribute::A);
        assert_eq!(
            roster.grid.as_rows(),
            &[vec![true, false, true], vec![false, true, true]]
        );
    }

    #[test]
    fn test_blank_lines_do_not_end_a_section() {
        let roster = parse("\nnames::\n\nAlice\n\n   \nBob\ngrid::\n\n11\n\n").unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.grid.rows(), 1);
    }

    #[test]
    fn test_lines_before_first_section_are_ignored() {
        let roster = parse("Class 9B\nnames::\nAlice\ngrid::\n1\n").unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.people[0].name, "Alice");
    }

    #[test]
    fn test_sections_can_reopen() {
        let roster = parse("names::\nAlice\ngrid::\n11\nnames::\nBob\n").unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let roster = parse("names::\nSam\nSam\ngrid::\n11\n").unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let roster = parse("names::\nAlice:F:robotics\ngrid::\n1\n").unwrap();
        assert_eq!(roster.people[0].attribute, Attribute::B);
    }

    #[test]
    fn test_empty_marker_defaults() {
        let roster = parse("names::\nAlice:\ngrid::\n1\n").unwrap();
        assert_eq!(roster.people[0].attribute, Attribute::Default);
    }

    #[test]
    fn test_unknown_marker_is_rejected() {
        let err = parse("names::\nAlice:Q\ngrid::\n1\n").unwrap_err();
        assert!(matches!(err, SeatingError::FormatError { line: 2, .. }));
    }

    #[test]
    fn test_ragged_grid_is_rejected() {
        let err = parse("names::\nA\ngrid::\n111\n11\n").unwrap_err();
        assert!(matches!(err, SeatingError::FormatError { line: 5, .. }));
    }

    #[test]
    fn test_non_digit_grid_cell_is_rejected() {
        let err = parse("names::\nA\ngrid::\n1x1\n").unwrap_err();
        assert!(matches!(err, SeatingError::FormatError { line: 4, .. }));
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let err = parse("names::\nA\nseats::\n").unwrap_err();
        assert!(matches!(err, SeatingError::FormatError { line: 3, .. }));
    }

    #[test]
    fn test_missing_sections() {
        assert!(matches!(
            parse("grid::\n11\n").unwrap_err(),
            SeatingError::MissingSectionError { section: "names" }
        ));
        assert!(matches!(
            parse("names::\nAlice\n").unwrap_err(),
            SeatingError::MissingSectionError { section: "grid" }
        ));
    }

    #[test]
    fn test_grid_section_without_rows_is_empty() {
        let roster = parse("names::\nAlice\ngrid::\n").unwrap();
        assert_eq!(roster.grid.rows(), 0);
        assert_eq!(roster.grid.seat_count(), 0);
    }

    #[test]
    fn test_leading_byte_order_mark_is_skipped() {
        let roster = parse("\u{feff}names::\nAlice\ngrid::\n1\n").unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.people[0].name, "Alice");

        let err = parse("\u{feff}names::\nAlice\ngrid::\n1x\n").unwrap_err();
        assert!(matches!(err, SeatingError::FormatError { line: 4, .. }));
    }

    #[test]
    fn test_any_nonzero_digit_is_placeable() {
        let roster = parse("names::\nA\ngrid::\n0 9 2\n").unwrap();
        assert_eq!(roster.grid.as_rows(), &[vec![false, true, true]]);
    }
}
