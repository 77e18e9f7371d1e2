use crate::domain::model::{Assignment, Attribute, Orientation, Person, Tier};
use chrono::NaiveDate;
use crossterm::style::{Color, Stylize};
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

/// Attribute-to-colour table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub a: Color,
    pub b: Color,
    pub default: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            a: Color::Blue,
            b: Color::Magenta,
            default: Color::White,
        }
    }
}

impl Palette {
    pub fn colour_for(&self, attribute: Attribute) -> Color {
        match attribute {
            Attribute::A => self.a,
            Attribute::B => self.b,
            Attribute::Default => self.default,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Smallest gap between the two names of a desk, and the taper step floor.
    pub min_offset: usize,
    /// The taper step is the longest name length divided by this.
    pub offset_proportion: usize,
    pub colour: bool,
    pub palette: Palette,
    /// Spaces between grid columns.
    pub column_gap: usize,
    /// Blank lines between grid rows.
    pub row_spacing: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            min_offset: 3,
            offset_proportion: 3,
            colour: true,
            palette: Palette::default(),
            column_gap: 0,
            row_spacing: 0,
        }
    }
}

impl FormatConfig {
    pub fn plain() -> Self {
        Self {
            colour: false,
            ..Self::default()
        }
    }

    fn paint(&self, text: &str, person: &Person) -> String {
        if self.colour {
            text.with(self.palette.colour_for(person.attribute)).to_string()
        } else {
            text.to_string()
        }
    }
}

/// `Tuesday, March 5, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn ansi_escape() -> &'static Regex {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    ANSI.get_or_init(|| {
        Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").expect("ANSI escape pattern is valid")
    })
}

pub fn strip_ansi(s: &str) -> String {
    ansi_escape().replace_all(s, "").into_owned()
}

/// Columns `s` occupies on screen. Escape sequences take up none.
pub fn display_width(s: &str) -> usize {
    if s.contains('\x1b') {
        UnicodeWidthStr::width(strip_ansi(s).as_str())
    } else {
        UnicodeWidthStr::width(s)
    }
}

/// Centres `s` within `width` columns, putting any odd space on the right.
pub fn center(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        return s.to_string();
    }
    let pad = width - w;
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
}

fn longest_name<'p>(people: impl Iterator<Item = &'p Person>) -> usize {
    people.map(|p| display_width(&p.name)).max().unwrap_or(0)
}

fn push_banner(out: &mut Vec<String>, date: NaiveDate, label: &str, width: usize) {
    out.push(String::new());
    out.push(center(&format_date(date), width));
    out.push(String::new());
    out.push(center(label, width));
    out.push(String::new());
}

fn push_trailer(out: &mut Vec<String>, label: &str, width: usize) {
    out.push(String::new());
    out.push(center(label, width));
    out.push(String::new());
}

/// Column and row width of a grid plan. The column width is taken from the
/// whole roster so blank cells line up with seated ones.
pub fn grid_widths(roster: &[Person], cols: usize, config: &FormatConfig) -> (usize, usize) {
    let col_width = longest_name(roster.iter());
    let row_width = col_width * cols + config.column_gap * cols.saturating_sub(1);
    (col_width, row_width)
}

pub fn render_grid(
    assignment: &Assignment<'_>,
    roster: &[Person],
    config: &FormatConfig,
    date: NaiveDate,
) -> String {
    let (col_width, row_width) = grid_widths(roster, assignment.cols(), config);
    let blank = " ".repeat(col_width);
    let gap = " ".repeat(config.column_gap);

    let mut out = Vec::new();
    push_banner(&mut out, date, "Front", row_width);

    for (i, row) in assignment.rows().iter().enumerate() {
        if i > 0 {
            out.extend(std::iter::repeat(String::new()).take(config.row_spacing));
        }
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(person) => config.paint(&center(&person.name, col_width), person),
                None => blank.clone(),
            })
            .collect();
        out.push(cells.join(&gap));
    }

    push_trailer(&mut out, "Back", row_width);
    out.join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierMetrics {
    pub longest: usize,
    /// Taper step, also the narrowest gap inside a desk.
    pub gap: usize,
    pub row_width: usize,
}

pub fn tier_metrics(tiers: &[Tier<'_>], config: &FormatConfig) -> TierMetrics {
    let longest = longest_name(tiers.iter().flat_map(|t| t.members()));
    let gap = config
        .min_offset
        .max(longest / config.offset_proportion.max(1))
        .max(1);
    let steps = tiers.len().saturating_sub(1);
    TierMetrics {
        longest,
        gap,
        row_width: 2 * longest + gap + 2 * gap * steps,
    }
}

/// Left indent of display row `row` out of `rows`. Rows further from the front
/// are indented more.
pub fn start_offset(gap: usize, row: usize, rows: usize, orientation: Orientation) -> usize {
    let distance_from_front = match orientation {
        Orientation::FrontFirst => row,
        Orientation::BackFirst => rows - 1 - row,
    };
    gap * distance_from_front
}

/// Orders tiers top to bottom for `orientation`. The lone seat always ends up
/// on the back edge.
pub fn orient<'a>(tiers: &[Tier<'a>], orientation: Orientation) -> Vec<Tier<'a>> {
    let mut ordered = tiers.to_vec();
    if orientation == Orientation::FrontFirst && ordered.first().is_some_and(Tier::is_single) {
        ordered.rotate_left(1);
    }
    ordered
}

pub fn render_tiers(
    tiers: &[Tier<'_>],
    orientation: Orientation,
    config: &FormatConfig,
    date: NaiveDate,
) -> String {
    let metrics = tier_metrics(tiers, config);
    let width = metrics.row_width;
    let ordered = orient(tiers, orientation);
    let (first, second) = orientation.labels();

    let mut out = Vec::new();
    push_banner(&mut out, date, first, width);

    for (i, tier) in ordered.iter().enumerate() {
        match *tier {
            Tier::Single(person) => {
                out.push(center(&config.paint(&person.name, person), width));
            }
            Tier::Pair(left, right) => {
                let start = start_offset(metrics.gap, i, ordered.len(), orientation);
                let mid = width
                    - display_width(&left.name)
                    - display_width(&right.name)
                    - 2 * start;
                out.push(format!(
                    "{}{}{}{}{}",
                    " ".repeat(start),
                    config.paint(&left.name, left),
                    " ".repeat(mid),
                    config.paint(&right.name, right),
                    " ".repeat(start)
                ));
            }
        }
    }

    push_trailer(&mut out, second, width);
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_format_date_has_no_zero_padding() {
        assert_eq!(format_date(date()), "Tuesday, March 5, 2024");
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(2025, 11, 21).unwrap()),
            "Friday, November 21, 2025"
        );
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("toolong", 3), "toolong");
    }

    #[test]
    fn test_display_width_ignores_escapes() {
        let painted = "Alice".with(Color::Blue).to_string();
        assert_eq!(display_width(&painted), 5);
        assert_eq!(display_width("\x1b[38;5;12mAlice\x1b[39m"), 5);
        assert_eq!(display_width("Zoë"), 3);
    }

    #[test]
    fn test_palette_covers_every_attribute() {
        let palette = Palette::default();
        assert_eq!(palette.colour_for(Attribute::A), Color::Blue);
        assert_eq!(palette.colour_for(Attribute::B), Color::Magenta);
        assert_eq!(palette.colour_for(Attribute::Default), Color::White);
    }

    #[test]
    fn test_start_offset_tapers_away_from_front() {
        assert_eq!(start_offset(3, 0, 4, Orientation::FrontFirst), 0);
        assert_eq!(start_offset(3, 3, 4, Orientation::FrontFirst), 9);
        assert_eq!(start_offset(3, 0, 4, Orientation::BackFirst), 9);
        assert_eq!(start_offset(3, 3, 4, Orientation::BackFirst), 0);
    }

    #[test]
    fn test_tier_gap_grows_with_long_names() {
        let long = Person::new("Maximilianus-Augustus", Attribute::Default);
        let short = Person::new("Al", Attribute::Default);
        let metrics = tier_metrics(&[Tier::Pair(&long, &short)], &FormatConfig::plain());
        assert_eq!(metrics.longest, 21);
        assert_eq!(metrics.gap, 7);
        assert_eq!(metrics.row_width, 2 * 21 + 7);
    }

    #[test]
    fn test_empty_tiers_render_banner_only() {
        let text = render_tiers(&[], Orientation::FrontFirst, &FormatConfig::plain(), date());
        assert!(text.contains("Front"));
        assert!(text.contains("Back"));
    }
}
