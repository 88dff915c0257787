//! Static win-pattern tables.
//!
//! 75-ball uses a fixed ordered list of 13 named patterns; the order is
//! the tie-break (rows before columns before diagonals), so among several
//! simultaneously complete partial patterns the first in this table wins.
//! `full` is special-cased by the evaluator to beat every partial.
//!
//! 90-ball has no pattern list of its own: wins are counted over the
//! three physical rows ("lines") with the fixed priority full house >
//! two lines > single line.

/// A named, fixed set of cell positions whose full marking is a win.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Wire name of the pattern (`row1`, `diag2`, `full`, ...).
    pub name: &'static str,
    /// Flat grid positions that must all be marked.
    pub positions: &'static [usize],
    /// Whether this pattern covers the whole card.
    pub is_full: bool,
}

const fn partial(name: &'static str, positions: &'static [usize]) -> Pattern {
    Pattern { name, positions, is_full: false }
}

static FULL_75: [usize; 25] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
];

/// The 13 patterns of 75-ball bingo, in evaluation order.
pub static PATTERNS_75: [Pattern; 13] = [
    partial("row1", &[0, 1, 2, 3, 4]),
    partial("row2", &[5, 6, 7, 8, 9]),
    partial("row3", &[10, 11, 12, 13, 14]),
    partial("row4", &[15, 16, 17, 18, 19]),
    partial("row5", &[20, 21, 22, 23, 24]),
    partial("col1", &[0, 5, 10, 15, 20]),
    partial("col2", &[1, 6, 11, 16, 21]),
    partial("col3", &[2, 7, 12, 17, 22]),
    partial("col4", &[3, 8, 13, 18, 23]),
    partial("col5", &[4, 9, 14, 19, 24]),
    partial("diag1", &[0, 6, 12, 18, 24]),
    partial("diag2", &[4, 8, 12, 16, 20]),
    Pattern { name: "full", positions: &FULL_75, is_full: true },
];

/// The three lines (physical rows) of a 90-ball card.
pub static LINES_90: [&[usize]; 3] = [
    &[0, 1, 2, 3, 4],
    &[5, 6, 7, 8, 9],
    &[10, 11, 12, 13, 14],
];

/// Pattern names for a single completed 90-ball line, by line index.
pub const LINE_NAMES_90: [&str; 3] = ["line1", "line2", "line3"];

/// Pattern name for two completed 90-ball lines.
pub const TWO_LINES_90: &str = "two_lines";

/// Pattern name for a completed 90-ball card.
pub const FULL_HOUSE_90: &str = "full_house";
