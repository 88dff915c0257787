//! Bingo variants and their grid geometry.
//!
//! A [`Variant`] fixes everything geometric about a game: grid shape,
//! per-column number ranges, the free cell, and the highest ball. It is
//! selected at room-creation time, carried on every card and session, and
//! never mutated.
//!
//! ## Grid layout
//!
//! Cards are flat row-major sequences. For 75-ball the visual "BINGO"
//! columns map onto flat positions `{c, c+5, c+10, c+15, c+20}`; the
//! center cell (flat index 12) is the permanently free cell and is left
//! out of column 2. For 90-ball the grid is 3 rows by 5 columns with no
//! free cell.

use serde::{Deserialize, Serialize};

/// Flat index of the 75-ball free center cell (row 2, col 2).
pub const FREE_CELL_75: usize = 12;

/// Bingo rule-set and card geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// 5x5 grid, balls 1-75, free center cell.
    SeventyFive,
    /// 3x5 grid, balls 1-90, no free cell.
    Ninety,
}

/// One column of a card: the flat positions it fills and the inclusive
/// numeric range it draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Flat grid positions this column occupies, top to bottom.
    pub positions: &'static [usize],
    /// Lowest legal number for this column.
    pub low: u8,
    /// Highest legal number for this column.
    pub high: u8,
}

// Column 2 omits the free center cell, so it draws only 4 numbers.
static COLUMNS_75: [ColumnLayout; 5] = [
    ColumnLayout { positions: &[0, 5, 10, 15, 20], low: 1, high: 15 },
    ColumnLayout { positions: &[1, 6, 11, 16, 21], low: 16, high: 30 },
    ColumnLayout { positions: &[2, 7, 17, 22], low: 31, high: 45 },
    ColumnLayout { positions: &[3, 8, 13, 18, 23], low: 46, high: 60 },
    ColumnLayout { positions: &[4, 9, 14, 19, 24], low: 61, high: 75 },
];

static COLUMNS_90: [ColumnLayout; 5] = [
    ColumnLayout { positions: &[0, 5, 10], low: 1, high: 18 },
    ColumnLayout { positions: &[1, 6, 11], low: 19, high: 36 },
    ColumnLayout { positions: &[2, 7, 12], low: 37, high: 54 },
    ColumnLayout { positions: &[3, 8, 13], low: 55, high: 72 },
    ColumnLayout { positions: &[4, 9, 14], low: 73, high: 90 },
];

impl Variant {
    /// Number of cells on a card of this variant.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        match self {
            Variant::SeventyFive => 25,
            Variant::Ninety => 15,
        }
    }

    /// Highest ball in the cage: 75 or 90.
    #[must_use]
    pub const fn max_ball(self) -> u8 {
        match self {
            Variant::SeventyFive => 75,
            Variant::Ninety => 90,
        }
    }

    /// Flat index of the permanently marked free cell, if any.
    #[must_use]
    pub const fn free_cell(self) -> Option<usize> {
        match self {
            Variant::SeventyFive => Some(FREE_CELL_75),
            Variant::Ninety => None,
        }
    }

    /// The five column layouts for this variant.
    #[must_use]
    pub fn columns(self) -> &'static [ColumnLayout; 5] {
        match self {
            Variant::SeventyFive => &COLUMNS_75,
            Variant::Ninety => &COLUMNS_90,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::SeventyFive => write!(f, "75-ball"),
            Variant::Ninety => write!(f, "90-ball"),
        }
    }
}
