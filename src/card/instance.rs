//! Card instances and fingerprints.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::card::Marks;
use crate::core::{CardId, PlayerId, Variant};
use crate::error::EngineError;

/// Uniqueness key for a card: its non-zero numbers, sorted and
/// comma-joined. Two cards with equal fingerprints are duplicates and
/// must never coexist in a room.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute the fingerprint of a flat number grid.
    #[must_use]
    pub fn of(numbers: &[u8]) -> Self {
        let mut nonzero: SmallVec<[u8; 25]> = numbers.iter().copied().filter(|&n| n > 0).collect();
        nonzero.sort_unstable();

        let joined = nonzero
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",");
        Fingerprint(joined)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One bingo card: a flat row-major number grid plus its mark state.
///
/// `numbers` uses 0 for the free cell. Cards are immutable after
/// generation except for their marks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card identifier, minted by the caller's storage layer.
    pub id: CardId,
    /// Owning player; `None` for host-only cards.
    pub player: Option<PlayerId>,
    /// Rule-set this card belongs to.
    pub variant: Variant,
    numbers: SmallVec<[u8; 25]>,
    /// Client-reported mark state.
    pub marks: Marks,
}

impl Card {
    /// Create a card with freshly seeded marks.
    #[must_use]
    pub fn new(
        id: CardId,
        player: Option<PlayerId>,
        variant: Variant,
        numbers: impl Into<SmallVec<[u8; 25]>>,
    ) -> Self {
        Self {
            id,
            player,
            variant,
            numbers: numbers.into(),
            marks: Marks::seeded(variant),
        }
    }

    /// The flat row-major number grid.
    #[must_use]
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    /// The number at a flat position, if in range.
    #[must_use]
    pub fn number_at(&self, position: usize) -> Option<u8> {
        self.numbers.get(position).copied()
    }

    /// Compute this card's fingerprint.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(&self.numbers)
    }

    /// Check that the grid size matches the declared variant.
    ///
    /// A 25-cell grid tagged `Ninety` (or any other mismatch) would
    /// silently mis-evaluate, so the evaluator rejects it up front.
    pub fn validate_layout(&self) -> Result<(), EngineError> {
        let expected = self.variant.cell_count();
        if self.numbers.len() != expected {
            return Err(EngineError::LayoutMismatch {
                expected,
                actual: self.numbers.len(),
            });
        }
        Ok(())
    }

    /// Set the client-reported mark at `position`.
    ///
    /// Rejects out-of-range positions and any attempt to unmark the free
    /// center cell of a 75-ball card.
    pub fn set_mark(&mut self, position: usize, marked: bool) -> Result<(), EngineError> {
        if position >= self.numbers.len() {
            return Err(EngineError::InvalidPosition(position));
        }
        if !marked && self.variant.free_cell() == Some(position) {
            return Err(EngineError::FreeCellUnmark);
        }
        self.marks.set(position, marked);
        Ok(())
    }
}
