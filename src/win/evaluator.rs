//! The win evaluator.
//!
//! Pure function of its inputs: no session state is touched here. The
//! caller decides what a verdict means (usually: end the session and
//! record the winner).
//!
//! ## Effective marks
//!
//! Server-authoritative mode derives marks from the drawn-ball list (a
//! cell is marked iff it is the free cell or its number has been drawn).
//! Client mode trusts the card's stored marks as-is, including stale or
//! optimistic ones; callers gate individual mark updates separately.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::card::Card;
use crate::core::{CardId, PlayerId, Variant};
use crate::error::EngineError;
use crate::win::patterns::{FULL_HOUSE_90, LINES_90, LINE_NAMES_90, PATTERNS_75, TWO_LINES_90};

/// Which mark state the evaluator should trust.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkSource {
    /// Server-authoritative: derive marks from the drawn-ball list.
    DrawnBalls,
    /// Trust the card's client-reported marks.
    ClientMarks,
}

/// A detected win. Transient: recomputed on demand, never authoritative
/// on its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinVerdict {
    /// The winning card.
    pub card: CardId,
    /// The card's player, or [`PlayerId::UNASSIGNED`] for host-only cards.
    pub player: PlayerId,
    /// Wire name of the satisfied pattern.
    pub pattern: String,
    /// Whether the whole card is covered (75-ball `full`, 90-ball
    /// `full_house`).
    pub is_full: bool,
}

/// Evaluate one card against the drawn balls.
///
/// Returns `Ok(None)` when no pattern is satisfied; that is the common,
/// expected outcome, not an error. Fails only on a card whose grid size
/// contradicts its variant.
pub fn evaluate(
    card: &Card,
    drawn_balls: &[u8],
    source: MarkSource,
) -> Result<Option<WinVerdict>, EngineError> {
    card.validate_layout()?;

    let marks = effective_marks(card, drawn_balls, source);
    let hit = match card.variant {
        Variant::Ninety => evaluate_ninety(&marks),
        Variant::SeventyFive => evaluate_seventy_five(&marks),
    };

    Ok(hit.map(|(pattern, is_full)| WinVerdict {
        card: card.id,
        player: card.player.unwrap_or(PlayerId::UNASSIGNED),
        pattern: pattern.to_owned(),
        is_full,
    }))
}

/// Scan cards in the given order and return the first winner.
///
/// Models a live bingo call: the first valid claim wins, and ties among
/// simultaneously winning cards are broken solely by iteration order
/// (callers pass cards in creation order). Server-authoritative.
pub fn first_winner<'a, I>(cards: I, drawn_balls: &[u8]) -> Result<Option<WinVerdict>, EngineError>
where
    I: IntoIterator<Item = &'a Card>,
{
    for card in cards {
        if let Some(verdict) = evaluate(card, drawn_balls, MarkSource::DrawnBalls)? {
            return Ok(Some(verdict));
        }
    }
    Ok(None)
}

fn effective_marks(card: &Card, drawn_balls: &[u8], source: MarkSource) -> SmallVec<[bool; 25]> {
    match source {
        // Index through is_marked so a card whose marks were
        // deserialized short of the grid reads as unmarked, not a panic.
        MarkSource::ClientMarks => (0..card.numbers().len()).map(|i| card.marks.is_marked(i)).collect(),
        MarkSource::DrawnBalls => card
            .numbers()
            .iter()
            .map(|&n| n == 0 || drawn_balls.contains(&n))
            .collect(),
    }
}

fn evaluate_ninety(marks: &[bool]) -> Option<(&'static str, bool)> {
    let mut complete = 0usize;
    let mut first_complete = None;

    for (index, line) in LINES_90.iter().enumerate() {
        if line.iter().all(|&pos| marks[pos]) {
            complete += 1;
            first_complete.get_or_insert(index);
        }
    }

    match complete {
        3 => Some((FULL_HOUSE_90, true)),
        2 => Some((TWO_LINES_90, false)),
        1 => Some((LINE_NAMES_90[first_complete?], false)),
        _ => None,
    }
}

fn evaluate_seventy_five(marks: &[bool]) -> Option<(&'static str, bool)> {
    let mut first_partial = None;

    // Every pattern is checked so that a simultaneous full house beats
    // any earlier partial hit.
    for pattern in &PATTERNS_75 {
        if pattern.positions.iter().all(|&pos| marks[pos]) {
            if pattern.is_full {
                return Some((pattern.name, true));
            }
            first_partial.get_or_insert(pattern.name);
        }
    }

    first_partial.map(|name| (name, false))
}
