//! Crate-wide error type.
//!
//! "No win" is never an error: the evaluator returns `Ok(None)` for it.
//! Errors are reserved for caller mistakes (bad positions, stale marks,
//! mismatched layouts) and for genuinely fatal conditions (card-space
//! exhaustion, no balls left to draw).

use thiserror::Error;

/// Errors produced by the bingo engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The generator gave up finding a unique card fingerprint.
    ///
    /// Only reachable when callers request more unique cards than the
    /// sample space admits; treat as a fatal configuration error.
    #[error("could not generate a unique card after {retries} attempts ({generated} of {requested} cards done)")]
    CardSpaceExhausted {
        retries: u32,
        generated: usize,
        requested: usize,
    },

    /// A card's cell count does not match its declared variant.
    #[error("card has {actual} cells but its variant requires {expected}")]
    LayoutMismatch { expected: usize, actual: usize },

    /// A mark position is outside the card's grid.
    #[error("position {0} is outside the card")]
    InvalidPosition(usize),

    /// A client tried to mark a number that has not been drawn.
    #[error("number {0} has not been drawn yet")]
    NumberNotDrawn(u8),

    /// The free center cell of a 75-ball card cannot be unmarked.
    #[error("the free cell cannot be unmarked")]
    FreeCellUnmark,

    /// `start` was called on a session that is already active.
    #[error("game is already active")]
    GameAlreadyActive,

    /// The operation requires an active session.
    #[error("no active game session")]
    NoActiveGame,

    /// Every ball has been drawn.
    #[error("no more balls to draw")]
    BallsExhausted,
}
