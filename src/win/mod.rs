//! Win detection: pattern tables and the evaluator.
//!
//! The evaluator is a pure function of (card, drawn balls, mark source).
//! Session side effects triggered by a verdict (ending the game,
//! recording the winner) live in [`crate::session`].

pub mod evaluator;
pub mod patterns;

pub use evaluator::{evaluate, first_winner, MarkSource, WinVerdict};
pub use patterns::{Pattern, FULL_HOUSE_90, LINES_90, LINE_NAMES_90, PATTERNS_75, TWO_LINES_90};
