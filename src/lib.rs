//! # bingo-engine
//!
//! Card generation and win-detection engine for multiplayer bingo.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Generation and evaluation are side-effect-free.
//!    Callers own persistence, transport, and per-room serialization.
//!
//! 2. **Explicit Randomness**: Every randomized operation takes an injected
//!    [`GameRng`]. Same seed, same cards, same draws.
//!
//! 3. **Variant-Driven Geometry**: Grid shape, column ranges, and pattern
//!    tables are static per [`Variant`], never configured at runtime.
//!
//! ## Modules
//!
//! - `core`: Variant geometry, IDs, deterministic RNG
//! - `card`: Card instances, marks, fingerprints, the generator
//! - `win`: Pattern tables and the win evaluator
//! - `session`: Game-session state machine (status, drawn balls, mark updates)
//! - `error`: Crate-wide error type

pub mod core;
pub mod card;
pub mod win;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    CardId, PlayerId,
    GameRng, GameRngState,
    Variant, ColumnLayout,
};

pub use crate::card::{Card, CardGenerator, Fingerprint, Marks, MAX_RETRIES_PER_CARD};

pub use crate::win::{evaluate, first_winner, MarkSource, WinVerdict};

pub use crate::session::{GameSession, GameStatus};

pub use crate::error::EngineError;
