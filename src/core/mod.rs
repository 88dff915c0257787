//! Core engine types: variant geometry, IDs, deterministic RNG.
//!
//! Everything here is shared read-only state or a small value type.
//! The generator and the evaluator both consume the variant geometry
//! table but have no runtime dependency on each other.

pub mod ids;
pub mod rng;
pub mod variant;

pub use ids::{CardId, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use variant::{ColumnLayout, Variant};
