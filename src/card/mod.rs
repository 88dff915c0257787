//! Cards: number grids, marks, fingerprints, and the generator.
//!
//! A card is created once per (room, player, card-slot) at join/create
//! time and never regenerated for that slot. Its fingerprint (the sorted,
//! comma-joined non-zero numbers) is the uniqueness key within a room.

pub mod generator;
pub mod instance;
pub mod marks;

pub use generator::{CardGenerator, MAX_RETRIES_PER_CARD};
pub use instance::{Card, Fingerprint};
pub use marks::Marks;
