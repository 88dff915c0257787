//! Collision-free card generation.
//!
//! For each card, every column draws its numbers uniformly without
//! replacement from that column's range and scatters them over the
//! column's grid positions; the 75-ball center stays 0. A fingerprint
//! collision with the room's existing cards, or with an earlier card of
//! the same batch, discards the whole card and regenerates it.
//!
//! The combinatorial space makes collisions vanishingly rare for real
//! rooms, so the retry cap only trips when a caller asks for more unique
//! cards than the sample space admits. That is a configuration error and
//! surfaces as [`EngineError::CardSpaceExhausted`].

use rustc_hash::FxHashSet;
use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::card::{Card, Fingerprint};
use crate::core::{CardId, GameRng, PlayerId, Variant};
use crate::error::EngineError;

/// Regeneration attempts allowed per card before giving up.
pub const MAX_RETRIES_PER_CARD: u32 = 10_000;

/// Mints collision-free cards for one room.
///
/// Owns the room's card-id counter. The generator is handed an up-to-date
/// snapshot of the room's used fingerprints on every call; serializing
/// generate-and-persist per room (a per-room mutex, or a unique
/// constraint plus retry) is the caller's job.
///
/// ```
/// use bingo_engine::{CardGenerator, GameRng, Variant};
/// use rustc_hash::FxHashSet;
///
/// let mut gen = CardGenerator::new();
/// let mut rng = GameRng::new(42);
/// let cards = gen.generate(Variant::SeventyFive, 2, None, &FxHashSet::default(), &mut rng).unwrap();
/// assert_eq!(cards.len(), 2);
/// assert_ne!(cards[0].fingerprint(), cards[1].fingerprint());
/// ```
#[derive(Clone, Debug)]
pub struct CardGenerator {
    next_id: u64,
}

impl Default for CardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CardGenerator {
    /// Create a generator whose first card gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Create a generator continuing from a persisted id counter.
    #[must_use]
    pub fn starting_at(first_id: u64) -> Self {
        Self { next_id: first_id }
    }

    /// Generate `count` cards whose fingerprints collide neither with
    /// `used` nor with each other. `count = 0` yields an empty vec.
    ///
    /// Marks are seeded per variant (free cell pre-marked for 75-ball).
    /// The caller owns persistence and must fold the new fingerprints
    /// into the room's used set.
    pub fn generate(
        &mut self,
        variant: Variant,
        count: usize,
        owner: Option<PlayerId>,
        used: &FxHashSet<Fingerprint>,
        rng: &mut GameRng,
    ) -> Result<Vec<Card>, EngineError> {
        let mut batch: FxHashSet<Fingerprint> = FxHashSet::default();
        let mut cards = Vec::with_capacity(count);

        for generated in 0..count {
            let mut retries = 0u32;
            let numbers = loop {
                let numbers = generate_numbers(variant, rng);
                let fingerprint = Fingerprint::of(&numbers);
                if !used.contains(&fingerprint) && batch.insert(fingerprint) {
                    break numbers;
                }

                retries += 1;
                debug!(%variant, retries, "card fingerprint collision, regenerating");
                if retries >= MAX_RETRIES_PER_CARD {
                    return Err(EngineError::CardSpaceExhausted {
                        retries,
                        generated,
                        requested: count,
                    });
                }
            };

            let id = CardId::new(self.next_id);
            self.next_id += 1;
            cards.push(Card::new(id, owner, variant, numbers));
        }

        Ok(cards)
    }
}

/// Fill one flat grid for the variant.
///
/// Each column's numbers come back from the RNG already in random order,
/// which randomizes row placement within the column.
fn generate_numbers(variant: Variant, rng: &mut GameRng) -> SmallVec<[u8; 25]> {
    let mut grid: SmallVec<[u8; 25]> = smallvec![0; variant.cell_count()];
    for column in variant.columns() {
        let numbers = rng.sample_distinct(column.low, column.high, column.positions.len());
        for (&position, &number) in column.positions.iter().zip(numbers.iter()) {
            grid[position] = number;
        }
    }
    grid
}
