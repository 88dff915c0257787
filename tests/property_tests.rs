//! Property tests for generator and evaluator invariants.

use bingo_engine::{evaluate, Card, CardGenerator, Fingerprint, GameRng, MarkSource, Variant};
use proptest::prelude::*;
use rustc_hash::FxHashSet;

fn variant_strategy() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::SeventyFive), Just(Variant::Ninety)]
}

fn generate(variant: Variant, count: usize, seed: u64) -> Vec<Card> {
    let mut gen = CardGenerator::new();
    let mut rng = GameRng::new(seed);
    gen.generate(variant, count, None, &FxHashSet::default(), &mut rng)
        .unwrap()
}

proptest! {
    /// Every generated card is structurally valid for its variant:
    /// right cell count, numbers inside their column ranges, the free
    /// cell present exactly where the variant demands it.
    #[test]
    fn generated_cards_are_structurally_valid(variant in variant_strategy(), seed in any::<u64>()) {
        let card = generate(variant, 1, seed).remove(0);
        prop_assert!(card.validate_layout().is_ok());
        prop_assert_eq!(card.numbers().len(), variant.cell_count());

        for column in variant.columns() {
            for &pos in column.positions {
                let n = card.number_at(pos).unwrap();
                prop_assert!(n >= column.low && n <= column.high);
            }
        }

        match variant.free_cell() {
            Some(free) => {
                prop_assert_eq!(card.number_at(free), Some(0));
                prop_assert_eq!(card.numbers().iter().filter(|&&n| n == 0).count(), 1);
                prop_assert!(card.marks.is_marked(free));
            }
            None => {
                prop_assert!(card.numbers().iter().all(|&n| n > 0));
                prop_assert!(!card.marks.iter().any(|m| m));
            }
        }
    }

    /// Non-zero numbers never repeat on a card.
    #[test]
    fn generated_numbers_are_distinct(variant in variant_strategy(), seed in any::<u64>()) {
        let card = generate(variant, 1, seed).remove(0);
        let mut nonzero: Vec<u8> = card.numbers().iter().copied().filter(|&n| n > 0).collect();
        let len = nonzero.len();
        nonzero.sort_unstable();
        nonzero.dedup();
        prop_assert_eq!(nonzero.len(), len);
    }

    /// Fingerprints are unique within a batch and against the used set,
    /// across accumulating calls.
    #[test]
    fn fingerprints_never_collide(
        variant in variant_strategy(),
        seed in any::<u64>(),
        counts in prop::collection::vec(1usize..=3, 1..=4),
    ) {
        let mut gen = CardGenerator::new();
        let mut rng = GameRng::new(seed);
        let mut used: FxHashSet<Fingerprint> = FxHashSet::default();
        let mut total = 0;

        for count in counts {
            let cards = gen.generate(variant, count, None, &used, &mut rng).unwrap();
            total += cards.len();
            for card in &cards {
                prop_assert!(used.insert(card.fingerprint()));
            }
        }
        prop_assert_eq!(used.len(), total);
    }

    /// With nothing drawn, server-authoritative evaluation never finds a
    /// win on a generated card. (A 75-ball card needs more than its free
    /// cell; a 90-ball card has no free cells at all.)
    #[test]
    fn empty_draw_list_yields_no_verdict(variant in variant_strategy(), seed in any::<u64>()) {
        let card = generate(variant, 1, seed).remove(0);
        prop_assert_eq!(evaluate(&card, &[], MarkSource::DrawnBalls).unwrap(), None);
    }

    /// Drawing every ball always completes the card.
    #[test]
    fn all_balls_drawn_is_always_full(variant in variant_strategy(), seed in any::<u64>()) {
        let card = generate(variant, 1, seed).remove(0);
        let drawn: Vec<u8> = (1..=variant.max_ball()).collect();
        let verdict = evaluate(&card, &drawn, MarkSource::DrawnBalls).unwrap().unwrap();

        prop_assert!(verdict.is_full);
        let expected = match variant {
            Variant::SeventyFive => "full",
            Variant::Ninety => "full_house",
        };
        prop_assert_eq!(verdict.pattern, expected);
    }

    /// Generation is a pure function of the seed.
    #[test]
    fn generation_is_deterministic(variant in variant_strategy(), seed in any::<u64>()) {
        prop_assert_eq!(generate(variant, 2, seed), generate(variant, 2, seed));
    }

    /// Marks survive the string-keyed wire representation.
    #[test]
    fn marks_roundtrip_through_wire_format(variant in variant_strategy(), seed in any::<u64>(), flips in prop::collection::vec(any::<bool>(), 25)) {
        let mut card = generate(variant, 1, seed).remove(0);
        for (position, &flip) in flips.iter().take(variant.cell_count()).enumerate() {
            if flip && variant.free_cell() != Some(position) {
                card.set_mark(position, true).unwrap();
            }
        }

        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(card, back);
    }
}
