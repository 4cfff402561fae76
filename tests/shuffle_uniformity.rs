//! Statistical checks on the block shuffle.
//!
//! With a uniform source every ordering of a block must be equally likely.

use blockrand::random::xoshiro::XoshiroSource;
use blockrand::randomizer::shuffle;
use blockrand::{BlockRandomizer, GenerationRequest};
use std::collections::HashMap;

#[test]
fn test_all_permutations_equally_likely() {
    // 4 distinct items -> 24 orderings
    let mut source = XoshiroSource::with_seed(31337);
    let mut counts: HashMap<[u8; 4], u32> = HashMap::new();
    let trials = 48_000;

    for _ in 0..trials {
        let mut items = [0u8, 1, 2, 3];
        shuffle(&mut items, &mut source);
        *counts.entry(items).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 24);
    // Expect 2000 each; allow 15% deviation
    for (ordering, count) in counts {
        assert!(
            (1700..=2300).contains(&count),
            "ordering {:?} seen {} times",
            ordering,
            count
        );
    }
}

#[test]
fn test_block_orderings_equally_likely() {
    // Block of 4 with 2 treatments: 4!/(2!2!) = 6 distinct label orderings
    let randomizer = BlockRandomizer::default();
    let mut source = XoshiroSource::with_seed(7);
    let mut counts: HashMap<String, u32> = HashMap::new();

    for _ in 0..50 {
        let allocation = randomizer
            .generate_with(GenerationRequest::new(480, 4, 2), &mut source)
            .unwrap();
        for block in allocation.blocks() {
            let key: String = block.iter().map(|a| a.treatment.as_char()).collect();
            *counts.entry(key).or_insert(0) += 1;
        }
    }

    // 50 * 120 blocks = 6000, expect 1000 per ordering
    assert_eq!(counts.len(), 6);
    for (ordering, count) in counts {
        assert!(
            (850..=1150).contains(&count),
            "ordering {} seen {} times",
            ordering,
            count
        );
    }
}

#[test]
fn test_order_varies_between_calls() {
    let randomizer = BlockRandomizer::default();
    let request = GenerationRequest::new(60, 6, 3);
    let first = randomizer.generate_with(request, &mut XoshiroSource::with_seed(1)).unwrap();
    let second = randomizer.generate_with(request, &mut XoshiroSource::with_seed(2)).unwrap();
    assert_ne!(first.sequence, second.sequence);
}
