//! Property-based tests for block randomization.
//!
//! Checks the structural guarantees of every allocation (balance, coverage,
//! index contiguity, block partition, rounding) and the classification of
//! invalid requests, over thousands of generated inputs.

use blockrand::random::xoshiro::XoshiroSource;
use blockrand::{BlockRandomizer, GenerationRequest, Policy};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};

/// Strategy for requests that pass validation under the default policy
fn arb_valid_request() -> impl Strategy<Value = (i64, i64, i64)> {
    (2i64..=10, 1i64..=6, 2i64..=500)
        .prop_map(|(treatments, multiple, target)| (target, treatments * multiple, treatments))
}

// ============================================================================
// Structural Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_blocks_are_balanced((target, block, treatments) in arb_valid_request(), seed in any::<u64>()) {
        let mut source = XoshiroSource::with_seed(seed);
        let allocation = BlockRandomizer::default()
            .generate_with(GenerationRequest::new(target, block, treatments), &mut source)
            .unwrap();

        let per_treatment = (block / treatments) as usize;
        for chunk in allocation.blocks() {
            let mut counts = BTreeMap::new();
            for assignment in chunk {
                *counts.entry(assignment.treatment).or_insert(0usize) += 1;
            }
            prop_assert_eq!(counts.len(), treatments as usize);
            prop_assert!(counts.values().all(|&c| c == per_treatment));
        }
    }

    #[test]
    fn prop_coverage_and_rounding((target, block, treatments) in arb_valid_request(), seed in any::<u64>()) {
        let mut source = XoshiroSource::with_seed(seed);
        let allocation = BlockRandomizer::default()
            .generate_with(GenerationRequest::new(target, block, treatments), &mut source)
            .unwrap();

        let (target, block) = (target as usize, block as usize);
        prop_assert_eq!(allocation.num_blocks, (target + block - 1) / block);
        prop_assert_eq!(allocation.actual_allocation_size, allocation.num_blocks * block);
        prop_assert!(allocation.actual_allocation_size >= target);
        prop_assert!(allocation.actual_allocation_size < target + block);
        prop_assert_eq!(allocation.sequence.len(), allocation.actual_allocation_size);
        prop_assert_eq!(allocation.warning.is_some(), allocation.actual_allocation_size != target);
    }

    #[test]
    fn prop_indices_contiguous_and_partitioned((target, block, treatments) in arb_valid_request(), seed in any::<u64>()) {
        let mut source = XoshiroSource::with_seed(seed);
        let allocation = BlockRandomizer::default()
            .generate_with(GenerationRequest::new(target, block, treatments), &mut source)
            .unwrap();

        let subjects: HashSet<usize> = allocation.sequence.iter().map(|a| a.subject_index).collect();
        prop_assert_eq!(subjects.len(), allocation.actual_allocation_size);
        prop_assert!(subjects.iter().all(|&i| i < allocation.actual_allocation_size));

        // Strictly increasing in generation order
        for pair in allocation.sequence.windows(2) {
            prop_assert!(pair[0].subject_index < pair[1].subject_index);
            prop_assert!(pair[0].block_index <= pair[1].block_index);
        }

        let mut groups: BTreeMap<usize, usize> = BTreeMap::new();
        for assignment in &allocation.sequence {
            *groups.entry(assignment.block_index).or_insert(0) += 1;
        }
        prop_assert_eq!(groups.len(), allocation.num_blocks);
        prop_assert!(groups.keys().copied().eq(0..allocation.num_blocks));
        prop_assert!(groups.values().all(|&size| size == block as usize));
    }

    #[test]
    fn prop_structure_independent_of_seed((target, block, treatments) in arb_valid_request(), a in any::<u64>(), b in any::<u64>()) {
        let randomizer = BlockRandomizer::default();
        let request = GenerationRequest::new(target, block, treatments);
        let first = randomizer.generate_with(request, &mut XoshiroSource::with_seed(a)).unwrap();
        let second = randomizer.generate_with(request, &mut XoshiroSource::with_seed(b)).unwrap();

        prop_assert_eq!(first.num_blocks, second.num_blocks);
        for (x, y) in first.blocks().zip(second.blocks()) {
            let mut x: Vec<_> = x.iter().map(|a| (a.treatment, a.block_index)).collect();
            let mut y: Vec<_> = y.iter().map(|a| (a.treatment, a.block_index)).collect();
            x.sort();
            y.sort();
            prop_assert_eq!(x, y);
        }
    }
}

// ============================================================================
// Validation Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_out_of_range_sample_size_rejected(target in prop_oneof![-1000i64..2, 501i64..100_000], block in -10i64..40, treatments in -5i64..30) {
        let err = BlockRandomizer::default()
            .generate_with(GenerationRequest::new(target, block, treatments), &mut XoshiroSource::with_seed(0))
            .unwrap_err();
        prop_assert_eq!(err.kind(), "InvalidSampleSize");
    }

    #[test]
    fn prop_classification(target in 2i64..=500, block in -10i64..60, treatments in 2i64..=10) {
        let result = BlockRandomizer::default()
            .generate_with(GenerationRequest::new(target, block, treatments), &mut XoshiroSource::with_seed(0));

        let expected = if block <= 0 {
            Some("InvalidBlockSize")
        } else if block < treatments {
            Some("BlockTooSmall")
        } else if block % treatments != 0 {
            Some("UnbalancedBlock")
        } else {
            None
        };

        match (result, expected) {
            (Ok(allocation), None) => {
                prop_assert_eq!(allocation.block_size, block as usize);
            }
            (Err(err), Some(kind)) => {
                prop_assert_eq!(err.kind(), kind);
            }
            (other, expected) => {
                prop_assert!(false, "expected {:?}, got {:?}", expected, other);
            }
        }
    }

    #[test]
    fn prop_treatment_ceiling_is_configurable(treatments in 11i64..=26) {
        let request = GenerationRequest::new(treatments * 2, treatments, treatments);
        let mut source = XoshiroSource::with_seed(1);

        let err = BlockRandomizer::default().generate_with(request, &mut source).unwrap_err();
        prop_assert_eq!(err.kind(), "InvalidTreatmentCount");

        let allocation = BlockRandomizer::new(Policy::full_alphabet())
            .generate_with(request, &mut source)
            .unwrap();
        prop_assert_eq!(allocation.labels().len(), treatments as usize);
    }
}
