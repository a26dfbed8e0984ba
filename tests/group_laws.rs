//! Property-based tests for grouping stability.
//!
//! ## Group Laws
//! - **Stability**: concatenating the groups in first-key-occurrence order
//!   yields a permutation of the input in which each group's internal order
//!   matches its order in the input
//! - **Totality**: every input element lands in exactly one group
//! - **Aggregation consistency**: folding a group equals folding the
//!   input filtered to that group's key

use proptest::prelude::*;
use recollect::group::group_by;
use recollect::seq::dedup;

fn keyed_items() -> impl Strategy<Value = Vec<(u8, u32)>> {
    // Small key space so groups actually collide.
    prop::collection::vec((0_u8..5, any::<u32>()), 0..48)
}

proptest! {
    /// Each group's members are exactly the input elements with that key,
    /// in input order.
    #[test]
    fn prop_groups_are_stable_partitions(items in keyed_items()) {
        let grouped = group_by(items.clone(), |(key, _)| *key);
        for (key, members) in grouped.iter() {
            let expected: Vec<(u8, u32)> = items
                .iter()
                .filter(|(item_key, _)| item_key == key)
                .copied()
                .collect();
            prop_assert_eq!(members, expected.as_slice());
        }
    }

    /// Group keys appear in first-occurrence order.
    #[test]
    fn prop_group_order_follows_first_occurrence(items in keyed_items()) {
        let grouped = group_by(items.clone(), |(key, _)| *key);
        let keys: Vec<u8> = grouped.keys().copied().collect();
        let input_keys: Vec<u8> = items.iter().map(|(key, _)| *key).collect();
        prop_assert_eq!(keys, dedup(&input_keys));
    }

    /// Every input element lands in exactly one group.
    #[test]
    fn prop_grouping_is_total(items in keyed_items()) {
        let grouped = group_by(items.clone(), |(key, _)| *key);
        let total: usize = grouped.iter().map(|(_, members)| members.len()).sum();
        prop_assert_eq!(total, items.len());
    }

    /// Folding each group independently equals folding the filtered input.
    #[test]
    fn prop_aggregate_is_consistent_with_filtering(items in keyed_items()) {
        let grouped = group_by(items.clone(), |(key, _)| *key);
        let sums = grouped.aggregate(0_u64, |total, (_, payload)| total + u64::from(payload));
        for (key, sum) in sums {
            let expected: u64 = items
                .iter()
                .filter(|(item_key, _)| *item_key == key)
                .map(|(_, payload)| u64::from(*payload))
                .sum();
            prop_assert_eq!(sum, expected);
        }
    }
}
