//! Property-based tests for attribute merging using proptest.

use std::collections::BTreeMap;

use awsdiag_graph::AttrMap;
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

// Small key alphabet so base and override collide often.
fn attr_map_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-e]{1,2}", "[#0-9A-F]{0,7}", 0..12)
}

fn to_attrs(map: &BTreeMap<String, String>) -> AttrMap {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Keys only in the base keep the base value.
    #[test]
    fn merge_keeps_base_only_keys(base in attr_map_strategy(), over in attr_map_strategy()) {
        let merged = to_attrs(&base).merge(&to_attrs(&over));
        for (key, value) in &base {
            if !over.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value.as_str()));
            }
        }
    }

    /// Every override key carries the override value.
    #[test]
    fn merge_override_values_win(base in attr_map_strategy(), over in attr_map_strategy()) {
        let merged = to_attrs(&base).merge(&to_attrs(&over));
        for (key, value) in &over {
            prop_assert_eq!(merged.get(key), Some(value.as_str()));
        }
    }

    /// The result holds exactly the union of both key sets.
    #[test]
    fn merge_adds_no_extra_keys(base in attr_map_strategy(), over in attr_map_strategy()) {
        let merged = to_attrs(&base).merge(&to_attrs(&over));
        for key in merged.keys() {
            prop_assert!(base.contains_key(key) || over.contains_key(key));
        }
        let union: std::collections::BTreeSet<&String> = base.keys().chain(over.keys()).collect();
        prop_assert_eq!(merged.len(), union.len());
    }

    /// Merging never modifies its inputs.
    #[test]
    fn merge_leaves_inputs_untouched(base in attr_map_strategy(), over in attr_map_strategy()) {
        let base_attrs = to_attrs(&base);
        let over_attrs = to_attrs(&over);
        let _ = base_attrs.merge(&over_attrs);
        prop_assert_eq!(base_attrs, to_attrs(&base));
        prop_assert_eq!(over_attrs, to_attrs(&over));
    }

    /// Merging the same override twice changes nothing further.
    #[test]
    fn merge_is_idempotent_per_override(base in attr_map_strategy(), over in attr_map_strategy()) {
        let over_attrs = to_attrs(&over);
        let once = to_attrs(&base).merge(&over_attrs);
        let twice = once.merge(&over_attrs);
        prop_assert_eq!(once, twice);
    }
}
