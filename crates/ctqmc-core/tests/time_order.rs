//! Property tests for the timestamp total order.

use std::cmp::Ordering;

use proptest::prelude::*;

use ctqmc_core::OperatorTime;

fn arb_time() -> impl Strategy<Value = OperatorTime> {
    (0u16..64, -4i32..4).prop_map(|(t, idx)| OperatorTime::new(f64::from(t) * 0.125, idx))
}

proptest! {
    #[test]
    fn order_is_strict_and_antisymmetric(a in arb_time(), b in arb_time()) {
        match a.cmp(&b) {
            Ordering::Less => {
                prop_assert!(a < b);
                prop_assert!(!(b < a));
                prop_assert_ne!(a, b);
            }
            Ordering::Greater => {
                prop_assert!(b < a);
                prop_assert!(!(a < b));
                prop_assert_ne!(a, b);
            }
            Ordering::Equal => {
                prop_assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn equal_time_distinct_index_never_equal(t in 0u16..64, i in -4i32..4, j in -4i32..4) {
        prop_assume!(i != j);
        let a = OperatorTime::new(f64::from(t) * 0.125, i);
        let b = OperatorTime::new(f64::from(t) * 0.125, j);
        prop_assert_ne!(a, b);
        prop_assert!((a < b) ^ (b < a));
    }

    #[test]
    fn sort_agrees_with_pairwise_order(mut keys in prop::collection::vec(arb_time(), 0..32)) {
        keys.sort();
        for pair in keys.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }
}
