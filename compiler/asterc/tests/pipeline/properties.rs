//! Property-based checks: evaluating lowered programs agrees with
//! computing the same thing directly.

use aster_ir::Value;
use proptest::prelude::*;

use crate::common::value;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn for_runs_inclusive_iteration_count(lower in -20i32..20, upper in -20i32..20) {
        let text = format!("{{ var c = 0 for i = {lower} to {upper} c = c + 1 c }}");
        let expected = (upper - lower + 1).max(0);
        prop_assert_eq!(value(&text), Value::Int(expected));
    }

    #[test]
    fn for_sum_matches_direct_sum(lower in -50i32..50, upper in -50i32..50) {
        let text = format!("{{ var s = 0 for i = {lower} to {upper} s = s + i s }}");
        let expected: i32 = (lower..=upper).sum();
        prop_assert_eq!(value(&text), Value::Int(expected));
    }

    #[test]
    fn while_with_branches_matches_direct_loop(limit in 0i32..60, step in 1i32..5) {
        let text = format!(
            "{{
                var s = 0
                var i = 0
                while i < {limit} {{
                    if i / 2 * 2 == i s = s + i else s = s - 1
                    i = i + {step}
                }}
                s
            }}"
        );
        let mut s = 0;
        let mut i = 0;
        while i < limit {
            if i % 2 == 0 { s += i } else { s -= 1 }
            i += step;
        }
        prop_assert_eq!(value(&text), Value::Int(s));
    }

    #[test]
    fn arithmetic_matches_host(a in -1000i32..1000, b in -1000i32..1000, c in 1i32..100) {
        let text = format!("{a} + {b} * {c} - {a} / {c}");
        let expected = a + b * c - a / c;
        prop_assert_eq!(value(&text), Value::Int(expected));
    }

    #[test]
    fn comparisons_match_host(a in -5i32..5, b in -5i32..5) {
        let text = format!("{a} < {b} || {a} == {b} && !({a} >= {b})");
        let expected = a < b || a == b && !(a >= b);
        prop_assert_eq!(value(&text), Value::Bool(expected));
    }
}
