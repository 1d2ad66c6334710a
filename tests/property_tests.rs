//! Property-based tests - pragmatic approach testing the parser's
//! algebraic guarantees across generated formulas.
//!
//! These complement the example-driven integration tests: instead of fixed
//! expectations, they check the laws the scanner must obey regardless of
//! input shape (determinism, positivity, additivity of concatenation, and
//! multiplicativity of group wrapping).

use molparse::{parse_molecule, AtomCounts};
use proptest::prelude::*;

fn symbol() -> impl Strategy<Value = String> {
    "[A-Z][a-z]?"
}

/// A bracket-free formula: one or more symbols, each with an optional
/// multi-digit coefficient.
fn flat_formula() -> impl Strategy<Value = String> {
    prop::collection::vec((symbol(), prop::option::of(1u64..10_000)), 1..12).prop_map(|parts| {
        let mut formula = String::new();
        for (symbol, coefficient) in parts {
            formula.push_str(&symbol);
            if let Some(coefficient) = coefficient {
                formula.push_str(&coefficient.to_string());
            }
        }
        formula
    })
}

fn merged(a: &AtomCounts, b: &AtomCounts) -> AtomCounts {
    let mut sum = a.clone();
    sum.merge_scaled(b, 1).unwrap();
    sum
}

proptest! {
    #[test]
    fn prop_flat_formulas_parse(formula in flat_formula()) {
        prop_assert!(parse_molecule(&formula).is_ok());
    }

    #[test]
    fn prop_counts_are_positive(formula in flat_formula()) {
        let counts = parse_molecule(&formula).unwrap();
        for (_, count) in counts.iter() {
            prop_assert!(count >= 1);
        }
    }

    #[test]
    fn prop_reparse_is_deterministic(formula in flat_formula()) {
        let first = parse_molecule(&formula).unwrap();
        let second = parse_molecule(&formula).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_concatenation_sums_counts(left in flat_formula(), right in flat_formula()) {
        let left_counts = parse_molecule(&left).unwrap();
        let right_counts = parse_molecule(&right).unwrap();
        let combined = parse_molecule(&format!("{left}{right}")).unwrap();
        prop_assert_eq!(combined, merged(&left_counts, &right_counts));
    }

    #[test]
    fn prop_group_multiplier_scales_every_count(
        body in flat_formula(),
        multiplier in 1u64..50,
    ) {
        // Prefix with an atom so the wrapped formula starts with a letter.
        let wrapped = format!("X({body}){multiplier}");
        let counts = parse_molecule(&wrapped).unwrap();
        let base = parse_molecule(&body).unwrap();

        prop_assert_eq!(counts.get("X"), Some(base.get("X").unwrap_or(0) * multiplier + 1));
        for (symbol, count) in base.iter() {
            if symbol != "X" {
                prop_assert_eq!(counts.get(symbol), Some(count * multiplier));
            }
        }
    }

    #[test]
    fn prop_bracket_kinds_are_interchangeable_in_meaning(
        body in flat_formula(),
        multiplier in 1u64..50,
    ) {
        let parens = parse_molecule(&format!("X({body}){multiplier}")).unwrap();
        let square = parse_molecule(&format!("X[{body}]{multiplier}")).unwrap();
        let curly = parse_molecule(&format!("X{{{body}}}{multiplier}")).unwrap();
        prop_assert_eq!(&parens, &square);
        prop_assert_eq!(&parens, &curly);
    }

    #[test]
    fn prop_sibling_group_order_is_irrelevant(
        first in flat_formula(),
        second in flat_formula(),
        m1 in 1u64..20,
        m2 in 1u64..20,
    ) {
        let forwards = parse_molecule(&format!("X({first}){m1}({second}){m2}")).unwrap();
        let backwards = parse_molecule(&format!("X({second}){m2}({first}){m1}")).unwrap();
        prop_assert_eq!(forwards, backwards);
    }
}
