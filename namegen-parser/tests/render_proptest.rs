//! Property-based tests for compiled trees
//!
//! Patterns are generated from the grammar itself (symbol codes, plain letters,
//! both group kinds with alternatives, and both wrapper operators), so every
//! generated pattern is balanced and must compile. The letters include `ß` and
//! `İ`, whose case mappings expand to more than one character.

use namegen_parser::namegen::testing::seeded_rng;
use namegen_parser::namegen::{compile, CompileError};
use proptest::prelude::*;

fn atom_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        's', 'v', 'V', 'c', 'B', 'C', 'i', 'm', 'M', 'D', 'd', 'a', 'e', 'o', 'x', '\'', '-', ' ',
        'ß', 'İ', 'é',
    ])
    .prop_map(|c| c.to_string())
}

fn pattern_strategy() -> impl Strategy<Value = String> {
    atom_strategy().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(|parts| parts.concat()),
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|alternatives| format!("<{}>", alternatives.join("|"))),
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|alternatives| format!("({})", alternatives.join("|"))),
            inner.clone().prop_map(|p| format!("!{}", p)),
            inner.prop_map(|p| format!("~{}", p)),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_generated_patterns_compile(pattern in pattern_strategy()) {
        let tree = compile(&pattern, true);
        prop_assert!(tree.is_ok(), "failed to compile {:?}: {:?}", pattern, tree);
    }

    #[test]
    fn test_combinations_at_least_one(pattern in pattern_strategy()) {
        let tree = compile(&pattern, true).unwrap();
        prop_assert!(tree.combinations() >= 1);
        prop_assert!(tree.min_length() <= tree.max_length());
    }

    #[test]
    fn test_renders_within_bounds(pattern in pattern_strategy(), seed in any::<u64>()) {
        let tree = compile(&pattern, false).unwrap();
        let mut rng = seeded_rng(seed);
        for _ in 0..200 {
            let len = tree.render_with(&mut rng).chars().count();
            prop_assert!(
                len >= tree.min_length() && len <= tree.max_length(),
                "{:?} rendered length {} outside {}..={}",
                pattern, len, tree.min_length(), tree.max_length()
            );
        }
    }

    #[test]
    fn test_collapsed_renders_within_max(pattern in pattern_strategy(), seed in any::<u64>()) {
        let tree = compile(&pattern, true).unwrap();
        let mut rng = seeded_rng(seed);
        for _ in 0..200 {
            let len = tree.render_with(&mut rng).chars().count();
            prop_assert!(len <= tree.max_length());
        }
    }

    #[test]
    fn test_structure_is_deterministic(pattern in pattern_strategy()) {
        let first = compile(&pattern, true).unwrap();
        let second = compile(&pattern, true).unwrap();
        prop_assert_eq!(first.analyze(), second.analyze());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_unclosed_suffix_fails(pattern in pattern_strategy()) {
        let broken = format!("{}(", pattern);
        let is_unclosed = matches!(
            compile(&broken, true),
            Err(CompileError::UnclosedGroup { .. })
        );
        prop_assert!(is_unclosed);
    }

    #[test]
    fn test_stray_closer_fails(pattern in pattern_strategy()) {
        let broken = format!("{})", pattern);
        let is_unbalanced = matches!(
            compile(&broken, true),
            Err(CompileError::UnbalancedBrackets { .. })
        );
        prop_assert!(is_unbalanced);
    }
}
