//! Testing utilities for namegen
//!
//! Rendering is random, so tests assert properties over many draws instead of
//! exact strings. These helpers keep those tests short and reproducible:
//!
//! - [`seeded_rng`] gives every test its own deterministic random source.
//! - [`draw`] renders a tree many times.
//! - [`assert_within_bounds`] checks every draw against the static analysis.
//!
//! Example:
//!
//! ```rust,ignore
//! let tree = compile("<c|v|>", true).unwrap();
//! assert_within_bounds(&tree, 1000);
//! ```

use crate::namegen::tree::Node;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seed used by the helpers that do not take one explicitly
pub const DEFAULT_SEED: u64 = 0x8af6_11ac;

/// A reproducible random source
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Render `tree` `count` times from a fixed seed
pub fn draw(tree: &Node, count: usize) -> Vec<String> {
    let mut rng = seeded_rng(DEFAULT_SEED);
    (0..count).map(|_| tree.render_with(&mut rng)).collect()
}

/// Panic unless every one of `count` renders has a length within
/// `[min_length, max_length]`.
pub fn assert_within_bounds(tree: &Node, count: usize) {
    let min = tree.min_length();
    let max = tree.max_length();
    for name in draw(tree, count) {
        let len = name.chars().count();
        assert!(
            (min..=max).contains(&len),
            "rendered {:?} (length {}) outside {}..={} for {:?}",
            name,
            len,
            min,
            max,
            tree
        );
    }
}

/// Panic unless every one of `count` renders is one of `expected`
pub fn assert_renders_one_of(tree: &Node, expected: &[&str], count: usize) {
    for name in draw(tree, count) {
        assert!(
            expected.contains(&name.as_str()),
            "rendered {:?}, expected one of {:?}",
            name,
            expected
        );
    }
}
