//! The generator tree
//!
//! A compiled pattern is a tree of [`Node`]s. The tree is built once by the
//! compiler and never changes afterwards; it supports two behaviors:
//!
//! - Rendering: a recursive walk that draws one random string. Every `Choice`
//!   picks a child uniformly per visit, so repeated renders are independent.
//! - Analysis: compositional, deterministic queries over the structure
//!   (`combinations`, `min_length`, `max_length`) that never render anything.
//!
//! Lengths are counted in `char`s. Casing and reversal work on scalar values, not
//! grapheme clusters, so combining characters can end up detached when reversed.
//! Casing never changes a string's length.
//!
//! `combinations` deliberately over-counts through wrappers: `Capitalize` can map
//! "Foo" and "foo" to the same output and `Collapse` can merge runs, but wrappers
//! report their child's count unchanged.

use crate::namegen::analysis::Analysis;
use rand::Rng;

/// Letters that may not repeat at all after collapsing
const COLLAPSE_TO_ONE: &[char] = &['a', 'h', 'i', 'j', 'q', 'u', 'v', 'w', 'x', 'y'];

/// A node of the generator tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A fixed string
    Literal(String),
    /// Concatenation of every child, in order
    Sequence(Vec<Node>),
    /// Exactly one child, picked uniformly at random (empty renders "")
    Choice(Vec<Node>),
    /// Reverses the characters of its child
    Reverse(Box<Node>),
    /// Upper-cases the first character of its child and lower-cases the rest
    Capitalize(Box<Node>),
    /// Suppresses excess runs of repeated characters in its child
    Collapse(Box<Node>),
}

impl Node {
    pub fn literal(text: impl Into<String>) -> Self {
        Node::Literal(text.into())
    }

    /// The empty string
    pub fn empty() -> Self {
        Node::Literal(String::new())
    }

    pub fn reverse(child: Node) -> Self {
        Node::Reverse(Box::new(child))
    }

    pub fn capitalize(child: Node) -> Self {
        Node::Capitalize(Box::new(child))
    }

    pub fn collapse(child: Node) -> Self {
        Node::Collapse(Box::new(child))
    }

    /// A choice between literal strings
    pub fn choice_of<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Node::Choice(options.into_iter().map(Node::literal).collect())
    }

    /// Direct children of this node
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Literal(_) => &[],
            Node::Sequence(children) | Node::Choice(children) => children,
            Node::Reverse(child) | Node::Capitalize(child) | Node::Collapse(child) => {
                std::slice::from_ref(&**child)
            }
        }
    }

    /// Render one string using the thread-local random generator
    pub fn render(&self) -> String {
        self.render_with(&mut rand::rng())
    }

    /// Render one string drawing randomness from `rng`
    pub fn render_with<R: Rng>(&self, rng: &mut R) -> String {
        let mut out = String::new();
        self.render_into(rng, &mut out);
        out
    }

    fn render_into<R: Rng>(&self, rng: &mut R, out: &mut String) {
        match self {
            Node::Literal(text) => out.push_str(text),
            Node::Sequence(children) => {
                for child in children {
                    child.render_into(rng, out);
                }
            }
            Node::Choice(children) => {
                if !children.is_empty() {
                    let index = rng.random_range(0..children.len());
                    children[index].render_into(rng, out);
                }
            }
            Node::Reverse(child) => out.push_str(&reverse(&child.render_with(rng))),
            Node::Capitalize(child) => out.push_str(&capitalize(&child.render_with(rng))),
            Node::Collapse(child) => out.push_str(&collapse(&child.render_with(rng))),
        }
    }

    /// Number of distinct strings this node can produce (saturating).
    pub fn combinations(&self) -> u128 {
        match self {
            Node::Literal(_) => 1,
            Node::Sequence(children) => children
                .iter()
                .fold(1u128, |acc, child| acc.saturating_mul(child.combinations())),
            Node::Choice(children) => {
                let total = children
                    .iter()
                    .fold(0u128, |acc, child| acc.saturating_add(child.combinations()));
                total.max(1)
            }
            Node::Reverse(child) | Node::Capitalize(child) | Node::Collapse(child) => {
                child.combinations()
            }
        }
    }

    /// Shortest possible rendering, in chars.
    pub fn min_length(&self) -> usize {
        match self {
            Node::Literal(text) => text.chars().count(),
            Node::Sequence(children) => children.iter().map(Node::min_length).sum(),
            Node::Choice(children) => children.iter().map(Node::min_length).min().unwrap_or(0),
            Node::Reverse(child) | Node::Capitalize(child) | Node::Collapse(child) => {
                child.min_length()
            }
        }
    }

    /// Longest possible rendering, in chars.
    ///
    /// Collapsing can only shorten a rendering, so for trees with a `Collapse`
    /// this is an upper bound rather than an exact maximum.
    pub fn max_length(&self) -> usize {
        match self {
            Node::Literal(text) => text.chars().count(),
            Node::Sequence(children) => children.iter().map(Node::max_length).sum(),
            Node::Choice(children) => children.iter().map(Node::max_length).max().unwrap_or(0),
            Node::Reverse(child) | Node::Capitalize(child) | Node::Collapse(child) => {
                child.max_length()
            }
        }
    }

    /// All three static queries at once
    pub fn analyze(&self) -> Analysis {
        Analysis {
            combinations: self.combinations(),
            min_length: self.min_length(),
            max_length: self.max_length(),
        }
    }

    /// Total number of nodes in the tree, this one included
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }
}

/// Reverse the characters of `text`
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Upper-case the first character and force the remainder to lower case.
///
/// Every character maps to exactly one character; one whose case mapping
/// expands (`ß` upper-cases to `SS`) is kept unchanged.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(text.len());
            out.push(single_char(first, first.to_uppercase()));
            out.extend(chars.map(|c| single_char(c, c.to_lowercase())));
            out
        }
        None => String::new(),
    }
}

fn single_char(original: char, mut mapped: impl Iterator<Item = char>) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => c,
        _ => original,
    }
}

/// Suppress excess runs of the same character.
///
/// Letters in `a h i j q u v w x y` keep runs of one; every other character
/// (upper-case letters and non-letters included) keeps runs of two.
pub fn collapse(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous = None;
    let mut run = 0usize;

    for ch in text.chars() {
        if previous == Some(ch) {
            run += 1;
        } else {
            run = 0;
        }
        let limit = if COLLAPSE_TO_ONE.contains(&ch) { 1 } else { 2 };
        if run < limit {
            out.push(ch);
        }
        previous = Some(ch);
    }

    out
}
