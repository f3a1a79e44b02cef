//! Treeviz formatter for generator trees
//!
//! One line per node, with nesting drawn as box connectors, two columns per level.
//!
//! So the format is :
//! <prefix><connector> <icon><space><label> (label truncated to 30 characters)
//!
//! Example, for `!~(foo)|<v>` compiled without collapsing:
//!
//!   ⋔ Choice (2 options)
//!   ├─ ⇧ Capitalize
//!   │ └─ ↺ Reverse
//!   │   └─ ◦ "foo"
//!   └─ ⋔ Choice (6 options)
//!     ├─ ◦ "a"
//!     ...
//!
//! Choices over plain literals (symbol classes, mostly) are long, so only the
//! first few options are listed, followed by a `…` line with the remainder.
//!
//! Icons
//!     Literal: ◦
//!     Sequence: ≡
//!     Choice: ⋔
//!     Reverse: ↺
//!     Capitalize: ⇧
//!     Collapse: ≈

use crate::namegen::tree::Node;
use std::collections::HashMap;

const DEFAULT_MAX_OPTIONS: usize = 6;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node
fn get_icon(node: &Node) -> &'static str {
    match node {
        Node::Literal(_) => "◦",
        Node::Sequence(_) => "≡",
        Node::Choice(_) => "⋔",
        Node::Reverse(_) => "↺",
        Node::Capitalize(_) => "⇧",
        Node::Collapse(_) => "≈",
    }
}

fn get_label(node: &Node) -> String {
    match node {
        Node::Literal(text) => format!("\"{}\"", truncate(text, 30)),
        Node::Sequence(children) => format!("Sequence ({} parts)", children.len()),
        Node::Choice(children) => format!("Choice ({} options)", children.len()),
        Node::Reverse(_) => "Reverse".to_string(),
        Node::Capitalize(_) => "Capitalize".to_string(),
        Node::Collapse(_) => "Collapse".to_string(),
    }
}

/// How many of `node`'s children get their own line
fn listed_children(node: &Node, max_options: usize) -> usize {
    let children = node.children();
    let all_literals = children.iter().all(|c| matches!(c, Node::Literal(_)));
    match node {
        Node::Choice(_) if all_literals && max_options > 0 && children.len() > max_options => {
            max_options - 1
        }
        _ => children.len(),
    }
}

fn format_children(node: &Node, prefix: &str, max_options: usize) -> String {
    let mut output = String::new();
    let children = node.children();
    let listed = listed_children(node, max_options);
    let elided = children.len() - listed;
    let line_count = listed + usize::from(elided > 0);

    for (i, child) in children.iter().take(listed).enumerate() {
        output.push_str(&format_node(child, prefix, i, line_count, max_options));
    }
    if elided > 0 {
        output.push_str(&format!("{}└─ … {} more\n", prefix, elided));
    }

    output
}

/// Build treeviz output for one node and its subtree
fn format_node(
    node: &Node,
    prefix: &str,
    child_index: usize,
    child_count: usize,
    max_options: usize,
) -> String {
    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };

    let mut output = format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(node),
        get_label(node)
    );

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    output.push_str(&format_children(node, &child_prefix, max_options));

    output
}

pub fn to_treeviz_str(node: &Node) -> String {
    to_treeviz_str_with_params(node, &HashMap::new())
}

/// Supported params: `max-options` (options listed per literal choice, `0` lists all)
pub fn to_treeviz_str_with_params(node: &Node, params: &HashMap<String, String>) -> String {
    let max_options = params
        .get("max-options")
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_OPTIONS);

    let mut output = format!("{} {}\n", get_icon(node), get_label(node));
    output.push_str(&format_children(node, "", max_options));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_root() {
        assert_eq!(to_treeviz_str(&Node::literal("foo")), "◦ \"foo\"\n");
    }

    #[test]
    fn test_nested_wrappers() {
        let node = Node::capitalize(Node::reverse(Node::literal("foo")));
        assert_eq!(
            to_treeviz_str(&node),
            "⇧ Capitalize\n└─ ↺ Reverse\n  └─ ◦ \"foo\"\n"
        );
    }

    #[test]
    fn test_long_choice_is_elided() {
        let node = Node::choice_of(["a", "b", "c", "d", "e", "f", "g", "h"]);
        let output = to_treeviz_str(&node);
        assert!(output.starts_with("⋔ Choice (8 options)\n"));
        assert!(output.contains("├─ ◦ \"e\"\n"));
        assert!(!output.contains("\"f\""));
        assert!(output.ends_with("└─ … 3 more\n"));
    }

    #[test]
    fn test_max_options_zero_lists_everything() {
        let node = Node::choice_of(["a", "b", "c", "d", "e", "f", "g", "h"]);
        let mut params = HashMap::new();
        params.insert("max-options".to_string(), "0".to_string());
        let output = to_treeviz_str_with_params(&node, &params);
        assert_eq!(output.lines().count(), 9);
        assert!(output.ends_with("└─ ◦ \"h\"\n"));
    }

    #[test]
    fn test_truncates_long_literals() {
        let text = "x".repeat(40);
        let output = to_treeviz_str(&Node::literal(text));
        assert_eq!(output, format!("◦ \"{}...\"\n", "x".repeat(30)));
    }
}
