//! Pattern compiler
//!
//! Compiles a pattern into a generator tree in a single left-to-right pass over
//! the token stream, driving an explicit stack of open groups:
//!
//! - `<` / `(` push the current group and open a symbol / literal group.
//! - `>` / `)` fold the current group into one node and append it to the group
//!   below. A group with no alternatives folds to the empty string, one
//!   alternative folds to itself and several fold to a `Choice`.
//! - `|` starts a new alternative. A group that opens with `|` gets an empty
//!   leading alternative.
//! - `!` / `~` queue a `Capitalize` / `Reverse` wrapper for the next appended
//!   node, but only in symbol groups. In literal groups they are plain text.
//! - Any other character expands through the symbol table in symbol groups (if
//!   the table knows it) and is literal otherwise.
//!
//! Wrappers apply last-in first-out, so the operator written first ends up
//! outermost: `!~(foo)` is `Capitalize(Reverse("foo"))`.
//!
//! The whole pattern sits in an implicit symbol group. Compilation is fail-fast:
//! the first error aborts it and no partial tree escapes.

use crate::namegen::error::CompileError;
use crate::namegen::lexing::{tokenize, Token};
use crate::namegen::symbols::SymbolTable;
use crate::namegen::tree::Node;
use tracing::{debug, trace};

/// Knobs controlling how a pattern is compiled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Wrap the whole tree in a `Collapse` node
    pub collapse_triples: bool,
    /// Capitalize every generated string (applied inside the collapse)
    pub capitalize_first: bool,
    /// Maximum bracket nesting; `None` is unlimited.
    ///
    /// Rendering, analysis and dropping a tree all recurse once per level, so
    /// untrusted patterns should be compiled with a limit: tens of thousands of
    /// nested groups overflow the default thread stack.
    pub max_depth: Option<usize>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            collapse_triples: true,
            capitalize_first: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupKind {
    Symbol,
    Literal,
}

impl GroupKind {
    fn closer(self) -> char {
        match self {
            GroupKind::Symbol => '>',
            GroupKind::Literal => ')',
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Wrapper {
    Capitalize,
    Reverse,
}

/// An open bracket while compiling. Discarded once folded into its parent.
#[derive(Debug)]
struct Group {
    kind: GroupKind,
    opened_at: usize,
    alternatives: Vec<Vec<Node>>,
    wrappers: Vec<Wrapper>,
}

impl Group {
    fn new(kind: GroupKind, opened_at: usize) -> Self {
        Self {
            kind,
            opened_at,
            alternatives: Vec::new(),
            wrappers: Vec::new(),
        }
    }

    fn split(&mut self) {
        if self.alternatives.is_empty() {
            self.alternatives.push(Vec::new());
        }
        self.alternatives.push(Vec::new());
    }

    fn wrap(&mut self, wrapper: Wrapper) {
        self.wrappers.push(wrapper);
    }

    fn current(&mut self) -> &mut Vec<Node> {
        if self.alternatives.is_empty() {
            self.alternatives.push(Vec::new());
        }
        let last = self.alternatives.len() - 1;
        &mut self.alternatives[last]
    }

    /// Append a node to the current alternative, applying pending wrappers.
    fn push(&mut self, node: Node) {
        let mut node = node;
        while let Some(wrapper) = self.wrappers.pop() {
            node = match wrapper {
                Wrapper::Capitalize => Node::capitalize(node),
                Wrapper::Reverse => Node::reverse(node),
            };
        }

        let alternative = self.current();
        // Adjacent plain text renders the same as one literal
        if let (Node::Literal(text), Some(Node::Literal(previous))) = (&node, alternative.last_mut())
        {
            previous.push_str(text);
            return;
        }
        alternative.push(node);
    }

    fn fold(self) -> Node {
        if !self.wrappers.is_empty() {
            trace!(
                dropped = self.wrappers.len(),
                "wrappers with nothing to apply to"
            );
        }

        let mut alternatives: Vec<Node> = self.alternatives.into_iter().map(sequence).collect();
        match alternatives.len() {
            0 => Node::empty(),
            1 => alternatives.swap_remove(0),
            _ => Node::Choice(alternatives),
        }
    }
}

fn sequence(mut parts: Vec<Node>) -> Node {
    if parts.len() == 1 {
        parts.swap_remove(0)
    } else {
        Node::Sequence(parts)
    }
}

/// Compiles patterns against a symbol table
#[derive(Debug, Clone)]
pub struct Compiler<'a> {
    table: &'a SymbolTable,
    options: CompileOptions,
}

impl<'a> Compiler<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self {
            table,
            options: CompileOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn table(&self) -> &'a SymbolTable {
        self.table
    }

    /// Compile `pattern` into a generator tree
    pub fn compile(&self, pattern: &str) -> Result<Node, CompileError> {
        let mut stack: Vec<Group> = Vec::new();
        let mut top = Group::new(GroupKind::Symbol, 0);

        for (token, span) in tokenize(pattern) {
            let position = span.start;
            let text = &pattern[span];

            match token {
                Token::OpenSymbol | Token::OpenLiteral => {
                    if let Some(limit) = self.options.max_depth {
                        if stack.len() >= limit {
                            return Err(CompileError::TooDeep { limit, position });
                        }
                    }
                    let kind = if token == Token::OpenSymbol {
                        GroupKind::Symbol
                    } else {
                        GroupKind::Literal
                    };
                    stack.push(std::mem::replace(&mut top, Group::new(kind, position)));
                }
                Token::CloseSymbol | Token::CloseLiteral => {
                    let (closes, found) = if token == Token::CloseSymbol {
                        (GroupKind::Symbol, '>')
                    } else {
                        (GroupKind::Literal, ')')
                    };
                    let Some(parent) = stack.pop() else {
                        return Err(CompileError::UnbalancedBrackets {
                            bracket: found,
                            position,
                        });
                    };
                    if top.kind != closes {
                        return Err(CompileError::MismatchedBracketKind {
                            expected: top.kind.closer(),
                            found,
                            position,
                        });
                    }
                    let folded = std::mem::replace(&mut top, parent).fold();
                    trace!(depth = stack.len(), ?folded, "folded group");
                    top.push(folded);
                }
                Token::Pipe => top.split(),
                Token::Bang | Token::Tilde => match top.kind {
                    GroupKind::Symbol if token == Token::Bang => top.wrap(Wrapper::Capitalize),
                    GroupKind::Symbol => top.wrap(Wrapper::Reverse),
                    GroupKind::Literal => top.push(Node::literal(text)),
                },
                Token::Char => {
                    let node = match top.kind {
                        GroupKind::Symbol => self.expand(text),
                        GroupKind::Literal => Node::literal(text),
                    };
                    top.push(node);
                }
            }
        }

        if !stack.is_empty() {
            return Err(CompileError::UnclosedGroup {
                open_groups: stack.len(),
                position: top.opened_at,
            });
        }

        let mut root = top.fold();
        if self.options.capitalize_first {
            root = Node::capitalize(root);
        }
        if self.options.collapse_triples {
            root = Node::collapse(root);
        }

        debug!(
            pattern,
            nodes = root.node_count(),
            combinations = %root.combinations(),
            "compiled pattern"
        );
        Ok(root)
    }

    /// A character inside a symbol group: a table class or itself
    fn expand(&self, text: &str) -> Node {
        match text.chars().next().and_then(|code| self.table.get(code)) {
            Some(entries) => Node::choice_of(entries.iter().cloned()),
            None => Node::literal(text),
        }
    }
}

/// Compile `pattern` with the built-in symbol table
pub fn compile(pattern: &str, collapse_triples: bool) -> Result<Node, CompileError> {
    let options = CompileOptions {
        collapse_triples,
        ..CompileOptions::default()
    };
    Compiler::new(SymbolTable::builtin())
        .with_options(options)
        .compile(pattern)
}
