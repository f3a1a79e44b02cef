//! Error types for pattern compilation
//!
//! Every error is detected while compiling; rendering never fails. Positions are
//! byte offsets into the pattern.

use std::fmt;

/// Errors that can occur while compiling a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A closing bracket with no open group to close
    UnbalancedBrackets { bracket: char, position: usize },
    /// A `>` closing a `(` group, or a `)` closing a `<` group
    MismatchedBracketKind {
        expected: char,
        found: char,
        position: usize,
    },
    /// Input ended with groups still open; `position` is the innermost opener
    UnclosedGroup { open_groups: usize, position: usize },
    /// Bracket nesting exceeded the configured limit
    TooDeep { limit: usize, position: usize },
}

impl CompileError {
    /// Byte offset of the offending character
    pub fn position(&self) -> usize {
        match self {
            CompileError::UnbalancedBrackets { position, .. }
            | CompileError::MismatchedBracketKind { position, .. }
            | CompileError::UnclosedGroup { position, .. }
            | CompileError::TooDeep { position, .. } => *position,
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnbalancedBrackets { bracket, position } => write!(
                f,
                "Unbalanced brackets: '{}' at offset {} has no group to close",
                bracket, position
            ),
            CompileError::MismatchedBracketKind {
                expected,
                found,
                position,
            } => write!(
                f,
                "Mismatched bracket: expected '{}' but found '{}' at offset {}",
                expected, found, position
            ),
            CompileError::UnclosedGroup {
                open_groups,
                position,
            } => {
                let noun = if *open_groups == 1 { "group" } else { "groups" };
                write!(
                    f,
                    "Missing closing bracket: {} {} still open (innermost opened at offset {})",
                    open_groups, noun, position
                )
            }
            CompileError::TooDeep { limit, position } => write!(
                f,
                "Pattern nests deeper than {} groups at offset {}",
                limit, position
            ),
        }
    }
}

impl std::error::Error for CompileError {}

/// Show the pattern with a `^` marker under the character the error points at.
///
/// Patterns are single-line in practice, but embedded newlines are kept as-is so
/// the marker is placed on the line that holds the offending character.
pub fn format_source_context(pattern: &str, error: &CompileError) -> String {
    let position = error.position().min(pattern.len());
    let line_start = pattern[..position].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = pattern[position..]
        .find('\n')
        .map(|i| position + i)
        .unwrap_or(pattern.len());

    let line = &pattern[line_start..line_end];
    let column = pattern[line_start..position].chars().count();

    format!("  {}\n  {}^", line, " ".repeat(column))
}
