//! Token definitions for namegen patterns
//!
//! The pattern grammar is character oriented: seven characters are structural
//! and everything else is a single-character [`Token::Char`]. Whether a `Char`
//! expands through the symbol table, and whether `!` / `~` act as operators, is
//! decided by the compiler from the kind of group it is in, not here.
//!
//! Tokenization is handled entirely by logos. Because `Char` matches any scalar
//! value that is not structural (newlines included) the scan cannot fail.

use logos::Logos;
use tracing::trace;

/// Byte range of a token in the pattern
pub type Span = logos::Span;

/// All possible tokens in a pattern
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// `<` opens a symbol group
    #[token("<")]
    OpenSymbol,
    /// `>` closes a symbol group
    #[token(">")]
    CloseSymbol,
    /// `(` opens a literal group
    #[token("(")]
    OpenLiteral,
    /// `)` closes a literal group
    #[token(")")]
    CloseLiteral,
    /// `|` separates alternatives
    #[token("|")]
    Pipe,
    /// `!` capitalizes the next component in symbol groups
    #[token("!")]
    Bang,
    /// `~` reverses the next component in symbol groups
    #[token("~")]
    Tilde,

    // Any other single character
    #[regex(r"[^<>()|!~]")]
    Char,
}

/// Tokenize a pattern, keeping the source span of every token
pub fn tokenize(pattern: &str) -> Vec<(Token, Span)> {
    let mut lexer = Token::lexer(pattern);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            // Unreachable while `Char` matches every other scalar value
            Err(()) => trace!(span = ?lexer.span(), "skipped unrecognized input"),
        }
    }

    tokens
}
