//! Compiled generator handle
//!
//! [`Generator`] owns a compiled tree together with the pattern it came from and
//! the options it was compiled with. The tree itself is read-only, so a
//! generator can be shared between threads; each thread renders with its own
//! random source.

use crate::namegen::analysis::Analysis;
use crate::namegen::compiler::{CompileOptions, Compiler};
use crate::namegen::error::CompileError;
use crate::namegen::symbols::SymbolTable;
use crate::namegen::tree::Node;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    pattern: String,
    options: CompileOptions,
    root: Node,
}

impl Generator {
    /// Compile `pattern` with the built-in table and default options
    pub fn new(pattern: &str) -> Result<Self, CompileError> {
        Self::with_table(pattern, SymbolTable::builtin(), CompileOptions::default())
    }

    pub fn with_options(pattern: &str, options: CompileOptions) -> Result<Self, CompileError> {
        Self::with_table(pattern, SymbolTable::builtin(), options)
    }

    pub fn with_table(
        pattern: &str,
        table: &SymbolTable,
        options: CompileOptions,
    ) -> Result<Self, CompileError> {
        let root = Compiler::new(table).with_options(options).compile(pattern)?;
        Ok(Self {
            pattern: pattern.to_string(),
            options,
            root,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// One name from the thread-local random generator
    pub fn render(&self) -> String {
        self.root.render()
    }

    pub fn render_with<R: Rng>(&self, rng: &mut R) -> String {
        self.root.render_with(rng)
    }

    /// `count` independent names drawn from `rng`
    pub fn sample<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<String> {
        (0..count).map(|_| self.root.render_with(rng)).collect()
    }

    pub fn analyze(&self) -> Analysis {
        self.root.analyze()
    }
}
