//! Main module for namegen library functionality

pub mod analysis;
pub mod compiler;
pub mod error;
pub mod formats;
pub mod generator;
pub mod lexing;
pub mod presets;
pub mod symbols;
pub mod testing;
pub mod tree;

pub use analysis::Analysis;
pub use compiler::{compile, CompileOptions, Compiler};
pub use error::{format_source_context, CompileError};
pub use generator::Generator;
pub use symbols::{SymbolTable, SymbolTableError};
pub use tree::Node;
