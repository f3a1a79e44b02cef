//! # namegen
//!
//! A compiler for the namegen pattern format: a compact bracket-and-pipe grammar
//! describing families of random names.
//!
//! File Layout
//!
//! src/namegen
//!   ├── lexing       Token stream for patterns (logos)
//!   ├── compiler     Single-pass group-stack compiler producing a tree
//!   ├── tree         The generator tree: rendering and static analysis
//!   ├── symbols      The letter-class table used by symbol groups
//!   └── formats      Human readable views of compiled trees
//!
//! The usual entry points are [`namegen::compile`] for a one-off tree and
//! [`namegen::Generator`] for a compiled handle that keeps its pattern around.
//!
//! For test helpers, see the [testing module](namegen::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod namegen;
