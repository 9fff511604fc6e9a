//! Transcheck - translation string table checker for game mods
//!
//! Transcheck validates a tree of per-locale string tables written in the
//! game's Lua-like `KEY = "value",` format against a base locale. It reports
//! missing and extra strings and files, duplicate keys, strings identical to
//! the base locale and mismatched substitution counts.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, report output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Table parser, validation context and directory checker
//! - `issues`: Warning type definitions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
