//! Gloss - dictionary-driven comment and log translation for TypeScript sources
//!
//! Gloss rewrites the natural-language text of TypeScript files (comments and
//! the message arguments of diagnostic calls such as `debugLog` and
//! `console.error`) from English into Korean, and reverts such files back
//! into English, using a fixed bijective phrase dictionary.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (translate, revert, init)
//! - `config`: Configuration file loading and parsing
//! - `core`: Translation engine (extraction, translation, rewriting, batches)

pub mod cli;
pub mod config;
pub mod core;
