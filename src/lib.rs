//! Glotgen - typed TypeScript accessors from per-locale message files
//!
//! Glotgen reads one JSON dictionary per locale, unifies them into a single
//! canonical schema, and generates TypeScript declarations plus runtime
//! accessors. Any disagreement between locales (missing keys, a key that is
//! text in one locale and a group in another, placeholders that differ)
//! is reported, all at once, and nothing is generated.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `codegen`: TypeScript output in `resource`, `type` and `provider` shapes
//! - `config`: Configuration file loading and parsing
//! - `core`: Tree building and schema unification
//! - `diagnostics`: Diagnostic types and their rendering

pub mod cli;
pub mod codegen;
pub mod config;
pub mod core;
pub mod diagnostics;
