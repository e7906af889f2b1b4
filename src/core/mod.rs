//! Schema unification engine.
//!
//! Locale dictionaries flow through the pipeline in this order:
//!
//! 1. `parsers`: read `<locale>.json` files into raw dictionaries
//! 2. `builder`: turn each raw dictionary into a descriptor tree,
//!    recognizing placeholders with `template`
//! 3. `unify`: fold the trees into one canonical schema, collecting
//!    diagnostics in a `UnifyContext` and its `MissingLedger`

pub mod builder;
pub mod context;
pub mod data;
pub mod ledger;
pub mod parsers;
pub mod template;
pub mod unify;

pub use builder::{RawDictionary, build_tree};
pub use context::UnifyContext;
pub use data::*;
pub use ledger::{MissingLedger, Presence};
pub use template::parse_template;
pub use unify::{Canonical, Schema, fold_trees, unify};
