use std::collections::BTreeSet;

use super::ledger::{MissingLedger, join_path};
use crate::diagnostics::{Diagnostic, UnificationError};

/// State of a single unification run.
///
/// Owned by one run and threaded by `&mut` through tree building and
/// merging; dropped once the result is produced.
#[derive(Debug, Default)]
pub struct UnifyContext {
    /// Key segments of the group currently being visited.
    pub path: Vec<String>,
    /// Distinct diagnostics found so far.
    pub errors: BTreeSet<Diagnostic>,
    pub missing: MissingLedger,
}

impl UnifyContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dotted path of the current group.
    pub fn group_path(&self) -> String {
        self.path.join(".")
    }

    /// Dotted path of `key` inside the current group.
    pub fn key_path(&self, key: &str) -> String {
        join_path(&self.group_path(), key)
    }

    pub fn report(&mut self, diagnostic: impl Into<Diagnostic>) {
        self.errors.insert(diagnostic.into());
    }

    /// Run `f` with `key` pushed onto the current path.
    pub fn with_key<R>(&mut self, key: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push(key.to_string());
        let result = f(self);
        self.path.pop();
        result
    }

    /// Fold the missing-key ledger into the error set and hand back every
    /// diagnostic, or `Ok` when there are none.
    ///
    /// `locales` is every locale taking part in the run.
    pub fn finish<S: AsRef<str>>(mut self, locales: &[S]) -> Result<(), UnificationError> {
        for diagnostic in self.missing.resolve(locales) {
            self.errors.insert(Diagnostic::MissingKey(diagnostic));
        }

        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(UnificationError {
                diagnostics: self.errors.into_iter().collect(),
            })
        }
    }
}
