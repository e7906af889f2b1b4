use std::collections::{BTreeMap, BTreeSet};

use super::data::{Group, TypeDescriptor};
use crate::diagnostics::MissingKeyDiagnostic;

/// Which locales are known to have, or to lack, one key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presence {
    pub exists: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

impl Presence {
    /// Locales that lack the key, out of `locales`.
    ///
    /// With any known holder the answer is every other locale; otherwise only
    /// the recorded `missing` set is known.
    pub fn offending<S: AsRef<str>>(&self, locales: &[S]) -> BTreeSet<String> {
        if self.exists.is_empty() {
            return self.missing.clone();
        }
        locales
            .iter()
            .map(|locale| locale.as_ref())
            .filter(|locale| !self.exists.contains(*locale))
            .map(String::from)
            .collect()
    }
}

/// Key presence bookkeeping for one unification run, keyed by dotted path.
///
/// Every schema path gets an entry listing each locale whose tree contains
/// it, so the locales lacking a key can be derived from the full locale list
/// whatever order the trees were folded in.
#[derive(Debug, Clone, Default)]
pub struct MissingLedger {
    entries: BTreeMap<String, Presence>,
}

impl MissingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The schema has `path` but `locale` does not.
    pub fn record_missing(&mut self, path: &str, locale: &str) {
        self.entries
            .entry(path.to_string())
            .or_default()
            .missing
            .insert(locale.to_string());
    }

    /// `locale` has `path`, whatever its kind.
    pub fn record_present(&mut self, path: &str, locale: &str) {
        self.entries
            .entry(path.to_string())
            .or_default()
            .exists
            .insert(locale.to_string());
    }

    /// Record `locale` as holding every key in `group` and below.
    pub fn record_present_all(&mut self, group_path: &str, group: &Group, locale: &str) {
        for (key, descriptor) in group.iter() {
            let path = join_path(group_path, key);
            self.record_present(&path, locale);
            if let TypeDescriptor::Group(nested) = descriptor {
                self.record_present_all(&path, nested, locale);
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<&Presence> {
        self.entries.get(path)
    }

    /// One diagnostic per path that at least one of `locales` lacks.
    pub fn resolve<S: AsRef<str>>(&self, locales: &[S]) -> Vec<MissingKeyDiagnostic> {
        self.entries
            .iter()
            .filter_map(|(path, presence)| {
                let offending = presence.offending(locales);
                (!offending.is_empty()).then(|| MissingKeyDiagnostic {
                    path: path.clone(),
                    missing_in: offending.into_iter().collect(),
                })
            })
            .collect()
    }
}

/// Join a dotted group path and a key.
pub fn join_path(group_path: &str, key: &str) -> String {
    if group_path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", group_path, key)
    }
}
