//! Folding of per-locale trees into one canonical schema.
//!
//! The first locale seeds the schema. Every following locale is compared
//! against it key by key; disagreements are collected in the
//! [`UnifyContext`] and never stop the fold, so one run reports every
//! problem across all locales.

use super::builder::{RawDictionary, build_tree};
use super::context::UnifyContext;
use super::data::{Group, NamedValue, TypeDescriptor, param_names};
use crate::diagnostics::{ParamMismatchDiagnostic, TypeMismatchDiagnostic, UnificationError};

/// The schema accumulator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Canonical {
    /// No locale has been folded yet.
    #[default]
    Uninitialized,
    Group(Group),
}

impl Canonical {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one locale tree into the schema.
    pub fn merge(&mut self, tree: &Group, locale: &str, ctx: &mut UnifyContext) {
        match self {
            Canonical::Uninitialized => {
                let group_path = ctx.group_path();
                ctx.missing.record_present_all(&group_path, tree, locale);
                *self = Canonical::Group(tree.clone());
            }
            Canonical::Group(group) => merge_group(group, tree, locale, ctx),
        }
    }

    /// The finished schema. Empty when nothing was folded.
    pub fn finalize(self) -> Group {
        match self {
            Canonical::Uninitialized => Group::new(),
            Canonical::Group(group) => group,
        }
    }
}

fn merge_group(canonical: &mut Group, tree: &Group, locale: &str, ctx: &mut UnifyContext) {
    for (key, expected) in canonical.iter_mut() {
        let path = ctx.key_path(key);
        let Some(actual) = tree.get(key) else {
            ctx.missing.record_missing(&path, locale);
            continue;
        };
        ctx.missing.record_present(&path, locale);

        match (expected, actual) {
            (TypeDescriptor::Text(_), TypeDescriptor::Text(_)) => {}
            (TypeDescriptor::Call(expected_args), TypeDescriptor::Call(actual_args)) => {
                let expected_names = param_names(expected_args);
                let actual_names = param_names(actual_args);
                if expected_names != actual_names {
                    ctx.report(ParamMismatchDiagnostic {
                        path,
                        locale: locale.to_string(),
                        expected: expected_names.into_iter().map(String::from).collect(),
                        actual: actual_names.into_iter().map(String::from).collect(),
                    });
                }
            }
            (TypeDescriptor::Group(expected_group), TypeDescriptor::Group(actual_group)) => {
                ctx.with_key(key, |ctx| merge_group(expected_group, actual_group, locale, ctx));
            }
            (expected, actual) => {
                ctx.report(TypeMismatchDiagnostic {
                    path,
                    locale: locale.to_string(),
                    expected: expected.kind(),
                    actual: actual.kind(),
                });
            }
        }
    }

    for (key, actual) in tree.iter() {
        if canonical.contains_key(key) {
            continue;
        }
        let path = ctx.key_path(key);
        ctx.missing.record_present(&path, locale);
        if let TypeDescriptor::Group(nested) = actual {
            ctx.missing.record_present_all(&path, nested, locale);
        }
        canonical.insert(key, actual.clone());
    }
}

/// Fold `trees` in order into one schema.
pub fn fold_trees(trees: &[NamedValue<Group>], ctx: &mut UnifyContext) -> Group {
    let mut canonical = Canonical::new();
    for tree in trees {
        canonical.merge(&tree.value, &tree.locale, ctx);
    }
    canonical.finalize()
}

/// The agreed-upon schema together with every locale's own tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub canonical: Group,
    /// Locale trees in input order.
    pub locales: Vec<NamedValue<Group>>,
}

impl Schema {
    pub fn locale_names(&self) -> Vec<&str> {
        self.locales.iter().map(|l| l.locale.as_str()).collect()
    }

    pub fn locale(&self, name: &str) -> Option<&Group> {
        self.locales
            .iter()
            .find(|l| l.locale == name)
            .map(|l| &l.value)
    }
}

/// Build every locale tree, fold them and check the result.
///
/// Fails with every diagnostic at once if any locale disagrees with the
/// schema; no partial schema is returned.
pub fn unify(inputs: &[NamedValue<RawDictionary>]) -> Result<Schema, UnificationError> {
    let mut ctx = UnifyContext::new();

    let locales: Vec<NamedValue<Group>> = inputs
        .iter()
        .map(|input| {
            NamedValue::new(
                input.locale.clone(),
                build_tree(&input.value, &input.locale, &mut ctx),
            )
        })
        .collect();

    let canonical = fold_trees(&locales, &mut ctx);
    let names: Vec<&str> = inputs.iter().map(|input| input.locale.as_str()).collect();
    ctx.finish(&names)?;

    Ok(Schema { canonical, locales })
}
