use serde_json::{Map, Value};

use super::context::UnifyContext;
use super::data::{Group, TypeDescriptor};
use super::template::parse_template;
use crate::diagnostics::UnexpectedValueDiagnostic;

/// A locale's messages as read from disk: nested objects with scalar leaves.
pub type RawDictionary = Map<String, Value>;

/// Build the descriptor tree of one locale.
///
/// Unsupported values are reported to `ctx` and left out of the tree; building
/// always continues with the remaining keys.
pub fn build_tree(raw: &RawDictionary, locale: &str, ctx: &mut UnifyContext) -> Group {
    let mut group = Group::new();

    for (key, value) in raw {
        let descriptor = match value {
            Value::String(s) => Some(leaf(s)),
            Value::Number(n) => Some(leaf(&n.to_string())),
            Value::Object(nested) => Some(TypeDescriptor::Group(
                ctx.with_key(key, |ctx| build_tree(nested, locale, ctx)),
            )),
            Value::Bool(_) | Value::Null | Value::Array(_) => {
                let path = ctx.key_path(key);
                ctx.report(UnexpectedValueDiagnostic {
                    locale: locale.to_string(),
                    path,
                    found: json_kind(value).to_string(),
                });
                None
            }
        };

        if let Some(descriptor) = descriptor {
            group.insert(key.clone(), descriptor);
        }
    }

    group
}

fn leaf(value: &str) -> TypeDescriptor {
    match parse_template(value) {
        Some(args) => TypeDescriptor::Call(args),
        None => TypeDescriptor::Text(value.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
