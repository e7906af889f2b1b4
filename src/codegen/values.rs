//! Literal values of one locale, printed as a TypeScript object.

use super::printer::{TsWriter, property_key, string_literal, template_fragment};
use crate::core::{Arg, Group, TypeDescriptor};

/// Write `{ ... }` for `group`, prefixed by `head` and followed by `tail`.
///
/// `head` is e.g. `const messages: Messages = ` and `tail` is `;` or `,`.
pub fn write_object(w: &mut TsWriter, head: &str, group: &Group, tail: &str) {
    if group.is_empty() {
        w.line(format!("{}{{}}{}", head, tail));
        return;
    }
    w.open(format!("{}{{", head));
    for (key, descriptor) in group.iter() {
        let key = property_key(key);
        match descriptor {
            TypeDescriptor::Text(text) => w.line(format!("{}: {},", key, string_literal(text))),
            TypeDescriptor::Call(args) => w.line(format!("{}: {},", key, call_literal(args))),
            TypeDescriptor::Group(nested) => write_object(w, &format!("{}: ", key), nested, ","),
        }
    }
    w.close(format!("}}{}", tail));
}

/// `(args) => `Hello ${args.name}!``
pub fn call_literal(args: &[Arg]) -> String {
    let mut body = String::new();
    for arg in args {
        match arg {
            Arg::Literal(text) => body.push_str(&template_fragment(text)),
            Arg::Param(name) => {
                body.push_str("${args.");
                body.push_str(name);
                body.push('}');
            }
        }
    }
    format!("(args) => `{}`", body)
}
