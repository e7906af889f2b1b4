//! Placeholder recognition for message values.
//!
//! Placeholders are a bare identifier in braces: `"Hello {name}"`.
//! Whitespace inside the braces is tolerated (`{ name }`), anything else in
//! braces (`{0}`, `{}`, `{a-b}`) stays literal text.

use std::sync::LazyLock;

use regex::Regex;

use super::data::Arg;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}").expect("placeholder regex is valid")
});

/// Split `value` into literal fragments and placeholders.
///
/// Returns `None` when the value has no placeholder, meaning it is plain text.
pub fn parse_template(value: &str) -> Option<Vec<Arg>> {
    let mut args = Vec::new();
    let mut last_end = 0;

    for captures in PLACEHOLDER.captures_iter(value) {
        let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        if whole.start() > last_end {
            args.push(Arg::Literal(value[last_end..whole.start()].to_string()));
        }
        args.push(Arg::Param(name.as_str().to_string()));
        last_end = whole.end();
    }

    if args.is_empty() {
        return None;
    }

    if last_end < value.len() {
        args.push(Arg::Literal(value[last_end..].to_string()));
    }

    Some(args)
}
