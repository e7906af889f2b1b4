use std::fmt::Write;

const INDENT: &str = "  ";

/// Line-oriented writer for TypeScript source with two-space indentation.
#[derive(Debug, Default)]
pub struct TsWriter {
    buf: String,
    depth: usize,
}

impl TsWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Write `text` and indent the following lines.
    pub fn open(&mut self, text: impl AsRef<str>) {
        self.line(text);
        self.depth += 1;
    }

    /// Dedent, then write `text`.
    pub fn close(&mut self, text: impl AsRef<str>) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// A JavaScript string literal for `value`.
pub fn string_literal(value: &str) -> String {
    // JSON strings are valid JavaScript string literals.
    serde_json::Value::String(value.to_string()).to_string()
}

/// `key` as an object property name, quoted unless it is an identifier.
///
/// `__proto__` is written as a computed key; in an object literal the plain
/// or quoted form sets the prototype instead of defining a property.
pub fn property_key(key: &str) -> String {
    if key == "__proto__" {
        format!("[{}]", string_literal(key))
    } else if is_identifier(key) {
        key.to_string()
    } else {
        string_literal(key)
    }
}

pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Escape text for use inside a template literal.
pub fn template_fragment(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

/// `"en" | "de"`, or `never` for no names.
pub fn string_union<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for (index, name) in names.into_iter().enumerate() {
        if index > 0 {
            out.push_str(" | ");
        }
        let _ = write!(out, "{}", string_literal(name));
    }
    if out.is_empty() {
        out.push_str("never");
    }
    out
}
