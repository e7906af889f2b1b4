//! Diagnostic types produced while unifying locale trees.
//!
//! A diagnostic only carries structured fields (path, locales, kinds,
//! parameter names). Turning those fields into text is done through the
//! [`Render`] trait, so callers can swap the wording without touching the
//! unification code.

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::core::Kind;

// ============================================================
// Diagnostic Kind
// ============================================================

/// Rule identifier for each diagnostic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    UnexpectedValue,
    MissingKey,
    TypeMismatch,
    ParamMismatch,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnexpectedValue => write!(f, "unexpected-value"),
            DiagnosticKind::MissingKey => write!(f, "missing-key"),
            DiagnosticKind::TypeMismatch => write!(f, "type-mismatch"),
            DiagnosticKind::ParamMismatch => write!(f, "param-mismatch"),
        }
    }
}

// ============================================================
// Diagnostic Types
// ============================================================

/// A value that is neither text, a number nor a nested object.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnexpectedValueDiagnostic {
    pub locale: String,
    /// Dotted path of the offending key.
    pub path: String,
    /// JSON kind that was found (`boolean`, `null`, `array`).
    pub found: String,
}

/// A key that some locales declare and others don't.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MissingKeyDiagnostic {
    pub path: String,
    /// Locales lacking the key, sorted.
    pub missing_in: Vec<String>,
}

/// The same key is a different kind of value in two locales.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TypeMismatchDiagnostic {
    pub path: String,
    /// Locale whose value disagrees with the schema.
    pub locale: String,
    pub expected: Kind,
    pub actual: Kind,
}

/// Two parameterized messages disagree on their placeholder names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParamMismatchDiagnostic {
    pub path: String,
    pub locale: String,
    pub expected: Vec<String>,
    pub actual: Vec<String>,
}

/// A shape problem found while building or unifying locale trees.
#[enum_dispatch(Render)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Diagnostic {
    UnexpectedValue(UnexpectedValueDiagnostic),
    MissingKey(MissingKeyDiagnostic),
    TypeMismatch(TypeMismatchDiagnostic),
    ParamMismatch(ParamMismatchDiagnostic),
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::UnexpectedValue(_) => DiagnosticKind::UnexpectedValue,
            Diagnostic::MissingKey(_) => DiagnosticKind::MissingKey,
            Diagnostic::TypeMismatch(_) => DiagnosticKind::TypeMismatch,
            Diagnostic::ParamMismatch(_) => DiagnosticKind::ParamMismatch,
        }
    }
}

// ============================================================
// Render Trait
// ============================================================

/// Text rendering for diagnostics.
#[enum_dispatch]
pub trait Render {
    /// Dotted key path the diagnostic points at.
    fn path(&self) -> &str;

    /// One-line description.
    fn message(&self) -> String;

    /// Optional details for the "= note:" line.
    fn note(&self) -> Option<String> {
        None
    }
}

impl Render for UnexpectedValueDiagnostic {
    fn path(&self) -> &str {
        &self.path
    }

    fn message(&self) -> String {
        format!(
            "unexpected {} value at key \"{}\" in locale {}",
            self.found, self.path, self.locale
        )
    }

    fn note(&self) -> Option<String> {
        Some("only strings, numbers and nested objects are supported".to_string())
    }
}

impl Render for MissingKeyDiagnostic {
    fn path(&self) -> &str {
        &self.path
    }

    fn message(&self) -> String {
        format!(
            "key \"{}\" is missing in {}",
            self.path,
            self.missing_in.join(", ")
        )
    }
}

impl Render for TypeMismatchDiagnostic {
    fn path(&self) -> &str {
        &self.path
    }

    fn message(&self) -> String {
        format!(
            "type mismatch at \"{}\": expected {}, found {} in locale {}",
            self.path, self.expected, self.actual, self.locale
        )
    }
}

impl Render for ParamMismatchDiagnostic {
    fn path(&self) -> &str {
        &self.path
    }

    fn message(&self) -> String {
        format!(
            "parameter mismatch at \"{}\" in locale {}",
            self.path, self.locale
        )
    }

    fn note(&self) -> Option<String> {
        Some(format!(
            "expected ({}), found ({})",
            self.expected.join(", "),
            self.actual.join(", ")
        ))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())?;
        if let Some(note) = self.note() {
            write!(f, " ({})", note)?;
        }
        Ok(())
    }
}

// ============================================================
// Composite Failure
// ============================================================

/// Every diagnostic collected during one run.
///
/// Returned instead of a schema whenever at least one diagnostic exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnificationError {
    pub diagnostics: Vec<Diagnostic>,
}

impl UnificationError {
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl fmt::Display for UnificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "locale files disagree on their shape ({} {}):",
            self.diagnostics.len(),
            if self.diagnostics.len() == 1 {
                "problem"
            } else {
                "problems"
            }
        )?;
        for (index, diagnostic) in self.diagnostics.iter().enumerate() {
            writeln!(f, "  {}. {}", index + 1, diagnostic)?;
        }
        Ok(())
    }
}

impl std::error::Error for UnificationError {}
