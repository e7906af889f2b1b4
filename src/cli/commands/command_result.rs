use std::path::PathBuf;

use crate::core::parsers::json::LocaleScanWarning;
use crate::diagnostics::Diagnostic;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Generate(GenerateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct GenerateSummary {
    /// Files written, main artifact first.
    pub written: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Per-locale statistics, filled in when unification succeeds.
#[derive(Debug)]
pub struct LocaleStats {
    pub locale: String,
    pub message_count: usize,
}

/// Result of running glotgen commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Every shape problem found. Empty on success.
    pub diagnostics: Vec<Diagnostic>,
    /// Locale files that could not be read or parsed. Any of them fails the
    /// command.
    pub warnings: Vec<LocaleScanWarning>,
    /// Number of locale files that were unified.
    pub locale_files_checked: usize,
    pub stats: Vec<LocaleStats>,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            diagnostics: Vec::new(),
            warnings: Vec::new(),
            locale_files_checked: 0,
            stats: Vec::new(),
        }
    }

    /// Shape problems plus unreadable locale files.
    pub fn error_count(&self) -> usize {
        self.diagnostics.len() + self.warnings.len()
    }
}
