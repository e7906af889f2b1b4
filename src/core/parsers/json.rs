use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::core::{NamedValue, RawDictionary};

/// A locale file that could not be used.
#[derive(Debug, Clone)]
pub struct LocaleScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanLocalesResult {
    /// Locale dictionaries, sorted by file name.
    pub locales: Vec<NamedValue<RawDictionary>>,
    pub warnings: Vec<LocaleScanWarning>,
}

impl ScanLocalesResult {
    pub fn locale_names(&self) -> Vec<&str> {
        self.locales.iter().map(|l| l.locale.as_str()).collect()
    }

    /// Move `locale` to the front so it seeds the schema.
    ///
    /// Returns false when no such locale was scanned.
    pub fn prioritize(&mut self, locale: &str) -> bool {
        match self.locales.iter().position(|l| l.locale == locale) {
            Some(index) => {
                let entry = self.locales.remove(index);
                self.locales.insert(0, entry);
                true
            }
            None => false,
        }
    }
}

pub fn parse_locale_file(path: &Path) -> Result<RawDictionary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    match json {
        Value::Object(map) => Ok(map),
        _ => bail!("Top-level value of {:?} must be an object", path),
    }
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/messages/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

pub fn scan_locale_files(messages_dir: impl AsRef<Path>) -> Result<ScanLocalesResult> {
    let messages_dir = messages_dir.as_ref();
    let mut result = ScanLocalesResult::default();

    if !messages_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .glotgenrc.json 'messagesRoot' setting.",
            messages_dir.display()
        );
    }

    if !messages_dir.is_dir() {
        bail!("'{}' is not a directory.", messages_dir.display());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(messages_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    for path in paths {
        let Some(locale) = extract_locale(&path) else {
            continue;
        };
        match parse_locale_file(&path) {
            Ok(dictionary) => result.locales.push(NamedValue::new(locale, dictionary)),
            Err(e) => result.warnings.push(LocaleScanWarning {
                file_path: path.to_string_lossy().to_string(),
                error: format!("{:#}", e),
            }),
        }
    }

    Ok(result)
}
