use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::super::args::CommonArgs;
use super::{CommandResult, LocaleStats};
use crate::{
    codegen::GenerateOptions,
    config::{Config, load_config},
    core::{
        Schema,
        parsers::json::{ScanLocalesResult, scan_locale_files},
        unify,
    },
};

/// Configuration and scanned locale files shared by `gen` and `check`.
pub struct CommandContext {
    pub root: PathBuf,
    pub config: Config,
    pub verbose: bool,
    pub scan: ScanLocalesResult,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let root = env::current_dir().context("Failed to determine current directory")?;
        Self::from_root(&root, common)
    }

    pub fn from_root(root: &Path, common: &CommonArgs) -> Result<Self> {
        let mut config = load_config(root)?.config;

        if let Some(messages_root) = &common.messages_root {
            config.messages_root = messages_root.to_string_lossy().to_string();
        }
        if let Some(default_locale) = &common.default_locale {
            config.default_locale = Some(default_locale.clone());
        }
        config.validate()?;

        let mut scan = scan_locale_files(root.join(&config.messages_root))?;
        if scan.locales.is_empty() {
            bail!(
                "No locale files found in '{}'.\n\
                 Hint: Add one <locale>.json file per language.",
                config.messages_root
            );
        }

        if let Some(default_locale) = &config.default_locale
            && !scan.prioritize(default_locale)
        {
            bail!(
                "Default locale '{}' has no file in '{}' (found: {})",
                default_locale,
                config.messages_root,
                scan.locale_names().join(", ")
            );
        }

        Ok(Self {
            root: root.to_path_buf(),
            config,
            verbose: common.verbose,
            scan,
        })
    }

    pub fn generate_options(&self) -> GenerateOptions {
        self.config.generate_options()
    }

    /// Unify the scanned locales, recording diagnostics or statistics in
    /// `result`. Returns the schema only when every locale file was readable
    /// and every locale agrees.
    pub fn unify_into(&self, result: &mut CommandResult) -> Option<Schema> {
        result.locale_files_checked = self.scan.locales.len();
        result.warnings = self.scan.warnings.clone();

        let schema = match unify(&self.scan.locales) {
            Ok(schema) => {
                result.stats = schema
                    .locales
                    .iter()
                    .map(|locale| LocaleStats {
                        locale: locale.locale.clone(),
                        message_count: locale.value.leaf_count(),
                    })
                    .collect();
                schema
            }
            Err(error) => {
                result.diagnostics = error.diagnostics;
                return None;
            }
        };

        // A locale that could not be read would be silently left out.
        result.warnings.is_empty().then_some(schema)
    }
}
