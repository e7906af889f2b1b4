use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::codegen::{GenerateOptions, OutputShape};

pub const CONFIG_FILE_NAME: &str = ".glotgenrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
    #[serde(default = "default_module_name")]
    pub module_name: String,
    #[serde(default)]
    pub output: OutputShape,
    #[serde(default)]
    pub lazy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_out_dir() -> String {
    "./src/i18n".to_string()
}

fn default_module_name() -> String {
    "messages".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            out_dir: default_out_dir(),
            module_name: default_module_name(),
            output: OutputShape::default(),
            lazy: false,
            default_locale: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// `moduleName` becomes a file name and an import path, so it must be
    /// non-empty and free of path separators.
    pub fn validate(&self) -> Result<()> {
        if self.module_name.trim().is_empty() {
            bail!("'moduleName' must not be empty");
        }
        if self.module_name.contains(['/', '\\']) {
            bail!(
                "'moduleName' must be a plain file name, got \"{}\"",
                self.module_name
            );
        }
        if let Some(locale) = &self.default_locale
            && locale.trim().is_empty()
        {
            bail!("'defaultLocale' must not be empty");
        }
        Ok(())
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            shape: self.output,
            lazy: self.lazy,
            default_locale: self.default_locale.clone(),
            module_name: self.module_name.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.messages_root, "./messages");
        assert_eq!(config.out_dir, "./src/i18n");
        assert_eq!(config.module_name, "messages");
        assert_eq!(config.output, OutputShape::Provider);
        assert!(!config.lazy);
        assert!(config.default_locale.is_none());
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "messagesRoot": "./locales",
              "outDir": "./generated",
              "output": "resource",
              "lazy": true,
              "defaultLocale": "de"
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.messages_root, "./locales");
        assert_eq!(config.out_dir, "./generated");
        assert_eq!(config.output, OutputShape::Resource);
        assert!(config.lazy);
        assert_eq!(config.default_locale.as_deref(), Some("de"));
    }

    #[test]
    fn test_parse_unknown_output_fails() {
        let json = r#"{ "output": "bundle" }"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("src").join("components");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert!(found.is_some());
        assert_eq!(found.unwrap(), config_path);
    }

    #[test]
    fn test_find_config_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let found = find_config_file(dir.path());
        assert!(found.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_path, r#"{ "output": "type" }"#).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert_eq!(result.config.output, OutputShape::Type);
        assert_eq!(result.config.messages_root, default_messages_root());
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(!result.from_file);
        assert_eq!(result.config.module_name, "messages");
    }

    #[test]
    fn test_validate_module_name() {
        let config = Config {
            module_name: "i18n/messages".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("moduleName"));

        let config = Config {
            module_name: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_load_config_with_invalid_module_name_fails() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "moduleName": "a/b" }"#,
        )
        .unwrap();

        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let json = default_config_json().unwrap();
        assert!(json.contains("messagesRoot"));
        assert!(json.contains("outDir"));
        assert!(json.contains("\"output\": \"provider\""));
        assert!(!json.contains("defaultLocale"));
    }

    #[test]
    fn test_generate_options_from_config() {
        let config = Config {
            output: OutputShape::Resource,
            default_locale: Some("fr".to_string()),
            ..Default::default()
        };
        let options = config.generate_options();
        assert_eq!(options.shape, OutputShape::Resource);
        assert_eq!(options.default_locale.as_deref(), Some("fr"));
        assert_eq!(options.module_name, "messages");
    }
}
