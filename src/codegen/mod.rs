//! TypeScript output for a unified schema.
//!
//! Three shapes are supported:
//!
//! - `resource`: every locale's values in one typed record
//! - `type`: the shape and a loader contract only
//! - `provider`: a typed `getMessages` accessor, eager or lazy

mod declarations;
mod loader;
mod printer;
mod provider;
mod resource;
mod values;

use anyhow::{Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::{NamedValue, RawDictionary, Schema, unify};

pub use provider::side_module;

/// Which kind of artifact to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputShape {
    Resource,
    Type,
    #[default]
    Provider,
}

impl std::fmt::Display for OutputShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputShape::Resource => write!(f, "resource"),
            OutputShape::Type => write!(f, "type"),
            OutputShape::Provider => write!(f, "provider"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub shape: OutputShape,
    /// Split non-default locales into their own modules. Provider only.
    pub lazy: bool,
    /// Defaults to the first locale.
    pub default_locale: Option<String>,
    /// Import name of the main artifact, used by lazy side outputs.
    pub module_name: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            shape: OutputShape::default(),
            lazy: false,
            default_locale: None,
            module_name: "messages".to_string(),
        }
    }
}

impl GenerateOptions {
    /// The default locale, checked against the available `locales`.
    pub fn resolve_default_locale<'a>(&'a self, locales: &[&'a str]) -> Result<&'a str> {
        match (&self.default_locale, locales.first()) {
            (Some(explicit), _) if locales.contains(&explicit.as_str()) => Ok(explicit.as_str()),
            (Some(explicit), _) => bail!(
                "Default locale '{}' is not one of the available locales ({})",
                explicit,
                locales.join(", ")
            ),
            (None, Some(first)) => Ok(*first),
            (None, None) => bail!("No locales to generate from"),
        }
    }
}

/// Generated source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Single(String),
    /// Main artifact plus one module per lazily loaded locale.
    Split {
        main: String,
        locales: Vec<NamedValue<String>>,
    },
}

/// Everything an emitter needs.
pub(crate) struct Declarations<'a> {
    pub schema: &'a Schema,
    pub default_locale: &'a str,
    pub module_name: &'a str,
}

impl Declarations<'_> {
    pub fn locale_names(&self) -> Vec<&str> {
        self.schema.locale_names()
    }
}

/// Print `schema` in the shape selected by `options`.
pub fn generate(schema: &Schema, options: &GenerateOptions) -> Result<Output> {
    let locales = schema.locale_names();
    let default_locale = options.resolve_default_locale(&locales)?;
    let decl = Declarations {
        schema,
        default_locale,
        module_name: &options.module_name,
    };

    Ok(match options.shape {
        OutputShape::Resource => resource::emit(&decl),
        OutputShape::Type => loader::emit(&decl),
        OutputShape::Provider => provider::emit(&decl, options.lazy),
    })
}

/// Unify `inputs` and generate output in one step.
///
/// A bad default locale is rejected before any unification work. Shape
/// problems come back as a [`UnificationError`](crate::diagnostics::UnificationError)
/// inside the `anyhow::Error`.
pub fn unify_and_generate(inputs: &[NamedValue<RawDictionary>], options: &GenerateOptions) -> Result<Output> {
    let locales: Vec<&str> = inputs.iter().map(|i| i.locale.as_str()).collect();
    options.resolve_default_locale(&locales)?;

    let schema = unify(inputs)?;
    generate(&schema, options)
}
