//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `gen`: Unify locale files and write TypeScript output
//! - `check`: Unify locale files and report shape problems only
//! - `init`: Initialize glotgen configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::codegen::OutputShape;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Gen(cmd)) => cmd.args.common.verbose,
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Locale that seeds the schema and is embedded eagerly (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct GenArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output shape (overrides config file)
    #[arg(long, value_enum)]
    pub output: Option<OutputShape>,

    /// Load non-default locales on demand (provider output only)
    #[arg(long, overrides_with = "no_lazy")]
    pub lazy: bool,

    /// Embed every locale eagerly, even if the config file enables lazy loading
    #[arg(long, overrides_with = "lazy")]
    pub no_lazy: bool,

    /// Directory for generated files (overrides config file)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// File name of the main artifact, without extension (overrides config file)
    #[arg(long)]
    pub module_name: Option<String>,
}

impl GenArgs {
    /// Lazy mode requested on the command line, if any. The last flag wins.
    pub fn lazy_override(&self) -> Option<bool> {
        if self.lazy {
            Some(true)
        } else if self.no_lazy {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Debug, Args)]
pub struct GenCommand {
    #[command(flatten)]
    pub args: GenArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate typed TypeScript accessors from locale files
    Gen(GenCommand),
    /// Check that every locale file agrees on the same shape
    Check(CheckCommand),
    /// Initialize a new .glotgenrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gen_flags() {
        let args = Arguments::parse_from([
            "glotgen",
            "gen",
            "--output",
            "resource",
            "--lazy",
            "--default-locale",
            "de",
            "-v",
        ]);

        let Some(Command::Gen(cmd)) = &args.command else {
            panic!("expected gen command");
        };
        assert_eq!(cmd.args.output, Some(OutputShape::Resource));
        assert!(cmd.args.lazy);
        assert_eq!(cmd.args.common.default_locale.as_deref(), Some("de"));
        assert!(args.verbose());
    }

    #[test]
    fn test_lazy_flags_override_in_order() {
        let gen_args = |extra: &[&str]| {
            let args = Arguments::parse_from(["glotgen", "gen"].iter().chain(extra));
            match args.command {
                Some(Command::Gen(cmd)) => cmd.args,
                _ => panic!("expected gen command"),
            }
        };

        assert_eq!(gen_args(&[]).lazy_override(), None);
        assert_eq!(gen_args(&["--lazy"]).lazy_override(), Some(true));
        assert_eq!(gen_args(&["--no-lazy"]).lazy_override(), Some(false));
        assert_eq!(gen_args(&["--lazy", "--no-lazy"]).lazy_override(), Some(false));
        assert_eq!(gen_args(&["--no-lazy", "--lazy"]).lazy_override(), Some(true));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Arguments::command().debug_assert();
    }
}
