use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::super::args::GenCommand;
use super::{CommandResult, CommandSummary, GenerateSummary, context::CommandContext};
use crate::codegen::{GenerateOptions, Output, generate as generate_output, side_module};

pub fn generate(cmd: GenCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let mut ctx = CommandContext::new(&args.common)?;

    if let Some(output) = args.output {
        ctx.config.output = output;
    }
    if let Some(lazy) = args.lazy_override() {
        ctx.config.lazy = lazy;
    }
    if let Some(out_dir) = &args.out_dir {
        ctx.config.out_dir = out_dir.to_string_lossy().to_string();
    }
    if let Some(module_name) = &args.module_name {
        ctx.config.module_name = module_name.clone();
    }
    ctx.config.validate()?;

    let mut result = CommandResult::new(CommandSummary::Generate(GenerateSummary {
        written: Vec::new(),
    }));

    let Some(schema) = ctx.unify_into(&mut result) else {
        return Ok(result);
    };

    let options = ctx.generate_options();
    let output = generate_output(&schema, &options)?;
    let written = write_output(&ctx.root.join(&ctx.config.out_dir), &options, output)?
        .into_iter()
        .map(|path| match path.strip_prefix(&ctx.root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => path,
        })
        .collect();
    result.summary = CommandSummary::Generate(GenerateSummary { written });

    Ok(result)
}

/// Write `output` below `out_dir`, returning the written paths.
pub fn write_output(
    out_dir: &Path,
    options: &GenerateOptions,
    output: Output,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

    let main_path = out_dir.join(format!("{}.ts", options.module_name));
    let mut files = Vec::new();
    match output {
        Output::Single(text) => files.push((main_path, text)),
        Output::Split { main, locales } => {
            files.push((main_path, main));
            for locale in locales {
                let path = out_dir.join(format!(
                    "{}.ts",
                    side_module(&options.module_name, &locale.locale)
                ));
                files.push((path, locale.value));
            }
        }
    }

    let mut written = Vec::with_capacity(files.len());
    for (path, text) in files {
        fs::write(&path, text)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
