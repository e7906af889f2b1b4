use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, context::CommandContext};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.args.common)?;
    let mut result = CommandResult::new(CommandSummary::Check);
    ctx.unify_into(&mut result);
    Ok(result)
}
