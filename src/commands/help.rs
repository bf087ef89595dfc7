//! @acp:module "Help Command"
//! @acp:summary "Print usage text"
//! @acp:domain cli
//! @acp:layer handler

use std::io::Write;

use anyhow::Result;

use super::Context;
use crate::render::render_help;

/// Execute the help command
pub fn execute_help(ctx: &Context<'_>, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", render_help(&ctx.theme))?;
    Ok(())
}
