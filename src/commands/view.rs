//! @acp:module "View Commands"
//! @acp:summary "Full, contact-only and skills-only terminal views"
//! @acp:domain cli
//! @acp:layer handler

use std::io::Write;

use anyhow::Result;
use console::Term;

use super::Context;
use crate::render::{render_contact, render_full, render_skills};

/// Execute the full resume view
pub fn execute_full(ctx: &Context<'_>, out: &mut dyn Write) -> Result<()> {
    if ctx.clear_screen {
        Term::stdout().clear_screen()?;
    }

    writeln!(out, "{}", render_full(ctx.record, ctx.config, &ctx.theme))?;
    Ok(())
}

/// Execute the contact-only view
pub fn execute_contact(ctx: &Context<'_>, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", render_contact(ctx.record, &ctx.theme))?;
    Ok(())
}

/// Execute the skills-only view
pub fn execute_skills(ctx: &Context<'_>, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", render_skills(ctx.record, &ctx.theme))?;
    Ok(())
}
