//! @acp:module "Save Command"
//! @acp:summary "Write the plain-text export and confirm"
//! @acp:domain cli
//! @acp:layer handler

use std::io::Write;
use std::path::Path;

use anyhow::{Context as _, Result};

use super::Context;
use crate::error::ResumeError;
use crate::render::render_plain;
use crate::style::Tone;

/// Execute the save command
pub fn execute_save(ctx: &Context<'_>, out: &mut dyn Write) -> Result<()> {
    let text = render_plain(ctx.record, ctx.config).context("Failed to render resume text")?;
    write_export(&ctx.config.export_path, &text)?;

    tracing::info!(
        path = %ctx.config.export_path.display(),
        bytes = text.len(),
        "Resume exported"
    );

    let message = format!("✅ Resume saved as {}", ctx.config.export_name());
    writeln!(out, "{}", ctx.theme.paint(Tone::Accent, &message))?;
    Ok(())
}

/// Write `text` to `path`, replacing any existing file
pub fn write_export(path: &Path, text: &str) -> crate::Result<()> {
    std::fs::write(path, text).map_err(|source| ResumeError::Io {
        path: path.to_path_buf(),
        source,
    })
}
