//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each view is in its own submodule. [`run`] executes exactly one of them.

pub mod help;
pub mod save;
pub mod view;

use std::io::Write;

use anyhow::Result;

use crate::cli::View;
use crate::config::Config;
use crate::record::ResumeRecord;
use crate::style::Theme;

pub use help::execute_help;
pub use save::{execute_save, write_export};
pub use view::{execute_contact, execute_full, execute_skills};

/// Everything a view needs for one invocation
#[derive(Debug, Clone)]
pub struct Context<'a> {
    pub record: &'a ResumeRecord,
    pub config: &'a Config,
    pub theme: Theme,
    /// Clear the terminal before the full view; only set when stdout is a terminal
    pub clear_screen: bool,
}

impl<'a> Context<'a> {
    pub fn new(record: &'a ResumeRecord, config: &'a Config) -> Self {
        Self {
            record,
            config,
            theme: Theme::styled(),
            clear_screen: false,
        }
    }
}

/// Execute the selected view, writing terminal output to `out`
pub fn run(view: View, ctx: &Context<'_>, out: &mut dyn Write) -> Result<()> {
    tracing::debug!(view = view.as_str(), "Dispatching view");

    match view {
        View::Help => execute_help(ctx, out),
        View::Contact => execute_contact(ctx, out),
        View::Skills => execute_skills(ctx, out),
        View::Save => execute_save(ctx, out),
        View::Full => execute_full(ctx, out),
    }
}
