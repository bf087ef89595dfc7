#![forbid(unsafe_code)]

//! @acp:module "Resume Library"
//! @acp:summary "A personal resume rendered as terminal text and as a plain-text export"
//! @acp:domain resume
//! @acp:layer api
//! @acp:stability stable
//!
//! # Resume
//!
//! Renders a built-in resume record as coloured, boxed terminal output, or as
//! an undecorated text document for export.
//!
//! ## Example
//!
//! ```rust,no_run
//! use resume::{render_full, Config, ResumeRecord, Theme};
//!
//! fn main() -> anyhow::Result<()> {
//!     let record = ResumeRecord::builtin()?;
//!     println!("{}", render_full(&record, &Config::default(), &Theme::styled()));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod record;
pub mod render;
pub mod style;

// Re-exports
pub use cli::{Options, View};
pub use commands::{run, Context};
pub use config::Config;
pub use error::{Result, ResumeError};
pub use format::{
    create_section, format_contact, format_education, format_experience, format_skills,
};
pub use record::{Contact, ContactChannel, Education, Job, ResumeRecord, SkillCategory};
pub use render::{render_contact, render_full, render_help, render_plain, render_skills};
pub use style::{Attr, StyleSpec, Theme, Tone};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
