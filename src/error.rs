//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain cli
//! @acp:layer types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the resume library
#[derive(Error, Debug)]
pub enum ResumeError {
    /// Writing the plain-text export failed
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The embedded resume document could not be decoded
    #[error("Invalid resume data: {0}")]
    Data(#[from] serde_json::Error),

    /// The plain-text export template failed to compile
    #[error("Template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// The plain-text export template failed to render
    #[error("Render error: {0}")]
    Render(#[from] Box<handlebars::RenderError>),
}

impl From<handlebars::TemplateError> for ResumeError {
    fn from(err: handlebars::TemplateError) -> Self {
        ResumeError::Template(Box::new(err))
    }
}

impl From<handlebars::RenderError> for ResumeError {
    fn from(err: handlebars::RenderError) -> Self {
        ResumeError::Render(Box::new(err))
    }
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, ResumeError>;
