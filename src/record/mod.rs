//! @acp:module "Resume Record"
//! @acp:summary "The resume data and its built-in instance"
//! @acp:domain resume
//! @acp:layer model

pub mod types;

pub use types::*;

use crate::error::Result;

impl ResumeRecord {
    /// Load the resume compiled into the binary
    pub fn builtin() -> Result<Self> {
        // Include the resume document at compile time
        let json = include_str!("../../data/resume.json");
        Self::from_json(json)
    }

    /// Decode a resume from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
