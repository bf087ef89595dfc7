//! @acp:module "Resume Types"
//! @acp:summary "Type definitions for the resume record"
//! @acp:domain resume
//! @acp:layer types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete resume, built once at startup and never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<Job>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub education: Vec<Education>,
}

/// Contact channels; any of them may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl Contact {
    /// Value for a channel, if present
    pub fn get(&self, channel: ContactChannel) -> Option<&str> {
        let value = match channel {
            ContactChannel::Email => &self.email,
            ContactChannel::Phone => &self.phone,
            ContactChannel::Location => &self.location,
            ContactChannel::Website => &self.website,
            ContactChannel::LinkedIn => &self.linkedin,
            ContactChannel::GitHub => &self.github,
        };
        value.as_deref()
    }

    /// Present channels in display order
    pub fn entries(&self) -> impl Iterator<Item = (ContactChannel, &str)> + '_ {
        ContactChannel::all()
            .iter()
            .filter_map(move |&channel| self.get(channel).map(|value| (channel, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

/// Contact channels in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactChannel {
    Email,
    Phone,
    Location,
    Website,
    LinkedIn,
    GitHub,
}

impl ContactChannel {
    /// Get all channels in display order
    pub fn all() -> &'static [ContactChannel] {
        &[
            ContactChannel::Email,
            ContactChannel::Phone,
            ContactChannel::Location,
            ContactChannel::Website,
            ContactChannel::LinkedIn,
            ContactChannel::GitHub,
        ]
    }

    /// Icon shown before the value in the terminal
    pub fn icon(&self) -> &'static str {
        match self {
            ContactChannel::Email => "📧",
            ContactChannel::Phone => "📱",
            ContactChannel::Location => "📍",
            ContactChannel::Website => "🌐",
            ContactChannel::LinkedIn => "💼",
            ContactChannel::GitHub => "🔗",
        }
    }

    /// Whether the value is a link (rendered in the accent tone)
    pub fn is_link(&self) -> bool {
        matches!(
            self,
            ContactChannel::Website | ContactChannel::LinkedIn | ContactChannel::GitHub
        )
    }

    /// Get the human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            ContactChannel::Email => "Email",
            ContactChannel::Phone => "Phone",
            ContactChannel::Location => "Location",
            ContactChannel::Website => "Website",
            ContactChannel::LinkedIn => "LinkedIn",
            ContactChannel::GitHub => "GitHub",
        }
    }
}

impl fmt::Display for ContactChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One position held
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub company: String,
    pub position: String,
    pub period: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// A named group of skills; list order is display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub year: String,
}
