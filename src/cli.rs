//! @acp:module "CLI Options"
//! @acp:summary "Flag parsing and view selection"
//! @acp:domain cli
//! @acp:layer api
//!
//! Flags are parsed into [`Options`] before dispatch. Arguments the parser
//! does not know are dropped first, so unknown flags never cause an error.

use std::ffi::OsString;

use clap::{CommandFactory, Parser};

/// Resume flags
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "resume")]
#[command(about = "Personal resume in the terminal")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Options {
    /// Show this help message
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Show contact information only
    #[arg(long)]
    pub contact: bool,

    /// Show skills only
    #[arg(long)]
    pub skills: bool,

    /// Save resume as text file
    #[arg(long)]
    pub save: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// The single view one invocation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Help,
    Contact,
    Skills,
    Save,
    Full,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Help => "help",
            View::Contact => "contact",
            View::Skills => "skills",
            View::Save => "save",
            View::Full => "full",
        }
    }
}

impl Options {
    /// Parse the process arguments
    pub fn from_env() -> Self {
        Self::parse_lenient(std::env::args_os())
    }

    /// Parse `args` (program name first), ignoring anything unrecognised
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let known = known_flags();
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_else(|| OsString::from("resume"));

        // Repeats are dropped too; a flag given twice is still one flag
        let mut seen: Vec<&str> = Vec::new();
        for arg in args {
            let canonical = arg
                .to_str()
                .and_then(|s| known.iter().find(|(spelling, _)| spelling == s))
                .map(|(_, canonical)| canonical.as_str());
            if let Some(flag) = canonical {
                if !seen.contains(&flag) {
                    seen.push(flag);
                }
            }
        }
        let recognised = std::iter::once(program).chain(seen.into_iter().map(OsString::from));

        match Self::try_parse_from(recognised) {
            Ok(options) => options,
            Err(err) => {
                tracing::debug!("Ignoring unparsable arguments: {}", err);
                Self::default()
            }
        }
    }

    /// First matching view in priority order
    pub fn view(&self) -> View {
        if self.help {
            View::Help
        } else if self.contact {
            View::Contact
        } else if self.skills {
            View::Skills
        } else if self.save {
            View::Save
        } else {
            View::Full
        }
    }
}

/// Every `--long` and `-s` spelling the parser accepts, paired with the
/// `--long` form it stands for
fn known_flags() -> Vec<(String, String)> {
    let command = Options::command();
    command
        .get_arguments()
        .filter_map(|arg| arg.get_long().map(|long| (arg, format!("--{}", long))))
        .flat_map(|(arg, long)| {
            let short = arg.get_short().map(|s| (format!("-{}", s), long.clone()));
            std::iter::once((long.clone(), long)).chain(short)
        })
        .collect()
}
