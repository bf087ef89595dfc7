//! @acp:module "Format"
//! @acp:summary "Field formatters and the section composer"
//! @acp:domain resume
//! @acp:layer output

pub mod fields;
pub mod section;

pub use fields::{format_contact, format_education, format_experience, format_skills};
pub use section::{create_section, SECTION_RULE_PADDING};
