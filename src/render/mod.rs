//! @acp:module "Render"
//! @acp:summary "Terminal and plain-text renderers"
//! @acp:domain resume
//! @acp:layer feature

pub mod frame;
pub mod help;
pub mod plain;
pub mod styled;

pub use frame::{frame, Align, BorderStyle, BoxOptions, Spacing};
pub use help::render_help;
pub use plain::render_plain;
pub use styled::{render_contact, render_full, render_skills};
