//! @acp:module "Styled Renderer"
//! @acp:summary "Coloured, boxed terminal views of the resume"
//! @acp:domain resume
//! @acp:layer output

use crate::config::Config;
use crate::format::{create_section, format_contact, format_experience, format_skills};
use crate::record::ResumeRecord;
use crate::style::{Attr, StyleSpec, Theme, Tone};

use super::frame::{frame, Align, BorderStyle, BoxOptions, Spacing};

const NAME: StyleSpec = StyleSpec::with(Tone::Primary, &[Attr::Bold, Attr::Underline]);
const STRONG: StyleSpec = StyleSpec::with(Tone::Primary, &[Attr::Bold]);

/// Full resume: header box, sections, footer box.
///
/// Education is only part of the text export.
pub fn render_full(record: &ResumeRecord, config: &Config, theme: &Theme) -> String {
    let header = frame(
        &format!(
            "{}\n{}",
            theme.paint(NAME, &record.name),
            theme.paint(Tone::Secondary, &record.title)
        ),
        &BoxOptions {
            padding: Spacing::uniform(1),
            margin: Spacing::uniform(1),
            border: BorderStyle::Round,
            border_tone: Tone::Primary,
            align: Align::Left,
        },
        theme,
    );

    let sections = [
        header,
        create_section("Contact", &format_contact(&record.contact, theme), theme),
        create_section("Summary", &theme.paint(Tone::Text, &record.summary), theme),
        create_section("Experience", &format_experience(&record.experience, theme), theme),
        create_section("Skills", &format_skills(&record.skills, theme), theme),
    ];

    format!("{}\n{}", sections.join("\n"), render_footer(config, theme))
}

fn render_footer(config: &Config, theme: &Theme) -> String {
    let body = format!(
        "{}\n{}{}{}",
        theme.paint(Tone::Muted, "Thank you for viewing my resume!"),
        theme.paint(Tone::Accent, "Run "),
        theme.paint(STRONG, &config.command_hint),
        theme.paint(Tone::Accent, " anytime to view this resume.")
    );

    frame(
        &body,
        &BoxOptions {
            padding: Spacing::uniform(1),
            margin: Spacing::top(1),
            border: BorderStyle::Single,
            border_tone: Tone::Muted,
            align: Align::Center,
        },
        theme,
    )
}

/// Name and contact lines in a single box
pub fn render_contact(record: &ResumeRecord, theme: &Theme) -> String {
    frame(
        &format!(
            "{}\n{}",
            theme.paint(STRONG, &record.name),
            format_contact(&record.contact, theme)
        ),
        &BoxOptions {
            padding: Spacing::uniform(1),
            border_tone: Tone::Primary,
            ..Default::default()
        },
        theme,
    )
}

/// Skills in a single box; the frame renders even with no skills
pub fn render_skills(record: &ResumeRecord, theme: &Theme) -> String {
    frame(
        &format!(
            "{}\n\n{}",
            theme.paint(STRONG, "Skills"),
            format_skills(&record.skills, theme)
        ),
        &BoxOptions {
            padding: Spacing::uniform(1),
            border_tone: Tone::Secondary,
            ..Default::default()
        },
        theme,
    )
}
