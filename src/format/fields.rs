//! @acp:module "Field Formatters"
//! @acp:summary "Turn each resume section into display text"
//! @acp:domain resume
//! @acp:layer output
//!
//! Every formatter is pure: the same section and theme always give the same
//! string. Empty sections give an empty string.

use crate::record::{Contact, Education, Job, SkillCategory};
use crate::style::{Attr, StyleSpec, Theme, Tone};

const HEADING: StyleSpec = StyleSpec::with(Tone::Secondary, &[Attr::Bold]);
const HIGHLIGHT: StyleSpec = StyleSpec::with(Tone::Accent, &[Attr::Bold]);

/// One line per present contact channel, in channel order
pub fn format_contact(contact: &Contact, theme: &Theme) -> String {
    contact
        .entries()
        .map(|(channel, value)| {
            let tone = if channel.is_link() { Tone::Accent } else { Tone::Text };
            let value = theme.paint(tone, value);
            if theme.contact_icons {
                let icon = format!("{} ", channel.icon());
                format!("{}{}", theme.paint(Tone::Muted, &icon), value)
            } else {
                value
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Job blocks separated by a blank line
pub fn format_experience(experience: &[Job], theme: &Theme) -> String {
    experience
        .iter()
        .map(|job| format_job(job, theme))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_job(job: &Job, theme: &Theme) -> String {
    let period = if theme.bracket_period {
        format!("({})", job.period)
    } else {
        job.period.clone()
    };

    let header = format!(
        "{} at {} {}",
        theme.paint(HEADING, &job.position),
        theme.paint(HIGHLIGHT, &job.company),
        theme.paint(Tone::Muted, &period)
    );

    let mut lines = Vec::with_capacity(job.achievements.len() + 1);
    lines.push(header);
    for achievement in &job.achievements {
        lines.push(format!(
            "{}{}",
            theme.paint(Tone::Muted, theme.bullet),
            theme.paint(Tone::Text, achievement)
        ));
    }

    lines.join("\n")
}

/// `<category>: <skill><sep><skill>...` per category
pub fn format_skills(skills: &[SkillCategory], theme: &Theme) -> String {
    let separator = theme.paint(Tone::Muted, theme.skill_separator);

    skills
        .iter()
        .map(|category| {
            let name = theme.paint(HEADING, &format!("{}:", category.name));
            if category.skills.is_empty() {
                return name;
            }
            let list = category
                .skills
                .iter()
                .map(|skill| theme.paint(Tone::Accent, skill))
                .collect::<Vec<_>>()
                .join(separator.as_str());
            format!("{} {}", name, list)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Degree line, then `<school> (<year>)`
pub fn format_education(education: &[Education], theme: &Theme) -> String {
    education
        .iter()
        .map(|entry| {
            format!(
                "{}\n{} {}",
                theme.paint(HEADING, &entry.degree),
                theme.paint(Tone::Text, &entry.school),
                theme.paint(Tone::Muted, &format!("({})", entry.year))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn job(position: &str, company: &str, achievements: &[&str]) -> Job {
        Job {
            company: company.to_string(),
            position: position.to_string(),
            period: "2020 - 2021".to_string(),
            achievements: achievements.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_contact_plain_values_in_order() {
        let contact = Contact {
            email: Some("a@b.c".to_string()),
            phone: Some("123".to_string()),
            github: Some("github.com/a".to_string()),
            ..Default::default()
        };
        assert_eq!(
            format_contact(&contact, &Theme::plain()),
            "a@b.c\n123\ngithub.com/a"
        );
    }

    #[test]
    fn test_contact_icons_in_styled_theme() {
        let contact = Contact {
            phone: Some("123".to_string()),
            ..Default::default()
        };
        let text = console::strip_ansi_codes(&format_contact(&contact, &Theme::styled())).to_string();
        assert_eq!(text, "📱 123");
    }

    #[test]
    fn test_empty_contact_is_empty_string() {
        assert_eq!(format_contact(&Contact::default(), &Theme::styled()), "");
    }

    #[test]
    fn test_experience_plain_layout() {
        let jobs = vec![job("Dev", "Acme", &["Shipped", "Fixed"]), job("Lead", "Beta", &["Led"])];
        assert_eq!(
            format_experience(&jobs, &Theme::plain()),
            "Dev at Acme (2020 - 2021)\n• Shipped\n• Fixed\n\nLead at Beta (2020 - 2021)\n• Led"
        );
    }

    #[test]
    fn test_job_without_achievements_has_no_stray_line() {
        let jobs = vec![job("Dev", "Acme", &[])];
        assert_eq!(format_experience(&jobs, &Theme::plain()), "Dev at Acme (2020 - 2021)");

        let jobs = vec![job("Dev", "Acme", &[]), job("Lead", "Beta", &[])];
        assert_eq!(
            format_experience(&jobs, &Theme::plain()),
            "Dev at Acme (2020 - 2021)\n\nLead at Beta (2020 - 2021)"
        );
    }

    #[test]
    fn test_skills_keep_order() {
        let skills = vec![
            SkillCategory {
                name: "Cloud".to_string(),
                skills: vec!["AWS".to_string(), "Docker".to_string()],
            },
            SkillCategory {
                name: "Backend".to_string(),
                skills: vec!["Rust".to_string()],
            },
        ];
        assert_eq!(
            format_skills(&skills, &Theme::plain()),
            "Cloud: AWS, Docker\nBackend: Rust"
        );
        let styled = console::strip_ansi_codes(&format_skills(&skills, &Theme::styled())).to_string();
        assert_eq!(styled, "Cloud: AWS • Docker\nBackend: Rust");
    }

    #[test]
    fn test_empty_skills() {
        assert_eq!(format_skills(&[], &Theme::styled()), "");
    }

    #[test]
    fn test_education_lines() {
        let education = vec![
            Education {
                degree: "BSc".to_string(),
                school: "Uni".to_string(),
                year: "2020".to_string(),
            },
            Education {
                degree: "MSc".to_string(),
                school: "Tech".to_string(),
                year: "2022".to_string(),
            },
        ];
        assert_eq!(
            format_education(&education, &Theme::plain()),
            "BSc\nUni (2020)\nMSc\nTech (2022)"
        );
        assert_eq!(format_education(&[], &Theme::plain()), "");
    }
}
