//! @acp:module "Plain-Text Renderer"
//! @acp:summary "Undecorated resume document for the text export"
//! @acp:domain resume
//! @acp:layer output

use handlebars::Handlebars;
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::format::{format_contact, format_education, format_experience, format_skills};
use crate::record::ResumeRecord;
use crate::style::Theme;

const TEMPLATE_NAME: &str = "resume.txt";

const TEMPLATE: &str = "
{{name}}
{{title}}
{{rule}}

CONTACT
{{contact}}

SUMMARY
{{summary}}

EXPERIENCE
{{experience}}

SKILLS
{{skills}}

EDUCATION
{{education}}
";

/// Values substituted into the export template
#[derive(Debug, Serialize)]
struct PlainDocument<'a> {
    name: &'a str,
    title: &'a str,
    rule: String,
    contact: String,
    summary: &'a str,
    experience: String,
    skills: String,
    education: String,
}

/// Render the full resume, education included, as trimmed plain text
pub fn render_plain(record: &ResumeRecord, config: &Config) -> Result<String> {
    let theme = Theme::plain();
    let document = PlainDocument {
        name: &record.name,
        title: &record.title,
        rule: "=".repeat(config.rule_width),
        contact: format_contact(&record.contact, &theme),
        summary: &record.summary,
        experience: format_experience(&record.experience, &theme),
        skills: format_skills(&record.skills, &theme),
        education: format_education(&record.education, &theme),
    };

    let mut registry = Handlebars::new();
    registry.register_escape_fn(handlebars::no_escape);
    registry.set_strict_mode(true);
    registry.register_template_string(TEMPLATE_NAME, TEMPLATE)?;

    let rendered = registry.render(TEMPLATE_NAME, &document)?;
    Ok(rendered.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Contact, Education, Job, SkillCategory};
    use pretty_assertions::assert_eq;

    fn sample() -> ResumeRecord {
        ResumeRecord {
            name: "Ada Lovelace".to_string(),
            title: "Analyst".to_string(),
            contact: Contact {
                email: Some("ada@example.com".to_string()),
                location: Some("London".to_string()),
                ..Default::default()
            },
            summary: "Writes programs for engines & <machines>.".to_string(),
            experience: vec![Job {
                company: "Babbage & Co".to_string(),
                position: "Programmer".to_string(),
                period: "1842 - 1843".to_string(),
                achievements: vec!["Published notes".to_string()],
            }],
            skills: vec![SkillCategory {
                name: "Math".to_string(),
                skills: vec!["Analysis".to_string(), "Algebra".to_string()],
            }],
            education: vec![Education {
                degree: "Private tutoring".to_string(),
                school: "Home".to_string(),
                year: "1830".to_string(),
            }],
        }
    }

    #[test]
    fn test_plain_document_layout() {
        let config = Config {
            rule_width: 10,
            ..Default::default()
        };
        let expected = "\
Ada Lovelace
Analyst
==========

CONTACT
ada@example.com
London

SUMMARY
Writes programs for engines & <machines>.

EXPERIENCE
Programmer at Babbage & Co (1842 - 1843)
• Published notes

SKILLS
Math: Analysis, Algebra

EDUCATION
Private tutoring
Home (1830)";
        assert_eq!(render_plain(&sample(), &config).unwrap(), expected);
    }

    #[test]
    fn test_plain_has_no_escapes() {
        let text = render_plain(&ResumeRecord::builtin().unwrap(), &Config::default()).unwrap();
        assert!(!text.contains('\u{1b}'));
        assert!(text.contains(&"=".repeat(50)));
    }

    #[test]
    fn test_plain_is_deterministic() {
        let record = ResumeRecord::builtin().unwrap();
        let config = Config::default();
        assert_eq!(
            render_plain(&record, &config).unwrap(),
            render_plain(&record, &config).unwrap()
        );
    }

    #[test]
    fn test_empty_education_keeps_label() {
        let mut record = sample();
        record.education.clear();
        let text = render_plain(&record, &Config::default()).unwrap();
        assert!(text.ends_with("EDUCATION"));
    }
}
