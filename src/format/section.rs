//! @acp:module "Section Composer"
//! @acp:summary "Titled, ruled wrapper around a formatted body"
//! @acp:domain resume
//! @acp:layer output

use crate::style::{Attr, StyleSpec, Theme, Tone};

/// Extra rule characters past the title length
pub const SECTION_RULE_PADDING: usize = 5;

const SECTION_HEADER: StyleSpec = StyleSpec::with(Tone::Primary, &[Attr::Bold]);

/// Wrap `content` under an upper-cased, underlined title.
///
/// `content` is appended verbatim after the rule.
pub fn create_section(title: &str, content: &str, theme: &Theme) -> String {
    let heading = title.to_uppercase();
    let rule = "─".repeat(title.chars().count() + SECTION_RULE_PADDING);

    format!(
        "\n{}\n{}\n{}",
        theme.paint(SECTION_HEADER, &heading),
        theme.paint(SECTION_HEADER, &rule),
        content
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_layout() {
        assert_eq!(
            create_section("Skills", "Rust", &Theme::plain()),
            "\nSKILLS\n───────────\nRust"
        );
    }

    #[test]
    fn test_rule_tracks_title_length() {
        let section = create_section("Contact", "", &Theme::plain());
        let rule = section.lines().nth(2).unwrap();
        assert_eq!(rule.chars().count(), "Contact".len() + SECTION_RULE_PADDING);
    }

    #[test]
    fn test_content_only_changes_tail() {
        let theme = Theme::styled();
        let a = create_section("Summary", "first body", &theme);
        let b = create_section("Summary", "second body\nwith two lines", &theme);

        let prefix_a = a.strip_suffix("first body").unwrap();
        let prefix_b = b.strip_suffix("second body\nwith two lines").unwrap();
        assert_eq!(prefix_a, prefix_b);
        assert_ne!(a, b);
    }
}
