//! @acp:module "Help Renderer"
//! @acp:summary "Usage text for the resume flags"
//! @acp:domain cli
//! @acp:layer output

use crate::style::{Attr, StyleSpec, Theme, Tone};

/// Flags and their descriptions, in display order
pub const FLAGS: &[(&str, &str)] = &[
    ("--help, -h", "Show this help message"),
    ("--contact", "Show contact information only"),
    ("--skills", "Show skills only"),
    ("--save", "Save resume as text file"),
];

const FLAG_COLUMN: usize = 15;

pub fn render_help(theme: &Theme) -> String {
    let mut lines = vec![
        String::new(),
        theme.paint(
            StyleSpec::with(Tone::Primary, &[Attr::Bold]),
            "Terminal Resume",
        ),
        String::new(),
        theme.paint(Tone::Secondary, "Available commands:"),
    ];

    for (flag, description) in FLAGS {
        lines.push(format!(
            "  {}{}",
            theme.paint(Tone::Accent, &format!("{:<width$}", flag, width = FLAG_COLUMN)),
            description
        ));
    }

    lines.push(String::new());
    lines.push(theme.paint(Tone::Muted, "Run without arguments to see full resume."));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_flag() {
        let text = render_help(&Theme::plain());
        for (flag, description) in FLAGS {
            assert!(text.contains(flag));
            assert!(text.contains(description));
        }
    }

    #[test]
    fn test_descriptions_align() {
        let text = render_help(&Theme::plain());
        let columns: Vec<usize> = FLAGS
            .iter()
            .map(|(_, description)| {
                let line = text.lines().find(|l| l.contains(description)).unwrap();
                line.find(description).unwrap()
            })
            .collect();
        assert!(columns.iter().all(|&c| c == 2 + FLAG_COLUMN));
    }
}
