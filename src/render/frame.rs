//! @acp:module "Box Frame"
//! @acp:summary "Bordered, padded boxes around blocks of terminal text"
//! @acp:domain cli
//! @acp:layer output
//!
//! Widths are measured with `console::measure_text_width`, so styled content
//! lines up the same as plain content.

use console::measure_text_width;

use crate::style::{Theme, Tone};

/// Border glyph set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    Round,
    Single,
}

struct BorderChars {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

impl BorderStyle {
    fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::Round => BorderChars {
                top_left: "╭",
                top_right: "╮",
                bottom_left: "╰",
                bottom_right: "╯",
                horizontal: "─",
                vertical: "│",
            },
            BorderStyle::Single => BorderChars {
                top_left: "┌",
                top_right: "┐",
                bottom_left: "└",
                bottom_right: "┘",
                horizontal: "─",
                vertical: "│",
            },
        }
    }
}

/// Horizontal placement of each content line inside the box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// Space around or inside a box; top/bottom in lines, left/right in columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacing {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Spacing {
    /// `n` lines above and below, `3n` columns at the sides
    pub const fn uniform(n: usize) -> Self {
        Self {
            top: n,
            right: n * 3,
            bottom: n,
            left: n * 3,
        }
    }

    /// Only `n` lines above
    pub const fn top(n: usize) -> Self {
        Self {
            top: n,
            right: 0,
            bottom: 0,
            left: 0,
        }
    }
}

/// Box layout options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxOptions {
    pub padding: Spacing,
    pub margin: Spacing,
    pub border: BorderStyle,
    pub border_tone: Tone,
    pub align: Align,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            padding: Spacing::default(),
            margin: Spacing::default(),
            border: BorderStyle::Round,
            border_tone: Tone::Primary,
            align: Align::Left,
        }
    }
}

/// Draw a box around `content`
pub fn frame(content: &str, options: &BoxOptions, theme: &Theme) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let content_width = lines
        .iter()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or(0);

    let padding = options.padding;
    let margin = options.margin;
    let inner_width = content_width + padding.left + padding.right;
    let chars = options.border.chars();
    let indent = " ".repeat(margin.left);
    let vertical = theme.paint(options.border_tone, chars.vertical);
    let horizontal = chars.horizontal.repeat(inner_width);

    let mut out: Vec<String> = Vec::new();
    out.extend(std::iter::repeat(String::new()).take(margin.top));

    out.push(format!(
        "{}{}",
        indent,
        theme.paint(
            options.border_tone,
            &format!("{}{}{}", chars.top_left, horizontal, chars.top_right)
        )
    ));

    let blank = format!("{}{}{}{}", indent, vertical, " ".repeat(inner_width), vertical);
    out.extend(std::iter::repeat(blank.clone()).take(padding.top));

    for line in &lines {
        let gap = content_width - measure_text_width(line);
        let (before, after) = match options.align {
            Align::Left => (0, gap),
            Align::Center => (gap / 2, gap - gap / 2),
        };
        out.push(format!(
            "{}{}{}{}{}{}",
            indent,
            vertical,
            " ".repeat(padding.left + before),
            line,
            " ".repeat(after + padding.right),
            vertical
        ));
    }

    out.extend(std::iter::repeat(blank).take(padding.bottom));

    out.push(format!(
        "{}{}",
        indent,
        theme.paint(
            options.border_tone,
            &format!("{}{}{}", chars.bottom_left, horizontal, chars.bottom_right)
        )
    ));
    out.extend(std::iter::repeat(String::new()).take(margin.bottom));

    out.join("\n")
}
