//! @acp:module "Style"
//! @acp:summary "Style descriptors and the terminal/plain themes"
//! @acp:domain cli
//! @acp:layer output
//!
//! Text is decorated by applying a [`StyleSpec`] (a tone plus attributes)
//! through a [`Theme`]. A plain theme leaves text untouched, which lets the
//! same formatters serve both the terminal and the text export.

use console::Style;

/// Named colours of the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Cyan: names, headings, primary borders
    Primary,
    /// Magenta: titles, positions, skill categories
    Secondary,
    /// Yellow: companies, links, skills
    Accent,
    /// White: body text
    Text,
    /// Grey: icons, periods, separators
    Muted,
}

impl Tone {
    fn style(&self) -> Style {
        match self {
            Tone::Primary => Style::new().cyan(),
            Tone::Secondary => Style::new().magenta(),
            Tone::Accent => Style::new().yellow(),
            Tone::Text => Style::new().white(),
            Tone::Muted => Style::new().black().bright(),
        }
    }
}

/// Text attributes layered on top of a tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attr {
    Bold,
    Underline,
}

/// A tone with a set of attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpec {
    pub tone: Tone,
    pub attrs: &'static [Attr],
}

impl StyleSpec {
    pub const fn new(tone: Tone) -> Self {
        Self { tone, attrs: &[] }
    }

    pub const fn with(tone: Tone, attrs: &'static [Attr]) -> Self {
        Self { tone, attrs }
    }

    /// Decorate `text`; emits escapes only when the terminal supports colour
    pub fn apply(&self, text: &str) -> String {
        let style = self.attrs.iter().fold(self.tone.style(), |style, attr| match attr {
            Attr::Bold => style.bold(),
            Attr::Underline => style.underlined(),
        });
        style.apply_to(text).to_string()
    }
}

impl From<Tone> for StyleSpec {
    fn from(tone: Tone) -> Self {
        StyleSpec::new(tone)
    }
}

/// Rendering conventions for one output target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Apply colours and attributes
    pub decorate: bool,
    /// Prefix contact lines with channel icons
    pub contact_icons: bool,
    /// Prefix for each achievement line
    pub bullet: &'static str,
    /// Separator between skills of one category
    pub skill_separator: &'static str,
    /// Wrap the job period in parentheses
    pub bracket_period: bool,
}

impl Theme {
    /// Coloured terminal output
    pub fn styled() -> Self {
        Self {
            decorate: true,
            contact_icons: true,
            bullet: "  • ",
            skill_separator: " • ",
            bracket_period: false,
        }
    }

    /// Undecorated output for the text export
    pub fn plain() -> Self {
        Self {
            decorate: false,
            contact_icons: false,
            bullet: "• ",
            skill_separator: ", ",
            bracket_period: true,
        }
    }

    /// Apply `spec` to `text` under this theme
    pub fn paint(&self, spec: impl Into<StyleSpec>, text: &str) -> String {
        if self.decorate {
            spec.into().apply(text)
        } else {
            text.to_string()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::styled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_leaves_text_untouched() {
        let theme = Theme::plain();
        let spec = StyleSpec::with(Tone::Primary, &[Attr::Bold, Attr::Underline]);
        assert_eq!(theme.paint(spec, "Name"), "Name");
    }

    #[test]
    fn test_styled_theme_keeps_visible_text() {
        let theme = Theme::styled();
        let painted = theme.paint(StyleSpec::with(Tone::Accent, &[Attr::Bold]), "Acme");
        assert_eq!(console::strip_ansi_codes(&painted), "Acme");
    }

    #[test]
    fn test_forced_styling_emits_escapes() {
        let styled = Tone::Primary.style().bold().force_styling(true);
        let painted = styled.apply_to("x").to_string();
        assert!(painted.contains("\u{1b}["));
        assert_eq!(console::measure_text_width(&painted), 1);
    }
}
