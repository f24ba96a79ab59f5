//! The `--output` flag.

use atlas_render::TextMode;
use clap::ValueEnum;

/// How a page is written to stdout.
///
/// - `auto`: `term` on a terminal, `text` when piped
/// - `term`: styled table
/// - `text`: plain table, no escape codes
/// - `term-debug`: style tags left visible as `[name]text[/name]`
/// - `json`, `yaml`, `xml`, `csv`: the page data, no table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    #[default]
    Auto,
    Term,
    Text,
    TermDebug,
    Json,
    Yaml,
    Xml,
    Csv,
}

impl OutputMode {
    pub fn is_structured(&self) -> bool {
        matches!(
            self,
            OutputMode::Json | OutputMode::Yaml | OutputMode::Xml | OutputMode::Csv
        )
    }

    /// Resolves `Auto` from whether stdout is attended.
    pub fn resolve_auto(&self) -> OutputMode {
        self.resolve_with(console::user_attended())
    }

    fn resolve_with(&self, attended: bool) -> OutputMode {
        match self {
            OutputMode::Auto if attended => OutputMode::Term,
            OutputMode::Auto => OutputMode::Text,
            other => *other,
        }
    }

    /// The tag mode for template output; `None` for structured modes.
    pub fn to_text_mode(&self) -> Option<TextMode> {
        match self.resolve_auto() {
            OutputMode::Term => Some(TextMode::Styled),
            OutputMode::Text => Some(TextMode::Plain),
            OutputMode::TermDebug => Some(TextMode::Debug),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_follows_terminal() {
        assert_eq!(OutputMode::Auto.resolve_with(true), OutputMode::Term);
        assert_eq!(OutputMode::Auto.resolve_with(false), OutputMode::Text);
        assert_eq!(OutputMode::Json.resolve_with(true), OutputMode::Json);
    }

    #[test]
    fn text_modes() {
        assert_eq!(OutputMode::Term.to_text_mode(), Some(TextMode::Styled));
        assert_eq!(OutputMode::Text.to_text_mode(), Some(TextMode::Plain));
        assert_eq!(OutputMode::TermDebug.to_text_mode(), Some(TextMode::Debug));
        assert_eq!(OutputMode::Csv.to_text_mode(), None);
    }

    #[test]
    fn flag_spelling() {
        let mode = OutputMode::from_str("term-debug", false).unwrap();
        assert_eq!(mode, OutputMode::TermDebug);
        assert!(OutputMode::Yaml.is_structured());
        assert!(!OutputMode::Auto.is_structured());
    }
}
