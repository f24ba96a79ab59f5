//! Named style collections.

use std::collections::HashMap;

use console::Style;

use crate::mode::TextMode;
use crate::tags::{StyleTags, TagTransform};

/// A named collection of styles used by templates via tags.
///
/// ```
/// use atlas_render::{TextMode, Theme};
/// use console::Style;
///
/// let theme = Theme::new().add("flag", Style::new().dim());
/// assert!(theme.has("flag"));
/// assert_eq!(theme.tags(TextMode::Plain).process("[flag]x[/flag]"), "x");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in theme for the country directory views.
    pub fn atlas() -> Self {
        Self::new()
            .add("title", Style::new().bold().underlined())
            .add("header", Style::new().bold())
            .add("muted", Style::new().dim())
            .add("code", Style::new().cyan())
            .add("current", Style::new().bold().reverse())
            .add("page", Style::new())
            .add("ellipsis", Style::new().dim())
            .add("nav", Style::new().blue())
            .add("disabled", Style::new().dim())
            .add("spinner", Style::new().magenta())
            .add("info", Style::new().cyan())
            .add("success", Style::new().green())
            .add("warning", Style::new().yellow())
            .add("error", Style::new().red().bold())
    }

    /// Adds (or replaces) a named style.
    pub fn add(mut self, name: impl Into<String>, style: Style) -> Self {
        self.styles.insert(name.into(), style);
        self
    }

    /// Returns `true` if the theme defines `name`.
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Builds a tag processor for the given mode.
    pub fn tags(&self, mode: TextMode) -> StyleTags {
        let transform = match mode {
            TextMode::Styled => TagTransform::Apply,
            TextMode::Plain => TagTransform::Remove,
            TextMode::Debug => TagTransform::Keep,
        };
        StyleTags::new(self.styles.clone(), transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atlas_theme_covers_message_levels() {
        let theme = Theme::atlas();
        for name in ["info", "success", "warning", "error"] {
            assert!(theme.has(name), "missing {name}");
        }
    }

    #[test]
    fn mode_selects_transform() {
        let theme = Theme::atlas();
        assert_eq!(theme.tags(TextMode::Styled).transform(), TagTransform::Apply);
        assert_eq!(theme.tags(TextMode::Plain).transform(), TagTransform::Remove);
        assert_eq!(theme.tags(TextMode::Debug).transform(), TagTransform::Keep);
    }
}
