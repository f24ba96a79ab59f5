use atlas_pager::{page_window, PageEntry};
use atlas_render::text::{display_width, truncate_end};
use atlas_render::{escape, render_window, TextMode, Theme};
use proptest::prelude::*;

fn styles() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["title", "muted", "current", "warning", "error"])
}

proptest! {
    #[test]
    fn plain_text_without_markup_is_untouched(text in "[^\\[\\]\\\\]{0,40}") {
        let theme = Theme::atlas();
        for mode in [TextMode::Styled, TextMode::Plain, TextMode::Debug] {
            prop_assert_eq!(theme.tags(mode).process(&text), text.clone());
        }
    }

    #[test]
    fn styled_minus_ansi_equals_plain(
        parts in prop::collection::vec((styles(), "[a-zA-Z0-9 ]{0,10}"), 0..6)
    ) {
        let tagged: String = parts
            .iter()
            .map(|(style, text)| format!("[{style}]{text}[/{style}]"))
            .collect();
        let theme = Theme::atlas();
        let styled = theme.tags(TextMode::Styled).process(&tagged);
        let plain = theme.tags(TextMode::Plain).process(&tagged);
        prop_assert_eq!(console::strip_ansi_codes(&styled).to_string(), plain);
        prop_assert_eq!(theme.tags(TextMode::Debug).process(&tagged), tagged);
    }

    #[test]
    fn escaped_text_renders_verbatim(text in "[a-z\\[\\]/\\\\ ]{0,40}") {
        let theme = Theme::atlas();
        let wrapped = format!("[warning]{}[/warning]", escape(&text));
        prop_assert_eq!(theme.tags(TextMode::Plain).process(&wrapped), text.clone());
        let styled = theme.tags(TextMode::Styled).process(&wrapped);
        prop_assert_eq!(console::strip_ansi_codes(&styled).to_string(), text);
    }

    #[test]
    fn truncation_never_exceeds_width(text in "[a-zA-Zé日本 ]{0,30}", width in 0usize..20) {
        let out = truncate_end(&text, width, "…");
        prop_assert!(display_width(&out) <= width);
        if display_width(&text) <= width {
            prop_assert_eq!(out, text);
        }
    }

    #[test]
    fn window_line_highlights_exactly_current(total in 1usize..60, pick in 0usize..60) {
        let current = pick % total + 1;
        let window = page_window(current, total);
        let line = render_window(&window, current);
        prop_assert_eq!(line.matches("[current]").count(), 1);
        let numbers = window.iter().filter(|e| !e.is_ellipsis()).count();
        prop_assert_eq!(line.matches("[page]").count(), numbers - 1);
        let ellipses = window.iter().filter(|e| matches!(e, PageEntry::Ellipsis)).count();
        prop_assert_eq!(line.matches('…').count(), ellipses);
    }
}
