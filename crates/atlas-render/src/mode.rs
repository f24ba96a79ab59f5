/// How style tags are processed in rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// Apply styles (ANSI escape codes).
    Styled,
    /// Strip style tags (plain text output).
    Plain,
    /// Keep style tags visible as `[name]text[/name]`.
    Debug,
}
