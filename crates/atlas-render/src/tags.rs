//! Style tag processing: `[name]content[/name]`.
//!
//! Tag names follow the pattern `[a-z_][a-z0-9_-]*`. Only names known to the
//! processor are treated as tags; anything else, including `[3]` or `[x y]`,
//! passes through as literal text.
//!
//! Text that must never be read as markup (search terms, upstream data) goes
//! through [`escape`] first: `\[` renders as a literal `[` and `\\` as `\`.

use std::collections::HashMap;

use console::Style;

/// How matched tags are transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTransform {
    /// Apply the associated style as ANSI codes.
    Apply,
    /// Remove tags, keep content.
    Remove,
    /// Keep tags as-is (debug).
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Open(&'a str),
    Close(&'a str),
}

/// A tag processor bound to a set of styles and a transform.
///
/// ```
/// use atlas_render::{StyleTags, TagTransform};
/// use console::Style;
/// use std::collections::HashMap;
///
/// let mut styles = HashMap::new();
/// styles.insert("current".to_string(), Style::new().bold());
///
/// let tags = StyleTags::new(styles, TagTransform::Remove);
/// assert_eq!(tags.process("1 [current]2[/current] 3"), "1 2 3");
/// assert_eq!(tags.process("[unknown]x[/unknown]"), "[unknown]x[/unknown]");
/// ```
#[derive(Debug, Clone)]
pub struct StyleTags {
    styles: HashMap<String, Style>,
    transform: TagTransform,
}

impl StyleTags {
    /// Creates a processor for the given styles.
    pub fn new(styles: HashMap<String, Style>, transform: TagTransform) -> Self {
        Self { styles, transform }
    }

    /// Returns the transform this processor applies.
    pub fn transform(&self) -> TagTransform {
        self.transform
    }

    /// Processes all known tags in `input`.
    ///
    /// Unclosed known tags style (or strip) through to the end of the input.
    /// A close tag that does not match the innermost open tag is literal.
    pub fn process(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut stack: Vec<&str> = Vec::new();

        for token in tokenize(input) {
            match token {
                Token::Text(text) => self.push_text(&mut output, text, &stack),
                Token::Open(name) if self.styles.contains_key(name) => {
                    if self.transform == TagTransform::Keep {
                        push_tag(&mut output, name, false);
                    }
                    stack.push(name);
                }
                Token::Close(name) if stack.last() == Some(&name) => {
                    stack.pop();
                    if self.transform == TagTransform::Keep {
                        push_tag(&mut output, name, true);
                    }
                }
                Token::Open(name) => {
                    let literal = format!("[{}]", name);
                    self.push_text(&mut output, &literal, &stack);
                }
                Token::Close(name) => {
                    let literal = format!("[/{}]", name);
                    self.push_text(&mut output, &literal, &stack);
                }
            }
        }

        output
    }

    fn push_text(&self, output: &mut String, text: &str, stack: &[&str]) {
        if text.is_empty() {
            return;
        }
        if self.transform != TagTransform::Apply || stack.is_empty() {
            output.push_str(text);
            return;
        }

        // Innermost style first, outer styles wrap it.
        let mut styled = text.to_string();
        for name in stack.iter().rev() {
            if let Some(style) = self.styles.get(*name) {
                styled = style
                    .clone()
                    .force_styling(true)
                    .apply_to(styled)
                    .to_string();
            }
        }
        output.push_str(&styled);
    }
}

/// Escapes `text` so that no part of it is read as a tag.
///
/// ```
/// use atlas_render::{escape, Theme, TextMode};
///
/// let tags = Theme::atlas().tags(TextMode::Plain);
/// assert_eq!(tags.process(&escape("[title]x")), "[title]x");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '[' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn push_tag(output: &mut String, name: &str, closing: bool) {
    output.push('[');
    if closing {
        output.push('/');
    }
    output.push_str(name);
    output.push(']');
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = input;

    while let Some(pos) = rest.find(['[', '\\']) {
        if pos > 0 {
            tokens.push(Token::Text(&rest[..pos]));
        }
        let candidate = &rest[pos..];
        if let Some(escaped) = candidate.strip_prefix('\\') {
            match escaped.chars().next() {
                Some(c @ ('[' | '\\')) => {
                    tokens.push(Token::Text(&escaped[..c.len_utf8()]));
                    rest = &escaped[c.len_utf8()..];
                }
                _ => {
                    tokens.push(Token::Text(&candidate[..1]));
                    rest = escaped;
                }
            }
            continue;
        }
        match parse_tag(candidate) {
            Some((token, len)) => {
                tokens.push(token);
                rest = &candidate[len..];
            }
            None => {
                tokens.push(Token::Text(&candidate[..1]));
                rest = &candidate[1..];
            }
        }
    }
    if !rest.is_empty() {
        tokens.push(Token::Text(rest));
    }

    tokens
}

/// Parses a tag at the start of `s` (which begins with `[`).
fn parse_tag(s: &str) -> Option<(Token<'_>, usize)> {
    let close = s.find(']')?;
    let inner = &s[1..close];
    let (closing, name) = match inner.strip_prefix('/') {
        Some(name) => (true, name),
        None => (false, inner),
    };
    if !is_valid_name(name) {
        return None;
    }
    let token = if closing {
        Token::Close(name)
    } else {
        Token::Open(name)
    };
    Some((token, close + 1))
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}
