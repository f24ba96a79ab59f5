//! Column layout for record tables.
//!
//! A [`Table`] lays out plain-text cells into left-aligned columns and marks
//! the result up with style tags. Measuring and padding happen before tags
//! are added, so styling never disturbs the alignment. Cell text is escaped,
//! so brackets in the data never turn into tags.
//!
//! ```
//! use atlas_render::{Column, Table, TextMode, Theme, Width};
//!
//! let table = Table::new(vec![
//!     Column::new("Country", Width::Bounded { min: 8, max: 30 }),
//!     Column::new("Code", Width::Fixed(4)),
//! ]);
//! let rows = vec![vec!["Chile".to_string(), "CL".to_string()]];
//! let out = Theme::atlas().tags(TextMode::Plain).process(&table.render(&rows));
//!
//! let lines: Vec<&str> = out.lines().collect();
//! assert_eq!(lines[0], "Country   Code");
//! assert_eq!(lines[2], "Chile     CL");
//! ```

use crate::tags::escape;
use crate::text::{display_width, pad_right, truncate_end};

/// How a column's width is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Always exactly this many columns.
    Fixed(usize),
    /// Fit the widest cell (header included), clamped to `[min, max]`.
    Bounded { min: usize, max: usize },
}

impl Width {
    fn resolve(self, content: usize) -> usize {
        match self {
            Width::Fixed(w) => w,
            Width::Bounded { min, max } => content.clamp(min, max.max(min)),
        }
    }
}

/// A table column definition.
#[derive(Debug, Clone)]
pub struct Column {
    header: String,
    width: Width,
    style: Option<String>,
}

impl Column {
    pub fn new(header: impl Into<String>, width: Width) -> Self {
        Self {
            header: header.into(),
            width,
            style: None,
        }
    }

    /// Wraps every body cell of this column in the named style tag.
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }
}

const SEPARATOR: &str = "  ";
const ELLIPSIS: &str = "…";

/// Lays out rows of cells under a header and a rule.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Resolved width of every column for the given rows.
    pub fn widths(&self, rows: &[Vec<String>]) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let content = rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| display_width(cell))
                    .chain(std::iter::once(display_width(&col.header)))
                    .max()
                    .unwrap_or(0);
                col.width.resolve(content)
            })
            .collect()
    }

    /// Renders header, rule and rows, one line each, joined with `\n`.
    ///
    /// Missing cells render empty. Trailing whitespace is not emitted.
    pub fn render(&self, rows: &[Vec<String>]) -> String {
        let widths = self.widths(rows);
        let mut lines = Vec::with_capacity(rows.len() + 2);

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        lines.push(self.line(&headers, &widths, |_| Some("header")));

        let total = widths.iter().sum::<usize>()
            + display_width(SEPARATOR) * widths.len().saturating_sub(1);
        lines.push(format!("[muted]{}[/muted]", "─".repeat(total)));

        for row in rows {
            lines.push(self.line(row, &widths, |col| col.style.as_deref()));
        }

        lines.join("\n")
    }

    fn line<'c>(
        &'c self,
        cells: &[String],
        widths: &[usize],
        style_for: impl Fn(&'c Column) -> Option<&'c str>,
    ) -> String {
        let last = self.columns.len().saturating_sub(1);
        let parts: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let raw = cells.get(i).map(String::as_str).unwrap_or("");
                let text = truncate_end(raw, widths[i], ELLIPSIS);
                let laid_out = if i == last {
                    escape(&text)
                } else {
                    escape(&pad_right(&text, widths[i]))
                };
                match style_for(col) {
                    Some(style) if !raw.is_empty() => {
                        // Keep padding outside the tag so trimming still works.
                        let trimmed = laid_out.trim_end();
                        let pad = &laid_out[trimmed.len()..];
                        format!("[{style}]{trimmed}[/{style}]{pad}")
                    }
                    _ => laid_out,
                }
            })
            .collect();

        parts.join(SEPARATOR).trim_end().to_string()
    }
}
