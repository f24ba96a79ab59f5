//! Terminal rendering of a [`PageView`].

use atlas_render::{render_pager, Column, RenderError, Renderer, Table, TextMode, Theme, Width};
use serde::Serialize;
use thiserror::Error;

use crate::output::OutputMode;
use crate::serialize::{serialize_structured, to_csv, SerializeError};
use crate::view::PageView;

const PAGE_TEMPLATE: &str = "page";

/// Columns other than "Country" take at most this much, separators included.
const FIXED_COLUMNS_WIDTH: usize = 14 + 12 + 4 + 6;

#[derive(Serialize)]
struct PageContext<'a> {
    #[serde(flatten)]
    view: &'a PageView,
    table: String,
    pager_line: Option<String>,
}

/// Renders page views for a terminal of a given width.
pub struct PageRenderer {
    renderer: Renderer,
    width: usize,
}

impl PageRenderer {
    pub fn new(width: usize) -> Result<Self, RenderError> {
        let mut renderer = Renderer::new(Theme::atlas());
        renderer.add_template(PAGE_TEMPLATE, include_str!("templates/page.jinja"))?;
        Ok(Self { renderer, width })
    }

    pub fn render(&self, view: &PageView, mode: TextMode) -> Result<String, RenderError> {
        let rows: Vec<Vec<String>> = view
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.label(),
                    row.continent.clone(),
                    row.currency.clone(),
                    row.flag.clone(),
                ]
            })
            .collect();

        let context = PageContext {
            view,
            table: self.table().render(&rows),
            pager_line: view.pager.as_ref().map(render_pager),
        };
        let out = self.renderer.render(PAGE_TEMPLATE, &context, mode)?;
        Ok(out.trim_end().to_string())
    }

    /// Renders a bare tagged line (used for prompts and hints).
    pub fn line(&self, tagged: &str, mode: TextMode) -> String {
        self.renderer.theme().tags(mode).process(tagged)
    }

    fn table(&self) -> Table {
        let country_max = self.width.saturating_sub(FIXED_COLUMNS_WIDTH).max(16);
        let country = Width::Bounded {
            min: 7,
            max: country_max,
        };
        Table::new(vec![
            Column::new("Country", country),
            Column::new("Continent", Width::Bounded { min: 9, max: 14 })
                .style("muted"),
            Column::new("Currency", Width::Bounded { min: 8, max: 12 })
                .style("code"),
            Column::new("Flag", Width::Fixed(4)),
        ])
    }
}

#[derive(Debug, Error)]
pub enum PresentError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

/// Turns page views into stdout text for one output mode.
pub struct Presenter {
    mode: OutputMode,
    renderer: PageRenderer,
}

impl Presenter {
    /// `Auto` is resolved once, here.
    pub fn new(mode: OutputMode, width: usize) -> Result<Self, RenderError> {
        Ok(Self {
            mode: mode.resolve_auto(),
            renderer: PageRenderer::new(width)?,
        })
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn page(&self, view: &PageView) -> Result<String, PresentError> {
        match (self.mode.to_text_mode(), self.mode) {
            (Some(text_mode), _) => Ok(self.renderer.render(view, text_mode)?),
            (None, OutputMode::Csv) => Ok(to_csv(&view.rows)?),
            (None, mode) => Ok(serialize_structured(view, mode)?),
        }
    }

    /// A tagged one-liner; structured modes get it as plain text.
    pub fn line(&self, tagged: &str) -> String {
        let text_mode = self.mode.to_text_mode().unwrap_or(TextMode::Plain);
        self.renderer.line(tagged, text_mode)
    }
}
