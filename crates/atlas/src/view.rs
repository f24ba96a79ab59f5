//! What one render shows, as plain serializable data.
//!
//! [`PageView`] is the single input of both the terminal template and the
//! structured output modes, so `--output json` shows exactly what the table
//! view would.

use atlas_render::PagerControl;
use serde::{Deserialize, Serialize};

use crate::country::{Country, CountryRow};
use crate::session::PageSession;
use crate::source::FetchState;

pub const TITLE: &str = "Countries of the World";
pub const FALLBACK_ERROR: &str = "An unexpected error occurred.";

/// Severity level for status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageLevel {
    /// The theme style used for this level.
    pub fn style_name(&self) -> &'static str {
        match self {
            MessageLevel::Info => "info",
            MessageLevel::Success => "success",
            MessageLevel::Warning => "warning",
            MessageLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.style_name())
    }
}

/// A status line shown under the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub level: MessageLevel,
    pub text: String,
    /// Same as `level`, spelled as a theme style for templates.
    pub style: String,
}

impl Message {
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            style: level.style_name().to_string(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewStatus {
    Loading,
    Error,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub title: String,
    pub status: ViewStatus,
    pub term: String,
    pub total_count: usize,
    pub filtered_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub rows: Vec<CountryRow>,
    /// Present only when there is something to page through.
    pub pager: Option<PagerControl>,
    pub error: Option<String>,
    pub messages: Vec<Message>,
}

impl PageView {
    pub fn build(fetch: &FetchState, session: &PageSession<Country>) -> Self {
        let state = session.state();
        let mut view = Self {
            title: TITLE.to_string(),
            status: ViewStatus::Ready,
            term: session.term().to_string(),
            total_count: session.total_count(),
            filtered_count: session.filtered_count(),
            current_page: state.current_page(),
            total_pages: state.total_pages(),
            page_size: state.page_size(),
            rows: Vec::new(),
            pager: None,
            error: None,
            messages: Vec::new(),
        };

        if fetch.is_loading() {
            view.status = ViewStatus::Loading;
            return view;
        }

        if let Some(err) = fetch.error() {
            let text = err.to_string();
            view.status = ViewStatus::Error;
            view.error = Some(if text.trim().is_empty() {
                FALLBACK_ERROR.to_string()
            } else {
                text
            });
            return view;
        }

        view.rows = session.visible().iter().map(CountryRow::from).collect();

        if session.filtered().is_empty() {
            view.messages.push(Message::warning(format!(
                "No countries match \"{}\".",
                session.term()
            )));
        } else {
            view.pager = Some(PagerControl::new(state, session.max_visible()));
        }

        if session.is_stale() {
            view.messages.push(Message::info(format!(
                "Page {} is past the last page ({}); use `first` or `last`.",
                state.current_page(),
                state.total_pages()
            )));
        }

        view
    }

    pub fn has_error(&self) -> bool {
        self.status == ViewStatus::Error
    }
}
