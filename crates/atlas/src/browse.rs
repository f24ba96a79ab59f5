//! Line-oriented interactive session.
//!
//! Each input line is one user event. The page is re-rendered after every
//! event that changed something.

use std::io::{BufRead, Write};

use anyhow::Result;
use atlas_render::escape;

use crate::country::Country;
use crate::render::Presenter;
use crate::session::PageSession;
use crate::source::FetchState;
use crate::view::PageView;

pub const HELP: &str = "\
[header]Commands[/header]
  [code]/TERM[/code], [code]search TERM[/code]   filter by name, code, continent or currency (empty clears)
  [code]n[/code], [code]next[/code]               next page
  [code]p[/code], [code]prev[/code]               previous page
  [code]first[/code], [code]last[/code]           jump to an end
  [code]N[/code], [code]page N[/code]             go to page N
  [code]size N[/code]                 rows per page
  [code]help[/code]                   this text
  [code]q[/code], [code]quit[/code]               leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    Next,
    Previous,
    First,
    Last,
    Page(usize),
    PageSize(usize),
    Redraw,
    Help,
    Quit,
}

/// Parses one input line. `Err` carries a hint for the user.
pub fn parse_command(line: &str) -> std::result::Result<BrowseCommand, String> {
    let line = line.trim_end_matches(['\n', '\r']);
    if let Some(term) = line.trim_start().strip_prefix('/') {
        return Ok(BrowseCommand::Search(term.to_string()));
    }

    let trimmed = line.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    let number = |what: &str| {
        rest.parse::<usize>()
            .map_err(|_| format!("`{word}` needs {what}, e.g. `{word} 2`"))
    };

    let command = match word {
        "" => BrowseCommand::Redraw,
        "search" => BrowseCommand::Search(rest.to_string()),
        "n" | "next" => BrowseCommand::Next,
        "p" | "prev" | "previous" => BrowseCommand::Previous,
        "first" => BrowseCommand::First,
        "last" => BrowseCommand::Last,
        "page" => BrowseCommand::Page(number("a page number")?),
        "size" => BrowseCommand::PageSize(number("a page size")?),
        "help" | "?" => BrowseCommand::Help,
        "q" | "quit" | "exit" => BrowseCommand::Quit,
        other => match other.parse::<usize>() {
            Ok(page) if rest.is_empty() => BrowseCommand::Page(page),
            _ => return Err(format!("unknown command `{trimmed}`; type `help`")),
        },
    };
    Ok(command)
}

/// Drives a session from `input` until `quit` or end of input.
pub struct Browser<'a> {
    session: PageSession<Country>,
    fetch: &'a FetchState,
    presenter: &'a Presenter,
}

impl<'a> Browser<'a> {
    pub fn new(
        session: PageSession<Country>,
        fetch: &'a FetchState,
        presenter: &'a Presenter,
    ) -> Self {
        Self {
            session,
            fetch,
            presenter,
        }
    }

    pub fn session(&self) -> &PageSession<Country> {
        &self.session
    }

    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        self.draw(&mut output)?;

        let mut line = String::new();
        loop {
            write!(output, "{}", self.presenter.line("[muted]>[/muted] "))?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            match parse_command(&line) {
                Ok(BrowseCommand::Quit) => break,
                Ok(BrowseCommand::Help) => writeln!(output, "{}", self.presenter.line(HELP))?,
                Ok(command) => {
                    tracing::debug!(?command, "browse command");
                    match self.apply(&command) {
                        None => self.draw(&mut output)?,
                        Some(hint) => writeln!(output, "{}", self.warn(&hint))?,
                    }
                }
                Err(hint) => writeln!(output, "{}", self.warn(&hint))?,
            }
        }
        Ok(())
    }

    /// Applies one event; returns a hint when nothing changed.
    pub fn apply(&mut self, command: &BrowseCommand) -> Option<String> {
        let session = &mut self.session;
        let total = session.state().total_pages();
        let moved = match command {
            BrowseCommand::Search(term) => {
                session.search(term);
                true
            }
            BrowseCommand::Next => session.next_page(),
            BrowseCommand::Previous => session.previous_page(),
            BrowseCommand::First => session.first_page(),
            BrowseCommand::Last => session.last_page(),
            BrowseCommand::Page(page) => {
                if !session.change_page(*page) {
                    return Some(format!("no page {page}; pages are 1 to {total}"));
                }
                true
            }
            BrowseCommand::PageSize(size) => {
                if let Err(err) = session.set_page_size(*size) {
                    return Some(err.to_string());
                }
                true
            }
            BrowseCommand::Redraw => true,
            BrowseCommand::Help | BrowseCommand::Quit => false,
        };

        if moved {
            None
        } else if session.is_stale() {
            let state = session.state();
            Some(format!(
                "page {} is past the last page ({}); use `first` or `last`",
                state.current_page(),
                state.total_pages()
            ))
        } else {
            Some(match command {
                BrowseCommand::Next => "already on the last page".to_string(),
                BrowseCommand::Previous => "already on the first page".to_string(),
                _ => "already there".to_string(),
            })
        }
    }

    fn draw<W: Write>(&self, output: &mut W) -> Result<()> {
        let view = PageView::build(self.fetch, &self.session);
        writeln!(output, "{}", self.presenter.page(&view)?)?;
        Ok(())
    }

    fn warn(&self, hint: &str) -> String {
        self.presenter
            .line(&format!("[warning]{}[/warning]", escape(hint)))
    }
}
