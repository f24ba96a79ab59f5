//! Command handlers.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use atlas_pager::page_window_with;
use atlas_render::{render_window, terminal_width};

use crate::browse::Browser;
use crate::cli::{Cli, Command, GlobalArgs, ListArgs, WindowArgs};
use crate::config::Config;
use crate::country::Country;
use crate::logging;
use crate::render::Presenter;
use crate::serialize::serialize_structured;
use crate::session::PageSession;
use crate::source::{CountrySource, FetchState, FileSource, GraphQlSource};
use crate::view::PageView;

const FALLBACK_WIDTH: usize = 100;

pub fn run(cli: Cli) -> Result<ExitCode> {
    logging::init(cli.global.verbose, cli.global.quiet);

    let config = Config::load(cli.global.config.as_deref(), &cli.overrides())
        .context("failed to load configuration")?;
    let presenter = Presenter::new(cli.global.output, terminal_width(FALLBACK_WIDTH))?;

    match &cli.command {
        Command::List(args) => list(args, &cli.global, &config, &presenter),
        Command::Browse(_) => browse(&cli.global, &config, &presenter),
        Command::Window(args) => window(args, &config, &presenter),
    }
}

fn source(global: &GlobalArgs, config: &Config) -> Box<dyn CountrySource> {
    match &global.file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(GraphQlSource::new(config.endpoint.clone(), config.timeout())),
    }
}

fn session(config: &Config, countries: &[Country]) -> Result<PageSession<Country>> {
    let mut session = PageSession::new(config.page_size)?.with_max_visible(config.max_visible);
    session.load(countries.to_vec());
    Ok(session)
}

fn exit_code(fetch: &FetchState) -> ExitCode {
    if fetch.error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn list(
    args: &ListArgs,
    global: &GlobalArgs,
    config: &Config,
    presenter: &Presenter,
) -> Result<ExitCode> {
    let fetch = FetchState::resolve(source(global, config).as_ref());
    let mut session = session(config, fetch.countries())?;

    if let Some(term) = &args.search {
        session.search(term);
    }
    if args.page != session.state().current_page() && !session.change_page(args.page) {
        tracing::warn!(
            page = args.page,
            total = session.state().total_pages(),
            "requested page does not exist, showing page 1"
        );
    }

    let view = PageView::build(&fetch, &session);
    println!("{}", presenter.page(&view)?);
    Ok(exit_code(&fetch))
}

// Page size and window size from `browse` flags arrive through the config.
fn browse(global: &GlobalArgs, config: &Config, presenter: &Presenter) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let source = source(global, config);
    if !presenter.mode().is_structured() {
        let empty = session(config, &[])?;
        let loading = PageView::build(&FetchState::Loading, &empty);
        writeln!(out, "{}", presenter.page(&loading)?)?;
    }

    let fetch = FetchState::resolve(source.as_ref());
    let session = session(config, fetch.countries())?;

    let stdin = io::stdin();
    Browser::new(session, &fetch, presenter).run(stdin.lock(), &mut out)?;
    Ok(exit_code(&fetch))
}

fn window(args: &WindowArgs, config: &Config, presenter: &Presenter) -> Result<ExitCode> {
    if args.total == 0 {
        bail!("total must be at least 1");
    }
    if !(1..=args.total).contains(&args.current) {
        bail!("current must be between 1 and {}", args.total);
    }

    let entries = page_window_with(args.current, args.total, config.max_visible);
    let text = if presenter.mode().is_structured() {
        serialize_structured(&entries, presenter.mode())?
    } else {
        presenter.line(&render_window(&entries, args.current))
    };
    println!("{}", text);
    Ok(ExitCode::SUCCESS)
}
