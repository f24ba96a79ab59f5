//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;
use crate::output::OutputMode;

#[derive(Debug, Parser)]
#[command(name = "atlas", version, about = "Search and page through the world's countries")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Config file (default: <config dir>/atlas/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// GraphQL endpoint to fetch countries from
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Read countries from a JSON snapshot instead of the network
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Auto)]
    pub output: OutputMode,

    /// More log output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one page of countries
    List(ListArgs),
    /// Interactive session reading commands from stdin
    Browse(BrowseArgs),
    /// Print the page window for a current page and page count
    Window(WindowArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Keep countries whose name, code, continent or currency contains TERM
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// Page to show; out-of-range pages are ignored
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Page labels around the current page
    #[arg(long, value_name = "N")]
    pub max_visible: Option<usize>,
}

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Rows per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Page labels around the current page
    #[arg(long, value_name = "N")]
    pub max_visible: Option<usize>,
}

#[derive(Debug, Args)]
pub struct WindowArgs {
    pub current: usize,
    pub total: usize,

    #[arg(long, value_name = "N")]
    pub max_visible: Option<usize>,
}

impl Cli {
    /// Command-line values for the config layering.
    pub fn overrides(&self) -> Overrides {
        let (page_size, max_visible) = match &self.command {
            Command::List(args) => (args.page_size, args.max_visible),
            Command::Browse(args) => (args.page_size, args.max_visible),
            Command::Window(args) => (None, args.max_visible),
        };
        Overrides {
            endpoint: self.global.endpoint.clone(),
            page_size,
            max_visible,
            timeout_secs: self.global.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_flags() {
        let cli = Cli::try_parse_from([
            "atlas", "list", "--search", "an", "--page", "3", "--page-size", "20", "--output", "json",
        ])
        .unwrap();
        assert_eq!(cli.global.output, OutputMode::Json);
        match &cli.command {
            Command::List(args) => {
                assert_eq!(args.search.as_deref(), Some("an"));
                assert_eq!(args.page, 3);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(cli.overrides().page_size, Some(20));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["atlas", "browse", "-vv", "--file", "c.json"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.file, Some(PathBuf::from("c.json")));
    }

    #[test]
    fn window_positional() {
        let cli = Cli::try_parse_from(["atlas", "window", "5", "10", "--max-visible", "7"]).unwrap();
        match cli.command {
            Command::Window(args) => {
                assert_eq!((args.current, args.total), (5, 10));
                assert_eq!(args.max_visible, Some(7));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["atlas", "-q", "-v", "list"]).is_err());
    }
}
