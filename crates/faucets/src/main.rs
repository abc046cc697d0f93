use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod analytics;
mod browse;
mod catalog;
mod error;
mod filters;
mod list;
mod logos;
mod mcp;
mod options;
mod prelude;
mod report;
mod show;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Search, filter and sort blockchain testnet faucets"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Faucet catalog JSON file to use instead of the built-in one
    #[clap(long, env = "FAUCETS_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// Whether to display additional information.
    #[clap(long, env = "FAUCETS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// List faucets matching the given filters
    List(crate::list::ListOptions),

    /// Show a single faucet
    Show(crate::show::ShowOptions),

    /// List the values each filter accepts
    Options(crate::options::OptionsOptions),

    /// Print the logo candidates for a chain or asset
    Logos(crate::logos::LogosOptions),

    /// Print the "report a faucet" form link for a filter selection
    ReportUrl(crate::report::ReportOptions),

    /// Browse the directory interactively
    Browse(crate::browse::BrowseOptions),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::List(options) => crate::list::run(options, app.global).await,
        SubCommands::Show(options) => crate::show::run(options, app.global).await,
        SubCommands::Options(options) => crate::options::run(options, app.global).await,
        SubCommands::Logos(options) => crate::logos::run(options, app.global).await,
        SubCommands::ReportUrl(options) => crate::report::run(options, app.global).await,
        SubCommands::Browse(options) => crate::browse::run(options, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
