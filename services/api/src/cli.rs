use crate::commands::{run_check_data, run_lookup, LookupArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use country_matcher::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "country-matcher",
    about = "Resolve free-form country names to ISO 3166 codes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Resolve one or more names against the configured data source
    Lookup(LookupArgs),
    /// Load the configured data source and report what the index would contain
    CheckData,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Lookup(args) => run_lookup(args),
        Command::CheckData => run_check_data(),
    }
}
