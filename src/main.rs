mod backend;
mod cli;
mod commands;
mod config;
mod error;
mod importer;
mod logging;
mod output;
mod record;
mod source;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
