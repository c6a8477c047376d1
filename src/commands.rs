use crate::cli::Command;

pub mod health;
pub mod import;
pub mod seed;

pub async fn dispatch(cli: crate::cli::Cli) -> Result<(), String> {
    match cli.command {
        Command::Seed(args) => seed::run(args).await,
        Command::Import(args) => import::run(args).await,
        Command::Health(args) => health::run(args).await,
    }
}
