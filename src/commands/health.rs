//! kensho-seed health コマンド

use crate::backend::{AnimeApi, BackendClient};
use crate::config::{HttpConfig, DEFAULT_BASE_URL};
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Backend base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

pub async fn run(args: Args) -> Result<(), String> {
    let client = BackendClient::new(&HttpConfig::default(), &args.base_url);

    client.health().await.map_err(|e| e.to_string())?;

    println!("{} Backend is healthy at {}", "✓".green(), client.base_url());
    Ok(())
}
