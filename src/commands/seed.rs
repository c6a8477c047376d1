//! kensho-seed seed コマンド

use super::import::{execute, Args, Preset};

pub async fn run(args: Args) -> Result<(), String> {
    execute(args, Preset::SEED).await
}
