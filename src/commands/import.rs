//! kensho-seed import コマンド
//!
//! anime-offline-database のエントリをバックエンドへ一括登録する。
//! `seed` も同じ処理を使い、既定値（プリセット）だけが異なる。

use crate::backend::BackendClient;
use crate::config::{HttpConfig, DEFAULT_BASE_URL, DEFAULT_SOURCE_FILE};
use crate::importer::{ImportOptions, Importer, Pause, ProgressMode};
use crate::output::Reporter;
use crate::source;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
pub struct Args {
    /// anime-offline-database JSON file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SOURCE_FILE)]
    pub file: PathBuf,

    /// Backend base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Number of entries to skip
    #[arg(long)]
    pub offset: Option<usize>,

    /// Maximum number of entries to import
    #[arg(long)]
    pub limit: Option<usize>,

    /// Maximum placeholder episodes created per anime
    #[arg(long)]
    pub episode_cap: Option<u32>,

    /// Progress output style
    #[arg(long, value_enum)]
    pub progress: Option<ProgressMode>,

    /// Pause after every N entries (0 disables)
    #[arg(long, value_name = "N")]
    pub pause_every: Option<usize>,

    /// Pause length in milliseconds
    #[arg(long, value_name = "MS")]
    pub pause_ms: Option<u64>,
}

/// サブコマンドごとの既定値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub offset: usize,
    pub limit: usize,
    pub episode_cap: u32,
    pub progress: ProgressMode,
    pub pause_every: usize,
    pub pause_ms: u64,
}

impl Preset {
    /// 先頭10件を1件ずつ表示しながら登録
    pub const SEED: Preset = Preset {
        offset: 0,
        limit: 10,
        episode_cap: 5,
        progress: ProgressMode::Each,
        pause_every: 0,
        pause_ms: 0,
    };

    /// seed 済みの10件を飛ばして100件を登録
    pub const BULK: Preset = Preset {
        offset: 10,
        limit: 100,
        episode_cap: 3,
        progress: ProgressMode::Periodic,
        pause_every: 20,
        pause_ms: 100,
    };

    /// 引数で上書きしたオプションを作る
    pub fn resolve(&self, args: &Args) -> ImportOptions {
        let pause_every = args.pause_every.unwrap_or(self.pause_every);
        let pause_ms = args.pause_ms.unwrap_or(self.pause_ms);

        ImportOptions {
            offset: args.offset.unwrap_or(self.offset),
            limit: args.limit.unwrap_or(self.limit),
            episode_cap: args.episode_cap.unwrap_or(self.episode_cap),
            progress: args.progress.unwrap_or(self.progress),
            pause: (pause_every > 0 && pause_ms > 0).then(|| Pause {
                every: pause_every,
                duration: Duration::from_millis(pause_ms),
            }),
        }
    }
}

pub async fn run(args: Args) -> Result<(), String> {
    execute(args, Preset::BULK).await
}

/// プリセットを適用して取り込みを実行
pub async fn execute(args: Args, preset: Preset) -> Result<(), String> {
    let options = preset.resolve(&args);

    // 1. ソース読み込み
    let entries = source::load_entries(&args.file).map_err(|e| e.to_string())?;

    let mut reporter = Reporter::stdout(options.progress, options.limit);
    reporter.found(entries.len());

    // 2. ヘルスチェック後に取り込み
    let client = BackendClient::new(&HttpConfig::default(), &args.base_url);
    Importer::new(&client, options)
        .run(&entries, &mut reporter)
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}

#[cfg(test)]
#[path = "import_test.rs"]
mod tests;
