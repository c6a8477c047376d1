//! 取り込みループ
//!
//! 選択したスライスのエントリを1件ずつ順番にバックエンドへ送る。
//! ヘルスチェックの失敗だけが致命的で、エントリ単位の失敗はカウンタに吸収される。

use crate::backend::AnimeApi;
use crate::error::SeedError;
use crate::output::Reporter;
use crate::record::{EpisodeBatch, ImportRecord};
use crate::source::{select_slice, SourceEntry};
use clap::ValueEnum;
use std::io::Write;
use std::time::Duration;

/// 進捗の表示方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProgressMode {
    /// エントリごとに1行
    Each,
    /// 成功10件ごとに1行
    Periodic,
}

/// 一定件数ごとの待機
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pause {
    pub every: usize,
    pub duration: Duration,
}

/// 取り込みオプション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    pub offset: usize,
    pub limit: usize,
    /// 1アニメあたりのエピソード上限
    pub episode_cap: u32,
    pub progress: ProgressMode,
    pub pause: Option<Pause>,
}

/// 成功・失敗の件数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounters {
    pub success: usize,
    pub failure: usize,
}

impl RunCounters {
    pub fn total(&self) -> usize {
        self.success + self.failure
    }
}

/// エントリ単位の失敗
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryFailure {
    /// 201 以外のステータス
    Rejected { status: u16, message: String },
    /// 接続エラーなど
    Transport(String),
}

impl From<SeedError> for EntryFailure {
    fn from(error: SeedError) -> Self {
        match error {
            SeedError::Api { status, message } => EntryFailure::Rejected { status, message },
            other => EntryFailure::Transport(other.to_string()),
        }
    }
}

/// 1エントリの処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Imported {
        id: Option<String>,
        /// 受理されたエピソード数（送信しなかった・受理されなかった場合は None）
        episodes: Option<usize>,
    },
    Failed(EntryFailure),
}

pub struct Importer<'a, A: AnimeApi + ?Sized> {
    api: &'a A,
    options: ImportOptions,
}

impl<'a, A: AnimeApi + ?Sized> Importer<'a, A> {
    pub fn new(api: &'a A, options: ImportOptions) -> Self {
        Self { api, options }
    }

    /// ヘルスチェック後にスライスを取り込む
    ///
    /// ヘルスチェックに失敗した場合は作成リクエストを一切送らずにエラーを返す。
    pub async fn run<W: Write>(
        &self,
        entries: &[SourceEntry],
        reporter: &mut Reporter<W>,
    ) -> crate::error::Result<RunCounters> {
        self.api.health().await?;

        let slice = select_slice(entries, self.options.offset, self.options.limit);
        reporter.starting(self.options.offset, self.options.limit);
        tracing::info!(
            offset = self.options.offset,
            limit = self.options.limit,
            selected = slice.len(),
            "starting import"
        );

        let mut counters = RunCounters::default();

        for (index, entry) in slice.iter().enumerate() {
            let position = self.options.offset + index + 1;
            let title = entry.display_title();

            match self.import_entry(entry).await {
                EntryOutcome::Imported { id, episodes } => {
                    counters.success += 1;
                    reporter.created(position, title, id.as_deref(), counters.success);
                    if let Some(count) = episodes {
                        reporter.episodes_created(count);
                    }
                }
                EntryOutcome::Failed(failure) => {
                    counters.failure += 1;
                    tracing::debug!(position, title, ?failure, "entry failed");
                    reporter.failed(position, title, &failure);
                }
            }

            if let Some(pause) = self.options.pause {
                if pause.every > 0 && position % pause.every == 0 {
                    tokio::time::sleep(pause.duration).await;
                }
            }
        }

        reporter.finish(&counters, slice.len());
        tracing::info!(
            success = counters.success,
            failure = counters.failure,
            "import finished"
        );

        Ok(counters)
    }

    /// 1エントリを取り込む
    ///
    /// エピソード作成のステータスはアニメの成否に影響しない。
    /// ただし接続エラーはエントリ全体の失敗として扱う。
    pub async fn import_entry(&self, entry: &SourceEntry) -> EntryOutcome {
        let record = ImportRecord::from_entry(entry);

        let created = match self.api.create_anime(&record).await {
            Ok(created) => created,
            Err(e) => return EntryOutcome::Failed(e.into()),
        };

        let episodes = match (&created.id, record.episodes > 0) {
            (Some(id), true) => match self.create_episodes(id, record.episodes).await {
                Ok(count) => count,
                Err(e) => return EntryOutcome::Failed(EntryFailure::Transport(e.to_string())),
            },
            (None, true) => {
                tracing::debug!(title = %record.title, "created anime has no id, skipping episodes");
                None
            }
            _ => None,
        };

        EntryOutcome::Imported {
            id: created.id,
            episodes,
        }
    }

    /// 受理されたエピソード数を返す。受理されなかったステータスは `Ok(None)`
    async fn create_episodes(
        &self,
        anime_id: &str,
        declared: i64,
    ) -> crate::error::Result<Option<usize>> {
        let batch = EpisodeBatch::placeholders(declared, self.options.episode_cap);
        if batch.is_empty() {
            return Ok(None);
        }

        let outcome = self.api.create_episodes(anime_id, &batch).await?;
        if outcome.is_accepted() {
            Ok(Some(batch.len()))
        } else {
            tracing::debug!(anime_id, status = outcome.status, "episodes not accepted");
            Ok(None)
        }
    }
}

#[cfg(test)]
#[path = "importer_test.rs"]
mod tests;
