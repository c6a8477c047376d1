//! コンソール出力
//!
//! 進捗・失敗・最終サマリーを標準出力に書く。失敗の表示は先頭数件だけに絞る。

use crate::importer::{EntryFailure, ProgressMode, RunCounters};
use owo_colors::OwoColorize;
use std::io::Write;

/// periodic モードで進捗を出す間隔（成功件数）
pub const PROGRESS_EVERY: usize = 10;

/// 表示する失敗の上限
pub const MAX_FAILURE_REPORTS: usize = 5;

/// 文字数で切り詰める（UTF-8 境界を壊さない）
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

/// 取り込みの進捗レポーター
pub struct Reporter<W: Write> {
    out: W,
    mode: ProgressMode,
    limit: usize,
    failures_shown: usize,
}

impl Reporter<std::io::Stdout> {
    pub fn stdout(mode: ProgressMode, limit: usize) -> Self {
        Self::new(std::io::stdout(), mode, limit)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, mode: ProgressMode, limit: usize) -> Self {
        Self {
            out,
            mode,
            limit,
            failures_shown: 0,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: impl std::fmt::Display) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            tracing::warn!(error = %e, "failed to write progress output");
        }
    }

    /// ソース読み込み後
    pub fn found(&mut self, count: usize) {
        self.emit(format!("Found {} anime entries", count));
    }

    /// ループ開始前
    pub fn starting(&mut self, offset: usize, limit: usize) {
        self.emit(format!(
            "\nImporting anime entries {} to {}...",
            offset + 1,
            offset.saturating_add(limit)
        ));
    }

    /// アニメ作成成功
    pub fn created(&mut self, position: usize, title: &str, id: Option<&str>, success: usize) {
        match self.mode {
            ProgressMode::Each => {
                self.emit(format!(
                    "{} {}. Created: {} (ID: {})",
                    "✓".green(),
                    position,
                    title,
                    id.unwrap_or("-")
                ));
            }
            ProgressMode::Periodic => {
                if success % PROGRESS_EVERY == 0 {
                    self.emit(format!(
                        "  Progress: {}/{} anime imported",
                        success, self.limit
                    ));
                }
            }
        }
    }

    /// エピソード作成が受理された
    pub fn episodes_created(&mut self, count: usize) {
        if self.mode == ProgressMode::Each {
            self.emit(format!("  {} Created {} episodes", "→".cyan(), count));
        }
    }

    /// アニメ作成失敗
    pub fn failed(&mut self, position: usize, title: &str, failure: &EntryFailure) {
        if self.failures_shown >= MAX_FAILURE_REPORTS {
            return;
        }
        self.failures_shown += 1;

        match (self.mode, failure) {
            (ProgressMode::Each, EntryFailure::Rejected { status, message }) => {
                self.emit(format!("{} {}. Failed: {}", "✗".red(), position, title));
                self.emit(format!(
                    "  Error: {} - {}",
                    status,
                    truncate_chars(message, 100)
                ));
            }
            (ProgressMode::Each, EntryFailure::Transport(message)) => {
                self.emit(format!(
                    "{} {}. Error: {} - {}",
                    "✗".red(),
                    position,
                    title,
                    truncate_chars(message, 100)
                ));
            }
            (ProgressMode::Periodic, EntryFailure::Rejected { .. }) => {
                self.emit(format!(
                    "  {} Failed: {}",
                    "✗".red(),
                    truncate_chars(title, 50)
                ));
            }
            (ProgressMode::Periodic, EntryFailure::Transport(message)) => {
                self.emit(format!(
                    "  {} Error: {} - {}",
                    "✗".red(),
                    truncate_chars(title, 50),
                    truncate_chars(message, 50)
                ));
            }
        }
    }

    /// 最終サマリー
    pub fn finish(&mut self, counters: &RunCounters, attempted: usize) {
        self.emit(format!("\n{} Import complete!", "✓".green().bold()));
        self.emit(format!(
            "  {} Successfully imported: {} anime",
            "•".green(),
            counters.success
        ));
        if counters.failure > 0 {
            self.emit(format!(
                "  {} Failed imports: {} anime",
                "•".red(),
                counters.failure
            ));
        }
        self.emit(format!(
            "\nTotal processed: {}/{}",
            counters.total(),
            attempted
        ));
    }
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
