//! バックエンドへ送るリクエストボディ
//!
//! `SourceEntry` から `ImportRecord` への変換と、プレースホルダーエピソードの生成。

use crate::source::SourceEntry;
use serde::Serialize;

pub const DEFAULT_TITLE: &str = "Unknown";
pub const DEFAULT_STATUS: &str = "UNKNOWN";
pub const DEFAULT_TYPE: &str = "UNKNOWN";
pub const DEFAULT_SEASON: &str = "spring";
pub const DEFAULT_YEAR: i64 = 2024;

/// 1アニメあたりに送るタグの上限
pub const MAX_TAGS: usize = 10;

/// `POST /api/anime` のボディ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportRecord {
    pub title: String,
    pub synonyms: Vec<String>,
    pub sources: Vec<String>,
    pub episodes: i64,
    pub status: String,
    pub anime_type: String,
    pub anime_season: ImportSeason,
    pub synopsis: String,
    pub poster_url: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportSeason {
    pub season: String,
    pub year: i64,
}

impl ImportRecord {
    /// ソースエントリを変換する
    ///
    /// - season は小文字化
    /// - tags は先頭から最大 `MAX_TAGS` 件
    /// - 欠損フィールドは固定の既定値
    pub fn from_entry(entry: &SourceEntry) -> Self {
        let season = entry.anime_season.as_ref();

        Self {
            title: entry
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            synonyms: entry.synonyms.clone().unwrap_or_default(),
            sources: entry.sources.clone().unwrap_or_default(),
            episodes: entry.episodes.unwrap_or(0),
            status: entry
                .status
                .clone()
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            anime_type: entry
                .anime_type
                .clone()
                .unwrap_or_else(|| DEFAULT_TYPE.to_string()),
            anime_season: ImportSeason {
                season: season
                    .and_then(|s| s.season.as_deref())
                    .unwrap_or(DEFAULT_SEASON)
                    .to_lowercase(),
                year: season.and_then(|s| s.year).unwrap_or(DEFAULT_YEAR),
            },
            synopsis: entry.synopsis.clone().unwrap_or_default(),
            poster_url: entry.picture.clone().unwrap_or_default(),
            tags: entry
                .tags
                .as_deref()
                .unwrap_or_default()
                .iter()
                .take(MAX_TAGS)
                .cloned()
                .collect(),
        }
    }
}

/// プレースホルダーエピソード
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeEntry {
    pub episode_number: u32,
    pub title: String,
    pub duration: Option<u32>,
    pub air_date: Option<String>,
    pub synopsis: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl EpisodeEntry {
    pub fn placeholder(episode_number: u32) -> Self {
        Self {
            episode_number,
            title: format!("Episode {}", episode_number),
            duration: None,
            air_date: None,
            synopsis: None,
            thumbnail_url: None,
        }
    }
}

/// `POST /api/anime/{id}/episodes` のボディ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeBatch {
    pub episodes: Vec<EpisodeEntry>,
}

impl EpisodeBatch {
    /// `min(declared, cap)` 件のエピソードを1から連番で作る
    ///
    /// `declared` が0以下なら空。
    pub fn placeholders(declared: i64, cap: u32) -> Self {
        let count = declared.clamp(0, i64::from(cap)) as u32;
        Self {
            episodes: (1..=count).map(EpisodeEntry::placeholder).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;

#[cfg(test)]
#[path = "record_proptests.rs"]
mod proptests;
