//! ソースデータ（anime-offline-database）の読み込み
//!
//! 取り込みに使うフィールドだけを読み取る。欠けているフィールドや型の合わない
//! フィールドはエラーにせず `None` として扱い、既定値の適用は `record` 側で行う。

use crate::error::{Result, SeedError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

/// ソースファイル内の1エントリ
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub synonyms: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub sources: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub episodes: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub anime_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub anime_season: Option<SourceSeason>,
    #[serde(default, deserialize_with = "lenient")]
    pub synopsis: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub picture: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub tags: Option<Vec<String>>,
}

/// `animeSeason` オブジェクト
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SourceSeason {
    #[serde(default, deserialize_with = "lenient")]
    pub season: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub year: Option<i64>,
}

/// 型が合わない値を欠損扱いにするデシリアライザ
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl SourceEntry {
    /// JSON値からエントリを作る（オブジェクトでなければ全フィールド欠損）
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// 表示用タイトル
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(crate::record::DEFAULT_TITLE)
    }
}

/// JSONドキュメントをパースしてエントリ一覧を返す
///
/// トップレベルはオブジェクトで、`data` キーに配列を持つ必要がある。
pub fn parse_document(content: &str) -> Result<Vec<SourceEntry>> {
    let document: Value = serde_json::from_str(content)?;

    let data = document
        .get("data")
        .ok_or_else(|| SeedError::InvalidSource("missing top-level 'data' key".to_string()))?;

    let items = data
        .as_array()
        .ok_or_else(|| SeedError::InvalidSource("'data' is not an array".to_string()))?;

    Ok(items.iter().cloned().map(SourceEntry::from_value).collect())
}

/// ファイルからエントリ一覧を読み込む
pub fn load_entries(path: &Path) -> Result<Vec<SourceEntry>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SeedError::InvalidSource(format!("cannot read {}: {}", path.display(), e))
    })?;
    let entries = parse_document(&content)?;
    tracing::debug!(path = %path.display(), count = entries.len(), "loaded source entries");
    Ok(entries)
}

/// `offset` から最大 `limit` 件の連続スライスを返す
///
/// `offset` が範囲外なら空スライス。
pub fn select_slice(entries: &[SourceEntry], offset: usize, limit: usize) -> &[SourceEntry] {
    let start = offset.min(entries.len());
    let end = offset.saturating_add(limit).min(entries.len());
    &entries[start..end]
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
