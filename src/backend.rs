//! バックエンドAPIクライアント
//!
//! 取り込み先のアニメバックエンドが公開する3つのエンドポイントだけを扱う。
//! 取り込みループは `AnimeApi` trait 越しに呼び出すので、テストではモックを注入できる。

use crate::config::{normalize_base_url, HttpConfig};
use crate::error::{Result, SeedError};
use crate::record::{EpisodeBatch, ImportRecord};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// 作成されたアニメ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedAnime {
    /// レスポンスボディの `id`（文字列でも数値でも可）
    pub id: Option<String>,
}

impl CreatedAnime {
    /// レスポンスボディから作成結果を取り出す
    pub fn from_body(body: &Value) -> Self {
        let id = match body.get("id") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        Self { id }
    }
}

/// エピソード作成の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodesOutcome {
    pub status: u16,
}

impl EpisodesOutcome {
    /// 201 Created / 206 Partial Content を受理扱いにする
    pub fn is_accepted(&self) -> bool {
        self.status == StatusCode::CREATED.as_u16()
            || self.status == StatusCode::PARTIAL_CONTENT.as_u16()
    }
}

/// アニメバックエンド trait
pub trait AnimeApi: Send + Sync {
    /// `GET /api/health` が 200 を返すか確認
    fn health<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

    /// `POST /api/anime`（201 以外はエラー）
    fn create_anime<'a>(
        &'a self,
        record: &'a ImportRecord,
    ) -> Pin<Box<dyn Future<Output = Result<CreatedAnime>> + Send + 'a>>;

    /// `POST /api/anime/{id}/episodes`
    fn create_episodes<'a>(
        &'a self,
        anime_id: &'a str,
        batch: &'a EpisodeBatch,
    ) -> Pin<Box<dyn Future<Output = Result<EpisodesOutcome>> + Send + 'a>>;
}

/// reqwest によるバックエンドクライアント
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &HttpConfig, base_url: &str) -> Self {
        Self {
            http: config.build_client(),
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn health_url(&self) -> String {
        format!("{}/api/health", self.base_url)
    }

    fn anime_url(&self) -> String {
        format!("{}/api/anime", self.base_url)
    }

    fn episodes_url(&self, anime_id: &str) -> String {
        format!("{}/api/anime/{}/episodes", self.base_url, anime_id)
    }
}

impl AnimeApi for BackendClient {
    fn health<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.health_url();
            tracing::debug!(%url, "checking backend health");

            let response = self.http.get(&url).send().await.map_err(|e| {
                tracing::debug!(error = %e, "health check transport error");
                SeedError::BackendUnavailable(self.base_url.clone())
            })?;

            if response.status() != StatusCode::OK {
                return Err(SeedError::BackendUnhealthy {
                    status: response.status().as_u16(),
                });
            }

            Ok(())
        })
    }

    fn create_anime<'a>(
        &'a self,
        record: &'a ImportRecord,
    ) -> Pin<Box<dyn Future<Output = Result<CreatedAnime>> + Send + 'a>> {
        Box::pin(async move {
            let response = self.http.post(self.anime_url()).json(record).send().await?;
            let status = response.status();

            if status != StatusCode::CREATED {
                let message = response.text().await.unwrap_or_default();
                return Err(SeedError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            // 201 でもボディが読めなければ id なしとして扱う
            let body: Value = response.json().await.unwrap_or(Value::Null);
            Ok(CreatedAnime::from_body(&body))
        })
    }

    fn create_episodes<'a>(
        &'a self,
        anime_id: &'a str,
        batch: &'a EpisodeBatch,
    ) -> Pin<Box<dyn Future<Output = Result<EpisodesOutcome>> + Send + 'a>> {
        Box::pin(async move {
            let response = self
                .http
                .post(self.episodes_url(anime_id))
                .json(batch)
                .send()
                .await?;

            Ok(EpisodesOutcome {
                status: response.status().as_u16(),
            })
        })
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
