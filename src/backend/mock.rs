//! テスト用モックバックエンド

use super::*;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// ヘルスチェックの応答
#[derive(Debug, Clone, Copy)]
pub enum MockHealth {
    Healthy,
    Unhealthy(u16),
    Unreachable,
}

/// 呼び出しを記録するモックバックエンド
pub struct MockApi {
    health: MockHealth,
    /// 作成を 500 で拒否するタイトル
    rejected: HashSet<String>,
    /// 作成時に接続エラーになるタイトル
    broken: HashSet<String>,
    /// エピソード作成時に接続エラーになるタイトル
    broken_episodes: HashSet<String>,
    /// エピソード作成のステータス
    episodes_status: u16,
    /// 201 のボディに id を含めるか
    with_ids: bool,
    state: Mutex<MockState>,
}

#[derive(Default)]
struct MockState {
    health_calls: usize,
    created: Vec<ImportRecord>,
    /// 払い出した id → タイトル
    titles_by_id: HashMap<String, String>,
    episode_calls: Vec<(String, EpisodeBatch)>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            health: MockHealth::Healthy,
            rejected: HashSet::new(),
            broken: HashSet::new(),
            broken_episodes: HashSet::new(),
            episodes_status: 201,
            with_ids: true,
            state: Mutex::new(MockState::default()),
        }
    }

    pub fn with_health(mut self, health: MockHealth) -> Self {
        self.health = health;
        self
    }

    pub fn reject(mut self, title: &str) -> Self {
        self.rejected.insert(title.to_string());
        self
    }

    pub fn break_on(mut self, title: &str) -> Self {
        self.broken.insert(title.to_string());
        self
    }

    pub fn break_episodes_on(mut self, title: &str) -> Self {
        self.broken_episodes.insert(title.to_string());
        self
    }

    pub fn with_episodes_status(mut self, status: u16) -> Self {
        self.episodes_status = status;
        self
    }

    pub fn without_ids(mut self) -> Self {
        self.with_ids = false;
        self
    }

    pub fn health_calls(&self) -> usize {
        self.state.lock().unwrap().health_calls
    }

    /// 作成リクエストを受けたレコード（拒否されたものも含む）
    pub fn created(&self) -> Vec<ImportRecord> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn created_titles(&self) -> Vec<String> {
        self.created().into_iter().map(|r| r.title).collect()
    }

    pub fn episode_calls(&self) -> Vec<(String, EpisodeBatch)> {
        self.state.lock().unwrap().episode_calls.clone()
    }
}

impl AnimeApi for MockApi {
    fn health<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            self.state.lock().unwrap().health_calls += 1;
            match self.health {
                MockHealth::Healthy => Ok(()),
                MockHealth::Unhealthy(status) => Err(SeedError::BackendUnhealthy { status }),
                MockHealth::Unreachable => {
                    Err(SeedError::BackendUnavailable("http://mock".to_string()))
                }
            }
        })
    }

    fn create_anime<'a>(
        &'a self,
        record: &'a ImportRecord,
    ) -> Pin<Box<dyn Future<Output = Result<CreatedAnime>> + Send + 'a>> {
        Box::pin(async move {
            let id = {
                let mut state = self.state.lock().unwrap();
                state.created.push(record.clone());
                let id = format!("anime-{}", state.created.len());
                state.titles_by_id.insert(id.clone(), record.title.clone());
                id
            };

            if self.broken.contains(&record.title) {
                return Err(SeedError::Io(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    "connection reset by peer",
                )));
            }

            if self.rejected.contains(&record.title) {
                return Err(SeedError::Api {
                    status: 500,
                    message: format!("failed to insert {}", record.title),
                });
            }

            Ok(CreatedAnime {
                id: self.with_ids.then_some(id),
            })
        })
    }

    fn create_episodes<'a>(
        &'a self,
        anime_id: &'a str,
        batch: &'a EpisodeBatch,
    ) -> Pin<Box<dyn Future<Output = Result<EpisodesOutcome>> + Send + 'a>> {
        Box::pin(async move {
            let title = {
                let mut state = self.state.lock().unwrap();
                state
                    .episode_calls
                    .push((anime_id.to_string(), batch.clone()));
                state.titles_by_id.get(anime_id).cloned()
            };

            if title.is_some_and(|t| self.broken_episodes.contains(&t)) {
                return Err(SeedError::Io(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    "connection reset by peer",
                )));
            }

            Ok(EpisodesOutcome {
                status: self.episodes_status,
            })
        })
    }
}
