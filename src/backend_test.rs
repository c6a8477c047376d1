use super::*;
use serde_json::json;

#[test]
fn test_created_anime_string_id() {
    let created = CreatedAnime::from_body(&json!({"id": "7f1c", "title": "A"}));
    assert_eq!(created.id.as_deref(), Some("7f1c"));
}

#[test]
fn test_created_anime_numeric_id() {
    let created = CreatedAnime::from_body(&json!({"id": 42}));
    assert_eq!(created.id.as_deref(), Some("42"));
}

#[test]
fn test_created_anime_missing_or_empty_id() {
    assert_eq!(CreatedAnime::from_body(&json!({})).id, None);
    assert_eq!(CreatedAnime::from_body(&json!({"id": ""})).id, None);
    assert_eq!(CreatedAnime::from_body(&json!({"id": null})).id, None);
    assert_eq!(CreatedAnime::from_body(&Value::Null).id, None);
}

#[test]
fn test_episodes_outcome_accepted_statuses() {
    assert!(EpisodesOutcome { status: 201 }.is_accepted());
    assert!(EpisodesOutcome { status: 206 }.is_accepted());
    assert!(!EpisodesOutcome { status: 200 }.is_accepted());
    assert!(!EpisodesOutcome { status: 500 }.is_accepted());
}

#[test]
fn test_backend_urls() {
    let client = BackendClient::new(&HttpConfig::default(), "http://localhost:3000/");
    assert_eq!(client.base_url(), "http://localhost:3000");
    assert_eq!(client.health_url(), "http://localhost:3000/api/health");
    assert_eq!(client.anime_url(), "http://localhost:3000/api/anime");
    assert_eq!(
        client.episodes_url("abc"),
        "http://localhost:3000/api/anime/abc/episodes"
    );
}

#[tokio::test]
async fn test_health_unreachable_is_unavailable() {
    // ポート1は通常リッスンされていない
    let client = BackendClient::new(&HttpConfig::default(), "http://127.0.0.1:1");
    let result = client.health().await;
    assert!(matches!(result, Err(SeedError::BackendUnavailable(_))));
}
