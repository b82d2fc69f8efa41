use content::{
    ContentConfig, ContentError, ContentSource, HttpContent, player_address,
    provider::{parse_joke, parse_search},
};

#[test]
fn test_parse_joke() {
    let body = serde_json::json!({
        "id": "R7UfaahVfFd",
        "joke": "My dog used to chase people on a bike a lot. It got so bad I had to take his bike away.",
        "status": 200,
    })
    .to_string();
    let joke = parse_joke(&body).unwrap();
    assert!(joke.starts_with("My dog used to chase"));
}

#[test]
fn test_parse_joke_rejects_unexpected_body() {
    let result = parse_joke(r#"{"status": 404}"#);
    assert!(matches!(result, Err(ContentError::Decode(_))));
}

#[test]
fn test_parse_search_ranks_by_position() {
    let body = serde_json::json!({
        "kind": "youtube#searchListResponse",
        "items": [
            { "id": { "kind": "youtube#video", "videoId": "aaa" } },
            { "id": { "kind": "youtube#channel", "channelId": "chan" } },
            { "id": { "kind": "youtube#video", "videoId": "bbb" } },
            { "id": { "kind": "youtube#video", "videoId": "ccc" } },
        ],
    })
    .to_string();
    let entries = parse_search(&body).unwrap();
    let ids: Vec<&str> = entries.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, ["aaa", "bbb", "ccc"]);
    let ranks: Vec<usize> = entries.iter().map(|entry| entry.rank).collect();
    assert_eq!(ranks, [0, 1, 2]);
}

#[test]
fn test_parse_search_without_items() {
    assert!(parse_search("{}").unwrap().is_empty());
}

#[test]
fn test_player_address() {
    let base = ContentConfig::default().player_base().unwrap();
    let url = player_address(&base, "dQw4w9WgXcQ");
    assert_eq!(url.as_str(), "http://localhost:3004/?video=dQw4w9WgXcQ");
}

#[test]
fn test_player_address_replaces_query() {
    let base = url::Url::parse("http://player.local/watch?video=old&x=1").unwrap();
    let url = player_address(&base, "new");
    assert_eq!(url.as_str(), "http://player.local/watch?video=new");
}

#[test]
fn test_invalid_player_url() {
    let config = ContentConfig::default().with_player_url("not a url");
    assert!(matches!(config.player_base(), Err(ContentError::Url(_))));
}

#[test]
fn test_config_defaults() {
    let config = ContentConfig::default();
    assert_eq!(config.joke_url(), "https://icanhazdadjoke.com/");
    assert_eq!(config.query(), "funny animals");
    assert_eq!(config.max_results(), 20);
    assert_eq!(config.api_key(), None);
}

#[tokio::test]
async fn test_videos_require_api_key() {
    let content = HttpContent::new(ContentConfig::default()).unwrap();
    let result = content.videos().await;
    assert!(matches!(result, Err(ContentError::MissingApiKey)));
}

#[test]
fn test_http_content_uses_configured_player() {
    let config = ContentConfig::default().with_player_url("http://kiosk.local:8080/play");
    let content = HttpContent::new(config).unwrap();
    let base = content.player_base().unwrap();
    assert_eq!(
        player_address(&base, "abc").as_str(),
        "http://kiosk.local:8080/play?video=abc"
    );
}

#[test]
fn test_http_content_rejects_bad_player_url() {
    let content = HttpContent::new(ContentConfig::default().with_player_url("::")).unwrap();
    assert!(matches!(content.player_base(), Err(ContentError::Url(_))));
}
