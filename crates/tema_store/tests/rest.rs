//! REST source tests against a mock HTTP server.

mod common;

use common::{COLUMN, TABLE, TEST_KEY, change_payload, sse_body, test_config, update_payload};
use futures::StreamExt;
use mockito::{Matcher, Server};
use serde_json::json;
use tema_store::{RestSource, StoreConfig, StoreError, ThemeSource};

fn rows_query() -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("select".into(), COLUMN.into()),
        Matcher::UrlEncoded("limit".into(), "1".into()),
    ])
}

fn feed_query() -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("table".into(), TABLE.into()),
        Matcher::UrlEncoded("event".into(), "UPDATE".into()),
    ])
}

#[test]
fn test_new_rejects_missing_credentials() {
    assert!(matches!(
        RestSource::new(StoreConfig::new("", TEST_KEY)),
        Err(StoreError::Config(_))
    ));
    assert!(matches!(
        RestSource::new(StoreConfig::new("http://localhost", "")),
        Err(StoreError::Config(_))
    ));
    assert!(matches!(
        RestSource::new(StoreConfig::new("http://localhost", "bad\nkey")),
        Err(StoreError::Config(_))
    ));
}

#[tokio::test]
async fn test_fetch_primary_reads_first_row() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/v1/configuracoes")
        .match_query(rows_query())
        .match_header("apikey", TEST_KEY)
        .match_header("authorization", format!("Bearer {}", TEST_KEY).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{COLUMN: "#255f4f"}]).to_string())
        .create_async()
        .await;

    let source = RestSource::new(test_config(&server.url()))?;
    let primary = source.fetch_primary().await?;

    assert_eq!(primary.as_deref(), Some("#255f4f"));
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_fetch_primary_absent_values() -> anyhow::Result<()> {
    for body in [json!([]), json!([{COLUMN: null}]), json!([{COLUMN: "   "}]), json!([{}])] {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/rest/v1/configuracoes")
            .match_query(rows_query())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let source = RestSource::new(test_config(&server.url()))?;
        assert_eq!(source.fetch_primary().await?, None, "{body}");
    }
    Ok(())
}

#[tokio::test]
async fn test_fetch_primary_uses_configured_table_and_column() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/v1/settings")
        .match_query(Matcher::UrlEncoded("select".into(), "brand".into()))
        .with_status(200)
        .with_body(json!([{"brand": "#5ba58c"}]).to_string())
        .create_async()
        .await;

    let config = test_config(&server.url()).with_table("settings").with_column("brand");
    let source = RestSource::new(config)?;
    assert_eq!(source.fetch_primary().await?.as_deref(), Some("#5ba58c"));
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_fetch_primary_error_status() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/v1/configuracoes")
        .match_query(rows_query())
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let source = RestSource::new(test_config(&server.url()))?;
    match source.fetch_primary().await {
        Err(StoreError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_fetch_primary_bad_json() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/v1/configuracoes")
        .match_query(rows_query())
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let source = RestSource::new(test_config(&server.url()))?;
    assert!(source.fetch_primary().await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_subscribe_yields_only_theme_changes() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let body = sse_body([
        change_payload("INSERT", TABLE, json!({COLUMN: "#111111"})).to_string(),
        "not json".to_string(),
        change_payload("UPDATE", "depoimentos", json!({COLUMN: "#222222"})).to_string(),
        update_payload("#255f4f").to_string(),
        change_payload("UPDATE", TABLE, json!({"id": 1})).to_string(),
    ]);
    let mock = server
        .mock("GET", "/realtime/v1/changes")
        .match_query(feed_query())
        .match_header("apikey", TEST_KEY)
        .with_status(200)
        .with_header("content-type", "text/event-stream")
        .with_body(body)
        .create_async()
        .await;

    let source = RestSource::new(test_config(&server.url()))?;
    let changes: Vec<_> = source.subscribe().await?.collect().await;

    assert_eq!(changes.len(), 1);
    let change = changes.into_iter().next().unwrap()?;
    assert_eq!(change.primary, "#255f4f");
    assert_eq!(change.commit_timestamp.as_deref(), Some("2024-05-01T12:00:00Z"));
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_subscribe_uses_changes_url_override() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/feed")
        .match_query(feed_query())
        .with_status(200)
        .with_header("content-type", "text/event-stream")
        .with_body(sse_body([update_payload("#000000").to_string()]))
        .create_async()
        .await;

    let config = test_config("http://unused.invalid").with_changes_url(format!("{}/feed", server.url()));
    let source = RestSource::new(config)?;
    let mut changes = source.subscribe().await?;
    assert_eq!(changes.next().await.unwrap()?.primary, "#000000");
    Ok(())
}

#[tokio::test]
async fn test_subscribe_rejected() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/realtime/v1/changes")
        .match_query(feed_query())
        .with_status(401)
        .with_body("invalid key")
        .create_async()
        .await;

    let source = RestSource::new(test_config(&server.url()))?;
    match source.subscribe().await {
        Err(StoreError::Status { status, .. }) => assert_eq!(status, 401),
        other => panic!("expected status error, got {:?}", other.map(|_| ())),
    }
    Ok(())
}
