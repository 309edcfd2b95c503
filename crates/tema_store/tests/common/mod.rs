//! Common test utilities for the store tests.

use serde_json::{Value, json};
use tema_store::StoreConfig;

pub const TEST_KEY: &str = "test-anon-key";
pub const TABLE: &str = "configuracoes";
pub const COLUMN: &str = "cor_primaria";

/// Config pointing at a mock server.
pub fn test_config(base_url: &str) -> StoreConfig {
    StoreConfig::new(base_url, TEST_KEY)
}

/// An UPDATE payload for the configuration table.
#[allow(dead_code)]
pub fn update_payload(color: &str) -> Value {
    change_payload("UPDATE", TABLE, json!({"id": 1, COLUMN: color}))
}

#[allow(dead_code)]
pub fn change_payload(event_type: &str, table: &str, new: Value) -> Value {
    json!({
        "eventType": event_type,
        "schema": "public",
        "table": table,
        "commit_timestamp": "2024-05-01T12:00:00Z",
        "new": new,
        "old": {"id": 1},
    })
}

/// Render messages as a `text/event-stream` body.
#[allow(dead_code)]
pub fn sse_body<I, S>(messages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    messages
        .into_iter()
        .map(|m| format!("data: {}\n\n", m.as_ref()))
        .collect()
}
