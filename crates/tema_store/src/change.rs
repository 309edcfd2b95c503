//! Decoding of change feed payloads.
//!
//! Payload shape:
//!
//! ```json
//! {"eventType": "UPDATE", "schema": "public", "table": "configuracoes",
//!  "commit_timestamp": "2024-05-01T12:00:00Z",
//!  "new": {"id": 1, "cor_primaria": "#5ba58c"}, "old": {"id": 1}}
//! ```

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::types::{ChangeKind, ThemeChangeEvent};

/// Row change as sent by the change feed.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePayload {
    #[serde(rename = "eventType")]
    pub event_type: ChangeKind,
    #[serde(default)]
    pub schema: Option<String>,
    pub table: String,
    #[serde(default)]
    pub commit_timestamp: Option<String>,
    #[serde(default)]
    pub new: Map<String, Value>,
    #[serde(default)]
    pub old: Map<String, Value>,
}

impl ChangePayload {
    /// The theme change this payload carries, if it qualifies: an UPDATE on
    /// `table` whose new row has a non-blank string in `column`.
    pub fn into_theme_change(self, table: &str, column: &str) -> Option<ThemeChangeEvent> {
        if self.event_type != ChangeKind::Update || self.table != table {
            return None;
        }
        let primary = color_field(&self.new, column)?;
        Some(ThemeChangeEvent {
            primary,
            commit_timestamp: self.commit_timestamp,
        })
    }
}

/// Non-blank string value of `column` in `row`.
pub fn color_field(row: &Map<String, Value>, column: &str) -> Option<String> {
    row.get(column)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Decode one feed message. `Ok(None)` means well-formed but not a theme change.
pub fn decode_change(data: &str, table: &str, column: &str) -> Result<Option<ThemeChangeEvent>> {
    let payload: ChangePayload = serde_json::from_str(data)?;
    Ok(payload.into_theme_change(table, column))
}
