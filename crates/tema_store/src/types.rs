//! Types shared by all theme sources.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Kind of row change reported by the change feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Insert => "INSERT",
            ChangeKind::Update => "UPDATE",
            ChangeKind::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A qualifying notification: the stored primary color was updated.
///
/// Carries the raw string; it is validated when applied, so one bad value
/// only fails that apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeChangeEvent {
    /// New primary color as stored
    pub primary: String,
    /// Backend commit time, when the feed reports one
    pub commit_timestamp: Option<String>,
}

impl ThemeChangeEvent {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            commit_timestamp: None,
        }
    }

    pub fn commit_timestamp(mut self, ts: impl Into<String>) -> Self {
        self.commit_timestamp = Some(ts.into());
        self
    }
}

/// Stream of change events. Ends when the channel disconnects.
pub struct ChangeStream {
    inner: Pin<Box<dyn Stream<Item = Result<ThemeChangeEvent>> + Send>>,
}

impl ChangeStream {
    pub fn new(inner: Pin<Box<dyn Stream<Item = Result<ThemeChangeEvent>> + Send>>) -> Self {
        Self { inner }
    }

    /// A stream that ends immediately.
    pub fn empty() -> Self {
        Self::new(Box::pin(futures::stream::empty()))
    }
}

impl Stream for ChangeStream {
    type Item = Result<ThemeChangeEvent>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

impl std::fmt::Debug for ChangeStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeStream").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[test]
    fn test_change_kind_serialization() {
        let json = serde_json::to_string(&ChangeKind::Update).unwrap();
        assert_eq!(json, "\"UPDATE\"");

        let decoded: ChangeKind = serde_json::from_str("\"DELETE\"").unwrap();
        assert_eq!(decoded, ChangeKind::Delete);
        assert!(serde_json::from_str::<ChangeKind>("\"update\"").is_err());
    }

    #[test]
    fn test_change_kind_display() {
        assert_eq!(ChangeKind::Insert.to_string(), "INSERT");
    }

    #[test]
    fn test_change_event_builder() {
        let event = ThemeChangeEvent::new("#5ba58c").commit_timestamp("2024-05-01T12:00:00Z");
        assert_eq!(event.primary, "#5ba58c");
        assert_eq!(event.commit_timestamp.as_deref(), Some("2024-05-01T12:00:00Z"));
    }

    #[tokio::test]
    async fn test_change_stream_forwards_items() {
        let items: Vec<Result<ThemeChangeEvent>> = vec![
            Ok(ThemeChangeEvent::new("#000000")),
            Ok(ThemeChangeEvent::new("#ffffff")),
        ];
        let mut stream = ChangeStream::new(Box::pin(futures::stream::iter(items)));
        assert_eq!(stream.next().await.unwrap().unwrap().primary, "#000000");
        assert_eq!(stream.next().await.unwrap().unwrap().primary, "#ffffff");
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_empty_stream_ends() {
        assert!(ChangeStream::empty().next().await.is_none());
    }
}
