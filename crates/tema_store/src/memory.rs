//! In-process source: a shared value plus a broadcast change channel.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use crate::error::Result;
use crate::source::ThemeSource;
use crate::types::{ChangeStream, ThemeChangeEvent};

const CHANNEL_CAPACITY: usize = 16;

struct Shared {
    primary: RwLock<Option<String>>,
    changes: broadcast::Sender<ThemeChangeEvent>,
}

/// [`ThemeSource`] that keeps the primary color in memory.
///
/// Cloning shares the same value and channel. Every [`MemorySource::set_primary`]
/// notifies all open subscriptions.
#[derive(Clone)]
pub struct MemorySource {
    shared: Arc<Shared>,
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySource {
    /// Empty store: nothing stored yet.
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            shared: Arc::new(Shared {
                primary: RwLock::new(None),
                changes,
            }),
        }
    }

    /// Store seeded with a primary color, without notifying anyone.
    pub fn with_primary(primary: impl Into<String>) -> Self {
        let source = Self::new();
        *source.write() = Some(primary.into());
        source
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<String>> {
        self.shared
            .primary
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current stored value, as stored.
    pub fn primary(&self) -> Option<String> {
        self.shared
            .primary
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Store a new primary and notify subscribers.
    ///
    /// Returns how many subscriptions were notified.
    pub fn set_primary(&self, primary: impl Into<String>) -> usize {
        let primary = primary.into();
        *self.write() = Some(primary.clone());
        let notified = self
            .shared
            .changes
            .send(ThemeChangeEvent::new(primary))
            .unwrap_or(0);
        debug!(notified, "Stored primary color");
        notified
    }

    /// Remove the stored value. Not a theme change, so nobody is notified.
    pub fn clear(&self) {
        *self.write() = None;
    }

    /// Number of open subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.shared.changes.receiver_count()
    }
}

#[async_trait]
impl ThemeSource for MemorySource {
    fn source_id(&self) -> &str {
        "memory"
    }

    async fn fetch_primary(&self) -> Result<Option<String>> {
        Ok(self.primary().filter(|s| !s.trim().is_empty()))
    }

    async fn subscribe(&self) -> Result<ChangeStream> {
        // Subscribe now, not on first poll, so nothing set after this call is missed.
        let mut rx = self.shared.changes.subscribe();
        let stream = async_stream::stream! {
            loop {
                match rx.recv().await {
                    Ok(change) => {
                        yield Ok(change);
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        // Only the latest value matters.
                        warn!(skipped, "Theme change subscriber lagged");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        };
        Ok(ChangeStream::new(Box::pin(stream)))
    }
}
