//! Common test utilities for resolver tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tema_resolver::{ReconnectPolicy, ThemeSnapshot, ThemeSubscription};
use tema_store::{ChangeStream, StoreError, ThemeChangeEvent, ThemeSource};
use tokio::sync::{mpsc, watch};

pub type ChangeSender = mpsc::UnboundedSender<tema_store::Result<ThemeChangeEvent>>;
type ChangeReceiver = mpsc::UnboundedReceiver<tema_store::Result<ThemeChangeEvent>>;

const WAIT: Duration = Duration::from_secs(5);

/// Source whose stored value and change channels are scripted by the test.
///
/// Every `subscribe` takes the next queued channel, or fails with
/// [`StoreError::Closed`] when none is left.
#[derive(Default)]
pub struct ScriptedSource {
    stored: Mutex<Option<String>>,
    fail_fetch: bool,
    channels: Mutex<VecDeque<ChangeReceiver>>,
    subscribes: AtomicUsize,
}

#[allow(dead_code)]
impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(mut self, primary: &str) -> Self {
        *self.stored.get_mut().unwrap() = Some(primary.to_string());
        self
    }

    /// Change the stored value without notifying any channel.
    pub fn set_stored(&self, primary: &str) {
        *self.stored.lock().unwrap() = Some(primary.to_string());
    }

    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    /// Queue a channel for a future `subscribe` and return its sending end.
    pub fn channel(&self) -> ChangeSender {
        let (tx, rx) = mpsc::unbounded_channel();
        self.channels.lock().unwrap().push_back(rx);
        tx
    }

    pub fn subscribe_count(&self) -> usize {
        self.subscribes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ThemeSource for ScriptedSource {
    fn source_id(&self) -> &str {
        "scripted"
    }

    async fn fetch_primary(&self) -> tema_store::Result<Option<String>> {
        if self.fail_fetch {
            return Err(StoreError::Status {
                status: 503,
                body: "unavailable".into(),
            });
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn subscribe(&self) -> tema_store::Result<ChangeStream> {
        self.subscribes.fetch_add(1, Ordering::SeqCst);
        let mut rx = self
            .channels
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(StoreError::Closed)?;
        let stream = async_stream::stream! {
            while let Some(item) = rx.recv().await {
                yield item;
            }
        };
        Ok(ChangeStream::new(Box::pin(stream)))
    }
}

/// A change notification carrying `primary`.
#[allow(dead_code)]
pub fn change(primary: &str) -> tema_store::Result<ThemeChangeEvent> {
    Ok(ThemeChangeEvent::new(primary))
}

/// Fast reconnects so tests do not sit in backoff.
#[allow(dead_code)]
pub fn quick_reconnect(max_attempts: u32) -> ReconnectPolicy {
    ReconnectPolicy::default()
        .max_attempts(max_attempts)
        .initial_backoff(Duration::from_millis(5))
        .max_backoff(Duration::from_millis(20))
}

/// Wait until the published revision reaches `revision`.
#[allow(dead_code)]
pub async fn wait_for_revision(rx: &mut watch::Receiver<ThemeSnapshot>, revision: u64) -> ThemeSnapshot {
    let snapshot = tokio::time::timeout(WAIT, rx.wait_for(|s| s.revision >= revision))
        .await
        .expect("timed out waiting for theme publish")
        .expect("publisher dropped");
    *snapshot
}

/// Wait until the listener behind `subscription` has exited.
#[allow(dead_code)]
pub async fn wait_until_stopped(subscription: &ThemeSubscription) {
    tokio::time::timeout(WAIT, async {
        while subscription.is_live() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("timed out waiting for listener to stop");
}
