//! Change subscription handle and the listener task behind it.

use futures::StreamExt;
use tema_observability::subscription_span;
use tema_store::ChangeStream;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, info, warn};
use uuid::Uuid;

use crate::resolver::ThemeResolver;

/// Live link between the change channel and the published palette.
///
/// Releasing the handle stops applies: [`ThemeSubscription::close`] waits for
/// the listener to exit, dropping it only signals the listener to stop.
#[derive(Debug)]
pub struct ThemeSubscription {
    id: Uuid,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl ThemeSubscription {
    pub(crate) fn spawn(resolver: ThemeResolver, changes: ChangeStream) -> Self {
        let id = Uuid::new_v4();
        let cancel = CancellationToken::new();
        let task = tokio::spawn(
            listen(resolver, changes, cancel.clone()).instrument(subscription_span!(id)),
        );
        Self {
            id,
            cancel,
            task: Some(task),
        }
    }

    /// A handle with nothing behind it.
    pub fn inert() -> Self {
        let cancel = CancellationToken::new();
        cancel.cancel();
        Self {
            id: Uuid::new_v4(),
            cancel,
            task: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Whether a listener is still following the change channel.
    pub fn is_live(&self) -> bool {
        !self.cancel.is_cancelled() && self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop the listener and wait for it to exit. No apply happens after this
    /// returns.
    pub async fn close(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if e.is_panic() {
                    warn!(subscription.id = %self.id, "Theme listener panicked");
                }
            }
        }
    }
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn listen(resolver: ThemeResolver, mut changes: ChangeStream, cancel: CancellationToken) {
    let policy = resolver.config().reconnect.clone();
    let mut attempt = 0u32;

    loop {
        let delivered = drain(&resolver, &mut changes, &cancel).await;
        if cancel.is_cancelled() {
            debug!("Theme listener released");
            return;
        }
        if delivered > 0 {
            attempt = 0;
        }

        changes = loop {
            attempt += 1;
            if attempt > policy.max_attempts {
                warn!(attempts = attempt - 1, "Change channel lost, no longer following theme changes");
                return;
            }

            let delay = policy.backoff(attempt);
            debug!(attempt, delay_ms = delay.as_millis() as u64, "Resubscribing to theme changes");
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return,
                _ = tokio::time::sleep(delay) => {}
            }

            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => return,
                result = resolver.source.subscribe() => result,
            };
            match result {
                Ok(stream) => {
                    info!(attempt, "Resubscribed to theme changes");
                    break stream;
                }
                Err(e) => warn!(attempt, error = %e, "Resubscribe failed"),
            }
        };

        // Changes committed while the channel was down were never notified.
        tokio::select! {
            biased;
            _ = cancel.cancelled() => return,
            _ = resolver.resync() => {}
        }
    }
}

/// Apply changes until the channel disconnects or the handle is released.
/// Returns how many changes arrived.
async fn drain(resolver: &ThemeResolver, changes: &mut ChangeStream, cancel: &CancellationToken) -> usize {
    let mut delivered = 0;
    loop {
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => return delivered,
            next = changes.next() => next,
        };

        match next {
            Some(Ok(change)) => {
                if cancel.is_cancelled() {
                    return delivered;
                }
                delivered += 1;
                debug!(commit_timestamp = ?change.commit_timestamp, "Theme change received");
                // Malformed values are logged by apply_encoded and skipped.
                let _ = resolver.apply_encoded(&change.primary);
            }
            Some(Err(e)) => {
                warn!(error = %e, "Change channel failed");
                return delivered;
            }
            None => {
                debug!("Change channel ended");
                return delivered;
            }
        }
    }
}
