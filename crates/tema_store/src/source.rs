//! The seam between the resolver and whatever holds the primary color.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::ChangeStream;

/// A backing store that owns the durable primary color.
#[async_trait]
pub trait ThemeSource: Send + Sync {
    /// Short identifier used in logs (e.g. "rest", "memory").
    fn source_id(&self) -> &str;

    /// Read the stored primary color.
    ///
    /// `Ok(None)` when there is no row or the field is null/blank.
    async fn fetch_primary(&self) -> Result<Option<String>>;

    /// Open the change-notification channel.
    ///
    /// Returns once the channel is established; the stream yields only
    /// qualifying theme changes and ends when the channel disconnects.
    async fn subscribe(&self) -> Result<ChangeStream>;
}

#[async_trait]
impl<T: ThemeSource + ?Sized> ThemeSource for Arc<T> {
    fn source_id(&self) -> &str {
        (**self).source_id()
    }

    async fn fetch_primary(&self) -> Result<Option<String>> {
        (**self).fetch_primary().await
    }

    async fn subscribe(&self) -> Result<ChangeStream> {
        (**self).subscribe().await
    }
}
