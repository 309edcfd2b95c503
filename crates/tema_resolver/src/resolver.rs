//! The theme resolver: one stored primary in, three published colors out.

use std::sync::Arc;

use tema_color::{Color, MalformedColorError, Theme};
use tema_store::ThemeSource;
use tokio::sync::watch;
use tracing::{Instrument, debug, info, info_span, warn};

use crate::config::ResolverConfig;
use crate::publish::{ThemePublisher, ThemeSnapshot};
use crate::subscription::ThemeSubscription;

/// Keeps the published palette consistent with the stored primary color.
///
/// Cheap to clone; clones share the source and the published palette.
#[derive(Clone)]
pub struct ThemeResolver {
    pub(crate) source: Arc<dyn ThemeSource>,
    publisher: ThemePublisher,
    config: ResolverConfig,
}

impl std::fmt::Debug for ThemeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeResolver")
            .field("source", &self.source.source_id())
            .field("current", &self.publisher.current())
            .field("config", &self.config)
            .finish()
    }
}

impl ThemeResolver {
    pub fn new<S: ThemeSource + 'static>(source: S) -> Self {
        Self::with_config(source, ResolverConfig::default())
    }

    pub fn with_config<S: ThemeSource + 'static>(source: S, config: ResolverConfig) -> Self {
        Self {
            source: Arc::new(source),
            publisher: ThemePublisher::default(),
            config,
        }
    }

    /// Start from `theme` instead of the built-in default palette.
    pub fn with_initial_theme(mut self, theme: Theme) -> Self {
        self.publisher = ThemePublisher::new(theme);
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Derive the palette from `primary` and publish it as one snapshot.
    pub fn apply_theme(&self, primary: Color) -> Theme {
        let theme = Theme::from_primary(primary);
        let snapshot = self.publisher.publish(theme);
        info!(
            primary = %theme.primary(),
            primary_light = %theme.primary_light(),
            primary_dark = %theme.primary_dark(),
            revision = snapshot.revision,
            "Applied theme"
        );
        theme
    }

    /// Decode a stored or notified color string and apply it.
    ///
    /// Malformed input publishes nothing; the current palette stays.
    pub fn apply_encoded(&self, raw: &str) -> Result<Theme, MalformedColorError> {
        let primary: Color = raw
            .parse()
            .inspect_err(|e| warn!(error = %e, "Ignoring malformed primary color"))?;
        Ok(self.apply_theme(primary))
    }

    /// Read the stored primary once and apply it if there is one.
    pub async fn refresh(&self) -> Option<Theme> {
        match self.source.fetch_primary().await {
            Ok(Some(raw)) if !raw.trim().is_empty() => self.apply_encoded(&raw).ok(),
            Ok(_) => {
                debug!("No stored primary color, keeping current theme");
                None
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored primary color, keeping current theme");
                None
            }
        }
    }

    /// Re-read the stored primary after a reconnect. Applies only when it
    /// differs from the published one, so a quiet outage publishes nothing.
    pub(crate) async fn resync(&self) -> Option<Theme> {
        let raw = match self.source.fetch_primary().await {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => return None,
            Err(e) => {
                warn!(error = %e, "Failed to re-read stored primary color after reconnect");
                return None;
            }
        };
        match raw.parse::<Color>() {
            Ok(primary) if primary == self.current().theme.primary() => {
                debug!(%primary, "Stored primary unchanged across reconnect");
                None
            }
            _ => self.apply_encoded(&raw).ok(),
        }
    }

    /// Apply the stored primary, then follow change notifications until the
    /// returned handle is closed or dropped.
    ///
    /// Never fails. If the change channel cannot be opened the handle is
    /// inert and the initially applied palette stays in effect.
    pub async fn initialize(&self) -> ThemeSubscription {
        let span = info_span!("resolver.initialize", source = self.source.source_id());
        async {
            self.refresh().await;
            match self.source.subscribe().await {
                Ok(changes) => {
                    let subscription = ThemeSubscription::spawn(self.clone(), changes);
                    info!(subscription.id = %subscription.id(), "Listening for theme changes");
                    subscription
                }
                Err(e) => {
                    warn!(error = %e, "Could not subscribe to theme changes, keeping current theme");
                    ThemeSubscription::inert()
                }
            }
        }
        .instrument(span)
        .await
    }

    pub fn current(&self) -> ThemeSnapshot {
        self.publisher.current()
    }

    pub fn watch(&self) -> watch::Receiver<ThemeSnapshot> {
        self.publisher.watch()
    }
}
