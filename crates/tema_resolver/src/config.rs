//! Resolver configuration.

use std::time::Duration;

/// How the listener re-establishes a dropped change channel.
///
/// Delay before attempt `n` is `initial_backoff * 2^(n-1)`, capped at
/// `max_backoff`. The attempt count resets once a channel delivers a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconnectPolicy {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
        }
    }
}

impl ReconnectPolicy {
    /// Never resubscribe; the listener stops at the first disconnect.
    pub fn never() -> Self {
        Self {
            max_attempts: 0,
            ..Self::default()
        }
    }

    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    pub fn max_backoff(mut self, backoff: Duration) -> Self {
        self.max_backoff = backoff;
        self
    }

    /// Delay before the given 1-based attempt.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

/// Configuration for [`crate::ThemeResolver`].
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    pub reconnect: ReconnectPolicy,
}

impl ResolverConfig {
    pub fn with_reconnect(mut self, reconnect: ReconnectPolicy) -> Self {
        self.reconnect = reconnect;
        self
    }

    /// Create config from environment variables.
    ///
    /// Optional: `TEMA_RECONNECT_MAX_ATTEMPTS` (default: 5)
    /// Optional: `TEMA_RECONNECT_BACKOFF_MS` (default: 500)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ResolverConfig::from_env`] with a custom variable lookup.
    /// Values that do not parse are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut reconnect = ReconnectPolicy::default();
        if let Some(attempts) = lookup("TEMA_RECONNECT_MAX_ATTEMPTS").and_then(|v| v.trim().parse().ok()) {
            reconnect.max_attempts = attempts;
        }
        if let Some(ms) = lookup("TEMA_RECONNECT_BACKOFF_MS").and_then(|v| v.trim().parse().ok()) {
            reconnect.initial_backoff = Duration::from_millis(ms);
        }
        Self { reconnect }
    }
}
