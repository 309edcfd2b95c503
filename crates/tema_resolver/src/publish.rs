//! The published palette.

use std::sync::Arc;

use serde::Serialize;
use tema_color::Theme;
use tokio::sync::watch;

/// One published palette and its position in the publish sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeSnapshot {
    pub theme: Theme,
    /// 0 for the initial palette, +1 per publish
    pub revision: u64,
}

/// Holds the current palette and notifies watchers on every publish.
#[derive(Debug, Clone)]
pub struct ThemePublisher {
    tx: Arc<watch::Sender<ThemeSnapshot>>,
}

impl Default for ThemePublisher {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ThemePublisher {
    pub fn new(initial: Theme) -> Self {
        let (tx, _) = watch::channel(ThemeSnapshot {
            theme: initial,
            revision: 0,
        });
        Self { tx: Arc::new(tx) }
    }

    /// Replace the palette. The three colors and the revision change together.
    pub fn publish(&self, theme: Theme) -> ThemeSnapshot {
        let mut revision = 0;
        self.tx.send_modify(|snapshot| {
            snapshot.theme = theme;
            snapshot.revision += 1;
            revision = snapshot.revision;
        });
        ThemeSnapshot { theme, revision }
    }

    pub fn current(&self) -> ThemeSnapshot {
        *self.tx.borrow()
    }

    pub fn watch(&self) -> watch::Receiver<ThemeSnapshot> {
        self.tx.subscribe()
    }
}
