//! tema-resolver: keeps the published palette in step with the stored
//! primary color.
//!
//! [`ThemeResolver::initialize`] reads the stored color once, applies it, then
//! follows the store's change notifications until the returned
//! [`ThemeSubscription`] is released. Consumers read the palette through
//! [`ThemeResolver::watch`].
//!
//! ```rust,no_run
//! use tema_resolver::ThemeResolver;
//! use tema_store::MemorySource;
//!
//! # async fn run() {
//! let store = MemorySource::with_primary("#5ba58c");
//! let resolver = ThemeResolver::new(store.clone());
//! let subscription = resolver.initialize().await;
//!
//! store.set_primary("#255f4f");
//! let mut palette = resolver.watch();
//! palette.changed().await.ok();
//! println!("{}", palette.borrow().theme.to_css(":root"));
//!
//! subscription.close().await;
//! # }
//! ```

pub mod config;
pub mod publish;
pub mod resolver;
pub mod subscription;

pub use config::{ReconnectPolicy, ResolverConfig};
pub use publish::{ThemePublisher, ThemeSnapshot};
pub use resolver::ThemeResolver;
pub use subscription::ThemeSubscription;
