//! tema-store: access to the hosted backend that owns the primary color.
//!
//! Two operations matter to the theme resolver:
//!
//! - read the stored primary color (one row, one column, zero rows tolerated)
//! - subscribe to update notifications for that row
//!
//! Both are behind the [`ThemeSource`] trait. [`RestSource`] talks to the
//! hosted backend over REST plus a server-sent-event change feed;
//! [`MemorySource`] keeps the value in process.
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use tema_store::{RestSource, StoreConfig, ThemeSource};
//!
//! # async fn run() -> tema_store::Result<()> {
//! let source = RestSource::new(StoreConfig::from_env()?)?;
//! println!("stored: {:?}", source.fetch_primary().await?);
//!
//! let mut changes = source.subscribe().await?;
//! while let Some(change) = changes.next().await {
//!     println!("new primary: {}", change?.primary);
//! }
//! # Ok(())
//! # }
//! ```

pub mod change;
pub mod config;
pub mod error;
pub mod memory;
pub mod rest;
pub mod source;
pub mod types;

pub use change::{ChangePayload, color_field, decode_change};
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use memory::MemorySource;
pub use rest::RestSource;
pub use source::ThemeSource;
pub use types::{ChangeKind, ChangeStream, ThemeChangeEvent};
