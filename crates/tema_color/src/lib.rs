//! tema-color: color values and theme derivation.
//!
//! A [`Theme`] is always derived from a single primary [`Color`]: the light
//! variant is `lighten(primary, 0.4)` and the dark variant is
//! `darken(primary, 0.15)`. Both shifts are additive per channel and clamped,
//! not perceptual.
//!
//! ```rust
//! use tema_color::{Color, Theme, lighten};
//!
//! let primary: Color = "#5ba58c".parse().unwrap();
//! assert_eq!(lighten(primary, 0.4).to_string(), "#c1fff2");
//!
//! let theme = Theme::from_primary(primary);
//! assert_eq!(theme.primary_dark().to_string(), "#357f66");
//! ```

pub mod color;
pub mod error;
pub mod shade;
pub mod theme;

pub use color::Color;
pub use error::{MalformedColorError, Result};
pub use shade::{darken, lighten, pixel_delta};
pub use theme::Theme;
