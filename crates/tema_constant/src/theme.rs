//! Theme policy constants.
//!
//! The derivation percentages are fixed policy, not configuration: every
//! consumer of the published variables expects exactly these shades.

/// Fraction passed to `lighten` for the light variant.
pub const LIGHT_PERCENT: f64 = 0.4;
/// Fraction passed to `darken` for the dark variant.
pub const DARK_PERCENT: f64 = 0.15;

/// Published variable names, consumed by the site style sheets.
pub mod vars {
    pub const PRIMARY: &str = "primary";
    pub const PRIMARY_LIGHT: &str = "primary-light";
    pub const PRIMARY_DARK: &str = "primary-dark";
}

/// Default primary (#5ba58c), used until the backend supplies one.
pub const DEFAULT_PRIMARY: (u8, u8, u8) = (0x5b, 0xa5, 0x8c);

/// Default CSS selector the variables are declared on.
pub const DEFAULT_SELECTOR: &str = ":root";

/// Backing store defaults
pub mod store {
    /// Configuration table holding the primary color row
    pub const TABLE: &str = "configuracoes";
    /// Column holding the primary color string
    pub const COLUMN: &str = "cor_primaria";
}
