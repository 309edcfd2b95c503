//! Derived theme triple.

use std::fmt::Write;

use serde::{Deserialize, Serialize};
use tema_constant::theme::{vars, DARK_PERCENT, DEFAULT_PRIMARY, LIGHT_PERCENT};

use crate::color::Color;
use crate::shade::{darken, lighten};

/// `(primary, primary-light, primary-dark)`, always derived together from
/// one primary. The shades cannot be set on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "ThemeRepr")]
pub struct Theme {
    primary: Color,
    primary_light: Color,
    primary_dark: Color,
}

/// Only the primary is read back; the shades are re-derived.
#[derive(Deserialize)]
struct ThemeRepr {
    primary: Color,
}

impl From<ThemeRepr> for Theme {
    fn from(repr: ThemeRepr) -> Self {
        Theme::from_primary(repr.primary)
    }
}

impl Theme {
    pub fn from_primary(primary: Color) -> Self {
        Self {
            primary,
            primary_light: lighten(primary, LIGHT_PERCENT),
            primary_dark: darken(primary, DARK_PERCENT),
        }
    }

    pub fn primary(&self) -> Color {
        self.primary
    }

    pub fn primary_light(&self) -> Color {
        self.primary_light
    }

    pub fn primary_dark(&self) -> Color {
        self.primary_dark
    }

    /// Published `(name, value)` pairs in declaration order.
    pub fn variables(&self) -> [(&'static str, Color); 3] {
        [
            (vars::PRIMARY, self.primary),
            (vars::PRIMARY_LIGHT, self.primary_light),
            (vars::PRIMARY_DARK, self.primary_dark),
        ]
    }

    /// Same as [`Theme::variables`] with CSS custom-property names (`--primary`, ...).
    pub fn css_variables(&self) -> [(String, Color); 3] {
        self.variables().map(|(name, color)| (format!("--{name}"), color))
    }

    /// Render a CSS rule declaring the three custom properties on `selector`.
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = String::with_capacity(96);
        let _ = writeln!(out, "{selector} {{");
        for (name, color) in self.css_variables() {
            let _ = writeln!(out, "  {name}: {color};");
        }
        out.push_str("}\n");
        out
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from_primary(Color::from(DEFAULT_PRIMARY))
    }
}

impl From<Color> for Theme {
    fn from(primary: Color) -> Self {
        Theme::from_primary(primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primary_applies_policy_percentages() {
        let theme = Theme::from_primary("#5ba58c".parse().unwrap());
        assert_eq!(theme.primary().to_string(), "#5ba58c");
        assert_eq!(theme.primary_light().to_string(), "#c1fff2");
        assert_eq!(theme.primary_dark().to_string(), "#357f66");
    }

    #[test]
    fn test_default_is_derived_from_default_primary() {
        let theme = Theme::default();
        assert_eq!(theme.primary(), Color(0x5b, 0xa5, 0x8c));
        assert_eq!(theme, Theme::from_primary(theme.primary()));
    }

    #[test]
    fn test_variable_names() {
        let theme = Theme::default();
        let names: Vec<&str> = theme.variables().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["primary", "primary-light", "primary-dark"]);

        let css: Vec<String> = theme.css_variables().into_iter().map(|(n, _)| n).collect();
        assert_eq!(css, vec!["--primary", "--primary-light", "--primary-dark"]);
    }

    #[test]
    fn test_to_css() {
        let theme = Theme::from_primary("#255f4f".parse().unwrap());
        assert_eq!(
            theme.to_css(":root"),
            ":root {\n  --primary: #255f4f;\n  --primary-light: #8bc5b5;\n  --primary-dark: #003929;\n}\n"
        );
    }

    #[test]
    fn test_serialize_uses_published_names() {
        let theme = Theme::from_primary("#5ba58c".parse().unwrap());
        let json = serde_json::to_value(theme).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "primary": "#5ba58c",
                "primary-light": "#c1fff2",
                "primary-dark": "#357f66",
            })
        );
    }

    #[test]
    fn test_deserialize_rederives_shades() {
        let theme: Theme = serde_json::from_str(
            r##"{"primary": "#5ba58c", "primary-light": "#000000", "primary-dark": "#000000"}"##,
        )
        .unwrap();
        assert_eq!(theme.primary_light().to_string(), "#c1fff2");
        assert_eq!(theme.primary_dark().to_string(), "#357f66");
    }
}
