//! `tema derive`

use anyhow::Result;
use tema_color::Theme;

use crate::output;

pub fn handle(color: &str) -> Result<()> {
    let theme = Theme::from_primary(super::parse_color(color)?);
    output::header("Palette");
    output::theme(&theme, None);
    Ok(())
}
