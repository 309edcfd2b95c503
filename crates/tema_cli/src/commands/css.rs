//! `tema css`

use anyhow::Result;
use tema_color::Theme;

use crate::output;

pub fn handle(color: &str, selector: &str) -> Result<()> {
    let theme = Theme::from_primary(super::parse_color(color)?);
    output::raw("css", &theme.to_css(selector));
    Ok(())
}
