//! `tema show`: one read of the stored primary color.

use anyhow::{Context, Result};
use tema_color::Theme;
use tema_store::{RestSource, ThemeSource};

use crate::output;

pub async fn handle() -> Result<()> {
    let source = RestSource::from_env().context("backend is not configured (set TEMA_STORE_URL and TEMA_STORE_KEY)")?;

    let spinner = output::spinner("Reading stored primary color...");
    let stored = match source.fetch_primary().await {
        Ok(stored) => {
            spinner.finish_and_clear();
            stored
        }
        Err(e) => {
            output::spinner_error(&spinner, "Failed to read stored primary color");
            return Err(e.into());
        }
    };

    match stored {
        Some(raw) => {
            let primary = raw
                .parse()
                .with_context(|| format!("stored primary color {raw:?} is malformed"))?;
            output::header(&format!("Palette ({} / {})", source.config().table, source.config().column));
            output::theme(&Theme::from_primary(primary), None);
        }
        None => {
            output::warning("No primary color stored, the default palette stays in effect");
            output::theme(&Theme::default(), None);
        }
    }
    Ok(())
}
