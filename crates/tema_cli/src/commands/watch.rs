//! `tema watch`: follow the stored primary until Ctrl-C.

use anyhow::{Context, Result};
use tema_resolver::{ResolverConfig, ThemeResolver, ThemeSnapshot};
use tema_store::RestSource;

use crate::output;

fn print_snapshot(snapshot: &ThemeSnapshot, css: bool) {
    if css {
        output::raw("css", &snapshot.theme.to_css(tema_constant::theme::DEFAULT_SELECTOR));
    } else {
        output::theme(&snapshot.theme, Some(snapshot.revision));
    }
}

pub async fn handle(css: bool) -> Result<()> {
    let source = RestSource::from_env().context("backend is not configured (set TEMA_STORE_URL and TEMA_STORE_KEY)")?;
    let resolver = ThemeResolver::with_config(source, ResolverConfig::from_env());

    let spinner = output::spinner("Connecting to theme changes...");
    let subscription = resolver.initialize().await;
    if subscription.is_live() {
        output::spinner_success(&spinner, "Following theme changes (Ctrl-C to stop)");
    } else {
        output::spinner_error(&spinner, "Could not subscribe to theme changes, showing the current palette only");
    }

    let mut palette = resolver.watch();
    print_snapshot(&palette.borrow_and_update(), css);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = palette.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = *palette.borrow_and_update();
                print_snapshot(&snapshot, css);
            }
        }
    }

    subscription.close().await;
    output::dim("Stopped");
    Ok(())
}
