//! Command dispatch.

pub mod adjust;
pub mod css;
pub mod derive;
pub mod show;
pub mod watch;

use anyhow::{Context, Result};
use tema_color::Color;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Derive { color } => derive::handle(&color),
        Command::Css { color, selector } => css::handle(&color, &selector),
        Command::Adjust {
            color,
            percent,
            darken,
        } => adjust::handle(&color, percent, darken),
        Command::Show => show::handle().await,
        Command::Watch { css } => watch::handle(css).await,
    }
}

/// Parse a color argument, naming the argument in the error.
fn parse_color(raw: &str) -> Result<Color> {
    raw.parse()
        .with_context(|| format!("invalid color argument {raw:?}"))
}
