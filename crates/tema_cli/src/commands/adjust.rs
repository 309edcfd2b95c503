//! `tema adjust`

use anyhow::{Result, bail};
use serde::Serialize;
use tema_color::{Color, darken, lighten};

use crate::output;

#[derive(Serialize)]
struct Adjustment {
    input: Color,
    percent: f64,
    darken: bool,
    output: Color,
}

pub fn handle(color: &str, percent: f64, darken_instead: bool) -> Result<()> {
    if !percent.is_finite() {
        bail!("percent must be a finite number, got {percent}");
    }
    let input = super::parse_color(color)?;
    let adjusted = if darken_instead {
        darken(input, percent)
    } else {
        lighten(input, percent)
    };

    let adjustment = Adjustment {
        input,
        percent,
        darken: darken_instead,
        output: adjusted,
    };
    if output::is_json() {
        output::data("adjust", &adjustment);
    } else {
        output::kv("input", &input.to_string());
        output::kv(if darken_instead { "darken" } else { "lighten" }, &percent.to_string());
        output::kv("output", &adjusted.to_string());
    }
    Ok(())
}
