//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};
use tema_constant::app::NAME;
use tema_constant::theme::DEFAULT_SELECTOR;

/// Derive and follow the site color palette from one stored primary color
#[derive(Parser)]
#[command(name = NAME, about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for scripts and build tooling
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the palette derived from a primary color
    Derive {
        /// Primary color, e.g. "#5ba58c"
        color: String,
    },
    /// Print the palette as a CSS custom-property block
    Css {
        /// Primary color, e.g. "#5ba58c"
        color: String,
        /// Selector the variables are declared on
        #[arg(long, default_value = DEFAULT_SELECTOR)]
        selector: String,
    },
    /// Lighten (or darken) one color by a fraction of full scale
    Adjust {
        /// Color to adjust, e.g. "#5ba58c"
        color: String,
        /// Fraction of 255 added to every channel (e.g. 0.4)
        #[arg(allow_negative_numbers = true)]
        percent: f64,
        /// Subtract instead of add
        #[arg(long)]
        darken: bool,
    },
    /// Read the stored primary color from the backend and print its palette
    Show,
    /// Follow the stored primary color and print every palette change (Ctrl-C to stop)
    Watch {
        /// Print each palette as a CSS block
        #[arg(long)]
        css: bool,
    },
}
