//! CLI entry point for tema.

mod cli;
mod commands;
mod output;

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tema_constant::app::{DATA_DIR, ENV_FILE, VERSION};
use tema_observability::ObservabilityConfig;

use crate::cli::Cli;

/// Load the first `file` found walking up from the current directory.
fn load_nearest(file: &Path) {
    if let Ok(cwd) = std::env::current_dir() {
        for dir in cwd.ancestors().take(32) {
            let candidate = dir.join(file);
            if candidate.exists() {
                let _ = dotenvy::from_path(&candidate);
                return;
            }
        }
    }
}

/// Load configuration into the environment. Variables already set win.
/// Order: 1) ~/.tema/env  2) .tema/env (project)  3) .env (project root)
fn load_tema_config() {
    if let Some(home) = dirs::home_dir() {
        let config_path = home.join(DATA_DIR).join(ENV_FILE);
        if config_path.exists() {
            let _ = dotenvy::from_path(&config_path);
        }
    }
    load_nearest(&Path::new(DATA_DIR).join(ENV_FILE));
    load_nearest(Path::new(".env"));
}

/// Tracing to stderr; `warn` by default, `debug` with `-v`, unless `RUST_LOG`
/// or `OTEL_LOG_LEVEL` is set. JSON mode routes log lines through the output
/// envelope instead.
fn init_logging(cli: &Cli) {
    let mut config = ObservabilityConfig::from_env().with_version(VERSION);
    if config.log_level.is_none() {
        config = config.with_log_level(if cli.verbose { "debug" } else { "warn" });
    }
    if output::is_json() {
        config = config.with_console(false).with_log_sink(Arc::new(output::log_line));
    }
    if let Err(e) = tema_observability::init(config) {
        output::warning(&format!("Logging disabled: {e}"));
    }
}

#[tokio::main]
async fn main() {
    load_tema_config();
    let cli = Cli::parse();
    output::init(cli.output);
    init_logging(&cli);

    let result = commands::handle(cli).await;
    tema_observability::shutdown();

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
