//! Application metadata constants

pub const NAME: &str = "tema";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory name for tema data within the home directory
pub const DATA_DIR: &str = ".tema";
/// Env file inside DATA_DIR, loaded by the CLI before argument parsing
pub const ENV_FILE: &str = "env";
