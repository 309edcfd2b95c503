//! Configuration for the backing store client.
//!
//! One project URL and one API key, shared by the row read and the change feed.

use tema_constant::theme::store;

use crate::error::{Result, StoreError};

/// Connection settings for the hosted backend.
#[derive(Clone)]
pub struct StoreConfig {
    /// Project base URL (e.g. "https://abcd.example.co")
    pub url: String,
    /// Anon/service key, sent as `apikey` and as a bearer token
    pub api_key: String,
    /// Configuration table holding the primary color
    pub table: String,
    /// Column holding the primary color string
    pub column: String,
    /// Change feed URL; defaults to `{url}/realtime/v1/changes`
    pub changes_url: Option<String>,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("api_key", &mask_key(&self.api_key))
            .field("table", &self.table)
            .field("column", &self.column)
            .field("changes_url", &self.changes_url)
            .finish()
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

impl StoreConfig {
    /// Create a config with the default table and column.
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            table: store::TABLE.to_string(),
            column: store::COLUMN.to_string(),
            changes_url: None,
        }
    }

    /// Create config from environment variables.
    ///
    /// Required: `TEMA_STORE_URL`, `TEMA_STORE_KEY`
    /// Optional: `TEMA_CONFIG_TABLE` (default: configuracoes)
    /// Optional: `TEMA_COLOR_COLUMN` (default: cor_primaria)
    /// Optional: `TEMA_CHANGES_URL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`] with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| StoreError::Config(format!("{key} not set")))
        };
        let mut config = Self::new(required("TEMA_STORE_URL")?, required("TEMA_STORE_KEY")?);

        if let Some(table) = lookup("TEMA_CONFIG_TABLE").filter(|v| !v.is_empty()) {
            config.table = table;
        }
        if let Some(column) = lookup("TEMA_COLOR_COLUMN").filter(|v| !v.is_empty()) {
            config.column = column;
        }
        config.changes_url = lookup("TEMA_CHANGES_URL").filter(|v| !v.is_empty());

        Ok(config)
    }

    /// Set the configuration table.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Set the color column.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Override the change feed URL.
    pub fn with_changes_url(mut self, url: impl Into<String>) -> Self {
        self.changes_url = Some(url.into());
        self
    }

    fn base(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// REST endpoint for the configuration table.
    pub fn rows_endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.base(), self.table)
    }

    /// Change feed endpoint (query parameters are added per request).
    ///
    /// Points at an SSE relay when `TEMA_CHANGES_URL` is set. The fallback path
    /// is not served by the hosted backend itself.
    pub fn changes_endpoint(&self) -> String {
        match &self.changes_url {
            Some(url) => url.clone(),
            None => format!("{}/realtime/v1/changes", self.base()),
        }
    }
}
