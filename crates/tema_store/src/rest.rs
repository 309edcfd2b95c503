//! Hosted backend source: REST row read plus a server-sent-event change feed.

use std::time::Instant;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest_eventsource::{Event, EventSource, retry};
use serde_json::{Map, Value};
use tema_observability::{record_duration, record_error, store_span};
use tracing::{Instrument, debug, trace, warn};

use crate::change::{color_field, decode_change};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::source::ThemeSource;
use crate::types::{ChangeKind, ChangeStream};

/// [`ThemeSource`] backed by the hosted database.
///
/// - read: `GET {url}/rest/v1/{table}?select={column}&limit=1`
/// - changes: `GET {changes_url}?table={table}&event=UPDATE` as `text/event-stream`
///
/// Both carry the key as `apikey` and as a bearer token.
///
/// The hosted backend serves the read endpoint only. Its realtime channel is a
/// websocket protocol this client does not speak, so the change feed must be a
/// relay that re-emits row updates as server-sent events, configured with
/// `TEMA_CHANGES_URL`. Without it the default path is tried and subscribing
/// fails unless something serves it there.
#[derive(Clone)]
pub struct RestSource {
    config: StoreConfig,
    headers: HeaderMap,
    client: Client,
}

impl RestSource {
    /// Create a source. Fails if the URL or key is empty or the key is not a
    /// valid header value.
    pub fn new(config: StoreConfig) -> Result<Self> {
        if config.url.trim().is_empty() {
            return Err(StoreError::Config("store URL is empty".into()));
        }
        if config.api_key.is_empty() {
            return Err(StoreError::Config("store API key is empty".into()));
        }
        let headers = auth_headers(&config.api_key)?;
        Ok(Self {
            config,
            headers,
            client: Client::new(),
        })
    }

    /// Create a source from `TEMA_STORE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(StoreConfig::from_env()?)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    async fn fetch_rows(&self) -> Result<Vec<Map<String, Value>>> {
        let response = self
            .client
            .get(self.config.rows_endpoint())
            .headers(self.headers.clone())
            .query(&[("select", self.config.column.as_str()), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    async fn open_feed(&self) -> Result<EventSource> {
        let request = self
            .client
            .get(self.config.changes_endpoint())
            .headers(self.headers.clone())
            .query(&[
                ("table", self.config.table.as_str()),
                ("event", ChangeKind::Update.as_str()),
            ]);

        let mut feed = EventSource::new(request)
            .map_err(|e| StoreError::Stream(format!("Failed to create event source: {}", e)))?;
        // Reconnects are the resolver's decision, not the transport's.
        feed.set_retry_policy(Box::new(retry::Never));

        match feed.next().await {
            Some(Ok(Event::Open)) => Ok(feed),
            Some(Ok(Event::Message(_))) => Err(StoreError::Stream(
                "change feed sent a message before opening".into(),
            )),
            Some(Err(reqwest_eventsource::Error::InvalidStatusCode(status, response))) => {
                let body = response.text().await.unwrap_or_default();
                feed.close();
                Err(StoreError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
            Some(Err(e)) => {
                feed.close();
                Err(StoreError::Stream(e.to_string()))
            }
            None => Err(StoreError::Closed),
        }
    }
}

fn auth_headers(api_key: &str) -> Result<HeaderMap> {
    let invalid = |_| StoreError::Config("store API key is not a valid header value".into());
    let mut headers = HeaderMap::new();
    headers.insert("apikey", HeaderValue::from_str(api_key).map_err(invalid)?);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(invalid)?,
    );
    Ok(headers)
}

#[async_trait]
impl ThemeSource for RestSource {
    fn source_id(&self) -> &str {
        "rest"
    }

    async fn fetch_primary(&self) -> Result<Option<String>> {
        let span = store_span!("fetch_primary", self.config.table.as_str());
        async {
            let start = Instant::now();
            let rows = self.fetch_rows().await.inspect_err(record_error)?;
            record_duration("duration_ms", start.elapsed());

            let primary = rows
                .first()
                .and_then(|row| color_field(row, &self.config.column));
            debug!(rows = rows.len(), found = primary.is_some(), "Fetched stored primary color");
            Ok::<_, StoreError>(primary)
        }
        .instrument(span)
        .await
    }

    async fn subscribe(&self) -> Result<ChangeStream> {
        let span = store_span!("subscribe", self.config.table.as_str());
        let mut feed = self
            .open_feed()
            .instrument(span.clone())
            .await
            .inspect_err(|e| span.in_scope(|| record_error(e)))?;
        span.in_scope(|| debug!("Change feed open"));

        let table = self.config.table.clone();
        let column = self.config.column.clone();
        let stream = async_stream::stream! {
            while let Some(event) = feed.next().await {
                match event {
                    Ok(Event::Open) => continue,
                    Ok(Event::Message(message)) => match decode_change(&message.data, &table, &column) {
                        Ok(Some(change)) => {
                            yield Ok(change);
                        }
                        Ok(None) => trace!(data = %message.data, "Skipping non-theme change"),
                        Err(e) => warn!(error = %e, "Skipping undecodable change payload"),
                    },
                    Err(reqwest_eventsource::Error::StreamEnded) => break,
                    Err(e) => {
                        yield Err(StoreError::Stream(e.to_string()));
                        break;
                    }
                }
            }
            feed.close();
        };

        Ok(ChangeStream::new(Box::pin(stream)))
    }
}
