//! Where profile statistics come from.
//!
//! `HttpStatsSource` talks to the public statistics API. Every request runs
//! under an explicit deadline; whatever happens (status, transport, body) is
//! folded into one `LookupError` value.

use std::future::Future;
use std::time::Duration;

use leetmetric_types::{LookupError, ProfileStats, Username};
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::Result;

pub trait StatsSource {
    fn fetch_profile(
        &self,
        username: &Username,
    ) -> impl Future<Output = std::result::Result<ProfileStats, LookupError>>;
}

#[derive(Debug, Clone)]
pub struct HttpStatsSource {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpStatsSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("leetmetric/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.endpoint.clone(), config.timeout())
    }

    pub fn profile_url(&self, username: &Username) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), username)
    }

    async fn request(&self, url: &str) -> std::result::Result<ProfileStats, LookupError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "stats API returned non-success status");
            return Err(LookupError::from_status(status.as_u16()));
        }

        let body = response.text().await.map_err(classify_transport)?;
        parse_profile(&body)
    }
}

impl StatsSource for HttpStatsSource {
    async fn fetch_profile(
        &self,
        username: &Username,
    ) -> std::result::Result<ProfileStats, LookupError> {
        let url = self.profile_url(username);
        debug!(%url, timeout_ms = self.timeout.as_millis() as u64, "requesting profile");

        match tokio::time::timeout(self.timeout, self.request(&url)).await {
            Ok(result) => {
                if let Err(err) = &result {
                    warn!(%username, error = %err, "profile lookup failed");
                }
                result
            }
            Err(_) => {
                warn!(%username, "profile lookup exceeded deadline");
                Err(LookupError::Timeout)
            }
        }
    }
}

fn classify_transport(err: reqwest::Error) -> LookupError {
    if err.is_timeout() {
        LookupError::Timeout
    } else if err.is_decode() {
        LookupError::InvalidResponse
    } else {
        debug!(error = %err, "transport failure");
        LookupError::NetworkError
    }
}

/// Parse a 2xx response body into stats.
///
/// The API reports unknown accounts with a 200 and `"status": "error"`; that
/// shape maps to `UserNotFound`. Non-object bodies, wrongly typed fields and
/// solved counts whose sum overflows are `InvalidResponse`.
pub fn parse_profile(body: &str) -> std::result::Result<ProfileStats, LookupError> {
    let value: Value = serde_json::from_str(body).map_err(|_| LookupError::InvalidResponse)?;
    let Some(object) = value.as_object() else {
        return Err(LookupError::InvalidResponse);
    };

    if object.get("status").and_then(Value::as_str) == Some("error") {
        let message = object
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_ascii_lowercase();
        return Err(if message.contains("not exist") || message.contains("not found") {
            LookupError::UserNotFound
        } else {
            LookupError::InvalidResponse
        });
    }

    let stats: ProfileStats =
        serde_json::from_value(value).map_err(|_| LookupError::InvalidResponse)?;
    if stats.checked_total_solved().is_none() {
        warn!("solved counts overflow");
        return Err(LookupError::InvalidResponse);
    }
    Ok(stats)
}
