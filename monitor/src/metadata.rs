use chrono::{DateTime, NaiveDateTime, Utc};
use eyre::{Context, OptionExt};
use reqwest::header::{HeaderMap, LAST_MODIFIED};
use std::future::Future;

/// HTTP date as sent in the Last-Modified header (RFC 1123)
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Last modification time of the monitored resource
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastModified {
    /// Header value exactly as received, used in the alert text
    pub raw: String,
    pub timestamp: DateTime<Utc>,
}

impl LastModified {
    pub fn parse(raw: &str) -> eyre::Result<Self> {
        let timestamp = NaiveDateTime::parse_from_str(raw, HTTP_DATE_FORMAT)
            .wrap_err(format!("Failed to parse Last-Modified date: {raw:?}"))?
            .and_utc();

        Ok(Self {
            raw: raw.to_string(),
            timestamp,
        })
    }

    pub fn from_headers(headers: &HeaderMap) -> eyre::Result<Self> {
        let value = headers
            .get(LAST_MODIFIED)
            .ok_or_eyre("Last-Modified header is missing")?
            .to_str()
            .wrap_err("Last-Modified header is not valid ASCII")?;

        Self::parse(value)
    }

    /// Whole days elapsed since the modification, truncated
    pub fn days_old(&self, now: DateTime<Utc>) -> i64 {
        now.signed_duration_since(self.timestamp).num_days()
    }
}

/// Source of the last modification time of the monitored data
pub trait MetadataSource {
    fn last_modified(&self) -> impl Future<Output = eyre::Result<LastModified>> + Send;
}

/// Reads Last-Modified with a HEAD request, the body is never downloaded
#[derive(Clone, Debug)]
pub struct HttpMetadata {
    client: reqwest::Client,
    url: String,
}

impl HttpMetadata {
    pub fn new(url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_string(),
        }
    }
}

impl MetadataSource for HttpMetadata {
    async fn last_modified(&self) -> eyre::Result<LastModified> {
        let response = self
            .client
            .head(&self.url)
            .send()
            .await
            .wrap_err(format!("HEAD request to {} failed", self.url))?
            .error_for_status()
            .wrap_err("Metadata endpoint responded with an error")?;

        LastModified::from_headers(response.headers())
    }
}
