mod classify;
mod csv;

pub use csv::parse_matches;

use chrono::Utc;
use reqwest::Client;
use std::env;
use std::time::Duration;
use thiserror::Error;

use crate::models::{FeedDocument, FeedFailure};
use crate::utils::format_feed_timestamp;

const DEFAULT_SHEET_ID: &str = "1QkVj51WMKSd6-LU4vZK3dYPk6QLQIO014ydpACtThNk";
const DEFAULT_SHEET_GID: &str = "0";

/// Upstream spreadsheet fetch bound; an expired timeout is a transport
/// failure like any other.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(15);

/// An ingestion run fails as a whole: a half-fetched spreadsheet must not
/// leak a partial match list into the feed.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("spreadsheet request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Google Sheets HTTP {0}")]
    UpstreamStatus(reqwest::StatusCode),
    #[error("empty response from Google Sheets")]
    EmptyPayload,
}

impl IngestError {
    /// Wire-shape error document for the degraded 502 response.
    pub fn to_document(&self) -> FeedFailure {
        FeedFailure::new(self.to_string())
    }
}

/// Fetches the spreadsheet CSV export and normalizes it into a feed
/// document. Cheap to clone; shared as axum state by the API server.
#[derive(Debug, Clone)]
pub struct Ingestor {
    client: Client,
    csv_url: String,
}

impl Ingestor {
    pub fn from_env() -> Self {
        let sheet_id =
            env::var("SHEET_ID").unwrap_or_else(|_| DEFAULT_SHEET_ID.to_string());
        let gid =
            env::var("SHEET_GID").unwrap_or_else(|_| DEFAULT_SHEET_GID.to_string());
        Self::new(format!(
            "https://docs.google.com/spreadsheets/d/{sheet_id}/export?format=csv&gid={gid}"
        ))
    }

    pub fn new(csv_url: String) -> Self {
        Self {
            client: Client::new(),
            csv_url,
        }
    }

    /// One full ingestion pass: fetch the export, normalize the rows,
    /// stamp the document with the generation time.
    pub async fn run(&self) -> Result<FeedDocument, IngestError> {
        let csv_text = self.fetch_csv().await?;
        let matches = parse_matches(&csv_text);
        tracing::info!("Parsed {} matches from spreadsheet export", matches.len());

        Ok(FeedDocument {
            last_update: Some(format_feed_timestamp(Utc::now())),
            matches,
        })
    }

    async fn fetch_csv(&self) -> Result<String, IngestError> {
        tracing::info!("Fetching CSV from Google Sheets…");

        let response = self
            .client
            .get(&self.csv_url)
            .header(reqwest::header::USER_AGENT, "prizmbet-feed/0.1")
            .timeout(UPSTREAM_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(IngestError::UpstreamStatus(response.status()));
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Err(IngestError::EmptyPayload);
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_document_shape() {
        let doc = IngestError::EmptyPayload.to_document();
        assert_eq!(doc.error, "Failed to fetch data");
        assert_eq!(doc.message, "empty response from Google Sheets");
        assert!(doc.last_update.is_none());
        assert!(doc.matches.is_empty());
    }
}
