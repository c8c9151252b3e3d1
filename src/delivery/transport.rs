use anyhow::Result;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

use crate::models::FeedDocument;

/// Client-side fetch bound, mirroring the ingestion side's upstream
/// timeout.
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Opaque fetch capability: URL in, parsed feed document or failure out.
/// Keeps the controller testable without a network.
pub trait FeedTransport {
    fn fetch_document(&self, url: &str) -> impl Future<Output = Result<FeedDocument>> + Send;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl FeedTransport for HttpTransport {
    fn fetch_document(&self, url: &str) -> impl Future<Output = Result<FeedDocument>> + Send {
        async move {
            let response = self
                .client
                .get(url)
                .timeout(FETCH_TIMEOUT)
                .send()
                .await?;

            if !response.status().is_success() {
                anyhow::bail!("feed HTTP {}", response.status());
            }

            Ok(response.json::<FeedDocument>().await?)
        }
    }
}
