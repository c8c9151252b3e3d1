//! Tiered feed loading: cache-paint, then the primary static document,
//! then the secondary live endpoint, strictly in that order. Cheapest
//! success wins; the user only ever sees a hard error when every tier
//! comes up empty.

mod cache;
mod sink;
mod transport;

pub use cache::{CacheSlot, CacheWrite};
pub use sink::{ConsoleSink, NoopSink, RenderSink, SourceTag};
pub use transport::{FeedTransport, HttpTransport};

use chrono::{DateTime, Duration, Utc};
use std::env;

use crate::models::{FeedDocument, Match};
use crate::utils::parse_feed_timestamp;

const STALE_HOURS: i64 = 48;

/// Cache-busting bucket width: 10 minutes, so intermediary caches can
/// coalesce rapid repeat loads while the value still rotates.
const CACHE_BUST_BUCKET_MS: i64 = 600_000;

const DEFAULT_SITE_BASE: &str = "https://minortermite.github.io/betprizm";
const DEFAULT_LIVE_URL: &str =
    "https://betprizm.netlify.app/.netlify/functions/update-matches";

/// Endpoints for the two network tiers.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub primary_url: String,
    pub live_url: String,
}

impl FeedConfig {
    pub fn from_env() -> Self {
        let site_base =
            env::var("SITE_BASE").unwrap_or_else(|_| DEFAULT_SITE_BASE.to_string());
        Self {
            primary_url: format!("{}/matches.json", site_base.trim_end_matches('/')),
            live_url: env::var("LIVE_FEED_URL")
                .unwrap_or_else(|_| DEFAULT_LIVE_URL.to_string()),
        }
    }
}

/// What the display layer currently holds. Replaces the page-global match
/// array: the controller owns it and hands out copies.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub matches: Vec<Match>,
    pub last_update: Option<String>,
    pub source: Option<SourceTag>,
    pub failed: bool,
}

/// Advisory staleness: absent, unparsable, or older than 48 hours. Only
/// affects the status line, never whether data is shown.
pub fn is_stale(last_update: Option<&str>, now: DateTime<Utc>) -> bool {
    match last_update.and_then(parse_feed_timestamp) {
        Some(ts) => now.signed_duration_since(ts) > Duration::hours(STALE_HOURS),
        None => true,
    }
}

/// Coarse cache-busting value: current time rounded down to the bucket.
pub fn cache_bust_bucket(now: DateTime<Utc>) -> i64 {
    now.timestamp_millis() / CACHE_BUST_BUCKET_MS
}

pub struct DeliveryController<T: FeedTransport, R: RenderSink> {
    config: FeedConfig,
    transport: T,
    cache: CacheSlot,
    sink: R,
    state: ViewState,
    in_flight: bool,
}

impl<T: FeedTransport, R: RenderSink> DeliveryController<T, R> {
    pub fn new(config: FeedConfig, transport: T, cache: CacheSlot, sink: R) -> Self {
        Self {
            config,
            transport,
            cache,
            sink,
            state: ViewState::default(),
            in_flight: false,
        }
    }

    /// Normal load path: cache-paint, primary, secondary, commit the first
    /// non-empty document. A load started while another is in flight is a
    /// logged no-op returning the current state.
    pub async fn load(&mut self) -> ViewState {
        if self.in_flight {
            tracing::warn!("Load already in flight, skipping");
            return self.state.clone();
        }
        self.in_flight = true;
        self.state = self.load_inner().await;
        self.in_flight = false;
        self.state.clone()
    }

    /// Manual refresh: skip cache-paint and force a fresh primary fetch
    /// with a time-based buster. On failure, degrade to the normal load
    /// path instead of erroring out.
    pub async fn refresh(&mut self) -> ViewState {
        if self.in_flight {
            tracing::warn!("Refresh already in flight, skipping");
            return self.state.clone();
        }
        self.in_flight = true;

        let url = format!(
            "{}?t={}",
            self.config.primary_url,
            Utc::now().timestamp_millis()
        );
        self.state = match self.fetch_non_empty(&url, "refresh").await {
            Some(doc) => {
                let state = self.commit(doc, SourceTag::Live);
                self.sink.show_toast("Feed refreshed");
                state
            }
            None => {
                let state = self.load_inner().await;
                self.sink.show_toast("Showing cached data");
                state
            }
        };

        self.in_flight = false;
        self.state.clone()
    }

    async fn load_inner(&mut self) -> ViewState {
        // 1. Cache-paint: render the previous document instantly, before
        // any network attempt.
        let cached = self.cache.load().filter(FeedDocument::has_matches);
        if let Some(doc) = &cached {
            self.sink.render_matches(&doc.matches);
            self.show_status(doc, SourceTag::Cache);
        }

        let bucket = cache_bust_bucket(Utc::now());

        // 2. Primary static document.
        let primary_url = format!("{}?v={}", self.config.primary_url, bucket);
        if let Some(doc) = self.fetch_non_empty(&primary_url, "static").await {
            return self.commit(doc, SourceTag::Static);
        }

        // 3. Secondary live endpoint.
        let live_url = format!("{}?v={}", self.config.live_url, bucket);
        if let Some(doc) = self.fetch_non_empty(&live_url, "live").await {
            return self.commit(doc, SourceTag::Live);
        }

        // Both tiers failed: stay on the painted cache silently, or show
        // the one genuinely visible error state.
        match cached {
            Some(doc) => ViewState {
                matches: doc.matches,
                last_update: doc.last_update,
                source: Some(SourceTag::Cache),
                failed: false,
            },
            None => {
                self.sink.show_error();
                ViewState {
                    failed: true,
                    ..ViewState::default()
                }
            }
        }
    }

    async fn fetch_non_empty(&mut self, url: &str, tier: &str) -> Option<FeedDocument> {
        match self.transport.fetch_document(url).await {
            Ok(doc) if doc.has_matches() => Some(doc),
            Ok(_) => {
                tracing::warn!("{} source returned no matches", tier);
                None
            }
            Err(e) => {
                tracing::warn!("{} fetch failed: {}", tier, e);
                None
            }
        }
    }

    fn commit(&mut self, doc: FeedDocument, source: SourceTag) -> ViewState {
        self.cache.store(&doc);
        self.sink.render_matches(&doc.matches);
        self.show_status(&doc, source);
        ViewState {
            matches: doc.matches,
            last_update: doc.last_update,
            source: Some(source),
            failed: false,
        }
    }

    fn show_status(&mut self, doc: &FeedDocument, source: SourceTag) {
        let stale = is_stale(doc.last_update.as_deref(), Utc::now());
        self.sink.show_status(doc.last_update.as_deref(), source, stale);
    }
}
