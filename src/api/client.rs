use super::error::ApiError;
use super::types::{ApodPayload, FeedItem};
use crate::feed::FeedWindow;

const API_BASE: &str = "https://api.nasa.gov";
const APOD_PATH: &str = "/planetary/apod";

/// NASA's shared rate-limited key, used when no key is configured.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

#[derive(Clone)]
pub struct ApodClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApodClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(API_BASE, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Fetches every entry in the window, both endpoints included, in the
    /// provider's ascending date order.
    pub async fn fetch_window(&self, window: FeedWindow) -> Result<Vec<FeedItem>, ApiError> {
        let url = format!("{}{}", self.base_url, APOD_PATH);
        let start = window.start.format("%Y-%m-%d").to_string();
        let end = window.end.format("%Y-%m-%d").to_string();

        tracing::debug!(%start, %end, "requesting apod window");

        let payload: ApodPayload = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("start_date", start.as_str()),
                ("end_date", end.as_str()),
                ("thumbs", "true"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(payload
            .into_records()
            .into_iter()
            .map(FeedItem::from_record)
            .collect())
    }
}

impl Default for ApodClient {
    fn default() -> Self {
        Self::new(DEMO_API_KEY)
    }
}
