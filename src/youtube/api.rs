use anyhow::{Context, Result, bail};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::{
    LiveDetailsSource, PlaylistSource,
    structs::{ApiErrorResponse, PlaylistItem, PlaylistItemListResponse, Video, VideoListResponse},
};

pub const YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Upper bound YouTube accepts for `maxResults` on a `videos.list` call
pub const LIVE_DETAILS_MAX_RESULTS: u32 = 25;

/// API-key authenticated client for the read-only YouTube Data API endpoints
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    #[must_use]
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: YOUTUBE_API_BASE_URL.to_string(),
        }
    }

    /// Points the client at another API root, e.g. a local mock server
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn get<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let req = self
            .client
            .get(format!("{}/{resource}", self.base_url))
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("Fetching {resource}"))?;

        let status = req.status();
        if !status.is_success() {
            let body = req.text().await.unwrap_or_default();
            bail!(
                "YouTube rejected {resource} request: {}",
                describe_api_error(status, &body)
            );
        }

        req.json::<T>()
            .await
            .with_context(|| format!("Parsing {resource} response"))
    }
}

/// Turns an error response into something readable, preferring the message
/// from Google's error document over the raw body
fn describe_api_error(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(err) => format!("{status}: {}", err.error.message),
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => format!("{status}: {}", body.trim()),
    }
}

impl PlaylistSource for YouTubeClient {
    #[instrument(skip(self))]
    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<Vec<PlaylistItem>> {
        let response: PlaylistItemListResponse = self
            .get(
                "playlistItems",
                &[
                    ("part", "snippet,status"),
                    ("playlistId", playlist_id),
                    ("maxResults", &max_results.to_string()),
                ],
            )
            .await?;

        debug!("Received {} playlist items", response.items.len());
        Ok(response.items)
    }
}

impl LiveDetailsSource for YouTubeClient {
    #[instrument(skip(self))]
    async fn list_live_streaming_details(&self, video_ids: &[String]) -> Result<Vec<Video>> {
        let response: VideoListResponse = self
            .get(
                "videos",
                &[
                    ("part", "liveStreamingDetails"),
                    ("id", &video_ids.join(",")),
                    ("maxResults", &LIVE_DETAILS_MAX_RESULTS.to_string()),
                ],
            )
            .await?;

        debug!("Received {} videos", response.items.len());
        Ok(response.items)
    }
}
