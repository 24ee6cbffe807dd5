//! Subset of the YouTube Data API v3 resources read by the shows pipeline.
//!
//! See: <https://developers.google.com/youtube/v3/docs>

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Response of `playlistItems.list`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub id: Option<String>,
    pub snippet: Option<PlaylistItemSnippet>,
    pub status: Option<PlaylistItemStatus>,
}

impl PlaylistItem {
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.status
            .as_ref()
            .and_then(|s| s.privacy_status.as_deref())
            == Some(PRIVACY_PUBLIC)
    }
}

pub const PRIVACY_PUBLIC: &str = "public";

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Zero-based position of the item in the playlist
    pub position: Option<u64>,
    pub resource_id: Option<ResourceId>,
    pub thumbnails: Option<Thumbnails>,
}

/// The video a playlist item points to
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub video_id: Option<String>,
}

/// Only the sizes the shows pipeline picks from
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Thumbnails {
    pub medium: Option<Thumbnail>,
    pub standard: Option<Thumbnail>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemStatus {
    /// `public`, `unlisted` or `private`
    pub privacy_status: Option<String>,
}

/// Response of `videos.list`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<Video>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub live_streaming_details: Option<LiveStreamingDetails>,
}

/// Only present on videos that are, were, or will be broadcast live
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamingDetails {
    pub scheduled_start_time: Option<DateTime<Utc>>,
    pub actual_start_time: Option<DateTime<Utc>>,
    pub actual_end_time: Option<DateTime<Utc>>,
}

/// Body Google APIs send along with a non-success status
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}
