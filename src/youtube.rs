use anyhow::Result;

pub mod api;
pub mod structs;

pub use api::YouTubeClient;
use structs::{PlaylistItem, Video};

/// First pipeline stage: where playlist entries come from
pub trait PlaylistSource {
    /// Lists up to `max_results` items of a playlist, with their snippet and status
    ///
    /// # Errors
    /// Errors on network failure or when the API rejects the request
    fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> impl Future<Output = Result<Vec<PlaylistItem>>> + Send;
}

/// Second pipeline stage: live broadcast timings for a batch of videos
pub trait LiveDetailsSource {
    /// Looks up `liveStreamingDetails` for every ID in one request.
    ///
    /// Videos the API doesn't know about are simply absent from the result.
    ///
    /// # Errors
    /// Errors on network failure or when the API rejects the request
    fn list_live_streaming_details(
        &self,
        video_ids: &[String],
    ) -> impl Future<Output = Result<Vec<Video>>> + Send;
}
