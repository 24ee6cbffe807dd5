use std::collections::HashMap;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument, warn};

use crate::{
    config::Config,
    show::Show,
    urls::{playlist_url, video_url},
    youtube::{
        LiveDetailsSource, PlaylistSource, YouTubeClient,
        structs::{LiveStreamingDetails, PlaylistItem, Video},
    },
};

/// Turns a YouTube playlist into display-ready [`Show`]s.
///
/// The playlist listing and the live details lookup are separate stages so
/// either one can be swapped out on its own.
#[derive(Debug, Clone)]
pub struct ShowsService<P, L> {
    playlist_id: String,
    default_thumbnail: String,
    playlist: P,
    live_details: L,
}

impl ShowsService<YouTubeClient, YouTubeClient> {
    /// Service backed by YouTube for both stages
    #[must_use]
    pub fn youtube(config: &Config, client: reqwest::Client) -> Self {
        let youtube = YouTubeClient::new(client, config.api_key.clone());
        Self::new(config, youtube.clone(), youtube)
    }
}

impl<P, L> ShowsService<P, L>
where
    P: PlaylistSource + Sync,
    L: LiveDetailsSource + Sync,
{
    #[must_use]
    pub fn new(config: &Config, playlist: P, live_details: L) -> Self {
        Self {
            playlist_id: config.playlist_id.clone(),
            default_thumbnail: config.default_thumbnail.clone(),
            playlist,
            live_details,
        }
    }

    #[must_use]
    pub fn playlist_url(&self) -> String {
        playlist_url(&self.playlist_id)
    }

    /// Fetches up to `max_count` playlist entries and returns the public ones,
    /// enriched with their broadcast timings, latest scheduled first.
    ///
    /// # Errors
    /// Errors when either YouTube request fails. No partial result is returned.
    #[instrument(skip(self), fields(playlist_id = %self.playlist_id))]
    pub async fn get_shows(&self, max_count: u32) -> Result<Vec<Show>> {
        let items = self
            .playlist
            .list_playlist_items(&self.playlist_id, max_count)
            .await
            .context("Listing playlist items")?;
        info!("Fetched {} playlist items", items.len());

        let mut shows = self.playlist_items_to_shows(items);
        if shows.is_empty() {
            info!("Playlist has no public shows");
            return Ok(shows);
        }

        let ids = shows.iter().map(|s| s.id.clone()).collect::<Vec<_>>();
        let videos = self
            .live_details
            .list_live_streaming_details(&ids)
            .await
            .context("Fetching live streaming details")?;
        if videos.len() < ids.len() {
            warn!(
                "Live streaming lookup returned {} of {} requested videos",
                videos.len(),
                ids.len()
            );
        }
        apply_live_streaming_details(&mut shows, videos);

        sort_by_schedule(&mut shows);
        info!("Returning {} shows", shows.len());
        Ok(shows)
    }

    /// Keeps the public items that carry a snippet and maps them to shows
    fn playlist_items_to_shows(&self, items: Vec<PlaylistItem>) -> Vec<Show> {
        items
            .into_iter()
            .filter_map(|item| {
                if !item.is_public() {
                    debug!(item = ?item.id, "Skipping non-public playlist item");
                    return None;
                }
                let Some(snippet) = item.snippet else {
                    debug!(item = ?item.id, "Skipping playlist item without snippet");
                    return None;
                };

                let video_id = snippet
                    .resource_id
                    .and_then(|r| r.video_id)
                    .unwrap_or_default();
                let thumbnail_url = snippet
                    .thumbnails
                    .and_then(|t| {
                        t.medium
                            .and_then(|m| m.url)
                            .or_else(|| t.standard.and_then(|s| s.url))
                    })
                    .unwrap_or_else(|| self.default_thumbnail.clone());
                let url = video_url(
                    &video_id,
                    &self.playlist_id,
                    snippet.position.unwrap_or_default(),
                );

                Some(Show::new(
                    video_id,
                    snippet.title.unwrap_or_default(),
                    snippet.description.unwrap_or_default(),
                    url,
                    thumbnail_url,
                ))
            })
            .collect()
    }
}

/// Overwrites the timings of every show that has live streaming details.
///
/// Fields missing from the details are left as they were. A video listed more
/// than once in the playlist gets the same timings on every copy.
pub fn apply_live_streaming_details(shows: &mut [Show], videos: Vec<Video>) {
    let details = videos
        .into_iter()
        .filter_map(|v| v.live_streaming_details.map(|d| (v.id, d)))
        .collect::<HashMap<String, LiveStreamingDetails>>();

    for show in shows {
        let Some(live) = details.get(&show.id) else {
            debug!(id = %show.id, "No live streaming details");
            continue;
        };

        if let Some(scheduled) = live.scheduled_start_time {
            show.scheduled_start_time = scheduled;
        }
        if let Some(end) = live.actual_end_time {
            show.actual_end_time = Some(end);
        }
        if let Some(start) = live.actual_start_time {
            show.actual_start_time = Some(start);
        }
    }
}

/// Latest scheduled first. Stable, so ties keep playlist order.
pub fn sort_by_schedule(shows: &mut [Show]) {
    shows.sort_by(|a, b| b.scheduled_start_time.cmp(&a.scheduled_start_time));
}
