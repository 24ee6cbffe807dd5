use urlencoding::encode;

/// Watch URL of a video, opened in the context of its playlist.
///
/// Every component is percent-encoded.
#[must_use]
pub fn video_url(video_id: &str, playlist_id: &str, item_index: u64) -> String {
    format!(
        "https://www.youtube.com/watch?v={}&list={}&index={}",
        encode(video_id),
        encode(playlist_id),
        encode(&item_index.to_string())
    )
}

#[must_use]
pub fn playlist_url(playlist_id: &str) -> String {
    format!("https://www.youtube.com/playlist?list={}", encode(playlist_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_watch_url() {
        assert_eq!(
            video_url("Pa6qtu1wIs8", "PL1rZQsJPBU2StolNg0aqvQswETPcYnNKL", 0),
            "https://www.youtube.com/watch?v=Pa6qtu1wIs8&list=PL1rZQsJPBU2StolNg0aqvQswETPcYnNKL&index=0"
        );
    }

    #[test]
    fn watch_url_escapes_components() {
        assert_eq!(
            video_url("a&b=c", "list id", 12),
            "https://www.youtube.com/watch?v=a%26b%3Dc&list=list%20id&index=12"
        );
    }

    #[test]
    fn builds_playlist_url() {
        assert_eq!(
            playlist_url("PL1rZQsJPBU2StolNg0aqvQswETPcYnNKL"),
            "https://www.youtube.com/playlist?list=PL1rZQsJPBU2StolNg0aqvQswETPcYnNKL"
        );
        assert_eq!(
            playlist_url("PL-x_y.z~/?"),
            "https://www.youtube.com/playlist?list=PL-x_y.z~%2F%3F"
        );
    }
}
