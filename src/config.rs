use tracing::warn;

pub const ENV_API_KEY: &str = "YouTubeKey";
pub const ENV_APP_NAME: &str = "YouTubeAppName";
pub const ENV_PLAYLIST_ID: &str = "YouTubePlaylistId";
pub const ENV_DEFAULT_THUMBNAIL: &str = "DefaultThumbnail";

/// Everything the shows pipeline needs to know about its deployment.
///
/// Values are taken as-is. Nothing is validated up front: a missing API key
/// only shows up as an authentication error on the first YouTube request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// YouTube Data API key, sent as the `key` query parameter
    pub api_key: String,
    /// Client identifier, prepended to the User-Agent
    pub app_name: String,
    pub playlist_id: String,
    /// Image used when a playlist item carries neither a medium nor a standard thumbnail
    pub default_thumbnail: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration out of an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| {
            lookup(name).unwrap_or_else(|| {
                warn!("Configuration value {name} is not set");
                String::new()
            })
        };

        Self {
            api_key: get(ENV_API_KEY),
            app_name: get(ENV_APP_NAME),
            playlist_id: get(ENV_PLAYLIST_ID),
            default_thumbnail: get(ENV_DEFAULT_THUMBNAIL),
        }
    }
}
