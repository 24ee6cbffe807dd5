use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tokio_util::sync::CancellationToken;
use tracing::warn;

/// Builds the User-Agent sent to YouTube.
///
/// The configured application name goes first. An empty name leaves only the
/// crate identifier.
#[must_use]
pub fn user_agent(app_name: &str) -> String {
    let crate_ident = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let app_name = app_name.trim();
    if app_name.is_empty() {
        crate_ident
    } else {
        format!("{app_name} {crate_ident}")
    }
}

/// # Errors
/// Errors when the app name contains characters not allowed in a header value
/// or when the TLS backend cannot be initialized
pub fn init_http_client(app_name: &str) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&user_agent(app_name)).context("Building User-Agent header")?,
    );

    reqwest::Client::builder()
        .default_headers(headers)
        .connect_timeout(Duration::from_secs(10))
        .build()
        .context("Building HTTP client")
}

/// Returns a token that gets cancelled once the user hits Ctrl+C.
///
/// Must be called from within a tokio runtime.
#[must_use]
pub fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let on_signal = token.clone();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, abandoning pending YouTube requests");
            on_signal.cancel();
        }
    });

    token
}
