#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::cargo)]
#![warn(clippy::perf)]
#![warn(clippy::complexity)]
#![warn(clippy::style)]
#![allow(clippy::multiple_crate_versions)]

use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::Parser;
use standup_shows::{
    Config, Show, ShowsService,
    util::{cancel_on_ctrl_c, init_http_client},
};
use tokio::select;
use tracing::info;

/// Lists the shows of a YouTube playlist, newest scheduled first
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maximum amount of playlist entries to request
    #[arg(short = 'n', long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(1..))]
    max_count: u32,

    /// Playlist to read instead of `YouTubePlaylistId`
    #[arg(short, long)]
    playlist_id: Option<String>,

    /// Print the shows as JSON instead of a listing
    #[arg(long)]
    json: bool,

    /// Give up after this many seconds
    #[arg(short, long, default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::from_env();
    if let Some(playlist_id) = args.playlist_id {
        config.playlist_id = playlist_id;
    }

    let client = init_http_client(&config.app_name)?;
    let service = ShowsService::youtube(&config, client);

    let ct = cancel_on_ctrl_c();

    info!("Fetching shows from {}", service.playlist_url());
    let shows = select! {
        () = ct.cancelled() => bail!("Cancelled"),
        res = tokio::time::timeout(Duration::from_secs(args.timeout), service.get_shows(args.max_count)) => {
            res.context("Timed out fetching shows")??
        }
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&shows).context("Serializing shows")?
        );
    } else {
        print_listing(&shows);
    }

    Ok(())
}

fn print_listing(shows: &[Show]) {
    let now = Utc::now();
    for show in shows {
        let badge = if show.is_on_air() {
            "[ON AIR] "
        } else if show.is_new(now) {
            "[NEW] "
        } else if show.is_in_future(now) {
            "[UPCOMING] "
        } else {
            ""
        };
        let category = show
            .category
            .map_or_else(String::new, |c| format!(" ({c})"));

        println!(
            "{badge}{}{category} - {}",
            show.display_title,
            show.scheduled_start_time_humanized(now)
        );
        println!("    {}", show.url);
        if let Some(links) = show.community_links_url.as_deref().filter(|_| show.has_links) {
            println!("    Links: {links}");
        }
    }
}
