#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::perf)]
#![warn(clippy::complexity)]
#![warn(clippy::style)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod rules;
pub mod show;
pub mod shows;
pub mod urls;
pub mod util;
pub mod youtube;

pub use config::Config;
pub use rules::Category;
pub use show::Show;
pub use shows::ShowsService;
pub use youtube::{LiveDetailsSource, PlaylistSource, YouTubeClient};
