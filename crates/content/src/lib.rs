//! Reactive content: jokes, discovered videos, and the playlist over them.

pub mod config;
pub mod error;
pub mod http;
pub mod player;
pub mod playlist;
pub mod provider;

pub use config::ContentConfig;
pub use error::{ContentError, PlaylistError};
pub use http::HttpContent;
pub use player::player_address;
pub use playlist::{Order, PlaylistConfig, PlaylistEntry, PlaylistNavigator};
pub use provider::ContentSource;
