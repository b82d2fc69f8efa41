use {
    crate::{ContentError, PlaylistEntry, config::DEFAULT_PLAYER_URL},
    serde::Deserialize,
    url::Url,
};

/// Source of jokes and of video ids for the playlist.
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    /// One joke as plain text.
    async fn joke(&self) -> Result<String, ContentError>;

    /// Embeddable videos, ranked in provider order.
    async fn videos(&self) -> Result<Vec<PlaylistEntry>, ContentError>;

    /// Player page that video ids are appended to, see [`crate::player_address`].
    fn player_base(&self) -> Result<Url, ContentError> {
        Ok(Url::parse(DEFAULT_PLAYER_URL)?)
    }
}

#[derive(Deserialize)]
struct JokeResponse {
    joke: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

/// Decode a `{ "joke": "..." }` body.
pub fn parse_joke(body: &str) -> Result<String, ContentError> {
    let response: JokeResponse = serde_json::from_str(body)?;
    Ok(response.joke)
}

/// Decode a search listing into entries ranked by position.
///
/// Items without a video id (channels, playlists) are skipped and do not
/// take up a rank.
pub fn parse_search(body: &str) -> Result<Vec<PlaylistEntry>, ContentError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response
        .items
        .into_iter()
        .filter_map(|item| item.id.video_id)
        .enumerate()
        .map(|(rank, id)| PlaylistEntry::new(id, rank))
        .collect())
}
