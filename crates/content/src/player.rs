use url::Url;

/// Address of the player page for `video_id`, e.g. `http://localhost:3004/?video=abc`.
///
/// Any query already on `base` is replaced.
pub fn player_address(base: &Url, video_id: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().clear().append_pair("video", video_id);
    url
}
