use {
    crate::{
        ContentConfig, ContentError, PlaylistEntry,
        provider::{ContentSource, parse_joke, parse_search},
    },
    reqwest::header::ACCEPT,
    url::Url,
};

/// [`ContentSource`] backed by icanhazdadjoke and the YouTube search API.
///
/// Requests are made once; there is no retry or caching.
#[derive(Debug, Clone)]
pub struct HttpContent {
    client: reqwest::Client,
    config: ContentConfig,
}

impl HttpContent {
    pub fn new(config: ContentConfig) -> Result<Self, ContentError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("mood/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }
}

impl ContentSource for HttpContent {
    async fn joke(&self) -> Result<String, ContentError> {
        let body = self
            .client
            .get(self.config.joke_url())
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_joke(&body)
    }

    async fn videos(&self) -> Result<Vec<PlaylistEntry>, ContentError> {
        let key = self.config.api_key().ok_or(ContentError::MissingApiKey)?;
        let max_results = self.config.max_results().to_string();
        let body = self
            .client
            .get(self.config.search_url())
            .query(&[
                ("key", key),
                ("part", "snippet"),
                ("maxResults", max_results.as_str()),
                ("q", self.config.query()),
                ("type", "video"),
                ("order", "viewCount"),
                ("videoEmbeddable", "true"),
                ("videoSyndicated", "true"),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let entries = parse_search(&body)?;
        log::debug!("discovered {} videos for {:?}", entries.len(), self.config.query());
        Ok(entries)
    }

    fn player_base(&self) -> Result<Url, ContentError> {
        self.config.player_base()
    }
}
