use {crate::ContentError, url::Url};

pub const API_KEY_ENV: &str = "YT_API_KEY";
pub const QUERY_ENV: &str = "MOOD_VIDEO_QUERY";
pub const PLAYER_URL_ENV: &str = "MOOD_PLAYER_URL";

pub const DEFAULT_PLAYER_URL: &str = "http://localhost:3004/";

/// Where jokes and videos come from, and where videos are played.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentConfig {
    joke_url: String,
    search_url: String,
    api_key: Option<String>,
    query: String,
    max_results: usize,
    player_url: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            joke_url: "https://icanhazdadjoke.com/".to_string(),
            search_url: "https://www.googleapis.com/youtube/v3/search".to_string(),
            api_key: None,
            query: "funny animals".to_string(),
            max_results: 20,
            player_url: DEFAULT_PLAYER_URL.to_string(),
        }
    }
}

impl ContentConfig {
    /// Defaults overridden by `YT_API_KEY`, `MOOD_VIDEO_QUERY` and `MOOD_PLAYER_URL`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config.api_key = Some(key);
        }
        if let Ok(query) = std::env::var(QUERY_ENV) {
            config.query = query;
        }
        if let Ok(url) = std::env::var(PLAYER_URL_ENV) {
            config.player_url = url;
        }
        config
    }

    pub fn with_joke_url(mut self, url: impl Into<String>) -> Self {
        self.joke_url = url.into();
        self
    }

    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_player_url(mut self, url: impl Into<String>) -> Self {
        self.player_url = url.into();
        self
    }

    pub fn joke_url(&self) -> &str {
        &self.joke_url
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn player_url(&self) -> &str {
        &self.player_url
    }

    /// Parsed player base address.
    pub fn player_base(&self) -> Result<Url, ContentError> {
        Ok(Url::parse(&self.player_url)?)
    }
}
