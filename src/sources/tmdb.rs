use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::domain::{Credits, TrendingMovie};
use crate::errors::{GamePulseError, GamePulseResult};

const PROVIDER: &str = "TMDB";
pub const TRENDING_LIMIT: usize = 6;

#[derive(Debug, Deserialize)]
pub struct TrendingResponse {
    #[serde(default)]
    pub results: Vec<TrendingMovie>,
}

pub struct TmdbSource {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl TmdbSource {
    pub fn new(base_url: Url, api_key: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url,
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> GamePulseResult<Self> {
        let api_key = config
            .tmdb_api_key
            .clone()
            .ok_or_else(|| GamePulseError::MissingEnvVar("GAMEPULSE_TMDB_API_KEY".to_string()))?;

        Ok(Self::new(config.tmdb_api_url.clone(), api_key, config.timeout))
    }

    /// Append `path` to the base URL, keeping any base path such as "/3"
    fn endpoint(&self, path: &str) -> GamePulseResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GamePulseError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(path.split('/').filter(|s| !s.is_empty()));
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> GamePulseResult<T> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GamePulseError::UpstreamStatus {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// This week's trending movies, capped at `limit`
    pub async fn trending(&self, limit: usize) -> GamePulseResult<Vec<TrendingMovie>> {
        debug!(limit, "fetching trending movies");
        let body: TrendingResponse = self.get(self.endpoint("trending/movie/week")?).await?;
        Ok(Self::top(body, limit))
    }

    pub async fn credits(&self, movie_id: u64) -> GamePulseResult<Credits> {
        debug!(movie_id, "fetching movie credits");
        self.get(self.endpoint(&format!("movie/{}/credits", movie_id))?)
            .await
    }

    pub fn top(response: TrendingResponse, limit: usize) -> Vec<TrendingMovie> {
        response.results.into_iter().take(limit).collect()
    }
}
