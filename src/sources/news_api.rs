use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use reqwest::Client;
use scraper::Html;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::domain::{parse_published, Article, Category};
use crate::errors::{GamePulseError, GamePulseResult};
use crate::sources::traits::NewsSource;

const PROVIDER: &str = "NewsAPI";
const REMOVED_MARKER: &str = "[Removed]";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawSource {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    pub source: Option<RawSource>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub url_to_image: Option<String>,
    pub published_at: Option<String>,
}

pub struct NewsApiSource {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
    language: String,
    page_size: usize,
}

impl NewsApiSource {
    pub fn new(
        endpoint: Url,
        api_key: Option<String>,
        language: String,
        page_size: usize,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .user_agent(concat!("gamepulse/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_else(|_| Client::new()),
            endpoint,
            api_key,
            language,
            page_size,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.news_api_url.clone(),
            config.news_api_key.clone(),
            config.language.clone(),
            config.fetch_size,
            config.timeout,
        )
    }

    fn query_url(&self, category: &Category) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", &category.search_query())
            .append_pair("language", &self.language)
            .append_pair("sortBy", "publishedAt")
            .append_pair("pageSize", &self.page_size.to_string());
        url
    }

    /// Normalize a decoded response body
    pub fn articles_from_response(
        response: NewsApiResponse,
        category: &Category,
        now: DateTime<Utc>,
    ) -> GamePulseResult<Vec<Article>> {
        if response.status != "ok" {
            return Err(GamePulseError::Upstream {
                provider: PROVIDER.to_string(),
                message: response
                    .message
                    .unwrap_or_else(|| format!("status '{}'", response.status)),
            });
        }

        Ok(response
            .articles
            .into_iter()
            .filter_map(|raw| normalize(raw, category, now))
            .collect())
    }

    /// Decode and normalize a raw response body (used for testing)
    #[cfg(test)]
    fn articles_from_bytes(
        bytes: &[u8],
        category: &Category,
        now: DateTime<Utc>,
    ) -> GamePulseResult<Vec<Article>> {
        let response: NewsApiResponse = serde_json::from_slice(bytes)?;
        Self::articles_from_response(response, category, now)
    }
}

#[async_trait]
impl NewsSource for NewsApiSource {
    fn name(&self) -> String {
        PROVIDER.to_string()
    }

    async fn fetch_category(
        &self,
        category: &Category,
        now: DateTime<Utc>,
    ) -> GamePulseResult<Vec<Article>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GamePulseError::MissingEnvVar("GAMEPULSE_NEWS_API_KEY".to_string()))?;

        let url = self.query_url(category);
        debug!(%category, %url, "fetching news");

        let response = self
            .client
            .get(url)
            .header("X-Api-Key", api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GamePulseError::UpstreamStatus {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
            });
        }

        let body: NewsApiResponse = response.json().await?;
        let articles = Self::articles_from_response(body, category, now)?;
        debug!(%category, count = articles.len(), "news fetched");

        Ok(articles)
    }
}

/// Map one upstream record onto an [`Article`]. Tombstoned records are dropped.
pub fn normalize(raw: RawArticle, category: &Category, now: DateTime<Utc>) -> Option<Article> {
    let title = raw
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Untitled".to_string());

    if title == REMOVED_MARKER {
        return None;
    }

    let id = raw
        .url
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| format!("{}:{}", category.as_str().to_ascii_lowercase(), title));

    let summary = raw.description.map(|d| html_to_text(&d));
    let details = raw.content.map(|c| strip_truncation_marker(&html_to_text(&c)));
    let published_at = raw.published_at.as_deref().and_then(parse_published);

    Some(
        Article::new(id, category.clone(), title)
            .with_summary(summary)
            .with_details(details)
            .with_image(raw.url_to_image)
            .with_source(raw.source.and_then(|s| s.name))
            .published(published_at, now),
    )
}

/// Extract plain text from HTML content
fn html_to_text(html: &str) -> String {
    let document = Html::parse_fragment(html);
    let mut text = String::new();

    for node in document.root_element().descendants() {
        if let Some(text_node) = node.value().as_text() {
            text.push_str(text_node);
        }
        // Block elements separate words
        if let Some(element) = node.value().as_element() {
            match element.name() {
                "p" | "br" | "div" | "li" => text.push(' '),
                _ => {}
            }
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop the "… [+1234 chars]" suffix the upstream appends to clipped content
fn strip_truncation_marker(content: &str) -> String {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    let marker = MARKER.get_or_init(|| {
        Regex::new(r"\s*(…|\.\.\.)?\s*\[\+\d+ chars\]\s*$").expect("valid truncation regex")
    });
    marker.replace(content, "").trim().to_string()
}
