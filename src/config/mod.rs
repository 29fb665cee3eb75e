use std::time::Duration;

use url::Url;

use crate::domain::Category;
use crate::errors::{GamePulseError, GamePulseResult};
use crate::services::feed_view::PageLayout;

pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/everything";
pub const DEFAULT_FIXTURES_API_URL: &str = "https://v3.football.api-sports.io";
pub const DEFAULT_TMDB_API_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_CATEGORIES: &str = "Cricket,Football,F1,Tennis,Basketball";

#[derive(Debug, Clone)]
pub struct Config {
    pub news_api_key: Option<String>,
    pub news_api_url: Url,
    pub categories: Vec<Category>,
    pub language: String,
    pub fetch_size: usize,
    pub page_size: usize,
    pub page_cap: usize,
    pub timeout: Duration,
    pub fixtures_api_key: Option<String>,
    pub fixtures_api_url: Url,
    pub tmdb_api_key: Option<String>,
    pub tmdb_api_url: Url,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> GamePulseResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> GamePulseResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let categories = parse_categories(
            &lookup("GAMEPULSE_CATEGORIES").unwrap_or_else(|| DEFAULT_CATEGORIES.to_string()),
        )?;

        let timeout_secs = parse_count(&lookup, "GAMEPULSE_TIMEOUT_SECS", 10)?;

        Ok(Self {
            news_api_key: secret("GAMEPULSE_NEWS_API_KEY"),
            news_api_url: parse_url(&lookup, "GAMEPULSE_NEWS_API_URL", DEFAULT_NEWS_API_URL)?,
            categories,
            language: lookup("GAMEPULSE_LANGUAGE").unwrap_or_else(|| "en".to_string()),
            fetch_size: parse_count(&lookup, "GAMEPULSE_FETCH_SIZE", 20)?,
            page_size: parse_count(&lookup, "GAMEPULSE_PAGE_SIZE", 9)?,
            page_cap: parse_count(&lookup, "GAMEPULSE_PAGE_CAP", 4)?,
            timeout: Duration::from_secs(timeout_secs as u64),
            fixtures_api_key: secret("GAMEPULSE_FIXTURES_API_KEY"),
            fixtures_api_url: parse_url(
                &lookup,
                "GAMEPULSE_FIXTURES_API_URL",
                DEFAULT_FIXTURES_API_URL,
            )?,
            tmdb_api_key: secret("GAMEPULSE_TMDB_API_KEY"),
            tmdb_api_url: parse_url(&lookup, "GAMEPULSE_TMDB_API_URL", DEFAULT_TMDB_API_URL)?,
        })
    }

    pub fn layout(&self) -> PageLayout {
        // page_size and page_cap are validated as non-zero on load
        PageLayout::new(self.page_size, self.page_cap).unwrap_or_default()
    }
}

fn parse_categories(raw: &str) -> GamePulseResult<Vec<Category>> {
    let mut categories: Vec<Category> = Vec::new();

    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let category: Category = name.parse()?;
        if !categories.contains(&category) {
            categories.push(category);
        }
    }

    if categories.is_empty() {
        return Err(GamePulseError::Config(
            "GAMEPULSE_CATEGORIES must name at least one category".to_string(),
        ));
    }

    Ok(categories)
}

fn parse_count<F>(lookup: &F, key: &str, default: usize) -> GamePulseResult<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(GamePulseError::Config(format!(
            "{} must be a positive integer, got '{}'",
            key, raw
        ))),
        Ok(value) => Ok(value),
    }
}

fn parse_url<F>(lookup: &F, key: &str, default: &str) -> GamePulseResult<Url>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    Url::parse(raw.trim()).map_err(|e| GamePulseError::InvalidUrl(format!("{}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert!(config.news_api_key.is_none());
        assert_eq!(config.news_api_url.as_str(), DEFAULT_NEWS_API_URL);
        assert_eq!(config.categories.len(), 5);
        assert_eq!(config.categories[2].as_str(), "F1");
        assert_eq!(config.page_size, 9);
        assert_eq!(config.page_cap, 4);
        assert_eq!(config.fetch_size, 20);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_custom_categories_deduplicated() {
        let config = Config::from_lookup(lookup_from(&[(
            "GAMEPULSE_CATEGORIES",
            "Golf, cricket ,Cricket,,Rugby",
        )]))
        .unwrap();

        let names: Vec<&str> = config.categories.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["Golf", "cricket", "Rugby"]);
    }

    #[test]
    fn test_empty_categories_rejected() {
        let result = Config::from_lookup(lookup_from(&[("GAMEPULSE_CATEGORIES", " , ")]));
        assert!(matches!(result, Err(GamePulseError::Config(_))));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = Config::from_lookup(lookup_from(&[("GAMEPULSE_PAGE_SIZE", "0")]));
        assert!(matches!(result, Err(GamePulseError::Config(_))));
    }

    #[test]
    fn test_non_numeric_page_cap_rejected() {
        let result = Config::from_lookup(lookup_from(&[("GAMEPULSE_PAGE_CAP", "many")]));
        assert!(matches!(result, Err(GamePulseError::Config(_))));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = Config::from_lookup(lookup_from(&[("GAMEPULSE_NEWS_API_URL", "not a url")]));
        assert!(matches!(result, Err(GamePulseError::InvalidUrl(_))));
    }

    #[test]
    fn test_blank_api_key_treated_as_missing() {
        let config =
            Config::from_lookup(lookup_from(&[("GAMEPULSE_NEWS_API_KEY", "   ")])).unwrap();
        assert!(config.news_api_key.is_none());
    }

    #[test]
    fn test_layout_uses_configured_sizes() {
        let config = Config::from_lookup(lookup_from(&[
            ("GAMEPULSE_PAGE_SIZE", "5"),
            ("GAMEPULSE_PAGE_CAP", "2"),
        ]))
        .unwrap();

        let layout = config.layout();
        assert_eq!(layout.page_size(), 5);
        assert_eq!(layout.page_cap(), 2);
    }
}
