use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::domain::{parse_published, Category, Fixture, LiveMatch};
use crate::errors::{GamePulseError, GamePulseResult};
use crate::sources::traits::ScoreSource;

const PROVIDER: &str = "API-Football";
const UPCOMING_COUNT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct FixturesResponse {
    #[serde(default)]
    pub response: Vec<RawFixture>,
}

#[derive(Debug, Deserialize)]
pub struct RawFixture {
    pub fixture: RawFixtureInfo,
    pub league: Option<RawNamed>,
    pub teams: RawTeams,
    #[serde(default)]
    pub goals: RawGoals,
}

#[derive(Debug, Deserialize)]
pub struct RawFixtureInfo {
    pub date: Option<String>,
    pub status: Option<RawStatus>,
}

#[derive(Debug, Deserialize)]
pub struct RawStatus {
    pub short: Option<String>,
    pub elapsed: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct RawNamed {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawTeams {
    pub home: RawNamed,
    pub away: RawNamed,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawGoals {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

/// Football fixtures and live scores. Only serves the Football category.
pub struct FixturesApiSource {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl FixturesApiSource {
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

    /// `None` when no fixtures key is configured
    pub fn from_config(config: &Config) -> Option<Self> {
        config.fixtures_api_key.as_ref().map(|key| {
            Self::new(config.fixtures_api_url.clone(), key.clone(), config.timeout)
        })
    }

    fn is_football(category: &Category) -> bool {
        category.as_str().eq_ignore_ascii_case("football")
    }

    fn football(categories: &[Category]) -> Option<Category> {
        categories.iter().find(|c| Self::is_football(c)).cloned()
    }

    /// `fixtures` under the base URL, keeping any base path such as "/v3"
    fn endpoint(&self, params: &[(&str, &str)]) -> GamePulseResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GamePulseError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("fixtures");
        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> GamePulseResult<T> {
        debug!(%url, "fetching fixtures");

        let response = self
            .client
            .get(url)
            .header("x-apisports-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GamePulseError::UpstreamStatus {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    pub fn fixtures_from_response(response: FixturesResponse, category: &Category) -> Vec<Fixture> {
        response
            .response
            .into_iter()
            .filter_map(|raw| {
                let kickoff = raw.fixture.date.as_deref().and_then(parse_published)?;
                Some(Fixture {
                    category: category.clone(),
                    competition: raw.league.and_then(|l| l.name),
                    home: team_name(raw.teams.home),
                    away: team_name(raw.teams.away),
                    kickoff,
                })
            })
            .collect()
    }

    pub fn live_from_response(response: FixturesResponse, category: &Category) -> Vec<LiveMatch> {
        response
            .response
            .into_iter()
            .map(|raw| {
                let status = raw
                    .fixture
                    .status
                    .map(|s| match (s.elapsed, s.short) {
                        (Some(minute), _) => format!("{}'", minute),
                        (None, Some(short)) => short,
                        (None, None) => "LIVE".to_string(),
                    })
                    .unwrap_or_else(|| "LIVE".to_string());

                LiveMatch {
                    category: category.clone(),
                    home: team_name(raw.teams.home),
                    away: team_name(raw.teams.away),
                    home_score: raw.goals.home.unwrap_or(0),
                    away_score: raw.goals.away.unwrap_or(0),
                    status,
                }
            })
            .collect()
    }
}

fn team_name(team: RawNamed) -> String {
    team.name.unwrap_or_else(|| "TBD".to_string())
}

#[async_trait]
impl ScoreSource for FixturesApiSource {
    fn name(&self) -> String {
        PROVIDER.to_string()
    }

    fn covers(&self, category: &Category) -> bool {
        Self::is_football(category)
    }

    async fn live_matches(&self, categories: &[Category]) -> GamePulseResult<Vec<LiveMatch>> {
        let Some(football) = Self::football(categories) else {
            return Ok(Vec::new());
        };

        let url = self.endpoint(&[("live", "all")])?;
        let body: FixturesResponse = self.get(url).await?;
        Ok(Self::live_from_response(body, &football))
    }

    async fn upcoming_fixtures(
        &self,
        categories: &[Category],
        _now: DateTime<Utc>,
    ) -> GamePulseResult<Vec<Fixture>> {
        let Some(football) = Self::football(categories) else {
            return Ok(Vec::new());
        };

        let count = UPCOMING_COUNT.to_string();
        let url = self.endpoint(&[("next", count.as_str())])?;
        let body: FixturesResponse = self.get(url).await?;
        Ok(Self::fixtures_from_response(body, &football))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SAMPLE: &str = r#"{
        "get": "fixtures",
        "results": 2,
        "response": [
            {
                "fixture": { "id": 1, "date": "2025-05-18T15:30:00+00:00", "status": { "short": "1H", "elapsed": 34 } },
                "league": { "id": 39, "name": "Premier League" },
                "teams": { "home": { "id": 40, "name": "Liverpool" }, "away": { "id": 33, "name": "Manchester United" } },
                "goals": { "home": 1, "away": null }
            },
            {
                "fixture": { "id": 2, "date": null, "status": { "short": "HT", "elapsed": null } },
                "league": null,
                "teams": { "home": { "name": null }, "away": { "name": "Arsenal" } },
                "goals": { "home": null, "away": null }
            }
        ]
    }"#;

    fn parse() -> FixturesResponse {
        serde_json::from_str(SAMPLE).unwrap()
    }

    fn football() -> Category {
        Category::new("Football")
    }

    #[test]
    fn test_fixtures_skip_undated_records() {
        let fixtures = FixturesApiSource::fixtures_from_response(parse(), &football());

        assert_eq!(fixtures.len(), 1);
        assert_eq!(fixtures[0].home, "Liverpool");
        assert_eq!(fixtures[0].away, "Manchester United");
        assert_eq!(fixtures[0].competition.as_deref(), Some("Premier League"));
        assert_eq!(
            fixtures[0].kickoff,
            Utc.with_ymd_and_hms(2025, 5, 18, 15, 30, 0).unwrap()
        );
        assert_eq!(
            fixtures[0].to_string(),
            "Premier League: Liverpool vs Manchester United - May 18"
        );
    }

    #[test]
    fn test_live_matches_from_response() {
        let live = FixturesApiSource::live_from_response(parse(), &football());

        assert_eq!(live.len(), 2);
        assert_eq!(live[0].to_string(), "Liverpool 1 - 0 Manchester United (34')");
        assert_eq!(live[1].home, "TBD");
        assert_eq!(live[1].status, "HT");
    }

    #[test]
    fn test_endpoint_url() {
        let source = FixturesApiSource::new(
            Url::parse("https://v3.football.api-sports.io").unwrap(),
            "key".to_string(),
            Duration::from_secs(5),
        );

        let url = source.endpoint(&[("next", "10")]).unwrap();
        assert_eq!(url.as_str(), "https://v3.football.api-sports.io/fixtures?next=10");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        for base in ["https://proxy.example.com/v3", "https://proxy.example.com/v3/"] {
            let source = FixturesApiSource::new(
                Url::parse(base).unwrap(),
                "key".to_string(),
                Duration::from_secs(5),
            );

            let url = source.endpoint(&[("live", "all")]).unwrap();
            assert_eq!(url.as_str(), "https://proxy.example.com/v3/fixtures?live=all");
        }
    }

    #[test]
    fn test_covers_only_football() {
        let source = FixturesApiSource::new(
            Url::parse("https://v3.football.api-sports.io").unwrap(),
            "key".to_string(),
            Duration::from_secs(5),
        );

        assert!(source.covers(&Category::new("football")));
        assert!(!source.covers(&Category::new("Cricket")));
    }

    #[tokio::test]
    async fn test_non_football_categories_skip_request() {
        let source = FixturesApiSource::new(
            Url::parse("http://127.0.0.1:9").unwrap(),
            "key".to_string(),
            Duration::from_secs(1),
        );
        let cricket = vec![Category::new("Cricket")];

        assert!(source.live_matches(&cricket).await.unwrap().is_empty());
        assert!(source
            .upcoming_fixtures(&cricket, Utc::now())
            .await
            .unwrap()
            .is_empty());
    }
}
