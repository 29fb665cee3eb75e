use std::sync::Arc;

use crate::config::Config;
use crate::sources::fixtures_api::FixturesApiSource;
use crate::sources::news_api::NewsApiSource;
use crate::sources::simulated::SimulatedScores;
use crate::sources::traits::{NewsSource, ScoreSource};

/// The upstream providers a dashboard draws from.
#[derive(Clone)]
pub struct SourceRegistry {
    news: Arc<dyn NewsSource>,
    scores: Option<Arc<dyn ScoreSource>>,
    simulated: SimulatedScores,
}

impl SourceRegistry {
    pub fn new(news: Arc<dyn NewsSource>) -> Self {
        Self {
            news,
            scores: None,
            simulated: SimulatedScores::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new(Arc::new(NewsApiSource::from_config(config)));

        if let Some(fixtures) = FixturesApiSource::from_config(config) {
            registry = registry.with_scores(Arc::new(fixtures));
        }

        registry
    }

    pub fn with_scores(mut self, scores: Arc<dyn ScoreSource>) -> Self {
        self.scores = Some(scores);
        self
    }

    pub fn with_simulated(mut self, simulated: SimulatedScores) -> Self {
        self.simulated = simulated;
        self
    }

    pub fn news(&self) -> Arc<dyn NewsSource> {
        Arc::clone(&self.news)
    }

    /// Upstream scores provider, if one is configured
    pub fn scores(&self) -> Option<Arc<dyn ScoreSource>> {
        self.scores.clone()
    }

    pub fn simulated(&self) -> &SimulatedScores {
        &self.simulated
    }
}
