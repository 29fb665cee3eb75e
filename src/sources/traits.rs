use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Article, Category, Fixture, LiveMatch};
use crate::errors::GamePulseResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Provider label used in logs and errors
    fn name(&self) -> String;

    /// Fetch and normalize the articles for one category.
    /// Any failure fails the whole category.
    async fn fetch_category(
        &self,
        category: &Category,
        now: DateTime<Utc>,
    ) -> GamePulseResult<Vec<Article>>;
}

#[async_trait]
pub trait ScoreSource: Send + Sync {
    fn name(&self) -> String;

    /// Whether this provider has data for `category` at all
    fn covers(&self, _category: &Category) -> bool {
        true
    }

    async fn live_matches(&self, categories: &[Category]) -> GamePulseResult<Vec<LiveMatch>>;

    async fn upcoming_fixtures(
        &self,
        categories: &[Category],
        now: DateTime<Utc>,
    ) -> GamePulseResult<Vec<Fixture>>;
}
