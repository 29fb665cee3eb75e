use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::domain::{Article, Category};
use crate::errors::GamePulseResult;
use crate::sources::fallback;
use crate::sources::NewsSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedMode {
    Live,
    /// Every category fetch failed; the static fallback dataset is shown
    Degraded,
}

/// The merged feed for one fetch cycle. Immutable once built.
#[derive(Debug, Clone)]
pub struct Aggregate {
    articles: Arc<[Article]>,
    mode: FeedMode,
    failed: Vec<Category>,
    generated_at: DateTime<Utc>,
}

impl Aggregate {
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn mode(&self) -> FeedMode {
        self.mode
    }

    pub fn is_degraded(&self) -> bool {
        self.mode == FeedMode::Degraded
    }

    /// Categories whose live fetch failed in this cycle
    pub fn failed_categories(&self) -> &[Category] {
        &self.failed
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn advisory(&self) -> Option<&'static str> {
        self.is_degraded().then_some(fallback::ADVISORY)
    }
}

pub struct AggregateService {
    source: Arc<dyn NewsSource>,
    categories: Vec<Category>,
}

impl AggregateService {
    pub fn new(source: Arc<dyn NewsSource>, categories: Vec<Category>) -> Self {
        Self { source, categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub async fn aggregate(&self) -> Aggregate {
        self.aggregate_at(Utc::now()).await
    }

    /// Fetch every tracked category concurrently and merge once all have settled
    pub async fn aggregate_at(&self, now: DateTime<Utc>) -> Aggregate {
        let fetches = self.categories.iter().map(|category| async move {
            let result = self.source.fetch_category(category, now).await;
            (category.clone(), result)
        });

        let settled = join_all(fetches).await;
        merge(settled, now)
    }
}

/// Combine settled per-category results into one feed, newest first.
///
/// All failed (or nothing tracked): the full fallback dataset, degraded.
/// Some failed: those categories are filled from the fallback dataset.
pub fn merge(
    settled: Vec<(Category, GamePulseResult<Vec<Article>>)>,
    now: DateTime<Utc>,
) -> Aggregate {
    let mut failed = Vec::new();
    let mut merged = Vec::new();

    for (category, result) in settled {
        match result {
            Ok(articles) => {
                debug!(%category, count = articles.len(), "category settled");
                merged.push(articles);
            }
            Err(e) => {
                warn!(%category, error = %e, "category fetch failed");
                failed.push(category);
            }
        }
    }

    if merged.is_empty() {
        warn!("all category fetches failed, serving fallback highlights");
        let mut articles = fallback::articles(now);
        sort_by_recency(&mut articles);
        return Aggregate {
            articles: articles.into(),
            mode: FeedMode::Degraded,
            failed,
            generated_at: now,
        };
    }

    for category in &failed {
        merged.push(fallback::articles_for(category, now));
    }

    let mut articles = dedup_by_id(merged.into_iter().flatten());
    sort_by_recency(&mut articles);

    info!(
        count = articles.len(),
        failed = failed.len(),
        "feed aggregated"
    );

    Aggregate {
        articles: articles.into(),
        mode: FeedMode::Live,
        failed,
        generated_at: now,
    }
}

/// Newest first. Stable, and undated articles sort after all dated ones.
pub fn sort_by_recency(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

fn dedup_by_id(articles: impl Iterator<Item = Article>) -> Vec<Article> {
    let mut seen = HashSet::new();
    articles
        .filter(|article| {
            let fresh = seen.insert(article.id.clone());
            if !fresh {
                debug!(id = %article.id, "duplicate article dropped");
            }
            fresh
        })
        .collect()
}
