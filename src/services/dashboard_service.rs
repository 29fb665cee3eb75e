use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::domain::{Article, Category, CategoryFilter, Scoreboard};
use crate::services::aggregate_service::{Aggregate, AggregateService};
use crate::services::feed_view::{Page, PageLayout, Paginator, ViewState};
use crate::services::score_service::ScoreService;
use crate::sources::SourceRegistry;

/// What the presentation layer talks to: one settled feed plus the current view.
pub struct Dashboard {
    aggregate: Aggregate,
    scoreboard: Scoreboard,
    paginator: Paginator,
    state: ViewState,
}

impl Dashboard {
    pub fn new(aggregate: Aggregate, scoreboard: Scoreboard, layout: PageLayout) -> Self {
        Self {
            aggregate,
            scoreboard,
            paginator: Paginator::new(layout),
            state: ViewState::initial(),
        }
    }

    pub fn articles(&self) -> &[Article] {
        self.aggregate.articles()
    }

    pub fn aggregate(&self) -> &Aggregate {
        &self.aggregate
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn current_page(&self) -> Page<'_> {
        self.paginator.page(self.aggregate.articles(), &self.state)
    }

    /// Look up any page without touching the current view.
    /// `None` when `page` is outside `1..=total_pages` for that category.
    pub fn get_page(&self, filter: &CategoryFilter, page: usize) -> Option<Page<'_>> {
        let articles = self.aggregate.articles();
        let state = self.paginator.select_category(&self.state, filter.clone());
        let moved = self.paginator.go_to_page(articles, &state, page);

        (moved.current_page == page).then(|| self.paginator.page(articles, &moved))
    }

    pub fn on_category_changed(&mut self, filter: CategoryFilter) -> Page<'_> {
        self.state = self.paginator.select_category(&self.state, filter);
        self.current_page()
    }

    /// Returns false (and leaves the view alone) for out-of-range pages
    pub fn on_page_requested(&mut self, page: usize) -> bool {
        let next = self
            .paginator
            .go_to_page(self.aggregate.articles(), &self.state, page);
        let accepted = next.current_page == page;
        self.state = next;
        accepted
    }

    pub fn is_degraded(&self) -> bool {
        self.aggregate.is_degraded()
    }

    pub fn advisory(&self) -> Option<&'static str> {
        self.aggregate.advisory()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }
}

pub struct DashboardService {
    aggregator: AggregateService,
    scores: ScoreService,
    layout: PageLayout,
}

impl DashboardService {
    pub fn new(aggregator: AggregateService, scores: ScoreService, layout: PageLayout) -> Self {
        Self {
            aggregator,
            scores,
            layout,
        }
    }

    pub fn from_registry(
        registry: &SourceRegistry,
        categories: Vec<Category>,
        layout: PageLayout,
    ) -> Self {
        Self::new(
            AggregateService::new(registry.news(), categories),
            ScoreService::new(registry.scores(), registry.simulated().clone()),
            layout,
        )
    }

    pub async fn load(&self) -> Dashboard {
        self.load_at(Utc::now()).await
    }

    /// Run one fetch cycle. Scores are only loaded for a live feed.
    pub async fn load_at(&self, now: DateTime<Utc>) -> Dashboard {
        let aggregate = self.aggregator.aggregate_at(now).await;

        let scoreboard = if aggregate.is_degraded() {
            Scoreboard::default()
        } else {
            self.scores.load(self.aggregator.categories(), now).await
        };

        info!(
            articles = aggregate.articles().len(),
            degraded = aggregate.is_degraded(),
            "dashboard ready"
        );

        Dashboard::new(aggregate, scoreboard, self.layout)
    }

    /// Start a load in the background; see [`PendingLoad`]
    pub fn spawn_load(self: &Arc<Self>) -> PendingLoad {
        let service = Arc::clone(self);
        PendingLoad {
            handle: Some(tokio::spawn(async move { service.load().await })),
        }
    }
}

/// An in-flight dashboard load. Tearing it down, or dropping it, aborts the
/// fetches; nothing from an aborted load is ever handed out.
pub struct PendingLoad {
    handle: Option<JoinHandle<Dashboard>>,
}

impl PendingLoad {
    /// Wait for the load to finish. `None` if it was aborted.
    ///
    /// The handle stays in `self` while waiting, so dropping this future
    /// part way also aborts the load.
    pub async fn settle(mut self) -> Option<Dashboard> {
        let result = self.handle.as_mut()?.await;
        self.handle = None;
        match result {
            Ok(dashboard) => Some(dashboard),
            Err(e) => {
                debug!(error = %e, "dashboard load did not complete");
                None
            }
        }
    }

    pub fn teardown(mut self) {
        self.abort();
    }

    fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("aborting in-flight dashboard load");
            handle.abort();
        }
    }
}

impl Drop for PendingLoad {
    fn drop(&mut self) {
        self.abort();
    }
}
