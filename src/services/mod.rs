pub mod aggregate_service;
pub mod dashboard_service;
pub mod feed_view;
pub mod movie_service;
pub mod score_service;

pub use aggregate_service::{Aggregate, AggregateService, FeedMode};
pub use dashboard_service::{Dashboard, DashboardService, PendingLoad};
pub use feed_view::{Page, PageLayout, Paginator, ViewState};
pub use movie_service::{MovieService, MovieShelf};
pub use score_service::ScoreService;
