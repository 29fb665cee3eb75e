pub mod traits;
pub mod news_api;
pub mod fixtures_api;
pub mod simulated;
pub mod tmdb;
pub mod fallback;
pub mod registry;

pub use traits::{NewsSource, ScoreSource};
pub use registry::SourceRegistry;
