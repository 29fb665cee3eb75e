pub mod article;
pub mod category;
pub mod fixture;
pub mod movie;
pub mod timestamp;

pub use article::{Article, NO_SUMMARY, PLACEHOLDER_IMAGE};
pub use category::{Category, CategoryFilter};
pub use fixture::{Fixture, LiveMatch, Scoreboard};
pub use movie::{Carousel, CastMember, Credits, CrewMember, TrendingMovie, Watchlist};
pub use timestamp::{parse_published, relative_age};
