use crate::domain::{Carousel, Credits, TrendingMovie, Watchlist};
use crate::errors::{GamePulseError, GamePulseResult};
use crate::sources::tmdb::{TmdbSource, TRENDING_LIMIT};

/// Trending movies with a featured-slide cursor and a session watch list.
#[derive(Debug, Clone)]
pub struct MovieShelf {
    movies: Vec<TrendingMovie>,
    carousel: Carousel,
    watchlist: Watchlist,
}

impl MovieShelf {
    pub fn new(movies: Vec<TrendingMovie>) -> Self {
        let carousel = Carousel::new(movies.len());
        Self {
            movies,
            carousel,
            watchlist: Watchlist::default(),
        }
    }

    pub fn movies(&self) -> &[TrendingMovie] {
        &self.movies
    }

    pub fn featured(&self) -> Option<&TrendingMovie> {
        self.carousel.current().map(|i| &self.movies[i])
    }

    pub fn next(&mut self) -> Option<&TrendingMovie> {
        self.carousel.next().map(|i| &self.movies[i])
    }

    pub fn prev(&mut self) -> Option<&TrendingMovie> {
        self.carousel.prev().map(|i| &self.movies[i])
    }

    /// Move the featured slide `steps` times; negative steps go backwards
    pub fn rotate(&mut self, steps: i64) -> Option<&TrendingMovie> {
        for _ in 0..steps.unsigned_abs() {
            if steps > 0 {
                self.next();
            } else {
                self.prev();
            }
        }
        self.featured()
    }

    pub fn find(&self, movie_id: u64) -> Option<&TrendingMovie> {
        self.movies.iter().find(|m| m.id == movie_id)
    }

    /// Returns whether the movie is listed after the toggle
    pub fn toggle_listed(&mut self, movie_id: u64) -> GamePulseResult<bool> {
        if self.find(movie_id).is_none() {
            return Err(GamePulseError::InvalidInput(format!(
                "movie {} is not trending",
                movie_id
            )));
        }
        Ok(self.watchlist.toggle(movie_id))
    }

    pub fn is_listed(&self, movie_id: u64) -> bool {
        self.watchlist.contains(movie_id)
    }
}

pub struct MovieService {
    source: TmdbSource,
}

impl MovieService {
    pub fn new(source: TmdbSource) -> Self {
        Self { source }
    }

    pub async fn shelf(&self) -> GamePulseResult<MovieShelf> {
        let movies = self.source.trending(TRENDING_LIMIT).await?;
        Ok(MovieShelf::new(movies))
    }

    pub async fn details(&self, movie_id: u64) -> GamePulseResult<Credits> {
        self.source.credits(movie_id).await
    }
}
