use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/original";
pub const PROFILE_BASE_URL: &str = "https://image.tmdb.org/t/p/w200";

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingMovie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    pub release_date: Option<String>,
}

impl TrendingMovie {
    /// Rating shown as a percentage match, e.g. 7.46 -> 75
    pub fn match_percent(&self) -> u32 {
        (self.vote_average * 10.0).round().clamp(0.0, 100.0) as u32
    }

    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
    }

    pub fn image_url(&self) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .or(self.poster_path.as_deref())
            .map(|path| format!("{}{}", IMAGE_BASE_URL, path))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    #[serde(default)]
    pub character: String,
    pub profile_path: Option<String>,
}

impl CastMember {
    pub fn profile_url(&self) -> Option<String> {
        self.profile_path
            .as_deref()
            .map(|path| format!("{}{}", PROFILE_BASE_URL, path))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    #[serde(default)]
    pub job: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

impl Credits {
    pub const TOP_CAST: usize = 8;

    pub fn top_cast(&self) -> &[CastMember] {
        &self.cast[..self.cast.len().min(Self::TOP_CAST)]
    }

    pub fn director(&self) -> &str {
        self.crew
            .iter()
            .find(|person| person.job == "Director")
            .map(|person| person.name.as_str())
            .unwrap_or(UNKNOWN)
    }

    pub fn producers(&self) -> String {
        let names: Vec<&str> = self
            .crew
            .iter()
            .filter(|person| person.job == "Producer")
            .take(2)
            .map(|person| person.name.as_str())
            .collect();

        if names.is_empty() {
            UNKNOWN.to_string()
        } else {
            names.join(", ")
        }
    }
}

/// Cursor over a fixed number of carousel slides; moves wrap around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn next(&mut self) -> Option<usize> {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.current()
    }

    pub fn prev(&mut self) -> Option<usize> {
        if self.len > 0 {
            self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
        }
        self.current()
    }
}

/// In-memory "My List" of movie ids.
#[derive(Debug, Clone, Default)]
pub struct Watchlist {
    ids: BTreeSet<u64>,
}

impl Watchlist {
    /// Adds the movie if absent, removes it otherwise. Returns whether it is now listed.
    pub fn toggle(&mut self, movie_id: u64) -> bool {
        if self.ids.remove(&movie_id) {
            false
        } else {
            self.ids.insert(movie_id);
            true
        }
    }

    pub fn contains(&self, movie_id: u64) -> bool {
        self.ids.contains(&movie_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(vote_average: f64, release_date: Option<&str>) -> TrendingMovie {
        TrendingMovie {
            id: 1,
            title: "Dune".to_string(),
            overview: String::new(),
            backdrop_path: None,
            poster_path: Some("/poster.jpg".to_string()),
            vote_average,
            vote_count: 100,
            release_date: release_date.map(str::to_string),
        }
    }

    fn crew(name: &str, job: &str) -> CrewMember {
        CrewMember {
            name: name.to_string(),
            job: job.to_string(),
        }
    }

    #[test]
    fn test_match_percent_rounds() {
        assert_eq!(movie(7.46, None).match_percent(), 75);
        assert_eq!(movie(7.44, None).match_percent(), 74);
        assert_eq!(movie(0.0, None).match_percent(), 0);
    }

    #[test]
    fn test_release_year() {
        assert_eq!(movie(7.0, Some("2024-02-27")).release_year(), Some("2024"));
        assert_eq!(movie(7.0, Some("")).release_year(), None);
        assert_eq!(movie(7.0, None).release_year(), None);
    }

    #[test]
    fn test_image_prefers_backdrop() {
        let mut m = movie(7.0, None);
        assert_eq!(
            m.image_url().as_deref(),
            Some("https://image.tmdb.org/t/p/original/poster.jpg")
        );

        m.backdrop_path = Some("/backdrop.jpg".to_string());
        assert_eq!(
            m.image_url().as_deref(),
            Some("https://image.tmdb.org/t/p/original/backdrop.jpg")
        );
    }

    #[test]
    fn test_director_and_producers() {
        let credits = Credits {
            cast: vec![],
            crew: vec![
                crew("Mary Parent", "Producer"),
                crew("Denis Villeneuve", "Director"),
                crew("Cale Boyter", "Producer"),
                crew("Tanya Lapointe", "Producer"),
            ],
        };

        assert_eq!(credits.director(), "Denis Villeneuve");
        assert_eq!(credits.producers(), "Mary Parent, Cale Boyter");
    }

    #[test]
    fn test_unknown_crew() {
        let credits = Credits::default();
        assert_eq!(credits.director(), "Unknown");
        assert_eq!(credits.producers(), "Unknown");
    }

    #[test]
    fn test_top_cast_limited_to_eight() {
        let cast = (0..12)
            .map(|i| CastMember {
                name: format!("Actor {}", i),
                character: String::new(),
                profile_path: None,
            })
            .collect();
        let credits = Credits { cast, crew: vec![] };

        assert_eq!(credits.top_cast().len(), 8);
        assert_eq!(credits.top_cast()[7].name, "Actor 7");
    }

    #[test]
    fn test_carousel_wraps() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.current(), Some(0));
        assert_eq!(carousel.prev(), Some(2));
        assert_eq!(carousel.next(), Some(0));
        assert_eq!(carousel.next(), Some(1));
        assert_eq!(carousel.next(), Some(2));
        assert_eq!(carousel.next(), Some(0));
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.current(), None);
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.prev(), None);
    }

    #[test]
    fn test_watchlist_toggle() {
        let mut list = Watchlist::default();
        assert!(list.toggle(42));
        assert!(list.contains(42));
        assert_eq!(list.len(), 1);
        assert!(!list.toggle(42));
        assert!(!list.contains(42));
        assert!(list.is_empty());
    }
}
