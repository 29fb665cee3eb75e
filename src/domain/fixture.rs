use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Category;

/// A match in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveMatch {
    pub category: Category,
    pub home: String,
    pub away: String,
    pub home_score: u32,
    pub away_score: u32,
    /// Match clock or phase as shown to users, e.g. "67'" or "2nd innings"
    pub status: String,
}

impl fmt::Display for LiveMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {} ({})",
            self.home, self.home_score, self.away_score, self.away, self.status
        )
    }
}

/// A scheduled event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub category: Category,
    pub competition: Option<String>,
    pub home: String,
    pub away: String,
    pub kickoff: DateTime<Utc>,
}

impl fmt::Display for Fixture {
    /// "IPL 2025: Mumbai Indians vs Chennai Super Kings - May 16"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let competition = self
            .competition
            .as_deref()
            .unwrap_or_else(|| self.category.as_str());
        write!(
            f,
            "{}: {} vs {} - {}",
            competition,
            self.home,
            self.away,
            self.kickoff.format("%b %-d")
        )
    }
}

/// Live matches and upcoming fixtures shown next to the news feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scoreboard {
    pub live: Vec<LiveMatch>,
    pub fixtures: Vec<Fixture>,
    /// True when any entry came from the randomized generator
    pub simulated: bool,
}

impl Scoreboard {
    pub fn is_empty(&self) -> bool {
        self.live.is_empty() && self.fixtures.is_empty()
    }
}
