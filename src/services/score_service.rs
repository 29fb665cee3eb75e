use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::domain::{Category, Scoreboard};
use crate::sources::simulated::SimulatedScores;
use crate::sources::ScoreSource;

/// Best-effort live scores and fixtures. Never fails: any upstream problem
/// falls back to simulated data.
pub struct ScoreService {
    upstream: Option<Arc<dyn ScoreSource>>,
    simulated: SimulatedScores,
}

impl ScoreService {
    pub fn new(upstream: Option<Arc<dyn ScoreSource>>, simulated: SimulatedScores) -> Self {
        Self {
            upstream,
            simulated,
        }
    }

    /// Upstream data for the categories it covers, simulated data for the rest
    pub async fn load(&self, categories: &[Category], now: DateTime<Utc>) -> Scoreboard {
        let Some(upstream) = &self.upstream else {
            return self.simulate(categories, now);
        };

        let (covered, uncovered): (Vec<Category>, Vec<Category>) = categories
            .iter()
            .cloned()
            .partition(|category| upstream.covers(category));

        if covered.is_empty() {
            return self.simulate(categories, now);
        }

        let (live, fixtures) = futures::join!(
            upstream.live_matches(&covered),
            upstream.upcoming_fixtures(&covered, now)
        );

        match (live, fixtures) {
            (Ok(live), Ok(fixtures)) => {
                debug!(
                    provider = %upstream.name(),
                    live = live.len(),
                    fixtures = fixtures.len(),
                    "scores loaded"
                );
                let mut board = Scoreboard {
                    live,
                    fixtures,
                    simulated: false,
                };

                let filler = self.simulate(&uncovered, now);
                if !filler.is_empty() {
                    debug!(categories = uncovered.len(), "simulating uncovered categories");
                    board.live.extend(filler.live);
                    board.fixtures.extend(filler.fixtures);
                    board.fixtures.sort_by_key(|f| f.kickoff);
                    board.simulated = true;
                }
                board
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(provider = %upstream.name(), error = %e, "scores unavailable, simulating");
                self.simulate(categories, now)
            }
        }
    }

    fn simulate(&self, categories: &[Category], now: DateTime<Utc>) -> Scoreboard {
        Scoreboard {
            live: self.simulated.generate_live(categories),
            fixtures: self.simulated.generate_fixtures(categories, now),
            simulated: true,
        }
    }
}
