//! Static highlights served when live news cannot be fetched.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{Article, Category};

pub const ADVISORY: &str =
    "Live news is unavailable right now. Showing recent highlights instead.";

struct Highlight {
    id: &'static str,
    category: &'static str,
    title: &'static str,
    summary: &'static str,
    details: &'static str,
    hours_ago: i64,
    source: &'static str,
}

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        id: "fallback:cricket:t20-final",
        category: "Cricket",
        title: "India defeats Australia in thrilling T20 final",
        summary: "In a nail-biting finish, India clinched victory against Australia by 4 runs in the T20 World Cup final.",
        details: "Chasing 176, Australia needed 18 runs in the final over but fell short as Bumrah defended brilliantly. Kohli was named Player of the Match for his quickfire 82 off 51 balls.",
        hours_ago: 3,
        source: "GamePulse",
    },
    Highlight {
        id: "fallback:football:city-arsenal",
        category: "Football",
        title: "Manchester City extends lead at top of Premier League",
        summary: "Manchester City secured a dominant 3-0 victory against Arsenal to extend their lead at the top of the table.",
        details: "Goals from De Bruyne, Haaland, and Foden sealed the win. With just 5 games remaining, City are now 7 points clear at the top.",
        hours_ago: 6,
        source: "GamePulse",
    },
    Highlight {
        id: "fallback:f1:monaco-pole",
        category: "F1",
        title: "Leclerc snatches Monaco pole on final lap",
        summary: "Charles Leclerc produced a stunning final run to take pole position at his home Grand Prix.",
        details: "The Ferrari driver edged Verstappen by 0.092 seconds, with Norris completing the top three after a late yellow flag in sector two.",
        hours_ago: 8,
        source: "GamePulse",
    },
    Highlight {
        id: "fallback:tennis:madrid-final",
        category: "Tennis",
        title: "Sabalenka storms into Madrid Open final",
        summary: "Aryna Sabalenka dropped just four games on her way to a third Madrid final.",
        details: "The world number one hit 28 winners and broke serve five times, setting up a rematch of last year's final.",
        hours_ago: 10,
        source: "GamePulse",
    },
    Highlight {
        id: "fallback:basketball:lakers-celtics",
        category: "Basketball",
        title: "Lakers stun Celtics with last-second buzzer beater",
        summary: "LeBron James hit a dramatic three-pointer at the buzzer to give the Lakers a 108-105 win over the Celtics.",
        details: "With 2.1 seconds remaining and the Lakers down by 2, James launched a deep three that found nothing but net. He finished with 37 points, 12 rebounds and 8 assists.",
        hours_ago: 12,
        source: "GamePulse",
    },
    Highlight {
        id: "fallback:cricket:t20-format",
        category: "Cricket",
        title: "ICC announces new T20 tournament format starting 2026",
        summary: "The ICC has confirmed an expanded group stage for the next T20 World Cup cycle.",
        details: "Twenty teams will be split into four groups of five, with the top two from each advancing to a Super Eight stage.",
        hours_ago: 20,
        source: "GamePulse",
    },
    Highlight {
        id: "fallback:football:ucl-expansion",
        category: "Football",
        title: "Champions League to expand to 36 teams from next season",
        summary: "UEFA has approved a single league phase replacing the traditional group stage.",
        details: "Each club will play eight league-phase matches against different opponents, with the top eight qualifying directly for the round of 16.",
        hours_ago: 26,
        source: "GamePulse",
    },
    Highlight {
        id: "fallback:basketball:in-season",
        category: "Basketball",
        title: "NBA approves in-season tournament starting next season",
        summary: "The league's board of governors voted to add a mid-season cup competition.",
        details: "Group-stage games will double as regular-season fixtures, with the knockout rounds played in December.",
        hours_ago: 30,
        source: "GamePulse",
    },
    Highlight {
        id: "fallback:f1:calendar",
        category: "F1",
        title: "Formula 1 confirms record 24-race calendar",
        summary: "The sport's longest season yet includes a return to Imola and a new Madrid street circuit.",
        details: "Six sprint weekends are planned, and the season will open in Bahrain before concluding in Abu Dhabi in early December.",
        hours_ago: 36,
        source: "GamePulse",
    },
    Highlight {
        id: "fallback:tennis:wimbledon-seeds",
        category: "Tennis",
        title: "Wimbledon reveals seeding changes for grass season",
        summary: "Organisers will again follow the ATP and WTA rankings without grass-court adjustments.",
        details: "The All England Club also confirmed an increase in prize money and a later start time for Centre Court matches.",
        hours_ago: 44,
        source: "GamePulse",
    },
    Highlight {
        id: "fallback:cricket:kohli-century",
        category: "Cricket",
        title: "Kohli breaks Tendulkar's record with 50th ODI century",
        summary: "Virat Kohli became the first batter to reach fifty one-day international hundreds.",
        details: "He reached the milestone off 106 balls in the semi-final, acknowledging a standing ovation from a sold-out Wankhede Stadium.",
        hours_ago: 50,
        source: "GamePulse",
    },
    Highlight {
        id: "fallback:football:haaland-record",
        category: "Football",
        title: "Haaland scores five in single match, breaks season record",
        summary: "Erling Haaland's five-goal haul took him past the single-season scoring record.",
        details: "The Norwegian scored twice from the penalty spot and completed his hat-trick before half-time.",
        hours_ago: 74,
        source: "GamePulse",
    },
];

/// The full fallback collection, newest first, aged relative to `now`.
pub fn articles(now: DateTime<Utc>) -> Vec<Article> {
    HIGHLIGHTS
        .iter()
        .map(|h| {
            Article::new(h.id.to_string(), Category::new(h.category), h.title.to_string())
                .with_summary(Some(h.summary.to_string()))
                .with_details(Some(h.details.to_string()))
                .with_source(Some(h.source.to_string()))
                .published(Some(now - Duration::hours(h.hours_ago)), now)
        })
        .collect()
}

/// Fallback articles of a single category, newest first.
pub fn articles_for(category: &Category, now: DateTime<Utc>) -> Vec<Article> {
    articles(now)
        .into_iter()
        .filter(|article| &article.category == category)
        .collect()
}
