//! Sample live and upcoming matches.
//! A real deployment would aggregate live feeds here; the records are fixed for now.

use axum::Json;

use crate::web::data::{Match, MatchStatus};

pub async fn matches() -> Json<Vec<Match>> {
    Json(sample_matches().to_vec())
}

fn sample_matches() -> [Match; 4] {
    [
        Match {
            id: "ucl-001",
            competition: "UEFA Champions League",
            stage: "Group A",
            home_team: "Paris SG",
            away_team: "Manchester City",
            home_score: 1,
            away_score: 1,
            status: MatchStatus::Live,
            minute: Some(57),
            start_time: "19:00 UTC",
        },
        Match {
            id: "epl-101",
            competition: "Premier League",
            stage: "Matchweek 14",
            home_team: "Arsenal",
            away_team: "Chelsea",
            home_score: 3,
            away_score: 2,
            status: MatchStatus::Ft,
            minute: None,
            start_time: "16:30 UTC",
        },
        Match {
            id: "nba-550",
            competition: "NBA",
            stage: "Regular Season",
            home_team: "Lakers",
            away_team: "Warriors",
            home_score: 98,
            away_score: 101,
            status: MatchStatus::Live,
            minute: Some(4),
            start_time: "Halftime",
        },
        Match {
            id: "mls-220",
            competition: "MLS",
            stage: "Playoffs",
            home_team: "LAFC",
            away_team: "Inter Miami",
            home_score: 0,
            away_score: 0,
            status: MatchStatus::Ns,
            minute: None,
            start_time: "22:00 UTC",
        },
    ]
}
