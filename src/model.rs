// src/model.rs
//
// Wire types for the match-stats service. The response is deserialized
// strictly: a payload that doesn't carry `teams` in this shape is rejected
// as malformed instead of being rendered partially.

use serde::{Deserialize, Serialize};

/// Request body for the search endpoint: `{ "search": "<match id>" }`.
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub search: &'a str,
}

/// One recorded game session as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub kills: u64,
    pub damage: f64,
}

impl MatchResult {
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Total players across all teams.
    pub fn player_count(&self) -> usize {
        self.teams.iter().map(|t| t.players.len()).sum()
    }
}
