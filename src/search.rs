// src/search.rs
//
// One search = one fetch + one schema check. Frontends hold the result as
// a SearchHit; the raw payload feeds the JSON export, the typed view feeds
// the renderer and the CSV builder.

use serde_json::Value;

use crate::model::MatchResult;
use crate::net::{self, FetchError};
use crate::progress::Progress;

#[derive(Debug, Clone)]
pub struct SearchHit {
    /// Payload exactly as the server sent it.
    pub raw: Value,
    /// Schema-checked view of the same payload.
    pub stats: MatchResult,
}

pub fn run_search(
    endpoint: &str,
    query: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<SearchHit, FetchError> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Searching {:?}...", query));
    }

    let result = fetch_and_validate(endpoint, query);

    if let Some(p) = progress.as_deref_mut() {
        match &result {
            Ok(hit) => p.finish(&format!(
                "Found {} team(s), {} player(s)",
                hit.stats.team_count(),
                hit.stats.player_count()
            )),
            Err(e) => p.finish(&format!("Search failed: {e}")),
        }
    }

    result
}

fn fetch_and_validate(endpoint: &str, query: &str) -> Result<SearchHit, FetchError> {
    let raw = net::post_search(endpoint, query)?;
    let stats: MatchResult = serde_json::from_value(raw.clone())?;
    logf!(
        "Search: OK query={:?} teams={} players={}",
        query,
        stats.team_count(),
        stats.player_count()
    );
    Ok(SearchHit { raw, stats })
}

/// Issues sequence numbers for searches and decides whether a finished
/// request is still the one the user cares about. In-flight requests are
/// never aborted; a reply that lost the race is dropped on arrival.
#[derive(Debug, Default)]
pub struct SearchSeq {
    latest: u64,
}

impl SearchSeq {
    /// Register a new search and return its sequence number.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// True iff `seq` belongs to the most recently started search.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest
    }
}
