//! Algorithm races
//!
//! A race runs several algorithms over independent copies of the same array
//! and ranks them by recorded elapsed time. Runs happen one after another on
//! the calling thread; nothing is measured under contention.
//!
//! Results are keyed by the id exactly as requested, in sorted order, so the
//! outcome does not depend on the order ids were given in. A failing entry
//! (unknown id, bad input, inconsistent trace) carries its error and never
//! stops the remaining runs.

use crate::engine::{self, AlgorithmId, Element, RunOutput, SortError};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::info;

/// Outcome of one race
#[derive(Debug, Clone)]
pub struct RaceResult {
    entries: BTreeMap<String, Result<RunOutput, SortError>>,
    winner: Option<String>,
    fastest: Option<Duration>,
}

impl RaceResult {
    /// Every requested id with its run output or error
    pub fn entries(&self) -> &BTreeMap<String, Result<RunOutput, SortError>> {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Result<RunOutput, SortError>> {
        self.entries.get(id)
    }

    /// Fastest successful entry; `None` only if every entry failed
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    pub fn winner_algorithm(&self) -> Option<AlgorithmId> {
        self.winner.as_deref().and_then(|id| id.parse().ok())
    }

    pub fn fastest_time(&self) -> Option<Duration> {
        self.fastest
    }

    /// Successful runs in id order
    pub fn finishers(&self) -> impl Iterator<Item = &RunOutput> {
        self.entries.values().filter_map(|entry| entry.as_ref().ok())
    }
}

/// Race the given algorithms over `input`
///
/// Duplicate ids are run once. Fails only when no id is given at all.
pub fn race<S: AsRef<str>>(ids: &[S], input: &[Element]) -> Result<RaceResult, SortError> {
    if ids.is_empty() {
        return Err(SortError::EmptyRace);
    }

    let mut entries = BTreeMap::new();
    for id in ids {
        let id = id.as_ref();
        if entries.contains_key(id) {
            continue;
        }
        entries.insert(id.to_string(), engine::run_named(id, input));
    }

    let mut winner: Option<(&String, Duration)> = None;
    for (id, entry) in &entries {
        if let Ok(output) = entry {
            let elapsed = output.metrics.elapsed;
            if winner.map_or(true, |(_, best)| elapsed < best) {
                winner = Some((id, elapsed));
            }
        }
    }
    let (winner, fastest) = match winner {
        Some((id, elapsed)) => (Some(id.clone()), Some(elapsed)),
        None => (None, None),
    };

    info!(
        entrants = entries.len(),
        winner = winner.as_deref().unwrap_or("none"),
        "race finished"
    );

    Ok(RaceResult {
        entries,
        winner,
        fastest,
    })
}
