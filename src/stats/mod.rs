//! Session statistics
//!
//! After each run the caller may hand a [`SessionRecord`] to a
//! [`SessionSink`]. The engine never reads these records back; storage is up
//! to the sink. [`StatsBook`] is an in-memory sink keeping simple aggregates:
//! total sessions and, per algorithm, run count, rolling averages and race
//! wins.

use crate::engine::{AlgorithmId, RunOutput};
use crate::race::RaceResult;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Why a run happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Learn,
    Game,
}

/// One historical run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRecord {
    #[serde(rename = "algorithm_id")]
    pub algorithm: AlgorithmId,
    pub mode: Mode,
    pub comparisons: usize,
    pub swaps: usize,
    pub execution_time_ms: f64,
    pub array_size: usize,
}

impl SessionRecord {
    pub fn from_run(output: &RunOutput, mode: Mode) -> Self {
        SessionRecord {
            algorithm: output.algorithm,
            mode,
            comparisons: output.metrics.comparisons,
            swaps: output.metrics.swaps,
            execution_time_ms: output.metrics.elapsed_ms(),
            array_size: output.trace.initial().len(),
        }
    }
}

/// Destination for session records
pub trait SessionSink {
    fn record_session(&mut self, record: SessionRecord);

    /// Credit a race win
    fn record_win(&mut self, _algorithm: AlgorithmId) {}
}

/// Report every finisher of a race as a game session and credit the winner
pub fn record_race(sink: &mut dyn SessionSink, result: &RaceResult) {
    for output in result.finishers() {
        sink.record_session(SessionRecord::from_run(output, Mode::Game));
    }
    if let Some(winner) = result.winner_algorithm() {
        sink.record_win(winner);
    }
}

/// Sink that drops everything
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl SessionSink for Discard {
    fn record_session(&mut self, _record: SessionRecord) {}
}

#[derive(Debug, Clone, Copy, Default)]
struct Aggregate {
    runs: usize,
    avg_comparisons: f64,
    avg_swaps: f64,
    avg_time_ms: f64,
    wins: usize,
}

impl Aggregate {
    fn add(&mut self, record: &SessionRecord) {
        self.runs += 1;
        let n = self.runs as f64;
        self.avg_comparisons += (record.comparisons as f64 - self.avg_comparisons) / n;
        self.avg_swaps += (record.swaps as f64 - self.avg_swaps) / n;
        self.avg_time_ms += (record.execution_time_ms - self.avg_time_ms) / n;
    }
}

/// In-memory aggregate of session records
#[derive(Debug, Clone, Default)]
pub struct StatsBook {
    total_sessions: usize,
    per_algorithm: FxHashMap<AlgorithmId, Aggregate>,
}

/// Per-algorithm line of a [`StatsSummary`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmSummary {
    pub name: AlgorithmId,
    pub runs: usize,
    pub avg_time: f64,
    pub avg_comparisons: f64,
    pub avg_swaps: f64,
    pub wins: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub total_sessions: usize,
    pub algorithms: Vec<AlgorithmSummary>,
}

impl StatsBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_sessions(&self) -> usize {
        self.total_sessions
    }

    pub fn wins(&self, algorithm: AlgorithmId) -> usize {
        self.per_algorithm.get(&algorithm).map_or(0, |a| a.wins)
    }

    /// Aggregates in algorithm order, averages rounded to two decimals
    ///
    /// Algorithms that have neither runs nor wins are left out.
    pub fn summary(&self) -> StatsSummary {
        let algorithms = AlgorithmId::ALL
            .into_iter()
            .filter_map(|id| {
                let agg = self.per_algorithm.get(&id)?;
                Some(AlgorithmSummary {
                    name: id,
                    runs: agg.runs,
                    avg_time: round2(agg.avg_time_ms),
                    avg_comparisons: round2(agg.avg_comparisons),
                    avg_swaps: round2(agg.avg_swaps),
                    wins: agg.wins,
                })
            })
            .collect();

        StatsSummary {
            total_sessions: self.total_sessions,
            algorithms,
        }
    }
}

impl SessionSink for StatsBook {
    fn record_session(&mut self, record: SessionRecord) {
        self.total_sessions += 1;
        self.per_algorithm
            .entry(record.algorithm)
            .or_default()
            .add(&record);
    }

    fn record_win(&mut self, algorithm: AlgorithmId) {
        self.per_algorithm.entry(algorithm).or_default().wins += 1;
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(algorithm: AlgorithmId, comparisons: usize, swaps: usize, ms: f64) -> SessionRecord {
        SessionRecord {
            algorithm,
            mode: Mode::Learn,
            comparisons,
            swaps,
            execution_time_ms: ms,
            array_size: 4,
        }
    }

    #[test]
    fn test_rolling_averages() {
        let mut book = StatsBook::new();
        book.record_session(record(AlgorithmId::Quick, 10, 4, 1.0));
        book.record_session(record(AlgorithmId::Quick, 20, 6, 2.0));
        book.record_session(record(AlgorithmId::Bubble, 6, 4, 0.5));
        book.record_win(AlgorithmId::Bubble);

        let summary = book.summary();
        assert_eq!(summary.total_sessions, 3);
        assert_eq!(summary.algorithms.len(), 2);

        // Bubble sorts before quick in algorithm order
        let bubble = &summary.algorithms[0];
        assert_eq!(bubble.name, AlgorithmId::Bubble);
        assert_eq!(bubble.wins, 1);

        let quick = &summary.algorithms[1];
        assert_eq!(quick.runs, 2);
        assert_eq!(quick.avg_comparisons, 15.0);
        assert_eq!(quick.avg_swaps, 5.0);
        assert_eq!(quick.avg_time, 1.5);
    }

    #[test]
    fn test_summary_rounds_to_two_decimals() {
        let mut book = StatsBook::new();
        book.record_session(record(AlgorithmId::Heap, 1, 1, 0.123456));
        assert_eq!(book.summary().algorithms[0].avg_time, 0.12);
    }

    #[test]
    fn test_record_race_credits_winner() {
        let result = crate::race::race(&["heap", "bogo", "merge"], &[4, 1, 3, 2]).unwrap();
        let mut book = StatsBook::new();
        record_race(&mut book, &result);

        assert_eq!(book.total_sessions(), 2);
        let winner = result.winner_algorithm().unwrap();
        assert_eq!(book.wins(winner), 1);
        let summary = book.summary();
        assert!(summary.algorithms.iter().all(|a| a.runs == 1));
    }

    #[test]
    fn test_record_serializes_with_wire_names() {
        let json = serde_json::to_value(record(AlgorithmId::Merge, 5, 8, 0.25)).unwrap();
        assert_eq!(json["algorithm_id"], "merge");
        assert_eq!(json["mode"], "learn");
        assert_eq!(json["array_size"], 4);
    }
}
