//! JSON request/response boundary
//!
//! The shapes here are what a transport layer (an HTTP handler, a CLI pipe)
//! exchanges with the engine:
//!
//! ```text
//! sort:  {algorithm_id, array, mode}       -> {steps, comparisons, swaps, execution_time_ms, sorted_array}
//! race:  {algorithm_ids, array}            -> {results: {id: {steps, ...}}, winner, fastest_time}
//! error:                                   -> {error}
//! ```
//!
//! Learn and game runs are reported to a [`SessionSink`]; race winners are
//! credited there as well.

use crate::engine::{self, input, Element, SortError};
use crate::race;
use crate::stats::{self, Mode, SessionRecord, SessionSink};
use crate::trace::Step;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
pub struct SortRequest {
    #[serde(alias = "algorithm")]
    pub algorithm_id: String,
    /// Validated by [`input::from_json`], so any JSON value is accepted here
    #[serde(default)]
    pub array: JsonValue,
    #[serde(default)]
    pub mode: Mode,
}

#[derive(Debug, Clone, Serialize)]
pub struct SortResponse {
    pub steps: Vec<Step>,
    pub comparisons: usize,
    pub swaps: usize,
    pub execution_time_ms: f64,
    pub sorted_array: Vec<Element>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RaceRequest {
    #[serde(alias = "algorithms")]
    pub algorithm_ids: Vec<String>,
    #[serde(default)]
    pub array: JsonValue,
}

/// One race entry; metrics and steps are `null` when the entry failed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceEntryResponse {
    /// Full trace so each race lane can be replayed
    pub steps: Option<Vec<Step>>,
    pub comparisons: Option<usize>,
    pub swaps: Option<usize>,
    pub execution_time_ms: Option<f64>,
    pub sorted_array: Option<Vec<Element>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RaceResponse {
    pub results: BTreeMap<String, RaceEntryResponse>,
    pub winner: Option<String>,
    pub fastest_time: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&SortError> for ErrorResponse {
    fn from(err: &SortError) -> Self {
        ErrorResponse {
            error: err.public_message(),
        }
    }
}

/// Run one sort request and report it to `sink`
pub fn handle_sort(
    request: &SortRequest,
    sink: &mut dyn SessionSink,
) -> Result<SortResponse, SortError> {
    let algorithm = request.algorithm_id.parse()?;
    let array = input::from_json(&request.array)?;
    let output = engine::run(algorithm, &array)?;

    sink.record_session(SessionRecord::from_run(&output, request.mode));

    Ok(SortResponse {
        steps: output.trace.steps().to_vec(),
        comparisons: output.metrics.comparisons,
        swaps: output.metrics.swaps,
        execution_time_ms: output.metrics.elapsed_ms(),
        sorted_array: output.sorted,
    })
}

/// Run one race request and report every finisher and the winner to `sink`
///
/// A malformed array fails each entry individually rather than the request.
pub fn handle_race(
    request: &RaceRequest,
    sink: &mut dyn SessionSink,
) -> Result<RaceResponse, SortError> {
    let array = match input::from_json(&request.array) {
        Ok(array) => array,
        Err(err) => return race_of_failures(&request.algorithm_ids, &err),
    };
    let result = race::race(&request.algorithm_ids, &array)?;

    stats::record_race(sink, &result);

    let results = result
        .entries()
        .iter()
        .map(|(id, entry)| {
            let response = match entry {
                Ok(output) => RaceEntryResponse {
                    steps: Some(output.trace.steps().to_vec()),
                    comparisons: Some(output.metrics.comparisons),
                    swaps: Some(output.metrics.swaps),
                    execution_time_ms: Some(output.metrics.elapsed_ms()),
                    sorted_array: Some(output.sorted.clone()),
                    error: None,
                },
                Err(err) => failed_entry(err),
            };
            (id.clone(), response)
        })
        .collect();

    Ok(RaceResponse {
        results,
        winner: result.winner().map(str::to_string),
        fastest_time: result.fastest_time().map(|d| d.as_secs_f64() * 1000.0),
    })
}

fn failed_entry(err: &SortError) -> RaceEntryResponse {
    RaceEntryResponse {
        steps: None,
        comparisons: None,
        swaps: None,
        execution_time_ms: None,
        sorted_array: None,
        error: Some(err.public_message()),
    }
}

fn race_of_failures(ids: &[String], err: &SortError) -> Result<RaceResponse, SortError> {
    if ids.is_empty() {
        return Err(SortError::EmptyRace);
    }
    let results = ids
        .iter()
        .map(|id| {
            // An unknown id is reported as such even when the array is bad too
            let entry = match id.parse::<engine::AlgorithmId>() {
                Ok(_) => failed_entry(err),
                Err(unknown) => failed_entry(&unknown),
            };
            (id.clone(), entry)
        })
        .collect();
    Ok(RaceResponse {
        results,
        winner: None,
        fastest_time: None,
    })
}

/// Handle a JSON sort request body, always producing a JSON response body
pub fn sort_json(body: &str, sink: &mut dyn SessionSink) -> String {
    let response = serde_json::from_str::<SortRequest>(body)
        .map_err(|e| SortError::malformed(format!("invalid sort request: {}", e)))
        .and_then(|request| handle_sort(&request, sink));
    to_body(response)
}

/// Handle a JSON race request body, always producing a JSON response body
pub fn race_json(body: &str, sink: &mut dyn SessionSink) -> String {
    let response = serde_json::from_str::<RaceRequest>(body)
        .map_err(|e| SortError::malformed(format!("invalid race request: {}", e)))
        .and_then(|request| handle_race(&request, sink));
    to_body(response)
}

fn to_body<T: Serialize>(response: Result<T, SortError>) -> String {
    let encoded = match &response {
        Ok(ok) => serde_json::to_string(ok),
        Err(err) => serde_json::to_string(&ErrorResponse::from(err)),
    };
    encoded.unwrap_or_else(|e| format!(r#"{{"error":"failed to encode response: {}"}}"#, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatsBook;
    use serde_json::json;

    #[test]
    fn test_sort_request_round_trip() {
        let mut book = StatsBook::new();
        let body = json!({"algorithm_id": "bubble", "array": [5, 3, 8, 1], "mode": "learn"});
        let response: JsonValue =
            serde_json::from_str(&sort_json(&body.to_string(), &mut book)).unwrap();

        assert_eq!(response["sorted_array"], json!([1, 3, 5, 8]));
        assert_eq!(response["comparisons"], 6);
        assert_eq!(response["swaps"], 4);
        assert_eq!(response["steps"][0]["type"], "compare");
        assert!(response["execution_time_ms"].is_number());
        assert_eq!(book.total_sessions(), 1);
    }

    #[test]
    fn test_sort_errors_are_json() {
        let mut book = StatsBook::new();
        let body = json!({"algorithm_id": "bogo", "array": [1]}).to_string();
        let response: JsonValue = serde_json::from_str(&sort_json(&body, &mut book)).unwrap();
        assert_eq!(response["error"], "Unknown algorithm 'bogo'");

        let body = json!({"algorithm_id": "heap", "array": "1,2"}).to_string();
        let response: JsonValue = serde_json::from_str(&sort_json(&body, &mut book)).unwrap();
        assert!(response["error"]
            .as_str()
            .unwrap()
            .starts_with("Malformed input"));

        let response: JsonValue = serde_json::from_str(&sort_json("not json", &mut book)).unwrap();
        assert!(response["error"].is_string());
        assert_eq!(book.total_sessions(), 0);
    }

    #[test]
    fn test_race_response_shape() {
        let mut book = StatsBook::new();
        let request = RaceRequest {
            algorithm_ids: vec!["quick".into(), "bogo".into(), "bubble".into()],
            array: json!([5, 3, 8, 1]),
        };
        let response = handle_race(&request, &mut book).unwrap();

        assert_eq!(response.results.len(), 3);
        assert_eq!(
            response.results["quick"].sorted_array,
            Some(vec![1, 3, 5, 8])
        );
        let quick_steps = response.results["quick"].steps.as_ref().unwrap();
        assert_eq!(quick_steps.last().unwrap().kind, crate::trace::StepKind::MarkSorted);
        assert_eq!(quick_steps.last().unwrap().snapshot, vec![1, 3, 5, 8]);

        let bogo = serde_json::to_value(&response.results["bogo"]).unwrap();
        assert_eq!(bogo["comparisons"], JsonValue::Null);
        assert_eq!(bogo["steps"], JsonValue::Null);
        assert_eq!(bogo["error"], "Unknown algorithm 'bogo'");

        let winner = response.winner.unwrap();
        assert!(winner == "quick" || winner == "bubble");
        assert!(response.fastest_time.is_some());
        assert_eq!(book.total_sessions(), 2);
        let winner_id = winner.parse().unwrap();
        assert_eq!(book.wins(winner_id), 1);
    }

    #[test]
    fn test_race_with_bad_array_fails_every_entry() {
        let mut book = StatsBook::new();
        let body = json!({"algorithms": ["merge", "heap"], "array": []}).to_string();
        let response: JsonValue = serde_json::from_str(&race_json(&body, &mut book)).unwrap();

        assert_eq!(response["winner"], JsonValue::Null);
        assert!(response["results"]["merge"]["error"].is_string());
        assert_eq!(response["results"]["merge"]["steps"], JsonValue::Null);
        assert!(response["results"]["heap"]["error"].is_string());
    }

    #[test]
    fn test_race_without_ids_is_an_error() {
        let mut book = StatsBook::new();
        let body = json!({"algorithm_ids": [], "array": [1, 2]}).to_string();
        let response: JsonValue = serde_json::from_str(&race_json(&body, &mut book)).unwrap();
        assert_eq!(response["error"], "No algorithms selected for the race");
    }
}
