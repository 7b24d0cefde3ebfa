// Copyright (C) 2025 Showdown Authors
// SPDX-License-Identifier: Apache-2.0

//! Request and response bodies for the JSON API.
use serde::{Deserialize, Serialize};

use showdown_odds::SimulationResult;

/// Body for `POST /api/evaluate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    /// The player's hole card tokens.
    #[serde(default)]
    pub hole_cards: Vec<String>,
    /// The known community card tokens.
    #[serde(default)]
    pub community_cards: Vec<String>,
}

/// Response for `POST /api/evaluate`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    /// The hand category name.
    pub hand_rank: String,
    /// The hand description.
    pub description: String,
    /// The five cards that made the hand.
    pub cards: Vec<String>,
    /// Always true on success responses.
    pub success: bool,
}

/// Body for `POST /api/compare`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    /// Player 1 hole card tokens.
    #[serde(default)]
    pub player1_hole_cards: Vec<String>,
    /// Player 1 community card tokens.
    #[serde(default)]
    pub player1_community_cards: Vec<String>,
    /// Player 2 hole card tokens.
    #[serde(default)]
    pub player2_hole_cards: Vec<String>,
    /// Player 2 community card tokens.
    #[serde(default)]
    pub player2_community_cards: Vec<String>,
}

/// Response for `POST /api/compare`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    /// Player 1 hand category name.
    pub player1_hand: String,
    /// Player 1 hand description.
    pub player1_description: String,
    /// Player 2 hand category name.
    pub player2_hand: String,
    /// Player 2 hand description.
    pub player2_description: String,
    /// "player1", "player2", or "tie".
    pub winner: String,
    /// Always true on success responses.
    pub success: bool,
}

/// Body for `POST /api/probability`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilityRequest {
    /// The player's hole card tokens.
    #[serde(default)]
    pub hole_cards: Vec<String>,
    /// The known community card tokens.
    #[serde(default)]
    pub community_cards: Vec<String>,
    /// Total players at the table including the requester.
    pub num_players: usize,
    /// Number of Monte Carlo trials.
    pub simulations: u32,
}

/// Response for `POST /api/probability`.
#[derive(Debug, Serialize)]
pub struct ProbabilityResponse {
    /// The estimated probabilities.
    #[serde(flatten)]
    pub result: SimulationResult,
    /// Always true on success responses.
    pub success: bool,
}

/// Error body shared by all endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always false on error responses.
    pub success: bool,
    /// The error message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_request_from_json() {
        let req: EvaluateRequest = serde_json::from_str(
            r#"{"holeCards": ["SA", "HA"], "communityCards": ["D2", "D3", "D4"]}"#,
        )
        .unwrap();
        assert_eq!(req.hole_cards, vec!["SA", "HA"]);
        assert_eq!(req.community_cards, vec!["D2", "D3", "D4"]);

        // Missing card lists default to empty.
        let req: EvaluateRequest = serde_json::from_str(r#"{"holeCards": ["SA", "HA"]}"#).unwrap();
        assert!(req.community_cards.is_empty());
    }

    #[test]
    fn probability_request_from_json() {
        let req: ProbabilityRequest = serde_json::from_str(
            r#"{"holeCards": ["SA", "HA"], "numPlayers": 4, "simulations": 1000}"#,
        )
        .unwrap();
        assert_eq!(req.num_players, 4);
        assert_eq!(req.simulations, 1000);
        assert!(req.community_cards.is_empty());
    }

    #[test]
    fn probability_response_flattens_result() {
        let response = ProbabilityResponse {
            result: SimulationResult {
                win_probability: 0.8,
                tie_probability: 0.0,
                loss_probability: 0.2,
                simulations: 1000,
            },
            success: true,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["winProbability"], 0.8);
        assert_eq!(json["simulations"], 1000);
        assert_eq!(json["success"], true);
    }
}
