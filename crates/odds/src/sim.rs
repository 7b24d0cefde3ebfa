// Copyright (C) 2025 Showdown Authors
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo simulation of showdown outcomes.
use rand::prelude::*;
use serde::Serialize;

use showdown_cards::{Card, Deck};
use showdown_eval::HandValue;

/// Community cards on a complete board.
const BOARD_SIZE: usize = 5;

/// The result of a Monte Carlo simulation.
///
/// The three frequencies are non-negative and sum to one within
/// floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Frequency of trials won outright.
    pub win_probability: f64,
    /// Frequency of trials tied with the best opponent.
    pub tie_probability: f64,
    /// Frequency of trials lost.
    pub loss_probability: f64,
    /// The number of trials run.
    pub simulations: u32,
}

/// An error validating estimator inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OddsError {
    /// The hole hand is not exactly two cards.
    #[error("must have exactly 2 hole cards, got {0}")]
    InvalidHoleCardCount(usize),
    /// More than five community cards were given.
    #[error("cannot have more than 5 community cards, got {0}")]
    TooManyCommunityCards(usize),
    /// The player count is outside 2..=10.
    #[error("number of players must be between 2 and 10, got {0}")]
    InvalidPlayerCount(usize),
    /// Zero trials were requested.
    #[error("number of simulations must be at least 1")]
    InvalidTrialCount,
}

/// Estimates win, tie, and loss probabilities by Monte Carlo simulation.
///
/// `num_players` is the total number of players at the table including
/// the one holding `hole`, so `num_players - 1` opponents are dealt per
/// trial. The random source is seeded from OS entropy on every call;
/// repeated calls with the same inputs give independent estimates.
pub fn estimate(
    hole: &[Card],
    community: &[Card],
    num_players: usize,
    simulations: u32,
) -> Result<SimulationResult, OddsError> {
    let mut rng = SmallRng::from_os_rng();
    estimate_with_rng(hole, community, num_players, simulations, &mut rng)
}

/// Runs the same estimate with a caller-provided random source.
///
/// Inject a seeded generator for a reproducible run.
pub fn estimate_with_rng<R: Rng>(
    hole: &[Card],
    community: &[Card],
    num_players: usize,
    simulations: u32,
    rng: &mut R,
) -> Result<SimulationResult, OddsError> {
    validate(hole, community, num_players, simulations)?;

    let mut deck = candidate_deck(hole, community);
    let mut tally = Tally::default();
    for _ in 0..simulations {
        tally.record(run_trial(hole, community, &mut deck, num_players, rng));
    }

    Ok(tally.into_result(simulations))
}

/// Checks the estimator preconditions, each a distinct error.
pub(crate) fn validate(
    hole: &[Card],
    community: &[Card],
    num_players: usize,
    simulations: u32,
) -> Result<(), OddsError> {
    if hole.len() != 2 {
        return Err(OddsError::InvalidHoleCardCount(hole.len()));
    }
    if community.len() > BOARD_SIZE {
        return Err(OddsError::TooManyCommunityCards(community.len()));
    }
    if !(2..=10).contains(&num_players) {
        return Err(OddsError::InvalidPlayerCount(num_players));
    }
    if simulations < 1 {
        return Err(OddsError::InvalidTrialCount);
    }

    Ok(())
}

/// The deck of unseen cards, 52 minus the hole and community cards.
pub(crate) fn candidate_deck(hole: &[Card], community: &[Card]) -> Vec<Card> {
    let known = hole
        .iter()
        .chain(community)
        .copied()
        .collect::<Vec<_>>();
    Deck::without(&known).into_iter().collect()
}

/// The outcome of a single simulated showdown.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Outcome {
    /// Beat every opponent.
    Win,
    /// Tied at least one opponent, beaten by none.
    Tie,
    /// Beaten by at least one opponent.
    Loss,
}

/// Win, tie, and loss counters for a batch of trials.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Tally {
    wins: u64,
    ties: u64,
    losses: u64,
}

impl Tally {
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    pub(crate) fn merge(&mut self, other: Tally) {
        self.wins += other.wins;
        self.ties += other.ties;
        self.losses += other.losses;
    }

    pub(crate) fn into_result(self, simulations: u32) -> SimulationResult {
        let total = simulations as f64;
        SimulationResult {
            win_probability: self.wins as f64 / total,
            tie_probability: self.ties as f64 / total,
            loss_probability: self.losses as f64 / total,
            simulations,
        }
    }
}

/// Simulates one showdown.
///
/// Shuffles the whole candidate deck, completes the board off the top,
/// deals two cards to each opponent from the cards that follow, then
/// compares the evaluated 7-card hands.
pub(crate) fn run_trial<R: Rng>(
    hole: &[Card],
    community: &[Card],
    deck: &mut [Card],
    num_players: usize,
    rng: &mut R,
) -> Outcome {
    deck.shuffle(rng);

    let mut board = [hole[0]; BOARD_SIZE];
    board[..community.len()].copy_from_slice(community);
    let needed = BOARD_SIZE - community.len();
    board[community.len()..].copy_from_slice(&deck[..needed]);

    let player = eval_seven(hole[0], hole[1], &board);

    let opponents = num_players - 1;
    let mut wins = 0;
    let mut ties = 0;
    for i in 0..opponents {
        let dealt = needed + i * 2;
        let opponent = eval_seven(deck[dealt], deck[dealt + 1], &board);
        match player.cmp(&opponent) {
            std::cmp::Ordering::Greater => wins += 1,
            std::cmp::Ordering::Equal => ties += 1,
            std::cmp::Ordering::Less => {}
        }
    }

    if wins == opponents {
        Outcome::Win
    } else if ties > 0 && wins + ties == opponents {
        Outcome::Tie
    } else {
        Outcome::Loss
    }
}

/// Evaluates the 7-card hand of two hole cards plus the board.
fn eval_seven(c1: Card, c2: Card, board: &[Card; BOARD_SIZE]) -> HandValue {
    let cards = [c1, c2, board[0], board[1], board[2], board[3], board[4]];
    // Seven cards always satisfy the evaluator's minimum.
    HandValue::eval(&cards).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::parse_cards;

    #[test]
    fn validates_hole_cards() {
        let one = parse_cards(["SA"]).unwrap();
        let three = parse_cards(["SA", "HA", "DA"]).unwrap();
        assert_eq!(
            estimate(&one, &[], 2, 10),
            Err(OddsError::InvalidHoleCardCount(1))
        );
        assert_eq!(
            estimate(&three, &[], 2, 10),
            Err(OddsError::InvalidHoleCardCount(3))
        );
    }

    #[test]
    fn validates_community_cards() {
        let hole = parse_cards(["SA", "HA"]).unwrap();
        let six = parse_cards(["D2", "D3", "D4", "D5", "D6", "D7"]).unwrap();
        assert_eq!(
            estimate(&hole, &six, 2, 10),
            Err(OddsError::TooManyCommunityCards(6))
        );
    }

    #[test]
    fn validates_player_count() {
        let hole = parse_cards(["SA", "HA"]).unwrap();
        for players in [0, 1, 11] {
            assert_eq!(
                estimate(&hole, &[], players, 10),
                Err(OddsError::InvalidPlayerCount(players)),
            );
        }
    }

    #[test]
    fn validates_trial_count() {
        let hole = parse_cards(["SA", "HA"]).unwrap();
        assert_eq!(estimate(&hole, &[], 2, 0), Err(OddsError::InvalidTrialCount));
    }

    #[test]
    fn candidate_deck_excludes_known_cards() {
        let hole = parse_cards(["SA", "HA"]).unwrap();
        let community = parse_cards(["D2", "D3", "D4"]).unwrap();
        let deck = candidate_deck(&hole, &community);
        assert_eq!(deck.len(), 52 - 5);
        assert!(deck.iter().all(|c| !hole.contains(c)));
        assert!(deck.iter().all(|c| !community.contains(c)));
    }

    #[test]
    fn probabilities_sum_to_one() {
        let hole = parse_cards(["SA", "HA"]).unwrap();
        let community = parse_cards(["D7", "C8", "S9"]).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        for players in [2, 6, 10] {
            let result = estimate_with_rng(&hole, &community, players, 500, &mut rng).unwrap();
            let total =
                result.win_probability + result.tie_probability + result.loss_probability;
            assert!((total - 1.0).abs() < 1e-9, "players {players}: {total}");
            assert_eq!(result.simulations, 500);
        }
    }

    #[test]
    fn royal_flush_always_wins() {
        // Hero holds the royal flush on a fully known board; no opponent
        // can beat or tie it.
        let hole = parse_cards(["SA", "SK"]).unwrap();
        let community = parse_cards(["SQ", "SJ", "ST", "H2", "D3"]).unwrap();
        let result = estimate(&hole, &community, 10, 200).unwrap();
        assert_eq!(result.win_probability, 1.0);
        assert_eq!(result.tie_probability, 0.0);
        assert_eq!(result.loss_probability, 0.0);
    }

    #[test]
    fn board_royal_flush_always_ties() {
        // Everyone plays the board.
        let hole = parse_cards(["H2", "D2"]).unwrap();
        let community = parse_cards(["SA", "SK", "SQ", "SJ", "ST"]).unwrap();
        let result = estimate(&hole, &community, 4, 200).unwrap();
        assert_eq!(result.tie_probability, 1.0);
        assert_eq!(result.win_probability, 0.0);
    }

    #[test]
    fn pocket_aces_win_often_heads_up() {
        let hole = parse_cards(["SA", "HA"]).unwrap();
        let mut rng = SmallRng::seed_from_u64(99);
        let result = estimate_with_rng(&hole, &[], 2, 10_000, &mut rng).unwrap();
        // Preflop pocket aces win about 85% heads-up against a random
        // hand; allow for Monte Carlo variance.
        assert!(
            result.win_probability > 0.80 && result.win_probability < 0.90,
            "win probability {}",
            result.win_probability
        );
    }

    #[test]
    fn more_players_lower_win_probability() {
        let hole = parse_cards(["SA", "HA"]).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        let heads_up = estimate_with_rng(&hole, &[], 2, 5_000, &mut rng).unwrap();
        let full_table = estimate_with_rng(&hole, &[], 10, 5_000, &mut rng).unwrap();
        assert!(heads_up.win_probability > full_table.win_probability);
    }

    #[test]
    fn result_serializes_camel_case() {
        let result = SimulationResult {
            win_probability: 0.5,
            tie_probability: 0.25,
            loss_probability: 0.25,
            simulations: 100,
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["winProbability"], 0.5);
        assert_eq!(json["tieProbability"], 0.25);
        assert_eq!(json["lossProbability"], 0.25);
        assert_eq!(json["simulations"], 100);
    }
}
