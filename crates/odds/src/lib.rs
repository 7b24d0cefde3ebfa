// Copyright (C) 2025 Showdown Authors
// SPDX-License-Identifier: Apache-2.0

//! Showdown Monte Carlo win-odds estimator.
//!
//! Estimates win, tie, and loss probabilities for a two-card hole hand
//! with zero to five known community cards against a table of opponents.
//! Each trial completes the board and deals the opponents from a deck
//! filtered of the known cards, then evaluates every 7-card hand:
//!
//! ```
//! # use showdown_odds::estimate;
//! # use showdown_cards::parse_cards;
//! let hole = parse_cards(["SA", "HA"]).unwrap();
//! let result = estimate(&hole, &[], 2, 1_000).unwrap();
//! let total = result.win_probability + result.tie_probability + result.loss_probability;
//! assert!((total - 1.0).abs() < 1e-9);
//! ```
//!
//! The **`parallel`** feature adds [par_estimate] which splits the trials
//! across a given number of tasks, each with its own random source, and
//! sums the partial counts; the estimate's distribution is unchanged.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod sim;
pub use sim::{OddsError, SimulationResult, estimate, estimate_with_rng};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_estimate;
