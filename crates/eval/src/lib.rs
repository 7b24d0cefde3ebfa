// Copyright (C) 2025 Showdown Authors
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker hand evaluator.
//!
//! Evaluates 5 to 7 card hands by enumerating every 5-card subset,
//! classifying each into one of the ten hand categories, and keeping the
//! strongest. The result carries the category, the tie-break key, the
//! five cards that made it, and a human-readable description.
//!
//! To evaluate a hand parse the cards and call [HandValue::eval]; values
//! compare through [Ord], category first then tie-break key:
//!
//! ```
//! # use showdown_eval::*;
//! let quads = parse_cards(["SA", "HA", "DA", "CA", "SK"]).unwrap();
//! let flush = parse_cards(["S2", "S4", "S6", "S8", "ST"]).unwrap();
//!
//! let v1 = HandValue::eval(&quads).unwrap();
//! let v2 = HandValue::eval(&flush).unwrap();
//! assert!(v1 > v2);
//! assert_eq!(v1.rank(), HandRank::FourOfAKind);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod eval;
pub use eval::{EvalError, HandRank, HandValue};

// Reexport cards types.
pub use showdown_cards::{Card, CardError, Deck, Rank, Suit, parse_cards, sort_descending};
