// Copyright (C) 2025 Showdown Authors
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker cards types.
//!
//! This crate defines the card value types and the two-character token
//! format used across the API:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah: Card = "HA".parse().unwrap();
//! assert_eq!(ah, Card::new(Rank::Ace, Suit::Hearts));
//! assert_eq!(ah.to_string(), "HA");
//! ```
//!
//! A token is the suit letter (`H`, `D`, `C`, `S`) followed by the rank
//! symbol (`2`..`9`, `T`, `J`, `Q`, `K`, `A`), both case-insensitive.
//!
//! The [Deck] type builds the 52-card deck, or the deck minus a set of
//! known cards for dealing out simulated boards:
//!
//! ```
//! # use showdown_cards::{parse_cards, Deck};
//! let known = parse_cards(["HA", "HK"]).unwrap();
//! let deck = Deck::without(&known);
//! assert_eq!(deck.count(), 50);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, CardError, Deck, Rank, Suit, parse_cards, sort_descending};
