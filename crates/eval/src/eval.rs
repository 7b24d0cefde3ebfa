// Copyright (C) 2025 Showdown Authors
// SPDX-License-Identifier: Apache-2.0

//! Hand classification and comparison.
use std::{cmp::Ordering, fmt};

use showdown_cards::{Card, Rank, sort_descending};

/// The ten hand categories in ascending strength order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// No pair, no straight, no flush.
    HighCard,
    /// One rank twice.
    OnePair,
    /// Two distinct ranks twice each.
    TwoPair,
    /// One rank three times.
    ThreeOfAKind,
    /// Five consecutive ranks, mixed suits.
    Straight,
    /// One suit, not consecutive.
    Flush,
    /// One rank three times plus another twice.
    FullHouse,
    /// One rank four times.
    FourOfAKind,
    /// Five consecutive ranks in one suit.
    StraightFlush,
    /// Ace-high straight flush.
    RoyalFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// An evaluated poker hand.
///
/// Comparison goes through [Ord]: the category decides first, then the
/// tie-break key element-wise. The key holds rank values most-significant
/// first and its length depends on the category, so keys are compared
/// only up to the shorter length. Equality follows the same rule; the
/// five cards and the description never take part in comparisons.
#[derive(Debug, Clone)]
pub struct HandValue {
    rank: HandRank,
    tiebreak: Vec<Rank>,
    best_five: [Card; 5],
    description: String,
}

/// An error evaluating a hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Fewer than five cards were given.
    #[error("need at least 5 cards to evaluate a hand, got {0}")]
    InsufficientCards(usize),
}

impl HandValue {
    /// Evaluates the best 5-card hand from the given cards.
    ///
    /// Enumerates every 5-card subset and returns the strongest. With
    /// equally strong subsets the first in enumeration order wins; the
    /// (category, tie-break key) pair is the same for all of them.
    pub fn eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        let n = cards.len();
        if n < 5 {
            return Err(EvalError::InsufficientCards(n));
        }

        let mut best: Option<HandValue> = None;
        for c1 in 0..n - 4 {
            for c2 in c1 + 1..n - 3 {
                for c3 in c2 + 1..n - 2 {
                    for c4 in c3 + 1..n - 1 {
                        for c5 in c4 + 1..n {
                            let five = [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                            let value = Self::eval_five(five);
                            if best.as_ref().is_none_or(|b| value > *b) {
                                best = Some(value);
                            }
                        }
                    }
                }
            }
        }

        // n >= 5 guarantees at least one subset.
        Ok(best.unwrap())
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie-break key, most-significant rank first.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.tiebreak
    }

    /// The five cards that made the hand, sorted by rank descending.
    pub fn best_five(&self) -> &[Card; 5] {
        &self.best_five
    }

    /// A human-readable description, e.g. "Full House, Aces over Kings".
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Classifies exactly five cards.
    fn eval_five(cards: [Card; 5]) -> HandValue {
        let mut sorted = [cards[0]; 5];
        sorted.copy_from_slice(&sort_descending(&cards));

        let is_flush = sorted.iter().all(|c| c.suit() == sorted[0].suit());
        let straight_high = straight_high(&sorted);

        if is_flush && straight_high == Some(Rank::Ace) {
            return HandValue {
                rank: HandRank::RoyalFlush,
                tiebreak: vec![Rank::Ace],
                best_five: sorted,
                description: "Royal Flush".to_string(),
            };
        }

        if is_flush && let Some(high) = straight_high {
            return HandValue {
                rank: HandRank::StraightFlush,
                tiebreak: vec![high],
                best_five: sorted,
                description: format!("Straight Flush, {} high", rank_name(high)),
            };
        }

        // Distinct ranks with their multiplicity, ordered by count
        // descending then rank descending. The key for the count-based
        // categories reads straight off this ordering.
        let groups = rank_groups(&sorted);

        if groups[0].1 == 4 {
            return HandValue {
                rank: HandRank::FourOfAKind,
                tiebreak: vec![groups[0].0, groups[1].0],
                best_five: sorted,
                description: format!("Four of a Kind, {}s", rank_name(groups[0].0)),
            };
        }

        if groups[0].1 == 3 && groups[1].1 == 2 {
            return HandValue {
                rank: HandRank::FullHouse,
                tiebreak: vec![groups[0].0, groups[1].0],
                best_five: sorted,
                description: format!(
                    "Full House, {}s over {}s",
                    rank_name(groups[0].0),
                    rank_name(groups[1].0)
                ),
            };
        }

        if is_flush {
            return HandValue {
                rank: HandRank::Flush,
                tiebreak: sorted.iter().map(|c| c.rank()).collect(),
                best_five: sorted,
                description: format!("Flush, {} high", rank_name(sorted[0].rank())),
            };
        }

        if let Some(high) = straight_high {
            return HandValue {
                rank: HandRank::Straight,
                tiebreak: vec![high],
                best_five: sorted,
                description: format!("Straight, {} high", rank_name(high)),
            };
        }

        if groups[0].1 == 3 {
            return HandValue {
                rank: HandRank::ThreeOfAKind,
                tiebreak: vec![groups[0].0, groups[1].0, groups[2].0],
                best_five: sorted,
                description: format!("Three of a Kind, {}s", rank_name(groups[0].0)),
            };
        }

        if groups[0].1 == 2 && groups[1].1 == 2 {
            return HandValue {
                rank: HandRank::TwoPair,
                tiebreak: vec![groups[0].0, groups[1].0, groups[2].0],
                best_five: sorted,
                description: format!(
                    "Two Pair, {}s and {}s",
                    rank_name(groups[0].0),
                    rank_name(groups[1].0)
                ),
            };
        }

        if groups[0].1 == 2 {
            return HandValue {
                rank: HandRank::OnePair,
                tiebreak: vec![groups[0].0, groups[1].0, groups[2].0, groups[3].0],
                best_five: sorted,
                description: format!("One Pair, {}s", rank_name(groups[0].0)),
            };
        }

        HandValue {
            rank: HandRank::HighCard,
            tiebreak: sorted.iter().map(|c| c.rank()).collect(),
            best_five: sorted,
            description: format!("High Card, {}", rank_name(sorted[0].rank())),
        }
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank).then_with(|| {
            // Keys compare element-wise up to the shorter length;
            // positions beyond it are ignored.
            self.tiebreak
                .iter()
                .zip(&other.tiebreak)
                .map(|(a, b)| a.cmp(b))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

/// Returns the straight high card for five rank-descending cards.
///
/// The wheel A-5-4-3-2 is a straight with high card Five, the only case
/// where the ace plays low.
fn straight_high(sorted: &[Card; 5]) -> Option<Rank> {
    if sorted
        .windows(2)
        .all(|w| w[0].rank().value() - w[1].rank().value() == 1)
    {
        return Some(sorted[0].rank());
    }

    if sorted.iter().map(|c| c.rank().value()).eq([14, 5, 4, 3, 2]) {
        return Some(Rank::Five);
    }

    None
}

/// Groups five rank-descending cards into (rank, count) pairs ordered by
/// count descending, rank descending.
fn rank_groups(sorted: &[Card; 5]) -> Vec<(Rank, u8)> {
    let mut groups: Vec<(Rank, u8)> = Vec::with_capacity(5);
    for card in sorted {
        match groups.last_mut() {
            Some((rank, count)) if *rank == card.rank() => *count += 1,
            _ => groups.push((card.rank(), 1)),
        }
    }

    groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    groups
}

/// The rank spelled out for descriptions, digits for 2 through 9.
fn rank_name(rank: Rank) -> &'static str {
    match rank {
        Rank::Deuce => "2",
        Rank::Trey => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "Ten",
        Rank::Jack => "Jack",
        Rank::Queen => "Queen",
        Rank::King => "King",
        Rank::Ace => "Ace",
    }
}
