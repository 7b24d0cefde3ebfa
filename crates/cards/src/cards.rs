// Copyright (C) 2025 Showdown Authors
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A Poker card.
///
/// A card is a value type pairing a [Rank] and a [Suit]; two cards are
/// equal when both match. The wire format is a two-character token with
/// the suit letter first, so the ace of hearts is `"HA"`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let &[suit_ch, rank_ch] = s.as_bytes() else {
            return Err(CardError::InvalidFormat(s.to_string()));
        };

        let suit = match suit_ch.to_ascii_uppercase() {
            b'H' => Suit::Hearts,
            b'D' => Suit::Diamonds,
            b'C' => Suit::Clubs,
            b'S' => Suit::Spades,
            _ => return Err(CardError::InvalidSuit(suit_ch as char)),
        };

        let rank = match rank_ch.to_ascii_uppercase() {
            b'2' => Rank::Deuce,
            b'3' => Rank::Trey,
            b'4' => Rank::Four,
            b'5' => Rank::Five,
            b'6' => Rank::Six,
            b'7' => Rank::Seven,
            b'8' => Rank::Eight,
            b'9' => Rank::Nine,
            b'T' => Rank::Ten,
            b'J' => Rank::Jack,
            b'Q' => Rank::Queen,
            b'K' => Rank::King,
            b'A' => Rank::Ace,
            _ => return Err(CardError::InvalidRank(rank_ch as char)),
        };

        Ok(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.suit, self.rank)
    }
}

/// An error parsing a card token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    /// The token is not exactly two characters.
    #[error("invalid card format: {0:?}")]
    InvalidFormat(String),
    /// The suit letter is not one of H, D, C, S.
    #[error("invalid suit: {0:?}")]
    InvalidSuit(char),
    /// The rank symbol is not one of 2-9, T, J, Q, K, A.
    #[error("invalid rank: {0:?}")]
    InvalidRank(char),
}

/// Parses a sequence of card tokens.
///
/// Fails on the first invalid token with no partial result.
pub fn parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, CardError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens.into_iter().map(|t| t.as_ref().parse()).collect()
}

/// Returns a new vector with the cards sorted by rank descending.
///
/// The order among cards of equal rank is unspecified.
pub fn sort_descending(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.rank.cmp(&a.rank));
    sorted
}

/// Card rank.
///
/// Discriminants are the rank values used for hand comparison, with
/// the ace high at 14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace = 14,
}

impl Rank {
    /// The rank value, 2 through 14.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns all ranks in ascending order.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// A cards deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates the deck minus the given known cards.
    ///
    /// This is the candidate deck for completing a partial hand: every
    /// card not already visible to the player.
    pub fn without(known: &[Card]) -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .filter(|c| !known.contains(c))
            .collect();
        Self { cards }
    }

    /// Shuffles the deck into a uniform random permutation.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a card from the top of the deck.
    ///
    /// Panics if the deck is empty.
    pub fn deal(&mut self) -> Card {
        self.cards.pop().unwrap()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards currently in the deck.
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::without(&[])
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::SmallRng};

    #[test]
    fn parse_card() {
        let cases = [
            ("HA", Card::new(Rank::Ace, Suit::Hearts)),
            ("S7", Card::new(Rank::Seven, Suit::Spades)),
            ("CT", Card::new(Rank::Ten, Suit::Clubs)),
            ("DJ", Card::new(Rank::Jack, Suit::Diamonds)),
            ("HQ", Card::new(Rank::Queen, Suit::Hearts)),
            ("SK", Card::new(Rank::King, Suit::Spades)),
            ("C2", Card::new(Rank::Deuce, Suit::Clubs)),
        ];

        for (token, card) in cases {
            assert_eq!(token.parse::<Card>().unwrap(), card, "token {token}");
            // Case-insensitive.
            assert_eq!(token.to_lowercase().parse::<Card>().unwrap(), card);
        }
    }

    #[test]
    fn parse_card_errors() {
        assert_eq!(
            "invalid".parse::<Card>(),
            Err(CardError::InvalidFormat("invalid".to_string()))
        );
        assert_eq!(
            "H".parse::<Card>(),
            Err(CardError::InvalidFormat("H".to_string()))
        );
        assert_eq!("".parse::<Card>(), Err(CardError::InvalidFormat(String::new())));
        assert_eq!("XA".parse::<Card>(), Err(CardError::InvalidSuit('X')));
        assert_eq!("H1".parse::<Card>(), Err(CardError::InvalidRank('1')));
        assert_eq!("SX".parse::<Card>(), Err(CardError::InvalidRank('X')));
        // Multi-byte characters never match the two-byte token shape.
        assert!(matches!(
            "♥A".parse::<Card>(),
            Err(CardError::InvalidFormat(_))
        ));
    }

    #[test]
    fn parse_cards_all_or_nothing() {
        let cards = parse_cards(["HA", "sk", "D2"]).unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Hearts),
                Card::new(Rank::King, Suit::Spades),
                Card::new(Rank::Deuce, Suit::Diamonds),
            ]
        );

        assert_eq!(
            parse_cards(["HA", "XK", "D2"]),
            Err(CardError::InvalidSuit('X'))
        );
    }

    #[test]
    fn card_round_trip() {
        for card in Deck::default() {
            let token = card.to_string();
            assert_eq!(token.parse::<Card>().unwrap(), card);
            assert_eq!(token.to_lowercase().parse::<Card>().unwrap(), card);
        }

        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "DK");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "HT");
    }

    #[test]
    fn sort_cards_descending() {
        let cards = parse_cards(["H3", "SA", "D9", "CK", "H9"]).unwrap();
        let sorted = sort_descending(&cards);
        let ranks = sorted.iter().map(|c| c.rank()).collect::<Vec<_>>();
        assert_eq!(
            ranks,
            vec![Rank::Ace, Rank::King, Rank::Nine, Rank::Nine, Rank::Trey]
        );
        // The input is left untouched.
        assert_eq!(cards[0], Card::new(Rank::Trey, Suit::Hearts));
    }

    #[test]
    fn deck_unique_cards() {
        let mut deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut cards = HashSet::default();
        while !deck.is_empty() {
            cards.insert(deck.deal());
        }
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_without_known() {
        let known = parse_cards(["HA", "HK", "D2"]).unwrap();
        let deck = Deck::without(&known);
        assert_eq!(deck.count(), Deck::SIZE - known.len());
        assert!(deck.as_slice().iter().all(|c| !known.contains(c)));
    }

    #[test]
    fn deck_shuffle_keeps_cards() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::default();
        deck.shuffle(&mut rng);

        let shuffled = deck.as_slice().iter().copied().collect::<HashSet<_>>();
        assert_eq!(shuffled.len(), Deck::SIZE);
        assert_eq!(deck.count(), Deck::SIZE);
    }
}
