// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluation and ordering.
use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};
use thiserror::Error;

use threecard_cards::{Card, Rank};

/// Errors returned by the hand evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A hand needs at least one card.
    #[error("cannot evaluate an empty hand")]
    EmptyHand,
}

/// The hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No other category applies.
    HighCard = 0,
    /// Two cards of the same rank.
    Pair,
    /// All cards of the same suit.
    Flush,
    /// All cards with consecutive ranks.
    Straight,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// A straight and a flush.
    StraightFlush,
}

impl HandRank {
    /// Returns all ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [HighCard, Pair, Flush, Straight, ThreeOfAKind, StraightFlush].into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::Flush => "Flush",
            HandRank::Straight => "Straight",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// An evaluated Poker hand.
///
/// The hand is evaluated when it is created and never changes. Hands are
/// ordered by rank first, then by the evidence cards from the highest to the
/// lowest, and for pairs by the kickers from the highest to the lowest. Two
/// hands are equal when they tie under this order, the suits and the order in
/// which cards were dealt don't matter.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    rank: HandRank,
    evidence: Vec<Card>,
    kickers: Vec<Card>,
}

impl Hand {
    /// Evaluates a hand.
    pub fn new(cards: &[Card]) -> Result<Hand, EvalError> {
        if cards.is_empty() {
            return Err(EvalError::EmptyHand);
        }

        let (rank, evidence) = classify(cards);
        let kickers = kickers(cards, &evidence);

        let hand = Hand {
            cards: cards.to_vec(),
            rank,
            evidence,
            kickers,
        };

        debug!("Hand {hand} evaluated as {rank} with evidence {:?}", hand.evidence);
        Ok(hand)
    }

    /// The cards as they were dealt.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The number of cards in this hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false, a hand has at least one card.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The cards that justify the hand rank.
    ///
    /// For straights and flushes these are all the cards sorted by ascending
    /// rank, for three of a kind and pairs the cards in the group, and for a
    /// high card hand the highest card.
    pub fn evidence(&self) -> &[Card] {
        &self.evidence
    }

    /// The cards not in the evidence sorted by descending rank.
    pub fn kickers(&self) -> &[Card] {
        &self.kickers
    }

    /// Checks if two hands tie.
    pub fn ties(&self, other: &Hand) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| cmp_high_to_low(&self.evidence, &other.evidence))
            .then_with(|| {
                if self.rank == HandRank::Pair {
                    cmp_high_to_low(&self.kickers, &other.kickers)
                } else {
                    Ordering::Equal
                }
            })
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.ties(other)
    }
}

impl Eq for Hand {}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

/// Classifies the cards, the first matching category wins.
fn classify(cards: &[Card]) -> (HandRank, Vec<Card>) {
    let is_straight = is_straight(cards);
    let is_flush = is_flush(cards);

    let rank = match (is_straight, is_flush) {
        (true, true) => Some(HandRank::StraightFlush),
        (true, false) => Some(HandRank::Straight),
        (false, true) => Some(HandRank::Flush),
        (false, false) => None,
    };

    if let Some(rank) = rank {
        return (rank, sorted_ascending(cards));
    }

    if let Some(trips) = best_group(cards, 3) {
        return (HandRank::ThreeOfAKind, trips);
    }

    if let Some(pair) = best_group(cards, 2) {
        return (HandRank::Pair, pair);
    }

    let high = cards
        .iter()
        .copied()
        .max_by(Card::cmp_rank)
        .into_iter()
        .collect();
    (HandRank::HighCard, high)
}

fn sorted_ascending(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(Card::cmp_rank);
    sorted
}

/// Checks if the cards values form a run of consecutive values.
fn is_straight(cards: &[Card]) -> bool {
    let sorted = sorted_ascending(cards);
    sorted
        .windows(2)
        .all(|w| w[0].value() + 1 == w[1].value())
}

/// Checks if all cards have the same suit.
fn is_flush(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].suit() == w[1].suit())
}

/// Finds the highest rank group with exactly `size` cards of the same rank.
fn best_group(cards: &[Card], size: usize) -> Option<Vec<Card>> {
    let mut groups = AHashMap::<Rank, Vec<Card>>::with_capacity(cards.len());
    for card in cards {
        groups.entry(card.rank()).or_default().push(*card);
    }

    groups
        .into_iter()
        .filter(|(_, group)| group.len() == size)
        .max_by_key(|(rank, _)| *rank)
        .map(|(_, group)| group)
}

/// Returns the cards not in the evidence sorted by descending rank.
fn kickers(cards: &[Card], evidence: &[Card]) -> Vec<Card> {
    let mut pending = evidence.to_vec();
    let mut kickers = cards
        .iter()
        .copied()
        .filter(|card| match pending.iter().position(|c| c == card) {
            Some(pos) => {
                pending.swap_remove(pos);
                false
            }
            None => true,
        })
        .collect::<Vec<_>>();

    kickers.sort_by(|a, b| b.cmp_rank(a));
    kickers
}

/// Compares two sets of cards by rank from the highest card to the lowest.
fn cmp_high_to_low(a: &[Card], b: &[Card]) -> Ordering {
    let ranks = |cards: &[Card]| {
        let mut ranks = cards.iter().map(Card::rank).collect::<Vec<_>>();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        ranks
    };

    ranks(a).cmp(&ranks(b))
}
