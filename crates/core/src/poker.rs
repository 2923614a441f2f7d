// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types used in a Poker game.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::game::GameError;
use threecard_eval::{Card, Hand};

/// A player identifier chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(i64);

impl PlayerId {
    /// Creates a player id.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The integer id.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for PlayerId {
    fn from(id: i64) -> Self {
        PlayerId(id)
    }
}

impl FromStr for PlayerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(PlayerId)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player with an evaluated hand.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    hand: Hand,
}

impl Player {
    /// Creates a player and evaluates its hand.
    pub fn new(id: PlayerId, cards: &[Card]) -> Result<Self, GameError> {
        Ok(Self {
            id,
            hand: Hand::new(cards)?,
        })
    }

    /// This player id.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// This player hand.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use threecard_eval::{EvalError, HandRank};

    #[test]
    fn player_id_parse() {
        assert_eq!("42".parse::<PlayerId>().unwrap(), PlayerId::new(42));
        assert_eq!("-1".parse::<PlayerId>().unwrap(), PlayerId::from(-1));
        assert!("x1".parse::<PlayerId>().is_err());
        assert_eq!(PlayerId::new(7).to_string(), "7");
    }

    #[test]
    fn player_hand() {
        let cards = ["Ah", "Kh", "Qh"].map(|t| t.parse::<Card>().unwrap());
        let player = Player::new(PlayerId::new(3), &cards).unwrap();
        assert_eq!(player.id().value(), 3);
        assert_eq!(player.hand().rank(), HandRank::StraightFlush);
        assert_eq!(player.to_string(), "3 Ah Kh Qh");

        let err = Player::new(PlayerId::new(1), &[]).unwrap_err();
        assert_eq!(err, GameError::Eval(EvalError::EmptyHand));
        assert_eq!(err.to_string(), "cannot evaluate an empty hand");
    }
}
