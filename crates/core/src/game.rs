// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Winners selection.
use log::debug;
use thiserror::Error;

use crate::poker::{Player, PlayerId};
use threecard_eval::EvalError;

/// Errors returned when a game cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A game needs at least one player.
    #[error("a game needs at least one player")]
    NoPlayers,
    /// Players hold hands with different number of cards.
    #[error("player {player} has {found} cards, expected {expected}")]
    HandSizeMismatch {
        /// The player with the mismatched hand.
        player: PlayerId,
        /// The hand size of the first player.
        expected: usize,
        /// The hand size of this player.
        found: usize,
    },
    /// A player hand could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// A game with a non empty set of players holding hands of the same size.
#[derive(Debug, Clone)]
pub struct Game {
    players: Vec<Player>,
}

impl Game {
    /// Creates a game.
    pub fn new(players: Vec<Player>) -> Result<Self, GameError> {
        let Some(first) = players.first() else {
            return Err(GameError::NoPlayers);
        };

        let expected = first.hand().len();
        if let Some(player) = players.iter().find(|p| p.hand().len() != expected) {
            return Err(GameError::HandSizeMismatch {
                player: player.id(),
                expected,
                found: player.hand().len(),
            });
        }

        Ok(Self { players })
    }

    /// The game players in the order they were added.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The number of cards in each player hand.
    pub fn hand_size(&self) -> usize {
        self.players
            .first()
            .map(|p| p.hand().len())
            .unwrap_or_default()
    }

    /// Groups the players whose hands tie, from the best group to the worst.
    ///
    /// Players in a group keep the order in which they were added.
    pub fn standings(&self) -> Vec<Vec<&Player>> {
        let mut ranked = self.players.iter().collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.hand().cmp(a.hand()));

        let mut groups: Vec<Vec<&Player>> = Vec::new();
        for player in ranked {
            match groups.last_mut() {
                Some(group) if group[0].hand().ties(player.hand()) => group.push(player),
                _ => groups.push(vec![player]),
            }
        }

        groups
    }

    /// The players whose hands tie for the best hand, never empty.
    pub fn winners(&self) -> Vec<&Player> {
        let winners = self.standings().into_iter().next().unwrap_or_default();

        debug!(
            "Winners {:?} with {} out of {} players",
            winners.iter().map(|p| p.id().value()).collect::<Vec<_>>(),
            winners
                .first()
                .map(|p| p.hand().rank().to_string())
                .unwrap_or_default(),
            self.players.len()
        );

        winners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use threecard_eval::{Card, Deck};

    fn player(id: i64, s: &str) -> Player {
        let cards = s
            .split_whitespace()
            .map(|t| t.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        Player::new(PlayerId::new(id), &cards).unwrap()
    }

    fn ids(players: &[&Player]) -> Vec<i64> {
        players.iter().map(|p| p.id().value()).collect()
    }

    #[test]
    fn no_players() {
        assert_eq!(Game::new(Vec::new()).unwrap_err(), GameError::NoPlayers);
    }

    #[test]
    fn hand_size_mismatch() {
        let err = Game::new(vec![player(0, "2h 3d 4s"), player(1, "5h 5d")]).unwrap_err();
        assert_eq!(
            err,
            GameError::HandSizeMismatch {
                player: PlayerId::new(1),
                expected: 3,
                found: 2
            }
        );
        assert_eq!(err.to_string(), "player 1 has 2 cards, expected 3");
    }

    #[test]
    fn single_player() {
        let game = Game::new(vec![player(9, "2h 5d 9s")]).unwrap();
        assert_eq!(game.hand_size(), 3);
        assert_eq!(ids(&game.winners()), [9]);
    }

    #[test]
    fn single_winner() {
        let game = Game::new(vec![
            player(0, "2c As 4d"),
            player(1, "Kd 5h 6c"),
            player(2, "Jc Jd 9s"),
            player(3, "3c 3d 8s"),
        ])
        .unwrap();

        assert_eq!(ids(&game.winners()), [2]);
    }

    #[test]
    fn tied_winners() {
        let game = Game::new(vec![
            player(0, "2h 3h 5h"),
            player(1, "5h 5d 2s"),
            player(2, "5s 2s 3s"),
        ])
        .unwrap();

        assert_eq!(ids(&game.winners()), [0, 2]);
    }

    #[test]
    fn kicker_decides() {
        let game = Game::new(vec![player(0, "5h 5d 2s"), player(1, "5c 5s 3h")]).unwrap();
        assert_eq!(ids(&game.winners()), [1]);
    }

    #[test]
    fn standings() {
        let game = Game::new(vec![
            player(4, "2h 5d 9s"),
            player(5, "Ah Kh Qh"),
            player(6, "3h 6d 9c"),
            player(7, "4c 4d 4h"),
            player(8, "Ad Kc Qs"),
        ])
        .unwrap();

        let standings = game
            .standings()
            .iter()
            .map(|group| ids(group))
            .collect::<Vec<_>>();

        assert_eq!(standings, [vec![5], vec![7], vec![8], vec![4, 6]]);
        assert_eq!(ids(&game.winners()), [5]);
    }

    #[test]
    fn random_games() {
        for _ in 0..100 {
            let mut deck = Deck::new_and_shuffled(&mut rand::rng());
            let players = (0..17)
                .map_while(|id| {
                    let cards = deck.deal_hand(3)?;
                    Player::new(PlayerId::new(id), &cards).ok()
                })
                .collect::<Vec<_>>();
            assert_eq!(players.len(), 17);

            let game = Game::new(players).unwrap();
            let winners = game.winners();
            assert!(!winners.is_empty());

            for w in &winners {
                assert!(game.players().iter().all(|p| w.hand() >= p.hand()));
            }

            let count = game.standings().iter().map(Vec::len).sum::<usize>();
            assert_eq!(count, game.players().len());
        }
    }
}
