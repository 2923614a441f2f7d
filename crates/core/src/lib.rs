// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Three card Poker game types.
//!
//! A [Game] holds the players and their evaluated hands and selects the
//! winners, the players whose hands tie for the best hand:
//!
//! ```
//! # use threecard_core::*;
//! let cards = |s: &str| {
//!     s.split_whitespace()
//!         .map(|t| t.parse::<Card>())
//!         .collect::<Result<Vec<_>, _>>()
//!         .unwrap()
//! };
//!
//! let players = vec![
//!     Player::new(PlayerId::new(0), &cards("2c As 4d")).unwrap(),
//!     Player::new(PlayerId::new(1), &cards("Kd 5h 6c")).unwrap(),
//!     Player::new(PlayerId::new(2), &cards("Jc Jd 9s")).unwrap(),
//!     Player::new(PlayerId::new(3), &cards("3c 3d 8s")).unwrap(),
//! ];
//!
//! let game = Game::new(players).unwrap();
//! let winners = game.winners().iter().map(|p| p.id()).collect::<Vec<_>>();
//! assert_eq!(winners, [PlayerId::new(2)]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod game;
pub mod poker;

pub use game::{Game, GameError};
pub use poker::{Player, PlayerId};

// Reexport eval types.
pub use threecard_eval::{Card, Deck, EvalError, Hand, HandRank, Rank, Suit};
