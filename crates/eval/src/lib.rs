// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Three card Poker hand evaluator.
//!
//! A [Hand] is evaluated once when it is created, the evaluation classifies the
//! hand into a [HandRank] and keeps the evidence cards that justify the rank.
//! Hands are totally ordered, two hands that compare equal are a tie:
//!
//! ```
//! # use threecard_eval::*;
//! let cards = |s: &str| {
//!     s.split_whitespace()
//!         .map(|t| t.parse::<Card>())
//!         .collect::<Result<Vec<_>, _>>()
//!         .unwrap()
//! };
//!
//! let h1 = Hand::new(&cards("5h 5d 2s")).unwrap();
//! let h2 = Hand::new(&cards("5c 5s 3h")).unwrap();
//! assert_eq!(h1.rank(), HandRank::Pair);
//! assert!(h2 > h1);
//!
//! let h3 = Hand::new(&cards("2h 3h 5h")).unwrap();
//! assert_eq!(h3.rank(), HandRank::Flush);
//! assert!(h3 > h2);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod hand;
pub use hand::{EvalError, Hand, HandRank};

// Reexport cards types.
pub use threecard_cards::{Card, Deck, Rank, Suit};
