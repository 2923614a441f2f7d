// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Players input.
use anyhow::{Context, Result, bail};
use log::debug;
use rand::Rng;
use std::io::BufRead;

use threecard_core::{Card, Deck, Player, PlayerId};

/// Parses a player from an id followed by the player cards, i.e. `0 2c As 4d`.
pub fn parse_player(line: &str) -> Result<Player> {
    let mut tokens = line.split_whitespace();

    let Some(id) = tokens.next() else {
        bail!("empty player definition");
    };

    let id = id
        .parse::<PlayerId>()
        .with_context(|| format!("invalid player id '{id}'"))?;

    let cards = tokens
        .map(|token| token.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid cards for player {id}"))?;

    Player::new(id, &cards).with_context(|| format!("invalid hand for player {id}"))
}

/// Reads one player per line skipping empty lines.
pub fn read_players<R: BufRead>(reader: R) -> Result<Vec<Player>> {
    let mut players = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("failed to read players")?;
        if line.trim().is_empty() {
            continue;
        }

        let player = parse_player(&line).with_context(|| format!("line {}", idx + 1))?;
        players.push(player);
    }

    Ok(players)
}

/// Deals `count` players with `hand_size` cards from a shuffled deck.
pub fn deal_players<R: Rng>(rng: &mut R, count: usize, hand_size: usize) -> Result<Vec<Player>> {
    if count * hand_size > Deck::SIZE {
        bail!("cannot deal {count} hands of {hand_size} cards from one deck");
    }

    let mut deck = Deck::new_and_shuffled(rng);
    let mut players = Vec::with_capacity(count);

    for id in 0..count {
        let cards = deck
            .deal_hand(hand_size)
            .context("the deck run out of cards")?;
        let player = Player::new(PlayerId::new(id as i64), &cards)?;
        debug!("Dealt player {player}");
        players.push(player);
    }

    Ok(players)
}
