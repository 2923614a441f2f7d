// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Results output.
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use threecard_core::{Card, HandRank, Player, PlayerId};

/// A player entry in the JSON report.
#[derive(Debug, Serialize)]
struct PlayerEntry<'a> {
    id: PlayerId,
    cards: &'a [Card],
    rank: HandRank,
    evidence: &'a [Card],
}

impl<'a> From<&'a Player> for PlayerEntry<'a> {
    fn from(player: &'a Player) -> Self {
        Self {
            id: player.id(),
            cards: player.hand().cards(),
            rank: player.hand().rank(),
            evidence: player.hand().evidence(),
        }
    }
}

/// The JSON report.
#[derive(Debug, Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    dealt: Option<Vec<PlayerEntry<'a>>>,
    winners: Vec<PlayerEntry<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    standings: Option<Vec<Vec<PlayerEntry<'a>>>>,
}

/// Writes the space separated ids of each group on its own line.
pub fn write_ids<W: Write>(out: &mut W, groups: &[Vec<&Player>]) -> Result<()> {
    for group in groups {
        let ids = group
            .iter()
            .map(|p| p.id().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{ids}")?;
    }

    Ok(())
}

/// Writes the winners, and optionally the dealt players and the standings,
/// as a single JSON document.
pub fn write_json<W: Write>(
    out: &mut W,
    dealt: Option<&[Player]>,
    winners: &[&Player],
    standings: Option<&[Vec<&Player>]>,
) -> Result<()> {
    let report = Report {
        dealt: dealt.map(|players| players.iter().map(PlayerEntry::from).collect()),
        winners: entries(winners),
        standings: standings.map(|groups| groups.iter().map(|g| entries(g)).collect()),
    };

    serde_json::to_writer(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn entries<'a>(players: &[&'a Player]) -> Vec<PlayerEntry<'a>> {
    players.iter().map(|&p| PlayerEntry::from(p)).collect()
}
