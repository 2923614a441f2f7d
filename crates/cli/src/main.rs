// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Three card Poker showdown CLI.
//!
//! Prints the ids of the players with the best hand:
//!
//! ```text
//! $ threecard "0 2c As 4d" "1 Kd 5h 6c" "2 Jc Jd 9s" "3 3c 3d 8s"
//! 2
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use log::info;
use std::io::{self, BufRead, Write};

use threecard_core::Game;

pub mod input;
pub mod report;

#[derive(Debug, Parser)]
#[clap(about = "Finds the winners of a three card Poker showdown")]
struct Cli {
    /// The players, each one an id followed by its cards, i.e. "0 2c As 4d".
    players: Vec<String>,
    /// Read one player per line from the standard input.
    #[clap(long)]
    stdin: bool,
    /// Deal hands to the given number of players from a shuffled deck.
    #[clap(long, value_parser = clap::value_parser!(u8).range(1..=52))]
    deal: Option<u8>,
    /// Number of cards in each hand.
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=17))]
    hand_size: u8,
    /// Print all the tied groups from the best to the worst, one per line.
    #[clap(long)]
    standings: bool,
    /// Print the result as JSON.
    #[clap(long)]
    json: bool,
    /// Enable debug logging.
    #[clap(long, short)]
    verbose: bool,
}

fn run<R: BufRead, W: Write>(cli: &Cli, input: R, out: &mut W) -> Result<()> {
    let hand_size = cli.hand_size as usize;

    let mut players = cli
        .players
        .iter()
        .map(|line| input::parse_player(line))
        .collect::<Result<Vec<_>>>()?;

    if cli.stdin {
        players.extend(input::read_players(input)?);
    }

    if let Some(count) = cli.deal {
        if !players.is_empty() {
            bail!("cannot deal hands when players are given");
        }

        players = input::deal_players(&mut rand::rng(), count as usize, hand_size)?;
        if !cli.json {
            for player in &players {
                writeln!(out, "{player} ({})", player.hand().rank())?;
            }
        }
    }

    let game = Game::new(players)?;
    if game.hand_size() != hand_size {
        bail!(
            "players have {} cards, expected {hand_size}",
            game.hand_size()
        );
    }

    info!("Playing a game with {} players", game.players().len());

    let winners = game.winners();
    let standings = cli.standings.then(|| game.standings());

    if cli.json {
        let dealt = cli.deal.map(|_| game.players());
        report::write_json(out, dealt, &winners, standings.as_deref())
    } else if let Some(standings) = standings {
        report::write_ids(out, &standings)
    } else {
        report::write_ids(out, &[winners])
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let mut stdout = io::stdout().lock();
    run(&cli, io::stdin().lock(), &mut stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str], input: &str) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("threecard").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(&cli, input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn winners_from_args() {
        let out = run_args(&["0 2c As 4d", "1 Kd 5h 6c", "2 Jc Jd 9s", "3 3c 3d 8s"], "").unwrap();
        assert_eq!(out, "2\n");

        let out = run_args(&["0 5h 5d 2s", "1 5c 5s 3h"], "").unwrap();
        assert_eq!(out, "1\n");

        let out = run_args(&["4 2h 3h 5h", "9 5s 3s 2s"], "").unwrap();
        assert_eq!(out, "4 9\n");
    }

    #[test]
    fn winners_from_stdin() {
        let out = run_args(&["--stdin"], "0 2c As 4d\n1 Kd 5h 6c\n\n2 Ah Kh Qh\n").unwrap();
        assert_eq!(out, "2\n");

        let out = run_args(&["--stdin", "5 Ad 2d 3d"], "1 Kd 5h 6c\n").unwrap();
        assert_eq!(out, "5\n");
    }

    #[test]
    fn standings_output() {
        let out = run_args(
            &["--standings", "0 2h 5d 9s", "1 Ah Kh Qh", "2 3h 6d 9c"],
            "",
        )
        .unwrap();
        assert_eq!(out, "1\n0 2\n");
    }

    #[test]
    fn json_output() {
        let out = run_args(&["--json", "3 4c 4d 4h", "8 Ad Kc Qs"], "").unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["winners"][0]["id"], 3);
        assert_eq!(json["winners"][0]["rank"], "ThreeOfAKind");
        assert!(json.get("standings").is_none());
    }

    #[test]
    fn deal_output() {
        let out = run_args(&["--deal", "4"], "").unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 5);
        assert!(!lines[4].is_empty());

        assert!(run_args(&["--deal", "18"], "").is_err());
        assert!(run_args(&["--deal", "2", "0 2c As 4d"], "").is_err());
        assert!(run_args(&["--deal", "0"], "").is_err());
    }

    #[test]
    fn deal_json_output() {
        let out = run_args(&["--deal", "3", "--json"], "").unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        let dealt = json["dealt"].as_array().unwrap();
        assert_eq!(dealt.len(), 3);
        assert!(dealt.iter().all(|p| p["cards"].as_array().unwrap().len() == 3));
        assert!(!json["winners"].as_array().unwrap().is_empty());

        let out = run_args(&["--json", "0 2c As 4d"], "").unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(json.get("dealt").is_none());
    }

    #[test]
    fn single_card_hands() {
        let out = run_args(&["--hand-size", "1", "0 2c", "1 Ks", "2 Kd"], "").unwrap();
        assert_eq!(out, "1 2\n");

        let out = run_args(&["--hand-size", "1", "--deal", "52"], "").unwrap();
        assert_eq!(out.lines().count(), 53);
    }

    #[test]
    fn invalid_input() {
        assert!(run_args(&[], "").is_err());
        assert!(run_args(&["0 2c As"], "").is_err());
        assert!(run_args(&["0 2c As 4d", "1 Kd 5h 6c 7c"], "").is_err());
        assert!(run_args(&["0 2c As 4x"], "").is_err());
        assert!(run_args(&["--hand-size", "2", "0 2c As", "1 5h 5d"], "").is_ok());
        assert!(run_args(&["--hand-size", "2", "0 2c As 4d"], "").is_err());
        assert!(run_args(&["--hand-size", "0", "0 2c"], "").is_err());
    }
}
