// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all3
// ...
// Total hands      22100
// Elapsed:         0.004s
// Hands/sec:       5525000
//
// High Card:       16500
// Pair:            3744
// Flush:           1100
// Straight:        660
// Three of a Kind: 52
// Straight Flush:  44
// ```

use std::time::Instant;

use threecard_eval::*;

#[rustfmt::skip]
fn main() {
    // Evaluate all 22100 hands.
    let now = Instant::now();
    let mut counts = [0usize; 6];

    Deck::default().for_each(3, |hand| {
        if let Ok(hand) = Hand::new(hand) {
            counts[hand.rank() as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandRank::HighCard as usize]);
    println!("Pair:            {}", counts[HandRank::Pair as usize]);
    println!("Flush:           {}", counts[HandRank::Flush as usize]);
    println!("Straight:        {}", counts[HandRank::Straight as usize]);
    println!("Three of a Kind: {}", counts[HandRank::ThreeOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandRank::StraightFlush as usize]);
}
