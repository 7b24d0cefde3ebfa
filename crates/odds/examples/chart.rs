// Copyright (C) 2025 Showdown Authors
// SPDX-License-Identifier: Apache-2.0
//
// Prints a 13x13 preflop win probability chart, suited hands above the
// diagonal, offsuit below:
//
// ```bash
// $ cargo r --release --features=parallel --example chart -- --num-players 3
// ```
use clap::{Parser, value_parser};
use std::time::Instant;

use showdown_cards::{Card, Rank, Suit};
use showdown_odds::par_estimate;

const NUM_TASKS: usize = 4;
const SIMULATIONS: u32 = 20_000;

fn run_sim(c1: Card, c2: Card, num_players: usize) -> f64 {
    let hole = [c1, c2];
    let result = par_estimate(NUM_TASKS, &hole, &[], num_players, SIMULATIONS).unwrap();
    result.win_probability * 100.0
}

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-----|");
    }
    println!();
}

#[derive(Debug, Parser)]
struct Cli {
    /// The number of players at the table, including the hero.
    #[clap(long, short, default_value_t = 2, value_parser = value_parser!(u8).range(2..=10))]
    num_players: u8,
}

fn main() {
    let cli = Cli::parse();
    let num_players = cli.num_players as usize;

    separator();

    let now = Instant::now();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut probs = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            let (c1, c2) = if r1 <= r2 {
                // Offsuit or pair.
                (Card::new(r2, Suit::Hearts), Card::new(r1, Suit::Spades))
            } else {
                // Suited cards.
                (Card::new(r1, Suit::Hearts), Card::new(r2, Suit::Hearts))
            };

            if c1.rank() == c2.rank() {
                labels.push(format!("{}{} ", c1.rank(), c2.rank()));
            } else if c1.suit() == c2.suit() {
                labels.push(format!("{}{}s", c1.rank(), c2.rank()));
            } else {
                labels.push(format!("{}{}o", c1.rank(), c2.rank()));
            }

            probs.push(run_sim(c1, c2, num_players));
        }

        print!("|");
        for label in labels {
            print!(" {label} |");
        }
        println!();

        print!("|");
        for prob in &probs {
            print!(" {prob:2.0}% |");
        }
        println!();

        separator();
    }

    println!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());
}
