// Copyright (C) 2025 Showdown Authors
// SPDX-License-Identifier: Apache-2.0
//
// Hand comparison walkthrough:
//
// ```bash
// $ cargo r --example compare
// ```
use std::cmp::Ordering;

use showdown_eval::{HandValue, parse_cards};

fn main() {
    println!("=== Texas Hold'em hand comparison examples ===\n");

    println!("Example 1: Pair of Aces vs Pair of Kings");
    compare_hands(
        &["SA", "HA"],
        &["SK", "HK"],
        &["DQ", "C8", "S6", "H4", "D2"],
    );

    println!("Example 2: Full House vs Flush");
    compare_hands(
        &["SA", "HA"],
        &["S9", "S7"],
        &["DA", "SK", "SQ", "DJ", "C8"],
    );

    println!("Example 3: Tie, both players use the board");
    compare_hands(
        &["H2", "D3"],
        &["C2", "S3"],
        &["SA", "HK", "DQ", "CJ", "ST"],
    );

    println!("Example 4: Kicker decides the winner");
    compare_hands(
        &["SA", "HK"],
        &["DA", "CQ"],
        &["HA", "D8", "C6", "S4", "H2"],
    );
}

fn compare_hands(p1_hole: &[&str], p2_hole: &[&str], community: &[&str]) {
    let board = parse_cards(community).unwrap();

    let mut p1_cards = parse_cards(p1_hole).unwrap();
    p1_cards.extend(&board);
    let p1 = HandValue::eval(&p1_cards).unwrap();

    let mut p2_cards = parse_cards(p2_hole).unwrap();
    p2_cards.extend(&board);
    let p2 = HandValue::eval(&p2_cards).unwrap();

    println!("  Board:    {}", community.join(" "));
    println!("  Player 1: {} -> {}", p1_hole.join(" "), p1.description());
    println!("  Player 2: {} -> {}", p2_hole.join(" "), p2.description());

    match p1.cmp(&p2) {
        Ordering::Greater => println!("  Player 1 wins\n"),
        Ordering::Less => println!("  Player 2 wins\n"),
        Ordering::Equal => println!("  Tie\n"),
    }
}
