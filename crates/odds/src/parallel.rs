// Copyright (C) 2025 Showdown Authors
// SPDX-License-Identifier: Apache-2.0

//! Parallel trial execution.
use rand::prelude::*;
use std::thread;

use showdown_cards::Card;

use crate::sim::{self, OddsError, SimulationResult, Tally};

/// Estimates win, tie, and loss probabilities with trials spread over
/// `num_tasks` parallel tasks.
///
/// Each task gets its own OS-seeded random source and deck copy and runs
/// its share of the trials; the partial counts are summed at the end, so
/// the tasks cover exactly `simulations` trials between them. Aside from
/// the independent random streams the estimate is the same as
/// [estimate](crate::estimate).
///
/// Panics if `num_tasks` is zero.
pub fn par_estimate(
    num_tasks: usize,
    hole: &[Card],
    community: &[Card],
    num_players: usize,
    simulations: u32,
) -> Result<SimulationResult, OddsError> {
    assert!(num_tasks > 0);

    sim::validate(hole, community, num_players, simulations)?;

    let deck = sim::candidate_deck(hole, community);

    // Spread the remainder over the first tasks so the counts add up
    // to the requested total.
    let base = simulations / num_tasks as u32;
    let remainder = simulations % num_tasks as u32;

    let total = thread::scope(|s| {
        let handles = (0..num_tasks as u32)
            .map(|task_id| {
                let count = base + u32::from(task_id < remainder);
                let deck = &deck;
                s.spawn(move || {
                    let mut rng = SmallRng::from_os_rng();
                    let mut deck = deck.clone();
                    let mut tally = Tally::default();
                    for _ in 0..count {
                        tally.record(sim::run_trial(
                            hole,
                            community,
                            &mut deck,
                            num_players,
                            &mut rng,
                        ));
                    }
                    tally
                })
            })
            .collect::<Vec<_>>();

        let mut total = Tally::default();
        for handle in handles {
            total.merge(handle.join().expect("simulation task panicked"));
        }
        total
    });

    Ok(total.into_result(simulations))
}
