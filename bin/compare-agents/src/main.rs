/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

use continuum_world::policy::{GreedyPolicy, SimpleReflexPolicy, StatefulPolicy};
use continuum_world::scenario::Scenario;
use continuum_world::{ConsoleReporter, Policy, Simulation};
use rand::SeedableRng;

// Runs the three vacuum agents back to back on the same scenario file. Each
// run gets its own world and a freshly seeded generator so the comparison is
// fair and reproducible.
const SEED: u64 = 1;

fn run<_Policy: Policy>(scenario: &Scenario, policy: _Policy) {
    let rng = rand_pcg::Pcg64::seed_from_u64(SEED);
    let mut simulation =
        Simulation::from_scenario(scenario, policy, rng).expect("scenario was validated on load");
    simulation.run(&mut ConsoleReporter);
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "environ.txt".to_string());
    let scenario = Scenario::from_file(&path).expect("failed to load scenario");

    println!("**Simple Reflex Agent**\n");
    run(&scenario, SimpleReflexPolicy);

    println!("\n**Greedy Agent**\n");
    run(&scenario, GreedyPolicy);

    println!("\n**State Agent**\n");
    run(&scenario, StatefulPolicy);
}
