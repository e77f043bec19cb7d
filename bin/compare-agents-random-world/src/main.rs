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
use continuum_world::world::{ContinuumWorld, GridSize, Position};
use continuum_world::{ConsoleReporter, Policy, Simulation};
use rand::SeedableRng;

// Runs the three vacuum agents back to back on a randomly generated world.
// Reseeding and regenerating per run means every agent sees the same world
// and the same random stream.
const SEED: u64 = 1;
const GRID: GridSize = GridSize { rows: 8, cols: 5 };
const START: Position = Position { row: 2, col: 4 };
const MAX_MOVES: usize = 30;

fn run<_Policy: Policy>(policy: _Policy) {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(SEED);
    let world = ContinuumWorld::generate(GRID, &mut rng);
    let mut simulation = Simulation::new(world, START, policy, MAX_MOVES, rng);
    simulation.run(&mut ConsoleReporter);
}

fn main() {
    println!("**Simple Reflex Agent**\n");
    run(SimpleReflexPolicy);

    println!("\n**Greedy Agent**\n");
    run(GreedyPolicy);

    println!("\n**State Agent**\n");
    run(StatefulPolicy);
}
