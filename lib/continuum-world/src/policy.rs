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

//! The three decision policies.
//!
//! All three share the same first rule: if the tile under the agent is
//! dirty, clean it. They differ in how they pick a direction once the tile
//! is clean:
//!
//! - [`SimpleReflexPolicy`] wanders uniformly at random;
//! - [`GreedyPolicy`] moves toward the dirtiest neighbor;
//! - [`StatefulPolicy`] moves toward the dirtiest neighbor it has not
//!   already visited, falling back to the random walk when boxed in.

use rand::seq::SliceRandom;

use crate::action::{crosses_boundary, Action, Direction};
use crate::agent::AgentState;
use crate::world::{ContinuumWorld, GridSize, Position};
use crate::{Float, Policy, Rng};

/// Draw directions uniformly until one stays inside the grid. Returns None
/// when no direction is valid, which only happens on a 1x1 grid.
///
/// Terminates: once the 1x1 case is ruled out, at least one of the four
/// draws is always valid.
fn random_valid_direction(position: Position, size: GridSize, rng: &mut Rng) -> Option<Direction> {
    if Direction::ALL
        .iter()
        .all(|&direction| crosses_boundary(position, direction, size))
    {
        return None;
    }
    loop {
        let direction = *Direction::ALL.choose(rng).expect("four directions");
        if !crosses_boundary(position, direction, size) {
            return Some(direction);
        }
    }
}

/// Dirt value of every neighbor reachable without crossing the boundary.
fn sensed_neighbors(world: &ContinuumWorld, position: Position) -> Vec<(Direction, Float)> {
    Direction::ALL
        .iter()
        .filter(|&&direction| !crosses_boundary(position, direction, world.size()))
        .map(|&direction| (direction, world.dirt_at(direction.step(position))))
        .collect()
}

/// Break ties over the maximum dirt value: collect every direction at the
/// maximum, then choose uniformly among them. `candidates` must be
/// non-empty.
fn choose_max_dirt(candidates: &[(Direction, Float)], rng: &mut Rng) -> Direction {
    let max = candidates
        .iter()
        .map(|&(_, dirt)| dirt)
        .fold(Float::NEG_INFINITY, Float::max);
    let tied: Vec<Direction> = candidates
        .iter()
        .filter(|&&(_, dirt)| dirt == max)
        .map(|&(direction, _)| direction)
        .collect();
    *tied.choose(rng).expect("candidates are non-empty")
}

/// The random walk every policy degenerates to when it has no better
/// candidate. On a 1x1 grid there is no move at all, so the only available
/// action is Clean (a no-op on an already-clean tile).
fn random_walk(position: Position, size: GridSize, rng: &mut Rng) -> Action {
    match random_valid_direction(position, size, rng) {
        Some(direction) => Action::Move(direction),
        None => Action::Clean,
    }
}

/// No memory, no lookahead: cleans a dirty tile, otherwise wanders at
/// random among the directions that stay on the grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleReflexPolicy;

impl Policy for SimpleReflexPolicy {
    fn decide(&mut self, world: &ContinuumWorld, agent: &AgentState, rng: &mut Rng) -> Action {
        if world.dirt_at(agent.position()) > 0.0 {
            return Action::Clean;
        }
        random_walk(agent.position(), world.size(), rng)
    }
}

/// Senses all four neighbors and moves toward the dirtiest one, breaking
/// ties uniformly at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn decide(&mut self, world: &ContinuumWorld, agent: &AgentState, rng: &mut Rng) -> Action {
        if world.dirt_at(agent.position()) > 0.0 {
            return Action::Clean;
        }
        let candidates = sensed_neighbors(world, agent.position());
        if candidates.is_empty() {
            return random_walk(agent.position(), world.size(), rng);
        }
        Action::Move(choose_max_dirt(&candidates, rng))
    }
}

/// Greedy over the neighbors not yet visited this run. When every reachable
/// neighbor has been visited, falls back to the unconstrained random walk
/// so the agent cannot deadlock in a fully-explored region.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatefulPolicy;

impl Policy for StatefulPolicy {
    fn decide(&mut self, world: &ContinuumWorld, agent: &AgentState, rng: &mut Rng) -> Action {
        if world.dirt_at(agent.position()) > 0.0 {
            return Action::Clean;
        }
        let candidates: Vec<(Direction, Float)> = sensed_neighbors(world, agent.position())
            .into_iter()
            .filter(|&(direction, _)| !agent.has_visited(direction.step(agent.position())))
            .collect();
        if candidates.is_empty() {
            return random_walk(agent.position(), world.size(), rng);
        }
        Action::Move(choose_max_dirt(&candidates, rng))
    }
}
