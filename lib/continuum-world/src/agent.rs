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

//! Per-run agent state and the executor that applies chosen actions.

use crate::action::{crosses_boundary, Action};
use crate::world::{ContinuumWorld, Position};
use crate::{Float, HashSet};

/// Mutable per-run agent state: where the agent is, what it has collected,
/// and every tile it has occupied. Scoped to one simulation run; nothing is
/// shared across runs or policies.
#[derive(Debug, Clone)]
pub struct AgentState {
    position: Position,
    score: Float,
    visited: HashSet<Position>,
}

impl AgentState {
    /// The visited set starts out holding the starting position.
    pub fn new(start: Position) -> Self {
        let mut visited = HashSet::default();
        visited.insert(start);
        Self {
            position: start,
            score: 0.0,
            visited,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Cumulative dirt collected so far. Never decreases.
    pub fn score(&self) -> Float {
        self.score
    }

    pub fn has_visited(&self, position: Position) -> bool {
        self.visited.contains(&position)
    }

    /// Apply one action: shift the position by exactly one tile, or collect
    /// the dirt under the agent. The resulting position joins the visited
    /// set either way.
    ///
    /// Directional moves must already have been checked against the grid
    /// boundary; a crossing move reaching this point is a programming error
    /// and panics rather than clamping the position.
    pub fn apply(&mut self, world: &mut ContinuumWorld, action: Action) {
        match action {
            Action::Move(direction) => {
                assert!(
                    !crosses_boundary(self.position, direction, world.size()),
                    "policy chose a boundary-crossing move {:?} from {:?}",
                    direction,
                    self.position,
                );
                self.position = direction.step(self.position);
            }
            Action::Clean => {
                self.score += world.clean(self.position);
            }
        }
        self.visited.insert(self.position);
    }
}
