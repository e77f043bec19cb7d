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

//! Continuum vacuum world.
//!
//! A cleaning agent moves over a rectangular grid of tiles, each holding a
//! real-valued quantity of dirt. Each timestep the agent either cleans the
//! tile it occupies or moves to an adjacent tile, according to one of three
//! policies of increasing sophistication. See [`policy`] for the policies,
//! [`world`] for the grid, and [`Simulation`] for the driving loop.

use crate::action::Action;
use crate::agent::AgentState;
use crate::scenario::Scenario;
use crate::world::{ContinuumWorld, Position};

pub mod action;
pub mod agent;
pub mod policy;
pub mod scenario;
pub mod world;

pub type Float = f64;
pub type Rng = rand_pcg::Pcg64;
pub type HashSet<V> = rustc_hash::FxHashSet<V>;

/// Everything that can go wrong while setting up a run. All of these are
/// fatal to the run that triggered them and are surfaced to the caller; the
/// simulation itself never produces recoverable errors.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// Grid dimensions must both be at least one.
    #[error("grid must be at least 1x1, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    /// The dirt matrix does not have the declared number of rows.
    #[error("expected {expected} dirt rows, found {actual}")]
    WrongRowCount { expected: usize, actual: usize },

    /// A dirt row does not have the declared number of columns.
    #[error("dirt row {row} has {actual} values, expected {expected}")]
    WrongColumnCount {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Dirt is cleanable residue: values must be finite and non-negative.
    #[error("invalid dirt value {value} at row {row}, column {col}")]
    InvalidDirt { row: usize, col: usize, value: Float },

    /// The move budget cannot be negative.
    #[error("move budget cannot be negative, got {0}")]
    NegativeMoveBudget(i64),

    /// The agent's starting position lies outside the grid.
    #[error("initial position ({row}, {col}) is outside the {rows}x{cols} grid")]
    StartOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// The scenario text is not in the expected layout.
    #[error("malformed scenario: {0}")]
    MalformedScenario(String),

    /// The scenario file could not be read.
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
}

/// A Policy chooses the agent's next action from what it can sense: the
/// world's dirt grid and the agent's own run state (position, and for the
/// stateful policy, the visited set).
///
/// Policies must never return a move that crosses the grid boundary; the
/// executor treats such a move as a programming error and panics.
pub trait Policy {
    fn decide(&mut self, world: &ContinuumWorld, agent: &AgentState, rng: &mut Rng) -> Action;
}

/// A Reporter consumes the stream of events a simulation run emits: one
/// `on_step` per action, a grid snapshot every [`SNAPSHOT_EVERY`] steps, and
/// `on_finish` with the final score.
pub trait Reporter {
    fn on_step(&mut self, step: usize, action: Action, score: Float);
    fn on_snapshot(&mut self, world: &ContinuumWorld, agent: Position);
    fn on_finish(&mut self, score: Float);
}

/// Prints the run to stdout in the classic format: the action letter and
/// the score rounded to 5 decimal places each step, the rendered grid
/// between blank lines at snapshots, and the final score at the end.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn on_step(&mut self, _step: usize, action: Action, score: Float) {
        println!("{} {}", action, (score * 1e5).round() / 1e5);
    }

    fn on_snapshot(&mut self, world: &ContinuumWorld, agent: Position) {
        println!();
        println!("{}", world.render(agent));
        println!();
    }

    fn on_finish(&mut self, score: Float) {
        println!("score: {}", score);
    }
}

/// Discards all events. Useful when only the final score matters.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn on_step(&mut self, _step: usize, _action: Action, _score: Float) {}
    fn on_snapshot(&mut self, _world: &ContinuumWorld, _agent: Position) {}
    fn on_finish(&mut self, _score: Float) {}
}

/// How often a full-grid snapshot is emitted, in steps.
pub const SNAPSHOT_EVERY: usize = 5;

/// A Simulation runs a single policy against a single world for a fixed step
/// budget. Every run owns its world, agent state, and random generator, so
/// back-to-back runs of different policies cannot interfere and reproduce
/// exactly given the same seed.
pub struct Simulation<_Policy: Policy> {
    world: ContinuumWorld,
    agent: AgentState,
    policy: _Policy,
    max_moves: usize,
    rng: Rng,
}

impl<_Policy: Policy> Simulation<_Policy> {
    /// Panics if `start` lies outside the world.
    pub fn new(
        world: ContinuumWorld,
        start: Position,
        policy: _Policy,
        max_moves: usize,
        rng: Rng,
    ) -> Self {
        assert!(
            world.size().contains(start),
            "start position {:?} is outside the {:?} grid",
            start,
            world.size(),
        );
        Self {
            agent: AgentState::new(start),
            world,
            policy,
            max_moves,
            rng,
        }
    }

    /// Build a run from a validated scenario. The scenario's dirt matrix is
    /// copied, so the same scenario can seed any number of runs.
    pub fn from_scenario(
        scenario: &Scenario,
        policy: _Policy,
        rng: Rng,
    ) -> Result<Self, WorldError> {
        let world = ContinuumWorld::new(scenario.grid, scenario.dirt.clone())?;
        Ok(Self::new(
            world,
            scenario.start,
            policy,
            scenario.max_moves,
            rng,
        ))
    }

    /// Drive the policy for the full step budget, emitting events as we go.
    pub fn run(&mut self, reporter: &mut dyn Reporter) {
        for step in 1..=self.max_moves {
            let action = self.policy.decide(&self.world, &self.agent, &mut self.rng);
            self.agent.apply(&mut self.world, action);
            reporter.on_step(step, action, self.agent.score());
            if step % SNAPSHOT_EVERY == 0 {
                reporter.on_snapshot(&self.world, self.agent.position());
            }
        }
        reporter.on_finish(self.agent.score());
    }

    pub fn score(&self) -> Float {
        self.agent.score()
    }
}
