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

//! Actions the agent can take, and the boundary check every policy consults
//! before offering a move.

use serde::{Deserialize, Serialize};

use crate::world::{GridSize, Position};

/// The four single-tile moves. Up decreases the row, Down increases it,
/// Left decreases the column, Right increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order agents sample them.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// The tile one step away. The caller must already have ruled out a
    /// boundary crossing.
    pub fn step(self, from: Position) -> Position {
        match self {
            Direction::Up => Position {
                row: from.row - 1,
                col: from.col,
            },
            Direction::Down => Position {
                row: from.row + 1,
                col: from.col,
            },
            Direction::Left => Position {
                row: from.row,
                col: from.col - 1,
            },
            Direction::Right => Position {
                row: from.row,
                col: from.col + 1,
            },
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "U"),
            Direction::Down => write!(f, "D"),
            Direction::Left => write!(f, "L"),
            Direction::Right => write!(f, "R"),
        }
    }
}

/// What the agent does in one timestep: move one tile or clean the tile it
/// occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Move(Direction),
    Clean,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(direction) => direction.fmt(f),
            Action::Clean => write!(f, "S"),
        }
    }
}

/// Returns true iff moving one tile in `direction` from `position` would
/// leave the [0, rows) x [0, cols) grid.
pub fn crosses_boundary(position: Position, direction: Direction, size: GridSize) -> bool {
    match direction {
        Direction::Up => position.row == 0,
        Direction::Down => position.row + 1 >= size.rows,
        Direction::Left => position.col == 0,
        Direction::Right => position.col + 1 >= size.cols,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_crosses_boundary_at_corners() {
        let size = GridSize { rows: 2, cols: 2 };
        let top_left = Position { row: 0, col: 0 };
        assert!(crosses_boundary(top_left, Direction::Up, size));
        assert!(crosses_boundary(top_left, Direction::Left, size));
        assert!(!crosses_boundary(top_left, Direction::Down, size));
        assert!(!crosses_boundary(top_left, Direction::Right, size));

        let bottom_right = Position { row: 1, col: 1 };
        assert!(crosses_boundary(bottom_right, Direction::Down, size));
        assert!(crosses_boundary(bottom_right, Direction::Right, size));
        assert!(!crosses_boundary(bottom_right, Direction::Up, size));
        assert!(!crosses_boundary(bottom_right, Direction::Left, size));
    }

    #[test]
    fn test_single_row_grid_only_allows_horizontal_moves() {
        let size = GridSize { rows: 1, cols: 3 };
        let position = Position { row: 0, col: 0 };
        assert!(crosses_boundary(position, Direction::Up, size));
        assert!(crosses_boundary(position, Direction::Down, size));
        assert!(crosses_boundary(position, Direction::Left, size));
        assert!(!crosses_boundary(position, Direction::Right, size));
    }

    #[test]
    fn test_single_tile_grid_blocks_every_direction() {
        let size = GridSize { rows: 1, cols: 1 };
        let position = Position { row: 0, col: 0 };
        for direction in Direction::ALL {
            assert!(crosses_boundary(position, direction, size));
        }
    }

    #[test]
    fn test_step_moves_exactly_one_tile() {
        let from = Position { row: 1, col: 1 };
        assert_eq!(Direction::Up.step(from), Position { row: 0, col: 1 });
        assert_eq!(Direction::Down.step(from), Position { row: 2, col: 1 });
        assert_eq!(Direction::Left.step(from), Position { row: 1, col: 0 });
        assert_eq!(Direction::Right.step(from), Position { row: 1, col: 2 });
    }

    #[test]
    fn test_action_display_uses_classic_letters() {
        assert_eq!(Action::Move(Direction::Up).to_string(), "U");
        assert_eq!(Action::Move(Direction::Down).to_string(), "D");
        assert_eq!(Action::Move(Direction::Left).to_string(), "L");
        assert_eq!(Action::Move(Direction::Right).to_string(), "R");
        assert_eq!(Action::Clean.to_string(), "S");
    }

    proptest! {
        #[test]
        fn test_crosses_boundary_matches_coordinate_arithmetic(
            rows in 1..8usize,
            cols in 1..8usize,
            row in 0..8usize,
            col in 0..8usize,
        ) {
            prop_assume!(row < rows && col < cols);
            let size = GridSize { rows, cols };
            let position = Position { row, col };
            for direction in Direction::ALL {
                let (dr, dc) = match direction {
                    Direction::Up => (-1i64, 0i64),
                    Direction::Down => (1, 0),
                    Direction::Left => (0, -1),
                    Direction::Right => (0, 1),
                };
                let new_row = row as i64 + dr;
                let new_col = col as i64 + dc;
                let outside = new_row < 0
                    || new_col < 0
                    || new_row >= rows as i64
                    || new_col >= cols as i64;
                prop_assert_eq!(crosses_boundary(position, direction, size), outside);
            }
        }
    }
}
