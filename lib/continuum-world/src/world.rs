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

//! The observable world: a rectangular grid of tiles with a dirt value each.

use serde::{Deserialize, Serialize};

use crate::{Float, Rng, WorldError};

/// Grid dimensions, both at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }
}

/// A tile coordinate. Row 0 is the top row; rows grow downwards, columns
/// grow rightwards. Coordinates are 0-based throughout the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// The world at any given instant: dimensions plus a dirt value per tile.
/// Only [`ContinuumWorld::clean`] mutates it, and only one tile at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuumWorld {
    size: GridSize,
    dirt: Vec<Float>,
}

pub(crate) fn validate_dirt(size: GridSize, dirt: &[Vec<Float>]) -> Result<(), WorldError> {
    if size.rows == 0 || size.cols == 0 {
        return Err(WorldError::EmptyGrid {
            rows: size.rows,
            cols: size.cols,
        });
    }
    if dirt.len() != size.rows {
        return Err(WorldError::WrongRowCount {
            expected: size.rows,
            actual: dirt.len(),
        });
    }
    for (row, values) in dirt.iter().enumerate() {
        if values.len() != size.cols {
            return Err(WorldError::WrongColumnCount {
                row,
                expected: size.cols,
                actual: values.len(),
            });
        }
        for (col, &value) in values.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(WorldError::InvalidDirt { row, col, value });
            }
        }
    }
    Ok(())
}

impl ContinuumWorld {
    /// Create a world from explicit dimensions and an initial dirt matrix.
    /// Rejects a shape mismatch and any negative or non-finite dirt value.
    pub fn new(size: GridSize, dirt: Vec<Vec<Float>>) -> Result<Self, WorldError> {
        validate_dirt(size, &dirt)?;
        Ok(Self {
            size,
            dirt: dirt.into_iter().flatten().collect(),
        })
    }

    /// Generate a world where roughly half the tiles are dirty. For each
    /// tile: draw a coin in [0,1); if it exceeds 0.5 the tile's dirt is a
    /// second independent draw rounded to 2 decimal digits, otherwise 0.
    ///
    /// The generator is supplied by the caller so runs are reproducible.
    pub fn generate(size: GridSize, rng: &mut Rng) -> Self {
        use rand::Rng as _;
        assert!(size.rows > 0 && size.cols > 0, "grid must be at least 1x1");
        let mut dirt = vec![0.0; size.rows * size.cols];
        for value in dirt.iter_mut() {
            if rng.gen::<Float>() > 0.5 {
                *value = (rng.gen::<Float>() * 100.0).round() / 100.0;
            }
        }
        Self { size, dirt }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    fn index(&self, position: Position) -> usize {
        assert!(
            self.size.contains(position),
            "position {:?} is outside the {:?} grid",
            position,
            self.size,
        );
        position.row * self.size.cols + position.col
    }

    /// Current dirt at a tile. Panics if the position is out of bounds.
    pub fn dirt_at(&self, position: Position) -> Float {
        self.dirt[self.index(position)]
    }

    /// Remove and return the dirt at a tile, leaving it clean. Returns 0 on
    /// every call after the first.
    pub fn clean(&mut self, position: Position) -> Float {
        let index = self.index(position);
        std::mem::replace(&mut self.dirt[index], 0.0)
    }

    /// Sum of all dirt currently on the grid.
    pub fn total_dirt(&self) -> Float {
        self.dirt.iter().sum()
    }

    /// Render the grid row by row, values comma-separated, with the agent's
    /// tile bracketed and set off by spaces.
    pub fn render(&self, agent: Position) -> String {
        let mut s = String::new();
        for row in 0..self.size.rows {
            let line = if row == agent.row {
                let mut parts: Vec<String> = Vec::new();
                let before: Vec<String> = (0..agent.col)
                    .map(|col| self.dirt_at(Position { row, col }).to_string())
                    .collect();
                if !before.is_empty() {
                    parts.push(before.join(", "));
                }
                parts.push(format!("[{}]", self.dirt_at(agent)));
                let after: Vec<String> = (agent.col + 1..self.size.cols)
                    .map(|col| self.dirt_at(Position { row, col }).to_string())
                    .collect();
                if !after.is_empty() {
                    parts.push(after.join(", "));
                }
                parts.join(" ")
            } else {
                (0..self.size.cols)
                    .map(|col| self.dirt_at(Position { row, col }).to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            };
            s.push_str(&line);
            if row < self.size.rows - 1 {
                s.push('\n');
            }
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_new_rejects_empty_grid() {
        let result = ContinuumWorld::new(GridSize { rows: 0, cols: 3 }, vec![]);
        assert!(matches!(result, Err(WorldError::EmptyGrid { .. })));
    }

    #[test]
    fn test_new_rejects_wrong_row_count() {
        let result = ContinuumWorld::new(GridSize { rows: 2, cols: 2 }, vec![vec![0.0, 0.0]]);
        assert!(matches!(
            result,
            Err(WorldError::WrongRowCount {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_new_rejects_wrong_column_count() {
        let result = ContinuumWorld::new(
            GridSize { rows: 2, cols: 2 },
            vec![vec![0.0, 0.0], vec![0.0]],
        );
        assert!(matches!(
            result,
            Err(WorldError::WrongColumnCount {
                row: 1,
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_new_rejects_negative_dirt() {
        let result = ContinuumWorld::new(
            GridSize { rows: 1, cols: 3 },
            vec![vec![0.0, -0.5, 0.0]],
        );
        assert!(matches!(
            result,
            Err(WorldError::InvalidDirt { row: 0, col: 1, .. })
        ));
    }

    #[test]
    fn test_new_rejects_nan_dirt() {
        let result = ContinuumWorld::new(
            GridSize { rows: 1, cols: 1 },
            vec![vec![Float::NAN]],
        );
        assert!(matches!(result, Err(WorldError::InvalidDirt { .. })));
    }

    #[test]
    fn test_clean_returns_prior_value_then_zero() {
        let mut world = ContinuumWorld::new(
            GridSize { rows: 1, cols: 2 },
            vec![vec![0.75, 0.0]],
        )
        .expect("world is valid");
        let position = Position { row: 0, col: 0 };
        assert_eq!(world.clean(position), 0.75);
        assert_eq!(world.dirt_at(position), 0.0);
        assert_eq!(world.clean(position), 0.0);
    }

    #[test]
    fn test_total_dirt_sums_all_tiles() {
        let world = ContinuumWorld::new(
            GridSize { rows: 2, cols: 2 },
            vec![vec![1.0, 0.5], vec![0.0, 0.25]],
        )
        .expect("world is valid");
        assert_abs_diff_eq!(world.total_dirt(), 1.75);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_dirt_at_panics_out_of_bounds() {
        let world = ContinuumWorld::new(GridSize { rows: 1, cols: 1 }, vec![vec![0.0]])
            .expect("world is valid");
        world.dirt_at(Position { row: 0, col: 1 });
    }

    #[test]
    fn test_generate_is_reproducible_per_seed() {
        let size = GridSize { rows: 8, cols: 5 };
        let first = ContinuumWorld::generate(size, &mut crate::Rng::seed_from_u64(1));
        let second = ContinuumWorld::generate(size, &mut crate::Rng::seed_from_u64(1));
        assert_eq!(first, second);

        let other = ContinuumWorld::generate(size, &mut crate::Rng::seed_from_u64(2));
        assert_ne!(first, other);
    }

    #[test]
    fn test_generate_emits_two_decimal_values_in_range() {
        let size = GridSize { rows: 8, cols: 5 };
        let world = ContinuumWorld::generate(size, &mut crate::Rng::seed_from_u64(42));
        for row in 0..size.rows {
            for col in 0..size.cols {
                let value = world.dirt_at(Position { row, col });
                assert!((0.0..=1.0).contains(&value));
                assert_abs_diff_eq!(value * 100.0, (value * 100.0).round(), epsilon = 1e-9);
            }
        }
        // The coin flip should leave some tiles clean and some dirty.
        assert!(world.total_dirt() > 0.0);
        let clean_tiles = (0..size.rows)
            .flat_map(|row| (0..size.cols).map(move |col| Position { row, col }))
            .filter(|&p| world.dirt_at(p) == 0.0)
            .count();
        assert!(clean_tiles > 0);
    }

    #[test]
    fn test_render_brackets_agent_tile() {
        let world = ContinuumWorld::new(
            GridSize { rows: 2, cols: 2 },
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        )
        .expect("world is valid");
        assert_eq!(world.render(Position { row: 0, col: 0 }), "[1] 2\n3, 4");
        assert_eq!(world.render(Position { row: 1, col: 1 }), "1, 2\n3 [4]");
    }

    #[test]
    fn test_render_brackets_interior_tile() {
        let world = ContinuumWorld::new(
            GridSize { rows: 1, cols: 3 },
            vec![vec![0.5, 0.0, 0.25]],
        )
        .expect("world is valid");
        assert_eq!(world.render(Position { row: 0, col: 1 }), "0.5 [0] 0.25");
    }
}
