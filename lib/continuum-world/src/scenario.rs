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

//! Textual scenario descriptions.
//!
//! The line-oriented layout, with `<rows>` dirt lines:
//!
//! ```text
//! GRID: <rows> <cols>
//! <ignored line>
//! <whitespace-separated dirt values, one line per row>
//! MOVES: <max_moves>
//! INITIAL: <row> <col>
//! ```
//!
//! `INITIAL` is 1-based in the file and converted to 0-based here, exactly
//! once; everything else in the crate is 0-based.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::world::{validate_dirt, GridSize, Position};
use crate::{Float, WorldError};

/// Everything needed to set up one simulation run. Construction validates,
/// so a `Scenario` value is always runnable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub grid: GridSize,
    pub dirt: Vec<Vec<Float>>,
    pub max_moves: usize,
    pub start: Position,
}

fn malformed(message: impl Into<String>) -> WorldError {
    WorldError::MalformedScenario(message.into())
}

fn parse_pair(text: &str, what: &str) -> Result<(usize, usize), WorldError> {
    let mut tokens = text.split_whitespace();
    let first = tokens
        .next()
        .ok_or_else(|| malformed(format!("{} is missing its first number", what)))?;
    let second = tokens
        .next()
        .ok_or_else(|| malformed(format!("{} is missing its second number", what)))?;
    let first = first
        .parse::<usize>()
        .map_err(|e| malformed(format!("{}: {}: {}", what, first, e)))?;
    let second = second
        .parse::<usize>()
        .map_err(|e| malformed(format!("{}: {}: {}", what, second, e)))?;
    Ok((first, second))
}

impl Scenario {
    /// Validate and build a scenario from already-parsed parts.
    pub fn new(
        grid: GridSize,
        dirt: Vec<Vec<Float>>,
        max_moves: usize,
        start: Position,
    ) -> Result<Self, WorldError> {
        validate_dirt(grid, &dirt)?;
        if !grid.contains(start) {
            return Err(WorldError::StartOutOfBounds {
                row: start.row,
                col: start.col,
                rows: grid.rows,
                cols: grid.cols,
            });
        }
        Ok(Self {
            grid,
            dirt,
            max_moves,
            start,
        })
    }

    /// Parse the text layout documented on this module.
    pub fn parse(text: &str) -> Result<Self, WorldError> {
        let lines: Vec<&str> = text.lines().collect();
        let header = lines.first().ok_or_else(|| malformed("empty scenario"))?;
        let header = header
            .strip_prefix("GRID:")
            .ok_or_else(|| malformed("first line must start with GRID:"))?;
        let (rows, cols) = parse_pair(header, "GRID")?;

        // Line 1 is decorative; dirt rows start at line 2.
        if lines.len() < rows + 4 {
            return Err(malformed(format!(
                "expected at least {} lines for a {}-row grid, found {}",
                rows + 4,
                rows,
                lines.len()
            )));
        }
        let mut dirt: Vec<Vec<Float>> = Vec::with_capacity(rows);
        for (offset, line) in lines[2..2 + rows].iter().enumerate() {
            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<Float>().map_err(|e| {
                        malformed(format!("dirt row {}: {}: {}", offset, token, e))
                    })
                })
                .collect::<Result<Vec<Float>, WorldError>>()?;
            dirt.push(row);
        }

        let moves = lines[2 + rows]
            .strip_prefix("MOVES:")
            .ok_or_else(|| malformed("expected MOVES: after the dirt rows"))?
            .trim();
        let moves = moves
            .parse::<i64>()
            .map_err(|e| malformed(format!("MOVES: {}: {}", moves, e)))?;
        if moves < 0 {
            return Err(WorldError::NegativeMoveBudget(moves));
        }

        let initial = lines[3 + rows]
            .strip_prefix("INITIAL:")
            .ok_or_else(|| malformed("expected INITIAL: after MOVES:"))?;
        let (row, col) = parse_pair(initial, "INITIAL")?;
        let start = Position {
            row: row
                .checked_sub(1)
                .ok_or_else(|| malformed("INITIAL positions are 1-based"))?,
            col: col
                .checked_sub(1)
                .ok_or_else(|| malformed("INITIAL positions are 1-based"))?,
        };

        Self::new(GridSize { rows, cols }, dirt, moves as usize, start)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WorldError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }
}
