//! Dungeon grid snapshot
//!
//! The character grid handed to the renderer by the level system.

use serde::{Deserialize, Serialize};

/// Cell coordinate on the display, column first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub col: u16,
    pub row: u16,
}

impl Position {
    pub fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }

    /// Top-left corner of the display
    pub const ORIGIN: Position = Position { col: 0, row: 0 };
}

/// A dungeon floor as rows of display characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid from text, one row per line
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            rows: lines.into_iter().map(|line| line.chars().collect()).collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Width of the widest row (rows may be ragged)
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.rows
            .get(pos.row as usize)
            .and_then(|row| row.get(pos.col as usize))
            .copied()
    }

    /// Replace a single cell, returning the previous symbol
    pub fn set(&mut self, pos: Position, symbol: char) -> Option<char> {
        let cell = self
            .rows
            .get_mut(pos.row as usize)
            .and_then(|row| row.get_mut(pos.col as usize))?;
        Some(std::mem::replace(cell, symbol))
    }
}
