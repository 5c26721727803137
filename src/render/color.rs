//! Console palette and symbol colour lookup

use std::collections::HashMap;

use crossterm::style::Color;
use serde::{Deserialize, Serialize};

/// The classic 16-colour console palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    #[default]
    White,
}

impl From<ConsoleColor> for Color {
    fn from(color: ConsoleColor) -> Self {
        match color {
            ConsoleColor::Black => Color::Black,
            ConsoleColor::DarkBlue => Color::DarkBlue,
            ConsoleColor::DarkGreen => Color::DarkGreen,
            ConsoleColor::DarkCyan => Color::DarkCyan,
            ConsoleColor::DarkRed => Color::DarkRed,
            ConsoleColor::DarkMagenta => Color::DarkMagenta,
            ConsoleColor::DarkYellow => Color::DarkYellow,
            ConsoleColor::Gray => Color::Grey,
            ConsoleColor::DarkGray => Color::DarkGrey,
            ConsoleColor::Blue => Color::Blue,
            ConsoleColor::Green => Color::Green,
            ConsoleColor::Cyan => Color::Cyan,
            ConsoleColor::Red => Color::Red,
            ConsoleColor::Magenta => Color::Magenta,
            ConsoleColor::Yellow => Color::Yellow,
            ConsoleColor::White => Color::White,
        }
    }
}

/// Foreground colour per map symbol, with a fallback for everything else
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorMap {
    colors: HashMap<char, ConsoleColor>,
    default: ConsoleColor,
}

impl ColorMap {
    pub fn new(colors: HashMap<char, ConsoleColor>) -> Self {
        Self { colors, default: ConsoleColor::default() }
    }

    pub fn with_default(mut self, default: ConsoleColor) -> Self {
        self.default = default;
        self
    }

    pub fn insert(&mut self, symbol: char, color: ConsoleColor) {
        self.colors.insert(symbol, color);
    }

    /// Colour for a symbol. Never fails: unmapped symbols get the default.
    pub fn resolve(&self, symbol: char) -> ConsoleColor {
        self.colors.get(&symbol).copied().unwrap_or(self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_falls_back_to_default() {
        let mut map = ColorMap::default();
        map.insert('#', ConsoleColor::DarkGray);
        assert_eq!(map.resolve('#'), ConsoleColor::DarkGray);
        assert_eq!(map.resolve('?'), ConsoleColor::White);

        let map = map.with_default(ConsoleColor::Gray);
        assert_eq!(map.resolve('?'), ConsoleColor::Gray);
    }

    #[test]
    fn test_gray_maps_to_crossterm_grey() {
        assert_eq!(Color::from(ConsoleColor::Gray), Color::Grey);
        assert_eq!(Color::from(ConsoleColor::DarkGray), Color::DarkGrey);
    }
}
