//! Metalicana - console presentation layer for a terminal dungeon crawler
//!
//! Draws the dungeon, battle screen, player stats, and map legend from game
//! state snapshots produced elsewhere.

pub mod data;
pub mod entities;
pub mod error;
pub mod render;
pub mod world;

// Re-export commonly used types
pub use data::ConsoleConfig;
pub use entities::PlayerSnapshot;
pub use error::RenderError;
pub use render::{ConsoleRenderer, DisplaySurface, GameOver};
pub use world::{Grid, Position};
