//! World module
//!
//! Snapshot types for the dungeon the renderer draws.

pub mod grid;

pub use grid::{Grid, Position};
