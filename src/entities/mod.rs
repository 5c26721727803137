//! Entity snapshots
//!
//! Read-only views of the player, enemies, and places consumed by the renderer.

pub mod enemies;
pub mod places;
pub mod player;

pub use enemies::EnemyDifficulty;
pub use places::{PlaceGain, PlaceGainKind};
pub use player::PlayerSnapshot;
