//! Console rendering
//!
//! Everything that reaches the terminal goes through here:
//! - `surface`: the display capability trait and its crossterm backend
//! - `console`: the renderer for map, battle, stats, and end-game screens
//! - `legend`: map legend text
//! - `template`: battle screen art

pub mod color;
pub mod console;
pub mod legend;
pub mod surface;
pub mod template;

pub use color::{ColorMap, ConsoleColor};
pub use console::{ConsoleRenderer, GameOver, CONTINUE_PROMPT};
pub use legend::{render_legend, EnemyEntry, ObstacleEntry, PlaceKey};
pub use surface::{CrosstermSurface, DisplaySurface};
pub use template::BattleTemplate;
