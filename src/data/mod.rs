//! External console configuration
//!
//! Layout and colours come from a RON file so they can be tweaked without
//! rebuilding.

pub mod loader;

pub use loader::{export_default_config, ConsoleConfig, ConsoleLayout};
