//! RON config loader
//!
//! Loads console layout and symbol colours from an external RON file, with
//! fallback to hardcoded defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::render::{ColorMap, ConsoleColor};

const CONFIG_FILE: &str = "console.ron";

/// Fixed screen positions used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleLayout {
    /// Column of the player stats panel
    pub stats_col: u16,
    /// Row of the first stats line; the panel is always six rows tall
    pub stats_start_row: u16,
    /// Position of the status line below the battle area
    pub status_col: u16,
    pub status_row: u16,
}

impl Default for ConsoleLayout {
    fn default() -> Self {
        Self {
            stats_col: 60,
            stats_start_row: 1,
            status_col: 2,
            status_row: 16,
        }
    }
}

/// Everything the console needs besides the game state itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Battle screen art, relative to the working directory
    pub template_path: PathBuf,
    pub layout: ConsoleLayout,
    /// Colour for symbols without an entry in `symbol_colors`
    pub default_color: ConsoleColor,
    pub symbol_colors: BTreeMap<char, ConsoleColor>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from("assets/templates/battleground.txt"),
            layout: ConsoleLayout::default(),
            default_color: ConsoleColor::White,
            symbol_colors: default_symbol_colors(),
        }
    }
}

impl ConsoleConfig {
    /// Load from the first config file found, or use defaults
    pub fn load() -> Self {
        Self::load_from_paths(search_paths())
    }

    /// First readable, well-formed file among `paths` wins.
    ///
    /// Missing files are skipped silently; malformed ones are logged and
    /// skipped. Defaults when nothing usable is found.
    pub fn load_from_paths(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => {
                    log::info!("Loaded console config from {}", path.display());
                    return config;
                }
                Err(e) => log::warn!("{}. Skipping.", e),
            }
        }

        log::debug!("No console config found, using defaults");
        Self::default()
    }

    /// Load a specific file; any failure is reported
    pub fn load_from(path: &Path) -> Result<Self, RenderError> {
        let content = fs::read_to_string(path).map_err(|e| RenderError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        ron::from_str(&content).map_err(|e| RenderError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Symbol lookup built from this config
    pub fn color_map(&self) -> ColorMap {
        ColorMap::new(self.symbol_colors.iter().map(|(&c, &color)| (c, color)).collect())
            .with_default(self.default_color)
    }
}

/// Per-user config dir first, then the bundled assets
fn search_paths() -> Vec<PathBuf> {
    use directories::ProjectDirs;

    let mut paths = Vec::new();
    if let Some(proj_dirs) = ProjectDirs::from("com", "metalicana", "Metalicana") {
        paths.push(proj_dirs.config_dir().join(CONFIG_FILE));
    }
    paths.push(Path::new("assets/data").join(CONFIG_FILE));
    paths
}

fn default_symbol_colors() -> BTreeMap<char, ConsoleColor> {
    BTreeMap::from([
        ('@', ConsoleColor::Yellow),
        ('#', ConsoleColor::DarkGray),
        ('.', ConsoleColor::Gray),
        ('>', ConsoleColor::Green),
        ('~', ConsoleColor::Blue),
        ('$', ConsoleColor::DarkYellow),
    ])
}

/// Write the default config as RON for easy editing
pub fn export_default_config(path: &Path) -> Result<(), RenderError> {
    let to_error = |message: String| RenderError::Config {
        path: path.to_path_buf(),
        message,
    };

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|e| to_error(e.to_string()))?;
        }
    }

    let ron = ron::ser::to_string_pretty(&ConsoleConfig::default(), ron::ser::PrettyConfig::default())
        .map_err(|e| to_error(e.to_string()))?;
    fs::write(path, ron).map_err(|e| to_error(e.to_string()))?;
    Ok(())
}
