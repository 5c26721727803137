//! Console renderer
//!
//! Draws the dungeon, battle screen, stats panel, and end-game message onto a
//! `DisplaySurface`. Every call is independent; the only state is the layout,
//! colours, and battle template fixed at construction.

use crate::data::{ConsoleConfig, ConsoleLayout};
use crate::entities::PlayerSnapshot;
use crate::error::RenderError;
use crate::world::{Grid, Position};

use super::{BattleTemplate, ColorMap, ConsoleColor, DisplaySurface};

pub const CONTINUE_PROMPT: &str = "Press any key to continue:";

/// Returned when the end-game message has been acknowledged.
///
/// The renderer never terminates the process itself; the owner of the game
/// loop decides when to call [`GameOver::exit`].
#[must_use = "the game is over; exit or tear down the terminal"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub exit_code: i32,
}

impl GameOver {
    /// Terminate the process. Never returns.
    pub fn exit(self) -> ! {
        log::info!("Exiting with code {}", self.exit_code);
        std::process::exit(self.exit_code)
    }
}

/// Renders game state onto a display surface
pub struct ConsoleRenderer<S: DisplaySurface> {
    surface: S,
    layout: ConsoleLayout,
    colors: ColorMap,
    template: BattleTemplate,
}

impl<S: DisplaySurface> ConsoleRenderer<S> {
    pub fn new(surface: S, layout: ConsoleLayout, colors: ColorMap, template: BattleTemplate) -> Self {
        Self { surface, layout, colors, template }
    }

    /// Build from config, loading the battle template once.
    ///
    /// Fails if the template file is missing; there is no fallback art.
    pub fn from_config(surface: S, config: &ConsoleConfig) -> Result<Self, RenderError> {
        let template = BattleTemplate::load(&config.template_path)?;
        Ok(Self::new(surface, config.layout, config.color_map(), template))
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }

    /// Clear the screen and repaint the whole grid, row by row
    pub fn render_dungeon(&mut self, grid: &Grid) -> Result<(), RenderError> {
        self.surface.clear()?;
        for row in grid.rows() {
            for &symbol in row {
                self.surface.set_foreground(self.colors.resolve(symbol))?;
                self.surface.write_char(symbol)?;
            }
            self.surface.write_line("")?;
        }
        self.surface.flush()?;
        Ok(())
    }

    /// Show the battle screen, wait for a key, then repaint the map
    pub fn render_battle_screen(
        &mut self,
        grid: &Grid,
        battle_result: &str,
        legend: &str,
    ) -> Result<(), RenderError> {
        self.surface.clear()?;
        self.surface.write_line(self.template.as_str())?;
        self.surface.write_line(battle_result)?;
        self.surface.write_line(CONTINUE_PROMPT)?;
        self.surface.flush()?;

        self.surface.read_key()?;
        log::debug!("Battle screen acknowledged");

        self.render_full_map(grid, legend)
    }

    /// Repaint the dungeon, print the map legend, and return to the origin
    pub fn render_full_map(&mut self, grid: &Grid, legend: &str) -> Result<(), RenderError> {
        self.render_dungeon(grid)?;
        self.surface.write_line(legend)?;
        self.surface.move_to(Position::ORIGIN.col, Position::ORIGIN.row)?;
        self.surface.flush()?;
        Ok(())
    }

    pub fn render_plain_text(&mut self, text: &str) -> Result<(), RenderError> {
        self.surface.write_line(text)?;
        self.surface.flush()?;
        Ok(())
    }

    /// Replace the single status row under the battle area
    pub fn render_status_line(&mut self, text: &str) -> Result<(), RenderError> {
        let (col, row) = (self.layout.status_col, self.layout.status_row);
        // Blank to the right edge only; a full-width run would wrap onto the next row
        let blank = " ".repeat(self.surface.width()?.saturating_sub(col) as usize);

        self.surface.move_to(col, row)?;
        self.surface.write_str(&blank)?;
        self.surface.move_to(col, row)?;
        self.surface.write_line(text)?;
        self.surface.flush()?;
        Ok(())
    }

    /// Write the six-line stats panel at its fixed position
    pub fn render_player_stats(&mut self, player: &PlayerSnapshot) -> Result<(), RenderError> {
        let col = self.layout.stats_col;
        let start = self.layout.stats_start_row;

        for (row, line) in (start..).zip(player.stat_lines()) {
            self.surface.move_to(col, row)?;
            self.surface.write_line(&line)?;
        }
        self.surface.flush()?;
        Ok(())
    }

    /// Redraw one cell without repainting the map
    pub fn set_cell_symbol(
        &mut self,
        position: Position,
        symbol: char,
        color: ConsoleColor,
    ) -> Result<(), RenderError> {
        self.surface.move_to(position.col, position.row)?;
        self.surface.set_foreground(color)?;
        self.surface.write_char(symbol)?;
        self.surface.flush()?;
        Ok(())
    }

    /// Show the final message and wait for the player to press enter.
    ///
    /// Returns a [`GameOver`] instead of exiting so the caller can restore
    /// the terminal first.
    pub fn render_end_game(&mut self, message: &str) -> Result<GameOver, RenderError> {
        self.surface.clear()?;
        self.surface.write_line(message)?;
        self.surface.flush()?;

        self.surface.read_line()?;
        log::info!("Game over: {}", message);
        Ok(GameOver { exit_code: 0 })
    }
}
