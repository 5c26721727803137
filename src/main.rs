//! Metalicana - Entry Point
//!
//! Sets up logging and the terminal, then plays a short scripted encounter
//! on a sample level to drive every screen the console can show.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{bail, Context, Result};

use metalicana::data::export_default_config;
use metalicana::entities::{EnemyDifficulty, PlaceGain, PlaceGainKind, PlayerSnapshot};
use metalicana::render::{
    render_legend, ConsoleColor, CrosstermSurface, EnemyEntry, ObstacleEntry, PlaceKey,
};
use metalicana::{ConsoleConfig, ConsoleRenderer, GameOver, Grid, Position};

const SAMPLE_MAP: [&str; 9] = [
    "##############################",
    "#@.......#..........~~~......#",
    "#........#..........~~~......#",
    "#....e...+.....$.............#",
    "#........#...........g.......#",
    "####+#####...................#",
    "#........#######+#######.....#",
    "#..............................>",
    "##############################",
];

fn main() -> Result<()> {
    // Log to a file so messages never land on the rendered screen
    let log_target: Box<dyn std::io::Write + Send> = match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("metalicana.log")
    {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(std::io::sink()),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(log_target))
        .init();

    log::info!("Starting Metalicana v{}", env!("CARGO_PKG_VERSION"));

    if let Some(path) = export_config_path(std::env::args().skip(1))? {
        export_default_config(Path::new(&path))?;
        println!("Wrote default console config to {}", path);
        return Ok(());
    }

    let config = ConsoleConfig::load();
    let renderer = ConsoleRenderer::from_config(CrosstermSurface::new(), &config)
        .context("console could not start")?;

    match run(renderer) {
        Ok(game_over) => game_over.exit(),
        Err(e) => {
            let _ = CrosstermSurface::new().reset();
            log::error!("Game exited with error: {:#}", e);
            eprintln!("Error: {:#}", e);
            Err(e)
        }
    }
}

/// `Some(path)` for `--export-config <path>`, `None` when no arguments are given
fn export_config_path(mut args: impl Iterator<Item = String>) -> Result<Option<String>> {
    let Some(arg) = args.next() else {
        return Ok(None);
    };
    if arg != "--export-config" {
        bail!("unknown argument {arg:?}; usage: metalicana [--export-config <path>]");
    }
    let path = args
        .next()
        .context("--export-config needs a destination path")?;
    Ok(Some(path))
}

/// Play the scripted encounter; returns once the end-game message is acknowledged
fn run(mut console: ConsoleRenderer<CrosstermSurface>) -> Result<GameOver> {
    let mut grid = Grid::from_lines(SAMPLE_MAP);
    let (legend, treasure) = sample_legend();
    let mut player = PlayerSnapshot::starting();
    log::debug!("Sample level is {} columns wide", grid.width());

    console.render_full_map(&grid, &legend)?;
    console.render_player_stats(&player)?;

    // Walk the hero a few cells east, redrawing only the touched cells
    let floor = console.colors().resolve('.');
    let mut hero = Position::new(1, 1);
    for _ in 0..3 {
        let next = Position::new(hero.col + 1, hero.row);
        if grid.get(next) != Some('.') {
            break;
        }
        grid.set(hero, '.');
        grid.set(next, '@');
        console.set_cell_symbol(hero, '.', floor)?;
        console.set_cell_symbol(next, '@', ConsoleColor::Yellow)?;
        hero = next;
    }
    console.render_status_line("A goblin blocks your way!")?;

    player.health -= 12.5;
    player.experience += 40;
    player.gold += 15;
    apply_gain(&mut player, treasure);
    console.render_battle_screen(
        &grid,
        "You strike the goblin for 10 damage.\nThe goblin hits you for 12.5 damage.\nThe goblin falls. +40 exp, +15 gold.",
        &legend,
    )?;
    console.render_player_stats(&player)?;
    console.render_status_line(&format!("The goblin guarded {} gold.", treasure.value))?;

    let game_over = console.render_end_game("You escaped the dungeon. Press Enter to leave.")?;
    console.into_surface().reset()?;
    Ok(game_over)
}

/// Legend text for the sample level, plus the reward of its treasure pile
fn sample_legend() -> (String, PlaceGain) {
    let enemies = vec![
        ('e', EnemyEntry::new("Goblin", EnemyDifficulty::Easy)),
        ('g', EnemyEntry::new("Gargoyle", EnemyDifficulty::Hard)),
    ];
    let obstacles = vec![
        ('#', ObstacleEntry::new("Wall", "blocks movement")),
        ('~', ObstacleEntry::new("Water", "too deep to cross")),
    ];
    let treasure = PlaceGain::new(PlaceGainKind::Gold, 25);
    let places = vec![
        (PlaceKey::new('$', "Treasure"), treasure),
        (PlaceKey::new('>', "Exit"), PlaceGain::new(PlaceGainKind::Experience, 10)),
    ];

    let legend = render_legend(
        enemies.iter().map(|(k, v)| (k, v)),
        obstacles.iter().map(|(k, v)| (k, v)),
        places.iter().map(|(k, v)| (k, v)),
    );
    (legend, treasure)
}

fn apply_gain(player: &mut PlayerSnapshot, gain: PlaceGain) {
    match gain.kind {
        PlaceGainKind::Health => {
            player.health = (player.health + f64::from(gain.value)).min(f64::from(player.max_health));
        }
        PlaceGainKind::Armor => player.defense += gain.value,
        PlaceGainKind::Damage => player.damage += gain.value,
        PlaceGainKind::Experience => player.experience = player.experience.saturating_add_signed(gain.value),
        PlaceGainKind::Gold => player.gold = player.gold.saturating_add_signed(gain.value),
    }
}
