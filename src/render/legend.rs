//! Map legend text
//!
//! Builds the legend printed below the dungeon from the level's enemy,
//! obstacle, and place tables. Entries keep the order the tables iterate in.

use crate::entities::{EnemyDifficulty, PlaceGain};

pub const SEPARATOR_LINE: &str = "------------------------------------------------------------\n";
pub const ENEMY_HEADING: &str = "Enemies:";
pub const OBSTACLE_HEADING: &str = "Obstacles:";
pub const PLACE_HEADING: &str = "Places:";

/// Enemy shown on the map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyEntry {
    pub name: String,
    pub difficulty: EnemyDifficulty,
}

impl EnemyEntry {
    pub fn new(name: impl Into<String>, difficulty: EnemyDifficulty) -> Self {
        Self { name: name.into(), difficulty }
    }
}

/// Impassable or hazardous map feature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleEntry {
    pub name: String,
    pub description: String,
}

impl ObstacleEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), description: description.into() }
    }
}

/// Places are keyed by symbol and name together; one symbol may name several places
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceKey {
    pub symbol: char,
    pub name: String,
}

impl PlaceKey {
    pub fn new(symbol: char, name: impl Into<String>) -> Self {
        Self { symbol, name: name.into() }
    }
}

/// Format the legend.
///
/// Accepts any map-like iterator (`HashMap`, `BTreeMap`, a `Vec` of pairs
/// via `.iter().map(..)`); rows come out in iteration order. Columns are
/// left-aligned in fixed widths of 10/20/15 for enemies, 10/20/50 for
/// obstacles, and 10/20 for places.
pub fn render_legend<'a, E, O, P>(enemies: E, obstacles: O, places: P) -> String
where
    E: IntoIterator<Item = (&'a char, &'a EnemyEntry)>,
    O: IntoIterator<Item = (&'a char, &'a ObstacleEntry)>,
    P: IntoIterator<Item = (&'a PlaceKey, &'a PlaceGain)>,
{
    let mut out = String::from("\n\n\n");

    out.push_str(SEPARATOR_LINE);
    out.push_str(ENEMY_HEADING);
    out.push('\n');
    for (symbol, enemy) in enemies {
        out.push_str(&format!(
            "{:<10}{:<20}{:<15}\n",
            symbol,
            enemy.name,
            enemy.difficulty.name()
        ));
    }

    out.push_str(SEPARATOR_LINE);
    out.push_str(OBSTACLE_HEADING);
    out.push('\n');
    for (symbol, obstacle) in obstacles {
        out.push_str(&format!(
            "{:<10}{:<20}{:<50}\n",
            symbol, obstacle.name, obstacle.description
        ));
    }

    out.push_str(SEPARATOR_LINE);
    out.push_str(PLACE_HEADING);
    out.push('\n');
    for (place, _gain) in places {
        out.push_str(&format!("{:<10}{:<20}\n", place.symbol, place.name));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::entities::PlaceGainKind;

    #[test]
    fn test_legend_sections_and_columns() {
        let enemies = BTreeMap::from([('e', EnemyEntry::new("Goblin", EnemyDifficulty::Easy))]);
        let obstacles = BTreeMap::from([('#', ObstacleEntry::new("Wall", "blocks movement"))]);
        let places = BTreeMap::from([(
            PlaceKey::new('>', "Exit"),
            PlaceGain::new(PlaceGainKind::Gold, 10),
        )]);

        let legend = render_legend(&enemies, &obstacles, &places);
        let lines: Vec<&str> = legend.lines().collect();

        let separator = SEPARATOR_LINE.trim_end();
        assert_eq!(&lines[..3], &["", "", ""]);
        assert_eq!(lines[3], separator);
        assert_eq!(lines[4], ENEMY_HEADING);
        assert_eq!(lines[5], format!("{:<10}{:<20}{:<15}", "e", "Goblin", "Easy"));
        assert_eq!(lines[6], separator);
        assert_eq!(lines[7], OBSTACLE_HEADING);
        assert_eq!(lines[8], format!("{:<10}{:<20}{:<50}", "#", "Wall", "blocks movement"));
        assert_eq!(lines[9], separator);
        assert_eq!(lines[10], PLACE_HEADING);
        assert_eq!(lines[11], format!("{:<10}{:<20}", ">", "Exit"));
        assert_eq!(lines.len(), 12);

        assert_eq!(lines[5].len(), 45);
        assert!(lines[5].starts_with("e         Goblin              Easy"));
    }

    #[test]
    fn test_legend_keeps_input_order() {
        let enemies = vec![
            ('z', EnemyEntry::new("Zombie", EnemyDifficulty::Medium)),
            ('a', EnemyEntry::new("Ant", EnemyDifficulty::Boss)),
        ];
        let legend = render_legend(
            enemies.iter().map(|(k, v)| (k, v)),
            std::iter::empty(),
            std::iter::empty(),
        );

        let zombie = legend.find("Zombie").unwrap();
        let ant = legend.find("Ant").unwrap();
        assert!(zombie < ant);
        assert!(legend.contains("Boss"));
    }

    #[test]
    fn test_empty_tables_still_emit_headings() {
        let legend = render_legend(std::iter::empty(), std::iter::empty(), std::iter::empty());
        assert_eq!(legend.matches(SEPARATOR_LINE).count(), 3);
        assert!(legend.contains(ENEMY_HEADING));
        assert!(legend.contains(OBSTACLE_HEADING));
        assert!(legend.ends_with("Places:\n"));
    }
}
