//! Player snapshot
//!
//! The read-only slice of player state the stats panel displays.

use serde::{Deserialize, Serialize};

/// Player statistics at the moment of a render call
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub health: f64,
    pub max_health: u32,
    pub defense: i32,
    pub damage: i32,
    pub level: u32,
    pub experience: u32,
    pub needed_experience: u32,
    pub gold: u32,
}

impl PlayerSnapshot {
    /// Fresh level 1 character
    pub fn starting() -> Self {
        Self {
            health: 100.0,
            max_health: 100,
            defense: 5,
            damage: 10,
            level: 1,
            experience: 0,
            needed_experience: 100,
            gold: 0,
        }
    }

    /// The six stats panel lines, top to bottom.
    ///
    /// Each line carries trailing blanks so a shorter value overwrites a
    /// longer one left by a previous render.
    pub fn stat_lines(&self) -> [String; 6] {
        [
            format!("Current health: {:.2}/{}     ", self.health, self.max_health),
            format!("Current armor: {}     ", self.defense),
            format!("Current damage: {}     ", self.damage),
            format!("Current Level: {}     ", self.level),
            format!("Current Exp: {}/{}    ", self.experience, self.needed_experience),
            format!("Player Gold: {}       ", self.gold),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_lines_format() {
        let lines = PlayerSnapshot::starting().stat_lines();
        assert_eq!(lines[0], "Current health: 100.00/100     ");
        assert_eq!(lines[1], "Current armor: 5     ");
        assert_eq!(lines[4], "Current Exp: 0/100    ");
        assert_eq!(lines[5], "Player Gold: 0       ");
    }

    #[test]
    fn test_health_rounds_to_two_places() {
        let player = PlayerSnapshot { health: 33.3333, ..PlayerSnapshot::starting() };
        assert!(player.stat_lines()[0].starts_with("Current health: 33.33/100"));
    }
}
