//! Enemy difficulty tiers
//!
//! Level data stores the tier as a numeric code; the legend shows its name.

use serde::{Deserialize, Serialize};

/// How dangerous an enemy kind is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyDifficulty {
    Easy,
    Medium,
    Hard,
    Boss,
}

impl EnemyDifficulty {
    pub fn name(&self) -> &'static str {
        match self {
            EnemyDifficulty::Easy => "Easy",
            EnemyDifficulty::Medium => "Medium",
            EnemyDifficulty::Hard => "Hard",
            EnemyDifficulty::Boss => "Boss",
        }
    }

    /// Numeric code used by level data
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for EnemyDifficulty {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(EnemyDifficulty::Easy),
            1 => Ok(EnemyDifficulty::Medium),
            2 => Ok(EnemyDifficulty::Hard),
            3 => Ok(EnemyDifficulty::Boss),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for EnemyDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
