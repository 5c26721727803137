//! Map places and what stepping on them grants

use serde::{Deserialize, Serialize};

/// Kind of reward a place gives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceGainKind {
    Health,
    Armor,
    Damage,
    Experience,
    Gold,
}

/// Reward granted by a place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceGain {
    pub kind: PlaceGainKind,
    pub value: i32,
}

impl PlaceGain {
    pub fn new(kind: PlaceGainKind, value: i32) -> Self {
        Self { kind, value }
    }
}
