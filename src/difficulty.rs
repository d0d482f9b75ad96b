//! Difficulty presets
//!
//! Data only: each preset fixes the time limit, target speed, spawn cadence,
//! scoring multiplier and the table of snack kinds that may spawn.

use serde::{Deserialize, Serialize};

use crate::sim::state::TargetKind;

/// Named difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Resolve the preset into a concrete profile
    pub fn profile(&self) -> DifficultyProfile {
        use TargetKind::*;
        match self {
            Difficulty::Easy => DifficultyProfile {
                time_limit: 90,
                point_multiplier: 1.0,
                target_speed: 2.0,
                spawn_interval_ticks: 120, // 2000 ms
                target_kinds: vec![Pizza, Taco, Burrito],
            },
            Difficulty::Medium => DifficultyProfile {
                time_limit: 60,
                point_multiplier: 1.5,
                target_speed: 3.0,
                spawn_interval_ticks: 90, // 1500 ms
                target_kinds: vec![Pizza, Taco, Burrito, Gyro],
            },
            Difficulty::Hard => DifficultyProfile {
                time_limit: 45,
                point_multiplier: 2.0,
                target_speed: 4.0,
                spawn_interval_ticks: 60, // 1000 ms
                target_kinds: vec![Pizza, Taco, Burrito, Gyro, Sandwich],
            },
        }
    }
}

/// Resolved difficulty settings for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Session length in seconds
    pub time_limit: u32,
    /// Scoring multiplier applied to every hit
    pub point_multiplier: f32,
    /// Horizontal target speed in pixels per tick
    pub target_speed: f32,
    /// Minimum ticks between target spawns
    pub spawn_interval_ticks: u32,
    /// Snack kinds this preset may spawn
    pub target_kinds: Vec<TargetKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_roundtrip() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_str("med"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_harder_presets_are_faster_and_shorter() {
        let easy = Difficulty::Easy.profile();
        let medium = Difficulty::Medium.profile();
        let hard = Difficulty::Hard.profile();

        assert!(easy.time_limit > medium.time_limit);
        assert!(medium.time_limit > hard.time_limit);
        assert!(easy.target_speed < hard.target_speed);
        assert!(easy.spawn_interval_ticks > hard.spawn_interval_ticks);
        assert!(easy.point_multiplier < hard.point_multiplier);
        // Harder presets widen the spawn table
        assert!(easy.target_kinds.len() < hard.target_kinds.len());
    }
}
