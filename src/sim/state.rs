//! Session state and core entity types
//!
//! Everything the renderer reads and the tests assert on lives here. The
//! state is plain data: all mutation flows through the session commands and
//! the tick pipeline, never from the outside.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::difficulty::{Difficulty, DifficultyProfile};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Phase {
    /// Title/menu, nothing simulating
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Run suspended, clock retained
    Paused,
    /// Run ended
    GameOver,
}

/// Presentation cue for the cow mascot
///
/// Not gameplay state, but its transitions are driven by gameplay events:
/// a shot holds Shooting for 400 ms, session end holds Celebrating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CowAnimation {
    #[default]
    Floating,
    Shooting,
    Celebrating,
}

/// Snack kinds that can spawn as targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    Pizza,
    Taco,
    Burrito,
    Gyro,
    Sandwich,
}

impl TargetKind {
    /// Base point value before combo/difficulty multipliers
    pub fn base_points(&self) -> u32 {
        match self {
            TargetKind::Burrito => 150,
            TargetKind::Taco => 120,
            _ => 100,
        }
    }

    /// Glyph the renderer draws for this kind
    pub fn emoji(&self) -> &'static str {
        match self {
            TargetKind::Pizza => "🍕",
            TargetKind::Taco => "🌮",
            TargetKind::Burrito => "🌯",
            TargetKind::Gyro => "🥙",
            TargetKind::Sandwich => "🥪",
        }
    }
}

/// A heart projectile fired by the cow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks remaining before expiry
    pub life: u32,
    pub size: f32,
}

/// A snack target drifting leftward across the screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    pub pos: Vec2,
    /// Horizontal velocity (always negative: toward the trailing edge)
    pub vx: f32,
    pub kind: TargetKind,
    pub size: f32,
    /// Ticks remaining before expiry
    pub life: u32,
    /// Base point value, fixed per kind at spawn
    pub points: u32,
}

/// A cosmetic burst particle
///
/// Must never influence scoring or collisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: u32,
    pub max_life: u32,
    /// Packed 0xRRGGBB
    pub color: u32,
    pub size: f32,
}

/// Play-area bounds reported by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEW_WIDTH,
            height: DEFAULT_VIEW_HEIGHT,
        }
    }
}

/// Complete session state (serializable snapshot)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: Phase,
    pub score: u64,
    /// Seconds remaining, decremented by the session clock
    pub time_left: u32,
    /// Consecutive-hit streak feeding the score multiplier
    pub combo: u32,
    pub difficulty: Difficulty,
    /// Resolved settings for the active difficulty
    pub profile: DifficultyProfile,
    pub cow_animation: CowAnimation,
    pub cow_pos: Vec2,
    pub view: Viewport,
    pub projectiles: Vec<Projectile>,
    pub targets: Vec<Target>,
    pub particles: Vec<Particle>,
    /// Simulation tick counter, advances only while Playing
    pub tick: u64,
    /// Tick of the most recent target spawn (None = spawn on first chance)
    pub(crate) last_spawn_tick: Option<u64>,
    /// Pending combo decay deadline; rearmed on every hit
    pub(crate) combo_deadline: Option<u64>,
    /// Pending return from Shooting to Floating
    pub(crate) cow_anim_deadline: Option<u64>,
    /// Next entity ID
    next_id: u32,
}

impl SessionState {
    pub fn new(difficulty: Difficulty) -> Self {
        let profile = difficulty.profile();
        let view = Viewport::default();
        Self {
            phase: Phase::Menu,
            score: 0,
            time_left: profile.time_limit,
            combo: 0,
            difficulty,
            profile,
            cow_animation: CowAnimation::Floating,
            cow_pos: Vec2::new(COW_X, view.height / 2.0),
            view,
            projectiles: Vec::new(),
            targets: Vec::new(),
            particles: Vec::new(),
            tick: 0,
            last_spawn_tick: None,
            combo_deadline: None,
            cow_anim_deadline: None,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID (never reused within a session)
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Drop every live entity from all three pools
    pub fn clear_pools(&mut self) {
        self.projectiles.clear();
        self.targets.clear();
        self.particles.clear();
    }

    /// Cancel all pending one-shot deadlines
    pub(crate) fn clear_deadlines(&mut self) {
        self.combo_deadline = None;
        self.cow_anim_deadline = None;
    }

    /// Love meter fill for the current score, 0-100
    pub fn love_percentage(&self) -> f32 {
        crate::love_percentage(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_ids_are_unique_and_monotonic() {
        let mut state = SessionState::new(Difficulty::Medium);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        let c = state.next_entity_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_new_state_is_clean_menu() {
        let state = SessionState::new(Difficulty::Hard);
        assert_eq!(state.phase, Phase::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.combo, 0);
        assert_eq!(state.time_left, 45);
        assert!(state.projectiles.is_empty());
        assert!(state.targets.is_empty());
        assert!(state.particles.is_empty());
        assert_eq!(state.cow_animation, CowAnimation::Floating);
    }

    #[test]
    fn test_base_points_per_kind() {
        assert_eq!(TargetKind::Burrito.base_points(), 150);
        assert_eq!(TargetKind::Taco.base_points(), 120);
        assert_eq!(TargetKind::Pizza.base_points(), 100);
        assert_eq!(TargetKind::Gyro.base_points(), 100);
        assert_eq!(TargetKind::Sandwich.base_points(), 100);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = SessionState::new(Difficulty::Easy);
        let json = serde_json::to_string(&state).unwrap();
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, Phase::Menu);
        assert_eq!(back.time_left, 90);
    }
}
