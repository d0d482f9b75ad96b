//! Love Blitz - an arcade mini-game core
//!
//! A cow fires heart projectiles at flying snacks before the clock runs out.
//! This crate is the simulation only; rendering, audio and input plumbing are
//! external collaborators that read the published state after each update.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, tick pipeline, collisions)
//! - `session`: Session state machine, commands and clocks
//! - `difficulty`: Named difficulty presets

pub mod difficulty;
pub mod session;
pub mod sim;

pub use difficulty::{Difficulty, DifficultyProfile};
pub use session::GameSession;
pub use sim::state::{CowAnimation, Phase, SessionState};

/// Game configuration constants
pub mod consts {
    /// Nominal simulation rate (one tick per redraw frame)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Default viewport used until the renderer reports real bounds
    pub const DEFAULT_VIEW_WIDTH: f32 = 1280.0;
    pub const DEFAULT_VIEW_HEIGHT: f32 = 720.0;

    /// Cow defaults - the cow hovers on the left edge
    pub const COW_X: f32 = 50.0;
    /// Horizontal offset from cow position to the muzzle (shot origin)
    pub const COW_MUZZLE_OFFSET_X: f32 = 60.0;
    /// Vertical clamp margin for cow movement
    pub const COW_MARGIN_Y: f32 = 80.0;
    /// Shooting pose duration after a shot (400 ms)
    pub const COW_SHOT_ANIM_TICKS: u64 = 24;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 12.0;
    pub const PROJECTILE_LIFE: u32 = 120;
    pub const PROJECTILE_SIZE: f32 = 20.0;
    /// Shots aimed closer than this to the muzzle are dropped
    /// (also guards the zero-length aim vector)
    pub const MIN_AIM_DISTANCE: f32 = 50.0;

    /// Target defaults
    pub const TARGET_SIZE: f32 = 40.0;
    pub const TARGET_LIFE: u32 = 300;
    /// Targets materialize this far beyond the right edge
    pub const SPAWN_LEAD_X: f32 = 50.0;
    /// Safe vertical band margin for spawn positions
    pub const SPAWN_BAND_MARGIN: f32 = 100.0;

    /// Entities further than this outside the viewport are pruned
    pub const OFFSCREEN_MARGIN: f32 = 100.0;

    /// Particle burst on a hit
    pub const PARTICLES_PER_BURST: usize = 8;
    pub const PARTICLE_LIFE: u32 = 40;
    /// Velocity damping per tick (drag)
    pub const PARTICLE_DRAG: f32 = 0.98;
    /// Hot pink burst color (0xRRGGBB)
    pub const HIT_BURST_COLOR: u32 = 0xFF3399;

    /// Combo decays after this many ticks without a hit (2000 ms)
    pub const COMBO_TIMEOUT_TICKS: u64 = 120;

    /// Score at which the love meter reads 100%
    pub const LOVE_METER_FULL_SCORE: u64 = 1000;
}

/// Love meter fill derived from score, 0-100.
///
/// Computed on demand; never stored in session state.
#[inline]
pub fn love_percentage(score: u64) -> f32 {
    (score as f32 / consts::LOVE_METER_FULL_SCORE as f32 * 100.0).min(100.0)
}
