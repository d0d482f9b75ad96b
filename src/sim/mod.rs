//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick increments only (no wall-clock reads)
//! - Seeded RNG only
//! - Pools rebuilt between pipeline stages, never mutated mid-iteration
//! - No rendering or platform dependencies
//!
//! Phase transitions are owned by [`crate::session`]; the pipeline here only
//! runs while the session is Playing.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{hit_test, resolve_hits};
pub use state::{
    CowAnimation, Particle, Phase, Projectile, SessionState, Target, TargetKind, Viewport,
};
pub use tick::frame;
