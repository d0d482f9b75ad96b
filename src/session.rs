//! Session state machine and clocks
//!
//! [`GameSession`] is the single entry point for the UI layer: it owns the
//! state, the RNG, and the only functions allowed to change `phase`. The
//! embedder drives it with two external cadences - `frame()` at redraw rate
//! and `clock_tick()` every 1000 ms - plus ad hoc commands. Both cadences
//! gate on phase internally, so a stale callback firing after a transition
//! mutates nothing.
//!
//! Out-of-phase commands are silent no-ops, not errors: the UI is expected
//! to prevent most of them, but correctness must not depend on that.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::difficulty::Difficulty;
use crate::sim::state::{CowAnimation, Phase, Projectile, SessionState, Viewport};
use crate::sim::tick;

/// An interactive game session
pub struct GameSession {
    state: SessionState,
    rng: Pcg32,
}

impl GameSession {
    /// Create a session in the Menu phase with a seeded RNG
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            state: SessionState::new(difficulty),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Read-only snapshot for rendering and HUD
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Update play-area bounds from the renderer
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.state.view = Viewport { width, height };
        self.state.cow_pos.y = self
            .state
            .cow_pos
            .y
            .clamp(COW_MARGIN_Y, (height - COW_MARGIN_Y).max(COW_MARGIN_Y));
    }

    /// Switch difficulty preset. Silently rejected mid-run (Playing or
    /// Paused); a paused run is still a run.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        match self.state.phase {
            Phase::Menu | Phase::GameOver => {
                self.state.difficulty = difficulty;
                self.state.profile = difficulty.profile();
                self.state.time_left = self.state.profile.time_limit;
                log::info!("difficulty set to {}", difficulty.as_str());
            }
            Phase::Playing | Phase::Paused => {}
        }
    }

    /// Menu -> Playing: reset score/combo, arm the clock, clear all pools
    pub fn start_game(&mut self) {
        if self.state.phase != Phase::Menu {
            return;
        }
        let state = &mut self.state;
        state.score = 0;
        state.combo = 0;
        state.time_left = state.profile.time_limit;
        state.clear_pools();
        state.clear_deadlines();
        state.cow_animation = CowAnimation::Floating;
        state.cow_pos = Vec2::new(COW_X, state.view.height / 2.0);
        state.tick = 0;
        state.last_spawn_tick = None;
        state.phase = Phase::Playing;
        log::info!(
            "run started: {} ({} s)",
            state.difficulty.as_str(),
            state.time_left
        );
    }

    /// Playing -> Paused: clock suspended, `time_left` retained
    pub fn pause_game(&mut self) {
        if self.state.phase != Phase::Playing {
            return;
        }
        self.state.phase = Phase::Paused;
        // Combo timer is stopped and cleared, not merely suspended
        self.state.combo_deadline = None;
        log::info!("paused at {} s left", self.state.time_left);
    }

    /// Paused -> Playing: clock continues from the retained value
    pub fn resume_game(&mut self) {
        if self.state.phase != Phase::Paused {
            return;
        }
        self.state.phase = Phase::Playing;
        log::info!("resumed with {} s left", self.state.time_left);
    }

    /// Playing -> GameOver, explicitly
    pub fn end_game(&mut self) {
        if self.state.phase != Phase::Playing {
            return;
        }
        self.finish_run();
    }

    /// GameOver -> Menu (idempotent from Menu)
    pub fn reset_game(&mut self) {
        match self.state.phase {
            Phase::Menu | Phase::GameOver => {}
            _ => return,
        }
        let state = &mut self.state;
        state.phase = Phase::Menu;
        state.score = 0;
        state.combo = 0;
        state.time_left = state.profile.time_limit;
        state.clear_pools();
        state.clear_deadlines();
        state.cow_animation = CowAnimation::Floating;
        state.cow_pos = Vec2::new(COW_X, state.view.height / 2.0);
        state.tick = 0;
        state.last_spawn_tick = None;
    }

    /// Fire a heart from the cow's muzzle toward `target`.
    ///
    /// No-op unless Playing. Shots aimed within [`MIN_AIM_DISTANCE`] of the
    /// muzzle are dropped, which also guards the zero-length aim vector.
    pub fn fire(&mut self, target: Vec2) {
        if self.state.phase != Phase::Playing {
            return;
        }
        let origin = self.state.cow_pos + Vec2::new(COW_MUZZLE_OFFSET_X, 0.0);
        let delta = target - origin;
        let distance = delta.length();
        if distance < MIN_AIM_DISTANCE {
            return;
        }

        let id = self.state.next_entity_id();
        self.state.projectiles.push(Projectile {
            id,
            pos: origin,
            vel: delta / distance * PROJECTILE_SPEED,
            life: PROJECTILE_LIFE,
            size: PROJECTILE_SIZE,
        });

        self.state.cow_animation = CowAnimation::Shooting;
        self.state.cow_anim_deadline = Some(self.state.tick + COW_SHOT_ANIM_TICKS);
    }

    /// Move the cow vertically (x is fixed at the left edge)
    pub fn move_cow(&mut self, y: f32) {
        if self.state.phase != Phase::Playing {
            return;
        }
        let max_y = (self.state.view.height - COW_MARGIN_Y).max(COW_MARGIN_Y);
        self.state.cow_pos = Vec2::new(COW_X, y.clamp(COW_MARGIN_Y, max_y));
    }

    /// One simulation tick, driven by the redraw callback.
    ///
    /// Runs spawn, integrate-and-prune, then collide-and-score. No-op
    /// outside Playing, so a frame request surviving a transition is inert.
    pub fn frame(&mut self) {
        tick::frame(&mut self.state, &mut self.rng);
    }

    /// One second of the session clock, driven by a 1000 ms cadence.
    ///
    /// No-op outside Playing; repeated calls while paused change nothing,
    /// so a duplicate or stale interval cannot double-count time.
    pub fn clock_tick(&mut self) {
        if self.state.phase != Phase::Playing {
            return;
        }
        self.state.time_left = self.state.time_left.saturating_sub(1);
        if self.state.time_left == 0 {
            self.finish_run();
        }
    }

    /// Shared Playing -> GameOver side effects
    fn finish_run(&mut self) {
        let state = &mut self.state;
        state.phase = Phase::GameOver;
        state.clear_deadlines();
        state.clear_pools();
        state.cow_animation = CowAnimation::Celebrating;
        log::info!(
            "run over: score {} ({:.0}% love), best combo streak ended at {}",
            state.score,
            state.love_percentage(),
            state.combo
        );
    }
}
