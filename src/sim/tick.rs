//! Per-tick simulation pipeline
//!
//! One authoritative dispatcher advances the whole sim each redraw frame:
//! spawn, then integrate-and-prune, then resolve-collisions-and-score. Pools
//! are rebuilt between stages, never mutated while a later stage iterates
//! them. Nothing here runs outside the Playing phase.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision;
use super::state::{Phase, SessionState, Target};
use crate::consts::*;

/// Advance the session by one simulation tick.
///
/// No-op unless the session is Playing.
pub fn frame(state: &mut SessionState, rng: &mut Pcg32) {
    if state.phase != Phase::Playing {
        return;
    }

    state.tick += 1;

    expire_deadlines(state);
    spawn_targets(state, rng);
    let missed = integrate_and_prune(state);
    if missed > 0 {
        // A target slipping off the trailing edge breaks the streak
        state.combo = 0;
        state.combo_deadline = None;
    }

    let hits = collision::resolve_hits(state, rng);
    if hits > 0 {
        state.combo += hits;
        // Rearming cancels any pending decay
        state.combo_deadline = Some(state.tick + COMBO_TIMEOUT_TICKS);
    }
}

/// Fire one-shot deadlines that have come due
fn expire_deadlines(state: &mut SessionState) {
    if let Some(deadline) = state.combo_deadline
        && state.tick >= deadline
    {
        state.combo = 0;
        state.combo_deadline = None;
    }

    if let Some(deadline) = state.cow_anim_deadline
        && state.tick >= deadline
    {
        if state.cow_animation == super::state::CowAnimation::Shooting {
            state.cow_animation = super::state::CowAnimation::Floating;
        }
        state.cow_anim_deadline = None;
    }
}

/// Materialize at most one target per tick, honoring the spawn interval.
///
/// Spawn decisions depend only on elapsed time and the active profile,
/// never on score or combo.
fn spawn_targets(state: &mut SessionState, rng: &mut Pcg32) {
    let due = match state.last_spawn_tick {
        None => true,
        Some(last) => state.tick - last >= state.profile.spawn_interval_ticks as u64,
    };
    if !due {
        return;
    }

    let kinds = &state.profile.target_kinds;
    let kind = kinds[rng.random_range(0..kinds.len())];

    // Uniform vertical position within the safe band
    let band_top = SPAWN_BAND_MARGIN;
    let band_bottom = state.view.height - SPAWN_BAND_MARGIN;
    let y = if band_bottom > band_top {
        rng.random_range(band_top..band_bottom)
    } else {
        state.view.height / 2.0
    };

    let id = state.next_entity_id();
    state.targets.push(Target {
        id,
        pos: Vec2::new(state.view.width + SPAWN_LEAD_X, y),
        vx: -state.profile.target_speed,
        kind,
        size: TARGET_SIZE,
        life: TARGET_LIFE,
        points: kind.base_points(),
    });
    state.last_spawn_tick = Some(state.tick);
    log::debug!("spawned {:?} at y={:.0} (tick {})", kind, y, state.tick);
}

/// Advance every live entity and prune the expired ones.
///
/// Returns the number of targets that escaped off the trailing edge unhit.
/// Removal rebuilds each pool in one pass, so entities not yet visited are
/// unaffected by earlier removals in the same tick.
fn integrate_and_prune(state: &mut SessionState) -> u32 {
    let view = state.view;

    for p in &mut state.projectiles {
        p.pos += p.vel;
        p.life = p.life.saturating_sub(1);
    }
    state.projectiles.retain(|p| {
        p.life > 0
            && p.pos.x > -OFFSCREEN_MARGIN
            && p.pos.x < view.width + OFFSCREEN_MARGIN
            && p.pos.y > -OFFSCREEN_MARGIN
            && p.pos.y < view.height + OFFSCREEN_MARGIN
    });

    for t in &mut state.targets {
        t.pos.x += t.vx;
        t.life = t.life.saturating_sub(1);
    }
    let mut missed = 0u32;
    state.targets.retain(|t| {
        if t.pos.x < -OFFSCREEN_MARGIN {
            // Trailing-edge exit only; targets never leave on other sides
            missed += 1;
            return false;
        }
        t.life > 0
    });

    for pt in &mut state.particles {
        pt.pos += pt.vel;
        pt.vel *= PARTICLE_DRAG;
        pt.life = pt.life.saturating_sub(1);
    }
    state.particles.retain(|pt| pt.life > 0);

    missed
}
