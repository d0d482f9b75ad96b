//! Collision and scoring resolution
//!
//! Runs once per tick after integration and pruning. Each projectile may
//! score at most one hit per tick (first target in pool order); a target hit
//! this tick is excluded from further pairing, so nothing is destroyed twice.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Particle, SessionState};
use crate::consts::*;

/// Distance-threshold hit test between two circular entities
#[inline]
pub fn hit_test(a_pos: Vec2, a_size: f32, b_pos: Vec2, b_size: f32) -> bool {
    a_pos.distance(b_pos) < (a_size + b_size) / 2.0
}

/// Pair live projectiles against live targets, apply scoring and emit
/// particle bursts. Returns the number of hits this tick.
///
/// Scoring compounds within a tick: each hit uses the running hit count on
/// top of the pre-tick combo, so later hits in the same tick score higher.
/// The caller folds the returned count into `combo` and rearms the decay.
pub fn resolve_hits(state: &mut SessionState, rng: &mut Pcg32) -> u32 {
    let mut hit_projectiles: Vec<u32> = Vec::new();
    let mut hit_targets: Vec<u32> = Vec::new();
    let mut bursts: Vec<Vec2> = Vec::new();
    let mut hits: u32 = 0;
    let mut gained: u64 = 0;

    for projectile in &state.projectiles {
        for target in &state.targets {
            if hit_targets.contains(&target.id) {
                continue;
            }
            if !hit_test(projectile.pos, projectile.size, target.pos, target.size) {
                continue;
            }

            hits += 1;
            hit_projectiles.push(projectile.id);
            hit_targets.push(target.id);
            bursts.push(target.pos);

            let multiplier = (state.combo + hits).max(1);
            let points = (target.points as f32
                * multiplier as f32
                * state.profile.point_multiplier)
                .floor() as u64;
            gained += points;
            log::debug!(
                "hit {:?} for {} points (x{} combo, x{} difficulty)",
                target.kind,
                points,
                multiplier,
                state.profile.point_multiplier
            );
            break; // one hit per projectile per tick
        }
    }

    if hits == 0 {
        return 0;
    }

    // Rebuild pools without the consumed entities
    state.projectiles.retain(|p| !hit_projectiles.contains(&p.id));
    state.targets.retain(|t| !hit_targets.contains(&t.id));
    state.score += gained;

    for pos in bursts {
        spawn_burst(state, rng, pos);
    }

    hits
}

/// Emit a fixed-count particle burst centered on a destroyed target
fn spawn_burst(state: &mut SessionState, rng: &mut Pcg32, pos: Vec2) {
    for _ in 0..PARTICLES_PER_BURST {
        let id = state.next_entity_id();
        let vel = Vec2::new(
            (rng.random_range(0.0..1.0f32) - 0.5) * 10.0,
            (rng.random_range(0.0..1.0f32) - 0.5) * 10.0,
        );
        state.particles.push(Particle {
            id,
            pos,
            vel,
            life: PARTICLE_LIFE,
            max_life: PARTICLE_LIFE,
            color: HIT_BURST_COLOR,
            size: rng.random_range(0.0..1.0f32) * 4.0 + 2.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;
    use crate::sim::state::{Projectile, Target, TargetKind};
    use rand::SeedableRng;

    fn test_state(difficulty: Difficulty) -> (SessionState, Pcg32) {
        (SessionState::new(difficulty), Pcg32::seed_from_u64(7))
    }

    fn projectile_at(state: &mut SessionState, x: f32, y: f32) -> u32 {
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            life: PROJECTILE_LIFE,
            size: PROJECTILE_SIZE,
        });
        id
    }

    fn target_at(state: &mut SessionState, x: f32, y: f32, kind: TargetKind) -> u32 {
        let id = state.next_entity_id();
        state.targets.push(Target {
            id,
            pos: Vec2::new(x, y),
            vx: -3.0,
            kind,
            size: TARGET_SIZE,
            life: TARGET_LIFE,
            points: kind.base_points(),
        });
        id
    }

    #[test]
    fn test_hit_test_threshold() {
        let a = Vec2::new(0.0, 0.0);
        // Threshold for sizes 20 and 40 is 30
        assert!(hit_test(a, 20.0, Vec2::new(29.9, 0.0), 40.0));
        assert!(!hit_test(a, 20.0, Vec2::new(30.0, 0.0), 40.0));
        assert!(!hit_test(a, 20.0, Vec2::new(0.0, 31.0), 40.0));
    }

    #[test]
    fn test_simultaneous_hits_compound_in_order() {
        // From the scoring contract: combo=2, two 100-point targets under a
        // 1.5x multiplier score floor(100*3*1.5)=450 then floor(100*4*1.5)=600.
        let (mut state, mut rng) = test_state(Difficulty::Medium);
        state.combo = 2;
        projectile_at(&mut state, 100.0, 100.0);
        projectile_at(&mut state, 300.0, 300.0);
        target_at(&mut state, 110.0, 100.0, TargetKind::Pizza);
        target_at(&mut state, 310.0, 300.0, TargetKind::Pizza);

        let hits = resolve_hits(&mut state, &mut rng);
        assert_eq!(hits, 2);
        assert_eq!(state.score, 450 + 600);
        assert!(state.projectiles.is_empty());
        assert!(state.targets.is_empty());
    }

    #[test]
    fn test_projectile_scores_at_most_once() {
        let (mut state, mut rng) = test_state(Difficulty::Easy);
        projectile_at(&mut state, 100.0, 100.0);
        // Both targets overlap the single projectile
        let first = target_at(&mut state, 105.0, 100.0, TargetKind::Pizza);
        target_at(&mut state, 95.0, 100.0, TargetKind::Taco);

        let hits = resolve_hits(&mut state, &mut rng);
        assert_eq!(hits, 1);
        // First target in pool order is the one consumed
        assert_eq!(state.targets.len(), 1);
        assert!(state.targets.iter().all(|t| t.id != first));
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_hit_target_excluded_from_later_projectiles() {
        let (mut state, mut rng) = test_state(Difficulty::Easy);
        // Two projectiles on the same lone target: one hit, one survivor
        projectile_at(&mut state, 100.0, 100.0);
        let survivor = projectile_at(&mut state, 102.0, 100.0);
        target_at(&mut state, 105.0, 100.0, TargetKind::Pizza);

        let hits = resolve_hits(&mut state, &mut rng);
        assert_eq!(hits, 1);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].id, survivor);
    }

    #[test]
    fn test_hit_emits_fixed_particle_burst() {
        let (mut state, mut rng) = test_state(Difficulty::Easy);
        projectile_at(&mut state, 100.0, 100.0);
        target_at(&mut state, 110.0, 100.0, TargetKind::Burrito);

        resolve_hits(&mut state, &mut rng);
        assert_eq!(state.particles.len(), PARTICLES_PER_BURST);
        for p in &state.particles {
            assert_eq!(p.pos, Vec2::new(110.0, 100.0));
            assert_eq!(p.life, PARTICLE_LIFE);
            assert!(p.vel.x.abs() <= 5.0 && p.vel.y.abs() <= 5.0);
            assert!(p.size >= 2.0 && p.size <= 6.0);
        }
    }

    #[test]
    fn test_no_overlap_is_a_quiet_pass() {
        let (mut state, mut rng) = test_state(Difficulty::Hard);
        projectile_at(&mut state, 0.0, 0.0);
        target_at(&mut state, 500.0, 500.0, TargetKind::Sandwich);

        assert_eq!(resolve_hits(&mut state, &mut rng), 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.targets.len(), 1);
        assert!(state.particles.is_empty());
    }
}
