//! Fixed timestep simulation tick
//!
//! One tick advances the whole entity store in a fixed order:
//! stars, spawning, enemy descent, projectile climb, combat resolution,
//! end-of-run check. Collisions are evaluated on post-movement positions
//! only - discrete-time semantics, entities can tunnel between ticks.

use glam::Vec2;
use rand::Rng;

use super::collision;
use super::state::{Enemy, EnemyKind, GameState, Phase};
use crate::consts::PLAYFIELD_MAX;
use crate::tuning::Tuning;

/// Advance the session by one tick. No-op outside the Active phase.
pub fn tick(state: &mut GameState, tuning: &Tuning) {
    if state.phase != Phase::Active {
        return;
    }

    state.ticks += 1;

    // Background stars wrap from the bottom back to the top
    for star in &mut state.stars {
        if star.pos.y > PLAYFIELD_MAX {
            star.pos.y = 0.0;
        } else {
            star.pos.y += star.fall_speed;
        }
    }

    // Probabilistic spawn, one enemy per tick at most
    if state.rng.random::<f32>() < tuning.spawn_chance {
        let x = state.rng.random_range(tuning.min_x..tuning.max_x);
        let kind = EnemyKind::ALL[state.rng.random_range(0..EnemyKind::ALL.len())];
        let id = state.next_entity_id();
        state.enemies.push(Enemy {
            id,
            pos: Vec2::new(x, 0.0),
            kind,
        });
        log::debug!("tick {}: spawned {:?} #{id} at x={x:.1}", state.ticks, kind);
    }

    // Enemies descend; past the bottom they escape without penalty
    for enemy in &mut state.enemies {
        enemy.pos.y += tuning.enemy_step;
    }
    state.enemies.retain(|e| e.pos.y < PLAYFIELD_MAX);

    // Projectiles climb; off the top they vanish
    for projectile in &mut state.projectiles {
        projectile.pos.y -= tuning.projectile_step;
    }
    state.projectiles.retain(|p| p.pos.y > 0.0);

    collision::resolve(state, tuning);

    if state.lives == 0 {
        state.phase = Phase::Ended;
        log::info!(
            "session over after {} ticks, final score {}",
            state.ticks,
            state.score
        );
    }
}
