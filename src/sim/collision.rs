//! Collision detection and scoring resolution
//!
//! All combat is deterministic given positions. Matches are computed against
//! an immutable snapshot of the entity store and applied as a single batch,
//! so iteration order can never double-resolve an entity: each enemy and each
//! projectile takes part in at most one match per tick, and danger-line checks
//! only see enemies that survived the projectile pass.

use glam::Vec2;

use super::state::{Enemy, GameState, Projectile};
use crate::tuning::Tuning;
use crate::within_radius;

/// A projectile-enemy hit scheduled for this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Impact {
    pub enemy_id: u32,
    pub projectile_id: u32,
}

/// Pair up projectiles and enemies within the hit radius.
///
/// Enemies are considered in spawn order, projectiles in fire order; the
/// first unclaimed projectile in range wins. Once claimed, neither entity can
/// match again this tick.
pub fn match_projectiles(
    enemies: &[Enemy],
    projectiles: &[Projectile],
    hit_radius: f32,
) -> Vec<Impact> {
    let mut impacts = Vec::new();
    let mut claimed = vec![false; projectiles.len()];

    for enemy in enemies {
        for (idx, projectile) in projectiles.iter().enumerate() {
            if claimed[idx] {
                continue;
            }
            if within_radius(enemy.pos, projectile.pos, hit_radius) {
                claimed[idx] = true;
                impacts.push(Impact {
                    enemy_id: enemy.id,
                    projectile_id: projectile.id,
                });
                break;
            }
        }
    }

    impacts
}

/// Enemies past the danger line close enough to damage the player.
///
/// Callers must pass only enemies that survived the projectile pass.
pub fn danger_line_hits(
    enemies: &[Enemy],
    player_pos: Vec2,
    danger_line: f32,
    player_hit_radius: f32,
) -> Vec<u32> {
    enemies
        .iter()
        .filter(|e| e.pos.y > danger_line && within_radius(e.pos, player_pos, player_hit_radius))
        .map(|e| e.id)
        .collect()
}

/// Resolve one tick of combat: projectile matches first, then danger-line
/// hits against the survivors. Applies removals, score and life changes in
/// one batch.
pub fn resolve(state: &mut GameState, tuning: &Tuning) {
    let impacts = match_projectiles(&state.enemies, &state.projectiles, tuning.hit_radius);

    if !impacts.is_empty() {
        state
            .enemies
            .retain(|e| !impacts.iter().any(|i| i.enemy_id == e.id));
        state
            .projectiles
            .retain(|p| !impacts.iter().any(|i| i.projectile_id == p.id));
        state.score += tuning.kill_reward * impacts.len() as u32;
        log::debug!(
            "tick {}: {} enemies shot down, score {}",
            state.ticks,
            impacts.len(),
            state.score
        );
    }

    let breaches = danger_line_hits(
        &state.enemies,
        state.player.pos,
        tuning.danger_line,
        tuning.player_hit_radius,
    );

    if !breaches.is_empty() {
        state.enemies.retain(|e| !breaches.contains(&e.id));
        for _ in &breaches {
            state.lives = state.lives.saturating_sub(1);
        }
        log::debug!(
            "tick {}: {} enemies reached the ship, {} lives left",
            state.ticks,
            breaches.len(),
            state.lives
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{EnemyKind, Phase};

    fn enemy(id: u32, x: f32, y: f32) -> Enemy {
        Enemy {
            id,
            pos: Vec2::new(x, y),
            kind: EnemyKind::Invader,
        }
    }

    fn projectile(id: u32, x: f32, y: f32) -> Projectile {
        Projectile {
            id,
            pos: Vec2::new(x, y),
        }
    }

    #[test]
    fn test_basic_match() {
        let enemies = [enemy(1, 50.0, 40.0)];
        let projectiles = [projectile(2, 50.0, 45.0)];
        let impacts = match_projectiles(&enemies, &projectiles, 10.0);
        assert_eq!(
            impacts,
            vec![Impact {
                enemy_id: 1,
                projectile_id: 2
            }]
        );
    }

    #[test]
    fn test_miss_outside_radius() {
        let enemies = [enemy(1, 50.0, 40.0)];
        let projectiles = [projectile(2, 50.0, 55.0)];
        assert!(match_projectiles(&enemies, &projectiles, 10.0).is_empty());
    }

    #[test]
    fn test_projectile_claimed_once() {
        // Two enemies in range of a single projectile - only the first matches
        let enemies = [enemy(1, 48.0, 40.0), enemy(2, 52.0, 40.0)];
        let projectiles = [projectile(3, 50.0, 40.0)];
        let impacts = match_projectiles(&enemies, &projectiles, 10.0);
        assert_eq!(impacts.len(), 1);
        assert_eq!(impacts[0].enemy_id, 1);
    }

    #[test]
    fn test_enemy_matched_once() {
        // Two projectiles in range of one enemy - one match, one projectile left
        let enemies = [enemy(1, 50.0, 40.0)];
        let projectiles = [projectile(2, 49.0, 40.0), projectile(3, 51.0, 40.0)];
        let impacts = match_projectiles(&enemies, &projectiles, 10.0);
        assert_eq!(impacts.len(), 1);
        assert_eq!(impacts[0].projectile_id, 2);
    }

    #[test]
    fn test_danger_line_requires_both_conditions() {
        let player = Vec2::new(50.0, 80.0);
        // Past the line and close
        let hits = danger_line_hits(&[enemy(1, 50.0, 90.0)], player, 85.0, 15.0);
        assert_eq!(hits, vec![1]);
        // Close but above the line
        let hits = danger_line_hits(&[enemy(1, 50.0, 84.0)], player, 85.0, 15.0);
        assert!(hits.is_empty());
        // Past the line but far away in x
        let hits = danger_line_hits(&[enemy(1, 10.0, 90.0)], player, 85.0, 15.0);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_resolve_awards_score_once_per_enemy() {
        let tuning = Tuning::default();
        let mut state = GameState::new(1, &tuning);
        state.phase = Phase::Active;
        state.enemies.push(enemy(10, 50.0, 40.0));
        state.projectiles.push(projectile(11, 49.0, 40.0));
        state.projectiles.push(projectile(12, 51.0, 40.0));

        resolve(&mut state, &tuning);
        assert_eq!(state.score, 10);
        assert!(state.enemies.is_empty());
        // The unmatched projectile survives
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].id, 12);
    }

    #[test]
    fn test_shot_enemy_skips_danger_line() {
        // Enemy is past the danger line AND in projectile range; the
        // projectile pass wins and no life is lost.
        let tuning = Tuning::default();
        let mut state = GameState::new(1, &tuning);
        state.phase = Phase::Active;
        state.enemies.push(enemy(10, 50.0, 86.0));
        state.projectiles.push(projectile(11, 50.0, 84.0));

        resolve(&mut state, &tuning);
        assert_eq!(state.score, 10);
        assert_eq!(state.lives, 3);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_resolve_decrements_life_on_breach() {
        let tuning = Tuning::default();
        let mut state = GameState::new(1, &tuning);
        state.phase = Phase::Active;
        state.enemies.push(enemy(10, 50.0, 90.0));

        resolve(&mut state, &tuning);
        assert_eq!(state.lives, 2);
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 0);
    }
}
