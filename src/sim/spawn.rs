//! Wave spawner
//!
//! Enemies are placed uniformly at random inside the arena with no collision
//! avoidance; a wave is always exactly `wave * 3` enemies.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Enemy, EnemyKind, GameSession};
use crate::consts::*;

/// Generate the enemy set for a wave. Position is uniform within the arena
/// minus the enemy size, kind is uniform over the three kinds, and seekers
/// get a random initial heading (overridden by steering on the next frame).
pub fn spawn_wave(wave: u32, rng: &mut Pcg32) -> Vec<Enemy> {
    let count = wave * ENEMIES_PER_WAVE;
    let mut enemies = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let pos = Vec2::new(
            rng.random_range(0.0..ARENA_WIDTH - ENEMY_SIZE),
            rng.random_range(0.0..ARENA_HEIGHT - ENEMY_SIZE),
        );
        let kind = EnemyKind::from_index(rng.random_range(0..3));
        let heading = rng.random_range(0.0..std::f32::consts::TAU);
        enemies.push(Enemy::spawn(kind, pos, heading));
    }

    enemies
}

/// Begin the session's current wave: clear the field and spawn fresh.
/// Structurally idempotent; calling it twice just respawns the wave.
pub fn start_wave(session: &mut GameSession) {
    session.enemies = spawn_wave(session.wave, &mut session.rng);
    session.wave_in_progress = true;
    session.wave_start_tick = session.time_ticks;
    log::debug!(
        "Wave {} started: {} enemies",
        session.wave,
        session.enemies.len()
    );
}

/// Move the item to a fresh uniform position inside the arena
pub fn relocate_item(session: &mut GameSession) {
    session.item.rect.pos = Vec2::new(
        session.rng.random_range(0.0..ARENA_WIDTH - ITEM_SIZE),
        session.rng.random_range(0.0..ARENA_HEIGHT - ITEM_SIZE),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_wave_spawns_three_per_wave_number() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(spawn_wave(1, &mut rng).len(), 3);
        assert_eq!(spawn_wave(4, &mut rng).len(), 12);
    }

    #[test]
    fn test_spawned_enemies_inside_arena() {
        let mut rng = Pcg32::seed_from_u64(42);
        for enemy in spawn_wave(10, &mut rng) {
            assert!(enemy.rect.pos.x >= 0.0);
            assert!(enemy.rect.pos.y >= 0.0);
            assert!(enemy.rect.max().x <= ARENA_WIDTH);
            assert!(enemy.rect.max().y <= ARENA_HEIGHT);
            if enemy.kind == EnemyKind::Ranged {
                assert_eq!(enemy.vel, Vec2::ZERO);
            }
        }
    }

    #[test]
    fn test_start_wave_clears_previous_enemies() {
        let mut session = GameSession::new(3, 0);
        session.wave = 2;
        // Pre-populate with stale enemies; start_wave must replace them all
        session.enemies = spawn_wave(5, &mut Pcg32::seed_from_u64(1));
        assert_eq!(session.enemies.len(), 15);

        start_wave(&mut session);
        assert_eq!(session.enemies.len(), 6);
        assert!(session.wave_in_progress);
        assert_eq!(session.wave_start_tick, session.time_ticks);

        // Idempotent in structure: same count again
        start_wave(&mut session);
        assert_eq!(session.enemies.len(), 6);
    }

    #[test]
    fn test_relocate_item_stays_in_bounds() {
        let mut session = GameSession::new(9, 0);
        for _ in 0..50 {
            relocate_item(&mut session);
            assert!(session.item.rect.pos.x >= 0.0);
            assert!(session.item.rect.max().x <= ARENA_WIDTH);
            assert!(session.item.rect.pos.y >= 0.0);
            assert!(session.item.rect.max().y <= ARENA_HEIGHT);
        }
    }
}
