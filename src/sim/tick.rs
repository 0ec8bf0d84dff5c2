//! Fixed timestep simulation update and input handling
//!
//! `tick` advances one 60 Hz step; `handle_key` / `handle_pointer` apply the
//! discrete input events the platform polled this frame. All collision and
//! timeout checks run in `tick`, decoupled from input (see DESIGN.md).

use glam::Vec2;

use super::spawn::{relocate_item, start_wave};
use super::state::{
    GameEvent, GamePhase, GameSession, PLAY_BUTTON, Projectile, RESTART_BUTTON,
};
use crate::consts::*;

/// Keys the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Pause toggle
    Pause,
    /// Back out of the pause screen
    Cancel,
}

/// Pointer buttons; only the left button drives the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Discrete input events, produced by the platform input collaborator
/// once per poll
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close requested; handled by the frame driver, not the sim
    Quit,
    /// Pointer button pressed at window coordinates
    PointerDown {
        x: f32,
        y: f32,
        button: PointerButton,
    },
    KeyDown(Key),
}

/// Apply a pointer click. Drives the Menu -> Playing and
/// GameOver/Victory -> Menu transitions.
pub fn handle_pointer(session: &mut GameSession, x: f32, y: f32, events: &mut Vec<GameEvent>) {
    let point = Vec2::new(x, y);
    match session.phase {
        GamePhase::Menu => {
            if PLAY_BUTTON.contains(point) {
                session.reset_run();
                session.phase = GamePhase::Playing;
                session.game_start_tick = session.time_ticks;
                start_wave(session);
                events.push(GameEvent::RunStarted);
                log::info!("Run started (seed {})", session.seed);
            }
        }
        GamePhase::GameOver | GamePhase::Victory => {
            if RESTART_BUTTON.contains(point) {
                session.reset_run();
                session.phase = GamePhase::Menu;
            }
        }
        _ => {}
    }
}

/// Apply a key press. Movement is a fixed step per event, independent of dt.
pub fn handle_key(session: &mut GameSession, key: Key, _events: &mut Vec<GameEvent>) {
    match session.phase {
        GamePhase::Playing => match key {
            Key::Up => session.player.rect.pos.y -= PLAYER_STEP,
            Key::Down => session.player.rect.pos.y += PLAYER_STEP,
            Key::Left => session.player.rect.pos.x -= PLAYER_STEP,
            Key::Right => session.player.rect.pos.x += PLAYER_STEP,
            Key::Pause => session.phase = GamePhase::Paused,
            Key::Cancel => {}
        },
        GamePhase::Paused => match key {
            Key::Pause => session.phase = GamePhase::Playing,
            Key::Cancel => session.phase = GamePhase::Menu,
            _ => {}
        },
        _ => {}
    }
}

/// Advance the simulation by one fixed timestep.
///
/// The tick clock runs in every phase (pausing does not stop the run timer,
/// matching the original wall-clock behavior); gameplay only advances while
/// Playing.
pub fn tick(session: &mut GameSession, dt: f32, events: &mut Vec<GameEvent>) {
    session.time_ticks += 1;

    if session.phase != GamePhase::Playing {
        return;
    }

    let now = session.time_ticks;

    // Invulnerability expiry: exactly at start + window, never earlier
    if let Some(since) = session.player.invulnerable_since {
        if now - since >= INVULNERABLE_TICKS {
            session.player.invulnerable_since = None;
        }
    }

    // Wave director: advance on a fixed delay, regardless of survivors
    if session.wave_in_progress && now - session.wave_start_tick >= WAVE_DELAY_TICKS {
        session.wave += 1;
        session.add_score(WAVE_SCORE, events);
        start_wave(session);
    }

    update_enemies(session, dt, events);
    update_projectiles(session, dt, events);

    // Player-enemy contact damages the player; the enemy survives
    if !session.player.is_invulnerable(now) {
        let player_rect = session.player.rect;
        if session.enemies.iter().any(|e| e.rect.intersects(&player_rect)) {
            session.damage_player(events);
        }
    }

    // Item pickup: relocate, score, possible level-up
    if session.player.rect.intersects(&session.item.rect) {
        session.add_score(ITEM_SCORE, events);
        relocate_item(session);
        events.push(GameEvent::ItemCollected);
    }

    // Run-ending conditions, checked every frame
    if session.lives == 0 {
        end_run(session, events);
    } else if session.time_left_secs() == 0 {
        log::info!("Time limit reached (level {})", session.level);
        end_run(session, events);
    }
}

fn end_run(session: &mut GameSession, events: &mut Vec<GameEvent>) {
    session.phase = GamePhase::GameOver;
    events.push(GameEvent::RunEnded);
    log::info!(
        "Run over: score {}, wave {}, level {}",
        session.score,
        session.wave,
        session.level
    );
}

/// Seeker steering, ranged firing, and out-of-bounds culling
fn update_enemies(session: &mut GameSession, dt: f32, events: &mut Vec<GameEvent>) {
    let now = session.time_ticks;
    let player_center = session.player.rect.center();
    let seeker_speed = SEEKER_BASE_SPEED + session.level as f32 * SEEKER_SPEED_PER_LEVEL;

    let mut fired: Option<Projectile> = None;
    for enemy in &mut session.enemies {
        if enemy.kind.is_seeker() {
            // Pure pursuit: direction recomputed every frame. A zero-length
            // offset skips normalization and leaves the enemy still.
            let dir = (player_center - enemy.rect.center()).normalize_or_zero();
            enemy.vel = dir * seeker_speed;
        } else if fired.is_none() && now - session.last_shot_tick > FIRE_INTERVAL_TICKS {
            // One timer shared by all ranged enemies: whichever is reached
            // first this frame claims the interval
            fired = Some(Projectile::aimed(enemy.rect.center(), player_center));
            session.last_shot_tick = now;
        }
        enemy.rect.pos += enemy.vel * dt;
    }
    if let Some(projectile) = fired {
        session.projectiles.push(projectile);
    }

    // Enemies that fully left the arena are removed and credited
    let before = session.enemies.len();
    session
        .enemies
        .retain(|e| !e.rect.outside_arena(ARENA_WIDTH, ARENA_HEIGHT));
    let escaped = (before - session.enemies.len()) as u32;
    if escaped > 0 {
        session.add_score(escaped * CULL_SCORE, events);
    }
}

/// Projectile integration, player hits, and out-of-bounds culling
fn update_projectiles(session: &mut GameSession, dt: f32, events: &mut Vec<GameEvent>) {
    let now = session.time_ticks;
    let mut i = 0;
    while i < session.projectiles.len() {
        let projectile = &mut session.projectiles[i];
        projectile.rect.pos += projectile.vel * dt;

        if projectile.rect.intersects(&session.player.rect) {
            // Absorbed either way; invulnerability only skips the damage
            session.projectiles.remove(i);
            if !session.player.is_invulnerable(now) {
                session.damage_player(events);
            }
            continue;
        }
        if projectile
            .rect
            .outside_arena(ARENA_WIDTH, ARENA_HEIGHT)
        {
            session.projectiles.remove(i);
            continue;
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Enemy, EnemyKind};

    fn start_run(session: &mut GameSession) -> Vec<GameEvent> {
        let mut events = Vec::new();
        handle_pointer(session, 400.0, 280.0, &mut events);
        events
    }

    #[test]
    fn test_menu_click_starts_run() {
        let mut session = GameSession::new(12345, 0);
        assert_eq!(session.phase, GamePhase::Menu);

        // Click outside the Play button does nothing
        let mut events = Vec::new();
        handle_pointer(&mut session, 10.0, 10.0, &mut events);
        assert_eq!(session.phase, GamePhase::Menu);

        let events = start_run(&mut session);
        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.enemies.len(), 3);
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, 3);
        assert!(events.contains(&GameEvent::RunStarted));
    }

    #[test]
    fn test_pause_toggle_and_cancel() {
        let mut session = GameSession::new(1, 0);
        start_run(&mut session);
        let mut events = Vec::new();

        handle_key(&mut session, Key::Pause, &mut events);
        assert_eq!(session.phase, GamePhase::Paused);

        // Gameplay frozen while paused
        let enemy_pos = session.enemies[0].rect.pos;
        tick(&mut session, SIM_DT, &mut events);
        assert_eq!(session.enemies[0].rect.pos, enemy_pos);

        handle_key(&mut session, Key::Pause, &mut events);
        assert_eq!(session.phase, GamePhase::Playing);

        handle_key(&mut session, Key::Pause, &mut events);
        handle_key(&mut session, Key::Cancel, &mut events);
        assert_eq!(session.phase, GamePhase::Menu);
    }

    #[test]
    fn test_move_key_steps_fixed_distance() {
        let mut session = GameSession::new(1, 0);
        start_run(&mut session);
        let mut events = Vec::new();

        let y_before = session.player.rect.pos.y;
        handle_key(&mut session, Key::Up, &mut events);
        assert_eq!(session.player.rect.pos.y, y_before - 50.0);

        let x_before = session.player.rect.pos.x;
        handle_key(&mut session, Key::Right, &mut events);
        handle_key(&mut session, Key::Right, &mut events);
        assert_eq!(session.player.rect.pos.x, x_before + 100.0);
    }

    #[test]
    fn test_escaped_enemy_culled_and_scored() {
        let mut session = GameSession::new(1, 0);
        start_run(&mut session);
        session.enemies.clear();
        session.wave_in_progress = false;

        let gone = Enemy::spawn(EnemyKind::Ranged, Vec2::new(-100.0, 300.0), 0.0);
        session.enemies.push(gone);

        let mut events = Vec::new();
        let score_before = session.score;
        tick(&mut session, SIM_DT, &mut events);
        assert!(session.enemies.is_empty());
        assert_eq!(session.score, score_before + 5);
    }

    #[test]
    fn test_projectile_hit_damages_and_is_removed() {
        let mut session = GameSession::new(1, 0);
        start_run(&mut session);
        session.enemies.clear();
        session.wave_in_progress = false;

        let center = session.player.rect.center();
        session
            .projectiles
            .push(Projectile::aimed(center, center + Vec2::X));

        let mut events = Vec::new();
        tick(&mut session, SIM_DT, &mut events);
        assert_eq!(session.lives, 2);
        assert!(session.player.invulnerable_since.is_some());
        assert!(session.projectiles.is_empty());
        assert!(events.contains(&GameEvent::PlayerHit));
    }

    #[test]
    fn test_projectile_absorbed_while_invulnerable() {
        let mut session = GameSession::new(1, 0);
        start_run(&mut session);
        session.enemies.clear();
        session.wave_in_progress = false;
        session.player.invulnerable_since = Some(session.time_ticks);

        let center = session.player.rect.center();
        session
            .projectiles
            .push(Projectile::aimed(center, center + Vec2::X));

        let mut events = Vec::new();
        tick(&mut session, SIM_DT, &mut events);
        // No pass-through: removed without costing a life
        assert!(session.projectiles.is_empty());
        assert_eq!(session.lives, 3);
    }

    #[test]
    fn test_invulnerability_expires_exactly_on_time() {
        let mut session = GameSession::new(1, 0);
        start_run(&mut session);
        session.enemies.clear();
        session.wave_in_progress = false;
        session.player.invulnerable_since = Some(session.time_ticks);

        let mut events = Vec::new();
        for _ in 0..(INVULNERABLE_TICKS - 1) {
            tick(&mut session, SIM_DT, &mut events);
            assert!(session.player.is_invulnerable(session.time_ticks));
        }
        tick(&mut session, SIM_DT, &mut events);
        assert!(session.player.invulnerable_since.is_none());
    }

    #[test]
    fn test_enemy_contact_on_last_life_ends_run() {
        let mut session = GameSession::new(1, 0);
        start_run(&mut session);
        session.enemies.clear();
        session.wave_in_progress = false;
        session.lives = 1;

        let on_player = Enemy::spawn(EnemyKind::SeekerSlow, session.player.rect.pos, 0.0);
        session.enemies.push(on_player);

        let mut events = Vec::new();
        tick(&mut session, SIM_DT, &mut events);
        assert_eq!(session.lives, 0);
        assert_eq!(session.phase, GamePhase::GameOver);
        assert!(events.contains(&GameEvent::PlayerHit));
        assert!(events.contains(&GameEvent::RunEnded));
        // The enemy is damaged into the player, not destroyed
        assert_eq!(session.enemies.len(), 1);
    }

    #[test]
    fn test_wave_advances_on_timer_and_respawns_field() {
        let mut session = GameSession::new(7, 0);
        start_run(&mut session);
        assert_eq!(session.wave, 1);
        assert_eq!(session.enemies.len(), 3);
        // Park the player out of harm's way
        session.player.rect.pos = Vec2::new(-2000.0, -2000.0);

        let mut events = Vec::new();
        for _ in 0..WAVE_DELAY_TICKS {
            tick(&mut session, SIM_DT, &mut events);
        }
        assert_eq!(session.wave, 2);
        assert_eq!(session.enemies.len(), 6);
        // +20 for the wave, plus +5 for any enemy that chased off-screen
        assert!(session.score >= 20);
    }

    #[test]
    fn test_shared_fire_timer_allows_one_shot_per_interval() {
        let mut session = GameSession::new(1, 0);
        start_run(&mut session);
        session.enemies.clear();
        session.wave_in_progress = false;

        // Two ranged enemies, both off to one side of the player
        session.enemies.push(Enemy::spawn(
            EnemyKind::Ranged,
            Vec2::new(50.0, 50.0),
            0.0,
        ));
        session.enemies.push(Enemy::spawn(
            EnemyKind::Ranged,
            Vec2::new(700.0, 50.0),
            0.0,
        ));
        session.time_ticks += FIRE_INTERVAL_TICKS + 1;

        let mut events = Vec::new();
        tick(&mut session, SIM_DT, &mut events);
        assert_eq!(session.projectiles.len(), 1);

        // Next frame: the shared timer was just reset, nobody fires
        tick(&mut session, SIM_DT, &mut events);
        assert_eq!(session.projectiles.len(), 1);
    }

    #[test]
    fn test_time_limit_expiry_ends_run() {
        let mut session = GameSession::new(1, 0);
        start_run(&mut session);
        session.enemies.clear();
        session.wave_in_progress = false;
        session.player.rect.pos = Vec2::new(-2000.0, -2000.0);

        // One tick short of the 30 second level-1 budget
        session.time_ticks = session.game_start_tick + 30 * TICK_RATE - 1;
        let mut events = Vec::new();
        tick(&mut session, SIM_DT, &mut events);
        assert_eq!(session.phase, GamePhase::GameOver);
        assert!(events.contains(&GameEvent::RunEnded));
    }

    #[test]
    fn test_item_pickup_scores_and_relocates() {
        let mut session = GameSession::new(99, 0);
        start_run(&mut session);
        session.enemies.clear();
        session.wave_in_progress = false;
        session.score = 29;

        // Park the player in a corner so the relocated item can't land on it
        session.player.rect.pos = Vec2::new(-2000.0, -2000.0);
        session.item.rect.pos = session.player.rect.pos;
        let mut events = Vec::new();
        tick(&mut session, SIM_DT, &mut events);

        assert_eq!(session.score, 39);
        assert_eq!(session.level, 2);
        assert!(events.contains(&GameEvent::ItemCollected));
        // Relocated off the player
        assert!(!session.item.rect.intersects(&session.player.rect));
    }

    #[test]
    fn test_restart_returns_to_menu() {
        let mut session = GameSession::new(1, 0);
        start_run(&mut session);
        session.lives = 0;
        let mut events = Vec::new();
        tick(&mut session, SIM_DT, &mut events);
        assert_eq!(session.phase, GamePhase::GameOver);

        // Click outside the Restart button first
        handle_pointer(&mut session, 10.0, 10.0, &mut events);
        assert_eq!(session.phase, GamePhase::GameOver);

        handle_pointer(&mut session, 400.0, 360.0, &mut events);
        assert_eq!(session.phase, GamePhase::Menu);
        assert_eq!(session.lives, 3);
        assert!(session.enemies.is_empty());
        assert!(session.projectiles.is_empty());
    }

    #[test]
    fn test_determinism() {
        // Same seed and same inputs must produce identical sessions
        let mut a = GameSession::new(424242, 0);
        let mut b = GameSession::new(424242, 0);
        let mut events = Vec::new();

        for session in [&mut a, &mut b] {
            handle_pointer(session, 400.0, 280.0, &mut events);
            for step in 0..600 {
                if step % 30 == 0 {
                    handle_key(session, Key::Right, &mut events);
                }
                tick(session, SIM_DT, &mut events);
            }
        }

        assert_eq!(a.score, b.score);
        assert_eq!(a.wave, b.wave);
        assert_eq!(a.enemies.len(), b.enemies.len());
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.rect.pos, eb.rect.pos);
            assert_eq!(ea.kind, eb.kind);
        }
    }
}
