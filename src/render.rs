//! Frame composition
//!
//! Turns a [`GameSession`] into draw calls on the [`Renderer`] seam. Purely
//! presentational state (spritesheet frame, fade-in, invulnerability blink)
//! is derived from the session's tick clock so frames stay reproducible.

use glam::Vec2;

use crate::consts::*;
use crate::platform::{Color, Renderer, TextureId};
use crate::sim::{EnemyKind, GamePhase, GameSession, PLAY_BUTTON, RESTART_BUTTON, Rect};

const BACKGROUND: Color = Color::rgb(30, 30, 30);
const HUD_TEXT: Color = Color::WHITE;
const BANNER: Color = Color::rgb(0, 255, 255);

const PLAY_COLOR: Color = Color::rgb(0, 120, 255);
const RESTART_COLOR: Color = Color::rgb(0, 200, 100);
const HOVER_LIGHTEN: u8 = 40;

/// Player animation: 4 frames of 64 px, 150 ms (9 ticks) each
const PLAYER_FRAMES: u64 = 4;
const PLAYER_FRAME_TICKS: u64 = 9;
/// Invulnerability blink: alpha 120 on alternating 100 ms (6 tick) windows
const BLINK_PERIOD_TICKS: u64 = 6;
const BLINK_ALPHA: u8 = 120;
/// Fade-in after run start: ~2 ms of alpha per ms, full after half a second
const FADE_ALPHA_PER_TICK: u64 = 8;

/// Rough text extent for centering labels (real dims come back from
/// `draw_text`, but only after drawing)
fn estimate_text_size(text: &str) -> Vec2 {
    Vec2::new(text.len() as f32 * 12.0, 24.0)
}

fn draw_button(r: &mut impl Renderer, rect: Rect, base: Color, label: &str) {
    let hovered = rect.contains(r.pointer_pos());
    let fill = if hovered {
        base.lighten(HOVER_LIGHTEN)
    } else {
        base
    };
    r.fill_rect(rect, fill);
    r.outline_rect(rect, Color::WHITE);

    let size = estimate_text_size(label);
    r.draw_text(label, rect.center() - size / 2.0, Color::WHITE);
}

fn draw_hud(r: &mut impl Renderer, session: &GameSession) {
    r.draw_text(
        &format!("Score: {}", session.score),
        Vec2::new(20.0, 20.0),
        HUD_TEXT,
    );
    r.draw_text(
        &format!("Level: {}", session.level),
        Vec2::new(200.0, 100.0),
        HUD_TEXT,
    );
    for i in 0..session.lives {
        let heart = Rect::new(20.0 + i as f32 * 40.0, 60.0, 32.0, 32.0);
        r.draw_sprite(TextureId::Heart, None, heart, 255);
    }
    r.draw_text(
        &format!("Time: {}", session.time_left_secs()),
        Vec2::new(700.0, 20.0),
        HUD_TEXT,
    );
    r.draw_text(
        &format!("High Score: {}", session.high_score),
        Vec2::new(20.0, 100.0),
        HUD_TEXT,
    );
    r.draw_text(
        &format!("Wave: {}", session.wave),
        Vec2::new(600.0, 60.0),
        HUD_TEXT,
    );
}

fn player_alpha(session: &GameSession) -> u8 {
    let now = session.time_ticks;
    if session.player.is_invulnerable(now) && (now / BLINK_PERIOD_TICKS) % 2 == 0 {
        return BLINK_ALPHA;
    }
    let since_start = now.saturating_sub(session.game_start_tick);
    (since_start * FADE_ALPHA_PER_TICK).min(255) as u8
}

fn draw_playfield(r: &mut impl Renderer, session: &GameSession) {
    draw_hud(r, session);
    r.draw_text("Avoid the enemies!", Vec2::new(300.0, 100.0), BANNER);

    let frame = (session.time_ticks / PLAYER_FRAME_TICKS) % PLAYER_FRAMES;
    let src = Rect::new(frame as f32 * PLAYER_SIZE, 0.0, PLAYER_SIZE, PLAYER_SIZE);
    r.draw_sprite(
        TextureId::PlayerSheet,
        Some(src),
        session.player.rect,
        player_alpha(session),
    );

    r.draw_sprite(TextureId::Coin, None, session.item.rect, 255);

    for enemy in &session.enemies {
        let color = match enemy.kind {
            EnemyKind::Ranged => Color::rgb(255, 255, 0),
            EnemyKind::SeekerSlow => Color::rgb(0, 128, 255),
            EnemyKind::SeekerFast => Color::rgb(255, 0, 0),
        };
        r.fill_rect(enemy.rect, color);
    }
    for projectile in &session.projectiles {
        r.fill_rect(projectile.rect, Color::WHITE);
    }
}

/// Compose and present one frame for the current phase
pub fn draw_frame(r: &mut impl Renderer, session: &GameSession) {
    r.clear(BACKGROUND);

    match session.phase {
        GamePhase::Menu => {
            draw_button(r, PLAY_BUTTON, PLAY_COLOR, "PLAY");
        }
        GamePhase::Playing => {
            draw_playfield(r, session);
        }
        GamePhase::Paused => {
            r.draw_text(
                "Game Paused. Press P to Resume or ESC to Menu",
                Vec2::new(100.0, 250.0),
                Color::WHITE,
            );
        }
        GamePhase::GameOver => {
            r.draw_text("Game Over", Vec2::new(150.0, 250.0), Color::rgb(255, 0, 0));
            draw_button(r, RESTART_BUTTON, RESTART_COLOR, "RESTART");
        }
        GamePhase::Victory => {
            r.draw_text("You Win!", Vec2::new(150.0, 250.0), Color::rgb(0, 255, 0));
            draw_button(r, RESTART_BUTTON, RESTART_COLOR, "RESTART");
        }
    }

    r.present();
}
