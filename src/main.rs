//! Arena Dodge entry point
//!
//! Runs the game headless with null collaborators and a small autopilot:
//! the full simulation (waves, collisions, scoring, persistence) without a
//! window. A graphical frontend plugs real `Renderer`/`AudioPlayer`/
//! `InputSource` implementations into the same `App`; any asset it fails to
//! load at startup is fatal (exit nonzero).

use std::time::{SystemTime, UNIX_EPOCH};

use arena_dodge::app::App;
use arena_dodge::consts::{SIM_DT, TICK_RATE};
use arena_dodge::platform::{NullRenderer, RecordingAudio, ScriptedInput};
use arena_dodge::sim::{GamePhase, GameSession, InputEvent, Key, PLAY_BUTTON, PointerButton};
use arena_dodge::{FileStore, Settings, settings};

/// Steps between autopilot key presses (each press moves 50 px)
const MOVE_CADENCE_TICKS: u64 = 15;
/// Flee distance: enemies closer than this take priority over the coin
const DANGER_RADIUS: f32 = 140.0;

fn main() {
    env_logger::init();
    log::info!("Arena Dodge starting (headless demo)");

    let settings = Settings::load(settings::DEFAULT_PATH);
    log::info!(
        "Volumes: master {:.1}, sfx {:.1}, music {:.1} (applied by a real frontend)",
        settings.master_volume,
        settings.sfx_volume,
        settings.music_volume
    );

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1);
    let store = FileStore::default();
    let mut app = App::new(
        seed,
        NullRenderer,
        RecordingAudio::default(),
        ScriptedInput::default(),
        store,
    );
    log::info!("Session seeded with {}", seed);

    // First frame: click Play
    let play_center = PLAY_BUTTON.center();
    app.input_mut().push_frame(vec![InputEvent::PointerDown {
        x: play_center.x,
        y: play_center.y,
        button: PointerButton::Left,
    }]);
    app.frame(SIM_DT);

    let total_frames = settings.demo_secs as u64 * TICK_RATE;
    for frame in 0..total_frames {
        let mut batch = Vec::new();
        if frame % MOVE_CADENCE_TICKS == 0 {
            if let Some(key) = autopilot(app.session()) {
                batch.push(InputEvent::KeyDown(key));
            }
        }
        app.input_mut().push_frame(batch);

        if !app.frame(SIM_DT) {
            break;
        }
        if app.session().phase == GamePhase::GameOver {
            break;
        }
    }

    let session = app.session();
    log::info!(
        "Demo finished: score {}, high score {}, wave {}, level {}, {} sounds played",
        session.score,
        session.high_score,
        session.wave,
        session.level,
        app.audio().sounds.len()
    );
    println!(
        "score={} high={} wave={} level={}",
        session.score, session.high_score, session.wave, session.level
    );
}

/// Demo pilot: flee the nearest close enemy, otherwise chase the coin.
/// Moves one axis at a time, matching the discrete key steps.
fn autopilot(session: &GameSession) -> Option<Key> {
    if session.phase != GamePhase::Playing {
        return None;
    }
    let player = session.player.rect.center();

    let threat = session
        .enemies
        .iter()
        .map(|e| e.rect.center())
        .min_by(|a, b| {
            a.distance_squared(player)
                .partial_cmp(&b.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(enemy) = threat {
        let away = player - enemy;
        if away.length() < DANGER_RADIUS {
            return Some(dominant_axis_key(away));
        }
    }

    let to_item = session.item.rect.center() - player;
    if to_item.length() > 1.0 {
        return Some(dominant_axis_key(to_item));
    }
    None
}

fn dominant_axis_key(dir: glam::Vec2) -> Key {
    if dir.x.abs() >= dir.y.abs() {
        if dir.x >= 0.0 { Key::Right } else { Key::Left }
    } else if dir.y >= 0.0 {
        Key::Down
    } else {
        Key::Up
    }
}
