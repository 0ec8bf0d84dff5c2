//! Frame driver
//!
//! Owns the session and the platform collaborators and runs the per-frame
//! pipeline: poll input, advance the fixed-timestep simulation, dispatch the
//! simulation's side effects (sounds, high-score writes), draw.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::highscores::HighScoreStore;
use crate::platform::{AudioPlayer, InputSource, MusicTrack, Renderer, SoundEffect};
use crate::render::draw_frame;
use crate::sim::{
    GameEvent, GameSession, InputEvent, PointerButton, handle_key, handle_pointer, tick,
};

/// The assembled game: simulation plus its collaborators
pub struct App<R, A, I, S> {
    session: GameSession,
    renderer: R,
    audio: A,
    input: I,
    store: S,
    accumulator: f32,
}

impl<R, A, I, S> App<R, A, I, S>
where
    R: Renderer,
    A: AudioPlayer,
    I: InputSource,
    S: HighScoreStore,
{
    /// Build the app; the high score is read from the store once, here
    pub fn new(seed: u64, renderer: R, audio: A, input: I, store: S) -> Self {
        let high_score = store.load();
        Self {
            session: GameSession::new(seed, high_score),
            renderer,
            audio,
            input,
            store,
            accumulator: 0.0,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Run one frame with the given real-time delta. Returns false once the
    /// player asked to quit.
    pub fn frame(&mut self, dt: f32) -> bool {
        let mut events: Vec<GameEvent> = Vec::new();

        for input_event in self.input.poll() {
            match input_event {
                InputEvent::Quit => {
                    log::info!("Quit requested");
                    return false;
                }
                // Only the left button drives menu/restart controls
                InputEvent::PointerDown {
                    x,
                    y,
                    button: PointerButton::Left,
                } => {
                    handle_pointer(&mut self.session, x, y, &mut events);
                }
                InputEvent::PointerDown { .. } => {}
                InputEvent::KeyDown(key) => {
                    handle_key(&mut self.session, key, &mut events);
                }
            }
        }

        // Fixed-step accumulation with a substep cap, so a slow frame can't
        // spiral the simulation
        self.accumulator += dt.min(0.1);
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.session, SIM_DT, &mut events);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        self.dispatch(&events);
        draw_frame(&mut self.renderer, &self.session);
        true
    }

    /// Map simulation events onto the audio and persistence collaborators
    fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::RunStarted => self.audio.play_music(MusicTrack::Background),
                GameEvent::PlayerHit => self.audio.play_sound(SoundEffect::Hit),
                GameEvent::ItemCollected => self.audio.play_sound(SoundEffect::Pickup),
                GameEvent::RunEnded => {
                    self.audio.stop_music();
                    self.audio.play_sound(SoundEffect::GameOver);
                }
                // Persist immediately; the high score must survive a crash
                GameEvent::HighScore(score) => self.store.save(*score),
            }
        }
    }
}
