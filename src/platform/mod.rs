//! Platform collaborator seams
//!
//! The simulation and frame composition only ever talk to these traits.
//! A real frontend (SDL, winit, terminal) implements them; the crate ships
//! null and recording implementations for headless runs and tests.

use std::collections::VecDeque;

use glam::Vec2;

use crate::sim::{InputEvent, Rect};

/// RGBA color for draw calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Brightened variant for button hover feedback
    pub fn lighten(&self, amount: u8) -> Color {
        Color {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
            a: self.a,
        }
    }
}

/// Textures loaded once at startup by the frontend.
/// Failure to load any of them is fatal there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureId {
    /// 4-frame 64 px player animation strip
    PlayerSheet,
    /// Life counter icon
    Heart,
    /// Collectible item
    Coin,
}

/// Sound effects, matching the original four clips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Coin collected
    Pickup,
    /// Player took damage
    Hit,
    /// Win screen
    Victory,
    /// Run ended
    GameOver,
}

/// Music tracks (a single looping background track)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    Background,
}

/// Draw-call sink. One frame is `clear` .. draws .. `present`.
pub trait Renderer {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn outline_rect(&mut self, rect: Rect, color: Color);
    /// `src` selects a region of the texture (spritesheet frame); `None`
    /// draws the whole texture. `alpha` modulates transparency.
    fn draw_sprite(&mut self, texture: TextureId, src: Option<Rect>, dst: Rect, alpha: u8);
    /// Draws `text` at `pos` and reports the rendered dimensions
    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color) -> Vec2;
    fn present(&mut self);
    /// Current pointer position, for hover feedback
    fn pointer_pos(&self) -> Vec2;
}

/// Audio sink
pub trait AudioPlayer {
    fn play_sound(&mut self, effect: SoundEffect);
    fn play_music(&mut self, track: MusicTrack);
    fn stop_music(&mut self);
}

/// Non-blocking input poll; the returned batch is finite and the sequence
/// restarts every frame
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Renderer that discards everything (headless runs)
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn clear(&mut self, _color: Color) {}
    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
    fn outline_rect(&mut self, _rect: Rect, _color: Color) {}
    fn draw_sprite(&mut self, _texture: TextureId, _src: Option<Rect>, _dst: Rect, _alpha: u8) {}
    fn draw_text(&mut self, text: &str, _pos: Vec2, _color: Color) -> Vec2 {
        // Rough monospace estimate so layout code sees plausible sizes
        Vec2::new(text.len() as f32 * 12.0, 24.0)
    }
    fn present(&mut self) {}
    fn pointer_pos(&self) -> Vec2 {
        Vec2::ZERO
    }
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    FillRect(Rect, Color),
    OutlineRect(Rect, Color),
    Sprite(TextureId, Rect, u8),
    Text(String, Color),
    Present,
}

/// Renderer that records its draw calls, for asserting frame composition
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
    pub pointer: Vec2,
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect(rect, color));
    }
    fn outline_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::OutlineRect(rect, color));
    }
    fn draw_sprite(&mut self, texture: TextureId, _src: Option<Rect>, dst: Rect, alpha: u8) {
        self.calls.push(DrawCall::Sprite(texture, dst, alpha));
    }
    fn draw_text(&mut self, text: &str, _pos: Vec2, color: Color) -> Vec2 {
        self.calls.push(DrawCall::Text(text.to_string(), color));
        Vec2::new(text.len() as f32 * 12.0, 24.0)
    }
    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }
    fn pointer_pos(&self) -> Vec2 {
        self.pointer
    }
}

impl RecordingRenderer {
    /// All text drawn this recording, joined for simple assertions
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text(s, _) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Audio sink that only remembers what it was asked to play
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub sounds: Vec<SoundEffect>,
    pub music_playing: bool,
}

impl AudioPlayer for RecordingAudio {
    fn play_sound(&mut self, effect: SoundEffect) {
        self.sounds.push(effect);
    }
    fn play_music(&mut self, _track: MusicTrack) {
        self.music_playing = true;
    }
    fn stop_music(&mut self) {
        self.music_playing = false;
    }
}

/// Input source fed from a pre-built script of per-frame event batches.
/// Used by the headless demo and tests.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Queue a batch for the next unclaimed frame
    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.frames.push_back(events);
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }
}
