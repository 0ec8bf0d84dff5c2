//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies; side effects leave as
//!   [`GameEvent`] values for the frame driver to dispatch

pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use spawn::{spawn_wave, start_wave};
pub use state::{
    Enemy, EnemyKind, GameEvent, GamePhase, GameSession, Item, PLAY_BUTTON, Player, Projectile,
    RESTART_BUTTON,
};
pub use tick::{InputEvent, Key, PointerButton, handle_key, handle_pointer, tick};
