//! Game state and core simulation types
//!
//! All mutable session state lives in [`GameSession`]; nothing in the
//! simulation is a global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Top-level game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen with the Play button
    Menu,
    /// Active gameplay
    Playing,
    /// Gameplay frozen, toggled by the pause key
    Paused,
    /// Run ended (lives or time ran out)
    GameOver,
    /// Terminal win screen. No transition currently enters it; the phase is
    /// kept with full rendering and restart handling (see DESIGN.md).
    Victory,
}

/// Enemy behavior variants
///
/// The kind carries the behavior table: seekers steer toward the player
/// every frame, Ranged stands still and fires projectiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    SeekerSlow,
    SeekerFast,
    Ranged,
}

impl EnemyKind {
    /// Speed applied to the random spawn heading. Only observable for the
    /// first frame of a seeker's life; steering overrides it afterwards.
    pub fn initial_speed(&self) -> f32 {
        match self {
            EnemyKind::SeekerSlow => 50.0,
            EnemyKind::SeekerFast => 150.0,
            EnemyKind::Ranged => 0.0,
        }
    }

    pub fn is_seeker(&self) -> bool {
        !matches!(self, EnemyKind::Ranged)
    }

    pub fn from_index(index: u32) -> Self {
        match index % 3 {
            0 => EnemyKind::SeekerSlow,
            1 => EnemyKind::SeekerFast,
            _ => EnemyKind::Ranged,
        }
    }
}

/// An enemy entity
#[derive(Debug, Clone)]
pub struct Enemy {
    pub rect: Rect,
    pub vel: Vec2,
    pub kind: EnemyKind,
}

impl Enemy {
    /// Construct an enemy at `pos` with a random `heading` (radians).
    /// Ranged enemies always get zero velocity regardless of heading.
    pub fn spawn(kind: EnemyKind, pos: Vec2, heading: f32) -> Self {
        let speed = kind.initial_speed();
        Self {
            rect: Rect {
                pos,
                size: Vec2::splat(ENEMY_SIZE),
            },
            vel: Vec2::new(heading.cos(), heading.sin()) * speed,
            kind,
        }
    }
}

/// A projectile fired by a ranged enemy
#[derive(Debug, Clone)]
pub struct Projectile {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Projectile {
    /// Spawn at `from` aimed at `target` (both centers). Direction is
    /// normalized once at creation; a zero-length aim leaves the projectile
    /// motionless rather than producing NaN.
    pub fn aimed(from: Vec2, target: Vec2) -> Self {
        let dir = (target - from).normalize_or_zero();
        Self {
            rect: Rect::centered(from, PROJECTILE_SIZE),
            vel: dir * PROJECTILE_SPEED,
        }
    }
}

/// The player avatar
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    /// Tick at which the current invulnerability window started
    pub invulnerable_since: Option<u64>,
}

impl Player {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_SIZE, PLAYER_SIZE),
            invulnerable_since: None,
        }
    }

    /// True while inside the invulnerability window. The window closes
    /// exactly at `since + INVULNERABLE_TICKS`, never earlier.
    pub fn is_invulnerable(&self, now: u64) -> bool {
        match self.invulnerable_since {
            Some(since) => now - since < INVULNERABLE_TICKS,
            None => false,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// The collectible coin
#[derive(Debug, Clone)]
pub struct Item {
    pub rect: Rect,
}

impl Item {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(ITEM_START_X, ITEM_START_Y, ITEM_SIZE, ITEM_SIZE),
        }
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}

/// Side effects the simulation asks its collaborators to perform.
/// The sim never touches audio or storage directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new run began (start music)
    RunStarted,
    /// The player took damage
    PlayerHit,
    /// The coin was collected
    ItemCollected,
    /// The run ended (halt music, play the game-over sound)
    RunEnded,
    /// The high score rose to this value; persist it immediately
    HighScore(u32),
}

/// The Play button on the menu screen
pub const PLAY_BUTTON: Rect = Rect::new(300.0, 250.0, 200.0, 60.0);
/// The Restart button on the game-over and victory screens
pub const RESTART_BUTTON: Rect = Rect::new(300.0, 330.0, 200.0, 60.0);

/// Complete game session: entities, score, timers, and the state machine's
/// phase. Created once at startup, reset in place on every new run.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG (spawn positions, kinds, headings, item relocation)
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Monotonically non-decreasing across runs
    pub high_score: u32,
    pub lives: u8,
    /// Difficulty tier derived from score thresholds
    pub level: u32,
    pub player: Player,
    pub item: Item,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    /// Current wave number (1-based)
    pub wave: u32,
    pub wave_in_progress: bool,
    pub wave_start_tick: u64,
    /// Tick at which the Playing phase began (time limit baseline)
    pub game_start_tick: u64,
    /// Shared across ALL ranged enemies: at most one fires per interval.
    /// Deliberate parity with the original design (see DESIGN.md).
    pub last_shot_tick: u64,
    /// Simulation tick counter (monotonic, 60 Hz)
    pub time_ticks: u64,
}

impl GameSession {
    /// Create a session at the menu with a persisted high score
    pub fn new(seed: u64, high_score: u32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            score: 0,
            high_score,
            lives: START_LIVES,
            level: 1,
            player: Player::new(),
            item: Item::new(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            wave: 1,
            wave_in_progress: false,
            wave_start_tick: 0,
            game_start_tick: 0,
            last_shot_tick: 0,
            time_ticks: 0,
        }
    }

    /// Reset all per-run state. High score, RNG stream, and the tick clock
    /// survive resets.
    pub fn reset_run(&mut self) {
        self.score = 0;
        self.lives = START_LIVES;
        self.level = 1;
        self.wave = 1;
        self.wave_in_progress = false;
        self.player = Player::new();
        self.item = Item::new();
        self.enemies.clear();
        self.projectiles.clear();
    }

    /// Grant score, applying level-up and high-score side effects.
    /// Level rises once for every multiple of `LEVEL_SCORE_STEP` crossed.
    pub fn add_score(&mut self, points: u32, events: &mut Vec<GameEvent>) {
        let before = self.score;
        self.score += points;

        let crossed = self.score / LEVEL_SCORE_STEP - before / LEVEL_SCORE_STEP;
        if crossed > 0 {
            self.level += crossed;
            log::info!("Level up: {} (score {})", self.level, self.score);
        }

        if self.score > self.high_score {
            self.high_score = self.score;
            events.push(GameEvent::HighScore(self.high_score));
        }
    }

    /// Time budget for the current level, in seconds
    pub fn time_limit_secs(&self) -> u32 {
        BASE_TIME_LIMIT_SECS
            .saturating_sub((self.level - 1) * TIME_LIMIT_STEP_SECS)
            .max(MIN_TIME_LIMIT_SECS)
    }

    /// Seconds left on the clock (clamped at zero)
    pub fn time_left_secs(&self) -> u32 {
        let elapsed = crate::ticks_to_secs(self.time_ticks - self.game_start_tick);
        self.time_limit_secs().saturating_sub(elapsed)
    }

    /// Apply damage: one life, fresh invulnerability window. Callers must
    /// check invulnerability first.
    pub(crate) fn damage_player(&mut self, events: &mut Vec<GameEvent>) {
        self.lives = self.lives.saturating_sub(1);
        self.player.invulnerable_since = Some(self.time_ticks);
        events.push(GameEvent::PlayerHit);
    }
}
