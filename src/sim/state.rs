//! Game state and core simulation types
//!
//! The entity store: everything the tick loop mutates lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Collecting the player profile, no simulation running
    Setup,
    /// Active gameplay
    Active,
    /// Run ended, simulation frozen until restart
    Ended,
}

/// Player ship avatars (cosmetic, chosen at setup)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShipKind {
    #[default]
    Rocket,
    Ufo,
    AlienShip,
    Satellite,
}

impl ShipKind {
    /// Glyph the presentation layer draws for this ship
    pub fn as_glyph(&self) -> &'static str {
        match self {
            ShipKind::Rocket => "\u{1F680}",
            ShipKind::Ufo => "\u{1F6F8}",
            ShipKind::AlienShip => "\u{1F47E}",
            ShipKind::Satellite => "\u{1F6F0}\u{FE0F}",
        }
    }

    pub fn from_glyph(s: &str) -> Option<Self> {
        match s {
            "\u{1F680}" => Some(ShipKind::Rocket),
            "\u{1F6F8}" => Some(ShipKind::Ufo),
            "\u{1F47E}" => Some(ShipKind::AlienShip),
            "\u{1F6F0}\u{FE0F}" | "\u{1F6F0}" => Some(ShipKind::Satellite),
            _ => None,
        }
    }
}

/// Enemy looks. Purely cosmetic, no behavioral effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Invader,
    Saucer,
    Skull,
    Alien,
    Robot,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 5] = [
        EnemyKind::Invader,
        EnemyKind::Saucer,
        EnemyKind::Skull,
        EnemyKind::Alien,
        EnemyKind::Robot,
    ];

    pub fn as_glyph(&self) -> &'static str {
        match self {
            EnemyKind::Invader => "\u{1F47E}",
            EnemyKind::Saucer => "\u{1F6F8}",
            EnemyKind::Skull => "\u{1F480}",
            EnemyKind::Alien => "\u{1F47D}",
            EnemyKind::Robot => "\u{1F916}",
        }
    }
}

/// Validated player profile collected during Setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub ship: ShipKind,
}

/// The player's ship. Lives and score live on [`GameState`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
        }
    }
}

/// A descending enemy
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub kind: EnemyKind,
}

/// A projectile fired by the player, travelling up
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
}

/// Background star (decoration only, wraps top-to-bottom)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub fall_speed: f32,
}

/// Complete session state (deterministic given seed and intent script)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG - spawning and cosmetics only, never combat
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    /// Simulation tick counter
    pub ticks: u64,
    /// Current phase
    pub phase: Phase,
    /// Score, monotonically non-decreasing while Active
    pub score: u32,
    /// Remaining lives; the session ends the tick this reaches 0
    pub lives: u8,
    /// Player ship
    pub player: Player,
    /// Profile captured by `start_session`
    pub profile: Option<Profile>,
    /// Active enemies (spawn order, ids strictly increasing)
    pub enemies: Vec<Enemy>,
    /// Active projectiles (fire order, ids strictly increasing)
    pub projectiles: Vec<Projectile>,
    /// Background decoration
    pub stars: Vec<Star>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh Setup-phase state with the given seed
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ticks: 0,
            phase: Phase::Setup,
            score: 0,
            lives: tuning.starting_lives,
            player: Player::default(),
            profile: None,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            stars: Vec::new(),
            next_id: 1,
        };
        state.seed_stars(tuning.star_count);
        state
    }

    /// Allocate a new entity ID (unique, monotonically increasing)
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Scatter the background starfield across the playfield
    fn seed_stars(&mut self, count: usize) {
        self.stars = (0..count)
            .map(|_| Star {
                pos: Vec2::new(
                    self.rng.random_range(0.0..PLAYFIELD_MAX),
                    self.rng.random_range(0.0..PLAYFIELD_MAX),
                ),
                fall_speed: 0.5 + self.rng.random::<f32>() * 2.0,
            })
            .collect();
    }

    /// Reset for a new run: clear entities, restore lives/score/position.
    /// Stars are kept - the backdrop survives across runs.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.phase = Phase::Setup;
        self.score = 0;
        self.lives = tuning.starting_lives;
        self.player = Player::default();
        self.profile = None;
        self.enemies.clear();
        self.projectiles.clear();
        self.ticks = 0;
    }

    /// Clamp an x coordinate to the playable lane
    pub fn clamp_x(x: f32, tuning: &Tuning) -> f32 {
        x.clamp(tuning.min_x, tuning.max_x)
    }
}
