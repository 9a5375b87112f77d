//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod scheduler;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::{Impact, danger_line_hits, match_projectiles, resolve};
pub use scheduler::Scheduler;
pub use session::{Session, Snapshot, StartError};
pub use state::{Enemy, EnemyKind, GameState, Phase, Player, Profile, Projectile, ShipKind, Star};
pub use tick::tick;
