//! Space Mission - a deterministic arcade shooter engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, tick loop, collisions, session)
//! - `tuning`: Data-driven game balance
//! - `highscores`: In-memory session leaderboard
//!
//! The engine owns no rendering and no input devices. A presentation layer
//! feeds it intents (`move_left`, `fire`, ...) and draws the read-only
//! snapshot it exposes after every tick.

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use sim::{Phase, Session, Snapshot, StartError};
pub use tuning::Tuning;

use glam::Vec2;

/// Engine-fixed constants. Everything balance-related lives in [`Tuning`].
pub mod consts {
    /// Playfield extent - positions are percentages of the viewport
    pub const PLAYFIELD_MAX: f32 = 100.0;

    /// Player spawn position
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = 80.0;

    /// Projectiles spawn this far above the player
    pub const FIRE_OFFSET: f32 = 5.0;

    /// Maximum catch-up ticks per scheduler advance to prevent spiral of death
    pub const MAX_CATCHUP_TICKS: u32 = 8;
}

/// Squared-distance proximity check (strict inequality)
#[inline]
pub fn within_radius(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_radius_strict_boundary() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        // Exactly on the boundary is a miss
        assert!(!within_radius(a, b, 10.0));
        assert!(within_radius(a, b, 10.1));
    }
}
