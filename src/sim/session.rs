//! Session lifecycle and the public input surface
//!
//! The session gates every mutation on its phase: Setup collects the profile,
//! Active runs the simulation and accepts intents, Ended freezes everything
//! until an explicit restart. Movement and fire intents are total - outside
//! the Active phase they are silent no-ops, never errors.

use glam::Vec2;
use serde::Serialize;
use thiserror::Error;

use super::state::{Enemy, GameState, Phase, Player, Profile, Projectile, ShipKind, Star};
use crate::consts::FIRE_OFFSET;
use crate::tuning::Tuning;

/// Why `start_session` rejected a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("display name must not be empty")]
    EmptyName,
    #[error("a ship must be selected")]
    NoShip,
}

/// Read-only view of the engine state for the presentation layer
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub phase: Phase,
    pub score: u32,
    pub lives: u8,
    pub player: &'a Player,
    pub profile: Option<&'a Profile>,
    pub enemies: &'a [Enemy],
    pub projectiles: &'a [Projectile],
    pub stars: &'a [Star],
}

/// An arcade session: state machine, entity store, and intent surface
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    tuning: Tuning,
}

impl Session {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let state = GameState::new(seed, &tuning);
        Self { state, tuning }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Begin a run. Requires a non-empty display name and a selected ship;
    /// rejection leaves the session untouched in Setup.
    pub fn start_session(&mut self, name: &str, ship: Option<ShipKind>) -> Result<(), StartError> {
        if self.state.phase != Phase::Setup {
            return Ok(());
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(StartError::EmptyName);
        }
        let Some(ship) = ship else {
            return Err(StartError::NoShip);
        };

        self.state.profile = Some(Profile {
            name: name.to_string(),
            ship,
        });
        self.state.phase = Phase::Active;
        log::info!("session started for {name} flying {}", ship.as_glyph());
        Ok(())
    }

    /// Restart after a run ended: back to Setup with everything reset.
    /// A no-op in any other phase.
    pub fn restart_session(&mut self) {
        if self.state.phase != Phase::Ended {
            return;
        }
        self.state.reset(&self.tuning);
        log::info!("session reset");
    }

    /// Nudge the player left by one move step. No-op outside Active.
    pub fn move_left(&mut self) {
        self.shift_player(-self.tuning.move_step);
    }

    /// Nudge the player right by one move step. No-op outside Active.
    pub fn move_right(&mut self) {
        self.shift_player(self.tuning.move_step);
    }

    /// Absolute pointer/touch positioning; clamped like the discrete moves.
    /// Last writer before a tick wins. No-op outside Active.
    pub fn set_pointer_x(&mut self, x: f32) {
        if self.state.phase != Phase::Active {
            return;
        }
        self.state.player.pos.x = GameState::clamp_x(x, &self.tuning);
    }

    /// Fire one projectile from the player's position. Every accepted fire
    /// intent spawns - there is deliberately no cooldown. No-op outside
    /// Active.
    pub fn fire(&mut self) {
        if self.state.phase != Phase::Active {
            return;
        }
        let id = self.state.next_entity_id();
        let pos = Vec2::new(
            self.state.player.pos.x,
            self.state.player.pos.y - FIRE_OFFSET,
        );
        self.state.projectiles.push(Projectile { id, pos });
    }

    /// Advance the simulation one tick. No-op outside Active.
    pub fn tick(&mut self) {
        super::tick::tick(&mut self.state, &self.tuning);
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Read-only view for rendering. Valid after any tick or intent.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.state.phase,
            score: self.state.score,
            lives: self.state.lives,
            player: &self.state.player,
            profile: self.state.profile.as_ref(),
            enemies: &self.state.enemies,
            projectiles: &self.state.projectiles,
            stars: &self.state.stars,
        }
    }

    /// Full state access for tests and the demo driver
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn shift_player(&mut self, dx: f32) {
        if self.state.phase != Phase::Active {
            return;
        }
        let x = self.state.player.pos.x + dx;
        self.state.player.pos.x = GameState::clamp_x(x, &self.tuning);
    }
}
