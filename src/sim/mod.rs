//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in as an argument, never read from a clock
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{cloud_pass, collect_pass, within_radius};
pub use spawn::Spawner;
pub use state::{
    Ballon, BallonKind, Cloud, CloudDirection, Entity, EntityIds, GameEvent, GamePhase,
    GameState, Hud, Player, SpeedFactor,
};
pub use tick::{TickInput, tick};
