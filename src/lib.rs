//! Ballons vs Unicorn - a single-screen arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collection, clouds, countdown)
//! - `renderer`: Builds per-frame draw lists for the host display
//! - `audio`: Sound cue dispatch over a host audio backend
//! - `platform`: Host clock abstraction
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// World dimensions (the window is the whole world)
    pub const WORLD_WIDTH: f32 = 1200.0;
    pub const WORLD_HEIGHT: f32 = 900.0;

    /// Player spawn point (screen center)
    pub const PLAYER_SPAWN_X: f32 = 600.0;
    pub const PLAYER_SPAWN_Y: f32 = 450.0;

    /// Heading change per turn input per tick (degrees)
    pub const TURN_STEP_DEG: f32 = 4.5;
    /// Impulse added per accelerate input
    pub const ACCELERATION: f32 = 0.5;
    /// Velocity decay factors
    pub const NORMAL_SPEED: f32 = 0.95;
    pub const SLOWED_SPEED: f32 = 0.45;

    /// Pickup radius around the player
    pub const COLLECT_RADIUS: f32 = 60.0;

    /// Ballon points per category
    pub const COMMON_POINTS: u64 = 1;
    pub const RARE_POINTS: u64 = 5;

    /// Cloud slowdown radius
    pub const CLOUD_RADIUS: f32 = 90.0;
    /// Clouds start somewhere in [50, 850) vertically
    pub const CLOUD_Y_MIN: u32 = 50;
    pub const CLOUD_Y_SPAN: u32 = 800;
    /// Cloud drift speed range (inclusive)
    pub const CLOUD_SPEED_MIN: u32 = 3;
    pub const CLOUD_SPEED_MAX: u32 = 7;

    /// Session length in seconds
    pub const SESSION_SECS: f64 = 11.0;
    /// Per-tick ballon spawn probability
    pub const SPAWN_CHANCE: f64 = 0.04;
    /// Maximum ballons on screen
    pub const MAX_BALLONS: usize = 25;
    /// Ballon category weights (common:rare)
    pub const COMMON_WEIGHT: u32 = 4;
    pub const RARE_WEIGHT: u32 = 1;

    /// Sprite animations advance one frame per this many milliseconds
    pub const ANIM_FRAME_MS: u64 = 100;
}

/// Wrap a coordinate into `[0, max)`
///
/// `rem_euclid` can round up to exactly `max` for tiny negative inputs,
/// which is folded back to zero.
#[inline]
pub fn wrap_coord(value: f32, max: f32) -> f32 {
    let wrapped = value.rem_euclid(max);
    if wrapped >= max { 0.0 } else { wrapped }
}

/// Unit-free direction for a heading in degrees (0 = up, clockwise positive)
#[inline]
pub fn heading_vector(angle_deg: f32, length: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.sin() * length, -rad.cos() * length)
}
