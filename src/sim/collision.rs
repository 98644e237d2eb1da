//! Proximity tests and the per-tick interaction passes
//!
//! All distances are planar. The world wraps for movement only, so a ballon
//! hugging the right edge is not "near" a player hugging the left edge.

use glam::Vec2;

use super::state::{Entity, GameEvent, GameState, SpeedFactor};

/// Strict planar proximity check
#[inline]
pub fn within_radius(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

/// Pop every ballon the player is touching, credit score, record events.
///
/// Returns the number of ballons collected.
pub fn collect_pass(state: &mut GameState) -> usize {
    let collected = state.player.collect(&mut state.ballons);
    for ballon in &collected {
        log::debug!(
            "Collected ballon {} ({:?}, +{}) -> score {}",
            ballon.id(),
            ballon.kind(),
            ballon.points(),
            state.player.score
        );
        state.push_event(GameEvent::BallonCollected {
            id: ballon.id(),
            kind: ballon.kind(),
            points: ballon.points(),
        });
    }
    collected.len()
}

/// Slow the player while any cloud covers them, otherwise restore speed.
///
/// Returns the speed factor now in force.
pub fn cloud_pass(state: &mut GameState) -> SpeedFactor {
    let covered = state.clouds.iter().any(|c| c.overlaps(&state.player));
    let speed = if covered {
        SpeedFactor::Slowed
    } else {
        SpeedFactor::Normal
    };
    if speed != state.player.speed {
        log::trace!("Player speed -> {:?}", speed);
    }
    state.player.set_speed(speed);
    speed
}
