//! Idle/demo mode steering
//!
//! Flies the unicorn toward the nearest ballon using the same controls a
//! player has, so demo runs exercise the normal tick path.

use super::state::{Entity, GameState};
use super::tick::TickInput;
use crate::consts::TURN_STEP_DEG;

/// Only thrust when the target is roughly ahead
const THRUST_CONE_DEG: f32 = 60.0;

/// Wrap an angle in degrees into [-180, 180)
fn normalize_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

/// Produce control inputs that chase the closest ballon
pub fn steer(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    let player = &state.player;

    let Some(target) = state
        .ballons
        .iter()
        .map(|b| b.pos())
        .min_by(|a, b| {
            a.distance_squared(player.pos)
                .partial_cmp(&b.distance_squared(player.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    else {
        return input;
    };

    let to_target = target - player.pos;
    let bearing = to_target.x.atan2(-to_target.y).to_degrees();
    let diff = normalize_degrees(bearing - player.angle);

    if diff > TURN_STEP_DEG / 2.0 {
        input.turn_right = true;
    } else if diff < -TURN_STEP_DEG / 2.0 {
        input.turn_left = true;
    }
    input.accelerate = diff.abs() < THRUST_CONE_DEG;
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Ballon, BallonKind};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn state_with(ballon_at: Vec2) -> GameState {
        let mut state = GameState::new(9, Tuning::default(), 0.0);
        state.ballons.push(Ballon::new(100, ballon_at, BallonKind::Common));
        state
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(190.0), -170.0);
        assert_eq!(normalize_degrees(-190.0), 170.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
    }

    #[test]
    fn test_idle_without_targets() {
        let state = GameState::new(9, Tuning::default(), 0.0);
        let input = steer(&state);
        assert!(!input.turn_left && !input.turn_right && !input.accelerate);
    }

    #[test]
    fn test_thrusts_straight_ahead() {
        // Player faces up; ballon directly above
        let input = steer(&state_with(Vec2::new(600.0, 200.0)));
        assert!(input.accelerate);
        assert!(!input.turn_left && !input.turn_right);
    }

    #[test]
    fn test_turns_toward_target() {
        let input = steer(&state_with(Vec2::new(900.0, 450.0)));
        assert!(input.turn_right);

        let input = steer(&state_with(Vec2::new(300.0, 450.0)));
        assert!(input.turn_left);

        // Behind: turn but do not thrust away from it
        let input = steer(&state_with(Vec2::new(610.0, 800.0)));
        assert!(!input.accelerate);
    }
}
