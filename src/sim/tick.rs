//! Per-frame simulation update
//!
//! Core game loop step: restart check, movement, collection, cloud effects,
//! spawning, then the countdown. Time is supplied by the host.

use super::autopilot;
use super::collision::{cloud_pass, collect_pass};
use super::spawn::Spawner;
use super::state::{Entity, GameEvent, GamePhase, GameState};

/// Input signals for a single tick
///
/// All active signals apply independently; pressing left and right together
/// turns both ways and cancels out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub accelerate: bool,
    /// Start over, from any phase
    pub restart: bool,
    /// Quit request; handled by the host loop, ignored by the simulation
    pub exit: bool,
    /// Idle/demo mode - autopilot flies the unicorn
    pub idle_mode: bool,
}

/// Advance the game state by one frame at absolute time `now` (seconds)
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) {
    // Restart wins over everything, including game over
    if input.restart {
        state.restart(now);
        return;
    }

    // Game over is idle until restarted
    if state.phase == GamePhase::GameOver {
        return;
    }

    let input = if input.idle_mode {
        autopilot::steer(state)
    } else {
        *input
    };

    // Movement
    if input.turn_left {
        state.player.turn_left();
    }
    if input.turn_right {
        state.player.turn_right();
    }
    if input.accelerate {
        state.player.accelerate();
    }
    state.player.advance();

    collect_pass(state);

    // Clouds drift, then decide this tick's player speed
    for cloud in &mut state.clouds {
        cloud.advance();
    }
    cloud_pass(state);

    let spawner = Spawner::from_tuning(&state.tuning);
    if let Some(ballon) = spawner.try_spawn(&mut state.ballons, &mut state.ids, &mut state.rng) {
        log::debug!("Spawned ballon {} ({:?})", ballon.id(), ballon.kind());
        state.push_event(GameEvent::BallonSpawned {
            id: ballon.id(),
            kind: ballon.kind(),
        });
    }

    // The frame that reaches the deadline still plays out
    if now >= state.deadline {
        state.phase = GamePhase::GameOver;
        let score = state.player.score;
        state.push_event(GameEvent::GameOver { score });
        log::info!("Game over - final score {}", score);
    }
}
