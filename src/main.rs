//! Ballons vs Unicorn entry point
//!
//! Loads tuning and settings, then drives one session on a fixed 60 Hz clock
//! with the autopilot at the controls until the countdown ends.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;
    use std::time::{SystemTime, UNIX_EPOCH};

    use ballons::audio::{AudioManager, LogBackend, MusicTrack};
    use ballons::platform::{Clock, SteppedClock};
    use ballons::renderer::{Renderer, SpriteSheets};
    use ballons::sim::{GameEvent, GameState, TickInput, tick};
    use ballons::{Settings, Tuning};

    env_logger::init();
    log::info!("Ballons vs Unicorn (native) starting...");

    let tuning = if Path::new(Tuning::FILE_NAME).exists() {
        Tuning::load_from(Tuning::FILE_NAME).unwrap_or_else(|e| {
            log::warn!("Ignoring {}: {}", Tuning::FILE_NAME, e);
            Tuning::default()
        })
    } else {
        Tuning::default()
    };
    let settings = if Path::new(Settings::FILE_NAME).exists() {
        Settings::load_from(Settings::FILE_NAME).unwrap_or_else(|e| {
            log::warn!("Ignoring {}: {}", Settings::FILE_NAME, e);
            Settings::default()
        })
    } else {
        Settings::default()
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut clock = SteppedClock::new(1.0 / 60.0);
    let mut state = GameState::new(seed, tuning, clock.now());
    let mut renderer = Renderer::new(SpriteSheets::default());
    renderer.set_show_timer(settings.show_timer);
    let mut audio = AudioManager::new(LogBackend::new(), &settings);

    let mut frames = 0u64;
    let mut popped = 0usize;
    loop {
        let input = TickInput {
            idle_mode: true,
            // Leave once the end screen is up, as a player pressing ESC would
            exit: state.is_game_over(),
            ..Default::default()
        };
        if input.exit {
            break;
        }

        let now = clock.now();
        tick(&mut state, &input, now);
        let events = state.drain_events();
        popped += events
            .iter()
            .filter(|e| matches!(e, GameEvent::BallonCollected { .. }))
            .count();
        audio.handle_events(&events);
        audio.ensure_music(MusicTrack::Bouncing);

        let frame = renderer.render(&state, now, clock.elapsed_ms());
        if state.is_game_over() {
            for text in &frame.texts {
                log::info!("{}", text.text);
            }
        }

        frames += 1;
        clock.advance();
    }

    let hud = state.hud(clock.now());
    println!(
        "Final score: {} ({} frames, {} ballons popped)",
        hud.score, frames, popped
    );
    match serde_json::to_string(&hud) {
        Ok(json) => log::debug!("{}", json),
        Err(e) => log::warn!("Could not encode HUD: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host drives `ballons::sim::tick` directly
}
