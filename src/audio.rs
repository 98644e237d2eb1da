//! Audio dispatch
//!
//! The simulation only records events; this turns them into sound cues on a
//! host-provided backend. Playback is fire-and-forget.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ballon popped
    Plopp,
}

/// Looping background tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    Bouncing,
}

/// Host audio device
pub trait AudioBackend {
    /// Fire a one-shot sample
    fn play_sample(&mut self, effect: SoundEffect, volume: f32);

    /// Start a looping track from the beginning
    fn play_music(&mut self, track: MusicTrack, volume: f32);

    /// Track currently playing, if any
    fn current_music(&self) -> Option<MusicTrack>;
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    settings: Settings,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B, settings: &Settings) -> Self {
        Self {
            backend,
            settings: settings.clone(),
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.settings.effective_sfx_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play_sample(effect, vol);
    }

    /// Start `track` unless it is already playing
    pub fn ensure_music(&mut self, track: MusicTrack) {
        let vol = self.settings.effective_music_volume();
        if vol <= 0.0 {
            return;
        }
        if self.backend.current_music().is_some() {
            return;
        }
        self.backend.play_music(track, vol);
    }

    /// Play the cues for a batch of simulation events
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::BallonCollected { .. } = event {
                self.play(SoundEffect::Plopp);
            }
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Headless backend that only logs what would be played
#[derive(Debug, Default)]
pub struct LogBackend {
    music: Option<MusicTrack>,
    samples_played: u32,
    tracks_started: u32,
}

impl LogBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples_played(&self) -> u32 {
        self.samples_played
    }

    pub fn tracks_started(&self) -> u32 {
        self.tracks_started
    }
}

impl AudioBackend for LogBackend {
    fn play_sample(&mut self, effect: SoundEffect, volume: f32) {
        self.samples_played += 1;
        log::debug!("Play {:?} at {:.2}", effect, volume);
    }

    fn play_music(&mut self, track: MusicTrack, volume: f32) {
        self.music = Some(track);
        self.tracks_started += 1;
        log::info!("Music {:?} started at {:.2}", track, volume);
    }

    fn current_music(&self) -> Option<MusicTrack> {
        self.music
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::BallonKind;

    #[test]
    fn test_music_is_idempotent() {
        let mut audio = AudioManager::new(LogBackend::new(), &Settings::default());
        for _ in 0..10 {
            audio.ensure_music(MusicTrack::Bouncing);
        }
        assert_eq!(audio.backend().tracks_started(), 1);
        assert_eq!(audio.backend().current_music(), Some(MusicTrack::Bouncing));
    }

    #[test]
    fn test_collection_plays_plopp() {
        let mut audio = AudioManager::new(LogBackend::new(), &Settings::default());
        audio.handle_events(&[
            GameEvent::Restarted { deadline: 11.0 },
            GameEvent::BallonSpawned {
                id: 1,
                kind: BallonKind::Common,
            },
            GameEvent::BallonCollected {
                id: 1,
                kind: BallonKind::Common,
                points: 1,
            },
            GameEvent::BallonCollected {
                id: 2,
                kind: BallonKind::Rare,
                points: 5,
            },
        ]);
        assert_eq!(audio.backend().samples_played(), 2);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let settings = Settings {
            muted: true,
            ..Settings::default()
        };
        let mut audio = AudioManager::new(LogBackend::new(), &settings);
        audio.play(SoundEffect::Plopp);
        audio.ensure_music(MusicTrack::Bouncing);
        assert_eq!(audio.backend().samples_played(), 0);
        assert_eq!(audio.backend().tracks_started(), 0);

        audio.set_muted(false);
        audio.play(SoundEffect::Plopp);
        assert_eq!(audio.backend().samples_played(), 1);
    }
}
