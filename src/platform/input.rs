//! Keyboard and gamepad mapping
//!
//! Both devices feed the same signals; only the held state matters.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Physical buttons the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    Enter,
    Escape,
    PadLeft,
    PadRight,
    /// Primary gamepad face button
    PadButton0,
}

/// Buttons currently held down
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    down: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.down.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.down.remove(&key);
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    fn any_down(&self, keys: &[Key]) -> bool {
        keys.iter().any(|k| self.is_down(*k))
    }

    /// Signals for this tick
    pub fn to_tick_input(&self) -> TickInput {
        TickInput {
            turn_left: self.any_down(&[Key::ArrowLeft, Key::PadLeft]),
            turn_right: self.any_down(&[Key::ArrowRight, Key::PadRight]),
            accelerate: self.any_down(&[Key::ArrowUp, Key::PadButton0]),
            restart: self.is_down(Key::Enter),
            exit: self.is_down(Key::Escape),
            idle_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_and_pad_map_to_same_signals() {
        let mut keys = KeyState::new();
        keys.press(Key::ArrowLeft);
        keys.press(Key::PadButton0);
        let input = keys.to_tick_input();
        assert!(input.turn_left);
        assert!(input.accelerate);
        assert!(!input.turn_right);

        keys.release(Key::ArrowLeft);
        keys.press(Key::PadLeft);
        assert!(keys.to_tick_input().turn_left);
    }

    #[test]
    fn test_restart_and_exit() {
        let mut keys = KeyState::new();
        assert_eq!(keys.to_tick_input(), TickInput::default());
        keys.press(Key::Enter);
        keys.press(Key::Escape);
        let input = keys.to_tick_input();
        assert!(input.restart);
        assert!(input.exit);
    }
}
