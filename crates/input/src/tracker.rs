//! Polled key-down state for terminal environments.
//!
//! The simulation wants "is this key held right now", but terminals deliver
//! discrete events, and many never deliver a release at all. The tracker
//! records the last press time per action and treats a key as released once
//! no press (or auto-repeat) has refreshed it within a timeout.

use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;

use tui_raycast_types::{InputAction, InputState};

// Terminal auto-repeat refreshes a held key well inside this window; a single
// tap expires instead of sticking forever.
const DEFAULT_HOLD_TIMEOUT: Duration = Duration::from_millis(150);

/// Tracks held movement keys across polled terminal events.
#[derive(Debug, Clone)]
pub struct KeyStateTracker {
    held_since: [Option<Instant>; 4],
    hold_timeout: Duration,
}

impl KeyStateTracker {
    pub fn new() -> Self {
        Self {
            held_since: [None; 4],
            hold_timeout: DEFAULT_HOLD_TIMEOUT,
        }
    }

    pub fn with_hold_timeout(mut self, timeout: Duration) -> Self {
        self.hold_timeout = timeout;
        self
    }

    /// Record a press or auto-repeat event.
    pub fn key_down(&mut self, key: KeyEvent) {
        if let Some(action) = crate::map::map_key(key) {
            self.press(action, Instant::now());
        }
    }

    /// Record a release event (on terminals that send them).
    pub fn key_up(&mut self, key: KeyEvent) {
        if let Some(action) = crate::map::map_key(key) {
            self.release(action);
        }
    }

    /// Snapshot of the currently held actions.
    pub fn state(&self) -> InputState {
        self.state_at(Instant::now())
    }

    fn press(&mut self, action: InputAction, at: Instant) {
        self.held_since[index(action)] = Some(at);
    }

    fn release(&mut self, action: InputAction) {
        self.held_since[index(action)] = None;
    }

    fn state_at(&self, now: Instant) -> InputState {
        let mut state = InputState::default();
        for (i, held) in self.held_since.iter().enumerate() {
            if let Some(since) = held {
                if now.duration_since(*since) <= self.hold_timeout {
                    state.set(ACTIONS[i], true);
                }
            }
        }
        state
    }
}

impl Default for KeyStateTracker {
    fn default() -> Self {
        Self::new()
    }
}

const ACTIONS: [InputAction; 4] = [
    InputAction::RotateLeft,
    InputAction::RotateRight,
    InputAction::MoveForward,
    InputAction::MoveBackward,
];

fn index(action: InputAction) -> usize {
    match action {
        InputAction::RotateLeft => 0,
        InputAction::RotateRight => 1,
        InputAction::MoveForward => 2,
        InputAction::MoveBackward => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_shows_up_in_the_snapshot() {
        let mut tracker = KeyStateTracker::new();
        let now = Instant::now();

        tracker.press(InputAction::MoveForward, now);
        let state = tracker.state_at(now);
        assert!(state.forward);
        assert!(!state.backward);
        assert!(!state.rotate_left);
    }

    #[test]
    fn release_clears_the_action() {
        let mut tracker = KeyStateTracker::new();
        let now = Instant::now();

        tracker.press(InputAction::RotateLeft, now);
        tracker.release(InputAction::RotateLeft);
        assert!(!tracker.state_at(now).rotate_left);
    }

    #[test]
    fn unrefreshed_press_expires_after_the_timeout() {
        let mut tracker = KeyStateTracker::new().with_hold_timeout(Duration::from_millis(100));
        let t0 = Instant::now();

        tracker.press(InputAction::MoveBackward, t0);
        assert!(tracker.state_at(t0 + Duration::from_millis(50)).backward);
        assert!(!tracker.state_at(t0 + Duration::from_millis(150)).backward);
    }

    #[test]
    fn auto_repeat_keeps_a_key_held() {
        let mut tracker = KeyStateTracker::new().with_hold_timeout(Duration::from_millis(100));
        let t0 = Instant::now();

        tracker.press(InputAction::MoveForward, t0);
        tracker.press(InputAction::MoveForward, t0 + Duration::from_millis(80));
        assert!(tracker.state_at(t0 + Duration::from_millis(150)).forward);
    }

    #[test]
    fn independent_actions_do_not_interfere() {
        let mut tracker = KeyStateTracker::new();
        let now = Instant::now();

        tracker.press(InputAction::RotateRight, now);
        tracker.press(InputAction::MoveForward, now);
        tracker.release(InputAction::RotateRight);

        let state = tracker.state_at(now);
        assert!(!state.rotate_right);
        assert!(state.forward);
    }
}
