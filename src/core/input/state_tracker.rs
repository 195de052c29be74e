//=========================================================================
// State Tracker
//=========================================================================
//
// Input state as seen by screens on the logic thread.
//
// Tracks what is held (persistent) and what changed this tick (deltas).
// Screens and the frame driver query it with raylib-style edge
// semantics: `is_key_pressed` is true on exactly one tick per press.
//
// Frame lifecycle: begin_frame(events) → queries for the rest of the tick
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== StateTracker ========================================================

/// Held keys/buttons plus the presses and releases of the current tick.
#[derive(Debug, Default)]
pub struct StateTracker {
    //--- Persistent State -------------------------------------------------
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),
    modifiers: Modifiers,

    //--- Tick Deltas ------------------------------------------------------
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,
}

impl StateTracker {
    /// Creates a tracker with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Starts a new tick: drops last tick's deltas, then applies `batches`
    /// in arrival order.
    pub(crate) fn begin_frame(&mut self, batches: &[Vec<InputEvent>]) {
        self.clear_deltas();
        for batch in batches {
            for event in batch {
                self.process_event(event);
            }
        }
    }

    fn clear_deltas(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }

    fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key, modifiers } => {
                self.modifiers = *modifiers;
                // OS key repeat arrives as more KeyDowns; only the first counts
                if self.keys_down.insert(*key) {
                    self.keys_pressed.insert(*key);
                }
            }

            InputEvent::KeyUp { key, modifiers } => {
                self.modifiers = *modifiers;
                if self.keys_down.remove(key) {
                    self.keys_released.insert(*key);
                }
            }

            InputEvent::MouseButtonDown { button, modifiers } => {
                self.modifiers = *modifiers;
                if self.buttons_down.insert(*button) {
                    self.buttons_pressed.insert(*button);
                }
            }

            InputEvent::MouseButtonUp { button, modifiers } => {
                self.modifiers = *modifiers;
                if self.buttons_down.remove(button) {
                    self.buttons_released.insert(*button);
                }
            }

            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = (*x, *y);
            }

            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` on the tick the key went UP → DOWN.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Returns `true` while the key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` on the tick the key went DOWN → UP.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Like [`is_key_pressed`](Self::is_key_pressed) but for mouse buttons.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    /// Like [`is_key_down`](Self::is_key_down) but for mouse buttons.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Like [`is_key_released`](Self::is_key_released) but for mouse buttons.
    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }

    /// Cursor position in window pixels.
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    /// Modifier state as of the last key or button event.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Keys pressed this tick.
    pub fn keys_pressed(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_pressed.iter()
    }

    //--- Test Support -----------------------------------------------------

    #[cfg(test)]
    pub(crate) fn press_for_test(&mut self, key: KeyCode) {
        self.begin_frame(&[vec![InputEvent::KeyDown { key, modifiers: Modifiers::NONE }]]);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key, modifiers: Modifiers::NONE }
    }

    #[test]
    fn key_pressed_only_on_transition_tick() {
        let mut tracker = StateTracker::new();

        tracker.begin_frame(&[vec![key_down(KeyCode::Enter)]]);
        assert!(tracker.is_key_pressed(KeyCode::Enter));
        assert!(tracker.is_key_down(KeyCode::Enter));

        tracker.begin_frame(&[]);
        assert!(!tracker.is_key_pressed(KeyCode::Enter));
        assert!(tracker.is_key_down(KeyCode::Enter));

        tracker.begin_frame(&[vec![key_up(KeyCode::Enter)]]);
        assert!(!tracker.is_key_down(KeyCode::Enter));
        assert!(tracker.is_key_released(KeyCode::Enter));
    }

    #[test]
    fn repeated_key_down_is_not_a_new_press() {
        let mut tracker = StateTracker::new();

        tracker.begin_frame(&[vec![key_down(KeyCode::Digit1)]]);
        tracker.begin_frame(&[vec![key_down(KeyCode::Digit1)]]);

        assert!(!tracker.is_key_pressed(KeyCode::Digit1));
        assert!(tracker.is_key_down(KeyCode::Digit1));
    }

    #[test]
    fn batches_apply_in_order() {
        let mut tracker = StateTracker::new();

        tracker.begin_frame(&[
            vec![key_down(KeyCode::KeyO)],
            vec![key_up(KeyCode::KeyO)],
        ]);

        // Pressed and released within one tick still reports the press
        assert!(tracker.is_key_pressed(KeyCode::KeyO));
        assert!(tracker.is_key_released(KeyCode::KeyO));
        assert!(!tracker.is_key_down(KeyCode::KeyO));
    }

    #[test]
    fn mouse_buttons_and_position() {
        let mut tracker = StateTracker::new();

        tracker.begin_frame(&[vec![
            InputEvent::MouseMoved { x: 64.0, y: 32.0 },
            InputEvent::MouseButtonDown { button: MouseButton::Left, modifiers: Modifiers::SHIFT },
        ]]);

        assert!(tracker.is_button_pressed(MouseButton::Left));
        assert!(tracker.is_button_down(MouseButton::Left));
        assert_eq!(tracker.mouse_position(), (64.0, 32.0));
        assert_eq!(tracker.modifiers(), Modifiers::SHIFT);

        tracker.begin_frame(&[vec![InputEvent::MouseButtonUp {
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        }]]);
        assert!(tracker.is_button_released(MouseButton::Left));
        assert!(!tracker.is_button_down(MouseButton::Left));
    }

    #[test]
    fn unidentified_events_are_ignored() {
        let mut tracker = StateTracker::new();
        tracker.begin_frame(&[vec![InputEvent::Unidentified]]);
        assert_eq!(tracker.keys_pressed().count(), 0);
    }
}
