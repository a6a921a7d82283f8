use crate::keypad::KeyPress;
use crossterm::event::KeyEvent;

/// Widgets that turn terminal key events into keypad presses.
pub(crate) trait EventWidget {
    fn on_key_event(&mut self, key: KeyEvent) -> Option<KeyPress>;
}
