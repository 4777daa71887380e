//! Input adapter
//!
//! Raw key and pointer events collapse into the single primary action. Any
//! number of presses between two frames count as one.

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Keys the host may report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Space,
    Enter,
    Escape,
    Char(char),
}

/// Raw event from the host window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawInput {
    KeyDown(Key),
    /// Mouse click or touch
    PointerDown,
}

impl RawInput {
    /// Whether this event triggers the primary action
    pub fn is_primary(&self) -> bool {
        matches!(self, RawInput::KeyDown(Key::Space) | RawInput::PointerDown)
    }
}

/// Collects raw events between frames
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    primary: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw event; returns true if it was consumed (the host should
    /// suppress its default handling, e.g. space scrolling the page)
    pub fn push(&mut self, event: RawInput) -> bool {
        if event.is_primary() {
            self.primary = true;
            return true;
        }
        false
    }

    /// Drain the pending action into this frame's tick input
    pub fn take(&mut self) -> TickInput {
        TickInput {
            primary: std::mem::take(&mut self.primary),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_and_click_are_primary() {
        assert!(RawInput::KeyDown(Key::Space).is_primary());
        assert!(RawInput::PointerDown.is_primary());
        assert!(!RawInput::KeyDown(Key::Enter).is_primary());
        assert!(!RawInput::KeyDown(Key::Char('w')).is_primary());
    }

    #[test]
    fn test_presses_collapse_into_one() {
        let mut queue = InputQueue::new();
        assert!(queue.push(RawInput::KeyDown(Key::Space)));
        assert!(queue.push(RawInput::PointerDown));
        assert!(!queue.push(RawInput::KeyDown(Key::Escape)));

        assert!(queue.take().primary);
        assert!(!queue.take().primary);
    }
}
