/// Custom event kind the host sends when the canvas is resized (`a` = width, `b` = height).
pub const CUSTOM_RESIZE: u32 = 99;

/// Input event types the engine understands.
/// Positions are canvas pixels, origin top-left, Y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began.
    PointerDown { x: f32, y: f32 },
    /// A touch/click ended.
    PointerUp { x: f32, y: f32 },
    /// A touch/cursor moved.
    PointerMove { x: f32, y: f32 },
    /// The pointer left the canvas.
    PointerLeave,
    /// Wheel scroll; positive `delta_y` scrolls down (away from the user).
    Wheel { delta_y: f32 },
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// A custom event from the UI layer.
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// The host writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take all pending events, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::Wheel { delta_y: -100.0 });
        q.push(InputEvent::PointerLeave);
        assert_eq!(q.len(), 3);
        let events = q.drain();
        assert_eq!(events[1], InputEvent::Wheel { delta_y: -100.0 });
        assert!(q.is_empty());
    }

    #[test]
    fn iter_preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { x: 1.0, y: 1.0 });
        q.push(InputEvent::Custom { kind: 99, a: 1280.0, b: 720.0, c: 0.0 });
        let kinds: Vec<bool> = q
            .iter()
            .map(|e| matches!(e, InputEvent::Custom { .. }))
            .collect();
        assert_eq!(kinds, vec![false, true]);
        assert_eq!(q.len(), 2);
    }
}
