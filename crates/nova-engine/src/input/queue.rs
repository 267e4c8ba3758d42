use super::state::Key;

/// Raw input as the host forwards it, in stage coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    /// Release completes a click.
    PointerUp { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    /// DOM `keyCode`.
    KeyDown { key_code: u32 },
    KeyUp { key_code: u32 },
}

impl InputEvent {
    pub fn key_down(key: Key) -> Self {
        InputEvent::KeyDown { key_code: key.code() }
    }

    pub fn key_up(key: Key) -> Self {
        InputEvent::KeyUp { key_code: key.code() }
    }
}

/// Events received between two frames.
///
/// The host pushes as DOM events fire; the runner drains the queue into the
/// frame's [`InputState`](super::state::InputState) before any update runs.
/// A stalled tab can pile up events, so the queue is bounded and drops the
/// newest once full. Key releases are always kept: losing one would leave
/// the key held in [`InputState`](super::state::InputState) forever.
pub struct InputQueue {
    events: Vec<InputEvent>,
    capacity: usize,
    dropped: u64,
}

impl InputQueue {
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity.min(64)),
            capacity,
            dropped: 0,
        }
    }

    /// Queue an event. Returns false if the queue was full and the event dropped.
    pub fn push(&mut self, event: InputEvent) -> bool {
        let release = matches!(event, InputEvent::KeyUp { .. });
        if self.events.len() >= self.capacity && !release {
            if self.dropped == 0 {
                log::warn!("input queue full ({} events), dropping input", self.capacity);
            }
            self.dropped += 1;
            return false;
        }
        self.events.push(event);
        true
    }

    /// Take every pending event in arrival order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, InputEvent> {
        self.events.drain(..)
    }

    /// Discard pending events, e.g. while content is still loading.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Events lost to overflow since creation.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
