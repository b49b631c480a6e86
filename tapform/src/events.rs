//! Widget event types.

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Notification emitted by an input control to its subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent<T> {
    /// Value changed through user interaction.
    Change(T),
    /// Control gained focus.
    Focus,
    /// Control lost focus.
    Blur,
}
