use std::sync::atomic::{AtomicUsize, Ordering};

use tapdom::{Element, FocusState};

/// Identity of one input control, independent of its DOM id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputKey(usize);

impl InputKey {
    pub fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for InputKey {
    fn default() -> Self {
        Self::new()
    }
}

/// An input control that can be registered with a [`Form`](crate::form::Form).
///
/// The form uses this to enumerate, validate and move focus between
/// controls without knowing their concrete types.
pub trait TapInput: Send + Sync {
    /// Identity of the control. Two handles to the same control share it.
    fn key(&self) -> InputKey;

    /// DOM id of the interactive element.
    fn input_id(&self) -> String;

    /// Boolean view of the control's value (checked state for toggles).
    fn checked(&self) -> bool;

    /// Whether interactive changes are blocked.
    fn is_disabled(&self) -> bool;

    /// Move focus to the control's interactive element inside `root`.
    fn init_focus(&self, root: &Element, focus: &mut FocusState);
}
