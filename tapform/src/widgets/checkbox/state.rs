//! Checkbox widget state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tapdom::{Element, FocusState};
use tokio::sync::mpsc;

use crate::config::Mode;
use crate::events::InputEvent;
use crate::form::Form;
use crate::input::{BindableValue, InputKey, TapInput};
use crate::item::ListRow;
use crate::redraw::RedrawSender;

use super::builder::CheckboxBuilder;
use super::{ITEM_CHECKED_CLASS, ITEM_DISABLED_CLASS};

pub(super) struct CheckboxInner {
    pub(super) key: InputKey,
    pub(super) id: String,
    pub(super) label_id: Option<String>,
    pub(super) mode: Mode,
    pub(super) value: BindableValue<bool>,
    pub(super) item: Option<Arc<dyn ListRow>>,
    pub(super) form: Form,
    pub(super) redraw: RedrawSender,
    pub(super) focused: AtomicBool,
    pub(super) initialized: AtomicBool,
}

/// A checkbox control bound to a boolean value.
///
/// `Checkbox` is a handle: clones share the same state. Visual side effects
/// (row classes, redraw requests) start after
/// [`after_content_init`](Self::after_content_init); value changes made
/// before that are picked up by the initial sync.
#[derive(Clone)]
pub struct Checkbox {
    pub(super) inner: Arc<CheckboxInner>,
}

impl Checkbox {
    pub fn builder() -> CheckboxBuilder {
        CheckboxBuilder::new()
    }

    pub(super) fn from_inner(inner: CheckboxInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Identity of this control; shared by all clones of the handle.
    pub fn key(&self) -> InputKey {
        self.inner.key
    }

    pub fn id(&self) -> &str {
        &self.inner.id
    }

    pub fn label_id(&self) -> Option<&str> {
        self.inner.label_id.as_deref()
    }

    pub fn mode(&self) -> Mode {
        self.inner.mode
    }

    // -------------------------------------------------------------------------
    // Checked state
    // -------------------------------------------------------------------------

    pub fn checked(&self) -> bool {
        self.inner.value.get()
    }

    /// Set the checked state, notifying the bound model and subscribers.
    pub fn set_checked(&self, checked: bool) {
        if self.inner.value.set(checked) {
            log::debug!("checkbox {}: checked = {}", self.inner.id, checked);
            self.update_input();
        }
    }

    /// Force the checked state from the bound model. The model is not
    /// notified back and no change event is emitted. Applies even when
    /// disabled.
    pub fn set_checked_from_model(&self, checked: bool) {
        if self.inner.value.write_value(checked) {
            self.update_input();
        }
    }

    /// Flip the checked state through the interactive path.
    pub(super) fn toggle(&self) {
        self.set_checked(!self.checked());
    }

    // -------------------------------------------------------------------------
    // Disabled state
    // -------------------------------------------------------------------------

    pub fn is_disabled(&self) -> bool {
        self.inner.value.disabled()
    }

    pub fn set_disabled(&self, disabled: bool) {
        if !self.inner.value.set_disabled(disabled) {
            return;
        }
        if !self.is_initialized() {
            return;
        }
        if let Some(item) = &self.inner.item {
            item.set_class(ITEM_DISABLED_CLASS, disabled);
        }
        self.inner.redraw.request();
    }

    // -------------------------------------------------------------------------
    // Model binding
    // -------------------------------------------------------------------------

    /// Callback receiving the new value on every interactive change.
    pub fn register_on_change(&self, f: impl Fn(bool) + Send + Sync + 'static) {
        self.inner.value.register_on_change(move |v: &bool| f(*v));
    }

    /// Callback invoked when the control is changed or blurred.
    pub fn register_on_touched(&self, f: impl Fn() + Send + Sync + 'static) {
        self.inner.value.register_on_touched(f);
    }

    /// Receive change, focus and blur events emitted from now on.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<InputEvent<bool>> {
        self.inner.value.subscribe()
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Register with the form and sync visual state. Runs once; later calls
    /// are ignored until [`destroy`](Self::destroy).
    pub fn after_content_init(&self) {
        if self.inner.initialized.swap(true, Ordering::SeqCst) {
            return;
        }
        self.inner.form.register(Arc::new(self.clone()));
        if let Some(item) = &self.inner.item {
            item.set_class(ITEM_CHECKED_CLASS, self.checked());
            item.set_class(ITEM_DISABLED_CLASS, self.is_disabled());
        }
        self.inner.redraw.request();
    }

    /// Deregister from the form.
    pub fn destroy(&self) {
        if !self.inner.initialized.swap(false, Ordering::SeqCst) {
            return;
        }
        self.inner.focused.store(false, Ordering::SeqCst);
        self.inner.form.unset_as_focused(self.inner.key);
        self.inner.form.deregister(self.inner.key);
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.initialized.load(Ordering::SeqCst)
    }

    pub fn is_focused(&self) -> bool {
        self.inner.focused.load(Ordering::SeqCst)
    }

    /// Push the current value into the row and request one redraw.
    fn update_input(&self) {
        if !self.is_initialized() {
            return;
        }
        if let Some(item) = &self.inner.item {
            item.set_class(ITEM_CHECKED_CLASS, self.checked());
        }
        self.inner.redraw.request();
    }
}

impl TapInput for Checkbox {
    fn key(&self) -> InputKey {
        self.inner.key
    }

    fn input_id(&self) -> String {
        self.inner.id.clone()
    }

    fn checked(&self) -> bool {
        Checkbox::checked(self)
    }

    fn is_disabled(&self) -> bool {
        Checkbox::is_disabled(self)
    }

    fn init_focus(&self, root: &Element, focus: &mut FocusState) {
        Checkbox::init_focus(self, root, focus)
    }
}

impl std::fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkbox")
            .field("id", &self.inner.id)
            .field("checked", &self.checked())
            .field("disabled", &self.is_disabled())
            .field("in_item", &self.inner.item.is_some())
            .finish()
    }
}
