use std::sync::{Arc, RwLock};

use tokio::sync::mpsc;

use crate::events::InputEvent;
use crate::state::State;

/// Callback invoked with the new value after an interactive change.
pub type ChangeCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Callback invoked when the control is touched (changed or blurred).
pub type TouchedCallback = Arc<dyn Fn() + Send + Sync>;

/// A value slot shared between a control and its bound model.
///
/// Two write paths exist:
/// - [`set`](Self::set) for interactive changes: notifies the bound model
///   and emits [`InputEvent::Change`].
/// - [`write_value`](Self::write_value) for model pushes: updates silently
///   so the model never receives its own write back.
///
/// Both skip writes equal to the current value.
pub struct BindableValue<T> {
    value: State<T>,
    disabled: State<bool>,
    on_change: Arc<RwLock<Option<ChangeCallback<T>>>>,
    on_touched: Arc<RwLock<Option<TouchedCallback>>>,
    subscribers: Arc<RwLock<Vec<mpsc::UnboundedSender<InputEvent<T>>>>>,
}

impl<T> BindableValue<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(value: T) -> Self {
        Self {
            value: State::new(value),
            disabled: State::new(false),
            on_change: Arc::new(RwLock::new(None)),
            on_touched: Arc::new(RwLock::new(None)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Interactive write. Returns true if the value changed.
    pub fn set(&self, value: T) -> bool {
        if !self.value.replace_if_changed(value.clone()) {
            return false;
        }

        // Clone the callbacks out so none of our locks are held while they
        // run; a callback may write back into this value.
        let on_change = self.on_change.read().ok().and_then(|g| g.clone());
        if let Some(cb) = on_change {
            cb(&value);
        }
        self.touched();
        self.emit(InputEvent::Change(value));
        true
    }

    /// Model write. Returns true if the value changed.
    pub fn write_value(&self, value: T) -> bool {
        self.value.replace_if_changed(value)
    }

    // -------------------------------------------------------------------------
    // Disabled
    // -------------------------------------------------------------------------

    pub fn disabled(&self) -> bool {
        self.disabled.get()
    }

    /// Returns true if the flag changed.
    pub fn set_disabled(&self, disabled: bool) -> bool {
        self.disabled.replace_if_changed(disabled)
    }

    // -------------------------------------------------------------------------
    // Model binding
    // -------------------------------------------------------------------------

    pub fn register_on_change(&self, f: impl Fn(&T) + Send + Sync + 'static) {
        if let Ok(mut guard) = self.on_change.write() {
            *guard = Some(Arc::new(f));
        }
    }

    pub fn register_on_touched(&self, f: impl Fn() + Send + Sync + 'static) {
        if let Ok(mut guard) = self.on_touched.write() {
            *guard = Some(Arc::new(f));
        }
    }

    /// Invoke the touched callback, if any.
    pub fn touched(&self) {
        let on_touched = self.on_touched.read().ok().and_then(|g| g.clone());
        if let Some(cb) = on_touched {
            cb();
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Subscribe to events emitted from now on.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<InputEvent<T>> {
        let (tx, rx) = mpsc::unbounded_channel();
        if let Ok(mut subs) = self.subscribers.write() {
            subs.push(tx);
        }
        rx
    }

    /// Deliver an event to every live subscriber, dropping closed ones.
    pub fn emit(&self, event: InputEvent<T>) {
        if let Ok(mut subs) = self.subscribers.write() {
            subs.retain(|tx| tx.send(event.clone()).is_ok());
        }
    }
}

impl<T> Clone for BindableValue<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            disabled: self.disabled.clone(),
            on_change: Arc::clone(&self.on_change),
            on_touched: Arc::clone(&self.on_touched),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<T: std::fmt::Debug + Clone> std::fmt::Debug for BindableValue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindableValue")
            .field("value", &self.value.get())
            .field("disabled", &self.disabled.get())
            .finish_non_exhaustive()
    }
}
