//! Form registrar.
//!
//! Input controls register here after their content is initialized so the
//! enclosing form can enumerate them, validate them and move focus between
//! them. A process-wide instance is available through [`Form::global`];
//! scoped instances can be created with [`Form::new`].
//!
//! # Example
//!
//! ```ignore
//! let result = form.validate(|input| {
//!     (!input.checked()).then(|| "You must accept the terms".to_string())
//! });
//!
//! if let Some(id) = result.first_invalid_input() {
//!     // focus it
//! }
//! ```

mod result;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock, RwLock};

use tapdom::{collect_focusable, Element, FocusState};

use crate::input::{InputKey, TapInput};

pub use result::{FieldError, ValidationResult};

#[derive(Default)]
struct FormInner {
    inputs: Vec<Arc<dyn TapInput>>,
    focused: Option<InputKey>,
}

/// Registry of input controls. Clones share the same registry.
#[derive(Clone, Default)]
pub struct Form {
    inner: Arc<RwLock<FormInner>>,
    next_id: Arc<AtomicUsize>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide form registrar.
    pub fn global() -> &'static Form {
        static GLOBAL: OnceLock<Form> = OnceLock::new();
        GLOBAL.get_or_init(Form::new)
    }

    /// Allocate a new numeric id, unique within this form.
    pub fn next_id(&self) -> usize {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Register an input. Registering the same control twice is a no-op;
    /// distinct controls sharing a DOM id are both kept.
    pub fn register(&self, input: Arc<dyn TapInput>) {
        let key = input.key();
        if let Ok(mut inner) = self.inner.write() {
            if inner.inputs.iter().any(|i| i.key() == key) {
                return;
            }
            log::debug!("form: register {} ({key:?})", input.input_id());
            inner.inputs.push(input);
        }
    }

    /// Remove an input. Unknown keys are ignored.
    pub fn deregister(&self, key: InputKey) {
        if let Ok(mut inner) = self.inner.write() {
            let before = inner.inputs.len();
            inner.inputs.retain(|i| i.key() != key);
            if inner.inputs.len() != before {
                log::debug!("form: deregister {key:?}");
            }
            if inner.focused == Some(key) {
                inner.focused = None;
            }
        }
    }

    /// Registered inputs in registration order.
    pub fn inputs(&self) -> Vec<Arc<dyn TapInput>> {
        self.inner
            .read()
            .map(|inner| inner.inputs.clone())
            .unwrap_or_default()
    }

    pub fn contains(&self, key: InputKey) -> bool {
        self.inner
            .read()
            .map(|inner| inner.inputs.iter().any(|i| i.key() == key))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.inputs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // -------------------------------------------------------------------------
    // Focus tracking
    // -------------------------------------------------------------------------

    pub fn set_as_focused(&self, key: InputKey) {
        if let Ok(mut inner) = self.inner.write() {
            inner.focused = Some(key);
        }
    }

    /// Clear the focused input if it is `key`.
    pub fn unset_as_focused(&self, key: InputKey) {
        if let Ok(mut inner) = self.inner.write()
            && inner.focused == Some(key)
        {
            inner.focused = None;
        }
    }

    /// DOM id of the focused input.
    pub fn focused_input(&self) -> Option<String> {
        let inner = self.inner.read().ok()?;
        let key = inner.focused?;
        inner
            .inputs
            .iter()
            .find(|i| i.key() == key)
            .map(|i| i.input_id())
    }

    /// Focus the next enabled input after `current` in the document order of
    /// `root`, wrapping around. Returns the DOM id that received focus, or
    /// `None` if focus did not move.
    pub fn tab_focus(
        &self,
        current: InputKey,
        root: &Element,
        focus: &mut FocusState,
    ) -> Option<String> {
        let inputs = self.inputs();
        let current_id = inputs.iter().find(|i| i.key() == current)?.input_id();

        let order = collect_focusable(root);
        let start = order.iter().position(|id| *id == current_id)?;

        for offset in 1..order.len() {
            let id = &order[(start + offset) % order.len()];
            let Some(next) = inputs
                .iter()
                .find(|i| i.input_id() == *id && !i.is_disabled())
            else {
                continue;
            };

            next.init_focus(root, focus);
            return (focus.focused() == Some(id.as_str())).then(|| id.clone());
        }

        None
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Run `rule` over every enabled input. The rule returns an error
    /// message for inputs that fail.
    pub fn validate<F>(&self, rule: F) -> ValidationResult
    where
        F: Fn(&dyn TapInput) -> Option<String>,
    {
        let errors: Vec<FieldError> = self
            .inputs()
            .iter()
            .filter(|input| !input.is_disabled())
            .filter_map(|input| {
                rule(input.as_ref()).map(|message| FieldError {
                    input_id: input.input_id(),
                    message,
                })
            })
            .collect();

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    /// Require every enabled input to be checked.
    pub fn require_checked(&self, message: &str) -> ValidationResult {
        self.validate(|input| (!input.checked()).then(|| message.to_string()))
    }
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("inputs", &self.len())
            .field("focused", &self.focused_input())
            .finish()
    }
}
