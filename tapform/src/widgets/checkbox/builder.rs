use std::sync::Arc;

use crate::config::{Config, Mode};
use crate::form::Form;
use crate::input::{BindableValue, InputKey};
use crate::item::ListRow;
use crate::redraw::RedrawSender;

use super::state::{Checkbox, CheckboxInner};

/// Typestate marker: builder needs a redraw sender.
pub struct NeedsRedraw;

/// Typestate marker: builder has a redraw sender.
pub struct HasRedraw(RedrawSender);

/// A checkbox builder.
///
/// Uses typestate pattern to enforce `redraw()` is called before `build()`.
///
/// # Example
///
/// ```ignore
/// let (redraw, _rx) = tapform::redraw::channel();
/// let cb = Checkbox::builder()
///     .form(form.clone())
///     .item(row.clone())
///     .checked(true)
///     .redraw(redraw)
///     .build();
/// cb.after_content_init();
/// ```
pub struct CheckboxBuilder<R = NeedsRedraw> {
    redraw: R,
    id: Option<String>,
    form: Option<Form>,
    mode: Mode,
    item: Option<Arc<dyn ListRow>>,
    checked: bool,
    disabled: bool,
}

impl Default for CheckboxBuilder<NeedsRedraw> {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckboxBuilder<NeedsRedraw> {
    pub fn new() -> Self {
        Self {
            redraw: NeedsRedraw,
            id: None,
            form: None,
            mode: Mode::default(),
            item: None,
            checked: false,
            disabled: false,
        }
    }

    /// Set the redraw sender. Required before calling `build()`.
    pub fn redraw(self, sender: RedrawSender) -> CheckboxBuilder<HasRedraw> {
        CheckboxBuilder {
            redraw: HasRedraw(sender),
            id: self.id,
            form: self.form,
            mode: self.mode,
            item: self.item,
            checked: self.checked,
            disabled: self.disabled,
        }
    }
}

impl<R> CheckboxBuilder<R> {
    /// Override the generated DOM id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Register with `form` instead of the global registrar.
    pub fn form(mut self, form: Form) -> Self {
        self.form = Some(form);
        self
    }

    pub fn config(mut self, config: &Config) -> Self {
        self.mode = config.mode;
        self
    }

    /// Nest the checkbox in a list row.
    pub fn item(mut self, item: Arc<dyn ListRow>) -> Self {
        self.item = Some(item);
        self
    }

    /// Initial checked state.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Initial disabled state.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl CheckboxBuilder<HasRedraw> {
    pub fn build(self) -> Checkbox {
        let form = self.form.unwrap_or_else(|| Form::global().clone());

        let row_input_id = self.item.as_ref().map(|item| item.register_input("checkbox"));
        let id = match (self.id, row_input_id) {
            (Some(id), _) => id,
            (None, Some(row_id)) => format!("checkbox-{row_id}"),
            (None, None) => format!("checkbox-{}", form.next_id()),
        };
        let label_id = self.item.as_ref().and_then(|item| item.label_id());

        let value = BindableValue::new(self.checked);
        value.set_disabled(self.disabled);

        Checkbox::from_inner(CheckboxInner {
            key: InputKey::new(),
            id,
            label_id,
            mode: self.mode,
            value,
            item: self.item,
            form,
            redraw: self.redraw.0,
            focused: Default::default(),
            initialized: Default::default(),
        })
    }
}
