//! Event handling for the Checkbox widget.

use std::sync::atomic::Ordering;

use tapdom::{find_element, DomEvent, Element, Event, FocusState, Key};

use crate::events::{EventResult, InputEvent};

use super::Checkbox;

impl Checkbox {
    /// Dispatch an event targeted anywhere inside the checkbox. Focus and
    /// blur are only handled when they target the checkbox's button.
    pub fn handle_event(&self, ev: &mut DomEvent) -> EventResult {
        let targets_button = ev.event.target() == Some(self.inner.id.as_str());
        match ev.event {
            Event::Click { .. } => self.on_click(ev),
            Event::Key { .. } => self.on_key(ev),
            Event::Focus { .. } if targets_button => {
                self.on_focus();
                EventResult::Consumed
            }
            Event::Blur { .. } if targets_button => {
                self.on_blur();
                EventResult::Consumed
            }
            Event::Focus { .. } | Event::Blur { .. } => EventResult::Ignored,
        }
    }

    /// Host-level click handler: one toggle per click, whichever inner
    /// element was hit.
    pub fn on_click(&self, ev: &mut DomEvent) -> EventResult {
        if self.is_disabled() {
            return EventResult::Ignored;
        }
        ev.prevent_default();
        ev.stop_propagation();
        self.toggle();
        EventResult::Consumed
    }

    /// Space and Enter activate the button like a click.
    pub fn on_key(&self, ev: &mut DomEvent) -> EventResult {
        let Event::Key { key, modifiers, .. } = ev.event else {
            return EventResult::Ignored;
        };
        if modifiers.any() {
            return EventResult::Ignored;
        }

        match key {
            Key::Char(' ') | Key::Enter => self.on_click(ev),
            _ => EventResult::Ignored,
        }
    }

    pub fn on_focus(&self) {
        if self.inner.focused.swap(true, Ordering::SeqCst) {
            return;
        }
        self.inner.form.set_as_focused(self.inner.key);
        self.inner.value.emit(InputEvent::Focus);
    }

    pub fn on_blur(&self) {
        if !self.inner.focused.swap(false, Ordering::SeqCst) {
            return;
        }
        self.inner.form.unset_as_focused(self.inner.key);
        self.inner.value.touched();
        self.inner.value.emit(InputEvent::Blur);
    }

    /// Move focus to the checkbox's button inside `root`. Does nothing if
    /// the button is not part of the rendered tree.
    pub fn init_focus(&self, root: &Element, focus: &mut FocusState) {
        let button = find_element(root, &self.inner.id).filter(|el| el.tag == "button");
        match button {
            Some(_) => {
                if focus.focus(&self.inner.id) {
                    self.on_focus();
                }
            }
            None => log::debug!("checkbox {}: no button to focus", self.inner.id),
        }
    }

    /// Take focus away from the checkbox's button if `focus` holds it.
    pub fn blur(&self, focus: &mut FocusState) {
        if focus.focused() == Some(self.inner.id.as_str()) {
            focus.blur();
        }
        self.on_blur();
    }
}
