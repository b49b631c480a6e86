//! List-row host for inputs.
//!
//! A control nested in a row pushes state classes onto the row (for
//! example `item-checkbox-checked`) so the whole row can be styled.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use tapdom::Element;

use crate::form::Form;

/// Capability a control needs from an enclosing list row.
pub trait ListRow: Send + Sync {
    /// Add (`enabled == true`) or remove a class on the row element.
    fn set_class(&self, name: &str, enabled: bool);

    /// Record that an input of `kind` lives in this row and return an id
    /// suffix for it. Adds the class `item-{kind}`.
    fn register_input(&self, kind: &str) -> String;

    /// Id of the row's visible label, if it has one.
    fn label_id(&self) -> Option<String>;
}

/// A list row (`ion-item`).
#[derive(Debug)]
pub struct Item {
    id: usize,
    classes: RwLock<Vec<String>>,
    inputs: AtomicUsize,
    has_label: bool,
}

impl Item {
    /// Create a row without a label, taking its id from `form`.
    pub fn new(form: &Form) -> Self {
        Self {
            id: form.next_id(),
            classes: RwLock::new(vec!["item".to_string()]),
            inputs: AtomicUsize::new(0),
            has_label: false,
        }
    }

    /// Create a row with a visible label.
    pub fn with_label(form: &Form) -> Self {
        Self {
            has_label: true,
            ..Self::new(form)
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.read().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes
            .read()
            .map(|c| c.iter().any(|n| n == name))
            .unwrap_or(false)
    }

    /// Render the row element, wrapping `content`.
    pub fn render(&self, content: Element) -> Element {
        let mut row = Element::new("ion-item");
        for class in self.classes() {
            row.set_class(class, true);
        }
        row.child(content)
    }
}

impl ListRow for Item {
    fn set_class(&self, name: &str, enabled: bool) {
        if let Ok(mut classes) = self.classes.write() {
            let existing = classes.iter().position(|c| c == name);
            match (existing, enabled) {
                (None, true) => classes.push(name.to_string()),
                (Some(idx), false) => {
                    classes.remove(idx);
                }
                _ => {}
            }
        }
    }

    fn register_input(&self, kind: &str) -> String {
        let n = self.inputs.fetch_add(1, Ordering::SeqCst);
        self.set_class(&format!("item-{kind}"), true);
        format!("{}-{}", self.id, n)
    }

    fn label_id(&self) -> Option<String> {
        self.has_label.then(|| format!("lbl-{}", self.id))
    }
}
