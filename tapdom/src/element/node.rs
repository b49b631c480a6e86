use super::Content;

/// A node in the rendered markup tree.
///
/// Attributes and classes keep insertion order so serialized output is
/// stable. Setting an attribute or class that already exists replaces it
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub tag: String,
    pub id: Option<String>,

    // Content
    pub content: Content,

    // Presentation
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,

    // Interaction
    pub focusable: bool,
    /// Disabled elements are skipped by focus navigation.
    pub disabled: bool,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    /// A native button. Buttons are focusable by default.
    pub fn button() -> Self {
        Self {
            tag: "button".into(),
            focusable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.content = Content::Children(children);
        self
    }

    // Presentation
    pub fn class(self, name: impl Into<String>) -> Self {
        self.class_if(name, true)
    }

    /// Add the class when `enabled` is true, remove it otherwise.
    pub fn class_if(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.set_class(name, enabled);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set the attribute only when a value is present.
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // In-place mutation

    pub fn set_class(&mut self, name: impl Into<String>, enabled: bool) {
        let name = name.into();
        let existing = self.classes.iter().position(|c| *c == name);
        match (existing, enabled) {
            (None, true) => self.classes.push(name),
            (Some(idx), false) => {
                self.classes.remove(idx);
            }
            _ => {}
        }
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl ToString) {
        let name = name.into();
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    // Queries

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }
}
