//! Markup for the Checkbox widget.

use tapdom::Element;

use super::Checkbox;

impl Checkbox {
    /// Build the checkbox element tree from the current state.
    pub fn render(&self) -> Element {
        // Read once so indicator and aria state cannot disagree.
        let checked = self.checked();
        let disabled = self.is_disabled();

        let icon = Element::div()
            .class("checkbox-icon")
            .class_if("checkbox-checked", checked)
            .child(Element::div().class("checkbox-inner"));

        let button = Element::button()
            .id(self.id())
            .attr("role", "checkbox")
            .attr("type", "button")
            .attr("ion-button", "item-cover")
            .attr("aria-checked", checked)
            .attr_opt("aria-labelledby", self.label_id())
            .attr("aria-disabled", disabled)
            .class("item-cover")
            .disabled(disabled);

        Element::new("ion-checkbox")
            .class(format!("checkbox-{}", self.mode()))
            .class_if("checkbox-disabled", disabled)
            .child(icon)
            .child(button)
    }
}
