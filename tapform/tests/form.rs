use std::sync::Arc;

use tapdom::{Element, FocusState};
use tapform::form::{FieldError, Form, ValidationResult};
use tapform::input::InputKey;
use tapform::redraw;
use tapform::widgets::Checkbox;

fn checkbox(form: &Form, id: &str, checked: bool, disabled: bool) -> Checkbox {
    let (tx, _rx) = redraw::channel();
    let cb = Checkbox::builder()
        .form(form.clone())
        .id(id)
        .checked(checked)
        .disabled(disabled)
        .redraw(tx)
        .build();
    cb.after_content_init();
    cb
}

fn page(boxes: &[&Checkbox]) -> Element {
    Element::div().children(boxes.iter().map(|cb| cb.render()).collect())
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_register_keeps_order_and_ignores_duplicates() {
    let form = Form::new();
    let a = checkbox(&form, "a", false, false);
    let _b = checkbox(&form, "b", false, false);

    form.register(Arc::new(a.clone()));

    let ids: Vec<String> = form.inputs().iter().map(|i| i.input_id()).collect();
    assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_deregister_unknown_key_is_ignored() {
    let form = Form::new();
    let a = checkbox(&form, "a", false, false);

    form.deregister(InputKey::new());
    assert_eq!(form.len(), 1);

    form.deregister(a.key());
    assert!(form.is_empty());
}

#[test]
fn test_controls_sharing_an_id_are_tracked_separately() {
    let form = Form::new();
    let a = checkbox(&form, "dup", true, false);
    let b = checkbox(&form, "dup", false, false);

    assert_eq!(form.len(), 2);
    assert!(form.require_checked("required").is_invalid());

    b.destroy();
    assert!(form.contains(a.key()));
    assert!(!form.contains(b.key()));
    assert!(form.require_checked("required").is_valid());
}

#[test]
fn test_clones_share_registration() {
    let form = Form::new();
    let a = checkbox(&form, "a", false, false);
    let handle = a.clone();

    handle.after_content_init();
    form.register(Arc::new(handle.clone()));
    assert_eq!(form.len(), 1);

    handle.destroy();
    assert!(form.is_empty());
}

#[test]
fn test_deregister_clears_focus() {
    let form = Form::new();
    let a = checkbox(&form, "a", false, false);

    a.on_focus();
    assert_eq!(form.focused_input().as_deref(), Some("a"));

    a.destroy();
    assert_eq!(form.focused_input(), None);
}

#[test]
fn test_next_id_is_monotonic() {
    let form = Form::new();
    let first = form.next_id();
    assert_eq!(form.next_id(), first + 1);
    assert_eq!(form.next_id(), first + 2);
}

#[test]
fn test_global_form_is_shared() {
    let a = Form::global().next_id();
    let b = Form::global().next_id();
    assert!(b > a);
}

#[test]
fn test_builder_defaults_to_global_form() {
    let (tx, _rx) = redraw::channel();
    let cb = Checkbox::builder().redraw(tx).build();
    cb.after_content_init();

    assert!(Form::global().contains(cb.key()));
    cb.destroy();
    assert!(!Form::global().contains(cb.key()));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_require_checked_reports_unchecked_inputs() {
    let form = Form::new();
    let _a = checkbox(&form, "a", true, false);
    let _b = checkbox(&form, "b", false, false);

    let result = form.require_checked("must accept");

    assert_eq!(
        result,
        ValidationResult::Invalid(vec![FieldError {
            input_id: "b".into(),
            message: "must accept".into(),
        }])
    );
    assert_eq!(result.first_invalid_input(), Some("b"));
}

#[test]
fn test_validation_skips_disabled_inputs() {
    let form = Form::new();
    let _a = checkbox(&form, "a", false, true);

    let result = form.require_checked("must accept");
    assert!(result.is_valid());
    assert!(result.errors().is_empty());
}

#[test]
fn test_custom_rule() {
    let form = Form::new();
    let _a = checkbox(&form, "a", true, false);
    let _b = checkbox(&form, "b", true, false);

    let result = form.validate(|input| (input.input_id() == "a").then(|| "nope".to_string()));

    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.first_error().map(|e| e.message.as_str()), Some("nope"));
}

// ============================================================================
// Tab focus
// ============================================================================

#[test]
fn test_tab_focus_skips_disabled_and_wraps() {
    let form = Form::new();
    let a = checkbox(&form, "a", false, false);
    let b = checkbox(&form, "b", false, true);
    let c = checkbox(&form, "c", false, false);
    let root = page(&[&a, &b, &c]);
    let mut focus = FocusState::new();

    assert_eq!(form.tab_focus(a.key(), &root, &mut focus).as_deref(), Some("c"));
    assert_eq!(focus.focused(), Some("c"));
    assert!(c.is_focused());

    assert_eq!(form.tab_focus(c.key(), &root, &mut focus).as_deref(), Some("a"));
    assert_eq!(focus.focused(), Some("a"));
}

#[test]
fn test_tab_focus_follows_document_order() {
    let form = Form::new();
    let a = checkbox(&form, "a", false, false);
    let b = checkbox(&form, "b", false, false);
    let root = Element::div()
        .child(b.render())
        .child(Element::button().id("plain"))
        .child(a.render());
    let mut focus = FocusState::new();

    // b renders before a, and the plain button is not a registered input.
    assert_eq!(form.tab_focus(b.key(), &root, &mut focus).as_deref(), Some("a"));
    assert_eq!(form.tab_focus(a.key(), &root, &mut focus).as_deref(), Some("b"));
}

#[test]
fn test_tab_focus_to_unrendered_input_does_not_move() {
    let form = Form::new();
    let a = checkbox(&form, "a", false, false);
    let _c = checkbox(&form, "c", false, false);
    let root = page(&[&a]);
    let mut focus = FocusState::new();
    focus.focus("a");

    assert_eq!(form.tab_focus(a.key(), &root, &mut focus), None);
    assert_eq!(focus.focused(), Some("a"));
}

#[test]
fn test_tab_focus_from_unknown_input() {
    let form = Form::new();
    let a = checkbox(&form, "a", false, false);
    let root = page(&[&a]);
    let mut focus = FocusState::new();

    assert_eq!(form.tab_focus(InputKey::new(), &root, &mut focus), None);
    assert_eq!(form.tab_focus(a.key(), &root, &mut focus), None);
}
