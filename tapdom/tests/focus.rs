use tapdom::{collect_focusable, Element, FocusState};

fn page() -> Element {
    Element::div()
        .id("root")
        .child(Element::button().id("a"))
        .child(Element::button().id("b").disabled(true))
        .child(Element::div().child(Element::button().id("c")))
        .child(Element::button())
}

#[test]
fn test_collect_focusable_skips_disabled_and_anonymous() {
    assert_eq!(collect_focusable(&page()), vec!["a".to_string(), "c".to_string()]);
}

#[test]
fn test_focus_reports_change_only_once() {
    let mut focus = FocusState::new();
    assert!(focus.focus("a"));
    assert!(!focus.focus("a"));
    assert_eq!(focus.focused(), Some("a"));
}

#[test]
fn test_blur_clears_focus() {
    let mut focus = FocusState::new();
    assert!(!focus.blur());
    focus.focus("a");
    assert!(focus.blur());
    assert_eq!(focus.focused(), None);
}
