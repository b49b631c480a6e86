use tapdom::{find_by_tag, find_element, to_markup, Element};

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_class_if_adds_and_removes() {
    let el = Element::div().class("a").class("b").class_if("a", false);
    assert_eq!(el.classes, vec!["b".to_string()]);

    let el = el.class_if("c", true).class("c");
    assert_eq!(el.classes, vec!["b".to_string(), "c".to_string()]);
}

#[test]
fn test_attr_replaces_existing_value_in_place() {
    let el = Element::button()
        .attr("role", "checkbox")
        .attr("aria-checked", false)
        .attr("aria-checked", true);

    assert_eq!(el.attr_value("aria-checked"), Some("true"));
    assert_eq!(el.attributes.len(), 2);
    assert_eq!(el.attributes[1].0, "aria-checked");
}

#[test]
fn test_attr_opt_skips_missing_value() {
    let none: Option<&str> = None;
    let el = Element::button()
        .attr_opt("aria-labelledby", none)
        .attr_opt("title", Some("x"));

    assert_eq!(el.attr_value("aria-labelledby"), None);
    assert_eq!(el.attr_value("title"), Some("x"));
}

#[test]
fn test_button_is_focusable_by_default() {
    assert!(Element::button().focusable);
    assert!(!Element::div().focusable);
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_find_element_nested() {
    let root = Element::new("page").id("root").child(
        Element::div()
            .id("outer")
            .child(Element::button().id("inner")),
    );

    assert_eq!(find_element(&root, "inner").map(|e| e.tag.as_str()), Some("button"));
    assert_eq!(find_element(&root, "root").map(|e| e.tag.as_str()), Some("page"));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_by_tag_returns_first_in_document_order() {
    let root = Element::div()
        .child(Element::div().child(Element::button().id("first")))
        .child(Element::button().id("second"));

    let found = find_by_tag(&root, "button").and_then(|e| e.id.as_deref());
    assert_eq!(found, Some("first"));
    assert!(find_by_tag(&root, "input").is_none());
}

// ============================================================================
// Markup
// ============================================================================

#[test]
fn test_markup_order_id_attrs_class() {
    let el = Element::button()
        .id("cb-1")
        .attr("role", "checkbox")
        .attr("aria-checked", true)
        .class("item-cover");

    assert_eq!(
        to_markup(&el),
        r#"<button id="cb-1" role="checkbox" aria-checked="true" class="item-cover"></button>"#
    );
}

#[test]
fn test_markup_nested_children_and_text() {
    let el = Element::div()
        .class("outer")
        .child(Element::div().class("inner"))
        .child(Element::new("span").text("a & b"));

    assert_eq!(
        to_markup(&el),
        r#"<div class="outer"><div class="inner"></div><span>a &amp; b</span></div>"#
    );
}
