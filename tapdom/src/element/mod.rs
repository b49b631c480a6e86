mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find the first element with the given tag, depth first.
pub fn find_by_tag<'a>(root: &'a Element, tag: &str) -> Option<&'a Element> {
    if root.tag == tag {
        return Some(root);
    }

    root.content
        .children()
        .iter()
        .find_map(|child| find_by_tag(child, tag))
}
