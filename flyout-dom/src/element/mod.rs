mod content;
mod node;
mod role;

pub use content::Content;
pub use node::Element;
pub use role::Role;

/// Class marking a subtree as hidden. Hidden subtrees stay in the tree but
/// are skipped by hit testing.
pub const INVISIBLE: &str = "invisible";

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_elements_mut()
        .iter_mut()
        .find_map(|child| find_element_mut(child, id))
}

/// All elements with the given role, in document order.
pub fn find_all_by_role(root: &Element, role: Role) -> Vec<&Element> {
    let mut found = Vec::new();
    walk(root, &mut |el| {
        if el.role == role {
            found.push(el);
        }
    });
    found
}

/// First element whose `data-testid` attribute equals `test_id`.
pub fn find_by_test_id<'a>(root: &'a Element, test_id: &str) -> Option<&'a Element> {
    find_first(root, &|el| el.get_attr("data-testid") == Some(test_id))
}

/// First element, in document order, whose own text equals `text`.
pub fn find_by_text<'a>(root: &'a Element, text: &str) -> Option<&'a Element> {
    find_first(root, &|el| matches!(&el.content, Content::Text(t) if t == text))
}

/// Ancestor chain from `root` down to the element with `id`, inclusive.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(vec![root]);
    }

    for child in root.child_elements() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root);
            return Some(path);
        }
    }

    None
}

/// Whether the element `id` is `ancestor_id` or lies inside its subtree.
pub fn is_within(root: &Element, ancestor_id: &str, id: &str) -> bool {
    find_element(root, ancestor_id).is_some_and(|ancestor| find_element(ancestor, id).is_some())
}

/// Nearest clickable element on the path to `id`, starting at `id` itself.
pub fn closest_clickable<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    path_to(root, id)?.into_iter().rev().find(|el| el.clickable)
}

fn find_first<'a>(root: &'a Element, pred: &dyn Fn(&Element) -> bool) -> Option<&'a Element> {
    if pred(root) {
        return Some(root);
    }
    root.child_elements()
        .iter()
        .find_map(|child| find_first(child, pred))
}

fn walk<'a>(element: &'a Element, visit: &mut dyn FnMut(&'a Element)) {
    visit(element);
    for child in element.child_elements() {
        walk(child, visit);
    }
}
