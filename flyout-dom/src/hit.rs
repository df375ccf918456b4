use crate::element::{Element, INVISIBLE};
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
///
/// Subtrees carrying the `invisible` class are skipped entirely.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, &|el| el.clickable && !el.disabled)
}

/// Find any visible element (clickable or not) at the given coordinates.
/// Returns the deepest element containing the point.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, &|_| true)
}

fn hit_test_element(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    if element.has_class(INVISIBLE) {
        return None;
    }

    // Children may be laid out outside their parent (floating panels), so
    // they are checked even when the parent has no rect or misses the point.
    // Reverse order: last rendered is on top.
    for child in element.child_elements().iter().rev() {
        if let Some(id) = hit_test_element(layout, child, x, y, accept) {
            return Some(id);
        }
    }

    let rect = layout.get(&element.id)?;
    if rect.contains(x, y) && accept(element) {
        log::trace!("[hit] ({x}, {y}) -> {}", element.id);
        Some(element.id.clone())
    } else {
        None
    }
}
