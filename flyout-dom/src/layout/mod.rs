mod rect;

use std::collections::HashMap;

pub use rect::Rect;

/// Screen rectangles keyed by element id.
///
/// Widgets register the rects of the nodes they own; the host uses the map
/// for hit testing.
pub type LayoutResult = HashMap<String, Rect>;
