mod common;

use common::{test_dropdown, ANCHOR, SCREEN};
use flyout::{AnchoredPositioner, Dropdown, PositionError, Positioner};
use flyout::Placement::*;
use flyout_dom::{LayoutResult, Rect};

fn place(anchor: Rect, size: (u16, u16), placement: flyout::Placement) -> Rect {
    AnchoredPositioner::new(SCREEN)
        .compute_position(anchor, size, placement)
        .unwrap()
}

// ============================================================================
// AnchoredPositioner
// ============================================================================

#[test]
fn test_bottom_alignments() {
    let anchor = Rect::new(10, 5, 12, 1);

    assert_eq!(place(anchor, (20, 6), BottomStart), Rect::new(10, 6, 20, 6));
    assert_eq!(place(anchor, (20, 6), Bottom), Rect::new(6, 6, 20, 6));
    assert_eq!(place(anchor, (20, 6), BottomEnd), Rect::new(2, 6, 20, 6));
}

#[test]
fn test_top_placement() {
    let anchor = Rect::new(10, 10, 12, 1);
    assert_eq!(place(anchor, (20, 6), TopStart), Rect::new(10, 4, 20, 6));
}

#[test]
fn test_right_placements() {
    let anchor = Rect::new(10, 5, 12, 1);

    assert_eq!(place(anchor, (20, 6), RightStart), Rect::new(22, 5, 20, 6));
    // Centered: 5 + (1 - 6) / 2
    assert_eq!(place(anchor, (20, 6), Right), Rect::new(22, 3, 20, 6));
    assert_eq!(place(anchor, (20, 6), RightEnd), Rect::new(22, 0, 20, 6));
}

#[test]
fn test_bottom_flips_to_top() {
    let anchor = Rect::new(10, 20, 12, 1);
    assert_eq!(place(anchor, (20, 6), BottomStart), Rect::new(10, 14, 20, 6));
}

#[test]
fn test_left_flips_to_right() {
    let anchor = Rect::new(2, 5, 6, 1);
    assert_eq!(place(anchor, (10, 3), LeftStart), Rect::new(8, 5, 10, 3));
}

#[test]
fn test_clamped_when_neither_side_fits() {
    let positioner = AnchoredPositioner::new(Rect::new(0, 0, 20, 10));
    let rect = positioner
        .compute_position(Rect::new(5, 4, 4, 1), (10, 8), Bottom)
        .unwrap();

    assert_eq!(rect, Rect::new(2, 2, 10, 8));
}

#[test]
fn test_oversized_panel_is_constrained() {
    let rect = place(Rect::new(10, 5, 12, 1), (200, 50), Bottom);
    assert_eq!(rect, SCREEN);
}

#[test]
fn test_every_placement_stays_on_screen() {
    let anchor = Rect::new(35, 11, 10, 1);
    for placement in flyout::Placement::ALL {
        let rect = place(anchor, (15, 5), placement);
        assert!(SCREEN.encloses(rect), "{placement} produced {rect:?}");
    }
}

#[test]
fn test_empty_screen_is_an_error() {
    let positioner = AnchoredPositioner::new(Rect::default());
    assert_eq!(
        positioner.compute_position(ANCHOR, (10, 3), Bottom),
        Err(PositionError::EmptyScreen)
    );
}

#[test]
fn test_anchor_outside_screen_is_an_error() {
    let anchor = Rect::new(100, 100, 5, 1);
    let err = AnchoredPositioner::new(SCREEN)
        .compute_position(anchor, (10, 3), Bottom)
        .unwrap_err();

    assert_eq!(err, PositionError::AnchorOutsideScreen { anchor, screen: SCREEN });
    assert!(err.to_string().contains("outside the screen"));
}

// ============================================================================
// Dropdown geometry
// ============================================================================

#[test]
fn test_panel_size_fits_widest_row() {
    // "name@flowbite.com" is the widest row; 7 rows including the divider
    assert_eq!(test_dropdown().panel_size(), (19, 7));
}

#[test]
fn test_panel_size_counts_wide_glyphs() {
    let dropdown = Dropdown::new("Files").item(flyout::DropdownItem::new("保存").icon("💾"));
    // "💾 保存" is 2 + 1 + 4 columns
    assert_eq!(dropdown.panel_size(), (9, 1));
}

#[test]
fn test_reposition_stores_rect() {
    let mut dropdown = test_dropdown();
    assert_eq!(dropdown.panel_rect(), None);

    let rect = dropdown
        .reposition(ANCHOR, &AnchoredPositioner::new(SCREEN))
        .unwrap();

    assert_eq!(dropdown.panel_rect(), Some(rect));
    assert_eq!(rect, Rect::new(22, 0, 19, 7));
}

#[test]
fn test_failed_reposition_keeps_previous_rect() {
    let mut dropdown = test_dropdown();
    let first = dropdown
        .reposition(ANCHOR, &AnchoredPositioner::new(SCREEN))
        .unwrap();

    let result = dropdown.reposition(ANCHOR, &AnchoredPositioner::new(Rect::default()));

    assert_eq!(result, Err(PositionError::EmptyScreen));
    assert_eq!(dropdown.panel_rect(), Some(first));
}

#[test]
fn test_visibility_does_not_wait_on_position() {
    let dropdown = test_dropdown();
    dropdown.toggle();

    let tree = dropdown.build();
    let panel = flyout_dom::element::find_element(&tree, &dropdown.panel_id()).unwrap();

    assert!(dropdown.panel_rect().is_none());
    assert!(!panel.has_class(flyout_dom::INVISIBLE));
}

#[test]
fn test_layout_registers_rows() {
    let mut dropdown = test_dropdown();
    let panel = dropdown
        .reposition(ANCHOR, &AnchoredPositioner::new(SCREEN))
        .unwrap();

    let mut layout = LayoutResult::new();
    dropdown.layout(ANCHOR, &mut layout);

    assert_eq!(layout.get("menu-trigger"), Some(&ANCHOR));
    assert_eq!(layout.get("menu-button"), Some(&ANCHOR));
    assert_eq!(layout.get("menu-panel"), Some(&panel));
    // Header takes rows 0-1, divider row 5
    let rows: Vec<u16> = (0..4)
        .map(|i| layout[&format!("menu-item-{i}")].y - panel.y)
        .collect();
    assert_eq!(rows, vec![2, 3, 4, 6]);
    assert_eq!(layout["menu-item-0"].x, panel.x + 1);
    assert_eq!(layout["menu-item-0"].width, panel.width - 2);
}

#[test]
fn test_layout_without_position_skips_panel() {
    let dropdown = test_dropdown();
    let mut layout = LayoutResult::new();
    dropdown.layout(ANCHOR, &mut layout);

    assert!(layout.contains_key("menu-button"));
    assert!(!layout.contains_key("menu-panel"));
}
