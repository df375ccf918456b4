//! Panel positioning.
//!
//! The dropdown hands the trigger's rect, the panel size and its
//! [`Placement`] to a [`Positioner`] and applies whatever rect comes back.

use flyout_dom::Rect;
use thiserror::Error;

use crate::placement::{Alignment, Placement, Side};

/// Errors from a [`Positioner`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    /// There is no area to place the panel in.
    #[error("screen area is empty")]
    EmptyScreen,

    /// The anchor's origin lies outside the screen.
    #[error("anchor {anchor:?} lies outside the screen {screen:?}")]
    AnchorOutsideScreen {
        /// The trigger rect.
        anchor: Rect,
        /// The available area.
        screen: Rect,
    },
}

/// Computes where a floating panel goes.
pub trait Positioner {
    fn compute_position(
        &self,
        anchor: Rect,
        panel_size: (u16, u16),
        placement: Placement,
    ) -> Result<Rect, PositionError>;
}

/// Places the panel against the anchor on the requested side.
///
/// Takes into account:
/// - The cross axis alignment (start, center, end)
/// - Screen bounds (flips to the opposite side if the panel doesn't fit,
///   then clamps into the screen)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchoredPositioner {
    screen: Rect,
}

impl AnchoredPositioner {
    pub fn new(screen: Rect) -> Self {
        Self { screen }
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    /// Origin of the panel for `side` and `alignment`, unclamped.
    fn origin(anchor: Rect, (width, height): (i32, i32), side: Side, alignment: Alignment) -> (i32, i32) {
        let (ax, ay) = (i32::from(anchor.x), i32::from(anchor.y));
        let (aw, ah) = (i32::from(anchor.width), i32::from(anchor.height));

        let cross = |start: i32, anchor_len: i32, len: i32| match alignment {
            Alignment::Start => start,
            Alignment::Center => start + (anchor_len - len) / 2,
            Alignment::End => start + anchor_len - len,
        };

        match side {
            Side::Top => (cross(ax, aw, width), ay - height),
            Side::Bottom => (cross(ax, aw, width), ay + ah),
            Side::Left => (ax - width, cross(ay, ah, height)),
            Side::Right => (ax + aw, cross(ay, ah, height)),
        }
    }

    /// Whether the panel fits on the screen along the main axis of `side`.
    fn fits(&self, origin: (i32, i32), (width, height): (i32, i32), side: Side) -> bool {
        let screen = self.screen;
        if side.is_vertical() {
            origin.1 >= i32::from(screen.y) && origin.1 + height <= i32::from(screen.bottom())
        } else {
            origin.0 >= i32::from(screen.x) && origin.0 + width <= i32::from(screen.right())
        }
    }
}

impl Positioner for AnchoredPositioner {
    fn compute_position(
        &self,
        anchor: Rect,
        panel_size: (u16, u16),
        placement: Placement,
    ) -> Result<Rect, PositionError> {
        let screen = self.screen;
        if screen.is_empty() {
            return Err(PositionError::EmptyScreen);
        }
        if !screen.contains(anchor.x, anchor.y) {
            return Err(PositionError::AnchorOutsideScreen { anchor, screen });
        }

        // Constrain dimensions to screen
        let width = panel_size.0.min(screen.width);
        let height = panel_size.1.min(screen.height);
        let size = (i32::from(width), i32::from(height));

        let side = placement.side();
        let alignment = placement.alignment();
        let preferred = Self::origin(anchor, size, side, alignment);
        let origin = if self.fits(preferred, size, side) {
            preferred
        } else {
            let flipped = Self::origin(anchor, size, side.opposite(), alignment);
            if self.fits(flipped, size, side.opposite()) {
                log::trace!("[position] {placement} flipped to {}", placement.flipped());
                flipped
            } else {
                preferred
            }
        };

        let x = clamp_axis(origin.0, size.0, screen.x, screen.width);
        let y = clamp_axis(origin.1, size.1, screen.y, screen.height);
        Ok(Rect::new(x, y, width, height))
    }
}

/// Clamp `pos` so `[pos, pos + len)` stays within `[start, start + extent)`.
fn clamp_axis(pos: i32, len: i32, start: u16, extent: u16) -> u16 {
    let min = i32::from(start);
    let max = (min + i32::from(extent) - len).max(min);
    // In range of u16 after clamping to screen bounds
    u16::try_from(pos.clamp(min, max)).unwrap_or(start)
}
