//! Placement directive for the floating panel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the panel sits relative to the trigger.
///
/// The dropdown never interprets this beyond reading the [`Side`] for the
/// arrow glyph; it is handed to the [`Positioner`](crate::Positioner) as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    Top,
    TopStart,
    TopEnd,
    Right,
    RightStart,
    RightEnd,
    #[default]
    Bottom,
    BottomStart,
    BottomEnd,
    Left,
    LeftStart,
    LeftEnd,
}

/// Main axis side of a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }

    /// Whether the panel extends vertically away from the anchor.
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

/// Cross axis alignment of a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Start,
    Center,
    End,
}

impl Placement {
    pub const ALL: [Placement; 12] = [
        Placement::Top,
        Placement::TopStart,
        Placement::TopEnd,
        Placement::Right,
        Placement::RightStart,
        Placement::RightEnd,
        Placement::Bottom,
        Placement::BottomStart,
        Placement::BottomEnd,
        Placement::Left,
        Placement::LeftStart,
        Placement::LeftEnd,
    ];

    pub fn side(self) -> Side {
        match self {
            Placement::Top | Placement::TopStart | Placement::TopEnd => Side::Top,
            Placement::Right | Placement::RightStart | Placement::RightEnd => Side::Right,
            Placement::Bottom | Placement::BottomStart | Placement::BottomEnd => Side::Bottom,
            Placement::Left | Placement::LeftStart | Placement::LeftEnd => Side::Left,
        }
    }

    pub fn alignment(self) -> Alignment {
        match self {
            Placement::Top | Placement::Right | Placement::Bottom | Placement::Left => {
                Alignment::Center
            }
            Placement::TopStart
            | Placement::RightStart
            | Placement::BottomStart
            | Placement::LeftStart => Alignment::Start,
            Placement::TopEnd | Placement::RightEnd | Placement::BottomEnd | Placement::LeftEnd => {
                Alignment::End
            }
        }
    }

    pub fn from_parts(side: Side, alignment: Alignment) -> Self {
        match (side, alignment) {
            (Side::Top, Alignment::Center) => Placement::Top,
            (Side::Top, Alignment::Start) => Placement::TopStart,
            (Side::Top, Alignment::End) => Placement::TopEnd,
            (Side::Right, Alignment::Center) => Placement::Right,
            (Side::Right, Alignment::Start) => Placement::RightStart,
            (Side::Right, Alignment::End) => Placement::RightEnd,
            (Side::Bottom, Alignment::Center) => Placement::Bottom,
            (Side::Bottom, Alignment::Start) => Placement::BottomStart,
            (Side::Bottom, Alignment::End) => Placement::BottomEnd,
            (Side::Left, Alignment::Center) => Placement::Left,
            (Side::Left, Alignment::Start) => Placement::LeftStart,
            (Side::Left, Alignment::End) => Placement::LeftEnd,
        }
    }

    /// Same alignment on the opposite side.
    pub fn flipped(self) -> Self {
        Self::from_parts(self.side().opposite(), self.alignment())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::TopStart => "top-start",
            Placement::TopEnd => "top-end",
            Placement::Right => "right",
            Placement::RightStart => "right-start",
            Placement::RightEnd => "right-end",
            Placement::Bottom => "bottom",
            Placement::BottomStart => "bottom-start",
            Placement::BottomEnd => "bottom-end",
            Placement::Left => "left",
            Placement::LeftStart => "left-start",
            Placement::LeftEnd => "left-end",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown placement '{0}'")]
pub struct PlacementParseError(pub String);

impl FromStr for Placement {
    type Err = PlacementParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Placement::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PlacementParseError(s.to_string()))
    }
}
