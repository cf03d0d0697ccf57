#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are signed pixels. Positions are relative to the client area of
//! the parent container, origin at top-left.

use serde::{Deserialize, Serialize};

/// The axis a layout distributes space along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Children are placed left to right.
    #[default]
    Horizontal,
    /// Children are placed top to bottom.
    Vertical,
}

impl Orientation {
    /// The perpendicular axis.
    #[inline]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A position in parent-client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate along `orientation`.
    #[inline]
    pub const fn along(self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }
}

/// A width/height pair.
///
/// `{0, 0}` doubles as "unset" for min and max sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Build a size from its primary and cross extents.
    #[inline]
    pub const fn from_axes(orientation: Orientation, along: i32, across: i32) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(along, across),
            Orientation::Vertical => Self::new(across, along),
        }
    }

    /// Check if both dimensions are zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Extent along `orientation`.
    #[inline]
    pub const fn along(self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Extent across `orientation`.
    #[inline]
    pub const fn across(self, orientation: Orientation) -> i32 {
        self.along(orientation.cross())
    }
}

/// A rectangle in parent-client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Build a rectangle from positions and extents on the primary and
    /// cross axes of `orientation`.
    #[inline]
    pub const fn from_axes(
        orientation: Orientation,
        pos_along: i32,
        pos_across: i32,
        len_along: i32,
        len_across: i32,
    ) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(pos_along, pos_across, len_along, len_across),
            Orientation::Vertical => Self::new(pos_across, pos_along, len_across, len_along),
        }
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Copy with the size replaced, origin kept.
    #[inline]
    pub const fn with_size(self, size: Size) -> Self {
        Self::new(self.x, self.y, size.width, size.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has no area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Leading coordinate along `orientation`.
    #[inline]
    pub const fn position_along(&self, orientation: Orientation) -> i32 {
        self.origin().along(orientation)
    }

    /// Extent along `orientation`.
    #[inline]
    pub const fn extent_along(&self, orientation: Orientation) -> i32 {
        self.size().along(orientation)
    }

    /// Trailing (exclusive) coordinate along `orientation`.
    #[inline]
    pub const fn end_along(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.right(),
            Orientation::Vertical => self.bottom(),
        }
    }

    /// Copy moved so its leading edge along `orientation` sits at `pos`.
    #[inline]
    pub const fn with_position_along(self, orientation: Orientation, pos: i32) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(pos, self.y, self.width, self.height),
            Orientation::Vertical => Self::new(self.x, pos, self.width, self.height),
        }
    }

    /// Copy with the extent along `orientation` replaced.
    #[inline]
    pub const fn with_extent_along(self, orientation: Orientation, len: i32) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.x, self.y, len, self.height),
            Orientation::Vertical => Self::new(self.x, self.y, self.width, len),
        }
    }

    /// Shrink by margins on every side.
    #[inline]
    pub const fn inset(&self, margins: Margins) -> Self {
        Self::new(
            self.x + margins.left,
            self.y + margins.top,
            self.width - margins.horizontal_sum(),
            self.height - margins.vertical_sum(),
        )
    }
}

/// Padding between a container's client edge and its children.
///
/// Components must be non-negative; layouts reject other values at the
/// setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Margins {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Margins {
    /// No margins.
    pub const ZERO: Self = Self::all(0);

    /// Create margins in left, top, right, bottom order.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same margin on every side.
    #[inline]
    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Check that no component is negative.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.left >= 0 && self.top >= 0 && self.right >= 0 && self.bottom >= 0
    }

    /// Left plus right.
    #[inline]
    pub const fn horizontal_sum(&self) -> i32 {
        self.left + self.right
    }

    /// Top plus bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> i32 {
        self.top + self.bottom
    }

    /// Margin before the first child along `orientation`.
    #[inline]
    pub const fn leading(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.left,
            Orientation::Vertical => self.top,
        }
    }

    /// Margin after the last child along `orientation`.
    #[inline]
    pub const fn trailing(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.right,
            Orientation::Vertical => self.bottom,
        }
    }

    /// Leading plus trailing along `orientation`.
    #[inline]
    pub const fn sum_along(&self, orientation: Orientation) -> i32 {
        self.leading(orientation) + self.trailing(orientation)
    }
}

impl From<i32> for Margins {
    fn from(value: i32) -> Self {
        Self::all(value)
    }
}

impl From<(i32, i32, i32, i32)> for Margins {
    fn from((left, top, right, bottom): (i32, i32, i32, i32)) -> Self {
        Self::new(left, top, right, bottom)
    }
}
