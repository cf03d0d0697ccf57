#![forbid(unsafe_code)]

//! Per-axis grow/shrink permissions.

use bitflags::bitflags;

use crate::geometry::Orientation;

bitflags! {
    /// Which directions a widget accepts being resized in, relative to its
    /// preferred size.
    ///
    /// An empty set means the widget is rigid on both axes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LayoutFlags: u8 {
        const SHRINK_HORZ = 0b0001;
        const GROW_HORZ   = 0b0010;
        const SHRINK_VERT = 0b0100;
        const GROW_VERT   = 0b1000;
    }
}

impl Default for LayoutFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl LayoutFlags {
    /// The shrink flag for `orientation`.
    #[inline]
    pub const fn shrink(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Self::SHRINK_HORZ,
            Orientation::Vertical => Self::SHRINK_VERT,
        }
    }

    /// The grow flag for `orientation`.
    #[inline]
    pub const fn grow(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Self::GROW_HORZ,
            Orientation::Vertical => Self::GROW_VERT,
        }
    }

    #[inline]
    pub const fn can_shrink(self, orientation: Orientation) -> bool {
        self.contains(Self::shrink(orientation))
    }

    #[inline]
    pub const fn can_grow(self, orientation: Orientation) -> bool {
        self.contains(Self::grow(orientation))
    }
}
