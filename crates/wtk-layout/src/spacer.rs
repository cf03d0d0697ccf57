#![forbid(unsafe_code)]

//! Invisible filler widgets.

use std::rc::Rc;

use wtk_core::geometry::{Rect, Size};
use wtk_core::layout_flags::LayoutFlags;

use crate::container::Container;
use crate::error::Result;
use crate::widget::{Widget, WidgetBase};

/// Takes up space in a box layout without drawing anything.
///
/// Expanding spacers have no preferred size and soak up surplus along one
/// axis; fixed spacers reserve an exact extent and never resize along it.
#[derive(Debug)]
pub struct Spacer {
    base: WidgetBase,
    preferred: Size,
    flags: LayoutFlags,
}

impl Spacer {
    pub fn new(preferred: Size, flags: LayoutFlags) -> Rc<Self> {
        Rc::new(Self {
            base: WidgetBase::new(),
            preferred,
            flags,
        })
    }

    /// Grows horizontally, shrinks on both axes.
    pub fn horizontal() -> Rc<Self> {
        Self::new(
            Size::ZERO,
            LayoutFlags::GROW_HORZ | LayoutFlags::SHRINK_HORZ | LayoutFlags::SHRINK_VERT,
        )
    }

    /// Grows vertically, shrinks on both axes.
    pub fn vertical() -> Rc<Self> {
        Self::new(
            Size::ZERO,
            LayoutFlags::SHRINK_HORZ | LayoutFlags::GROW_VERT | LayoutFlags::SHRINK_VERT,
        )
    }

    /// Exactly `width` pixels wide.
    pub fn fixed_horizontal(width: i32) -> Rc<Self> {
        Self::new(Size::new(width, 0), LayoutFlags::empty())
    }

    /// Exactly `height` pixels tall.
    pub fn fixed_vertical(height: i32) -> Rc<Self> {
        Self::new(Size::new(0, height), LayoutFlags::empty())
    }
}

impl Widget for Spacer {
    fn preferred_size(&self) -> Size {
        self.preferred
    }

    fn layout_flags(&self) -> LayoutFlags {
        self.flags
    }

    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn set_bounds(&self, bounds: Rect) -> Result<()> {
        self.base.set_bounds(bounds);
        Ok(())
    }

    fn parent(&self) -> Option<Rc<Container>> {
        self.base.parent()
    }

    fn set_parent(&self, parent: Option<&Rc<Container>>) -> Result<()> {
        self.base.set_parent(parent);
        Ok(())
    }
}
