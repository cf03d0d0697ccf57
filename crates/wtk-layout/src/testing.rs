#![forbid(unsafe_code)]

//! Recording widget for exercising layouts without a native window.

use std::cell::Cell;
use std::rc::Rc;

use wtk_core::geometry::{Rect, Size};
use wtk_core::layout_flags::LayoutFlags;

use crate::container::Container;
use crate::error::{LayoutError, Result};
use crate::widget::{Widget, WidgetBase};

/// A widget with settable metrics that counts `set_bounds` calls and can be
/// told to fail.
#[derive(Debug, Default)]
pub struct StubWidget {
    base: WidgetBase,
    preferred: Cell<Size>,
    min: Cell<Size>,
    max: Cell<Size>,
    flags: Cell<LayoutFlags>,
    set_bounds_calls: Cell<usize>,
    fail_set_bounds: Cell<bool>,
    fail_set_parent: Cell<bool>,
}

impl StubWidget {
    pub fn new(preferred: Size, flags: LayoutFlags) -> Rc<Self> {
        let stub = Self::default();
        stub.preferred.set(preferred);
        stub.flags.set(flags);
        Rc::new(stub)
    }

    /// Rigid on both axes.
    pub fn fixed(width: i32, height: i32) -> Rc<Self> {
        Self::new(Size::new(width, height), LayoutFlags::empty())
    }

    /// Grows and shrinks on both axes.
    pub fn flexible(width: i32, height: i32) -> Rc<Self> {
        Self::new(Size::new(width, height), LayoutFlags::all())
    }

    pub fn set_preferred_size(&self, size: Size) {
        self.preferred.set(size);
    }

    pub fn set_min_size(&self, size: Size) {
        self.min.set(size);
    }

    pub fn set_max_size(&self, size: Size) {
        self.max.set(size);
    }

    pub fn set_layout_flags(&self, flags: LayoutFlags) {
        self.flags.set(flags);
    }

    /// Make subsequent `set_bounds` calls fail.
    pub fn fail_set_bounds(&self, fail: bool) {
        self.fail_set_bounds.set(fail);
    }

    /// Make subsequent `set_parent` calls fail.
    pub fn fail_set_parent(&self, fail: bool) {
        self.fail_set_parent.set(fail);
    }

    /// Number of successful `set_bounds` calls so far.
    pub fn set_bounds_calls(&self) -> usize {
        self.set_bounds_calls.get()
    }
}

impl Widget for StubWidget {
    fn preferred_size(&self) -> Size {
        self.preferred.get()
    }

    fn min_size(&self) -> Size {
        self.min.get()
    }

    fn max_size(&self) -> Size {
        self.max.get()
    }

    fn layout_flags(&self) -> LayoutFlags {
        self.flags.get()
    }

    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn set_bounds(&self, bounds: Rect) -> Result<()> {
        if self.fail_set_bounds.get() {
            return Err(LayoutError::native("set_bounds", "stub configured to fail"));
        }
        self.base.set_bounds(bounds);
        self.set_bounds_calls.set(self.set_bounds_calls.get() + 1);
        Ok(())
    }

    fn parent(&self) -> Option<Rc<Container>> {
        self.base.parent()
    }

    fn set_parent(&self, parent: Option<&Rc<Container>>) -> Result<()> {
        if self.fail_set_parent.get() {
            return Err(LayoutError::native("set_parent", "stub configured to fail"));
        }
        self.base.set_parent(parent);
        Ok(())
    }
}
