#![forbid(unsafe_code)]

//! The widget capability layouts operate on.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wtk_core::geometry::{Point, Rect, Size};
use wtk_core::layout_flags::LayoutFlags;

use crate::container::Container;
use crate::error::Result;

/// Shared, dynamically typed widget handle as stored in a container.
pub type WidgetRef = Rc<dyn Widget>;

/// What a layout needs from a child.
///
/// Bounds are in the parent's client coordinates. `min_size` and `max_size`
/// return [`Size::ZERO`] when the widget has no such bound.
pub trait Widget {
    /// Size the widget would like to have.
    fn preferred_size(&self) -> Size;

    fn min_size(&self) -> Size {
        Size::ZERO
    }

    fn max_size(&self) -> Size {
        Size::ZERO
    }

    fn layout_flags(&self) -> LayoutFlags;

    fn bounds(&self) -> Rect;

    /// Move and resize the widget. May fail if the native side does.
    fn set_bounds(&self, bounds: Rect) -> Result<()>;

    fn parent(&self) -> Option<Rc<Container>>;

    /// Re-parent the widget natively. `None` detaches it.
    ///
    /// This does not touch any container's child collection.
    fn set_parent(&self, parent: Option<&Rc<Container>>) -> Result<()>;

    /// Move the left edge, keeping everything else.
    fn set_x(&self, x: i32) -> Result<()> {
        let bounds = self.bounds();
        self.set_bounds(Rect::new(x, bounds.y, bounds.width, bounds.height))
    }

    /// Move the top edge, keeping everything else.
    fn set_y(&self, y: i32) -> Result<()> {
        let bounds = self.bounds();
        self.set_bounds(Rect::new(bounds.x, y, bounds.width, bounds.height))
    }
}

/// Check whether `widget` is currently parented to `container`.
pub(crate) fn is_child_of(widget: &dyn Widget, container: &Container) -> bool {
    widget
        .parent()
        .is_some_and(|parent| std::ptr::eq(Rc::as_ptr(&parent), container))
}

/// Bounds and parent link storage concrete widgets delegate to.
#[derive(Debug, Default)]
pub struct WidgetBase {
    bounds: Cell<Rect>,
    parent: RefCell<Weak<Container>>,
}

impl WidgetBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    /// Store new bounds and return the previous ones.
    pub fn set_bounds(&self, bounds: Rect) -> Rect {
        self.bounds.replace(bounds)
    }

    pub fn parent(&self) -> Option<Rc<Container>> {
        self.parent.borrow().upgrade()
    }

    pub fn set_parent(&self, parent: Option<&Rc<Container>>) {
        *self.parent.borrow_mut() = parent.map(Rc::downgrade).unwrap_or_default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Mouse input delivered to a widget, in that widget's own coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub position: Point,
    pub button: MouseButton,
}

impl MouseEvent {
    pub const fn new(position: Point, button: MouseButton) -> Self {
        Self { position, button }
    }

    /// Left-button event at `(x, y)`.
    pub const fn left(x: i32, y: i32) -> Self {
        Self::new(Point::new(x, y), MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_tracks_bounds() {
        let base = WidgetBase::new();
        assert_eq!(base.bounds(), Rect::default());
        let previous = base.set_bounds(Rect::new(1, 2, 3, 4));
        assert_eq!(previous, Rect::default());
        assert_eq!(base.bounds(), Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn base_parent_is_weak() {
        let base = WidgetBase::new();
        let container = Container::new();
        base.set_parent(Some(&container));
        assert!(base.parent().is_some_and(|p| Rc::ptr_eq(&p, &container)));
        drop(container);
        assert!(base.parent().is_none());
    }

    #[test]
    fn base_parent_detaches() {
        let base = WidgetBase::new();
        let container = Container::new();
        base.set_parent(Some(&container));
        base.set_parent(None);
        assert!(base.parent().is_none());
    }

    #[test]
    fn mouse_event_left() {
        let e = MouseEvent::left(3, 4);
        assert_eq!(e.position, Point::new(3, 4));
        assert_eq!(e.button, MouseButton::Left);
    }
}
