#![forbid(unsafe_code)]

//! The layout capability and its container back-reference.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wtk_core::geometry::{Margins, Size};
use wtk_core::layout_flags::LayoutFlags;

use crate::container::Container;
use crate::error::Result;

/// Positions the children of the container it is attached to.
///
/// A layout is attached to at most one container and a container has at
/// most one layout; `set_container` and [`Container::set_layout`] keep both
/// sides consistent.
pub trait Layout {
    fn container(&self) -> Option<Rc<Container>>;

    /// Attach to `container`, detaching from the previous one. Attaching to
    /// a new container triggers `update(true)`.
    fn set_container(&self, container: Option<&Rc<Container>>) -> Result<()>;

    fn margins(&self) -> Margins;

    /// Rejects negative components, leaving the margins unchanged.
    fn set_margins(&self, margins: Margins) -> Result<()>;

    fn spacing(&self) -> i32;

    /// Rejects negative values, leaving the spacing unchanged.
    fn set_spacing(&self, spacing: i32) -> Result<()>;

    /// Grow/shrink behavior the container advertises to its own parent.
    fn layout_flags(&self) -> LayoutFlags;

    /// Smallest size the container can take without overlapping children.
    fn min_size(&self) -> Size;

    /// Recompute and apply child bounds. `reset` signals that the child set
    /// changed structurally.
    fn update(&self, reset: bool) -> Result<()>;
}

/// Weak back-reference from a layout to its container.
#[derive(Debug, Default)]
pub(crate) struct Attachment {
    container: RefCell<Weak<Container>>,
}

impl Attachment {
    pub(crate) fn get(&self) -> Option<Rc<Container>> {
        self.container.borrow().upgrade()
    }

    /// Point `layout` at `target`, fixing up both containers involved.
    ///
    /// Own state is committed before the other side is notified, and the
    /// other side is only notified when it does not already point back, so
    /// the mutual setters terminate. Returns `true` when the caller should
    /// run `update(true)` for a newly attached container.
    pub(crate) fn attach(&self, layout: &Rc<dyn Layout>, target: Option<&Rc<Container>>) -> Result<bool> {
        let current = self.get();
        let unchanged = match (&current, target) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return Ok(false);
        }

        *self.container.borrow_mut() = target.map(Rc::downgrade).unwrap_or_default();

        if let Some(previous) = current
            && previous.layout().is_some_and(|l| Rc::ptr_eq(&l, layout))
        {
            previous.set_layout(None)?;
        }

        let Some(container) = target else {
            return Ok(false);
        };
        if !container.layout().is_some_and(|l| Rc::ptr_eq(&l, layout)) {
            container.set_layout(Some(layout.clone()))?;
        }
        Ok(true)
    }
}
