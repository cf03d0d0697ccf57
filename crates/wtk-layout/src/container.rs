#![forbid(unsafe_code)]

//! A widget that owns an ordered set of children and delegates their
//! placement to a [`Layout`].

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use wtk_core::geometry::{Rect, Size};
use wtk_core::layout_flags::LayoutFlags;
use wtk_core::{debug, trace, warn};

use crate::error::{LayoutError, Result};
use crate::event::EventPublisher;
use crate::layout::Layout;
use crate::observed::{CollectionObserver, Mutation, ObservedCollection};
use crate::widget::{Widget, WidgetBase, WidgetRef, is_child_of};

/// Parent of zero or more widgets.
///
/// The child collection reports to the container, which keeps the native
/// parent links and the layout in sync with it:
///
/// - inserting re-parents the child here if needed, then runs
///   `layout.update(true)`;
/// - removing (or clearing) detaches children parented here, then runs
///   `layout.update(true)`.
///
/// Only a failed re-parent fails the mutation. A failing layout pass after
/// the change is logged and the change stands, so parent links always match
/// collection membership.
///
/// While suspended, layout updates are skipped; resuming runs
/// `layout.update(false)`.
pub struct Container {
    this: Weak<Container>,
    base: WidgetBase,
    layout: RefCell<Option<Rc<dyn Layout>>>,
    children: ObservedCollection<WidgetRef>,
    suspended: Cell<bool>,
    persistent: Cell<bool>,
    size_changed: EventPublisher<Size>,
    children_changed: EventPublisher<usize>,
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("bounds", &self.base.bounds())
            .field("children", &self.children.len())
            .field("has_layout", &self.layout.borrow().is_some())
            .field("suspended", &self.suspended.get())
            .finish()
    }
}

impl Container {
    /// Create an empty container without a layout.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|this: &Weak<Container>| {
            let observer: Weak<dyn CollectionObserver<WidgetRef>> = this.clone();
            Self {
                this: this.clone(),
                base: WidgetBase::new(),
                layout: RefCell::new(None),
                children: ObservedCollection::with_observer(observer),
                suspended: Cell::new(false),
                persistent: Cell::new(false),
                size_changed: EventPublisher::new(),
                children_changed: EventPublisher::new(),
            }
        })
    }

    /// Create an empty container and attach `layout` to it.
    pub fn with_layout(layout: Rc<dyn Layout>) -> Result<Rc<Self>> {
        let container = Self::new();
        container.set_layout(Some(layout))?;
        Ok(container)
    }

    /// The child collection. Mutating it re-parents children and updates
    /// the layout.
    pub fn children(&self) -> &ObservedCollection<WidgetRef> {
        &self.children
    }

    pub fn layout(&self) -> Option<Rc<dyn Layout>> {
        self.layout.borrow().clone()
    }

    /// Replace the layout, detaching the previous one. `None` removes it.
    pub fn set_layout(&self, layout: Option<Rc<dyn Layout>>) -> Result<()> {
        let previous = self.layout.replace(layout.clone());
        let unchanged = match (&previous, &layout) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return Ok(());
        }

        if let Some(previous) = previous
            && previous.container().is_some_and(|c| self.is(&c))
        {
            previous.set_container(None)?;
        }

        if let Some(layout) = layout
            && !layout.container().is_some_and(|c| self.is(&c))
        {
            let this = self.this.upgrade().ok_or(LayoutError::ContainerRequired)?;
            layout.set_container(Some(&this))?;
        }
        Ok(())
    }

    /// Area available to children: the container's own size at the origin.
    pub fn client_bounds(&self) -> Rect {
        Rect::from_size(self.base.bounds().size())
    }

    pub fn suspended(&self) -> bool {
        self.suspended.get()
    }

    /// Suspend or resume layout updates. Resuming runs `update(false)`.
    pub fn set_suspended(&self, suspended: bool) -> Result<()> {
        let was = self.suspended.replace(suspended);
        if was && !suspended {
            trace!("container resumed; running deferred layout");
            return self.update_layout(false);
        }
        Ok(())
    }

    /// Clear the suspended flag without running the layout.
    pub(crate) fn resume_without_layout(&self) {
        self.suspended.set(false);
    }

    /// Whether the container's state should be saved and restored by the
    /// application.
    pub fn persistent(&self) -> bool {
        self.persistent.get()
    }

    pub fn set_persistent(&self, persistent: bool) {
        self.persistent.set(persistent);
    }

    /// Run the layout, if any.
    pub fn update_layout(&self, reset: bool) -> Result<()> {
        match self.layout() {
            Some(layout) => layout.update(reset),
            None => Ok(()),
        }
    }

    /// Published with the new size whenever the container is resized.
    pub fn size_changed(&self) -> &EventPublisher<Size> {
        &self.size_changed
    }

    /// Published with the child count after every structural change.
    pub fn children_changed(&self) -> &EventPublisher<usize> {
        &self.children_changed
    }

    fn is(&self, other: &Rc<Container>) -> bool {
        std::ptr::eq(Rc::as_ptr(other), self)
    }

    pub(crate) fn adopt(&self, child: &WidgetRef) -> Result<()> {
        if is_child_of(child.as_ref(), self) {
            return Ok(());
        }
        let this = self.this.upgrade().ok_or(LayoutError::ContainerRequired)?;
        child.set_parent(Some(&this))
    }

    pub(crate) fn release(&self, child: &WidgetRef) -> Result<()> {
        if is_child_of(child.as_ref(), self) {
            child.set_parent(None)?;
        }
        Ok(())
    }
}

impl CollectionObserver<WidgetRef> for Container {
    fn prepare(&self, mutation: &Mutation<'_, WidgetRef>) -> Result<()> {
        match *mutation {
            Mutation::Insert { .. } => Ok(()),
            Mutation::Remove { item, .. } => self.release(item),
            Mutation::Clear { items } => items.iter().try_for_each(|item| self.release(item)),
        }
    }

    fn commit(&self, mutation: &Mutation<'_, WidgetRef>) -> Result<()> {
        match *mutation {
            Mutation::Insert { index, item } => {
                self.adopt(item)?;
                debug!(index, "child inserted");
            }
            Mutation::Remove { index, .. } => {
                debug!(index, "child removed");
            }
            Mutation::Clear { items } => {
                debug!(count = items.len(), "children cleared");
            }
        }
        if let Err(err) = self.update_layout(true) {
            warn!(error = %err, "layout update after child change failed");
        }
        self.children_changed.publish(&self.children.len());
        Ok(())
    }
}

impl Widget for Container {
    fn preferred_size(&self) -> Size {
        self.layout().map_or(Size::ZERO, |layout| layout.min_size())
    }

    fn min_size(&self) -> Size {
        self.layout().map_or(Size::ZERO, |layout| layout.min_size())
    }

    fn layout_flags(&self) -> LayoutFlags {
        self.layout()
            .map_or(LayoutFlags::empty(), |layout| layout.layout_flags())
    }

    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    /// Store the bounds; a size change publishes `size_changed` and runs
    /// `update(false)`.
    fn set_bounds(&self, bounds: Rect) -> Result<()> {
        let previous = self.base.set_bounds(bounds);
        if previous.size() != bounds.size() {
            self.size_changed.publish(&bounds.size());
            self.update_layout(false)?;
        }
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
