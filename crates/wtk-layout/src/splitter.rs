#![forbid(unsafe_code)]

//! Resizable panes separated by draggable handles.
//!
//! A [`Splitter`] keeps its children alternating pane, handle, pane, ...:
//! inserting a pane adds a handle next to it and removing a pane removes
//! the handle it shares with its neighbor. Handles cannot be inserted or
//! removed directly.
//!
//! # Dragging
//!
//! A left-button press on a handle arms a drag. Moves reposition the handle
//! alone, clamped so neither neighbor drops below its min size. Release
//! resizes the two neighbors to meet the handle and records their new
//! proportions as fractions; the rest of the layout is untouched until the
//! next update.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use wtk_core::geometry::{Orientation, Point, Rect, Size};
use wtk_core::layout_flags::LayoutFlags;
use wtk_core::{debug, warn};

use crate::config::LayoutDefaults;
use crate::container::Container;
use crate::error::{LayoutError, Result};
use crate::event::EventPublisher;
use crate::layout::Layout;
use crate::observed::{CollectionObserver, Mutation};
use crate::splitter_layout::SplitterLayout;
use crate::widget::{MouseButton, MouseEvent, Widget, WidgetBase, WidgetRef};

/// Size a splitter asks for when nothing else constrains it.
pub const SPLITTER_PREFERRED_SIZE: Size = Size::new(100, 100);

/// The bar between two panes.
pub struct SplitterHandle {
    base: WidgetBase,
    splitter: Weak<Splitter>,
    mouse_down: EventPublisher<MouseEvent>,
    mouse_move: EventPublisher<MouseEvent>,
    mouse_up: EventPublisher<MouseEvent>,
}

impl fmt::Debug for SplitterHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitterHandle")
            .field("bounds", &self.base.bounds())
            .finish()
    }
}

impl SplitterHandle {
    fn new(splitter: &Weak<Splitter>) -> Rc<Self> {
        let handle = Rc::new(Self {
            base: WidgetBase::new(),
            splitter: splitter.clone(),
            mouse_down: EventPublisher::new(),
            mouse_move: EventPublisher::new(),
            mouse_up: EventPublisher::new(),
        });

        let (s, h) = (splitter.clone(), Rc::downgrade(&handle));
        handle.mouse_down.subscribe(move |event: &MouseEvent| {
            if event.button != MouseButton::Left {
                return;
            }
            if let (Some(splitter), Some(handle)) = (s.upgrade(), h.upgrade()) {
                splitter.begin_drag(&handle, event.position);
            }
        });
        let s = splitter.clone();
        handle.mouse_move.subscribe(move |event: &MouseEvent| {
            if let Some(splitter) = s.upgrade()
                && let Err(err) = splitter.drag_to(event.position)
            {
                warn!(error = %err, "splitter drag move failed");
            }
        });
        let s = splitter.clone();
        handle.mouse_up.subscribe(move |_: &MouseEvent| {
            if let Some(splitter) = s.upgrade()
                && let Err(err) = splitter.end_drag()
            {
                warn!(error = %err, "splitter drag release failed");
            }
        });
        handle
    }

    /// Native button presses on the handle.
    pub fn mouse_down(&self) -> &EventPublisher<MouseEvent> {
        &self.mouse_down
    }

    /// Native pointer moves over (or captured by) the handle.
    pub fn mouse_move(&self) -> &EventPublisher<MouseEvent> {
        &self.mouse_move
    }

    /// Native button releases on the handle.
    pub fn mouse_up(&self) -> &EventPublisher<MouseEvent> {
        &self.mouse_up
    }

    fn orientation(&self) -> Option<Orientation> {
        self.splitter.upgrade().map(|s| s.orientation())
    }
}

impl Widget for SplitterHandle {
    fn preferred_size(&self) -> Size {
        match self.splitter.upgrade() {
            Some(splitter) => Size::from_axes(splitter.orientation(), splitter.handle_width(), 0),
            None => Size::ZERO,
        }
    }

    fn layout_flags(&self) -> LayoutFlags {
        self.orientation()
            .map_or(LayoutFlags::empty(), |o| LayoutFlags::grow(o.cross()))
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

#[derive(Debug)]
struct DragState {
    handle: Rc<SplitterHandle>,
    grab: Point,
}

/// Container of panes separated by draggable handles.
pub struct Splitter {
    this: Weak<Splitter>,
    container: Rc<Container>,
    layout: Rc<SplitterLayout>,
    drag: RefCell<Option<DragState>>,
    handles: RefCell<Vec<Rc<SplitterHandle>>>,
    inserting_handle: Cell<bool>,
    removing_handle: Cell<bool>,
    fractions_changed: EventPublisher<Vec<f64>>,
}

impl fmt::Debug for Splitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Splitter")
            .field("container", &self.container)
            .field("layout", &self.layout)
            .field("dragging", &self.drag.borrow().is_some())
            .finish()
    }
}

impl Splitter {
    /// Create an empty splitter with the default handle width.
    pub fn new(orientation: Orientation) -> Result<Rc<Self>> {
        let splitter = Rc::new_cyclic(|this: &Weak<Splitter>| Self {
            this: this.clone(),
            container: Container::new(),
            layout: SplitterLayout::new(orientation),
            drag: RefCell::new(None),
            handles: RefCell::new(Vec::new()),
            inserting_handle: Cell::new(false),
            removing_handle: Cell::new(false),
            fractions_changed: EventPublisher::new(),
        });

        let observer: Weak<dyn CollectionObserver<WidgetRef>> = splitter.this.clone();
        splitter.container.children().set_observer(Some(observer));
        splitter.container.set_persistent(true);
        splitter.container.set_layout(Some(splitter.layout.clone()))?;
        Ok(splitter)
    }

    /// Create an empty splitter using the handle width from `defaults`.
    pub fn with_defaults(orientation: Orientation, defaults: &LayoutDefaults) -> Result<Rc<Self>> {
        defaults.validate()?;
        let splitter = Self::new(orientation)?;
        splitter.set_handle_width(defaults.handle_width)?;
        Ok(splitter)
    }

    pub fn horizontal() -> Result<Rc<Self>> {
        Self::new(Orientation::Horizontal)
    }

    pub fn vertical() -> Result<Rc<Self>> {
        Self::new(Orientation::Vertical)
    }

    /// The container holding panes and handles.
    pub fn container(&self) -> &Rc<Container> {
        &self.container
    }

    pub fn layout(&self) -> &Rc<SplitterLayout> {
        &self.layout
    }

    pub fn orientation(&self) -> Orientation {
        self.layout.orientation()
    }

    pub fn set_orientation(&self, orientation: Orientation) -> Result<()> {
        self.layout.set_orientation(orientation)
    }

    pub fn handle_width(&self) -> i32 {
        self.layout.handle_width()
    }

    /// Set the handle extent (at least 1) and re-run the layout.
    pub fn set_handle_width(&self, width: i32) -> Result<()> {
        self.layout.set_handle_width(width)
    }

    pub fn fractions(&self) -> Vec<f64> {
        self.layout.fractions()
    }

    pub fn set_fractions(&self, fractions: Vec<f64>) -> Result<()> {
        self.layout.set_fractions(fractions)
    }

    /// Published with the new fractions after a drag changes them.
    pub fn fractions_changed(&self) -> &EventPublisher<Vec<f64>> {
        &self.fractions_changed
    }

    /// Panes in order, without handles.
    pub fn panes(&self) -> Vec<WidgetRef> {
        self.container.children().to_vec().into_iter().step_by(2).collect()
    }

    /// Handles in order.
    pub fn handles(&self) -> Vec<Rc<SplitterHandle>> {
        let handles = self.handles.borrow();
        self.container
            .children()
            .to_vec()
            .into_iter()
            .skip(1)
            .step_by(2)
            .filter_map(|widget| {
                handles
                    .iter()
                    .find(|h| std::ptr::addr_eq(Rc::as_ptr(*h), Rc::as_ptr(&widget)))
                    .cloned()
            })
            .collect()
    }

    pub fn pane_count(&self) -> usize {
        self.container.children().len().div_ceil(2)
    }

    /// Append a pane after the last one.
    pub fn add_pane(&self, pane: WidgetRef) -> Result<()> {
        let children = self.container.children();
        children.insert(children.len(), pane)
    }

    /// Insert a pane so it becomes pane number `position`.
    pub fn insert_pane(&self, position: usize, pane: WidgetRef) -> Result<()> {
        let count = self.pane_count();
        if position > count {
            return Err(LayoutError::IndexOutOfRange {
                index: position,
                len: count,
            });
        }
        let index = if position == 0 { 0 } else { position * 2 - 1 };
        self.container.children().insert(index, pane)
    }

    /// Remove `pane` and its adjacent handle. `Ok(false)` if it is not a pane
    /// of this splitter.
    pub fn remove_pane(&self, pane: &WidgetRef) -> Result<bool> {
        self.container.children().remove(pane)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.borrow().is_some()
    }

    /// Arm a drag of `handle`, grabbed at `grab` in handle coordinates.
    pub fn begin_drag(&self, handle: &Rc<SplitterHandle>, grab: Point) {
        debug!(x = grab.x, y = grab.y, "splitter drag started");
        *self.drag.borrow_mut() = Some(DragState {
            handle: handle.clone(),
            grab,
        });
    }

    /// Move the dragged handle for a pointer at `position` in handle
    /// coordinates. No-op when no drag is armed.
    pub fn drag_to(&self, position: Point) -> Result<()> {
        let Some((handle, grab)) = self
            .drag
            .borrow()
            .as_ref()
            .map(|drag| (drag.handle.clone(), drag.grab))
        else {
            return Ok(());
        };
        let (prev, next) = self.neighbors(&handle)?;
        let o = self.orientation();

        let bounds = handle.bounds();
        let bp = prev.bounds();
        let bn = next.bounds();
        let lower = bp.position_along(o) + prev.min_size().along(o);
        let upper = bn.end_along(o) - next.min_size().along(o) - self.handle_width();

        let mut pos = bounds.position_along(o) + position.along(o) - grab.along(o);
        if pos < lower {
            pos = lower;
        } else if pos >= upper {
            pos = upper;
        }
        handle.set_bounds(bounds.with_position_along(o, pos))
    }

    /// Finish the drag: resize both neighbors to meet the handle and store
    /// their new fractions. No-op when no drag is armed.
    pub fn end_drag(&self) -> Result<()> {
        let Some(drag) = self.drag.borrow_mut().take() else {
            return Ok(());
        };
        let handle = drag.handle;
        let (prev, next) = self.neighbors(&handle)?;
        let o = self.orientation();

        let bh = handle.bounds();
        let bp = prev.bounds();
        let bn = next.bounds();
        let prev_len = bh.position_along(o) - bp.position_along(o);
        let next_pos = bh.end_along(o);
        let next_len = bn.extent_along(o) - (next_pos - bn.position_along(o));

        prev.set_bounds(bp.with_extent_along(o, prev_len))?;
        next.set_bounds(
            bn.with_position_along(o, next_pos)
                .with_extent_along(o, next_len),
        )?;

        let space = self.container.client_bounds().extent_along(o);
        if space > 0 {
            let index = self.index_of_handle(&handle)?;
            let mut fractions = self.layout.fractions();
            if let Some(f) = fractions.get_mut((index - 1) / 2) {
                *f = f64::from(prev_len) / f64::from(space);
            }
            if let Some(f) = fractions.get_mut((index + 1) / 2) {
                *f = f64::from(next_len) / f64::from(space);
            }
            self.layout.store_fractions(fractions.clone());
            self.fractions_changed.publish(&fractions);
        }
        debug!(prev = prev_len, next = next_len, "splitter drag finished");
        Ok(())
    }

    fn index_of_handle(&self, handle: &Rc<SplitterHandle>) -> Result<usize> {
        let widget: WidgetRef = handle.clone();
        self.container
            .children()
            .index_of(&widget)
            .ok_or(LayoutError::UnknownWidget)
    }

    fn neighbors(&self, handle: &Rc<SplitterHandle>) -> Result<(WidgetRef, WidgetRef)> {
        let index = self.index_of_handle(handle)?;
        let children = self.container.children();
        let prev = index
            .checked_sub(1)
            .and_then(|i| children.get(i))
            .ok_or(LayoutError::UnknownWidget)?;
        let next = children.get(index + 1).ok_or(LayoutError::UnknownWidget)?;
        Ok((prev, next))
    }

    /// Run `f` with layout suspended so the splitter resets once.
    ///
    /// The layout pass on resume only logs its failure; the structural
    /// change made by `f` stands either way.
    fn batch(&self, f: impl FnOnce() -> Result<()>) -> Result<()> {
        let was_suspended = self.container.suspended();
        if !was_suspended {
            self.container.set_suspended(true)?;
        }
        let result = f();
        if was_suspended {
            return result;
        }
        if result.is_err() {
            // The mutation is reverted after this returns; lay out the
            // restored children on the next pass instead of the rejected ones.
            self.layout.request_reset();
            self.container.resume_without_layout();
        } else if let Err(err) = self.container.set_suspended(false) {
            warn!(error = %err, "splitter layout after pane change failed");
        }
        result
    }

    fn insert_handle(&self, index: usize) -> Result<()> {
        let handle = SplitterHandle::new(&self.this);
        self.inserting_handle.set(true);
        let result = self.container.children().insert(index, handle.clone());
        self.inserting_handle.set(false);
        if result.is_ok() {
            self.handles.borrow_mut().push(handle);
        }
        result
    }

    fn remove_handle(&self, index: usize) -> Result<()> {
        self.removing_handle.set(true);
        let result = self.container.children().remove_at(index);
        self.removing_handle.set(false);
        let removed = result?;

        self.handles
            .borrow_mut()
            .retain(|h| !std::ptr::addr_eq(Rc::as_ptr(h), Rc::as_ptr(&removed)));
        let drag_orphaned = self
            .drag
            .borrow()
            .as_ref()
            .is_some_and(|drag| std::ptr::addr_eq(Rc::as_ptr(&drag.handle), Rc::as_ptr(&removed)));
        if drag_orphaned {
            self.drag.borrow_mut().take();
        }
        Ok(())
    }
}

impl CollectionObserver<WidgetRef> for Splitter {
    fn prepare(&self, mutation: &Mutation<'_, WidgetRef>) -> Result<()> {
        match *mutation {
            Mutation::Insert { index, .. }
                if !self.inserting_handle.get() && index != 0 && index % 2 == 0 =>
            {
                return Err(LayoutError::Unsupported {
                    operation: "inserting a pane between a handle and its pane",
                });
            }
            Mutation::Remove { index, .. } if !self.removing_handle.get() && index % 2 == 1 => {
                return Err(LayoutError::Unsupported {
                    operation: "removing a splitter handle directly",
                });
            }
            _ => {}
        }
        self.container.prepare(mutation)
    }

    fn commit(&self, mutation: &Mutation<'_, WidgetRef>) -> Result<()> {
        match *mutation {
            Mutation::Insert { index, item } if !self.inserting_handle.get() => self.batch(|| {
                self.container.commit(mutation)?;
                if self.container.children().len() % 2 == 0
                    && let Err(err) = self.insert_handle(if index == 0 { 1 } else { index })
                {
                    // The pane is about to be reverted out of the collection.
                    self.container.release(item)?;
                    return Err(err);
                }
                Ok(())
            }),
            Mutation::Remove { index, item } if !self.removing_handle.get() => self.batch(|| {
                self.container.commit(mutation)?;
                if !self.container.children().is_empty()
                    && let Err(err) = self.remove_handle(index.saturating_sub(1))
                {
                    // The pane is about to be re-inserted.
                    self.container.adopt(item)?;
                    return Err(err);
                }
                Ok(())
            }),
            Mutation::Clear { .. } => {
                self.drag.borrow_mut().take();
                self.handles.borrow_mut().clear();
                self.container.commit(mutation)
            }
            _ => self.container.commit(mutation),
        }
    }
}

impl Widget for Splitter {
    fn preferred_size(&self) -> Size {
        SPLITTER_PREFERRED_SIZE
    }

    fn min_size(&self) -> Size {
        self.layout.min_size()
    }

    fn layout_flags(&self) -> LayoutFlags {
        self.layout.layout_flags()
    }

    fn bounds(&self) -> Rect {
        self.container.bounds()
    }

    fn set_bounds(&self, bounds: Rect) -> Result<()> {
        self.container.set_bounds(bounds)
    }

    fn parent(&self) -> Option<Rc<Container>> {
        self.container.parent()
    }

    fn set_parent(&self, parent: Option<&Rc<Container>>) -> Result<()> {
        self.container.set_parent(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubWidget;

    fn sized(width: i32, height: i32) -> Rc<Splitter> {
        let splitter = Splitter::horizontal().unwrap();
        splitter.set_bounds(Rect::new(0, 0, width, height)).unwrap();
        splitter
    }

    fn add_stubs(splitter: &Splitter, count: usize) -> Vec<Rc<StubWidget>> {
        (0..count)
            .map(|_| {
                let stub = StubWidget::flexible(10, 10);
                splitter.add_pane(stub.clone()).unwrap();
                stub
            })
            .collect()
    }

    fn handle_at(splitter: &Splitter, index: usize) -> WidgetRef {
        splitter.container().children().get(index).unwrap()
    }

    #[test]
    fn handles_alternate_with_panes() {
        let splitter = sized(304, 50);
        let stubs = add_stubs(&splitter, 3);
        assert_eq!(splitter.container().children().len(), 5);
        assert_eq!(splitter.pane_count(), 3);
        assert_eq!(splitter.handles().len(), 2);
        for (pane, stub) in splitter.panes().iter().zip(&stubs) {
            let stub: WidgetRef = stub.clone();
            assert!(Rc::ptr_eq(pane, &stub));
        }
    }

    #[test]
    fn insert_at_front_puts_handle_after_it() {
        let splitter = sized(100, 10);
        let first = StubWidget::fixed(1, 1);
        let second = StubWidget::fixed(1, 1);
        splitter.add_pane(first.clone()).unwrap();
        splitter.insert_pane(0, second.clone()).unwrap();
        let panes = splitter.panes();
        let second_ref: WidgetRef = second.clone();
        assert!(Rc::ptr_eq(&panes[0], &second_ref));
        assert_eq!(splitter.container().children().len(), 3);
        assert_eq!(splitter.handles().len(), 1);
    }

    #[test]
    fn insert_in_middle() {
        let splitter = sized(100, 10);
        add_stubs(&splitter, 2);
        let middle = StubWidget::fixed(1, 1);
        splitter.insert_pane(1, middle.clone()).unwrap();
        let middle_ref: WidgetRef = middle.clone();
        assert_eq!(splitter.container().children().index_of(&middle_ref), Some(2));
        assert_eq!(splitter.container().children().len(), 5);
        assert!(
            splitter
                .insert_pane(9, StubWidget::fixed(1, 1))
                .is_err()
        );
    }

    #[test]
    fn pane_at_even_index_is_rejected() {
        let splitter = sized(100, 10);
        add_stubs(&splitter, 2);
        let err = splitter
            .container()
            .children()
            .insert(2, StubWidget::fixed(1, 1))
            .unwrap_err();
        assert!(matches!(err, LayoutError::Unsupported { .. }));
        assert_eq!(splitter.container().children().len(), 3);
    }

    #[test]
    fn removing_pane_removes_its_handle() {
        let splitter = sized(100, 10);
        let stubs = add_stubs(&splitter, 3);
        let middle: WidgetRef = stubs[1].clone();
        assert_eq!(splitter.remove_pane(&middle), Ok(true));
        assert_eq!(splitter.container().children().len(), 3);
        assert!(stubs[1].parent().is_none());

        let first: WidgetRef = stubs[0].clone();
        assert_eq!(splitter.remove_pane(&first), Ok(true));
        assert_eq!(splitter.container().children().len(), 1);
        let last: WidgetRef = stubs[2].clone();
        assert!(Rc::ptr_eq(&splitter.panes()[0], &last));
        assert_eq!(stubs[2].bounds(), Rect::new(0, 0, 100, 10));
    }

    #[test]
    fn handles_cannot_be_removed_directly() {
        let splitter = sized(100, 10);
        add_stubs(&splitter, 2);
        let err = splitter.container().children().remove_at(1).err().unwrap();
        assert!(matches!(err, LayoutError::Unsupported { .. }));
        assert_eq!(splitter.container().children().len(), 3);
    }

    #[test]
    fn handle_metrics_follow_splitter() {
        let splitter = sized(100, 10);
        add_stubs(&splitter, 2);
        let handle = handle_at(&splitter, 1);
        assert_eq!(handle.preferred_size(), Size::new(4, 0));
        assert_eq!(handle.layout_flags(), LayoutFlags::GROW_VERT);

        splitter.set_orientation(Orientation::Vertical).unwrap();
        assert_eq!(handle.preferred_size(), Size::new(0, 4));
        assert_eq!(handle.layout_flags(), LayoutFlags::GROW_HORZ);
    }

    #[test]
    fn handle_width_change_relayouts() {
        let splitter = sized(204, 10);
        let stubs = add_stubs(&splitter, 2);
        assert_eq!(
            splitter.set_handle_width(0),
            Err(LayoutError::InvalidHandleWidth { width: 0 })
        );
        splitter.set_handle_width(10).unwrap();
        assert_eq!(handle_at(&splitter, 1).bounds().width, 10);
        assert_eq!(stubs[1].bounds().right(), 204);
    }

    #[test]
    fn with_defaults_uses_handle_width() {
        let splitter = Splitter::with_defaults(Orientation::Vertical, &LayoutDefaults::DIALOG).unwrap();
        assert_eq!(splitter.handle_width(), 5);
        assert_eq!(splitter.orientation(), Orientation::Vertical);
        assert!(splitter.container().persistent());
    }

    #[test]
    fn drag_moves_only_handle_until_release() {
        let splitter = sized(204, 10);
        let stubs = add_stubs(&splitter, 2);
        assert_eq!(stubs[0].bounds().width, 100);
        let calls = stubs[0].set_bounds_calls();

        let handle = splitter.handles()[0].clone();
        handle.mouse_down().publish(&MouseEvent::left(2, 5));
        assert!(splitter.is_dragging());
        handle.mouse_move().publish(&MouseEvent::left(32, 5));
        assert_eq!(handle.bounds().x, 130);
        assert_eq!(stubs[0].set_bounds_calls(), calls);

        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = published.clone();
        splitter
            .fractions_changed()
            .subscribe(move |f| sink.borrow_mut().push(f.clone()));

        handle.mouse_up().publish(&MouseEvent::left(2, 5));
        assert!(!splitter.is_dragging());
        assert_eq!(stubs[0].bounds(), Rect::new(0, 0, 130, 10));
        assert_eq!(stubs[1].bounds(), Rect::new(134, 0, 70, 10));

        let fractions = splitter.fractions();
        assert!((fractions[0] - 130.0 / 204.0).abs() < 1e-12);
        assert!((fractions[1] - 70.0 / 204.0).abs() < 1e-12);
        assert_eq!(published.borrow().len(), 1);
    }

    #[test]
    fn drag_is_clamped_by_neighbor_min_sizes() {
        let splitter = sized(204, 10);
        let stubs = add_stubs(&splitter, 2);
        stubs[0].set_min_size(Size::new(30, 0));
        stubs[1].set_min_size(Size::new(40, 0));
        let handle = splitter.handles()[0].clone();

        handle.mouse_down().publish(&MouseEvent::left(0, 0));
        handle.mouse_move().publish(&MouseEvent::left(-500, 0));
        assert_eq!(handle.bounds().x, 30);
        handle.mouse_move().publish(&MouseEvent::left(500, 0));
        assert_eq!(handle.bounds().x, 204 - 40 - 4);
    }

    #[test]
    fn right_button_does_not_drag() {
        let splitter = sized(204, 10);
        add_stubs(&splitter, 2);
        let handle = splitter.handles()[0].clone();
        handle
            .mouse_down()
            .publish(&MouseEvent::new(Point::new(0, 0), MouseButton::Right));
        assert!(!splitter.is_dragging());
        assert_eq!(splitter.drag_to(Point::new(10, 0)), Ok(()));
        assert_eq!(splitter.end_drag(), Ok(()));
    }

    #[test]
    fn structural_change_discards_dragged_fractions() {
        let splitter = sized(204, 10);
        add_stubs(&splitter, 2);
        splitter.set_fractions(vec![0.25, 0.7]).unwrap();
        add_stubs(&splitter, 1);
        let fractions = splitter.fractions();
        assert_eq!(fractions.len(), 3);
        assert!(fractions.windows(2).all(|w| (w[0] - w[1]).abs() < 1e-12));
    }

    #[test]
    fn splitter_reports_widget_metrics() {
        let splitter = Splitter::vertical().unwrap();
        assert_eq!(splitter.preferred_size(), Size::new(100, 100));
        assert_eq!(splitter.min_size(), Size::new(10, 10));
        assert_eq!(splitter.layout_flags(), LayoutFlags::all());
    }

    fn handle_pattern(splitter: &Splitter) -> Vec<bool> {
        let handles = splitter.handles();
        splitter
            .container()
            .children()
            .to_vec()
            .iter()
            .map(|child| {
                handles
                    .iter()
                    .any(|h| std::ptr::addr_eq(Rc::as_ptr(h), Rc::as_ptr(child)))
            })
            .collect()
    }

    #[test]
    fn pane_bounds_failure_on_add_keeps_alternation() {
        let splitter = sized(204, 10);
        let first = add_stubs(&splitter, 1).remove(0);
        first.fail_set_bounds(true);

        let second = StubWidget::flexible(10, 10);
        splitter.add_pane(second.clone()).unwrap();
        assert_eq!(handle_pattern(&splitter), vec![false, true, false]);
        assert_eq!(splitter.handles().len(), 1);
        assert!(
            second
                .parent()
                .is_some_and(|p| Rc::ptr_eq(&p, splitter.container()))
        );
    }

    #[test]
    fn pane_bounds_failure_on_remove_keeps_alternation() {
        let splitter = sized(304, 10);
        let stubs = add_stubs(&splitter, 3);
        stubs[0].fail_set_bounds(true);

        let last: WidgetRef = stubs[2].clone();
        assert_eq!(splitter.remove_pane(&last), Ok(true));
        assert_eq!(handle_pattern(&splitter), vec![false, true, false]);
        assert_eq!(splitter.handles().len(), 1);
        assert!(stubs[2].parent().is_none());
    }

    #[test]
    fn failed_pane_reparent_adds_no_handle() {
        let splitter = sized(204, 10);
        add_stubs(&splitter, 1);
        let rejected = StubWidget::flexible(10, 10);
        rejected.fail_set_parent(true);

        assert!(splitter.add_pane(rejected.clone()).is_err());
        assert!(!splitter.container().suspended());
        assert!(splitter.layout().reset_pending());
        assert_eq!(handle_pattern(&splitter), vec![false]);
        assert_eq!(rejected.set_bounds_calls(), 0);
        assert!(splitter.handles().is_empty());
        assert!(rejected.parent().is_none());
    }
}
