#![forbid(unsafe_code)]

//! Proportional layout for alternating pane/handle children.
//!
//! Children at even indices are panes, odd indices are handles. Each pane
//! owns a fraction of the primary extent; handles always get the handle
//! width. The last child takes whatever remains so the children fill the
//! client area exactly.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wtk_core::geometry::{Margins, Orientation, Rect, Size};
use wtk_core::layout_flags::LayoutFlags;
use wtk_core::{debug, debug_span, trace};

use crate::container::Container;
use crate::error::{LayoutError, Result};
use crate::layout::{Attachment, Layout};

/// Handle width used when none is configured.
pub const DEFAULT_HANDLE_WIDTH: i32 = 4;

/// Size a splitter reports as its minimum.
pub const SPLITTER_MIN_SIZE: Size = Size::new(10, 10);

/// Splits the primary axis between panes according to stored fractions.
///
/// Any structural change to the child set (`update(true)`) equalizes the
/// fractions the next time the layout runs unsuspended; manual fraction
/// changes survive only until then.
pub struct SplitterLayout {
    this: Weak<SplitterLayout>,
    attachment: Attachment,
    orientation: Cell<Orientation>,
    handle_width: Cell<i32>,
    fractions: RefCell<Vec<f64>>,
    reset_needed: Cell<bool>,
}

impl std::fmt::Debug for SplitterLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitterLayout")
            .field("orientation", &self.orientation.get())
            .field("handle_width", &self.handle_width.get())
            .field("fractions", &self.fractions.borrow())
            .field("reset_needed", &self.reset_needed.get())
            .finish()
    }
}

impl SplitterLayout {
    pub fn new(orientation: Orientation) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            this: this.clone(),
            attachment: Attachment::default(),
            orientation: Cell::new(orientation),
            handle_width: Cell::new(DEFAULT_HANDLE_WIDTH),
            fractions: RefCell::new(Vec::new()),
            reset_needed: Cell::new(false),
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation.get()
    }

    pub fn set_orientation(&self, orientation: Orientation) -> Result<()> {
        if self.orientation.replace(orientation) == orientation {
            return Ok(());
        }
        self.update(false)
    }

    pub fn handle_width(&self) -> i32 {
        self.handle_width.get()
    }

    /// Set the extent of every handle. Must be at least 1.
    pub fn set_handle_width(&self, width: i32) -> Result<()> {
        if width < 1 {
            return Err(LayoutError::InvalidHandleWidth { width });
        }
        if self.handle_width.replace(width) == width {
            return Ok(());
        }
        self.update(false)
    }

    /// Current per-pane fractions.
    pub fn fractions(&self) -> Vec<f64> {
        self.fractions.borrow().clone()
    }

    /// Replace the fractions and re-run the layout.
    ///
    /// Values are not normalized or validated.
    pub fn set_fractions(&self, fractions: Vec<f64>) -> Result<()> {
        self.store_fractions(fractions);
        self.update(false)
    }

    /// Replace the fractions without re-running the layout.
    pub(crate) fn store_fractions(&self, fractions: Vec<f64>) {
        *self.fractions.borrow_mut() = fractions;
    }

    /// Whether the next unsuspended update will equalize the fractions.
    pub fn reset_pending(&self) -> bool {
        self.reset_needed.get()
    }

    /// Equalize the fractions on the next unsuspended update.
    pub(crate) fn request_reset(&self) {
        self.reset_needed.set(true);
    }

    /// Equalize the pane fractions for the current child count.
    ///
    /// `handles / (space + handles)` is the share of the full extent the
    /// handles occupy; the rest is divided evenly between panes.
    fn reset(&self, container: &Container) {
        let o = self.orientation.get();
        let handle_width = self.handle_width.get();
        let count = container.children().len();
        let regular = count.div_ceil(2);
        let space = container.client_bounds().extent_along(o) - (count / 2) as i32 * handle_width;

        let mut fractions = self.fractions.borrow_mut();
        fractions.resize(regular, 0.0);
        if regular == 0 {
            return;
        }

        let handles = f64::from((regular as i32 - 1) * handle_width);
        let total = f64::from(space) + handles;
        let handles_fraction = if total > 0.0 { handles / total } else { 0.0 };
        let each = (1.0 - handles_fraction) / regular as f64;
        fractions.fill(each);
        debug!(panes = regular, fraction = each, "splitter fractions reset");
    }
}

impl Layout for SplitterLayout {
    fn container(&self) -> Option<Rc<Container>> {
        self.attachment.get()
    }

    fn set_container(&self, container: Option<&Rc<Container>>) -> Result<()> {
        let Some(this) = self.this.upgrade() else {
            return Ok(());
        };
        let this: Rc<dyn Layout> = this;
        if self.attachment.attach(&this, container)? {
            self.update(true)?;
        }
        Ok(())
    }

    fn margins(&self) -> Margins {
        Margins::ZERO
    }

    fn set_margins(&self, _margins: Margins) -> Result<()> {
        Err(LayoutError::Unsupported {
            operation: "splitter margins",
        })
    }

    fn spacing(&self) -> i32 {
        0
    }

    fn set_spacing(&self, _spacing: i32) -> Result<()> {
        Err(LayoutError::Unsupported {
            operation: "splitter spacing",
        })
    }

    fn layout_flags(&self) -> LayoutFlags {
        LayoutFlags::all()
    }

    fn min_size(&self) -> Size {
        SPLITTER_MIN_SIZE
    }

    fn update(&self, reset: bool) -> Result<()> {
        let container = self.container().ok_or(LayoutError::ContainerRequired)?;
        if reset {
            self.reset_needed.set(true);
        }
        if container.suspended() {
            trace!(reset, "container suspended; splitter layout update deferred");
            return Ok(());
        }
        if self.reset_needed.replace(false) {
            self.reset(&container);
        }

        let children = container.children().to_vec();
        let o = self.orientation.get();
        let _span = debug_span!(
            "splitter_layout_update",
            reset,
            orientation = ?o,
            children = children.len()
        )
        .entered();
        if children.is_empty() {
            return Ok(());
        }

        let client = container.client_bounds();
        let space = client.extent_along(o);
        let cross = client.extent_along(o.cross());
        let handle_width = self.handle_width.get();
        let fractions = self.fractions();

        let last = children.len() - 1;
        let mut cursor = 0;
        for (i, child) in children.iter().enumerate() {
            let extent = if i == last {
                space - cursor
            } else if i % 2 == 0 {
                let fraction = fractions.get(i / 2).copied().unwrap_or(0.0);
                (f64::from(space) * fraction).round() as i32
            } else {
                handle_width
            };
            child.set_bounds(Rect::from_axes(o, cursor, 0, extent, cross))?;
            cursor += extent;
        }
        Ok(())
    }
}
