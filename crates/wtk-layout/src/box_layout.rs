#![forbid(unsafe_code)]

//! Single-axis layout that distributes surplus or deficit evenly.
//!
//! # Algorithm
//!
//! Children whose preferred size is `{0, 0}` and whose flags are empty do not
//! participate. For the rest, along the primary axis:
//!
//! 1. Start from each child's preferred extent. A non-zero max size replaces
//!    the preferred extent on that axis and clears the grow flag there.
//! 2. `diff = available - sum(preferred) - spacing * (n - 1)`.
//! 3. A negative `diff` is split evenly (truncating) among children that may
//!    shrink; a positive one among children that may grow. Other children
//!    keep their preferred extent.
//! 4. Children are placed in order from the leading margin, separated by
//!    `spacing`.
//!
//! Every child receives the full available extent on the cross axis.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use wtk_core::geometry::{Margins, Orientation, Rect, Size};
use wtk_core::layout_flags::LayoutFlags;
use wtk_core::{debug_span, trace};

use crate::config::LayoutDefaults;
use crate::container::Container;
use crate::error::{LayoutError, Result};
use crate::layout::{Attachment, Layout};
use crate::widget::WidgetRef;

/// Inputs sampled from one participating child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxItem {
    pub preferred: Size,
    pub min: Size,
    pub max: Size,
    pub flags: LayoutFlags,
}

impl BoxItem {
    /// Whether a child with these metrics takes part in layout.
    pub fn participates(&self) -> bool {
        !(self.preferred.is_zero() && self.flags.is_empty())
    }
}

/// Result of planning a box layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxPlan {
    /// One rectangle per participating item, in order.
    pub rects: Vec<Rect>,
    /// Largest preferred cross extent among items that cannot shrink on the
    /// cross axis. Informational; the cross extent handed out is always the
    /// full available one.
    pub required_cross: i32,
}

/// Lays children out in a row or column.
pub struct BoxLayout {
    this: Weak<BoxLayout>,
    attachment: Attachment,
    orientation: Cell<Orientation>,
    margins: Cell<Margins>,
    spacing: Cell<i32>,
}

impl std::fmt::Debug for BoxLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxLayout")
            .field("orientation", &self.orientation.get())
            .field("margins", &self.margins.get())
            .field("spacing", &self.spacing.get())
            .field("attached", &self.attachment.get().is_some())
            .finish()
    }
}

impl BoxLayout {
    /// Detached layout with zero margins and spacing.
    pub fn new(orientation: Orientation) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            this: this.clone(),
            attachment: Attachment::default(),
            orientation: Cell::new(orientation),
            margins: Cell::new(Margins::ZERO),
            spacing: Cell::new(0),
        })
    }

    pub fn horizontal() -> Rc<Self> {
        Self::new(Orientation::Horizontal)
    }

    pub fn vertical() -> Rc<Self> {
        Self::new(Orientation::Vertical)
    }

    /// Detached layout using the margins and spacing from `defaults`.
    pub fn with_defaults(orientation: Orientation, defaults: &LayoutDefaults) -> Result<Rc<Self>> {
        defaults.validate()?;
        let layout = Self::new(orientation);
        layout.margins.set(defaults.margins);
        layout.spacing.set(defaults.spacing);
        Ok(layout)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation.get()
    }

    /// Change the axis and re-run the layout.
    pub fn set_orientation(&self, orientation: Orientation) -> Result<()> {
        if self.orientation.replace(orientation) == orientation {
            return Ok(());
        }
        self.update(false)
    }

    /// Compute child rectangles for `items` inside `client`.
    ///
    /// Pure function of its inputs; `update` samples the children and applies
    /// the result.
    pub fn plan(&self, items: &[BoxItem], client: Rect) -> BoxPlan {
        let o = self.orientation.get();
        let cross = o.cross();
        let margins = self.margins.get();
        let spacing = self.spacing.get();

        let mut preferred = Vec::with_capacity(items.len());
        let mut pref_sum = 0;
        let mut shrink_count = 0;
        let mut grow_count = 0;
        let mut required_cross = 0;
        for item in items {
            let mut size = item.preferred;
            let mut flags = item.flags;
            if item.max.width > 0 {
                flags.remove(LayoutFlags::GROW_HORZ);
                size.width = item.max.width;
            }
            if item.max.height > 0 {
                flags.remove(LayoutFlags::GROW_VERT);
                size.height = item.max.height;
            }

            pref_sum += size.along(o);
            if flags.can_shrink(o) {
                shrink_count += 1;
            }
            if flags.can_grow(o) {
                grow_count += 1;
            }
            if !flags.can_shrink(cross) {
                required_cross = required_cross.max(size.along(cross));
            }
            preferred.push((size.along(o), item.min.along(o), flags));
        }

        let n = items.len() as i32;
        let available = client.extent_along(o) - margins.sum_along(o);
        let diff = available - pref_sum - spacing * (n - 1).max(0);
        let per_unit = if diff < 0 && shrink_count > 0 {
            diff / shrink_count
        } else if diff > 0 && grow_count > 0 {
            diff / grow_count
        } else {
            0
        };

        let cross_pos = client.position_along(cross) + margins.leading(cross);
        let cross_len = client.extent_along(cross) - margins.sum_along(cross);
        let mut cursor = client.position_along(o) + margins.leading(o);
        let mut rects = Vec::with_capacity(items.len());
        for (pref, min, flags) in preferred {
            let mut extent = pref;
            if diff < 0 && flags.can_shrink(o) {
                extent += per_unit;
                if min > 0 {
                    extent = extent.max(min);
                }
            } else if diff > 0 && flags.can_grow(o) {
                extent += per_unit;
            }
            rects.push(Rect::from_axes(o, cursor, cross_pos, extent, cross_len));
            cursor += extent + spacing;
        }

        BoxPlan {
            rects,
            required_cross,
        }
    }

    fn participants(container: &Container) -> Vec<(WidgetRef, BoxItem)> {
        container
            .children()
            .to_vec()
            .into_iter()
            .map(|widget| {
                let item = BoxItem {
                    preferred: widget.preferred_size(),
                    min: widget.min_size(),
                    max: widget.max_size(),
                    flags: widget.layout_flags(),
                };
                (widget, item)
            })
            .filter(|(_, item)| item.participates())
            .collect()
    }

    fn as_dyn(&self) -> Option<Rc<dyn Layout>> {
        self.this.upgrade().map(|this| this as Rc<dyn Layout>)
    }
}

impl Layout for BoxLayout {
    fn container(&self) -> Option<Rc<Container>> {
        self.attachment.get()
    }

    fn set_container(&self, container: Option<&Rc<Container>>) -> Result<()> {
        let Some(this) = self.as_dyn() else {
            return Ok(());
        };
        if self.attachment.attach(&this, container)? {
            self.update(true)?;
        }
        Ok(())
    }

    fn margins(&self) -> Margins {
        self.margins.get()
    }

    fn set_margins(&self, margins: Margins) -> Result<()> {
        if !margins.is_valid() {
            return Err(LayoutError::InvalidMargins { margins });
        }
        if self.margins.replace(margins) == margins {
            return Ok(());
        }
        self.update(false)
    }

    fn spacing(&self) -> i32 {
        self.spacing.get()
    }

    fn set_spacing(&self, spacing: i32) -> Result<()> {
        if spacing < 0 {
            return Err(LayoutError::InvalidSpacing { spacing });
        }
        if self.spacing.replace(spacing) == spacing {
            return Ok(());
        }
        self.update(false)
    }

    /// Union of the children's flags, always growable along the primary axis
    /// and not shrinkable across it if any child refuses to shrink there.
    fn layout_flags(&self) -> LayoutFlags {
        let Some(container) = self.container() else {
            return LayoutFlags::empty();
        };
        let children = container.children().to_vec();
        if children.is_empty() {
            return LayoutFlags::all();
        }

        let o = self.orientation.get();
        let cross = o.cross();
        let mut flags = LayoutFlags::empty();
        let mut rigid_across = false;
        for child in &children {
            let child_flags = child.layout_flags();
            flags |= child_flags;
            rigid_across |= !child_flags.can_shrink(cross);
        }
        flags |= LayoutFlags::grow(o);
        if rigid_across {
            flags.remove(LayoutFlags::shrink(cross));
        }
        flags
    }

    fn min_size(&self) -> Size {
        let Some(container) = self.container() else {
            return Size::ZERO;
        };
        let o = self.orientation.get();
        let cross = o.cross();
        let margins = self.margins.get();
        let items = Self::participants(&container);

        let minimum = |item: &BoxItem, axis: Orientation| {
            if item.flags.can_shrink(axis) {
                item.min.along(axis)
            } else {
                item.preferred.along(axis).max(item.min.along(axis))
            }
        };
        let along: i32 = items.iter().map(|(_, item)| minimum(item, o)).sum();
        let across = items
            .iter()
            .map(|(_, item)| minimum(item, cross))
            .max()
            .unwrap_or(0);
        let gaps = self.spacing.get() * (items.len() as i32 - 1).max(0);

        Size::from_axes(
            o,
            along + gaps + margins.sum_along(o),
            across + margins.sum_along(cross),
        )
    }

    fn update(&self, reset: bool) -> Result<()> {
        let Some(container) = self.container() else {
            trace!("box layout detached; update skipped");
            return Ok(());
        };
        if container.suspended() {
            trace!("container suspended; box layout update deferred");
            return Ok(());
        }

        let participants = Self::participants(&container);
        let _span = debug_span!(
            "box_layout_update",
            reset,
            orientation = ?self.orientation.get(),
            children = participants.len()
        )
        .entered();
        if participants.is_empty() {
            return Ok(());
        }

        let items: Vec<BoxItem> = participants.iter().map(|(_, item)| *item).collect();
        let plan = self.plan(&items, container.client_bounds());
        trace!(required_cross = plan.required_cross, "box layout planned");
        for ((widget, _), rect) in participants.iter().zip(plan.rects) {
            widget.set_bounds(rect)?;
        }
        Ok(())
    }
}
