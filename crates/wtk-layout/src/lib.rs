#![forbid(unsafe_code)]

//! Containers and layouts.
//!
//! This crate provides the geometry-management half of wtk:
//!
//! - [`Widget`] - what a layout needs from a child (sizes, flags, bounds, parent)
//! - [`ObservedCollection`] - ordered children with transactional hooks
//! - [`Container`] - owns children and runs its [`Layout`] when they change
//! - [`BoxLayout`] - row/column layout distributing surplus evenly
//! - [`SplitterLayout`] / [`Splitter`] - proportional panes with draggable handles
//! - [`EventPublisher`] - multicast notifications
//!
//! # Example
//!
//! ```
//! use wtk_layout::{BoxLayout, Container, Widget, testing::StubWidget};
//! use wtk_core::{LayoutFlags, Rect, Size};
//!
//! let row = Container::with_layout(BoxLayout::horizontal()).unwrap();
//! row.set_bounds(Rect::new(0, 0, 220, 20)).unwrap();
//! let label = StubWidget::fixed(80, 20);
//! let field = StubWidget::new(Size::new(100, 20), LayoutFlags::GROW_HORZ);
//! row.children().add(field.clone()).unwrap();
//! row.children().add(label.clone()).unwrap();
//! assert_eq!(field.bounds(), Rect::new(0, 0, 140, 20));
//! assert_eq!(label.bounds(), Rect::new(140, 0, 80, 20));
//! ```

pub mod box_layout;
pub mod config;
pub mod container;
pub mod error;
pub mod event;
pub mod layout;
pub mod observed;
pub mod spacer;
pub mod splitter;
pub mod splitter_layout;
pub mod testing;
pub mod widget;

pub use box_layout::{BoxItem, BoxLayout, BoxPlan};
pub use config::LayoutDefaults;
pub use container::Container;
pub use error::{LayoutError, Result};
pub use event::{EventPublisher, Handler};
pub use layout::Layout;
pub use observed::{CollectionObserver, ItemIdentity, Mutation, ObservedCollection};
pub use spacer::Spacer;
pub use splitter::{Splitter, SplitterHandle};
pub use splitter_layout::{DEFAULT_HANDLE_WIDTH, SplitterLayout};
pub use widget::{MouseButton, MouseEvent, Widget, WidgetBase, WidgetRef};
