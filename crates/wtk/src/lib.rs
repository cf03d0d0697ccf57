#![forbid(unsafe_code)]

//! wtk public facade crate.
//!
//! Re-exports the geometry and layout types from the internal crates and
//! offers a prelude for building widget trees.

// --- Core re-exports -------------------------------------------------------

pub use wtk_core::geometry::{Margins, Orientation, Point, Rect, Size};
pub use wtk_core::layout_flags::LayoutFlags;

#[cfg(feature = "tracing-json")]
pub use wtk_core::logging::init_json_logging;

// --- Layout re-exports -----------------------------------------------------

pub use wtk_layout::{
    BoxLayout, CollectionObserver, Container, DEFAULT_HANDLE_WIDTH, EventPublisher, Handler,
    Layout, LayoutDefaults, LayoutError, MouseButton, MouseEvent, Mutation, ObservedCollection,
    Result, Spacer, Splitter, SplitterHandle, SplitterLayout, Widget, WidgetBase, WidgetRef,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BoxLayout, Container, Layout, LayoutDefaults, LayoutError, LayoutFlags, Margins,
        Orientation, Point, Rect, Result, Size, Spacer, Splitter, Widget, WidgetRef,
    };

    pub use crate::{core, layout};
}

pub use wtk_core as core;
pub use wtk_layout as layout;
