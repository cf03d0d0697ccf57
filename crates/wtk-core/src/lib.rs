#![forbid(unsafe_code)]

//! Core: geometry, layout flags, and logging shims shared by every wtk crate.
//!
//! # Role in wtk
//! `wtk-core` holds the value types a layout speaks in. Coordinates are
//! signed pixels relative to the parent's client area, so every type here is
//! plain `Copy` data with no native handles attached.
//!
//! # Primary responsibilities
//! - **Geometry**: `Point`, `Size`, `Rect`, `Margins`, and the `Orientation`
//!   axis projections layouts use to treat both directions with one code path.
//! - **LayoutFlags**: per-axis grow/shrink permissions a widget advertises.
//! - **Logging**: `tracing` re-exports, or no-op shims when the feature is off.

pub mod geometry;
pub mod layout_flags;
pub mod logging;

pub use geometry::{Margins, Orientation, Point, Rect, Size};
pub use layout_flags::LayoutFlags;

#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn};
