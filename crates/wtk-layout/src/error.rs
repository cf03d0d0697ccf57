#![forbid(unsafe_code)]

//! Error type shared by containers, collections, and layouts.

use std::fmt;

use wtk_core::geometry::Margins;

/// Failure of a layout, container, or collection operation.
///
/// Setter validation failures leave the receiver unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A margin component was negative.
    InvalidMargins { margins: Margins },
    /// Spacing was negative.
    InvalidSpacing { spacing: i32 },
    /// Splitter handle width was below 1.
    InvalidHandleWidth { width: i32 },
    /// A collection index was outside `0..=len` (insert) or `0..len` (remove).
    IndexOutOfRange { index: usize, len: usize },
    /// The operation needs the layout to be attached to a container.
    ContainerRequired,
    /// The widget is not a child of the container involved.
    UnknownWidget,
    /// The receiver does not support the operation.
    Unsupported { operation: &'static str },
    /// A widget collaborator reported a failure.
    Native {
        operation: &'static str,
        message: String,
    },
    /// A configuration document was malformed.
    Config { message: String },
}

impl LayoutError {
    /// Convenience constructor for collaborator failures.
    pub fn native(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Native {
            operation,
            message: message.into(),
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMargins { margins } => write!(
                f,
                "margins must be non-negative (left {}, top {}, right {}, bottom {})",
                margins.left, margins.top, margins.right, margins.bottom
            ),
            Self::InvalidSpacing { spacing } => {
                write!(f, "spacing must be non-negative, got {spacing}")
            }
            Self::InvalidHandleWidth { width } => {
                write!(f, "invalid handle width {width} (must be at least 1)")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for collection of length {len}")
            }
            Self::ContainerRequired => write!(f, "layout is not attached to a container"),
            Self::UnknownWidget => write!(f, "widget is not a child of this container"),
            Self::Unsupported { operation } => write!(f, "{operation} is not supported"),
            Self::Native { operation, message } => write!(f, "{operation} failed: {message}"),
            Self::Config { message } => write!(f, "invalid layout configuration: {message}"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Result alias for layout operations.
pub type Result<T, E = LayoutError> = std::result::Result<T, E>;
