#![forbid(unsafe_code)]

//! Default layout metrics.

use serde::{Deserialize, Serialize};
use wtk_core::geometry::Margins;

use crate::error::{LayoutError, Result};
use crate::splitter_layout::DEFAULT_HANDLE_WIDTH;

/// Margins, spacing, and handle width applied to newly created layouts.
///
/// Missing fields in a serialized document fall back to [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutDefaults {
    pub margins: Margins,
    pub spacing: i32,
    pub handle_width: i32,
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        Self {
            margins: Margins::ZERO,
            spacing: 0,
            handle_width: DEFAULT_HANDLE_WIDTH,
        }
    }
}

impl LayoutDefaults {
    /// Metrics for dialog-style forms.
    pub const DIALOG: Self = Self {
        margins: Margins::all(9),
        spacing: 6,
        handle_width: 5,
    };

    #[must_use]
    pub const fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub const fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    #[must_use]
    pub const fn with_handle_width(mut self, handle_width: i32) -> Self {
        self.handle_width = handle_width;
        self
    }

    /// Check every value against the constraints the layouts enforce.
    pub fn validate(&self) -> Result<()> {
        if !self.margins.is_valid() {
            return Err(LayoutError::InvalidMargins {
                margins: self.margins,
            });
        }
        if self.spacing < 0 {
            return Err(LayoutError::InvalidSpacing {
                spacing: self.spacing,
            });
        }
        if self.handle_width < 1 {
            return Err(LayoutError::InvalidHandleWidth {
                width: self.handle_width,
            });
        }
        Ok(())
    }

    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let defaults: Self = serde_json::from_str(json).map_err(|err| LayoutError::Config {
            message: err.to_string(),
        })?;
        defaults.validate()?;
        Ok(defaults)
    }
}
