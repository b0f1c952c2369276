//! List configuration types.

use serde::Deserialize;

/// Scale applied to a row while it has input focus.
pub const DEFAULT_FOCUS_SCALE: f32 = 1.1;

/// Elevation applied to a row while it has input focus.
pub const DEFAULT_FOCUS_ELEVATION: f32 = 4.0;

/// Presentation settings for a content list.
///
/// Deserializable so hosts can keep it in their settings store; missing
/// fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Row scale while focused. Unfocused rows are always 1.0.
    pub focus_scale: f32,

    /// Row elevation while focused. Unfocused rows are always 0.0.
    /// Only applied on devices that render elevation.
    pub focus_elevation: f32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            focus_scale: DEFAULT_FOCUS_SCALE,
            focus_elevation: DEFAULT_FOCUS_ELEVATION,
        }
    }
}

impl ListConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the focus scale.
    pub fn focus_scale(mut self, scale: f32) -> Self {
        self.focus_scale = scale;
        self
    }

    /// Set the focus elevation.
    pub fn focus_elevation(mut self, elevation: f32) -> Self {
        self.focus_elevation = elevation;
        self
    }
}
