//! Device capabilities relevant to list presentation.

/// Capabilities of the device hosting the list.
///
/// Probed once by the host and handed to the adapter at construction. The
/// adapter never re-queries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceFeatures {
    /// The device has a touch screen. Without one, navigation happens
    /// through focus (D-pad, remote, keyboard) and rows show a focus cue.
    pub touch_screen: bool,
    /// The renderer supports depth/elevation.
    pub elevation: bool,
}

impl Default for DeviceFeatures {
    fn default() -> Self {
        Self::touch()
    }
}

impl DeviceFeatures {
    /// A touch device with elevation support (phones, tablets).
    pub fn touch() -> Self {
        Self {
            touch_screen: true,
            elevation: true,
        }
    }

    /// A focus-navigated device with elevation support (TV, set-top box).
    pub fn focus_navigated() -> Self {
        Self {
            touch_screen: false,
            elevation: true,
        }
    }

    /// Set elevation support.
    pub fn with_elevation(mut self, elevation: bool) -> Self {
        self.elevation = elevation;
        self
    }

    /// Whether rows should react to focus changes.
    pub fn needs_focus_affordance(&self) -> bool {
        !self.touch_screen
    }
}
