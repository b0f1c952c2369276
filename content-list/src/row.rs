//! Visual row state.

use log::trace;

use crate::config::ListConfig;
use crate::device::DeviceFeatures;
use crate::events::EventResult;

/// Transform applied to a row by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowVisual {
    pub scale_x: f32,
    pub scale_y: f32,
    pub elevation: f32,
}

impl Default for RowVisual {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            elevation: 0.0,
        }
    }
}

/// Focus cue installed on rows of focus-navigated devices.
#[derive(Debug, Clone, Copy)]
struct FocusAffordance {
    scale: f32,
    /// `None` when the device does not render elevation.
    elevation: Option<f32>,
}

/// A reusable visual row, bound to one entity at a time.
///
/// Rows are created with [`ContentListAdapter::create_row`] and rebound
/// with [`ContentListAdapter::bind`] whenever the host scrolls them into
/// view or a row is invalidated.
///
/// [`ContentListAdapter::create_row`]: crate::ContentListAdapter::create_row
/// [`ContentListAdapter::bind`]: crate::ContentListAdapter::bind
#[derive(Debug, Clone)]
pub struct RowHolder<T> {
    pub(crate) entity: Option<T>,
    pub(crate) selected: bool,
    visual: RowVisual,
    focus: Option<FocusAffordance>,
}

impl<T> RowHolder<T> {
    pub(crate) fn new(features: DeviceFeatures, config: &ListConfig) -> Self {
        let focus = features.needs_focus_affordance().then(|| FocusAffordance {
            scale: config.focus_scale,
            elevation: features.elevation.then_some(config.focus_elevation),
        });
        Self {
            entity: None,
            selected: false,
            visual: RowVisual::default(),
            focus,
        }
    }

    /// The entity this row was last bound to.
    pub fn entity(&self) -> Option<&T> {
        self.entity.as_ref()
    }

    /// Whether the bound entity was the selected one at bind time.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Current transform.
    pub fn visual(&self) -> RowVisual {
        self.visual
    }

    /// Whether this row reacts to focus changes.
    pub fn has_focus_affordance(&self) -> bool {
        self.focus.is_some()
    }

    /// Handle a focus gain or loss from non-pointer navigation.
    ///
    /// Scales the row up while focused and raises it when the device
    /// renders elevation. Ignored on touch devices.
    pub fn on_focus_change(&mut self, focused: bool) -> EventResult {
        let Some(focus) = self.focus else {
            return EventResult::Ignored;
        };

        let scale = if focused { focus.scale } else { 1.0 };
        self.visual.scale_x = scale;
        self.visual.scale_y = scale;
        if let Some(elevation) = focus.elevation {
            self.visual.elevation = if focused { elevation } else { 0.0 };
        }
        trace!("Row focus changed: focused={}, scale={}", focused, scale);
        EventResult::Consumed
    }
}
