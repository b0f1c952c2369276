//! Content list binding for media browsers.
//!
//! A [`ContentListAdapter`] owns the ordered entities shown in a scrollable
//! list, a single selection, and the listeners notified when rows are
//! activated. The host view asks it for the row count and per-row display
//! state, and drains the rows to rebind after a selection change.
//!
//! # Example
//!
//! ```
//! use content_list::prelude::*;
//!
//! let mut adapter = ContentListAdapter::new(DeviceFeatures::touch());
//! let movie = ContentEntity::new("1", "0", "Movie", ContentKind::Video);
//! adapter.add(movie.clone());
//!
//! assert!(adapter.set_selected(Some(movie)));
//! for index in adapter.take_invalidated() {
//!     assert!(adapter.bind_row(index).selected);
//! }
//! ```

pub mod adapter;
pub mod config;
pub mod device;
pub mod entity;
pub mod error;
pub mod events;
pub mod logging;
pub mod model;
pub mod row;

pub use adapter::{ContentListAdapter, NOT_FOUND, RowBinding};
pub use config::ListConfig;
pub use device::DeviceFeatures;
pub use entity::{ContentEntity, ContentKind, ListEntry};
pub use error::ListError;
pub use events::{Activation, EventResult, ItemListener};
pub use model::ContentItemModel;
pub use row::{RowHolder, RowVisual};

pub mod prelude {
    pub use crate::adapter::{ContentListAdapter, NOT_FOUND, RowBinding};
    pub use crate::config::ListConfig;
    pub use crate::device::DeviceFeatures;
    pub use crate::entity::{ContentEntity, ContentKind, ListEntry};
    pub use crate::events::{Activation, EventResult, ItemListener};
    pub use crate::model::ContentItemModel;
    pub use crate::row::RowHolder;
}
