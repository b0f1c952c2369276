//! Content list adapter state.

use std::fmt;

use log::{debug, trace};

use crate::config::ListConfig;
use crate::device::DeviceFeatures;
use crate::entity::ListEntry;
use crate::error::ListError;
use crate::events::{Activation, EventResult, ItemListener};
use crate::row::RowHolder;

/// Sentinel index returned by lookups that find nothing.
pub const NOT_FOUND: i32 = -1;

/// Display state of one row, produced by [`ContentListAdapter::bind_row`].
#[derive(Debug, Clone, PartialEq)]
pub struct RowBinding<'a, T> {
    /// Position of the row.
    pub index: usize,
    /// The entity shown in the row.
    pub entity: &'a T,
    /// Whether the entity equals the current selection.
    pub selected: bool,
}

/// Binds an ordered collection of entities to a host list view.
///
/// `ContentListAdapter<T>` keeps:
/// - The items, in display order (duplicates allowed, lookups find the first)
/// - At most one selected entity, compared by value at bind time
/// - Click and long-click listeners, never absent
/// - Row invalidations queued by selection changes, drained by the host
pub struct ContentListAdapter<T: ListEntry> {
    items: Vec<T>,
    selected: Option<T>,
    click_listener: ItemListener<T>,
    long_click_listener: ItemListener<T>,
    features: DeviceFeatures,
    config: ListConfig,
    invalidated: Vec<usize>,
}

impl<T: ListEntry> ContentListAdapter<T> {
    /// Create an empty adapter for a device with the given capabilities.
    pub fn new(features: DeviceFeatures) -> Self {
        Self::with_config(features, ListConfig::default())
    }

    /// Create an empty adapter with explicit presentation settings.
    pub fn with_config(features: DeviceFeatures, config: ListConfig) -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            click_listener: ItemListener::noop(),
            long_click_listener: ItemListener::noop(),
            features,
            config,
            invalidated: Vec::new(),
        }
    }

    /// Device capabilities captured at construction.
    pub fn features(&self) -> DeviceFeatures {
        self.features
    }

    /// Presentation settings.
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Item access
    // -------------------------------------------------------------------------

    /// Number of rows the host should show.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by index.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// All items in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Index of the first item equal to `entity`, or [`NOT_FOUND`].
    pub fn index_of(&self, entity: &T) -> i32 {
        self.position(entity).map_or(NOT_FOUND, to_index)
    }

    fn position(&self, entity: &T) -> Option<usize> {
        self.items.iter().position(|item| item == entity)
    }

    // -------------------------------------------------------------------------
    // Item mutation
    // -------------------------------------------------------------------------

    /// Remove all items. The selection is kept and may dangle.
    ///
    /// Pending row invalidations are dropped along with the rows.
    pub fn clear(&mut self) {
        self.items.clear();
        self.invalidated.clear();
    }

    /// Append entities, preserving their order.
    pub fn add_all<I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(entities);
    }

    /// Replace the whole collection.
    pub fn replace_all<I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        self.add_all(entities);
    }

    /// Append one entity and return its index.
    pub fn add(&mut self, entity: T) -> i32 {
        self.items.push(entity);
        to_index(self.items.len() - 1)
    }

    /// Remove the first item equal to `entity`.
    ///
    /// Returns its former index, or [`NOT_FOUND`] if no item matched.
    /// Pending invalidations follow their rows: the removed row is dropped
    /// and rows after it shift up by one.
    pub fn remove(&mut self, entity: &T) -> i32 {
        match self.position(entity) {
            Some(position) => {
                self.items.remove(position);
                self.invalidated.retain(|&index| index != position);
                for index in &mut self.invalidated {
                    if *index > position {
                        *index -= 1;
                    }
                }
                to_index(position)
            }
            None => NOT_FOUND,
        }
    }

    // -------------------------------------------------------------------------
    // Binding
    // -------------------------------------------------------------------------

    /// Display state for the row at `index`.
    ///
    /// The selected flag is recomputed on every call.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the current collection.
    pub fn bind_row(&self, index: usize) -> RowBinding<'_, T> {
        let entity = &self.items[index];
        RowBinding {
            index,
            entity,
            selected: self.is_selected(entity),
        }
    }

    /// Checked variant of [`bind_row`](Self::bind_row).
    pub fn row(&self, index: usize) -> Result<RowBinding<'_, T>, ListError> {
        if index >= self.items.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.bind_row(index))
    }

    /// Create a visual row for this list.
    ///
    /// Rows created on devices without a touch screen carry the focus cue.
    pub fn create_row(&self) -> RowHolder<T> {
        RowHolder::new(self.features, &self.config)
    }

    /// Bind `row` to the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the current collection.
    pub fn bind(&self, row: &mut RowHolder<T>, index: usize) {
        let binding = self.bind_row(index);
        trace!("Binding row {} (selected={})", index, binding.selected);
        row.entity = Some(binding.entity.clone());
        row.selected = binding.selected;
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// The selected entity, which may no longer be in the list.
    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Check if `entity` is the selected one.
    pub fn is_selected(&self, entity: &T) -> bool {
        self.selected.as_ref() == Some(entity)
    }

    /// Change the selection.
    ///
    /// Returns `false` without side effects if `entity` equals the current
    /// selection. Otherwise records it and queues invalidation for the rows
    /// of the previous and new selection that are currently present.
    pub fn set_selected(&mut self, entity: Option<T>) -> bool {
        if self.selected == entity {
            return false;
        }
        let previous = std::mem::replace(&mut self.selected, entity);
        debug!(
            "Selection changed: had_previous={}, has_current={}",
            previous.is_some(),
            self.selected.is_some()
        );
        self.invalidate_entity(previous.as_ref());
        if let Some(current) = self.selected.clone() {
            self.invalidate_entity(Some(&current));
        }
        true
    }

    /// Clear the selection. Same as `set_selected(None)`.
    pub fn clear_selected(&mut self) -> bool {
        self.set_selected(None)
    }

    // -------------------------------------------------------------------------
    // Invalidation
    // -------------------------------------------------------------------------

    fn invalidate_entity(&mut self, entity: Option<&T>) {
        let Some(position) = entity.and_then(|e| self.position(e)) else {
            return;
        };
        trace!("Invalidating row {}", position);
        self.invalidated.push(position);
    }

    /// Check if rows are waiting to be rebound.
    pub fn has_pending_invalidations(&self) -> bool {
        !self.invalidated.is_empty()
    }

    /// Drain the rows the host should rebind, in the order they were queued.
    pub fn take_invalidated(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.invalidated)
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    /// Replace the click listener. `None` restores the no-op default.
    pub fn set_on_item_click(&mut self, listener: Option<ItemListener<T>>) {
        debug!("Item click listener set (custom={})", listener.is_some());
        self.click_listener = listener.unwrap_or_default();
    }

    /// Replace the long-click listener. `None` restores the no-op default.
    pub fn set_on_item_long_click(&mut self, listener: Option<ItemListener<T>>) {
        debug!("Item long-click listener set (custom={})", listener.is_some());
        self.long_click_listener = listener.unwrap_or_default();
    }

    // -------------------------------------------------------------------------
    // Row interaction
    // -------------------------------------------------------------------------

    /// Primary activation of `row`: notifies the click listener.
    pub fn perform_click(&self, row: &RowHolder<T>) -> EventResult {
        self.activate(row, Activation::Primary)
    }

    /// Long press on `row`: notifies the long-click listener and consumes
    /// the interaction.
    pub fn perform_long_click(&self, row: &RowHolder<T>) -> EventResult {
        self.activate(row, Activation::Secondary)
    }

    /// Dispatch an activation of `row` to the matching listener.
    ///
    /// Unbound rows are ignored.
    pub fn activate(&self, row: &RowHolder<T>, activation: Activation) -> EventResult {
        let Some(entity) = row.entity() else {
            return EventResult::Ignored;
        };
        trace!("Row activated: {:?}", activation);
        match activation {
            Activation::Primary => self.click_listener.call(entity),
            Activation::Secondary => self.long_click_listener.call(entity),
        }
        EventResult::Consumed
    }
}

impl<T: ListEntry> Default for ContentListAdapter<T> {
    fn default() -> Self {
        Self::new(DeviceFeatures::default())
    }
}

impl<T: ListEntry + fmt::Debug> fmt::Debug for ContentListAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentListAdapter")
            .field("items", &self.items)
            .field("selected", &self.selected)
            .field("features", &self.features)
            .field("config", &self.config)
            .field("invalidated", &self.invalidated)
            .finish_non_exhaustive()
    }
}

/// Lists hold at most `i32::MAX` rows, the range of the returned indices.
fn to_index(position: usize) -> i32 {
    i32::try_from(position).expect("list holds more than i32::MAX rows")
}
