//! Render data for content rows.

use crate::entity::{ContentEntity, ContentKind};
use crate::row::RowHolder;

/// Everything a row template needs to paint one content entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItemModel {
    pub title: String,
    pub kind: ContentKind,
    /// Short label for the kind, e.g. "video".
    pub kind_label: &'static str,
    pub playable: bool,
    pub protected: bool,
    /// Drives the highlighted state.
    pub selected: bool,
}

impl ContentItemModel {
    /// Build the model for an entity.
    pub fn new(entity: &ContentEntity, selected: bool) -> Self {
        Self {
            title: entity.name.clone(),
            kind: entity.kind,
            kind_label: entity.kind.label(),
            playable: entity.is_playable(),
            protected: entity.protected,
            selected,
        }
    }
}

impl RowHolder<ContentEntity> {
    /// Render data for the bound entity, or `None` if the row is unbound.
    pub fn model(&self) -> Option<ContentItemModel> {
        self.entity().map(|entity| ContentItemModel::new(entity, self.is_selected()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_from_entity() {
        let entity = ContentEntity::new("7", "0", "Holiday", ContentKind::Image)
            .with_resource("http://host/holiday.jpg", "image/jpeg");
        let model = ContentItemModel::new(&entity, true);
        assert_eq!(model.title, "Holiday");
        assert_eq!(model.kind_label, "image");
        assert!(model.playable);
        assert!(!model.protected);
        assert!(model.selected);
    }
}
