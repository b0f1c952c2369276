//! Content entities shown in a content list.

use serde::{Deserialize, Serialize};

/// Trait for values that can be held by a [`ContentListAdapter`].
///
/// Lookup, removal and selection all compare entries by value, so the
/// `PartialEq` implementation must be stable for the lifetime of the list.
///
/// [`ContentListAdapter`]: crate::ContentListAdapter
pub trait ListEntry: PartialEq + Clone + 'static {}

impl<T: PartialEq + Clone + 'static> ListEntry for T {}

/// Kind of a content directory object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// A folder that can be browsed into.
    Container,
    Video,
    Audio,
    Image,
    /// Anything the browser does not know how to open.
    #[default]
    Unknown,
}

impl ContentKind {
    /// Whether items of this kind can be handed to a player.
    pub fn is_playable(self) -> bool {
        matches!(self, Self::Video | Self::Audio | Self::Image)
    }

    /// Short label for row templates.
    pub fn label(self) -> &'static str {
        match self {
            Self::Container => "folder",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Image => "image",
            Self::Unknown => "item",
        }
    }
}

/// One browsable object from a media server's content directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentEntity {
    /// Object ID, unique within the server.
    pub id: String,
    /// ID of the container this object was listed from.
    pub parent_id: String,
    /// Display title.
    pub name: String,
    #[serde(default)]
    pub kind: ContentKind,
    /// URI of the primary resource, if the object has one.
    #[serde(default)]
    pub resource_uri: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Content is DRM protected.
    #[serde(default)]
    pub protected: bool,
}

impl ContentEntity {
    /// Create an entity with no resource attached.
    pub fn new(
        id: impl Into<String>,
        parent_id: impl Into<String>,
        name: impl Into<String>,
        kind: ContentKind,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.into(),
            name: name.into(),
            kind,
            resource_uri: None,
            mime_type: None,
            protected: false,
        }
    }

    /// Attach the primary resource.
    pub fn with_resource(mut self, uri: impl Into<String>, mime_type: impl Into<String>) -> Self {
        self.resource_uri = Some(uri.into());
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Mark the content as protected.
    pub fn protected(mut self) -> Self {
        self.protected = true;
        self
    }

    /// Whether this entity is a container.
    pub fn is_container(&self) -> bool {
        self.kind == ContentKind::Container
    }

    /// Whether this entity can be played: a playable kind with a resource.
    pub fn is_playable(&self) -> bool {
        self.kind.is_playable() && self.resource_uri.is_some()
    }
}
