use serde::{Deserialize, Serialize};

/// Which gallery implementation services a pick request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GalleryVariant {
    /// System picker provided by the platform
    #[default]
    Native,
    /// Gallery shipped with the host app, renders through the load delegate
    Custom,
}

impl GalleryVariant {
    pub fn as_str(&self) -> &str {
        match self {
            GalleryVariant::Native => "native",
            GalleryVariant::Custom => "custom",
        }
    }
}

/// Upper selection bound used when none is configured
pub const UNBOUNDED_SELECTION: u32 = u32::MAX;

/// Immutable picker configuration.
///
/// Only produced by [`ImagePickerBuilder::build`](crate::ImagePickerBuilder::build),
/// so `1 <= minimum_selection_count < maximum_selection_count` always holds.
/// Serializable so platform crates can pass it across a language boundary.
/// Not `Deserialize`: `build` stays the only constructor.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PickerConfig {
    pub(crate) authority: String,
    pub(crate) use_camera: bool,
    pub(crate) use_gallery: bool,
    pub(crate) auto_rotate: bool,
    pub(crate) multiple_selection: bool,
    pub(crate) minimum_selection_count: u32,
    pub(crate) maximum_selection_count: u32,
    pub(crate) gallery_variant: GalleryVariant,
}

impl PickerConfig {
    pub(crate) fn with_authority(authority: String) -> Self {
        Self {
            authority,
            use_camera: false,
            use_gallery: false,
            auto_rotate: false,
            multiple_selection: false,
            minimum_selection_count: 1,
            maximum_selection_count: UNBOUNDED_SELECTION,
            gallery_variant: GalleryVariant::Native,
        }
    }

    /// File-sharing authority the camera saves captures under
    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn use_camera(&self) -> bool {
        self.use_camera
    }

    pub fn use_gallery(&self) -> bool {
        self.use_gallery
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn multiple_selection(&self) -> bool {
        self.multiple_selection
    }

    pub fn minimum_selection_count(&self) -> u32 {
        self.minimum_selection_count
    }

    pub fn maximum_selection_count(&self) -> u32 {
        self.maximum_selection_count
    }

    pub fn gallery_variant(&self) -> GalleryVariant {
        self.gallery_variant
    }
}
