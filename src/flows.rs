//! Platform flow contracts.
//!
//! The core never captures or browses images itself. It decides which flow
//! to start and hands the relevant configuration to a [`LaunchContext`],
//! which the host platform implements (see the `android-picker` crate).

use crate::config::{GalleryVariant, PickerConfig};
use crate::delegate::LoadDelegate;
use crate::error::PickError;
use crate::result::PickCallbacks;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The flow selected for a launch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Camera,
    Gallery,
    Chooser,
}

/// Maps the two launch flags to a flow; `None` means nothing is enabled
pub fn select_flow(use_camera: bool, use_gallery: bool) -> Option<FlowKind> {
    match (use_camera, use_gallery) {
        (true, false) => Some(FlowKind::Camera),
        (false, true) => Some(FlowKind::Gallery),
        (true, true) => Some(FlowKind::Chooser),
        (false, false) => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraRequest {
    pub authority: String,
}

/// Gallery settings as the platform sees them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryOptions {
    pub variant: GalleryVariant,
    pub multiple_selection: bool,
    pub auto_rotate: bool,
    pub minimum_selection_count: u32,
    pub maximum_selection_count: u32,
}

#[derive(Clone)]
pub struct GalleryRequest {
    pub options: GalleryOptions,
    pub load_delegate: Arc<dyn LoadDelegate>,
}

/// Lets the user choose between camera and gallery
#[derive(Clone)]
pub struct ChooserRequest {
    pub camera: CameraRequest,
    pub gallery: GalleryRequest,
}

impl CameraRequest {
    pub(crate) fn from_config(config: &PickerConfig) -> Self {
        Self {
            authority: config.authority.clone(),
        }
    }
}

impl GalleryRequest {
    pub(crate) fn from_config(config: &PickerConfig, load_delegate: Arc<dyn LoadDelegate>) -> Self {
        Self {
            options: GalleryOptions {
                variant: config.gallery_variant,
                multiple_selection: config.multiple_selection,
                auto_rotate: config.auto_rotate,
                minimum_selection_count: config.minimum_selection_count,
                maximum_selection_count: config.maximum_selection_count,
            },
            load_delegate,
        }
    }
}

impl std::fmt::Debug for GalleryRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryRequest")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for ChooserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChooserRequest")
            .field("camera", &self.camera)
            .field("gallery", &self.gallery)
            .finish()
    }
}

/// Host platform able to start camera, gallery and chooser flows.
///
/// A start method returns once the flow is running; its outcome is later
/// delivered exactly once through `callbacks`. Returning `Err` means no flow
/// was started and nothing will be delivered.
pub trait LaunchContext {
    fn start_camera(&self, request: CameraRequest, callbacks: PickCallbacks)
        -> Result<(), PickError>;

    fn start_gallery(
        &self,
        request: GalleryRequest,
        callbacks: PickCallbacks,
    ) -> Result<(), PickError>;

    fn start_chooser(
        &self,
        request: ChooserRequest,
        callbacks: PickCallbacks,
    ) -> Result<(), PickError>;
}
