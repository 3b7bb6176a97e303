use crate::config::PickerConfig;
use crate::delegate::{ImageSurface, LoadDelegate};
use crate::error::PickError;
use crate::flows::{
    select_flow, CameraRequest, ChooserRequest, FlowKind, GalleryRequest, LaunchContext,
};
use crate::result::PickCallbacks;
use std::path::Path;
use std::sync::Arc;

/// A validated, immutable picker ready to be launched.
///
/// Built by [`ImagePickerBuilder`](crate::ImagePickerBuilder). Launching does
/// not change it, so one picker can be launched any number of times.
#[derive(Clone)]
pub struct ImagePicker {
    config: PickerConfig,
    callbacks: PickCallbacks,
    load_delegate: Arc<dyn LoadDelegate>,
}

impl ImagePicker {
    pub(crate) fn new(
        config: PickerConfig,
        callbacks: PickCallbacks,
        load_delegate: Arc<dyn LoadDelegate>,
    ) -> Self {
        Self {
            config,
            callbacks,
            load_delegate,
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Render `path` into `surface` with the configured load delegate
    pub fn load_image(&self, surface: &mut dyn ImageSurface, path: &Path) {
        self.load_delegate.load(surface, path);
    }

    /// Start the flow matching the camera/gallery flags.
    ///
    /// The outcome reaches the result callback. With both flags off the
    /// result callback gets `PickError::NothingToLaunch` right away. If the
    /// context cannot start the flow at all, the error callback is told.
    pub fn launch(&self, context: &dyn LaunchContext) {
        let Some(kind) = select_flow(self.config.use_camera, self.config.use_gallery) else {
            self.callbacks.deliver_error(PickError::NothingToLaunch);
            return;
        };

        log::debug!("Launching {:?} flow", kind);

        let callbacks = self.callbacks.clone();
        let started = match kind {
            FlowKind::Camera => {
                context.start_camera(CameraRequest::from_config(&self.config), callbacks)
            }
            FlowKind::Gallery => context.start_gallery(self.gallery_request(), callbacks),
            FlowKind::Chooser => context.start_chooser(
                ChooserRequest {
                    camera: CameraRequest::from_config(&self.config),
                    gallery: self.gallery_request(),
                },
                callbacks,
            ),
        };

        if let Err(e) = started {
            self.callbacks.report_start_failure(e);
        }
    }

    fn gallery_request(&self) -> GalleryRequest {
        GalleryRequest::from_config(&self.config, self.load_delegate.clone())
    }
}

impl std::fmt::Debug for ImagePicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePicker")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
