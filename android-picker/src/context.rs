use crate::config::AndroidPickerConfig;
use image_picker::{
    CameraRequest, ChooserRequest, GalleryRequest, ImageSurface, LaunchContext, LoadDelegate,
    PickCallbacks, PickError,
};
use std::path::Path;
use std::sync::{Arc, Mutex};

#[cfg(target_os = "android")]
use crate::jni_bridge;
#[cfg(target_os = "android")]
use crate::outcome::{
    camera_arguments, capture_file_name, chooser_request_json, gallery_request_json,
};

/// [`LaunchContext`] backed by the host's MainActivity.
///
/// Flows are started on the calling thread; the result is awaited on a
/// blocking worker and delivered from there. On other platforms every start
/// fails with [`PickError::PlatformNotSupported`].
pub struct AndroidLaunchContext {
    config: AndroidPickerConfig,
    active_delegate: Mutex<Option<Arc<dyn LoadDelegate>>>,
}

impl AndroidLaunchContext {
    pub fn new(config: AndroidPickerConfig) -> Self {
        Self {
            config,
            active_delegate: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &AndroidPickerConfig {
        &self.config
    }

    /// Renders `path` with the delegate of the last gallery request.
    ///
    /// Meant for the host's custom gallery. Returns false when no gallery
    /// has been started yet.
    pub fn render_with_active_delegate(&self, surface: &mut dyn ImageSurface, path: &Path) -> bool {
        let delegate = self
            .active_delegate
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        match delegate {
            Some(delegate) => {
                delegate.load(surface, path);
                true
            }
            None => false,
        }
    }

    #[cfg_attr(not(target_os = "android"), allow(dead_code))]
    fn remember_delegate(&self, delegate: Arc<dyn LoadDelegate>) {
        *self
            .active_delegate
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = Some(delegate);
    }
}

impl Default for AndroidLaunchContext {
    fn default() -> Self {
        Self::new(AndroidPickerConfig::default())
    }
}

#[cfg(target_os = "android")]
impl AndroidLaunchContext {
    /// Check if camera permission is granted
    pub fn has_camera_permission(&self) -> Result<bool, PickError> {
        jni_bridge::has_camera_permission(&self.config)
    }

    /// Waits for the activity's answer off the calling thread
    fn await_outcome(&self, callbacks: PickCallbacks) {
        let config = self.config.clone();
        let fallback = callbacks.clone();
        let job = move || {
            let outcome = jni_bridge::wait_for_outcome(&config);
            callbacks.deliver(outcome.into());
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(job);
            }
            Err(_) => {
                if let Err(e) = std::thread::Builder::new()
                    .name("image-picker-wait".to_string())
                    .spawn(job)
                {
                    fallback.deliver_error(PickError::Other(format!(
                        "Could not wait for picker result: {}",
                        e
                    )));
                }
            }
        }
    }
}

#[cfg(target_os = "android")]
impl LaunchContext for AndroidLaunchContext {
    fn start_camera(
        &self,
        request: CameraRequest,
        callbacks: PickCallbacks,
    ) -> Result<(), PickError> {
        if !self.has_camera_permission()? {
            callbacks.deliver_error(PickError::PermissionDenied(
                "Camera permission not granted".to_string(),
            ));
            return Ok(());
        }

        let (authority, file_name) = camera_arguments(&request);
        log::debug!("Starting camera, saving {} under {}", file_name, authority);
        jni_bridge::call_launch(
            &self.config,
            "launchCamera",
            &[authority.as_str(), file_name.as_str()],
        )?;
        self.await_outcome(callbacks);
        Ok(())
    }

    fn start_gallery(
        &self,
        request: GalleryRequest,
        callbacks: PickCallbacks,
    ) -> Result<(), PickError> {
        let json = gallery_request_json(&request)?;
        log::debug!(
            "Starting {} gallery: {}",
            request.options.variant.as_str(),
            json
        );
        jni_bridge::call_launch(&self.config, "launchGallery", &[json.as_str()])?;
        self.remember_delegate(request.load_delegate);
        self.await_outcome(callbacks);
        Ok(())
    }

    fn start_chooser(
        &self,
        request: ChooserRequest,
        callbacks: PickCallbacks,
    ) -> Result<(), PickError> {
        let json = chooser_request_json(&request, &capture_file_name())?;
        log::debug!("Starting chooser: {}", json);
        jni_bridge::call_launch(&self.config, "launchChooser", &[json.as_str()])?;
        self.remember_delegate(request.gallery.load_delegate);
        self.await_outcome(callbacks);
        Ok(())
    }
}

// Non-Android implementations (return platform errors)
#[cfg(not(target_os = "android"))]
impl AndroidLaunchContext {
    pub fn has_camera_permission(&self) -> Result<bool, PickError> {
        Ok(false)
    }
}

#[cfg(not(target_os = "android"))]
impl LaunchContext for AndroidLaunchContext {
    fn start_camera(
        &self,
        _request: CameraRequest,
        _callbacks: PickCallbacks,
    ) -> Result<(), PickError> {
        Err(PickError::PlatformNotSupported(
            "Camera not available on this platform".to_string(),
        ))
    }

    fn start_gallery(
        &self,
        _request: GalleryRequest,
        _callbacks: PickCallbacks,
    ) -> Result<(), PickError> {
        Err(PickError::PlatformNotSupported(
            "Image picker not available on this platform".to_string(),
        ))
    }

    fn start_chooser(
        &self,
        _request: ChooserRequest,
        _callbacks: PickCallbacks,
    ) -> Result<(), PickError> {
        Err(PickError::PlatformNotSupported(
            "Camera and image picker not available on this platform".to_string(),
        ))
    }
}

#[cfg(all(test, not(target_os = "android")))]
mod tests {
    use super::*;
    use image_picker::{DataUrlLoader, ImagePickerBuilder, PickedResult};

    struct Surface(Option<String>);

    impl ImageSurface for Surface {
        fn set_source(&mut self, source: &str) {
            self.0 = Some(source.to_string());
        }

        fn clear(&mut self) {
            self.0 = None;
        }
    }

    #[test]
    fn test_launch_off_android_reports_start_failure() {
        let results = Arc::new(Mutex::new(Vec::<PickedResult>::new()));
        let errors = Arc::new(Mutex::new(Vec::<PickError>::new()));
        let r = results.clone();
        let e = errors.clone();

        let picker = ImagePickerBuilder::new(
            "com.example.fileprovider",
            move |res| r.lock().unwrap().push(res),
            move |err| e.lock().unwrap().push(err),
        )
        .use_camera(true)
        .use_gallery(true)
        .build()
        .unwrap();

        picker.launch(&AndroidLaunchContext::default());

        assert!(results.lock().unwrap().is_empty());
        let errors = errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], PickError::PlatformNotSupported(_)));
    }

    #[test]
    fn test_no_camera_permission_off_android() {
        let ctx = AndroidLaunchContext::default();
        assert_eq!(ctx.has_camera_permission(), Ok(false));
    }

    #[test]
    fn test_render_with_active_delegate() {
        let ctx = AndroidLaunchContext::default();
        let mut surface = Surface(None);
        assert!(!ctx.render_with_active_delegate(&mut surface, Path::new("/x.jpg")));

        ctx.remember_delegate(Arc::new(
            |surface: &mut dyn ImageSurface, path: &Path| {
                surface.set_source(&path.display().to_string());
            },
        ));
        assert!(ctx.render_with_active_delegate(&mut surface, Path::new("/x.jpg")));
        assert_eq!(surface.0.as_deref(), Some("/x.jpg"));

        ctx.remember_delegate(Arc::new(DataUrlLoader));
        assert!(ctx.render_with_active_delegate(&mut surface, Path::new("/missing.jpg")));
        assert!(surface.0.is_none());
    }
}
