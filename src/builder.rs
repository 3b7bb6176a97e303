use crate::config::{GalleryVariant, PickerConfig};
use crate::delegate::{DataUrlLoader, LoadDelegate};
use crate::error::{BuildError, PickError};
use crate::picker::ImagePicker;
use crate::result::{ErrorCallback, PickCallbacks, PickedResult, ResultCallback};
use std::sync::Arc;

/// Builder for [`ImagePicker`].
///
/// Setters mutate in place and can be chained. `build` leaves the builder
/// untouched, so it can be called again for another independent picker.
pub struct ImagePickerBuilder {
    config: PickerConfig,
    on_result: ResultCallback,
    on_error: ErrorCallback,
    load_delegate: Arc<dyn LoadDelegate>,
}

impl ImagePickerBuilder {
    pub fn new<R, E>(authority: impl Into<String>, on_result: R, on_error: E) -> Self
    where
        R: Fn(PickedResult) + Send + Sync + 'static,
        E: Fn(PickError) + Send + Sync + 'static,
    {
        Self {
            config: PickerConfig::with_authority(authority.into()),
            on_result: Arc::new(on_result),
            on_error: Arc::new(on_error),
            load_delegate: Arc::new(DataUrlLoader),
        }
    }

    pub fn use_camera(&mut self, enabled: bool) -> &mut Self {
        self.config.use_camera = enabled;
        self
    }

    pub fn use_gallery(&mut self, enabled: bool) -> &mut Self {
        self.config.use_gallery = enabled;
        self
    }

    /// Rotate gallery picks upright according to their EXIF orientation
    pub fn auto_rotate(&mut self, enabled: bool) -> &mut Self {
        self.config.auto_rotate = enabled;
        self
    }

    /// Allow picking several images (custom gallery only)
    pub fn multiple_selection(&mut self, enabled: bool) -> &mut Self {
        self.config.multiple_selection = enabled;
        self
    }

    pub fn minimum_selection_count(&mut self, count: u32) -> &mut Self {
        self.config.minimum_selection_count = count;
        self
    }

    pub fn maximum_selection_count(&mut self, count: u32) -> &mut Self {
        self.config.maximum_selection_count = count;
        self
    }

    pub fn gallery_variant(&mut self, variant: GalleryVariant) -> &mut Self {
        self.config.gallery_variant = variant;
        self
    }

    pub fn load_delegate(&mut self, delegate: impl LoadDelegate + 'static) -> &mut Self {
        self.load_delegate = Arc::new(delegate);
        self
    }

    pub fn build(&self) -> Result<ImagePicker, BuildError> {
        validate(&self.config)?;

        Ok(ImagePicker::new(
            self.config.clone(),
            PickCallbacks::new(self.on_result.clone(), self.on_error.clone()),
            self.load_delegate.clone(),
        ))
    }
}

fn validate(config: &PickerConfig) -> Result<(), BuildError> {
    if config.minimum_selection_count < 1 {
        return Err(BuildError::InvalidConfiguration(format!(
            "minimum selection count must be at least 1, got {}",
            config.minimum_selection_count
        )));
    }

    if config.maximum_selection_count <= config.minimum_selection_count {
        return Err(BuildError::InvalidConfiguration(format!(
            "maximum selection count ({}) must be greater than minimum selection count ({})",
            config.maximum_selection_count, config.minimum_selection_count
        )));
    }

    Ok(())
}
