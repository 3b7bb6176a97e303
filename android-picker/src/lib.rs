//! # Android Picker
//!
//! Android implementation of the `image-picker` flows.
//!
//! Camera, gallery and chooser are started by calling methods on the host
//! app's MainActivity over JNI:
//! - `launchCamera(authority, fileName)`
//! - `launchGallery(requestJson)`
//! - `launchChooser(requestJson)`
//!
//! The activity publishes its answer through the static
//! `getLastPhotoPaths()` / `getLastError()` slots, which are polled until the
//! configured timeout. On other platforms the context reports
//! `PlatformNotSupported` for every flow.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use android_picker::{AndroidLaunchContext, AndroidPickerConfig};
//!
//! android_picker::init_logging();
//! let context = AndroidLaunchContext::new(AndroidPickerConfig {
//!     main_activity_class: "com/example/app/MainActivity".to_string(),
//!     ..Default::default()
//! });
//! picker.launch(&context);
//! ```

pub mod config;
pub mod context;
pub mod outcome;

#[cfg(target_os = "android")]
mod jni_bridge;

pub use config::AndroidPickerConfig;
pub use context::AndroidLaunchContext;

/// Route `log` output to logcat
#[cfg(target_os = "android")]
pub fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag("image-picker"),
    );
}

#[cfg(not(target_os = "android"))]
pub fn init_logging() {}
