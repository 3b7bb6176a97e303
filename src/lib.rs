//! # Image Picker
//!
//! One API for getting images from the camera or from a gallery.
//!
//! The crate holds the configuration and dispatch logic only:
//! - Validated, immutable picker configuration built through
//!   [`ImagePickerBuilder`]
//! - Selection of the camera, gallery or chooser flow on launch
//! - A single result callback for every outcome after launch
//!
//! ## Platform Separation
//!
//! Capturing and browsing happen in the host platform, reached through the
//! [`LaunchContext`] trait. The `android-picker` crate implements it over JNI;
//! tests and other hosts can supply their own.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use image_picker::{GalleryVariant, ImagePickerBuilder, PickedResult};
//!
//! let picker = ImagePickerBuilder::new(
//!     "com.example.fileprovider",
//!     |result| match result {
//!         PickedResult::Success(paths) => println!("picked {:?}", paths),
//!         PickedResult::Error(e) => eprintln!("pick failed: {}", e),
//!     },
//!     |e| eprintln!("could not start picker: {}", e),
//! )
//! .use_gallery(true)
//! .multiple_selection(true)
//! .maximum_selection_count(10)
//! .gallery_variant(GalleryVariant::Custom)
//! .build()?;
//!
//! picker.launch(&context);
//! ```

pub mod builder;
pub mod config;
pub mod delegate;
pub mod error;
pub mod flows;
pub mod picker;
pub mod result;

pub use builder::ImagePickerBuilder;
pub use config::{GalleryVariant, PickerConfig, UNBOUNDED_SELECTION};
pub use delegate::{image_path_to_data_url, DataUrlLoader, ImageSurface, LoadDelegate};
pub use error::{BuildError, PickError};
pub use flows::{
    select_flow, CameraRequest, ChooserRequest, FlowKind, GalleryOptions, GalleryRequest,
    LaunchContext,
};
pub use picker::ImagePicker;
pub use result::{ErrorCallback, PickCallbacks, PickedResult, ResultCallback};
