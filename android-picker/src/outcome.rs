//! Translation between the activity's string protocol and picker types.
//!
//! The activity reports selections as newline-separated absolute paths and
//! failures as a free-form message. Requests go the other way as JSON.

use image_picker::{CameraRequest, ChooserRequest, GalleryOptions, GalleryRequest, PickError};
use serde::Serialize;
use std::path::PathBuf;

/// Splits the activity's path list, skipping blank lines
pub fn parse_photo_paths(combined: &str) -> Vec<PathBuf> {
    combined
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Classifies an error message reported by the activity
pub fn map_activity_error(message: &str) -> PickError {
    let lower = message.to_ascii_lowercase();
    if lower.starts_with("cancelled") || lower.starts_with("canceled") {
        PickError::Cancelled(message.to_string())
    } else if lower.contains("permission") {
        PickError::PermissionDenied(message.to_string())
    } else {
        PickError::Other(message.to_string())
    }
}

/// UUID-based name for the file a camera capture is written to
pub fn capture_file_name() -> String {
    format!("{}.jpg", uuid::Uuid::new_v4())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChooserPayload<'a> {
    authority: &'a str,
    file_name: &'a str,
    gallery: &'a GalleryOptions,
}

pub fn gallery_request_json(request: &GalleryRequest) -> Result<String, PickError> {
    serde_json::to_string(&request.options)
        .map_err(|e| PickError::Other(format!("Gallery request encoding failed: {}", e)))
}

pub fn chooser_request_json(
    request: &ChooserRequest,
    file_name: &str,
) -> Result<String, PickError> {
    let payload = ChooserPayload {
        authority: &request.camera.authority,
        file_name,
        gallery: &request.gallery.options,
    };
    serde_json::to_string(&payload)
        .map_err(|e| PickError::Other(format!("Chooser request encoding failed: {}", e)))
}

/// Arguments for `launchCamera(authority, fileName)`
pub fn camera_arguments(request: &CameraRequest) -> (String, String) {
    (request.authority.clone(), capture_file_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_picker::{DataUrlLoader, GalleryVariant};
    use std::sync::Arc;

    fn gallery_request() -> GalleryRequest {
        GalleryRequest {
            options: GalleryOptions {
                variant: GalleryVariant::Custom,
                multiple_selection: true,
                auto_rotate: false,
                minimum_selection_count: 1,
                maximum_selection_count: 4,
            },
            load_delegate: Arc::new(DataUrlLoader),
        }
    }

    #[test]
    fn test_parse_photo_paths() {
        let paths = parse_photo_paths("/a/1.jpg\n\n  \n/a/2.jpg\r\n");
        assert_eq!(
            paths,
            vec![PathBuf::from("/a/1.jpg"), PathBuf::from("/a/2.jpg")]
        );
        assert!(parse_photo_paths("").is_empty());
    }

    #[test]
    fn test_map_activity_error() {
        assert_eq!(
            map_activity_error("Cancelled by user"),
            PickError::Cancelled("Cancelled by user".to_string())
        );
        assert_eq!(
            map_activity_error("Camera permission not granted"),
            PickError::PermissionDenied("Camera permission not granted".to_string())
        );
        assert_eq!(
            map_activity_error("disk full"),
            PickError::Other("disk full".to_string())
        );
    }

    #[test]
    fn test_capture_file_name_is_unique_jpg() {
        let a = capture_file_name();
        let b = capture_file_name();
        assert!(a.ends_with(".jpg"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_gallery_request_json() {
        let json = gallery_request_json(&gallery_request()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["variant"], "custom");
        assert_eq!(value["multipleSelection"], true);
        assert_eq!(value["maximumSelectionCount"], 4);
    }

    #[test]
    fn test_chooser_request_json() {
        let request = ChooserRequest {
            camera: CameraRequest {
                authority: "com.example.files".to_string(),
            },
            gallery: gallery_request(),
        };
        let json = chooser_request_json(&request, "shot.jpg").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["authority"], "com.example.files");
        assert_eq!(value["fileName"], "shot.jpg");
        assert_eq!(value["gallery"]["variant"], "custom");
    }

    #[test]
    fn test_camera_arguments_keep_authority() {
        let (authority, file_name) = camera_arguments(&CameraRequest {
            authority: "auth".to_string(),
        });
        assert_eq!(authority, "auth");
        assert!(file_name.ends_with(".jpg"));
    }
}
