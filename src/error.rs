use std::fmt;

/// Failure while assembling an [`ImagePicker`](crate::ImagePicker).
///
/// Returned from `build()`; a picker is never handed out together with one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Selection bounds violate `1 <= minimum < maximum`
    InvalidConfiguration(String),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BuildError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for BuildError {}

/// Cause carried by a failed pick.
///
/// Platform flows forward their causes unchanged; `NothingToLaunch` is the
/// only variant the core produces itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickError {
    /// Neither camera nor gallery was enabled
    NothingToLaunch,
    PermissionDenied(String),
    Timeout(String),
    /// User backed out of the camera or gallery
    Cancelled(String),
    PlatformNotSupported(String),
    Other(String),
}

impl fmt::Display for PickError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PickError::NothingToLaunch => {
                write!(f, "Nothing to launch: enable the camera, the gallery or both")
            }
            PickError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            PickError::Timeout(msg) => write!(f, "Timeout: {}", msg),
            PickError::Cancelled(msg) => write!(f, "Cancelled: {}", msg),
            PickError::PlatformNotSupported(msg) => write!(f, "Platform not supported: {}", msg),
            PickError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for PickError {}
