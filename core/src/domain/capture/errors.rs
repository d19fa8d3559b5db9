use thiserror::Error;

/// Why the platform refused a stream request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcquisitionFailure {
    #[error("permission denied")]
    PermissionDenied,

    #[error("no matching device")]
    NotFound,

    #[error("{0}")]
    Other(String),
}

impl AcquisitionFailure {
    /// Classifies a platform error by its DOM-style name.
    pub fn from_error_name(name: &str, message: &str) -> Self {
        match name {
            "NotAllowedError" | "PermissionDeniedError" => AcquisitionFailure::PermissionDenied,
            "NotFoundError" | "DevicesNotFoundError" => AcquisitionFailure::NotFound,
            _ => AcquisitionFailure::Other(format!("{name}: {message}")),
        }
    }
}

/// Errors surfaced by the capture controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("camera capture is not supported")]
    Unsupported,

    #[error("camera capture requires a secure context")]
    InsecureContext,

    #[error("camera permission denied")]
    PermissionDenied,

    #[error("no camera found")]
    DeviceNotFound,

    #[error("camera acquisition failed: {0}")]
    AcquisitionFailed(String),

    #[error("camera is not ready")]
    NotReady,

    #[error("frame unavailable: {0}")]
    FrameUnavailable(String),
}

impl CaptureError {
    /// Message shown to the user. Never carries platform detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            CaptureError::Unsupported => "This device does not support camera capture.",
            CaptureError::InsecureContext => {
                "The camera needs a secure connection (https or localhost)."
            }
            CaptureError::PermissionDenied => {
                "Camera permission denied. Allow camera access in your browser."
            }
            CaptureError::DeviceNotFound => "No camera found.",
            CaptureError::AcquisitionFailed(_) => "Could not access the camera.",
            CaptureError::NotReady => "The camera is still starting. Please wait...",
            CaptureError::FrameUnavailable(_) => "Could not take the photo. Please try again.",
        }
    }

    /// Capability errors: the camera path is closed, offer file selection instead.
    pub fn suggests_file_selection(&self) -> bool {
        matches!(self, CaptureError::Unsupported | CaptureError::InsecureContext)
    }
}

impl From<AcquisitionFailure> for CaptureError {
    fn from(failure: AcquisitionFailure) -> Self {
        match failure {
            AcquisitionFailure::PermissionDenied => CaptureError::PermissionDenied,
            AcquisitionFailure::NotFound => CaptureError::DeviceNotFound,
            AcquisitionFailure::Other(reason) => CaptureError::AcquisitionFailed(reason),
        }
    }
}
