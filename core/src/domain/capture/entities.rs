use crate::domain::{
    capture::errors::CaptureError,
    image::{EncodedImage, encode_bytes},
};

/// Which physical camera a session targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FacingMode {
    Front,
    #[default]
    Rear,
}

impl FacingMode {
    pub fn opposite(self) -> Self {
        match self {
            FacingMode::Front => FacingMode::Rear,
            FacingMode::Rear => FacingMode::Front,
        }
    }

    /// Constraint value understood by media-capture platforms.
    pub fn as_constraint(&self) -> &'static str {
        match self {
            FacingMode::Front => "user",
            FacingMode::Rear => "environment",
        }
    }
}

/// What the host platform offers before any stream is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureEnvironment {
    pub capture_supported: bool,
    pub secure_context: bool,
}

impl CaptureEnvironment {
    pub fn missing_capability(&self) -> Option<CaptureError> {
        if !self.capture_supported {
            Some(CaptureError::Unsupported)
        } else if !self.secure_context {
            Some(CaptureError::InsecureContext)
        } else {
            None
        }
    }
}

/// Platform handle of an acquired media stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreamId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoSignal {
    Playing,
    CanPlay,
}

/// Readiness signal from the video surface, with the natural frame size at that time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoEvent {
    pub signal: VideoSignal,
    pub width: u32,
    pub height: u32,
}

/// Short-lived handle letting a view display an image without persisting it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewRef(pub String);

impl PreviewRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Image picked from the gallery or file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Still image handed to consumers, either a snapshot or a selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl CapturedImage {
    pub fn snapshot(jpeg: Vec<u8>) -> Self {
        Self {
            file_name: format!("photo-{}.jpg", chrono::Utc::now().timestamp_millis()),
            mime_type: "image/jpeg".to_string(),
            data: jpeg,
        }
    }

    pub fn encode(&self) -> EncodedImage {
        encode_bytes(&self.data, &self.mime_type)
    }
}

impl From<SelectedFile> for CapturedImage {
    fn from(file: SelectedFile) -> Self {
        Self {
            file_name: file.name,
            mime_type: file.mime_type,
            data: file.data,
        }
    }
}
