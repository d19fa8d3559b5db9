use std::future::Future;

use crate::domain::{
    capture::{
        entities::{CaptureEnvironment, CapturedImage, FacingMode, PreviewRef, StreamId},
        errors::{AcquisitionFailure, CaptureError},
    },
    image::RawFrame,
};

/// Platform camera capability.
pub trait MediaDevices: Send + Sync {
    fn environment(&self) -> CaptureEnvironment;

    /// Requests a video-only stream, suspending until the platform (and the
    /// user's permission prompt) answers.
    fn acquire(
        &self,
        facing: FacingMode,
    ) -> impl Future<Output = Result<StreamId, AcquisitionFailure>> + Send;

    /// Current frame of a live stream at its native resolution.
    fn grab_frame(&self, stream: StreamId) -> Result<RawFrame, CaptureError>;

    /// Stops every track of the stream.
    fn release(&self, stream: StreamId);
}

/// Platform preview-reference capability (object-URL style).
#[cfg_attr(test, mockall::automock)]
pub trait PreviewStore: Send + Sync {
    fn create(&self, image: &CapturedImage) -> PreviewRef;

    fn revoke(&self, preview: &PreviewRef);
}
