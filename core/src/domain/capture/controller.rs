use std::{sync::Arc, time::Duration};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::domain::{
    capture::{
        entities::{CapturedImage, FacingMode, PreviewRef, SelectedFile, StreamId, VideoEvent},
        errors::CaptureError,
        ports::{MediaDevices, PreviewStore},
        state::{CaptureEvent, CaptureState, next},
    },
    image::{SNAPSHOT_JPEG_QUALITY, rasterize_jpeg},
};

/// How long to wait for the first playable frame before warning.
pub const READINESS_TIMEOUT: Duration = Duration::from_secs(3);

/// Acquired stream. Dropping it stops the platform tracks.
struct LiveStream<D: MediaDevices> {
    id: StreamId,
    facing: FacingMode,
    devices: Arc<D>,
}

impl<D: MediaDevices> Drop for LiveStream<D> {
    fn drop(&mut self) {
        debug!(
            stream = self.id.0,
            facing = self.facing.as_constraint(),
            "releasing camera stream"
        );
        self.devices.release(self.id);
    }
}

/// Owns one capture session: the stream handle and the preview reference never
/// leave this type.
pub struct CaptureController<D: MediaDevices, P: PreviewStore> {
    devices: Arc<D>,
    previews: Arc<P>,
    state: CaptureState,
    stream: Option<LiveStream<D>>,
    preview: Option<PreviewRef>,
    image: Option<CapturedImage>,
    last_error: Option<CaptureError>,
}

impl<D: MediaDevices, P: PreviewStore> CaptureController<D, P> {
    pub fn new(devices: Arc<D>, previews: Arc<P>) -> Self {
        Self {
            devices,
            previews,
            state: CaptureState::Idle,
            stream: None,
            preview: None,
            image: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// Capture is only offered once the video surface has real dimensions.
    pub fn can_capture(&self) -> bool {
        self.is_ready() && self.stream.is_some()
    }

    pub fn preview(&self) -> Option<&PreviewRef> {
        self.preview.as_ref()
    }

    pub fn captured_image(&self) -> Option<&CapturedImage> {
        self.image.as_ref()
    }

    pub fn last_error(&self) -> Option<&CaptureError> {
        self.last_error.as_ref()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.last_error.as_ref().map(CaptureError::user_message)
    }

    /// Starts (or restarts) the camera. Any previous stream and preview are
    /// released before the platform is asked for a new one.
    pub async fn start(&mut self, facing: FacingMode) -> Result<(), CaptureError> {
        if let Some(missing) = self.devices.environment().missing_capability() {
            warn!(error = %missing, "camera path unavailable, file selection required");
            self.teardown_stream();
            self.revoke_preview();
            self.apply(&CaptureEvent::CapabilityMissing(missing.clone()));
            self.last_error = Some(missing.clone());
            return Err(missing);
        }

        self.teardown_stream();
        self.revoke_preview();
        self.last_error = None;
        self.apply(&CaptureEvent::Start(facing));

        while let CaptureState::Requesting { facing, .. } = self.state {
            match self.devices.acquire(facing).await {
                Ok(id) => {
                    info!(
                        stream = id.0,
                        facing = facing.as_constraint(),
                        "camera stream acquired"
                    );
                    self.stream = Some(LiveStream {
                        id,
                        facing,
                        devices: self.devices.clone(),
                    });
                    self.apply(&CaptureEvent::Acquired);
                    return Ok(());
                }
                Err(failure) => {
                    warn!(facing = facing.as_constraint(), %failure, "camera acquisition rejected");
                    self.apply(&CaptureEvent::Rejected(failure));
                }
            }
        }

        match &self.state {
            CaptureState::Error(error) => {
                self.last_error = Some(error.clone());
                Err(error.clone())
            }
            _ => Ok(()),
        }
    }

    /// Stops the current stream and reacquires with the opposite camera. A no-op
    /// unless streaming.
    pub async fn switch_camera(&mut self) -> Result<(), CaptureError> {
        let Some(facing) = self.state.facing().filter(|_| self.state.is_streaming()) else {
            debug!(state = ?self.state, "switch requested while not streaming");
            return Ok(());
        };

        self.teardown_stream();
        self.start(facing.opposite()).await
    }

    /// Feeds a readiness signal from the video surface. Returns whether the
    /// session is ready afterwards.
    pub fn handle_video_event(&mut self, event: VideoEvent) -> bool {
        if self.apply(&CaptureEvent::VideoSignal(event)) {
            debug!(width = event.width, height = event.height, "camera ready");
            self.last_error = None;
        }
        self.is_ready()
    }

    /// Consumes readiness signals for at most [`READINESS_TIMEOUT`]. Timing out is
    /// not an error: the session stays not-ready and capture stays disabled.
    pub async fn wait_until_ready(&mut self, events: &mut mpsc::Receiver<VideoEvent>) -> bool {
        if !self.state.is_streaming() {
            return false;
        }

        let deadline = tokio::time::Instant::now() + READINESS_TIMEOUT;
        while !self.is_ready() {
            match tokio::time::timeout_at(deadline, events.recv()).await {
                Ok(Some(event)) => {
                    self.handle_video_event(event);
                }
                Ok(None) => {
                    debug!("video event channel closed before readiness");
                    break;
                }
                Err(_) => {
                    warn!(
                        "video took longer than {}s to start",
                        READINESS_TIMEOUT.as_secs()
                    );
                    break;
                }
            }
        }

        self.is_ready()
    }

    /// Snapshots the current frame as a JPEG, issues its preview and stops the
    /// camera. Refused while the stream is not ready.
    pub fn capture(&mut self) -> Result<CapturedImage, CaptureError> {
        let stream_id = match (&self.stream, self.is_ready()) {
            (Some(stream), true) => stream.id,
            _ => {
                self.last_error = Some(CaptureError::NotReady);
                return Err(CaptureError::NotReady);
            }
        };

        let frame = self.devices.grab_frame(stream_id)?;
        let jpeg = rasterize_jpeg(&frame, SNAPSHOT_JPEG_QUALITY)
            .map_err(|e| CaptureError::FrameUnavailable(e.to_string()))?;
        let image = CapturedImage::snapshot(jpeg);

        self.replace_preview(image.clone());
        self.apply(&CaptureEvent::Snapshot);
        self.teardown_stream();
        info!(
            width = frame.width,
            height = frame.height,
            bytes = image.data.len(),
            "photo captured"
        );

        Ok(image)
    }

    /// Gallery path: no stream is involved, but a live one is stopped first.
    pub fn select_file(&mut self, file: SelectedFile) -> CapturedImage {
        let image = CapturedImage::from(file);

        self.teardown_stream();
        self.replace_preview(image.clone());
        self.apply(&CaptureEvent::FileSelected);
        debug!(name = %image.file_name, bytes = image.data.len(), "file selected");

        image
    }

    /// Leaves the camera without a photo.
    pub fn cancel(&mut self) {
        if !self.state.is_streaming() {
            debug!(state = ?self.state, "cancel requested while not streaming");
            return;
        }

        self.teardown_stream();
        self.revoke_preview();
        self.last_error = None;
        self.apply(&CaptureEvent::Cancel);
    }

    /// Retake: drops the stored image and its preview from any state.
    pub fn clear(&mut self) {
        self.teardown_stream();
        self.revoke_preview();
        self.last_error = None;
        self.apply(&CaptureEvent::Clear);
    }

    fn apply(&mut self, event: &CaptureEvent) -> bool {
        match next(&self.state, event) {
            Some(state) => {
                debug!(from = ?self.state, to = ?state, "capture transition");
                self.state = state;
                true
            }
            None => {
                debug!(state = ?self.state, ?event, "capture event ignored");
                false
            }
        }
    }

    fn teardown_stream(&mut self) {
        self.stream.take();
    }

    fn replace_preview(&mut self, image: CapturedImage) {
        self.revoke_preview();
        self.preview = Some(self.previews.create(&image));
        self.image = Some(image);
        self.last_error = None;
    }

    fn revoke_preview(&mut self) {
        if let Some(preview) = self.preview.take() {
            self.previews.revoke(&preview);
        }
        self.image = None;
    }
}

impl<D: MediaDevices, P: PreviewStore> Drop for CaptureController<D, P> {
    fn drop(&mut self) {
        self.teardown_stream();
        self.revoke_preview();
    }
}
