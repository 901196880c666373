//! Camera stream ownership.
//!
//! [`CameraSession`] owns at most one media stream and stops every track of
//! it on each exit path: explicit stop, a new session, or drop. Platform
//! bindings implement [`MediaDevices`], [`MediaStream`] and [`MediaTrack`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::image::DocumentImage;

pub const CAMERA_PERMISSION_MESSAGE: &str = "Failed to access camera. Please check permissions.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingMode {
    /// Rear camera, pointed at the document.
    Environment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraConstraints {
    pub facing_mode: FacingMode,
}

impl CameraConstraints {
    pub fn rear() -> Self {
        Self {
            facing_mode: FacingMode::Environment,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    #[error("Failed to access camera. Please check permissions.")]
    PermissionDenied,

    #[error("Camera is not running")]
    NotLive,

    #[error("Could not capture a frame: {0}")]
    Capture(String),
}

/// A JPEG-encoded video frame at the stream's native resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub jpeg: Vec<u8>,
}

pub trait MediaTrack {
    fn stop(&mut self);
    fn is_stopped(&self) -> bool;
}

pub trait MediaStream {
    type Track: MediaTrack;

    fn tracks(&self) -> &[Self::Track];
    fn tracks_mut(&mut self) -> &mut [Self::Track];
    fn grab_frame(&self) -> Result<Frame, CameraError>;
}

pub trait MediaDevices {
    type Stream: MediaStream;

    fn get_user_media(&mut self, constraints: &CameraConstraints) -> Result<Self::Stream, CameraError>;
}

/// The single camera stream of a view.
///
/// In the browser the page script owns the live stream: its `releaseCamera`
/// stops every track, and a stream that arrives after the view went off is
/// released on `cameraReady`. This type models that same contract for
/// native bindings and for tests.
pub struct CameraSession<D: MediaDevices> {
    devices: D,
    stream: Option<D::Stream>,
}

impl<D: MediaDevices> CameraSession<D> {
    pub fn new(devices: D) -> Self {
        Self {
            devices,
            stream: None,
        }
    }

    /// Acquire a rear-facing stream, releasing any current one first.
    pub fn start(&mut self) -> Result<(), CameraError> {
        self.stop();
        let stream = self.devices.get_user_media(&CameraConstraints::rear())?;
        debug!(tracks = stream.tracks().len(), "Camera stream acquired");
        self.stream = Some(stream);
        Ok(())
    }

    /// Stop every track and drop the stream. Safe to call when not live.
    pub fn stop(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            for track in stream.tracks_mut() {
                track.stop();
            }
            debug!("Camera stream released");
        }
    }

    pub fn is_live(&self) -> bool {
        self.stream.is_some()
    }

    /// Grab the current frame as a JPEG document image.
    pub fn capture(&self) -> Result<DocumentImage, CameraError> {
        let stream = self.stream.as_ref().ok_or(CameraError::NotLive)?;
        let frame = stream.grab_frame()?;
        if frame.width == 0 || frame.height == 0 || frame.jpeg.is_empty() {
            return Err(CameraError::Capture("video has no frame yet".to_string()));
        }
        Ok(DocumentImage::new("image/jpeg", frame.jpeg))
    }
}

impl<D: MediaDevices> Drop for CameraSession<D> {
    fn drop(&mut self) {
        self.stop();
    }
}
