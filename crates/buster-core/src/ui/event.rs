//! View events and the platform effects they request.

use serde::{Deserialize, Serialize};

use super::camera::CameraConstraints;
use super::keymap::KeyCombo;
use crate::analysis::model::AnalysisResult;

/// Something that happened in the view: a user action or a platform callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ViewEvent {
    StartCamera,
    CameraReady,
    CameraFailed {
        #[serde(default)]
        message: Option<String>,
    },
    StopCamera,
    Capture,
    OpenUpload,
    AnalysisStarted,
    ResultReceived {
        result: AnalysisResult,
    },
    AnalysisFailed {
        #[serde(default)]
        message: Option<String>,
    },
    ToggleReadAloud,
    SpeechEnded,
    CopyAction,
    AddToCalendar,
    ToggleContrast,
    IncreaseFont,
    DecreaseFont,
    ToggleHelp,
    Reset,
    Key {
        combo: KeyCombo,
    },
}

/// A side effect the platform must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    AcquireCamera { constraints: CameraConstraints },
    /// Stop every track of the current stream.
    ReleaseCamera,
    CaptureFrame,
    OpenFilePicker,
    Speak { text: String },
    CancelSpeech,
    CopyToClipboard { text: String },
    /// Blocking confirmation shown to the user.
    Acknowledge { message: String },
    OpenUrl { url: String },
}
