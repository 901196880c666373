//! Serializable view state and its transitions.
//!
//! [`ViewState::apply`] is the only way the state changes. It returns the
//! platform effects (camera, speech, clipboard, navigation) the browser has
//! to perform for the transition.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::calendar;
use super::camera::{CameraConstraints, CAMERA_PERMISSION_MESSAGE};
use super::event::{Effect, ViewEvent};
use super::font::FontScale;
use super::keymap::Keymap;
use super::speech;
use crate::analysis::model::AnalysisResult;

pub const ANALYSIS_FAILED_MESSAGE: &str = "We couldn't read that. Can you try a clearer photo?";
pub const COPIED_MESSAGE: &str = "Action copied to clipboard!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    #[default]
    Off,
    Starting,
    Live,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewState {
    pub camera: CameraStatus,
    pub analyzing: bool,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
    pub speaking: bool,
    pub high_contrast: bool,
    pub font_scale: FontScale,
    pub help_open: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the calendar control is offered.
    pub fn calendar_available(&self) -> bool {
        self.result.as_ref().is_some_and(AnalysisResult::has_deadline)
    }

    pub fn can_capture(&self) -> bool {
        self.camera == CameraStatus::Live && !self.analyzing
    }

    /// Apply an event using the default keymap.
    pub fn apply(&mut self, event: ViewEvent, today: NaiveDate) -> Vec<Effect> {
        self.apply_with(event, today, &Keymap::default())
    }

    pub fn apply_with(&mut self, event: ViewEvent, today: NaiveDate, keymap: &Keymap) -> Vec<Effect> {
        debug!(?event, "Applying view event");
        match event {
            ViewEvent::StartCamera => {
                let mut effects = Vec::new();
                if self.camera != CameraStatus::Off {
                    effects.push(Effect::ReleaseCamera);
                }
                effects.push(Effect::AcquireCamera {
                    constraints: CameraConstraints::rear(),
                });
                self.camera = CameraStatus::Starting;
                self.error = None;
                effects
            }
            ViewEvent::CameraReady => {
                if self.camera == CameraStatus::Starting {
                    self.camera = CameraStatus::Live;
                    Vec::new()
                } else {
                    // The view was closed while the stream was being acquired.
                    vec![Effect::ReleaseCamera]
                }
            }
            ViewEvent::CameraFailed { message } => {
                self.camera = CameraStatus::Off;
                self.error = Some(message.unwrap_or_else(|| CAMERA_PERMISSION_MESSAGE.to_string()));
                vec![Effect::ReleaseCamera]
            }
            ViewEvent::StopCamera => {
                self.camera = CameraStatus::Off;
                vec![Effect::ReleaseCamera]
            }
            ViewEvent::Capture => {
                if self.can_capture() {
                    vec![Effect::CaptureFrame]
                } else {
                    Vec::new()
                }
            }
            ViewEvent::OpenUpload => vec![Effect::OpenFilePicker],
            ViewEvent::AnalysisStarted => {
                let effects = self.silence();
                self.analyzing = true;
                self.error = None;
                self.result = None;
                effects
            }
            ViewEvent::ResultReceived { result } => {
                self.analyzing = false;
                self.error = None;
                self.result = Some(result);
                Vec::new()
            }
            ViewEvent::AnalysisFailed { message } => {
                self.analyzing = false;
                self.error = Some(
                    message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| ANALYSIS_FAILED_MESSAGE.to_string()),
                );
                Vec::new()
            }
            ViewEvent::ToggleReadAloud => {
                if self.speaking {
                    self.silence()
                } else if let Some(result) = &self.result {
                    self.speaking = true;
                    vec![Effect::Speak {
                        text: speech::utterance(result),
                    }]
                } else {
                    Vec::new()
                }
            }
            ViewEvent::SpeechEnded => {
                self.speaking = false;
                Vec::new()
            }
            ViewEvent::CopyAction => match &self.result {
                Some(result) => vec![
                    Effect::CopyToClipboard {
                        text: result.action_required.clone(),
                    },
                    Effect::Acknowledge {
                        message: COPIED_MESSAGE.to_string(),
                    },
                ],
                None => Vec::new(),
            },
            ViewEvent::AddToCalendar => self
                .result
                .as_ref()
                .and_then(|r| calendar::event_url(r, today))
                .map(|url| vec![Effect::OpenUrl { url }])
                .unwrap_or_default(),
            ViewEvent::ToggleContrast => {
                self.high_contrast = !self.high_contrast;
                Vec::new()
            }
            ViewEvent::IncreaseFont => {
                self.font_scale = self.font_scale.increase();
                Vec::new()
            }
            ViewEvent::DecreaseFont => {
                self.font_scale = self.font_scale.decrease();
                Vec::new()
            }
            ViewEvent::ToggleHelp => {
                self.help_open = !self.help_open;
                Vec::new()
            }
            ViewEvent::Reset => {
                let effects = self.silence();
                self.result = None;
                self.error = None;
                effects
            }
            ViewEvent::Key { combo } => match keymap.lookup(&combo) {
                Some(shortcut) => self.apply_with(shortcut.event(), today, keymap),
                None => Vec::new(),
            },
        }
    }

    /// Cancel speech if it is running.
    fn silence(&mut self) -> Vec<Effect> {
        if self.speaking {
            self.speaking = false;
            vec![Effect::CancelSpeech]
        } else {
            Vec::new()
        }
    }
}
