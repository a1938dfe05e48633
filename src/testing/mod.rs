//! Testing utilities
//!
//! Scripted capture capabilities that stand in for a camera and a permission
//! prompt, so the bootstrap path can be exercised without hardware.

use crate::errors::CaptureError;
use crate::platform::MediaDevices;
use crate::types::{MediaStream, MediaStreamConstraints, VideoTrack};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// How a scripted permission prompt resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    Grant,
    Deny,
    NoDevice,
    DeviceBusy,
}

/// Track that stays live until stopped
#[derive(Debug)]
pub struct SyntheticTrack {
    label: String,
    live: AtomicBool,
}

impl SyntheticTrack {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            live: AtomicBool::new(true),
        }
    }

    pub fn stop(&self) {
        self.live.store(false, Ordering::SeqCst);
    }
}

impl VideoTrack for SyntheticTrack {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }
}

/// Capture capability answering every request with a fixed prompt response
#[derive(Debug)]
pub struct ScriptedMediaDevices {
    response: PromptResponse,
    requests: Mutex<Vec<MediaStreamConstraints>>,
    issued: Mutex<Vec<MediaStream>>,
}

impl ScriptedMediaDevices {
    pub fn new(response: PromptResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
            issued: Mutex::new(Vec::new()),
        }
    }

    pub fn granting() -> Arc<Self> {
        Arc::new(Self::new(PromptResponse::Grant))
    }

    pub fn denying() -> Arc<Self> {
        Arc::new(Self::new(PromptResponse::Deny))
    }

    /// Constraints of every request received so far
    pub fn requests(&self) -> Vec<MediaStreamConstraints> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Streams handed out on granted requests
    pub fn issued_streams(&self) -> Vec<MediaStream> {
        self.issued.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl MediaDevices for ScriptedMediaDevices {
    async fn get_user_media(
        &self,
        constraints: MediaStreamConstraints,
    ) -> Result<MediaStream, CaptureError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(constraints);
        }
        tokio::task::yield_now().await;

        match self.response {
            PromptResponse::Grant => {
                let stream = MediaStream::new(Arc::new(SyntheticTrack::new("Synthetic Camera")));
                if let Ok(mut issued) = self.issued.lock() {
                    issued.push(stream.clone());
                }
                Ok(stream)
            }
            PromptResponse::Deny => Err(CaptureError::AcquisitionFailed(
                "Permission denied".to_string(),
            )),
            PromptResponse::NoDevice => Err(CaptureError::AcquisitionFailed(
                "Requested device not found".to_string(),
            )),
            PromptResponse::DeviceBusy => Err(CaptureError::AcquisitionFailed(
                "Could not start video source".to_string(),
            )),
        }
    }
}
