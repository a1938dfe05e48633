//! Camera bootstrap handler
//!
//! On window load, requests a video-only stream from the navigator and binds it
//! to the video surface. Every failure is reduced to one diagnostic line on the
//! window console; nothing is retried or returned as an error.

use crate::config::BootstrapConfig;
use crate::diagnostics::WEBCAM_ACCESS_FAILED;
use crate::errors::CaptureError;
use crate::types::{BootstrapOutcome, MediaStreamConstraints};
use crate::window::{LoadHandler, Window};
use async_trait::async_trait;

/// Default id of the display surface
pub const DEFAULT_SURFACE_ID: &str = "video";

#[derive(Debug, Clone)]
pub struct CameraBootstrap {
    surface_id: String,
    diagnostic_message: String,
}

impl Default for CameraBootstrap {
    fn default() -> Self {
        Self {
            surface_id: DEFAULT_SURFACE_ID.to_string(),
            diagnostic_message: WEBCAM_ACCESS_FAILED.to_string(),
        }
    }
}

impl CameraBootstrap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &BootstrapConfig) -> Self {
        Self {
            surface_id: config.surface_id.clone(),
            diagnostic_message: config.diagnostic_message.clone(),
        }
    }

    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    pub fn diagnostic_message(&self) -> &str {
        &self.diagnostic_message
    }

    pub async fn run(&self, window: &Window) -> BootstrapOutcome {
        // Looked up before the capability check; only dereferenced on success.
        let surface = window.document().get_element_by_id(&self.surface_id);

        let Some(media_devices) = window.navigator().media_devices() else {
            log::debug!("No capture capability, skipping camera bootstrap");
            return BootstrapOutcome::Unsupported;
        };

        let bound = media_devices
            .get_user_media(MediaStreamConstraints::video_only())
            .await
            .and_then(|stream| {
                let surface = surface.ok_or_else(|| {
                    CaptureError::SurfaceMissing(self.surface_id.clone())
                })?;
                let info = stream.info();
                surface.set_src_object(Some(stream));
                Ok(info)
            });

        match bound {
            Ok(stream) => {
                log::info!("Bound stream {} to #{}", stream.id, self.surface_id);
                BootstrapOutcome::Bound { stream }
            }
            Err(e) => {
                log::debug!("Camera bootstrap failed: {}", e);
                window.console().log(&self.diagnostic_message);
                BootstrapOutcome::Failed
            }
        }
    }
}

#[async_trait]
impl LoadHandler for CameraBootstrap {
    async fn on_load(&self, window: &Window) -> BootstrapOutcome {
        self.run(window).await
    }
}
